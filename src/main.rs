mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use chess_base::game::ChessGame;

/// Select-and-move chess board driven from stdin.
#[derive(Parser, Debug)]
#[command(name = "chess_base", version)]
struct Args {
    /// FEN piece placement to start from instead of the standard position
    #[arg(long)]
    fen: Option<String>,

    /// 64-character state string to start from
    #[arg(long, conflicts_with = "fen")]
    state: Option<String>,

    /// Log filter, overrides RUST_LOG
    #[arg(long)]
    log: Option<String>,

    /// Play this many random moves, print the board and exit
    #[arg(long)]
    autoplay: Option<usize>,

    /// Seed for --autoplay
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn init_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let mut game = ChessGame::new();
    game.set_up_board();

    if let Some(fen) = &args.fen {
        game.load_fen(fen)?;
    }
    if let Some(state) = &args.state {
        game.set_state_string(state)?;
    }

    let mut cli = cli::Cli::new(game);
    match args.autoplay {
        Some(plies) => cli.autoplay(plies, args.seed),
        None => cli.cli_loop(),
    }

    Ok(())
}
