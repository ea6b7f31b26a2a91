use rand::{Rng, SeedableRng, rngs::SmallRng};

use chess_base::chess::*;
use chess_base::error::BoardError;
use chess_base::game::{ChessGame, Grid, STARTPOS_FEN, Turn};

const START_STATE: &str =
    "RNBQKBNRPPPPPPPP00000000000000000000000000000000pppppppprnbqkbnr";

fn sq(name: &str) -> Square {
    parse_square(name).unwrap()
}

#[test]
fn tags_round_trip_for_every_piece() {
    for color in [Color::White, Color::Black] {
        for kind in PIECE_TYPES {
            let piece = ChessPiece::new(kind, color);
            assert_eq!(ChessPiece::from_tag(piece.to_tag()), Some(piece));
            assert_eq!(ChessPiece::from_notation(piece.to_notation()), Some(piece));
        }
    }

    assert_eq!(ChessPiece::new(PieceType::Pawn, Color::White).to_tag(), 1);
    assert_eq!(ChessPiece::new(PieceType::King, Color::White).to_tag(), 6);
    assert_eq!(ChessPiece::new(PieceType::Pawn, Color::Black).to_tag(), 129);
    assert_eq!(ChessPiece::new(PieceType::King, Color::Black).to_tag(), 134);

    for tag in [0u8, 7, 128, 135, 255] {
        assert_eq!(ChessPiece::from_tag(tag), None, "tag {tag}");
    }
}

#[test]
fn notation_letters() {
    assert_eq!(
        ChessPiece::new(PieceType::Knight, Color::White).to_notation(),
        'N'
    );
    assert_eq!(
        ChessPiece::new(PieceType::Queen, Color::Black).to_notation(),
        'q'
    );
    assert_eq!(ChessPiece::from_notation('x'), None);
    assert_eq!(ChessPiece::from_notation('0'), None);
}

#[test]
fn color_rows_derive_from_forward() {
    assert_eq!(Color::White.forward(), 1);
    assert_eq!(Color::Black.forward(), -1);
    assert_eq!(Color::White.home_rank(), 1);
    assert_eq!(Color::Black.home_rank(), 6);
    assert_eq!(Color::White.toggle(), Color::Black);
    assert_eq!(Color::from_index(2), None);
}

#[test]
fn square_names() {
    assert_eq!(sq("a1"), 0);
    assert_eq!(sq("h1"), 7);
    assert_eq!(sq("e2"), 12);
    assert_eq!(sq("h8"), 63);
    assert_eq!(square_name(12), "e2");
    assert_eq!(square_name(60), "e8");

    for bad in ["", "e", "i1", "a9", "e22", "E2"] {
        assert!(
            matches!(parse_square(bad), Err(BoardError::InvalidSquareName { .. })),
            "{bad}"
        );
    }
}

#[test]
fn start_position_state_string() {
    let mut game = ChessGame::new();
    game.set_up_board();

    assert_eq!(game.state_string(), START_STATE);
    assert_eq!(game.initial_state_string(), START_STATE);
}

#[test]
fn state_string_round_trips() {
    let mut game = ChessGame::new();
    let state = "0000K000000P00000000n000000000000000000b00000000000000000000k00q";
    game.set_state_string(state).unwrap();
    assert_eq!(game.state_string(), state);

    let piece = game.grid().piece_at(sq("e1")).unwrap();
    assert_eq!(piece, ChessPiece::new(PieceType::King, Color::White));
    assert_eq!(
        game.grid().piece_at(63),
        Some(ChessPiece::new(PieceType::Queen, Color::Black))
    );
}

#[test]
fn rejected_state_leaves_board_alone() {
    let mut game = ChessGame::new();
    game.set_up_board();

    assert_eq!(
        game.set_state_string(&START_STATE[..63]),
        Err(BoardError::InvalidStateLength { length: 63 })
    );

    let mut bad = START_STATE.to_string();
    bad.replace_range(20..21, "x");
    assert_eq!(
        game.set_state_string(&bad),
        Err(BoardError::InvalidStateCharacter {
            character: 'x',
            square: 20
        })
    );

    assert_eq!(game.state_string(), START_STATE);
}

#[test]
fn fen_placement_errors() {
    let turn = Turn::new();
    let mut grid = Grid::new(80.0);
    let owner = |color: Color| turn.player_for(color);

    assert_eq!(grid.load_fen("", owner), Err(BoardError::EmptyFen));
    assert_eq!(
        grid.load_fen("8/8/8/8/8/8/8", owner),
        Err(BoardError::IncompletePlacement)
    );
    assert_eq!(
        grid.load_fen("8/8/8/8/8/8/8/8/8", owner),
        Err(BoardError::TooManyRanks)
    );
    assert_eq!(
        grid.load_fen("9/8/8/8/8/8/8/8", owner),
        Err(BoardError::FileOutOfBounds { rank: 7 })
    );
    assert_eq!(
        grid.load_fen("8/8/8/8/8/8/8/7x", owner),
        Err(BoardError::InvalidFenCharacter { character: 'x' })
    );
    assert_eq!(
        grid.load_fen("7/8/8/8/8/8/8/8", owner),
        Err(BoardError::IncompletePlacement)
    );
    assert_eq!(
        grid.load_fen("08/8/8/8/8/8/8/8", owner),
        Err(BoardError::InvalidFenCharacter { character: '0' })
    );
    assert_eq!(
        grid.load_fen("4k3/8/8/8/8/8/8/4K03", owner),
        Err(BoardError::InvalidFenCharacter { character: '0' })
    );
}

#[test]
fn fen_ignores_trailing_fields() {
    let turn = Turn::new();
    let mut grid = Grid::new(80.0);
    grid.load_fen(
        &format!("{STARTPOS_FEN} w KQkq - 0 1"),
        |color| turn.player_for(color),
    )
    .unwrap();

    assert_eq!(grid.state_string(), START_STATE);
}

#[test]
fn snapshot_excludes_one_square() {
    let mut game = ChessGame::new();
    game.set_up_board();

    let full = Snapshot::build(game.grid(), None);
    assert_eq!(full.white.count(), 16);
    assert_eq!(full.black.count(), 16);
    assert!((full.white & full.black).is_empty());
    assert_eq!(full.all, full.white | full.black);
    assert_eq!(full.white.value(), RANKS[0] | RANKS[1]);

    let without = Snapshot::build(game.grid(), Some(sq("e2")));
    assert_eq!(without.white.count(), 15);
    assert!(!without.all.contains(sq("e2")));
    assert!(without.empty().contains(sq("e2")));
    assert_eq!(without.all, without.white | without.black);
}

struct Offboard;

impl SquareIndex for Offboard {
    fn square_index(&self) -> Option<Square> {
        None
    }
}

#[test]
fn unmappable_holder_has_no_moves() {
    let mut game = ChessGame::new();
    game.set_up_board();
    let pawn = ChessPiece::new(PieceType::Pawn, Color::White);

    let mut query = MoveQuery::new();
    assert!(query
        .valid_moves_for_piece(game.grid(), pawn, &Offboard)
        .is_empty());
    assert!(query
        .valid_moves_for_piece(game.grid(), pawn, &64u8)
        .is_empty());

    let e2 = game.grid().square_by_index(sq("e2")).unwrap();
    assert_eq!(query.valid_moves_for_piece(game.grid(), pawn, e2).len(), 2);
}

#[test]
fn query_buffer_is_replaced_not_appended() {
    let mut game = ChessGame::new();
    game.set_up_board();
    let mut query = MoveQuery::new();
    let knight = ChessPiece::new(PieceType::Knight, Color::White);

    assert_eq!(
        query.valid_moves_for_piece(game.grid(), knight, &sq("g1")).len(),
        2
    );
    assert_eq!(
        query.valid_moves_for_piece(game.grid(), knight, &sq("b1")).len(),
        2
    );
}

#[test]
fn grid_collaborator_surface() {
    let mut game = ChessGame::new();
    game.set_up_board();

    let corner = game.grid().square(0, 0).unwrap();
    assert_eq!(corner.position(), (40.0, 600.0));
    assert_eq!(corner.square_index(), Some(0));
    assert!(game.grid().square(8, 0).is_none());
    assert!(game.grid().square(0, -1).is_none());

    assert_eq!(game.owner_at(4, 0).map(|p| p.number()), Some(0));
    assert_eq!(game.owner_at(4, 7).map(|p| p.number()), Some(1));
    assert_eq!(game.owner_at(4, 4), None);
    assert_eq!(game.owner_at(9, 0), None);

    let bit = game.piece_for_player(1, PieceType::Knight).unwrap();
    assert_eq!(bit.piece, ChessPiece::new(PieceType::Knight, Color::Black));
    assert_eq!(bit.owner.number(), 1);
    assert!(game.piece_for_player(2, PieceType::Knight).is_none());

    assert!(game.check_for_winner().is_none());
    assert!(!game.check_for_draw());
}

#[test]
fn render_marks_highlights() {
    let mut game = ChessGame::new();
    game.set_up_board();
    game.click(sq("e2"));

    let rendered = game.grid().render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], "8 r n b q k b n r");
    assert_eq!(lines[4], "4 . . . . * . . .");
    assert_eq!(lines[5], "3 . . . . * . . .");
    assert_eq!(lines[7], "1 R N B Q K B N R");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn random_reachable_positions_round_trip() {
    for seed in 0..8u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = ChessGame::new();
        game.set_up_board();

        for _ in 0..40 {
            let movable = game.movable_squares();
            if movable.is_empty() {
                break;
            }
            let source = movable[rng.random_range(0..movable.len())];
            game.click(source);
            let targets: Vec<Square> = game.grid().highlighted().ones_iter().collect();
            let target = targets[rng.random_range(0..targets.len())];
            assert!(game.click(target).is_move());

            let state = game.state_string();
            let mut copy = ChessGame::new();
            copy.set_state_string(&state).unwrap();
            assert_eq!(copy.state_string(), state);
            assert_eq!(state.len(), 64);
        }
    }
}
