use ply_chess::engines::engine_random::RandomEngine;
use ply_chess::engines::engine_trait::Engine;
use ply_chess::move_generation::legal_move_checks::is_checkmate;
use ply_chess::move_generation::legal_move_generator::LegalMoveGenerator;
use ply_chess::move_generation::perft::perft;
use ply_chess::utils::algebraic::algebraic_to_position;
use ply_chess::{Board, ChessErrors, ChessGame, Color, Piece, PieceKind, Position};

fn square(name: &str) -> Position {
    algebraic_to_position(name).expect("test square should parse")
}

fn play(game: &mut ChessGame, identifiers: &[&str]) {
    for identifier in identifiers {
        game.try_make_move(identifier)
            .unwrap_or_else(|err| panic!("{identifier} should be legal: {err}"));
    }
}

#[test]
fn fools_mate_ends_the_game() {
    let mut game = ChessGame::new_game().expect("new game should build");
    play(&mut game, &["f3", "e5", "g4", "Qh4#"]);

    assert!(is_checkmate(game.board(), Color::White).expect("board has both kings"));
    assert_eq!(game.is_checkmate(), Ok(true));
    assert_eq!(game.is_stalemate(), Ok(false));
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Ok(Some(Color::Black)));
    assert!(game.get_legal_moves().is_empty());
}

#[test]
fn lone_king_boxed_in_by_rooks_is_stalemate() {
    let board = Board::from_pieces([
        Piece::new(PieceKind::King, Color::Black, square("a8")),
        Piece::new(PieceKind::Rook, Color::White, square("b1")),
        Piece::new(PieceKind::Rook, Color::White, square("h7")),
        Piece::new(PieceKind::King, Color::White, square("e1")),
    ]);
    let game = ChessGame::from_board(board, Color::Black, None).expect("board should load");

    assert!(game.get_legal_moves().is_empty());
    assert_eq!(game.is_check(), Ok(false));
    assert_eq!(game.is_stalemate(), Ok(true));
    assert_eq!(game.is_checkmate(), Ok(false));
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Ok(None));
}

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut game = ChessGame::new_game().expect("new game should build");
    play(&mut game, &["e4", "a6", "e5", "d5"]);

    assert!(game.legal_moves().contains("xd6 e.p."));
    let destinations = game.get_legal_destinations_for_piece(square("e5"));
    assert!(destinations.contains(&square("d6")));

    play(&mut game, &["xd6 e.p."]);
    let board = game.board();
    assert_eq!(board.get(square("d5")), None);
    assert_eq!(
        board.get(square("d6")).map(|p| (p.kind, p.color)),
        Some((PieceKind::Pawn, Color::White))
    );
    assert_eq!(board.piece_count(), 31);
}

#[test]
fn en_passant_expires_after_one_move() {
    let mut game = ChessGame::new_game().expect("new game should build");
    play(&mut game, &["e4", "a6", "e5", "d5", "Nf3", "Nf6"]);
    assert!(!game
        .get_legal_moves()
        .iter()
        .any(|identifier| identifier.ends_with("e.p.")));
}

#[test]
fn both_castles_available_on_open_back_rank() {
    let snapshot = "br-oo-oo-oo-bk-oo-oo-br
bp-bp-bp-bp-bp-bp-bp-bp
oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-oo-oo-oo-oo-oo-oo
wp-wp-wp-wp-wp-wp-wp-wp
wr-oo-oo-oo-wk-oo-oo-wr";
    let mut game = ChessGame::from_snapshot(snapshot, Color::White).expect("snapshot should load");

    assert!(game.legal_moves().contains("O-O"));
    assert!(game.legal_moves().contains("O-O-O"));

    let king_targets = game.get_legal_destinations_for_piece(square("e1"));
    assert!(king_targets.contains(&square("g1")));
    assert!(king_targets.contains(&square("c1")));
    let rook_targets = game.get_legal_destinations_for_piece(square("h1"));
    assert!(!rook_targets.contains(&square("e1")));

    play(&mut game, &["O-O"]);
    let board = game.board();
    assert_eq!(board.get(square("g1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(board.get(square("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(board.get(square("h1")), None);

    assert!(game.legal_moves().contains("O-O"));
    assert!(game.legal_moves().contains("O-O-O"));
}

#[test]
fn castling_in_a_real_opening() {
    let mut game = ChessGame::new_game().expect("new game should build");
    play(&mut game, &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"]);
    assert!(game.legal_moves().contains("O-O"));
    assert!(!game.legal_moves().contains("O-O-O"));

    play(&mut game, &["Ke2", "Nf6", "Ke1", "d6"]);
    assert!(
        !game.legal_moves().contains("O-O"),
        "a king that has moved may not castle"
    );
}

#[test]
fn undo_walks_back_to_the_start() {
    let mut game = ChessGame::new_game().expect("new game should build");
    play(&mut game, &["d4", "d5", "c4", "xc4"]);
    assert_eq!(game.turn(), 3);
    assert_eq!(game.history_len(), 4);

    for _ in 0..4 {
        game.undo_move().expect("history should not be empty yet");
    }
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.current_player(), Color::White);
    assert_eq!(game.turn(), 1);
    assert_eq!(game.undo_move(), Err(ChessErrors::EmptyHistory));
}

#[test]
fn rejected_move_keeps_state() {
    let mut game = ChessGame::new_game().expect("new game should build");
    let before = game.state().clone();
    assert_eq!(game.make_move("Nf6"), Ok(false));
    assert_eq!(game.make_move("e9"), Ok(false));
    assert_eq!(game.state(), &before);
}

#[test]
fn perft_on_en_passant_pin_position() {
    let snapshot = "oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-bp-oo-oo-oo-oo-oo
oo-oo-oo-bp-oo-oo-oo-oo
wk-wp-oo-oo-oo-oo-oo-br
oo-wr-oo-oo-oo-bp-oo-bk
oo-oo-oo-oo-oo-oo-oo-oo
oo-oo-oo-oo-wp-oo-wp-oo
oo-oo-oo-oo-oo-oo-oo-oo";
    let board = Board::from_snapshot(snapshot).expect("snapshot should parse");
    for (depth, nodes) in [(1u8, 14usize), (2, 191), (3, 2812)] {
        let counts = perft(&LegalMoveGenerator, &board, Color::White, None, depth)
            .expect("perft should succeed");
        assert_eq!(counts.nodes, nodes, "depth {depth}");
    }
}

#[test]
fn random_games_stay_consistent() {
    for seed in 0..4u64 {
        let mut game = ChessGame::new_game().expect("new game should build");
        let mut engine = RandomEngine::seeded(seed);
        for _ in 0..40 {
            let Some(identifier) = engine
                .choose_move(game.state())
                .expect("engine should choose")
                .best_move
            else {
                break;
            };
            assert_eq!(game.make_move(&identifier), Ok(true), "{identifier}");

            let board = game.board();
            assert!(board.king_position(Color::White).is_ok());
            assert!(board.king_position(Color::Black).is_ok());
            let snapshot = board.to_snapshot();
            let reparsed = Board::from_snapshot(&snapshot).expect("snapshot should parse");
            assert_eq!(reparsed.to_snapshot(), snapshot);
        }
    }
}

#[test]
fn snapshot_drops_has_moved_for_pieces_back_home() {
    let mut game = ChessGame::new_game().expect("new game should build");
    for identifier in ["Nf3", "Nf6", "Ng1", "Ng8"] {
        assert_eq!(game.make_move(identifier), Ok(true), "{identifier}");
    }

    let board = game.board();
    assert!(board
        .get(square("g1"))
        .expect("knight should be back on g1")
        .has_moved);
    assert_eq!(board.to_snapshot(), Board::standard().to_snapshot());

    let reparsed = Board::from_snapshot(&board.to_snapshot()).expect("snapshot should parse");
    assert_eq!(reparsed, Board::standard());
    assert_ne!(&reparsed, board);
}
