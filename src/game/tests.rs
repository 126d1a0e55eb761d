#[cfg(test)]
mod tests {
    use crate::config::game::{BOARD_COLS, BOARD_ROWS};
    use crate::game::state::{GameState, Outcome};
    use crate::game::types::{Direction, Position, Side};

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Empty board with the given side to move.
    fn blank_state(turn: Side) -> GameState {
        let mut state = GameState::new();
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                state.board.clear(pos(row, col));
            }
        }
        state.turn = turn;
        state
    }

    fn put(state: &mut GameState, row: usize, col: usize, token: &str) {
        state.board.set(pos(row, col), token.parse().unwrap());
    }

    fn token_at(state: &GameState, row: usize, col: usize) -> Option<String> {
        state.board.get(pos(row, col)).map(|p| p.to_string())
    }

    #[test]
    fn test_starting_layout() {
        let state = GameState::new();
        assert_eq!(state.turn, Side::A);
        assert_eq!(state.board.count_side(Side::A), 5);
        assert_eq!(state.board.count_side(Side::B), 5);

        let row0: Vec<_> = (0..5).filter_map(|c| token_at(&state, 0, c)).collect();
        let row4: Vec<_> = (0..5).filter_map(|c| token_at(&state, 4, c)).collect();
        assert_eq!(row0, ["A-P1", "A-P2", "A-H1", "A-H2", "A-P3"]);
        assert_eq!(row4, ["B-P1", "B-P2", "B-H1", "B-H2", "B-P3"]);
        for row in 1..4 {
            for col in 0..5 {
                assert!(state.board.get(pos(row, col)).is_none());
            }
        }
    }

    #[test]
    fn test_pawn_forward_move_flips_turn() {
        let state = GameState::new();
        let (next, outcome) = state.apply_move(Side::A, pos(0, 0), Direction::Forward);

        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(next.turn, Side::B);
        assert_eq!(token_at(&next, 1, 0).as_deref(), Some("A-P1"));
        assert!(next.board.get(pos(0, 0)).is_none());
        // Input state untouched (copy-on-write).
        assert_eq!(token_at(&state, 0, 0).as_deref(), Some("A-P1"));
        assert_eq!(state.turn, Side::A);
    }

    #[test]
    fn test_b_side_forward_is_row_decreasing() {
        let mut state = blank_state(Side::B);
        put(&mut state, 4, 0, "B-P1");
        put(&mut state, 0, 0, "A-P1");

        let (next, outcome) = state.apply_move(Side::B, pos(4, 0), Direction::Forward);
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(token_at(&next, 3, 0).as_deref(), Some("B-P1"));
        assert_eq!(next.turn, Side::A);
    }

    #[test]
    fn test_out_of_bounds_rejected_and_idempotent() {
        let state = GameState::new();
        // A-P1 at (0,0): left and back both leave the board.
        let (after_left, outcome) = state.apply_move(Side::A, pos(0, 0), Direction::Left);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after_left, state);

        let (after_back, outcome) = state.apply_move(Side::A, pos(0, 0), Direction::Back);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(after_back, state);

        // Same illegal move twice: same unchanged state both times.
        let (again, outcome) = after_left.apply_move(Side::A, pos(0, 0), Direction::Left);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(again, state);
    }

    #[test]
    fn test_unsupported_direction_rejected() {
        let state = GameState::new();
        // Pawns and Hero1 never move diagonally, Hero2 never orthogonally.
        let (next, outcome) = state.apply_move(Side::A, pos(0, 0), Direction::ForwardRight);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next, state);

        let (next, outcome) = state.apply_move(Side::A, pos(0, 2), Direction::ForwardLeft);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next, state);

        let (next, outcome) = state.apply_move(Side::A, pos(0, 3), Direction::Forward);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next, state);
    }

    #[test]
    fn test_no_self_capture_at_destination() {
        // Hero1 at (0,2) moving R lands on own pawn at (0,4).
        let state = GameState::new();
        let (next, outcome) = state.apply_move(Side::A, pos(0, 2), Direction::Right);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next, state);
    }

    #[test]
    fn test_empty_or_enemy_origin_rejected() {
        let state = GameState::new();
        let (next, outcome) = state.apply_move(Side::A, pos(2, 2), Direction::Forward);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next, state);

        // Side A may not move a B piece.
        let (next, outcome) = state.apply_move(Side::A, pos(4, 0), Direction::Forward);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next, state);

        // Client-supplied origin outside the grid must not panic.
        let (next, outcome) = state.apply_move(Side::A, pos(7, 9), Direction::Forward);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(next, state);
    }

    #[test]
    fn test_pawn_captures_destination() {
        let mut state = blank_state(Side::A);
        put(&mut state, 2, 2, "A-P1");
        put(&mut state, 3, 2, "B-P2");
        put(&mut state, 4, 4, "B-P3");

        let (next, outcome) = state.apply_move(Side::A, pos(2, 2), Direction::Forward);
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(token_at(&next, 3, 2).as_deref(), Some("A-P1"));
        assert_eq!(next.board.count_side(Side::B), 1);
    }

    #[test]
    fn test_hero1_jump_captures_intermediate() {
        let mut state = blank_state(Side::A);
        put(&mut state, 2, 2, "A-H1");
        put(&mut state, 3, 2, "B-P1");
        put(&mut state, 4, 4, "B-P2");

        let (next, outcome) = state.apply_move(Side::A, pos(2, 2), Direction::Forward);
        assert_eq!(outcome, Outcome::Applied);
        assert!(next.board.get(pos(3, 2)).is_none());
        assert_eq!(token_at(&next, 4, 2).as_deref(), Some("A-H1"));
        assert!(next.board.get(pos(2, 2)).is_none());
        assert_eq!(next.turn, Side::B);
    }

    #[test]
    fn test_hero2_forward_left_jump_capture() {
        // Hero2 at (0,3) moves FL to (2,1); opposing pawn on the
        // intermediate cell (1,2) is captured.
        let mut state = blank_state(Side::A);
        put(&mut state, 0, 3, "A-H2");
        put(&mut state, 1, 2, "B-P1");
        put(&mut state, 4, 4, "B-P2");

        let (next, outcome) = state.apply_move(Side::A, pos(0, 3), Direction::ForwardLeft);
        assert_eq!(outcome, Outcome::Applied);
        assert!(next.board.get(pos(1, 2)).is_none());
        assert_eq!(token_at(&next, 2, 1).as_deref(), Some("A-H2"));
        assert_eq!(next.turn, Side::B);
    }

    #[test]
    fn test_same_side_intermediate_left_untouched() {
        let mut state = blank_state(Side::A);
        put(&mut state, 0, 0, "A-H1");
        put(&mut state, 1, 0, "A-P1");
        put(&mut state, 4, 4, "B-P1");

        let (next, outcome) = state.apply_move(Side::A, pos(0, 0), Direction::Forward);
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(token_at(&next, 1, 0).as_deref(), Some("A-P1"));
        assert_eq!(token_at(&next, 2, 0).as_deref(), Some("A-H1"));
    }

    #[test]
    fn test_capture_exclusivity() {
        // A jump changes only origin, intermediate and destination; every
        // other cell carries over unchanged.
        let mut state = blank_state(Side::A);
        put(&mut state, 1, 1, "A-H2");
        put(&mut state, 2, 2, "B-P1");
        put(&mut state, 3, 3, "B-P2");
        put(&mut state, 0, 4, "B-P3");
        put(&mut state, 4, 0, "A-P1");

        let (next, outcome) = state.apply_move(Side::A, pos(1, 1), Direction::ForwardRight);
        assert_eq!(outcome, Outcome::Applied);

        let mut expected = blank_state(Side::B);
        put(&mut expected, 3, 3, "A-H2");
        put(&mut expected, 0, 4, "B-P3");
        put(&mut expected, 4, 0, "A-P1");
        assert_eq!(next, expected);
    }

    #[test]
    fn test_win_when_last_opposing_piece_captured() {
        let mut state = blank_state(Side::A);
        put(&mut state, 2, 2, "A-P1");
        put(&mut state, 3, 2, "B-P1");

        let (next, outcome) = state.apply_move(Side::A, pos(2, 2), Direction::Forward);
        assert_eq!(outcome, Outcome::Win(Side::A));
        assert_eq!(next.board.count_side(Side::B), 0);
    }

    #[test]
    fn test_win_via_jump_capture() {
        let mut state = blank_state(Side::B);
        put(&mut state, 3, 3, "B-H2");
        put(&mut state, 2, 2, "A-P1");

        let (next, outcome) = state.apply_move(Side::B, pos(3, 3), Direction::ForwardLeft);
        assert_eq!(outcome, Outcome::Win(Side::B));
        assert_eq!(next.board.count_side(Side::A), 0);
        assert_eq!(token_at(&next, 1, 1).as_deref(), Some("B-H2"));
    }

    #[test]
    fn test_reset_state_matches_fresh_game() {
        assert_eq!(GameState::new(), GameState::default());
        assert_eq!(GameState::new().turn, Side::A);
    }

    #[test]
    fn test_piece_token_round_trip() {
        for token in ["A-P1", "A-P2", "A-P3", "A-H1", "A-H2", "B-P1", "B-H2"] {
            let piece: crate::game::types::Piece = token.parse().unwrap();
            assert_eq!(piece.to_string(), token);
        }
        assert!("C-P1".parse::<crate::game::types::Piece>().is_err());
        assert!("AP1".parse::<crate::game::types::Piece>().is_err());
        assert!("A-X9".parse::<crate::game::types::Piece>().is_err());
    }

    #[test]
    fn test_game_state_wire_shape() {
        let json = serde_json::to_value(GameState::new()).unwrap();
        assert_eq!(json["currentPlayer"], "A");
        assert_eq!(json["board"][0][0], "A-P1");
        assert_eq!(json["board"][0][2], "A-H1");
        assert_eq!(json["board"][2][2], serde_json::Value::Null);
        assert_eq!(json["board"][4][3], "B-H2");

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, GameState::new());
    }
}
