//! Tests for the snapshot history store.

use rewind_tictactoe::game::{
    GameHistory, GameStatus, Player, Position, SelectError, Square,
    invariants::{HistoryInvariants, InvariantSet},
};

fn play(history: &mut GameHistory, indices: &[usize]) {
    for &i in indices {
        history.select_cell(Position::from_index(i).expect("test index in range"));
    }
}

#[test]
fn test_turn_parity_from_index() {
    let mut history = GameHistory::new();
    assert_eq!(history.to_move(), Player::X);

    // Even current index means X moves next, odd means O.
    play(&mut history, &[0]);
    assert_eq!(
        history.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );

    play(&mut history, &[4]);
    assert_eq!(
        history.current_board().get(Position::Center),
        Square::Occupied(Player::O)
    );

    play(&mut history, &[8]);
    assert_eq!(
        history.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_adjacent_snapshots_differ_by_one_mark() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1, 4]);

    for pair in history.snapshots().windows(2) {
        let diffs: Vec<_> = pair[0]
            .squares()
            .iter()
            .zip(pair[1].squares().iter())
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(diffs.len(), 1);
        let (before, after) = diffs[0];
        assert_eq!(*before, Square::Empty);
        assert!(matches!(after, Square::Occupied(_)));
    }

    assert!(HistoryInvariants::check_all(&history).is_ok());
}

#[test]
fn test_select_fails_closed_on_occupied() {
    let mut history = GameHistory::new();
    play(&mut history, &[4]);

    let before = history.clone();
    history.select_cell(Position::Center);

    assert_eq!(history, before);
}

#[test]
fn test_select_fails_closed_once_decided() {
    let mut history = GameHistory::new();
    // X takes the top row: 0,3,1,4,2 lands X on {0,1,2}.
    play(&mut history, &[0, 3, 1, 4, 2]);
    assert_eq!(history.status(), GameStatus::Won(Player::X));

    let before = history.clone();
    history.select_cell(Position::BottomLeft);
    assert_eq!(history, before);

    assert_eq!(
        history.try_select(Position::BottomLeft),
        Err(SelectError::GameOver)
    );
}

#[test]
fn test_rewind_then_play_truncates_future() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1, 4]);
    assert_eq!(history.snapshots().len(), 5);

    history.jump_to(2);
    play(&mut history, &[8]);

    // Snapshots 3 and 4 are gone; the new move sits at index 3.
    assert_eq!(history.snapshots().len(), 4);
    assert_eq!(history.current_index(), 3);
    assert_eq!(
        history.current_board().get(Position::BottomRight),
        Square::Occupied(Player::X)
    );
    assert!(history.current_board().is_empty(Position::Center));

    assert!(HistoryInvariants::check_all(&history).is_ok());
}

#[test]
fn test_jump_onto_decided_state_is_legal() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1, 4, 2]);

    history.jump_to(0);
    assert_eq!(history.status(), GameStatus::InProgress(Player::X));

    history.jump_to(5);
    assert_eq!(history.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_win_scenario_top_row() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1, 4, 2]);

    let view = history.current_view();
    assert_eq!(view.status, GameStatus::Won(Player::X));
    assert_eq!(view.status.to_string(), "Winner: X");
    for pos in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
        assert_eq!(view.board.get(pos), Square::Occupied(Player::X));
    }
    assert_eq!(view.moves.len(), 6);
}

#[test]
fn test_draw_scenario_fills_board_without_line() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let view = history.current_view();
    assert_eq!(view.board.occupied_count(), 9);
    assert_eq!(view.status, GameStatus::Draw);
    assert_eq!(view.status.to_string(), "Draw");

    // Draw is full-board-and-no-winner; a further select is a no-op.
    let before = history.clone();
    history.select_cell(Position::Center);
    assert_eq!(history, before);
}

#[test]
fn test_view_move_list_labels_and_indices() {
    let mut history = GameHistory::new();
    play(&mut history, &[4, 0]);
    history.jump_to(1);

    let view = history.current_view();
    assert_eq!(view.moves[0].label, "Go to game start");
    assert_eq!(view.moves[1].label, "Go to move #1");
    assert_eq!(view.moves[2].label, "Go to move #2");
    assert_eq!(
        view.moves.iter().map(|m| m.index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    // The view shows the jumped-to snapshot, not the latest one.
    assert!(view.board.is_empty(Position::TopLeft));
    assert_eq!(view.board.get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_history_survives_json_round_trip() {
    let mut history = GameHistory::new();
    play(&mut history, &[0, 3, 1]);
    history.jump_to(2);

    let json = serde_json::to_string(&history).expect("serialize");
    let restored: GameHistory = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, history);
    assert_eq!(restored.current_index(), 2);
    assert_eq!(restored.to_move(), Player::X);
}
