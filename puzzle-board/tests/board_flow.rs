use puzzle_board::{Difficulty, DropOutcome, PuzzleBoard};

#[test]
fn new_board_has_one_tile_per_slot_index() {
    for difficulty in Difficulty::ALL {
        let board = PuzzleBoard::new(difficulty, 42);
        let n = board.tile_count();
        assert_eq!(n, difficulty.grid_size() * difficulty.grid_size());
        assert_eq!(board.tray_len(), n);
        assert!(!board.is_complete());

        // Correct indices of the tray form the full set 0..n with no
        // duplicates, and nothing starts placed.
        let mut indices: Vec<usize> = board.tray().map(|t| t.correct_index).collect();
        assert!(board.tray().all(|t| !t.placed));
        indices.sort_unstable();
        assert_eq!(indices, (0..n).collect::<Vec<_>>());

        for slot in 0..n {
            assert!(board.slot(slot).is_none());
        }
    }
}

#[test]
fn tray_order_is_reproducible_per_seed() {
    let order = |seed| -> Vec<u32> {
        PuzzleBoard::new(Difficulty::Hard, seed)
            .tray()
            .map(|t| t.id)
            .collect()
    };
    assert_eq!(order(9), order(9));
    // Repeated fresh boards should not all come out in solved order.
    let identity: Vec<u32> = (0..16).collect();
    assert!((0..32).any(|seed| order(seed) != identity));
}

#[test]
fn correct_drop_is_accepted_and_leaves_the_tray() {
    let mut board = PuzzleBoard::new(Difficulty::Medium, 1);
    let outcome = board.attempt_place(4, 4);
    assert_eq!(outcome, DropOutcome::Placed);
    assert!(outcome.accepted());
    assert_eq!(board.tray_len(), 8);
    assert_eq!(board.slot(4).map(|t| t.id), Some(4));
    assert!(board.tray().all(|t| t.id != 4));
}

#[test]
fn wrong_slot_is_rejected_without_state_change() {
    let mut board = PuzzleBoard::new(Difficulty::Medium, 1);
    assert_eq!(board.attempt_place(0, 1), DropOutcome::Rejected);
    assert_eq!(board.tray_len(), 9);
    assert!(board.slot(1).is_none());
    assert!(!board.tile(0).unwrap().placed);
}

#[test]
fn occupied_slot_and_repeat_placement_are_rejected() {
    let mut board = PuzzleBoard::new(Difficulty::Easy, 5);
    assert_eq!(board.attempt_place(2, 2), DropOutcome::Placed);
    // Same tile again: it is already placed.
    assert_eq!(board.attempt_place(2, 2), DropOutcome::Rejected);
    assert_eq!(board.tray_len(), 3);
    assert_eq!(board.slot(2).map(|t| t.id), Some(2));
}

#[test]
fn out_of_range_inputs_are_rejected() {
    let mut board = PuzzleBoard::new(Difficulty::Easy, 5);
    assert_eq!(board.attempt_place(99, 0), DropOutcome::Rejected);
    assert_eq!(board.attempt_place(0, 99), DropOutcome::Rejected);
    assert_eq!(board.tray_len(), 4);
}

#[test]
fn completion_is_order_independent_and_reported_once() {
    // Fill the board from the last slot backwards.
    let mut board = PuzzleBoard::new(Difficulty::Medium, 3);
    let n = board.tile_count();
    for slot in (1..n).rev() {
        assert_eq!(board.attempt_place(slot as u32, slot), DropOutcome::Placed);
        assert!(!board.is_complete());
    }
    assert_eq!(board.attempt_place(0, 0), DropOutcome::Completed);
    assert!(board.is_complete());
    assert_eq!(board.tray_len(), 0);

    // No second completion signal, whatever is attempted afterwards.
    assert_eq!(board.attempt_place(0, 0), DropOutcome::Rejected);
    assert_eq!(board.attempt_place(3, 3), DropOutcome::Rejected);
    assert!(board.is_complete());
}

#[test]
fn reconstruction_fully_resets_the_puzzle() {
    let mut board = PuzzleBoard::new(Difficulty::Easy, 8);
    for slot in 0..board.tile_count() {
        board.attempt_place(slot as u32, slot);
    }
    assert!(board.is_complete());

    // New subject or difficulty means a brand new board.
    let board = PuzzleBoard::new(Difficulty::Hard, 9);
    assert!(!board.is_complete());
    assert_eq!(board.tray_len(), 16);
    assert!(board.tray().all(|t| !t.placed));
}

// The worked example: a 2x2 board with tiles 0-3.
#[test]
fn two_by_two_walkthrough() {
    let mut board = PuzzleBoard::new(Difficulty::Easy, 0);
    assert_eq!(board.attempt_place(2, 2), DropOutcome::Placed);
    assert_eq!(board.tray_len(), 3);
    assert_eq!(board.attempt_place(2, 2), DropOutcome::Rejected);
    assert_eq!(board.attempt_place(0, 1), DropOutcome::Rejected);

    assert_eq!(board.attempt_place(0, 0), DropOutcome::Placed);
    assert_eq!(board.attempt_place(1, 1), DropOutcome::Placed);
    assert_eq!(board.attempt_place(3, 3), DropOutcome::Completed);
    assert!(board.is_complete());
}
