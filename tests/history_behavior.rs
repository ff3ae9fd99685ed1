use word_notebook::command::{Command, CommandContext, DispatchOutcome, SnapshotHistory, dispatch};
use word_notebook::content::{Block, StructuredContent};
use word_notebook::state::EditorState;
use word_notebook::surface::{DocumentSurface, EditorSurface};

fn state_with(text: &str) -> EditorState {
    EditorState::capture(&StructuredContent::from_blocks(vec![Block::paragraph(text)]))
}

// Types `text` and lets the content-changed hook record it
fn type_text(surface: &mut DocumentSurface, history: &mut SnapshotHistory, text: &str) {
    surface.insert_text(text);
    let mut ctx = CommandContext::new(surface, history);
    assert!(ctx.record());
}

#[test]
fn test_undo_all_restores_empty_and_redo_all_restores_last() {
    let mut surface = DocumentSurface::new();
    let mut history = SnapshotHistory::new();
    for word in ["a", "b", "c", "d", "e"] {
        type_text(&mut surface, &mut history, word);
    }
    let last = surface.snapshot();
    assert_eq!(surface.content().plain_text(), "abcde");

    let mut ctx = CommandContext::new(&mut surface, &mut history);
    for _ in 0..5 {
        assert_eq!(dispatch(Command::Undo, &mut ctx), DispatchOutcome::Undone);
    }
    assert_eq!(ctx.surface.snapshot(), EditorState::empty());
    assert_eq!(dispatch(Command::Undo, &mut ctx), DispatchOutcome::Unchanged);

    for _ in 0..5 {
        assert_eq!(dispatch(Command::Redo, &mut ctx), DispatchOutcome::Redone);
    }
    assert_eq!(ctx.surface.snapshot(), last);
    assert_eq!(dispatch(Command::Redo, &mut ctx), DispatchOutcome::Unchanged);
}

#[test]
fn test_each_undo_steps_back_one_visible_state() {
    let mut surface = DocumentSurface::new();
    let mut history = SnapshotHistory::new();
    type_text(&mut surface, &mut history, "ru");
    type_text(&mut surface, &mut history, "mah");

    let mut ctx = CommandContext::new(&mut surface, &mut history);
    dispatch(Command::Undo, &mut ctx);
    assert_eq!(ctx.surface.content().plain_text(), "ru");
    dispatch(Command::Undo, &mut ctx);
    assert_eq!(ctx.surface.content().plain_text(), "");
    dispatch(Command::Redo, &mut ctx);
    assert_eq!(ctx.surface.content().plain_text(), "ru");
}

#[test]
fn test_recording_same_state_twice_does_not_grow_history() {
    let mut history = SnapshotHistory::new();
    let state = state_with("sama");

    assert!(history.record_if_changed(&state));
    let depth = history.undo_len();
    assert!(!history.record_if_changed(&state));
    assert_eq!(history.undo_len(), depth);
}

#[test]
fn test_recording_empty_state_on_fresh_history_is_noop() {
    let mut history = SnapshotHistory::new();
    assert!(!history.record_if_changed(&EditorState::empty()));
    assert!(!history.can_undo());
}

#[test]
fn test_new_edit_after_undo_clears_redo() {
    let mut history = SnapshotHistory::new();
    let first = state_with("satu");
    let second = state_with("dua");
    history.record_if_changed(&first);
    history.record_if_changed(&second);

    let restored = history.undo(&second).unwrap();
    assert_eq!(restored, first);
    assert!(history.can_redo());

    // applying the undone state re-fires the content hook with the same snapshot
    assert!(!history.record_if_changed(&restored));
    assert!(history.can_redo());

    assert!(history.record_if_changed(&state_with("tiga")));
    assert!(!history.can_redo());
    assert_eq!(history.redo(&state_with("tiga")), None);
}

#[test]
fn test_capacity_evicts_oldest_snapshots() {
    let mut history = SnapshotHistory::new();
    let states: Vec<EditorState> = (1..=60).map(|i| state_with(&format!("keadaan {i}"))).collect();
    for state in &states {
        history.record_if_changed(state);
    }
    assert_eq!(history.undo_len(), 50);

    let mut current = states[59].clone();
    let mut undone = 0;
    while let Some(previous) = history.undo(&current) {
        current = previous;
        undone += 1;
    }
    assert_eq!(undone, 50);
    // Each undo entry holds the state before a change, so 60 records push
    // the empty start plus states 1..=59. Keeping 50 drops the empty start
    // and states 1..=9; the 10th state is the oldest one still reachable.
    // This is what lets 50 undos after 50 edits land on the empty document.
    assert_eq!(current, states[9]);
    assert_ne!(current, EditorState::empty());
}

#[test]
fn test_redo_respects_capacity() {
    let mut history = SnapshotHistory::with_capacity(2);
    let states: Vec<EditorState> = (1..=3).map(|i| state_with(&i.to_string())).collect();
    for state in &states {
        history.record_if_changed(state);
    }
    assert_eq!(history.undo_len(), 2);

    let back = history.undo(&states[2]).unwrap();
    assert_eq!(back, states[1]);
    let forward = history.redo(&back).unwrap();
    assert_eq!(forward, states[2]);
    assert_eq!(history.undo_len(), 2);
    assert_eq!(history.last_recorded(), &states[2]);
}

#[test]
fn test_undo_and_redo_on_empty_history_are_noops() {
    let mut history = SnapshotHistory::new();
    let current = state_with("x");
    assert_eq!(history.undo(&current), None);
    assert_eq!(history.redo(&current), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}
