use word_notebook::command::{
    Command, CommandContext, CommandError, DispatchOutcome, SnapshotHistory, dispatch, dispatch_named,
};
use word_notebook::content::{Block, StructuredContent};
use word_notebook::selection::{Position, Selection};
use word_notebook::surface::{DocumentSurface, EditorSurface};

// Helper to create a surface holding two paragraphs
fn create_test_surface() -> DocumentSurface {
    DocumentSurface::with_content(StructuredContent::from_blocks(vec![
        Block::paragraph("rumah besar"),
        Block::paragraph("di tepi sungai"),
    ]))
}

fn select(surface: &mut DocumentSurface, from: (usize, usize), to: (usize, usize)) {
    surface.set_selection(Some(Selection::new(
        Position::new(from.0, from.1),
        Position::new(to.0, to.1),
    )));
}

#[test]
fn test_command_names_parse() {
    for command in Command::ALL {
        assert_eq!(command.name().parse::<Command>(), Ok(command));
    }
    assert_eq!("insertUnorderedList".parse::<Command>(), Ok(Command::BulletList));
    assert_eq!("quote".parse::<Command>(), Ok(Command::Blockquote));
    assert_eq!(
        "strike".parse::<Command>(),
        Err(CommandError::UnknownCommand("strike".to_string()))
    );
}

#[test]
fn test_content_commands_record_history() {
    let mut surface = create_test_surface();
    let mut history = SnapshotHistory::new();
    select(&mut surface, (0, 0), (0, 5));
    let mut ctx = CommandContext::new(&mut surface, &mut history);

    assert_eq!(dispatch(Command::Bold, &mut ctx), DispatchOutcome::Recorded);
    assert_eq!(dispatch(Command::Heading1, &mut ctx), DispatchOutcome::Recorded);
    assert_eq!(dispatch(Command::BulletList, &mut ctx), DispatchOutcome::Recorded);
    assert_eq!(
        ctx.surface.content().to_markup(),
        "<ul><li><strong>rumah</strong> besar</li></ul><p>di tepi sungai</p>"
    );
    assert_eq!(ctx.history.undo_len(), 3);
}

#[test]
fn test_same_block_format_twice_records_once() {
    let mut surface = create_test_surface();
    let mut history = SnapshotHistory::new();
    let mut ctx = CommandContext::new(&mut surface, &mut history);

    assert_eq!(dispatch(Command::Blockquote, &mut ctx), DispatchOutcome::Recorded);
    assert_eq!(dispatch(Command::Blockquote, &mut ctx), DispatchOutcome::Unchanged);
    assert_eq!(ctx.history.undo_len(), 1);
}

#[test]
fn test_highlight_without_selection_changes_nothing() {
    let mut surface = create_test_surface();
    let mut history = SnapshotHistory::new();
    select(&mut surface, (1, 3), (1, 3));
    let before = surface.snapshot();
    let mut ctx = CommandContext::new(&mut surface, &mut history);

    assert_eq!(dispatch(Command::Highlight, &mut ctx), DispatchOutcome::Unchanged);
    assert_eq!(ctx.surface.snapshot(), before);
    assert!(!ctx.history.can_undo());
}

#[test]
fn test_highlight_across_blocks_then_undo() {
    let mut surface = create_test_surface();
    let mut history = SnapshotHistory::new();
    let original = surface.snapshot();
    // The surface was opened with content already in place
    history.record_if_changed(&original);
    select(&mut surface, (0, 6), (1, 2));
    let mut ctx = CommandContext::new(&mut surface, &mut history);

    assert_eq!(dispatch(Command::Highlight, &mut ctx), DispatchOutcome::Recorded);
    assert_eq!(
        ctx.surface.content().to_markup(),
        r#"<p>rumah <span class="highlight">besar</span></p><p><span class="highlight">di</span> tepi sungai</p>"#
    );

    assert_eq!(dispatch(Command::Undo, &mut ctx), DispatchOutcome::Undone);
    assert_eq!(ctx.surface.snapshot(), original);
}

#[test]
fn test_horizontal_rule_and_numbered_list() {
    let mut surface = create_test_surface();
    let mut history = SnapshotHistory::new();
    select(&mut surface, (1, 14), (1, 14));
    let mut ctx = CommandContext::new(&mut surface, &mut history);

    assert_eq!(dispatch_named("hr", &mut ctx), Ok(DispatchOutcome::Recorded));
    assert_eq!(dispatch_named("numbered-list", &mut ctx), Ok(DispatchOutcome::Recorded));
    assert_eq!(
        ctx.surface.content().to_markup(),
        "<p>rumah besar</p><p>di tepi sungai</p><hr><ol><li></li></ol>"
    );
}

#[test]
fn test_unknown_name_is_rejected_without_touching_history() {
    let mut surface = create_test_surface();
    let mut history = SnapshotHistory::new();
    let mut ctx = CommandContext::new(&mut surface, &mut history);

    assert!(dispatch_named("justify", &mut ctx).is_err());
    assert!(!ctx.history.can_undo());
}

#[test]
fn test_undo_redo_are_not_recorded() {
    assert!(Command::Undo.is_history_operation());
    assert!(Command::Redo.is_history_operation());
    assert!(!Command::Highlight.is_history_operation());

    let mut surface = create_test_surface();
    let mut history = SnapshotHistory::new();
    let mut ctx = CommandContext::new(&mut surface, &mut history);
    assert_eq!(dispatch(Command::Undo, &mut ctx), DispatchOutcome::Unchanged);
    assert_eq!(dispatch(Command::Redo, &mut ctx), DispatchOutcome::Unchanged);
    assert_eq!(ctx.history.undo_len(), 0);
}
