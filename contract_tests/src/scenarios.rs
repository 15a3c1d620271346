//! End-to-end command-line and caret scenarios

use crate::session::SimSession;
use edit_types::{CommandKey, CommandOrigin, RunResult, VISUAL_RANGE_SEED};
use host_caps::{CaretCap, CaretDisplay, SelectionCap, SelectionSpan, TextLocation};
use services_command_line::ProcessOutcome;

#[test]
fn test_single_character_command_dispatches() {
    let mut session = SimSession::new();
    session.enter_command_line(CommandOrigin::Plain);
    session.type_str("1");
    let outcome = session.press(CommandKey::Enter);

    assert_eq!(outcome, ProcessOutcome::Executed(RunResult::Completed));
    assert_eq!(session.runner.borrow().commands(), &["1".to_string()]);
    assert_eq!(session.processor.command(), "");
}

#[test]
fn test_backspace_edits_accumulated_text() {
    let mut session = SimSession::new();
    session.enter_command_line(CommandOrigin::Plain);
    session.type_str("foo");
    let outcome = session.press(CommandKey::Backspace);

    assert_eq!(outcome, ProcessOutcome::Pending);
    assert_eq!(session.processor.command(), "fo");
    assert_eq!(session.runner.borrow().run_count(), 0);
}

#[test]
fn test_visual_entry_seeds_and_prefixes() {
    let mut session = SimSession::new();
    session.enter_command_line(CommandOrigin::FromVisual);
    assert_eq!(session.processor.command(), VISUAL_RANGE_SEED);

    session.type_str("a");
    session.press(CommandKey::Enter);
    assert_eq!(session.runner.borrow().last_command(), Some("'<,'>a"));
}

#[test]
fn test_escape_cleans_up_live_selection() {
    let mut session = SimSession::new();
    let span = SelectionSpan::new(TextLocation::new(1, 1), TextLocation::new(2, 3));
    session.selection.borrow_mut().select(span);

    session.enter_command_line(CommandOrigin::Plain);
    let outcome = session.press(CommandKey::Escape);

    assert_eq!(outcome, ProcessOutcome::Cancelled);
    assert!(session.selection.borrow().is_empty());
    assert_eq!(session.caret.borrow().moves(), &[TextLocation::new(1, 1)]);
    assert!(session.caret.borrow().ensure_visible_count() >= 1);
    assert_eq!(session.runner.borrow().run_count(), 0);
}

#[test]
fn test_buffer_close_destroys_caret_and_unsubscribes() {
    let session = SimSession::new();
    assert_eq!(session.settings.subscriber_count(), 1);

    session.buffer.close();

    assert!(session.caret.borrow().is_destroyed());
    assert_eq!(session.settings.subscriber_count(), 0);

    // A later settings change must not reach the dead controller.
    session.settings.set_caret_opacity(10);
    assert_eq!(session.caret.borrow().opacity(), 0.65);
}

#[test]
fn test_caret_invisible_while_command_line_active() {
    let mut session = SimSession::new();
    assert_eq!(session.caret.borrow().display(), CaretDisplay::Block);

    session.enter_command_line(CommandOrigin::Plain);
    assert_eq!(session.caret.borrow().display(), CaretDisplay::Invisible);
    assert!(session.caret.borrow().is_hidden());
    assert_eq!(
        session.controller.descriptor().display,
        CaretDisplay::Invisible
    );
}

#[test]
fn test_exit_restores_caret_and_runs_before_mode_switch() {
    let mut session = SimSession::new();
    session.enter_command_line(CommandOrigin::Plain);
    session.type_str("w");
    session.press(CommandKey::Enter);

    // The runner ran, the processor reset, and only then did the
    // controller observe the switch back to Normal.
    assert_eq!(session.runner.borrow().commands(), &["w".to_string()]);
    assert_eq!(session.caret.borrow().display(), CaretDisplay::Block);
    assert!(!session.caret.borrow().is_hidden());
    assert!(!session.processor.is_active());
}

#[test]
fn test_empty_command_still_dispatches() {
    let mut session = SimSession::new();
    session.enter_command_line(CommandOrigin::Plain);
    session.press(CommandKey::Enter);
    assert_eq!(session.runner.borrow().commands(), &[String::new()]);
}

#[test]
fn test_backspace_past_start_cancels_session() {
    let mut session = SimSession::new();
    session.enter_command_line(CommandOrigin::Plain);
    session.type_str("c");
    session.press(CommandKey::Backspace);
    let outcome = session.press(CommandKey::Backspace);

    assert_eq!(outcome, ProcessOutcome::Cancelled);
    assert_eq!(session.runner.borrow().run_count(), 0);
    assert_eq!(session.caret.borrow().display(), CaretDisplay::Block);
    assert!(!session.processor.is_active());
}

#[test]
fn test_two_sessions_dispatch_in_order() {
    let mut session = SimSession::new();

    session.enter_command_line(CommandOrigin::Plain);
    session.type_str("2");
    session.press(CommandKey::Enter);

    session.enter_command_line(CommandOrigin::Plain);
    session.type_str("3");
    session.press(CommandKey::Enter);

    assert_eq!(
        session.runner.borrow().commands(),
        &["2".to_string(), "3".to_string()]
    );
}

#[test]
fn test_non_complete_run_result_still_exits() {
    let mut session = SimSession::new();
    session
        .runner
        .borrow_mut()
        .set_result(RunResult::SubstituteConfirmActive);

    session.enter_command_line(CommandOrigin::Plain);
    session.type_str("s/a/b/c");
    let outcome = session.press(CommandKey::Enter);

    assert_eq!(
        outcome,
        ProcessOutcome::Executed(RunResult::SubstituteConfirmActive)
    );
    assert_eq!(session.processor.command(), "");
    assert!(!session.processor.is_active());
}

#[test]
fn test_closed_view_skips_selection_cleanup() {
    let mut session = SimSession::new();
    let span = SelectionSpan::new(TextLocation::new(0, 2), TextLocation::new(0, 6));
    session.selection.borrow_mut().select(span);
    session.view.borrow_mut().close();

    session.enter_command_line(CommandOrigin::Plain);
    session.press(CommandKey::Escape);

    assert!(!session.selection.borrow().is_empty());
    assert!(session.caret.borrow().moves().is_empty());
}
