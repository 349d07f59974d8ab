//! Input handling for TUI key and mouse events.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, FocusZone};
use crate::picker::PickerOutcome;
use crate::ui::surface::{SurfaceId, SurfaceRegistry};

use super::TermEvent;

/// Process a terminal event. Mouse positions are resolved against the
/// zones registered by the most recent draw.
pub fn handle_term_event(
    app: &mut App,
    registry: &SurfaceRegistry,
    event: TermEvent,
    now: Instant,
) {
    match event {
        TermEvent::Key(key) => handle_key(app, key, now),
        TermEvent::Mouse(mouse) => handle_mouse(app, registry, mouse, now),
        TermEvent::Resize(_, _) => app.needs_redraw = true,
    }
}

fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Tab => app.toggle_focus(now),
        KeyCode::Esc => match app.focus {
            FocusZone::SearchInput => app.blur_input(now),
            FocusZone::SelectionCard => app.should_quit = true,
        },
        _ if app.focus == FocusZone::SearchInput => handle_search_key(app, key, now),
        _ => {}
    }
}

/// Keys that only apply while the search input owns focus.
fn handle_search_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let outcome = app.picker.insert_char(c, now);
            app.apply_outcome(outcome);
        }
        KeyCode::Backspace => {
            let outcome = app.picker.delete_back(now);
            app.apply_outcome(outcome);
        }
        KeyCode::Left => {
            if app.picker.move_cursor_left() {
                app.needs_redraw = true;
            }
        }
        KeyCode::Right => {
            if app.picker.move_cursor_right() {
                app.needs_redraw = true;
            }
        }
        KeyCode::Up if app.picker.visible() => {
            if !app.picker.matches().is_empty() {
                app.picker.move_highlight_up();
                app.needs_redraw = true;
            }
        }
        KeyCode::Down if app.picker.visible() => {
            if !app.picker.matches().is_empty() {
                app.picker.move_highlight_down();
                app.needs_redraw = true;
            }
        }
        KeyCode::Enter if app.picker.visible() => {
            let outcome = app.picker.select_highlighted();
            if outcome != PickerOutcome::None {
                app.apply_outcome(outcome);
                app.blur_input(now);
            }
        }
        _ => {}
    }
}

/// Route a click to the surface under it. Rows win over their list, and a
/// click anywhere else moves focus off the input, which starts the close
/// grace window.
fn handle_mouse(app: &mut App, registry: &SurfaceRegistry, mouse: MouseEvent, now: Instant) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    match registry.hit(mouse.column, mouse.row) {
        // The visibility check guards against a registry that is one frame
        // behind the model.
        Some(SurfaceId::SuggestionRow(index)) if app.picker.visible() => {
            let outcome = app.picker.select_match(index);
            if outcome != PickerOutcome::None {
                app.apply_outcome(outcome);
                app.blur_input(now);
            }
        }
        Some(SurfaceId::SearchInput) => app.focus_input(),
        _ => app.blur_input(now),
    }
}
