//! Application state for the picker TUI.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rolodex_core::{Person, Roster};
use tracing::debug;

use crate::picker::{PickerModel, PickerOutcome};

/// Which part of the screen owns keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusZone {
    /// The search input: typing edits the query.
    SearchInput,
    /// The committed-selection card: typing is ignored.
    SelectionCard,
}

/// Top-level state. `App` is the external owner of the committed
/// selection; the picker only ever requests changes to it through
/// [`PickerOutcome`] values.
pub struct App {
    pub roster: Arc<Roster>,
    pub picker: PickerModel,
    /// The committed selection. Starts as the empty sentinel.
    pub committed: Person,
    pub focus: FocusZone,
    pub should_quit: bool,
    pub needs_redraw: bool,
    pub status: String,
}

impl App {
    pub fn new(roster: Arc<Roster>, delay: Duration, close_grace: Duration) -> Self {
        let picker = PickerModel::new(Arc::clone(&roster), delay, close_grace);
        Self {
            roster,
            picker,
            committed: Person::none(),
            focus: FocusZone::SearchInput,
            should_quit: false,
            needs_redraw: true,
            status: "Ready".to_string(),
        }
    }

    /// Apply an outcome returned by a picker operation.
    pub fn apply_outcome(&mut self, outcome: PickerOutcome) {
        match outcome {
            PickerOutcome::None => {}
            PickerOutcome::Commit(person) => {
                self.status = if person.is_none() {
                    "Selection cleared".to_string()
                } else {
                    format!("Selected {}", person.name)
                };
                debug!(name = %person.name, "Committing selection");
                self.committed = person;
                self.needs_redraw = true;
            }
        }
    }

    /// Move keyboard focus onto the search input, firing the picker's
    /// focus-gained transition.
    pub fn focus_input(&mut self) {
        if self.focus == FocusZone::SearchInput {
            return;
        }
        self.focus = FocusZone::SearchInput;
        self.picker.focus_gained(&self.committed);
        self.needs_redraw = true;
    }

    /// Move keyboard focus off the search input, firing the picker's
    /// focus-lost transition.
    pub fn blur_input(&mut self, now: Instant) {
        if self.focus == FocusZone::SelectionCard {
            return;
        }
        self.focus = FocusZone::SelectionCard;
        self.picker.focus_lost(now);
        self.needs_redraw = true;
    }

    /// Tab between the search input and the selection card.
    pub fn toggle_focus(&mut self, now: Instant) {
        match self.focus {
            FocusZone::SearchInput => self.blur_input(now),
            FocusZone::SelectionCard => self.focus_input(),
        }
    }

    /// Advance picker deadlines; flags a redraw when anything fired.
    pub fn on_tick(&mut self, now: Instant) {
        if self.picker.on_tick(now) {
            self.needs_redraw = true;
        }
    }

    /// Consume the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rolodex_core::Sex;

    fn make_app() -> App {
        let roster = Arc::new(
            Roster::new(vec![
                Person::new("Anna", Sex::Female),
                Person::new("Andrew", Sex::Male),
            ])
            .unwrap(),
        );
        App::new(roster, Duration::from_millis(300), Duration::from_millis(100))
    }

    #[test]
    fn starts_with_empty_sentinel_committed() {
        let app = make_app();
        assert!(app.committed.is_none());
        assert_eq!(app.focus, FocusZone::SearchInput);
        assert!(!app.should_quit);
    }

    #[test]
    fn commit_outcome_replaces_committed_selection() {
        let mut app = make_app();
        let andrew = Person::new("Andrew", Sex::Male);
        app.apply_outcome(PickerOutcome::Commit(andrew.clone()));
        assert_eq!(app.committed, andrew);
        assert!(app.status.contains("Andrew"));

        app.apply_outcome(PickerOutcome::Commit(Person::none()));
        assert!(app.committed.is_none());
        assert_eq!(app.status, "Selection cleared");
    }

    #[test]
    fn none_outcome_changes_nothing() {
        let mut app = make_app();
        app.take_redraw();
        app.apply_outcome(PickerOutcome::None);
        assert!(app.committed.is_none());
        assert!(!app.needs_redraw);
    }

    #[test]
    fn toggle_focus_round_trips_through_blur() {
        let mut app = make_app();
        let now = Instant::now();

        app.toggle_focus(now);
        assert_eq!(app.focus, FocusZone::SelectionCard);

        // Refocusing an input with nothing committed reopens the list.
        app.toggle_focus(now);
        assert_eq!(app.focus, FocusZone::SearchInput);
        assert!(app.picker.visible());
    }

    #[test]
    fn refocus_with_real_selection_keeps_list_closed() {
        let mut app = make_app();
        let now = Instant::now();
        app.apply_outcome(PickerOutcome::Commit(Person::new("Anna", Sex::Female)));

        app.blur_input(now);
        app.on_tick(now + Duration::from_millis(100));
        app.focus_input();
        assert!(!app.picker.visible());
    }

    #[test]
    fn tick_sets_redraw_only_when_something_fired() {
        let mut app = make_app();
        let now = Instant::now();
        app.take_redraw();

        app.on_tick(now);
        assert!(!app.needs_redraw);

        app.picker.insert_char('a', now);
        app.on_tick(now + Duration::from_millis(300));
        assert!(app.needs_redraw);
    }

    #[test]
    fn take_redraw_consumes_the_flag() {
        let mut app = make_app();
        assert!(app.take_redraw(), "fresh app needs an initial draw");
        assert!(!app.take_redraw());
    }
}
