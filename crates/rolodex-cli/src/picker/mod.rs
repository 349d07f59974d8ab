//! Debounced filter-and-select model for the people picker.
//!
//! `PickerModel` owns the typed text, the debounced query that actually
//! drives filtering, and the dropdown visibility state machine. It never
//! owns the committed selection; operations that must change it return a
//! [`PickerOutcome`] for the application shell to apply.
//!
//! All timing is expressed as deadlines stored in the model and checked
//! against an injected `Instant` on tick, so behavior is fully testable
//! without sleeping and every pending timer dies with the model.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rolodex_core::{filter_people, NameMatch, Person, Roster};
use tracing::debug;

/// Rows shown in the dropdown before scrolling kicks in.
pub const VISIBLE_ROWS: usize = 8;

/// Dropdown visibility states. The list is rendered while `Open` or
/// `Closing`; a pending close still shows the list so that a click landing
/// within the grace window can select a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    /// A show deadline is pending; the list is not visible yet.
    Opening { deadline: Instant },
    Open,
    /// A close deadline is pending; the list is still visible.
    Closing { deadline: Instant },
}

/// Action requested from the owner of the committed selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// Nothing to apply.
    None,
    /// Replace the committed selection with this person.
    Commit(Person),
}

/// State of the debounced filter-and-select interaction.
#[derive(Debug)]
pub struct PickerModel {
    roster: Arc<Roster>,
    raw_query: String,
    /// Cursor position in `raw_query`, counted in chars.
    cursor: usize,
    debounced_query: String,
    /// Pending debounce: the deadline plus the query text that takes effect
    /// when it fires. Each edit overwrites the whole pair, so only the most
    /// recent pending value can ever apply.
    pending_query: Option<(Instant, String)>,
    dropdown: DropdownState,
    matches: Vec<NameMatch>,
    highlighted: usize,
    scroll_offset: usize,
    delay: Duration,
    close_grace: Duration,
}

impl PickerModel {
    pub fn new(roster: Arc<Roster>, delay: Duration, close_grace: Duration) -> Self {
        // The empty query matches the whole roster, same as after typing
        // and erasing everything.
        let matches = filter_people("", roster.people());
        Self {
            roster,
            raw_query: String::new(),
            cursor: 0,
            debounced_query: String::new(),
            pending_query: None,
            dropdown: DropdownState::Closed,
            matches,
            highlighted: 0,
            scroll_offset: 0,
            delay,
            close_grace,
        }
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Cursor position in chars within the raw query.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn matches(&self) -> &[NameMatch] {
        &self.matches
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn dropdown(&self) -> DropdownState {
        self.dropdown
    }

    /// Whether the suggestion list is currently rendered.
    pub fn visible(&self) -> bool {
        matches!(
            self.dropdown,
            DropdownState::Open | DropdownState::Closing { .. }
        )
    }

    /// Whether a debounced query update is still pending.
    pub fn debounce_pending(&self) -> bool {
        self.pending_query.is_some()
    }

    /// The slice of matches inside the current scroll window.
    pub fn visible_matches(&self) -> &[NameMatch] {
        let end = (self.scroll_offset + VISIBLE_ROWS).min(self.matches.len());
        &self.matches[self.scroll_offset..end]
    }

    /// Insert a char at the cursor. Every edit immediately clears the
    /// committed selection, so this always returns a commit of the empty
    /// sentinel.
    pub fn insert_char(&mut self, c: char, now: Instant) -> PickerOutcome {
        let at = byte_offset(&self.raw_query, self.cursor);
        self.raw_query.insert(at, c);
        self.cursor += 1;
        self.query_edited(now)
    }

    /// Delete the char before the cursor. A backspace at the start leaves
    /// the text unchanged and is not an edit.
    pub fn delete_back(&mut self, now: Instant) -> PickerOutcome {
        if self.cursor == 0 {
            return PickerOutcome::None;
        }
        self.cursor -= 1;
        let at = byte_offset(&self.raw_query, self.cursor);
        self.raw_query.remove(at);
        self.query_edited(now)
    }

    /// Move the cursor one char left. Returns whether it moved.
    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one char right. Returns whether it moved.
    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.raw_query.chars().count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Shared tail of every text edit: restart the debounce, keep the
    /// dropdown's show deadline, clear the committed selection.
    fn query_edited(&mut self, now: Instant) -> PickerOutcome {
        self.pending_query = Some((now + self.delay, self.raw_query.clone()));
        self.dropdown = match self.dropdown {
            DropdownState::Closed | DropdownState::Closing { .. } => DropdownState::Opening {
                deadline: now + self.delay,
            },
            // The earliest show deadline wins; later keystrokes never
            // postpone an opening that is already underway.
            DropdownState::Opening { deadline } => DropdownState::Opening { deadline },
            DropdownState::Open => DropdownState::Open,
        };
        PickerOutcome::Commit(Person::none())
    }

    /// Focus arrived on the input. Reopens the list immediately, but only
    /// while nothing is committed.
    pub fn focus_gained(&mut self, committed: &Person) -> bool {
        if committed.is_none() {
            self.dropdown = DropdownState::Open;
            true
        } else {
            false
        }
    }

    /// Focus left the input: start the close grace window. The list stays
    /// visible until the deadline so a click can still land on a row.
    pub fn focus_lost(&mut self, now: Instant) -> bool {
        self.dropdown = match self.dropdown {
            DropdownState::Closed => return false,
            // Repeated blurs keep the earliest close deadline.
            DropdownState::Closing { deadline } => DropdownState::Closing {
                deadline: deadline.min(now + self.close_grace),
            },
            DropdownState::Opening { .. } | DropdownState::Open => DropdownState::Closing {
                deadline: now + self.close_grace,
            },
        };
        true
    }

    /// Put a person's name in the input and request a commit. Leaves the
    /// debounced query, the pending debounce, and the dropdown untouched;
    /// closing happens via the focus-lost path.
    pub fn select_person(&mut self, person: &Person) -> PickerOutcome {
        self.raw_query = person.name.clone();
        self.cursor = self.raw_query.chars().count();
        PickerOutcome::Commit(person.clone())
    }

    /// Select the match at an absolute index (mouse path).
    pub fn select_match(&mut self, index: usize) -> PickerOutcome {
        let Some(person) = self.matches.get(index).map(|m| m.person.clone()) else {
            return PickerOutcome::None;
        };
        self.select_person(&person)
    }

    /// Select the keyboard-highlighted match (Enter path).
    pub fn select_highlighted(&mut self) -> PickerOutcome {
        self.select_match(self.highlighted)
    }

    /// Move the highlight up by one, wrapping to the end.
    pub fn move_highlight_up(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        if self.highlighted == 0 {
            self.highlighted = self.matches.len() - 1;
        } else {
            self.highlighted -= 1;
        }
        self.adjust_scroll();
    }

    /// Move the highlight down by one, wrapping to the start.
    pub fn move_highlight_down(&mut self) {
        if self.matches.is_empty() {
            return;
        }
        self.highlighted = (self.highlighted + 1) % self.matches.len();
        self.adjust_scroll();
    }

    /// Fire any deadlines that are due at `now`. Returns whether anything
    /// changed, which is the caller's redraw trigger.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        let debounce_due = self
            .pending_query
            .as_ref()
            .is_some_and(|(deadline, _)| now >= *deadline);
        if debounce_due {
            if let Some((_, query)) = self.pending_query.take() {
                self.apply_debounced(query);
                changed = true;
            }
        }

        match self.dropdown {
            DropdownState::Opening { deadline } if now >= deadline => {
                self.dropdown = DropdownState::Open;
                changed = true;
            }
            DropdownState::Closing { deadline } if now >= deadline => {
                self.dropdown = DropdownState::Closed;
                changed = true;
            }
            _ => {}
        }

        changed
    }

    fn apply_debounced(&mut self, query: String) {
        self.debounced_query = query;
        self.matches = filter_people(&self.debounced_query, self.roster.people());
        self.constrain_highlight();
        debug!(
            query = %self.debounced_query,
            matches = self.matches.len(),
            "Applied debounced query"
        );
    }

    /// Keep the highlight and scroll window inside the new match list.
    fn constrain_highlight(&mut self) {
        if self.matches.is_empty() {
            self.highlighted = 0;
            self.scroll_offset = 0;
        } else {
            self.highlighted = self.highlighted.min(self.matches.len() - 1);
            self.adjust_scroll();
        }
    }

    /// Adjust the scroll offset so the highlighted row is visible.
    fn adjust_scroll(&mut self) {
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset + VISIBLE_ROWS {
            self.scroll_offset = self.highlighted + 1 - VISIBLE_ROWS;
        }
    }
}

/// Byte offset of the char at `char_idx`, or the string's length when the
/// index is at or past the end.
fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
