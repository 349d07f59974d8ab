//! TUI rendering functions.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use rolodex_core::{NameMatch, Sex};

use crate::app::{App, FocusZone};
use crate::picker::VISIBLE_ROWS;
use crate::ui::surface::{SurfaceId, SurfaceRegistry};

const PLACEHOLDER: &str = "Enter a part of the name";
const NO_MATCH_NOTICE: &str = "No matching suggestions";

/// Draw the full UI, registering every interactive region in `registry`.
pub fn draw(frame: &mut Frame, app: &App, registry: &mut SurfaceRegistry) {
    registry.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search input
            Constraint::Min(3),    // Suggestions + notice
            Constraint::Length(4), // Selection card
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_input(frame, app, registry, chunks[1]);
    draw_body(frame, app, registry, chunks[2]);
    draw_card(frame, app, registry, chunks[3]);
    draw_status_bar(frame, app, chunks[4]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let busy = if app.picker.debounce_pending() {
        " [filtering...]"
    } else {
        ""
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "rolodex",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" | {} people", app.roster.len())),
        Span::styled(busy, Style::default().fg(Color::Yellow)),
    ]));

    frame.render_widget(header, area);
}

fn draw_input(frame: &mut Frame, app: &App, registry: &mut SurfaceRegistry, area: Rect) {
    registry.register(area, SurfaceId::SearchInput);

    // The danger border tracks the current filter result, independent of
    // whether the list is shown.
    let border_style = if app.picker.matches().is_empty() {
        Style::default().fg(Color::Red)
    } else if app.focus == FocusZone::SearchInput {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let query = app.picker.raw_query();

    // Keep the cursor inside the single-line field by scrolling the text
    // horizontally once the prefix outgrows the box.
    let prefix_width: usize = query
        .chars()
        .take(app.picker.cursor())
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();
    let hscroll = prefix_width.saturating_sub(inner_width.saturating_sub(1));

    let content = if query.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::raw(query))
    };

    let input = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Search")
                .border_style(border_style),
        )
        .scroll((0, hscroll as u16));

    frame.render_widget(input, area);

    if app.focus == FocusZone::SearchInput {
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add((prefix_width - hscroll) as u16)
            .min(area.x.saturating_add(area.width.saturating_sub(2)));
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn draw_body(frame: &mut Frame, app: &App, registry: &mut SurfaceRegistry, area: Rect) {
    let list_height = if app.picker.visible() {
        let rows = app.picker.matches().len().min(VISIBLE_ROWS) as u16;
        (rows + 2).min(area.height)
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(list_height),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    if app.picker.visible() {
        draw_suggestions(frame, app, registry, chunks[0]);
    }
    if app.picker.matches().is_empty() {
        draw_notice(frame, registry, chunks[1]);
    }
}

fn draw_suggestions(frame: &mut Frame, app: &App, registry: &mut SurfaceRegistry, area: Rect) {
    registry.register(area, SurfaceId::SuggestionList);

    let total = app.picker.matches().len();
    let title = if total > VISIBLE_ROWS {
        format!("Suggestions {}/{}", app.picker.highlighted() + 1, total)
    } else {
        "Suggestions".to_string()
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'_>> = Vec::new();
    for (offset, name_match) in app.picker.visible_matches().iter().enumerate() {
        if offset as u16 >= inner.height {
            break;
        }
        let index = app.picker.scroll_offset() + offset;
        lines.push(suggestion_line(
            name_match,
            index == app.picker.highlighted(),
        ));
        registry.register(
            Rect::new(inner.x, inner.y + offset as u16, inner.width, 1),
            SurfaceId::SuggestionRow(index),
        );
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// One suggestion row: the name colored by sex, with the matched
/// substring underlined and the keyboard highlight inverted.
fn suggestion_line(name_match: &NameMatch, highlighted: bool) -> Line<'static> {
    let mut base = Style::default().fg(match name_match.person.sex {
        Sex::Male => Color::Blue,
        Sex::Female => Color::Red,
    });
    if highlighted {
        base = base.add_modifier(Modifier::REVERSED);
    }

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;
    for (i, c) in name_match.person.name.chars().enumerate() {
        let matched = name_match.positions.binary_search(&i).is_ok();
        if matched != run_matched && !run.is_empty() {
            spans.push(styled_run(std::mem::take(&mut run), run_matched, base));
        }
        run_matched = matched;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(styled_run(run, run_matched, base));
    }

    Line::from(spans)
}

fn styled_run(text: String, matched: bool, base: Style) -> Span<'static> {
    let style = if matched {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base
    };
    Span::styled(text, style)
}

fn draw_notice(frame: &mut Frame, registry: &mut SurfaceRegistry, area: Rect) {
    registry.register(area, SurfaceId::NoMatchNotice);
    let notice = Paragraph::new(Line::from(Span::styled(
        NO_MATCH_NOTICE,
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(notice, area);
}

fn draw_card(frame: &mut Frame, app: &App, registry: &mut SurfaceRegistry, area: Rect) {
    registry.register(area, SurfaceId::SelectionCard);

    let border_style = if app.focus == FocusZone::SelectionCard {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let lines = if app.committed.is_none() {
        vec![Line::from(Span::styled(
            "No selected person",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        let name_color = match app.committed.sex {
            Sex::Male => Color::Blue,
            Sex::Female => Color::Red,
        };
        vec![
            Line::from(Span::styled(
                app.committed.name.clone(),
                Style::default()
                    .fg(name_color)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                app.committed.sex.to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    };

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Selected")
            .border_style(border_style),
    );

    frame.render_widget(card, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(&app.status, Style::default().fg(Color::DarkGray)),
        Span::styled(
            " | Tab: focus | Up/Down: highlight | Enter: select | Ctrl+C: quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    frame.render_widget(status, area);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rolodex_core::{Person, Roster};
    use std::sync::Arc;
    use std::time::Duration;

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
    fn render_fresh_app_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let app = make_app();
        let mut registry = SurfaceRegistry::new();

        terminal
            .draw(|frame| draw(frame, &app, &mut registry))
            .unwrap();

        assert!(registry.rect_of(SurfaceId::SearchInput).is_some());
        assert!(registry.rect_of(SurfaceId::SelectionCard).is_some());
    }

    #[test]
    fn render_survives_tiny_terminal() {
        let backend = ratatui::backend::TestBackend::new(10, 5);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut app = make_app();
        app.picker.focus_gained(&Person::none());
        let mut registry = SurfaceRegistry::new();

        terminal
            .draw(|frame| draw(frame, &app, &mut registry))
            .unwrap();
    }

    #[test]
    fn suggestion_line_underlines_matched_positions() {
        let name_match = NameMatch {
            person: Person::new("Anna", Sex::Female),
            positions: vec![0, 1],
        };
        let line = suggestion_line(&name_match, false);
        // Two runs: the matched "An" and the rest.
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content.as_ref(), "An");
        assert!(line.spans[0]
            .style
            .add_modifier
            .contains(Modifier::UNDERLINED));
        assert_eq!(line.spans[1].content.as_ref(), "na");
        assert!(!line.spans[1]
            .style
            .add_modifier
            .contains(Modifier::UNDERLINED));
    }

    #[test]
    fn suggestion_line_without_positions_is_one_run() {
        let name_match = NameMatch {
            person: Person::new("Andrew", Sex::Male),
            positions: Vec::new(),
        };
        let line = suggestion_line(&name_match, false);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content.as_ref(), "Andrew");
    }
}
