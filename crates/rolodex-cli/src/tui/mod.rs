//! Two-thread TUI orchestration.
//!
//! Terminal I/O runs on a dedicated OS thread; timers and redraws stay on
//! the tokio runtime. Communication via `tokio::sync::mpsc` channels.

mod input;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio_util::sync::CancellationToken;

use crate::app::App;
use crate::ui;
use crate::ui::surface::SurfaceRegistry;

/// Terminal events forwarded from the UI reader thread.
pub enum TermEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

/// Run the interactive picker.
///
/// Enters raw mode, spawns a dedicated terminal reader thread, and runs the
/// main `select!` loop until the user quits. All picker deadlines live in
/// the app model, so dropping it on the way out cancels every pending
/// timer.
pub async fn run(mut app: App) -> anyhow::Result<()> {
    // 1. Enter raw mode, create terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 2. Channels + cancellation token
    let cancel = CancellationToken::new();
    let (term_tx, mut term_rx) = tokio::sync::mpsc::channel::<TermEvent>(64);

    // 3. Spawn dedicated OS thread for crossterm::event::read()
    let cancel_clone = cancel.clone();
    let ui_thread = std::thread::spawn(move || {
        loop {
            if cancel_clone.is_cancelled() {
                break;
            }
            // Poll with 50ms timeout so we can check cancellation
            if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                match event::read() {
                    Ok(Event::Key(key)) => {
                        // Filter out Release events (Windows emits Press + Release per keystroke)
                        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                            continue;
                        }
                        if term_tx.blocking_send(TermEvent::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(Event::Mouse(mouse)) => {
                        // Only button presses drive the picker; motion and
                        // drag events would swamp the channel.
                        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
                            continue;
                        }
                        if term_tx.blocking_send(TermEvent::Mouse(mouse)).is_err() {
                            break;
                        }
                    }
                    Ok(Event::Resize(w, h)) => {
                        if term_tx.blocking_send(TermEvent::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            }
        }
    });

    // 4. Main loop: advance deadlines on a 50ms tick, redraw only when the
    //    model says something changed.
    let mut registry = SurfaceRegistry::new();
    let mut tick = tokio::time::interval(Duration::from_millis(50));

    let result: anyhow::Result<()> = loop {
        tokio::select! {
            _ = tick.tick() => {
                app.on_tick(Instant::now());
                if app.take_redraw() {
                    terminal.draw(|frame| ui::draw(frame, &app, &mut registry))?;
                }
            }
            Some(term_event) = term_rx.recv() => {
                input::handle_term_event(&mut app, &registry, term_event, Instant::now());
            }
        }
        if app.should_quit {
            break Ok(());
        }
    };

    // 5. Shutdown: signal UI thread to stop, then restore the terminal
    cancel.cancel();
    let _ = ui_thread.join(); // joins within one poll timeout

    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    );
    let _ = terminal.show_cursor();

    result
}
