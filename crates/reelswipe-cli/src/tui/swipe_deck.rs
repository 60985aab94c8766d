//! Swipe deck TUI main loop.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use reelswipe_api::movie::Movie;
use reelswipe_api::proxy::MovieFeed;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tokio::task::JoinHandle;

use super::gesture::{Gesture, SwipeTracker};
use super::state::{DeckView, SwipeAction, SwipeDeckState};
use super::ui::{self, DeckLayout};

/// The mount-time movie fetch.
///
/// The result is delivered at most once. Dropping the guard aborts the
/// request, so a torn-down deck never receives a stale list.
#[derive(Debug)]
pub struct InFlightLoad {
    task: JoinHandle<()>,
    rx: Option<oneshot::Receiver<Result<Vec<Movie>>>>,
}

impl InFlightLoad {
    /// Starts fetching from `feed` on `handle`.
    pub fn spawn<F>(handle: &Handle, feed: F) -> Self
    where
        F: MovieFeed + Sync + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let task = handle.spawn(async move {
            let result = feed.fetch_movies().await;
            // Receiver is gone only after teardown.
            let _ = tx.send(result);
        });
        Self { task, rx: Some(rx) }
    }

    /// Takes the fetch result if it has arrived.
    pub fn try_take(&mut self) -> Option<Result<Vec<Movie>>> {
        let rx = self.rx.as_mut()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(anyhow!("movie fetch task ended without a result")),
        };
        self.rx = None;
        Some(result)
    }
}

impl Drop for InFlightLoad {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Mutable UI state owned by the event loop.
#[derive(Debug, Default)]
struct SwipeDeckApp {
    state: SwipeDeckState,
    tracker: SwipeTracker,
    layout: DeckLayout,
}

/// Runs the swipe deck TUI until the user quits.
///
/// Must be called from a thread that may block; the fetch runs on `handle`.
///
/// # Errors
///
/// Returns an error if terminal setup or event handling fails. A failed movie
/// fetch is shown in the UI instead.
#[allow(clippy::module_name_repetitions)]
pub fn run_swipe_deck<F>(handle: &Handle, feed: F) -> Result<()>
where
    F: MovieFeed + Sync + 'static,
{
    let mut app = SwipeDeckApp::default();
    app.state.begin_loading();
    let mut load = InFlightLoad::spawn(handle, feed);

    let mut terminal = enter_terminal()?;

    let result = run_event_loop(&mut terminal, &mut app, &mut load);
    drop(load);

    // Cleanup (always attempt even if event loop failed)
    let restored = restore_terminal();

    result.and(restored)
}

/// Puts the terminal into raw mode on the alternate screen with mouse capture.
///
/// Whatever was already switched on is switched back off if a later step fails.
fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut stdout = io::stdout();
    let entered = crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
        });

    if entered.is_err() {
        // Best effort; the setup error is the one reported.
        let _ = restore_terminal();
    }
    entered
}

/// Undoes [`enter_terminal`]. Every step runs; the first failure is returned.
fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen = crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)
        .context("failed to leave alternate screen");
    raw.and(screen)
}

/// Main event loop.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut SwipeDeckApp,
    load: &mut InFlightLoad,
) -> Result<()> {
    loop {
        if app.state.is_loading()
            && let Some(result) = load.try_take()
        {
            app.state.finish_loading(result);
        }

        terminal
            .draw(|frame| {
                app.layout = ui::draw(frame, &app.state, app.tracker.pending_direction());
            })
            .context("failed to draw TUI")?;

        if event::poll(Duration::from_millis(100)).context("failed to poll events")? {
            match event::read().context("failed to read event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key.code, key.modifiers) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                Event::Resize(_, _) => app.tracker.cancel(),
                _ => {}
            }
        }
    }
}

/// Handles key input. Returns `true` to exit.
fn handle_key(app: &mut SwipeDeckApp, key: KeyCode, modifiers: KeyModifiers) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return true,
        KeyCode::Left | KeyCode::Char('h') => app.state.handle_action(SwipeAction::Dislike),
        KeyCode::Right | KeyCode::Char('l') => app.state.handle_action(SwipeAction::Like),
        KeyCode::Char('o') => open_poster_url(&app.state),
        _ => {}
    }
    false
}

/// Handles pointer input: swipes on the card and clicks on the buttons.
///
/// Swipes only count while a movie is shown; the buttons work in every state.
fn handle_mouse(app: &mut SwipeDeckApp, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.tracker.press(pos),
        MouseEventKind::Drag(MouseButton::Left) => app.tracker.drag(pos),
        MouseEventKind::Up(MouseButton::Left) => match app.tracker.release(pos) {
            Some(Gesture::Swipe { direction, origin })
                if matches!(app.state.view(), DeckView::Movie(_))
                    && app.layout.card.contains(origin) =>
            {
                app.state.handle_action(direction.action());
            }
            Some(Gesture::Tap(at)) if app.layout.dislike.contains(at) => {
                app.state.handle_action(SwipeAction::Dislike);
            }
            Some(Gesture::Tap(at)) if app.layout.like.contains(at) => {
                app.state.handle_action(SwipeAction::Like);
            }
            _ => {}
        },
        // Wheel events are captured so the terminal never scrolls, and do nothing here.
        _ => {}
    }
}

/// Opens the current movie's poster in the browser.
fn open_poster_url(state: &SwipeDeckState) {
    let Some(url) = state.current_movie().and_then(Movie::poster_url) else {
        return;
    };
    if let Err(err) = open::that(&url) {
        tracing::warn!("failed to open {url}: {err}");
    }
}
