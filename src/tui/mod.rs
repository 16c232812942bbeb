//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the menu
//! screen, and turns the fetch result into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Lifecycle
//!
//! 1. The first frame is drawn with an empty list.
//! 2. One fetch task is spawned. It is never retried or cancelled.
//! 3. Its result arrives as an `Action` on an mpsc channel and goes through
//!    `update()`, which publishes the items into `DisplayedItems`.
//! 4. `TuiState` holds a subscription to `DisplayedItems`; the loop redraws
//!    when the subscription reports a change, on input, or when the phase
//!    moves out of `Loading`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tokio::sync::watch;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::menu::{HttpMenuSource, MenuSource};
use crate::tui::component::EventHandler;
use crate::tui::components::MenuListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// How long the loop waits for input before checking for a fetch result.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub menu_list: MenuListState,
    /// Subscription to the displayed items
    pub items: watch::Receiver<Vec<String>>,
}

impl TuiState {
    pub fn new(items: watch::Receiver<Vec<String>>) -> Self {
        Self {
            menu_list: MenuListState::new(),
            items,
        }
    }

    /// True when the displayed items changed since the last draw.
    pub fn items_changed(&self) -> bool {
        self.items.has_changed().unwrap_or(false)
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn MenuSource> =
        Arc::new(HttpMenuSource::new(config.url.clone(), config.timeout));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(app.items.subscribe());

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // First frame goes out before the fetch can report back
    terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

    // Channel for actions from the fetch task
    let (tx, rx) = mpsc::channel();
    spawn_fetch(source, app.category.clone(), tx);

    let mut needs_redraw = false;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_TIMEOUT);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            match event {
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                scroll => {
                    tui.menu_list.handle_event(&scroll);
                }
            }
        }

        if should_quit {
            break;
        }

        let phase_before = app.phase.clone();
        if drain_actions(&mut app, &rx) == Effect::Quit {
            break;
        }

        if tui.items_changed() {
            needs_redraw = true;
        }
        // Phase changes alter the title bar even when the list stays empty
        if app.phase != phase_before {
            needs_redraw = true;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Applies every pending action from background tasks.
fn drain_actions(app: &mut App, rx: &mpsc::Receiver<Action>) -> Effect {
    while let Ok(action) = rx.try_recv() {
        debug!("Event loop received: {:?}", action);
        if update(app, action) == Effect::Quit {
            return Effect::Quit;
        }
    }
    Effect::None
}

/// Spawns the single menu fetch for `category`.
///
/// Failures are reported as `Action::MenuFailed` so the screen can settle
/// on its empty state instead of the task dying silently.
fn spawn_fetch(
    source: Arc<dyn MenuSource>,
    category: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning menu fetch via {} (category={})", source.name(), category);
    tokio::spawn(async move {
        let action = match source.fetch(&category).await {
            Ok(items) => Action::MenuLoaded(items),
            Err(e) => {
                warn!("Menu fetch failed: {}", e);
                Action::MenuFailed(e.to_string())
            }
        };
        if tx.send(action).is_err() {
            warn!("Failed to send menu result: receiver dropped");
        }
    })
}
