//! # Actions
//!
//! Everything that can happen on the menu screen becomes an `Action`.
//! The fetch finishes? That's `Action::MenuLoaded(items)`.
//! It fails? That's `Action::MenuFailed(reason)`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the event loop should carry out. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{info, warn};

use crate::core::state::{App, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MenuLoaded(Vec<String>),
    MenuFailed(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::MenuLoaded(items) => {
            if !app.is_loading() {
                warn!("Ignoring menu result, screen already in {:?}", app.phase);
                return Effect::None;
            }
            info!("Menu loaded: {} items for '{}'", items.len(), app.category);
            app.status_message = match items.len() {
                1 => "1 item".to_string(),
                n => format!("{n} items"),
            };
            app.items.publish(items);
            app.phase = Phase::Loaded;
            Effect::None
        }
        Action::MenuFailed(reason) => {
            if !app.is_loading() {
                warn!("Ignoring menu failure, screen already in {:?}", app.phase);
                return Effect::None;
            }
            warn!("Menu unavailable, showing empty list: {}", reason);
            app.status_message = format!("Menu unavailable: {reason}");
            app.phase = Phase::Failed(reason);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
