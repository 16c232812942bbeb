//! # Core Application Logic
//!
//! The menu screen's state and the rules for changing it.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • DisplayedItems       │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │    menu    │
//!            │  Adapter   │            │  (fetch)   │
//!            │ (ratatui)  │            │ (reqwest)  │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`observable`]: `DisplayedItems`, the list the view subscribes to
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod observable;
pub mod state;
