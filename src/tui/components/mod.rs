//! # TUI Components
//!
//! - `TitleBar`: stateless, props only. Category and fetch status.
//! - `MenuList`: the menu view. Transient per frame, backed by the
//!   persistent `MenuListState` which owns scrolling.
//!
//! Components receive external data as props, never by reaching into
//! `App`, so each can be rendered in a test against a `TestBackend`.

mod title_bar;
pub use title_bar::TitleBar;

pub mod menu_list;
pub use menu_list::{MenuList, MenuListState};
