//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, auto-advance pump
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   step log, legend, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Controller`] and call [`App::run`] to start the event loop.
//!
//! [`Controller`]: crate::playback::Controller
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
