//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: the working array as colored bars, classified per snapshot
//! - [`steps`]: progress gauge and the recent step descriptions
//! - [`legend`]: colors used by the selected algorithm
//! - [`status`]: status bar with keybindings and playback state

pub mod bars;
pub mod legend;
pub mod status;
pub mod steps;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use legend::render_legend;
pub use status::{render_status_bar, StatusRenderData};
pub use steps::render_steps_pane;
