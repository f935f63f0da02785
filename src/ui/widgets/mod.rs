//! UI widgets for displaying force data.

pub mod chart;
pub mod help;
pub mod readout;
pub mod status_bar;

pub use chart::render_chart;
pub use help::render_help;
pub use readout::render_readout;
pub use status_bar::render_status_bar;
