pub mod api;
pub mod charts;
pub mod refresh;
pub mod state;
pub mod stats;
pub mod ui;
