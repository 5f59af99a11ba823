// Public library interface for reelmap.
// The binaries and the integration tests go through these modules.

pub mod app;
pub mod dataset;
pub mod layout;
pub mod render;
pub mod tree;
pub mod ui;
