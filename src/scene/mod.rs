//! Card deck, stage dressing, responsive layout and the per-frame scene driver.

pub(crate) mod deck;
pub(crate) mod driver;
pub(crate) mod layout;
pub(crate) mod stage;
pub(crate) mod state;
