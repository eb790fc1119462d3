//! Overlay UI state: the section panel, the language toggle and the cursor trail.

pub(crate) mod cursor;
pub(crate) mod panel;
pub(crate) mod switcher;
