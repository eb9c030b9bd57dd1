//! Interactive panel mode.

mod panel;

pub use panel::run;
