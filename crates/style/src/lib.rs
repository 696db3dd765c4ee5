//! Style value types shared across the petty font crates.
//!
//! Only the font-related subset lives here: weights and slopes used both when
//! describing a registered font and when querying for one.

pub mod font;

pub use font::{FontStyle, FontWeight, StyleParseError};
