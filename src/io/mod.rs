//! Readers and writers for the Well-Known Text and Well-Known Binary formats, plus
//! interoperability with the `geo` crate.

pub mod display;
pub mod geo;
pub mod wkb;
pub mod wkt;

/// Options shared by the WKB and WKT readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Maximum nesting depth of collections. Deeper input is rejected instead of exhausting
    /// the stack.
    pub max_depth: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}
