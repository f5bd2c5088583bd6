use serde::Serialize;

/// Nested numeric form of a geometry's coordinates.
///
/// A point becomes its ordinates (empty for an empty point); every other geometry becomes the
/// list of its parts. Serializes as plain nested arrays, e.g. `[[0.0,0.0],[1.0,1.0]]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedArray {
    /// The ordinates of one coordinate, x, y, [z], [m].
    Coord(Vec<f64>),
    /// The arrays of each part.
    Nested(Vec<NestedArray>),
}

impl NestedArray {
    /// The number of direct children.
    pub fn len(&self) -> usize {
        match self {
            NestedArray::Coord(values) => values.len(),
            NestedArray::Nested(children) => children.len(),
        }
    }

    /// Whether there are no direct children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
