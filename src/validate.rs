//! Invariant checks shared by composite constructors and both decoders.

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::trait_::GeometryTrait;

/// Check that every member may be placed in a composite of the given dimensionality and SRID.
///
/// `required` is the member type the composite accepts, or `None` for any type. Members must
/// match `dim` and `srid` exactly. An empty member list is valid.
pub fn validate_members<G: GeometryTrait>(
    members: &[G],
    required: Option<GeometryType>,
    dim: Dimension,
    srid: i32,
) -> Result<()> {
    for (index, member) in members.iter().enumerate() {
        if let Some(expected) = required {
            let actual = member.geometry_type();
            if actual != expected {
                return Err(GeometryError::TypeMismatch {
                    index: Some(index),
                    expected,
                    actual,
                });
            }
        }

        if member.dim() != dim {
            return Err(GeometryError::DimensionMismatch {
                index,
                expected: dim,
                actual: member.dim(),
            });
        }

        if member.srid() != srid {
            return Err(GeometryError::SridMismatch {
                index,
                expected: srid,
                actual: member.srid(),
            });
        }
    }

    Ok(())
}

/// Resolve a 1-based index against a slice.
pub(crate) fn nth<T>(items: &[T], n: usize) -> Result<&T> {
    n.checked_sub(1)
        .and_then(|i| items.get(i))
        .ok_or(GeometryError::OutOfRange {
            index: n,
            len: items.len(),
        })
}
