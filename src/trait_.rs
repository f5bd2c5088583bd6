//! Capability traits shared by every geometry in the value model.

use crate::datatypes::{Dimension, GeometryType};
use crate::error::Result;
use crate::geometry::{Geometry, NestedArray};
use crate::io::wkb::ToWkb;
use crate::io::wkt::ToWkt;

/// The capability set exposed by every concrete geometry and by [`Geometry`] itself.
pub trait GeometryTrait {
    /// The concrete kind of this geometry.
    fn geometry_type(&self) -> GeometryType;

    /// The coordinate dimensionality, fixed at construction.
    fn dim(&self) -> Dimension;

    /// The spatial reference identifier. Opaque, only ever compared for equality.
    fn srid(&self) -> i32;

    /// Whether this geometry has no coordinates at all.
    fn is_empty(&self) -> bool;

    /// The topological dimension: 0 for points, 1 for curves, 2 for surfaces.
    ///
    /// Collections report the maximum over their members and fail when empty.
    fn dimension(&self) -> Result<usize>;

    /// A nested numeric representation of the coordinates.
    fn to_array(&self) -> NestedArray;

    /// Encode as WKT.
    fn as_text(&self) -> String;

    /// Encode as WKB with the default writer options.
    fn as_binary(&self) -> Vec<u8>;

    /// Encode as EWKT, prefixing `SRID=<int>;` when the SRID is non-zero.
    fn as_ewkt(&self) -> String {
        match self.srid() {
            0 => self.as_text(),
            srid => format!("SRID={srid};{}", self.as_text()),
        }
    }

    /// Whether every coordinate carries a Z ordinate.
    fn is_3d(&self) -> bool {
        self.dim().has_z()
    }

    /// Whether every coordinate carries an M ordinate.
    fn is_measured(&self) -> bool {
        self.dim().has_m()
    }

    /// Number of ordinates per coordinate, 2 to 4.
    fn coordinate_dimension(&self) -> usize {
        self.dim().size()
    }

    /// Number of spatial ordinates per coordinate, 2 or 3. M is not spatial.
    fn spatial_dimension(&self) -> usize {
        if self.is_3d() {
            3
        } else {
            2
        }
    }
}

/// A geometry type that can be narrowed from a [`Geometry`].
///
/// Implemented by the seven concrete types and by [`Geometry`], which accepts anything.
pub trait GeometryKind: GeometryTrait + Into<Geometry> + Clone + PartialEq {
    /// The required runtime type, or `None` when any geometry is acceptable.
    const GEOMETRY_TYPE: Option<GeometryType>;

    /// Narrow a [`Geometry`], failing with a type mismatch if it is of another kind.
    fn from_geometry(geom: Geometry) -> Result<Self>;

    /// A copy of this geometry, with the SRID replaced recursively.
    fn with_srid(&self, srid: i32) -> Self;

    /// Equality that ignores the order of collection members.
    fn spatially_equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// A geometry type that may be the member of a collection.
pub trait CollectionMember: GeometryKind + ToWkt + ToWkb {
    /// The type of a collection holding members of this type.
    const COLLECTION_TYPE: GeometryType;
}
