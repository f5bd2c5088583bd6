//! The geometry value model.
//!
//! All values are built through validating constructors and are immutable afterwards.

pub use array::NestedArray;
pub use collection::{
    Collection, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon,
};
pub use linestring::LineString;
pub use point::{Coord, Point};
pub use polygon::Polygon;
pub use scalar::Geometry;

mod array;
mod collection;
mod linestring;
mod point;
mod polygon;
mod scalar;
