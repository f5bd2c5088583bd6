//! Convert to and from [`geo`] scalars.
//!
//! `geo` geometries are two-dimensional, carry no SRID and cannot be empty points, so
//! conversion to `geo` fails for anything outside that model. Conversion from `geo` takes the
//! SRID as an argument.

mod scalar;

pub use scalar::{
    geometry_collection_from_geo, geometry_collection_to_geo, geometry_from_geo,
    geometry_to_geo, line_string_from_geo, line_string_to_geo, multi_line_string_from_geo,
    multi_line_string_to_geo, multi_point_from_geo, multi_point_to_geo, multi_polygon_from_geo,
    multi_polygon_to_geo, point_from_geo, point_to_geo, polygon_from_geo, polygon_to_geo,
};
