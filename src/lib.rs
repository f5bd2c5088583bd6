//! An implementation of the OGC Simple Features geometry model: immutable Point, LineString,
//! Polygon, MultiPoint, MultiLineString, MultiPolygon and GeometryCollection values, with
//! codecs for WKT / EWKT and WKB / EWKB and lazily decoded [proxies][proxy::Proxy].
//!
//! Every geometry has a fixed coordinate [dimensionality][datatypes::Dimension] and an SRID,
//! and every part of a composite geometry shares both with it. Constructors and decoders
//! enforce this through one shared [validator][validate::validate_members].
//!
//! ```
//! use simple_features::geometry::{Geometry, LineString, Point};
//! use simple_features::io::{wkb, wkt};
//! use simple_features::GeometryTrait;
//!
//! let line = LineString::xy(vec![Point::xy(0., 0., 0), Point::xy(1., 1., 0)], 0).unwrap();
//! assert_eq!(line.as_text(), "LINESTRING (0 0, 1 1)");
//!
//! let geom = wkb::read(&line.as_binary()).unwrap();
//! assert_eq!(geom, Geometry::from(line));
//! assert_eq!(wkt::read("LINESTRING (0 0, 1 1)").unwrap(), geom);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use trait_::{CollectionMember, GeometryKind, GeometryTrait};

pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
pub mod proxy;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
pub mod validate;
