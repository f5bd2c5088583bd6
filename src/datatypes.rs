//! Coordinate dimensionality and geometry type tags shared by the value model and the codecs.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// The coordinate dimensionality of a geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Build from the `is_3d` / `is_measured` flag pair.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Whether a Z ordinate is present.
    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether an M ordinate is present.
    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// Returns the number of ordinates per coordinate.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// The WKT dimensionality keyword. Plain XY has none.
    pub fn wkt_tag(&self) -> Option<&'static str> {
        match self {
            Dimension::XY => None,
            Dimension::XYZ => Some("Z"),
            Dimension::XYM => Some("M"),
            Dimension::XYZM => Some("ZM"),
        }
    }

    /// Look up a dimensionality from a WKT keyword, ignoring case.
    pub fn from_wkt_tag(tag: &str) -> Option<Self> {
        [Dimension::XYZ, Dimension::XYM, Dimension::XYZM]
            .into_iter()
            .find(|dim| dim.wkt_tag().is_some_and(|t| t.eq_ignore_ascii_case(tag)))
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The concrete kind of a geometry.
///
/// The discriminants are the OGC base type codes used in WKB.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u32)]
pub enum GeometryType {
    /// A Point
    Point = 1,
    /// A LineString
    LineString = 2,
    /// A Polygon
    Polygon = 3,
    /// A MultiPoint
    MultiPoint = 4,
    /// A MultiLineString
    MultiLineString = 5,
    /// A MultiPolygon
    MultiPolygon = 6,
    /// A GeometryCollection
    GeometryCollection = 7,
}

impl GeometryType {
    /// The upper-case WKT keyword for this type.
    pub fn wkt_tag(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a type from a WKT keyword, ignoring case.
    pub fn from_wkt_tag(tag: &str) -> Option<Self> {
        [
            GeometryType::Point,
            GeometryType::LineString,
            GeometryType::Polygon,
            GeometryType::MultiPoint,
            GeometryType::MultiLineString,
            GeometryType::MultiPolygon,
            GeometryType::GeometryCollection,
        ]
        .into_iter()
        .find(|t| t.wkt_tag().eq_ignore_ascii_case(tag))
    }

    /// Whether this is one of the collection types.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            GeometryType::MultiPoint
                | GeometryType::MultiLineString
                | GeometryType::MultiPolygon
                | GeometryType::GeometryCollection
        )
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags_round_trip() {
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            assert_eq!(Dimension::from_flags(dim.has_z(), dim.has_m()), dim);
        }
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
    }

    #[test]
    fn dimension_tags() {
        assert_eq!(Dimension::from_wkt_tag("zm"), Some(Dimension::XYZM));
        assert_eq!(Dimension::from_wkt_tag("M"), Some(Dimension::XYM));
        assert_eq!(Dimension::from_wkt_tag("XY"), None);
        assert_eq!(Dimension::XY.wkt_tag(), None);
        assert_eq!(Dimension::XYZ.wkt_tag(), Some("Z"));
    }

    #[test]
    fn wkt_tags() {
        assert_eq!(
            GeometryType::from_wkt_tag("multiPolygon"),
            Some(GeometryType::MultiPolygon)
        );
        assert_eq!(GeometryType::from_wkt_tag("CIRCULARSTRING"), None);
        assert_eq!(GeometryType::LineString.wkt_tag(), "LINESTRING");
    }

    #[test]
    fn base_codes() {
        assert_eq!(GeometryType::try_from(3u32).unwrap(), GeometryType::Polygon);
        assert!(GeometryType::try_from(8u32).is_err());
        let code: u32 = GeometryType::GeometryCollection.into();
        assert_eq!(code, 7);
    }
}
