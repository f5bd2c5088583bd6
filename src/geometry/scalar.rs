use enum_as_inner::EnumAsInner;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::geometry::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, NestedArray, Point,
    Polygon,
};
use crate::io::{wkb, wkt};
use crate::trait_::{CollectionMember, GeometryKind, GeometryTrait};

/// Any geometry of the value model.
#[derive(Debug, Clone, PartialEq, EnumAsInner)]
pub enum Geometry {
    /// A Point
    Point(Point),
    /// A LineString
    LineString(LineString),
    /// A Polygon
    Polygon(Polygon),
    /// A MultiPoint
    MultiPoint(MultiPoint),
    /// A MultiLineString
    MultiLineString(MultiLineString),
    /// A MultiPolygon
    MultiPolygon(MultiPolygon),
    /// A GeometryCollection
    GeometryCollection(GeometryCollection),
}

macro_rules! dispatch {
    ($self:expr, $geom:ident => $body:expr) => {
        match $self {
            Geometry::Point($geom) => $body,
            Geometry::LineString($geom) => $body,
            Geometry::Polygon($geom) => $body,
            Geometry::MultiPoint($geom) => $body,
            Geometry::MultiLineString($geom) => $body,
            Geometry::MultiPolygon($geom) => $body,
            Geometry::GeometryCollection($geom) => $body,
        }
    };
}

impl GeometryTrait for Geometry {
    fn geometry_type(&self) -> GeometryType {
        dispatch!(self, g => g.geometry_type())
    }

    fn dim(&self) -> Dimension {
        dispatch!(self, g => g.dim())
    }

    fn srid(&self) -> i32 {
        dispatch!(self, g => g.srid())
    }

    fn is_empty(&self) -> bool {
        dispatch!(self, g => g.is_empty())
    }

    fn dimension(&self) -> Result<usize> {
        dispatch!(self, g => g.dimension())
    }

    fn to_array(&self) -> NestedArray {
        dispatch!(self, g => g.to_array())
    }

    fn as_text(&self) -> String {
        wkt::write(self)
    }

    fn as_binary(&self) -> Vec<u8> {
        wkb::write(self, &Default::default())
    }
}

impl GeometryKind for Geometry {
    const GEOMETRY_TYPE: Option<GeometryType> = None;

    fn from_geometry(geom: Geometry) -> Result<Self> {
        Ok(geom)
    }

    fn with_srid(&self, srid: i32) -> Self {
        dispatch!(self, g => g.with_srid(srid).into())
    }

    fn spatially_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Geometry::MultiPoint(a), Geometry::MultiPoint(b)) => a.spatially_equals(b),
            (Geometry::MultiLineString(a), Geometry::MultiLineString(b)) => a.spatially_equals(b),
            (Geometry::MultiPolygon(a), Geometry::MultiPolygon(b)) => a.spatially_equals(b),
            (Geometry::GeometryCollection(a), Geometry::GeometryCollection(b)) => {
                a.spatially_equals(b)
            }
            _ => self == other,
        }
    }
}

impl CollectionMember for Geometry {
    const COLLECTION_TYPE: GeometryType = GeometryType::GeometryCollection;
}

macro_rules! impl_conversions {
    ($ty:ty, $variant:ident, $into:ident) => {
        impl From<$ty> for Geometry {
            fn from(value: $ty) -> Self {
                Geometry::$variant(value)
            }
        }

        impl TryFrom<Geometry> for $ty {
            type Error = GeometryError;

            fn try_from(value: Geometry) -> Result<Self> {
                let actual = value.geometry_type();
                value.$into().map_err(|_| GeometryError::TypeMismatch {
                    index: None,
                    expected: GeometryType::$variant,
                    actual,
                })
            }
        }
    };
}

impl_conversions!(Point, Point, into_point);
impl_conversions!(LineString, LineString, into_line_string);
impl_conversions!(Polygon, Polygon, into_polygon);
impl_conversions!(MultiPoint, MultiPoint, into_multi_point);
impl_conversions!(MultiLineString, MultiLineString, into_multi_line_string);
impl_conversions!(MultiPolygon, MultiPolygon, into_multi_polygon);
impl_conversions!(
    GeometryCollection,
    GeometryCollection,
    into_geometry_collection
);

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::linestring::ls0;
    use crate::test::point::{p0, p1};

    #[test]
    fn dispatches_to_variant() {
        let geom: Geometry = ls0().with_srid(4326).into();
        assert_eq!(geom.geometry_type(), GeometryType::LineString);
        assert_eq!(geom.srid(), 4326);
        assert_eq!(geom.dimension().unwrap(), 1);
        assert!(geom.is_line_string());
        assert_eq!(geom.as_line_string().unwrap().num_points(), 2);
    }

    #[test]
    fn narrowing() {
        let geom: Geometry = p0().into();
        let point: Point = geom.clone().try_into().unwrap();
        assert_eq!(point, p0());

        let err = Polygon::try_from(geom).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::TypeMismatch {
                index: None,
                expected: GeometryType::Polygon,
                actual: GeometryType::Point,
            }
        ));
    }

    #[test]
    fn nested_spatial_equality() {
        let inner_a = MultiPoint::xy(vec![p0(), p1()], 0).unwrap();
        let inner_b = MultiPoint::xy(vec![p1(), p0()], 0).unwrap();
        let a = GeometryCollection::xy(vec![inner_a.into(), ls0().into()], 0).unwrap();
        let b = GeometryCollection::xy(vec![ls0().into(), inner_b.into()], 0).unwrap();
        assert!(Geometry::from(a).spatially_equals(&Geometry::from(b)));
    }

    #[test]
    fn with_srid_keeps_variant() {
        let geom = Geometry::from(ls0()).with_srid(2056);
        assert!(geom.is_line_string());
        assert_eq!(geom.srid(), 2056);
    }
}
