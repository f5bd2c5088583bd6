use std::fmt;
use std::str::FromStr;

use crate::error::GeometryError;
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::io::wkt::{self, FromWKT};

macro_rules! impl_fmt {
    ($struct_name:ty) => {
        impl fmt::Display for $struct_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&wkt::write(self))
            }
        }

        impl FromStr for $struct_name {
            type Err = GeometryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$struct_name>::from_wkt(s)
            }
        }
    };
}

impl_fmt!(Point);
impl_fmt!(LineString);
impl_fmt!(Polygon);
impl_fmt!(MultiPoint);
impl_fmt!(MultiLineString);
impl_fmt!(MultiPolygon);
impl_fmt!(GeometryCollection);
impl_fmt!(Geometry);

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::GeometryType;
    use crate::test::linestring::ls0;
    use crate::test::point::pz;
    use crate::trait_::GeometryTrait;

    #[test]
    fn display_is_wkt() {
        assert_eq!(ls0().to_string(), "LINESTRING (0 1, 1 2)");
        // The SRID is not part of plain WKT
        assert_eq!(Geometry::from(pz()).to_string(), "POINT Z (1 2 3)");
    }

    #[test]
    fn parse() {
        let point: Point = "SRID=4326;POINT Z (1 2 3)".parse().unwrap();
        assert_eq!(point, pz());
        let geom: Geometry = "multipoint empty".parse().unwrap();
        assert_eq!(geom.geometry_type(), GeometryType::MultiPoint);
        assert!(matches!(
            "POINT (1 2)".parse::<Polygon>(),
            Err(GeometryError::TypeMismatch { .. })
        ));
    }
}
