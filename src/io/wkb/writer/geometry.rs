use crate::geometry::Geometry;
use crate::io::wkb::writer::{ToWkb, WkbWriter};

impl ToWkb for Geometry {
    fn wkb_body_size(&self) -> usize {
        match self {
            Geometry::Point(g) => g.wkb_body_size(),
            Geometry::LineString(g) => g.wkb_body_size(),
            Geometry::Polygon(g) => g.wkb_body_size(),
            Geometry::MultiPoint(g) => g.wkb_body_size(),
            Geometry::MultiLineString(g) => g.wkb_body_size(),
            Geometry::MultiPolygon(g) => g.wkb_body_size(),
            Geometry::GeometryCollection(g) => g.wkb_body_size(),
        }
    }

    fn write_wkb_body(&self, writer: &mut WkbWriter) {
        match self {
            Geometry::Point(g) => g.write_wkb_body(writer),
            Geometry::LineString(g) => g.write_wkb_body(writer),
            Geometry::Polygon(g) => g.write_wkb_body(writer),
            Geometry::MultiPoint(g) => g.write_wkb_body(writer),
            Geometry::MultiLineString(g) => g.write_wkb_body(writer),
            Geometry::MultiPolygon(g) => g.write_wkb_body(writer),
            Geometry::GeometryCollection(g) => g.write_wkb_body(writer),
        }
    }
}
