use crate::geometry::{Collection, Geometry, LineString, Point, Polygon};
use crate::io::wkt::writer::{write_coord, write_list, ToWkt};
use crate::trait_::CollectionMember;

impl ToWkt for Point {
    fn write_wkt_body(&self, out: &mut String) {
        out.push('(');
        if let Some(coord) = self.coord() {
            write_coord(out, coord);
        }
        out.push(')');
    }
}

impl ToWkt for LineString {
    fn write_wkt_body(&self, out: &mut String) {
        write_list(out, self.points(), |out, point| {
            if let Some(coord) = point.coord() {
                write_coord(out, coord);
            }
        });
    }
}

impl ToWkt for Polygon {
    fn write_wkt_body(&self, out: &mut String) {
        write_list(out, self.rings(), |out, ring| ring.write_wkt_member(out));
    }
}

impl<G: CollectionMember> ToWkt for Collection<G> {
    fn write_wkt_body(&self, out: &mut String) {
        write_list(out, self.iter(), |out, member| member.write_wkt_member(out));
    }
}

impl ToWkt for Geometry {
    fn write_wkt_body(&self, out: &mut String) {
        match self {
            Geometry::Point(g) => g.write_wkt_body(out),
            Geometry::LineString(g) => g.write_wkt_body(out),
            Geometry::Polygon(g) => g.write_wkt_body(out),
            Geometry::MultiPoint(g) => g.write_wkt_body(out),
            Geometry::MultiLineString(g) => g.write_wkt_body(out),
            Geometry::MultiPolygon(g) => g.write_wkt_body(out),
            Geometry::GeometryCollection(g) => g.write_wkt_body(out),
        }
    }

    /// GeometryCollection members are heterogeneous and keep their tags.
    fn write_wkt_member(&self, out: &mut String) {
        self.write_wkt(out);
    }
}
