use crate::geometry::{LineString, Point};
use crate::io::wkb::writer::point::{coord_wkb_size, write_coord};
use crate::io::wkb::writer::{ToWkb, WkbWriter};
use crate::trait_::GeometryTrait;

/// Write a count and the bare coordinates of `points`, as used by line strings and rings.
pub(super) fn write_points<'a>(
    writer: &mut WkbWriter,
    num_points: usize,
    points: impl Iterator<Item = &'a Point>,
) {
    writer.write_count(num_points);
    for point in points {
        // Vertices are never empty, which LineString::new enforces
        if let Some(coord) = point.coord() {
            write_coord(writer, coord);
        }
    }
}

impl ToWkb for LineString {
    fn wkb_body_size(&self) -> usize {
        4 + self.num_points() * coord_wkb_size(self.dim())
    }

    fn write_wkb_body(&self, writer: &mut WkbWriter) {
        write_points(writer, self.num_points(), self.points());
    }
}
