use crate::error::Result;
use crate::geometry::{LineString, Point};
use crate::io::wkb::reader::geometry::{Header, WKBReader};

impl<'a> WKBReader<'a> {
    /// Read a point count followed by that many bare coordinates.
    pub(super) fn read_points(&mut self, header: Header) -> Result<Vec<Point>> {
        let coord_size = header.dim.size() as u64 * 8;
        let num_points = self.read_count(header.byte_order, coord_size)?;
        let mut points = Vec::with_capacity(num_points);
        for _ in 0..num_points {
            let coord = self.read_coord(header.byte_order, header.dim)?;
            points.push(Point::new(coord, header.dim, header.srid)?);
        }
        Ok(points)
    }

    pub(super) fn read_line_string(&mut self, header: Header) -> Result<LineString> {
        let points = self.read_points(header)?;
        LineString::new(points, header.dim, header.srid)
    }
}
