use crate::datatypes::Dimension;
use crate::geometry::{Coord, Point};
use crate::io::wkb::writer::{ToWkb, WkbWriter};
use crate::trait_::GeometryTrait;

/// The byte length of one coordinate.
pub(super) fn coord_wkb_size(dim: Dimension) -> usize {
    dim.size() * 8
}

/// Write the ordinates of `coord` in x, y, [z], [m] order.
pub(super) fn write_coord(writer: &mut WkbWriter, coord: &Coord) {
    writer.write_f64(coord.x);
    writer.write_f64(coord.y);
    if let Some(z) = coord.z {
        writer.write_f64(z);
    }
    if let Some(m) = coord.m {
        writer.write_f64(m);
    }
}

impl ToWkb for Point {
    fn wkb_body_size(&self) -> usize {
        coord_wkb_size(self.dim())
    }

    fn write_wkb_body(&self, writer: &mut WkbWriter) {
        match self.coord() {
            Some(coord) => write_coord(writer, coord),
            // Empty points have no encoding of their own; NaN in every ordinate is the convention
            None => {
                for _ in 0..self.dim().size() {
                    writer.write_f64(f64::NAN);
                }
            }
        }
    }
}
