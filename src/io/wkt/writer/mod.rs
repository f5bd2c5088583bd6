//! Encoding geometries to WKT.

mod scalar;

use std::fmt::Write;

use crate::geometry::Coord;
use crate::trait_::GeometryTrait;

/// Geometries that can be encoded as WKT.
///
/// Implementors write their parenthesised body; the tag, dimensionality keyword and `EMPTY`
/// are handled by [`ToWkt::write_wkt`].
pub trait ToWkt: GeometryTrait {
    /// Append the parenthesised body. Not called for empty geometries.
    fn write_wkt_body(&self, out: &mut String);

    /// Append this geometry as the member of a collection.
    ///
    /// Members of the homogeneous collections are written untagged.
    fn write_wkt_member(&self, out: &mut String) {
        if self.is_empty() {
            out.push_str("EMPTY");
        } else {
            self.write_wkt_body(out);
        }
    }

    /// Append the complete tagged WKT of this geometry.
    fn write_wkt(&self, out: &mut String) {
        out.push_str(self.geometry_type().wkt_tag());
        if let Some(tag) = self.dim().wkt_tag() {
            out.push(' ');
            out.push_str(tag);
        }
        if self.is_empty() {
            out.push_str(" EMPTY");
        } else {
            out.push(' ');
            self.write_wkt_body(out);
        }
    }
}

/// Append the ordinates of `coord` separated by spaces.
///
/// `f64`'s `Display` is the shortest representation that parses back to the same value.
pub(crate) fn write_coord(out: &mut String, coord: &Coord) {
    // Writing to a String cannot fail
    let _ = write!(out, "{} {}", coord.x, coord.y);
    if let Some(z) = coord.z {
        let _ = write!(out, " {z}");
    }
    if let Some(m) = coord.m {
        let _ = write!(out, " {m}");
    }
}

/// Append `items` as a parenthesised, comma separated list.
pub(crate) fn write_list<'a, T: 'a>(
    out: &mut String,
    items: impl IntoIterator<Item = &'a T>,
    mut write_item: impl FnMut(&mut String, &'a T),
) {
    out.push('(');
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        write_item(out, item);
    }
    out.push(')');
}
