use crate::error::Result;
use crate::geometry::Geometry;
use crate::io::wkt::reader::Parser;
use crate::io::wkt::writer::ToWkt;
use crate::io::ReadOptions;
use crate::trait_::GeometryKind;

/// Parse WKT or EWKT into a [`Geometry`] with the default [`ReadOptions`].
pub fn read(text: &str) -> Result<Geometry> {
    read_with_options(text, &Default::default())
}

/// Parse WKT or EWKT into a [`Geometry`].
///
/// Keywords are case-insensitive. Without a `SRID=<int>;` prefix the SRID is 0.
pub fn read_with_options(text: &str, options: &ReadOptions) -> Result<Geometry> {
    Parser::new(text, options).parse()
}

/// Encode a geometry as WKT. The SRID is not part of WKT and is dropped.
pub fn write(geom: &(impl ToWkt + ?Sized)) -> String {
    let mut out = String::new();
    geom.write_wkt(&mut out);
    out
}

/// Encode a geometry as EWKT, prefixing `SRID=<int>;` when the SRID is non-zero.
pub fn write_ewkt(geom: &(impl ToWkt + ?Sized)) -> String {
    let mut out = String::new();
    if geom.srid() != 0 {
        out.push_str(&format!("SRID={};", geom.srid()));
    }
    geom.write_wkt(&mut out);
    out
}

/// Decode a geometry of a specific kind from WKT or EWKT.
pub trait FromWKT: Sized {
    /// Parse `text`, failing with a type mismatch when it holds another kind of geometry.
    fn from_wkt(text: &str) -> Result<Self>;
}

impl<G: GeometryKind> FromWKT for G {
    fn from_wkt(text: &str) -> Result<Self> {
        G::from_geometry(read(text)?)
    }
}
