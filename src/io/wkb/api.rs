use std::io::Write;

use crate::error::{GeometryError, Result};
use crate::geometry::Geometry;
use crate::io::wkb::reader::WKBReader;
use crate::io::wkb::writer::{geometry_wkb_size, ToWkb, WkbWriter, WkbWriterOptions};
use crate::io::ReadOptions;
use crate::trait_::GeometryKind;

/// Parse a WKB or EWKB buffer into a [`Geometry`] with the default [`ReadOptions`].
pub fn read(buf: &[u8]) -> Result<Geometry> {
    read_with_options(buf, &Default::default())
}

/// Parse a WKB or EWKB buffer into a [`Geometry`].
///
/// The buffer must hold exactly one geometry. Nested geometries without their own SRID take
/// the SRID of the nearest enclosing geometry that has one.
pub fn read_with_options(buf: &[u8], options: &ReadOptions) -> Result<Geometry> {
    WKBReader::new(buf, options).read()
}

/// Encode a geometry as WKB.
///
/// The SRID is embedded, EWKB style, only when it is non-zero and only in the outermost
/// header.
///
/// An empty point is written with NaN in every ordinate, and [`read`] turns any point whose
/// ordinates are all NaN back into an empty point. A non-empty point built from NaN
/// ordinates therefore does not survive the round trip.
pub fn write(geom: &(impl ToWkb + ?Sized), options: &WkbWriterOptions) -> Vec<u8> {
    let mut writer = WkbWriter::with_capacity(options, geometry_wkb_size(geom));
    writer.write_geometry(geom, geom.srid() != 0);
    writer.into_inner()
}

/// Encode a geometry as WKB into an [`std::io::Write`] sink.
pub fn write_to<W: Write>(
    mut sink: W,
    geom: &(impl ToWkb + ?Sized),
    options: &WkbWriterOptions,
) -> Result<()> {
    sink.write_all(&write(geom, options))?;
    Ok(())
}

/// Parse hex-encoded WKB, the form most databases print it in. Case-insensitive.
pub fn from_hex(hex: &str) -> Result<Geometry> {
    let buf = hex::decode(hex.trim())
        .map_err(|err| GeometryError::Decode(format!("invalid hex WKB: {err}")))?;
    read(&buf)
}

/// Encode a geometry as upper-case hex WKB.
pub fn to_hex(geom: &(impl ToWkb + ?Sized), options: &WkbWriterOptions) -> String {
    hex::encode_upper(write(geom, options))
}

/// Decode a geometry of a specific kind from WKB.
pub trait FromWKB: Sized {
    /// Parse `buf`, failing with a type mismatch when it holds another kind of geometry.
    fn from_wkb(buf: &[u8]) -> Result<Self>;
}

impl<G: GeometryKind> FromWKB for G {
    fn from_wkb(buf: &[u8]) -> Result<Self> {
        G::from_geometry(read(buf)?)
    }
}
