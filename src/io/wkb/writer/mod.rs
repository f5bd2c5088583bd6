//! Encoding geometries to WKB.

mod geometry;
mod geometrycollection;
mod linestring;
mod point;
mod polygon;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::io::wkb::common::{Endianness, WKBType};
use crate::trait_::GeometryTrait;

/// Options for the WKB writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WkbWriterOptions {
    /// The byte order every header and value is written in.
    pub endianness: Endianness,
}

impl WkbWriterOptions {
    /// Options for writing little-endian (NDR) WKB.
    pub fn little_endian() -> Self {
        Self {
            endianness: Endianness::LittleEndian,
        }
    }

    /// Options for writing big-endian (XDR) WKB.
    pub fn big_endian() -> Self {
        Self {
            endianness: Endianness::BigEndian,
        }
    }
}

/// An append-only WKB buffer in a fixed byte order.
///
/// Writing into memory cannot fail, so none of the methods return a `Result`.
#[derive(Debug)]
pub struct WkbWriter {
    buf: Vec<u8>,
    endianness: Endianness,
}

impl WkbWriter {
    /// Create an empty writer.
    pub fn new(options: &WkbWriterOptions) -> Self {
        Self::with_capacity(options, 0)
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(options: &WkbWriterOptions, capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            endianness: options.endianness,
        }
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer, returning its buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_u32(&mut self, value: u32) {
        let mut bytes = [0; 4];
        match self.endianness {
            Endianness::BigEndian => BigEndian::write_u32(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_u32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_i32(&mut self, value: i32) {
        let mut bytes = [0; 4];
        match self.endianness {
            Endianness::BigEndian => BigEndian::write_i32(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_i32(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    pub fn write_f64(&mut self, value: f64) {
        let mut bytes = [0; 8];
        match self.endianness {
            Endianness::BigEndian => BigEndian::write_f64(&mut bytes, value),
            Endianness::LittleEndian => LittleEndian::write_f64(&mut bytes, value),
        }
        self.buf.extend_from_slice(&bytes);
    }

    /// Write a point, ring or member count.
    ///
    /// # Panics
    ///
    /// If `count` does not fit in a `u32`. WKB cannot represent such a geometry.
    pub fn write_count(&mut self, count: usize) {
        let count = match u32::try_from(count) {
            Ok(count) => count,
            Err(_) => panic!("{count} items do not fit in a WKB count"),
        };
        self.write_u32(count);
    }

    /// Write the byte order flag, type code and, if `with_srid`, the SRID of `geom`.
    pub fn write_header(&mut self, geom: &(impl GeometryTrait + ?Sized), with_srid: bool) {
        let wkb_type = WKBType {
            geometry_type: geom.geometry_type(),
            dim: geom.dim(),
            has_srid: with_srid,
        };
        self.write_u8(self.endianness.into());
        self.write_u32(wkb_type.code());
        if with_srid {
            self.write_i32(geom.srid());
        }
    }

    /// Write a complete self-describing geometry.
    pub fn write_geometry(&mut self, geom: &(impl ToWkb + ?Sized), with_srid: bool) {
        self.write_header(geom, with_srid);
        geom.write_wkb_body(self);
    }
}

/// Geometries that can be encoded as WKB.
///
/// Implementors only write their body; [`WkbWriter::write_geometry`] adds the header.
pub trait ToWkb: GeometryTrait {
    /// The byte length of the body, excluding the header.
    fn wkb_body_size(&self) -> usize;

    /// Append the body to `writer`.
    fn write_wkb_body(&self, writer: &mut WkbWriter);
}

/// The byte length of a WKB header.
pub(crate) fn header_size(with_srid: bool) -> usize {
    if with_srid {
        1 + 4 + 4
    } else {
        1 + 4
    }
}

/// The byte length of `geom` encoded as top-level WKB.
///
/// The SRID is included when it is non-zero, matching [`write`][crate::io::wkb::write].
pub fn geometry_wkb_size(geom: &(impl ToWkb + ?Sized)) -> usize {
    header_size(geom.srid() != 0) + geom.wkb_body_size()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn count_byte_order() {
        let mut writer = WkbWriter::new(&WkbWriterOptions::big_endian());
        writer.write_count(258);
        assert_eq!(writer.as_slice(), &[0, 0, 1, 2]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    #[should_panic(expected = "do not fit in a WKB count")]
    fn count_overflow_panics() {
        let mut writer = WkbWriter::new(&WkbWriterOptions::default());
        writer.write_count(u32::MAX as usize + 1);
    }
}
