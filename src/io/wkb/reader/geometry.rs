use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::trace;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, LineString, Point, Polygon};
use crate::io::wkb::common::{Endianness, WKBType};
use crate::io::ReadOptions;

/// The header fields every body reader needs.
#[derive(Debug, Clone, Copy)]
pub(super) struct Header {
    pub byte_order: Endianness,
    pub dim: Dimension,
    pub srid: i32,
}

/// A recursive-descent WKB decoder over a borrowed buffer.
pub(crate) struct WKBReader<'a> {
    cursor: Cursor<&'a [u8]>,
    max_depth: usize,
}

impl<'a> WKBReader<'a> {
    pub fn new(buf: &'a [u8], options: &ReadOptions) -> Self {
        Self {
            cursor: Cursor::new(buf),
            max_depth: options.max_depth,
        }
    }

    /// Decode exactly one geometry spanning the whole buffer.
    pub fn read(mut self) -> Result<Geometry> {
        let geom = self.read_geometry(0, None)?;
        let remaining = self.remaining();
        if remaining > 0 {
            return Err(GeometryError::Decode(format!(
                "{remaining} trailing bytes after geometry"
            )));
        }
        Ok(geom)
    }

    /// Decode one self-describing geometry at the current position.
    ///
    /// Without an explicit SRID the geometry takes `inherited_srid`, or 0 at the top level.
    pub(super) fn read_geometry(
        &mut self,
        depth: usize,
        inherited_srid: Option<i32>,
    ) -> Result<Geometry> {
        if depth > self.max_depth {
            return Err(GeometryError::Decode(format!(
                "geometry nested deeper than {} levels",
                self.max_depth
            )));
        }

        let offset = self.cursor.position();
        let byte_order = Endianness::try_from(self.read_u8()?)?;
        let wkb_type = WKBType::from_code(self.read_u32(byte_order)?)?;
        let srid = if wkb_type.has_srid {
            self.read_i32(byte_order)?
        } else {
            inherited_srid.unwrap_or(0)
        };
        trace!(
            "reading WKB {} {} (srid {srid}) at offset {offset}",
            wkb_type.geometry_type,
            wkb_type.dim
        );

        let header = Header {
            byte_order,
            dim: wkb_type.dim,
            srid,
        };
        let geom = match wkb_type.geometry_type {
            GeometryType::Point => self.read_point(header)?.into(),
            GeometryType::LineString => self.read_line_string(header)?.into(),
            GeometryType::Polygon => self.read_polygon(header)?.into(),
            GeometryType::MultiPoint => self.read_collection::<Point>(header, depth)?.into(),
            GeometryType::MultiLineString => {
                self.read_collection::<LineString>(header, depth)?.into()
            }
            GeometryType::MultiPolygon => self.read_collection::<Polygon>(header, depth)?.into(),
            GeometryType::GeometryCollection => {
                self.read_collection::<Geometry>(header, depth)?.into()
            }
        };
        Ok(geom)
    }

    fn remaining(&self) -> u64 {
        let len = self.cursor.get_ref().len() as u64;
        len.saturating_sub(self.cursor.position())
    }

    fn truncated(&self, err: std::io::Error) -> GeometryError {
        GeometryError::Decode(format!(
            "unexpected end of input at offset {}: {err}",
            self.cursor.position()
        ))
    }

    pub(super) fn read_u8(&mut self) -> Result<u8> {
        self.cursor.read_u8().map_err(|err| self.truncated(err))
    }

    pub(super) fn read_u32(&mut self, byte_order: Endianness) -> Result<u32> {
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_u32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_u32::<LittleEndian>(),
        };
        value.map_err(|err| self.truncated(err))
    }

    pub(super) fn read_i32(&mut self, byte_order: Endianness) -> Result<i32> {
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_i32::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_i32::<LittleEndian>(),
        };
        value.map_err(|err| self.truncated(err))
    }

    pub(super) fn read_f64(&mut self, byte_order: Endianness) -> Result<f64> {
        let value = match byte_order {
            Endianness::BigEndian => self.cursor.read_f64::<BigEndian>(),
            Endianness::LittleEndian => self.cursor.read_f64::<LittleEndian>(),
        };
        value.map_err(|err| self.truncated(err))
    }

    /// Read an item count, rejecting counts the rest of the buffer cannot possibly hold.
    pub(super) fn read_count(
        &mut self,
        byte_order: Endianness,
        min_item_size: u64,
    ) -> Result<usize> {
        let count = self.read_u32(byte_order)?;
        let needed = u64::from(count) * min_item_size;
        if needed > self.remaining() {
            return Err(GeometryError::Decode(format!(
                "count {count} at offset {} exceeds the remaining {} bytes",
                self.cursor.position() - 4,
                self.remaining()
            )));
        }
        Ok(count as usize)
    }
}
