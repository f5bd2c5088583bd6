use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};

/// Set in the type code when a 4-byte SRID follows it.
pub const SRID_FLAG: u32 = 0x2000_0000;
/// PostGIS EWKB flag for a Z ordinate.
pub const EWKB_Z_FLAG: u32 = 0x8000_0000;
/// PostGIS EWKB flag for an M ordinate.
pub const EWKB_M_FLAG: u32 = 0x4000_0000;

const FLAG_MASK: u32 = SRID_FLAG | EWKB_Z_FLAG | EWKB_M_FLAG;

/// Endianness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Flag byte `0`.
    BigEndian,
    /// Flag byte `1`.
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeometryError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeometryError::Decode(format!(
                "unexpected byte order flag {other}"
            ))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// The decoded 4-byte type code of a WKB geometry.
///
/// ISO codes add 1000 (Z), 2000 (M) or 3000 (ZM) to the base type code. The reader also honours
/// the PostGIS high-bit flags for Z and M.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WKBType {
    /// The concrete geometry kind.
    pub geometry_type: GeometryType,
    /// The coordinate dimensionality.
    pub dim: Dimension,
    /// Whether an SRID follows the type code.
    pub has_srid: bool,
}

impl WKBType {
    /// Decode a type code.
    pub fn from_code(code: u32) -> Result<Self> {
        let unknown = || GeometryError::Decode(format!("unknown geometry type code {code:#x}"));

        let base = code & !FLAG_MASK;
        let geometry_type = GeometryType::try_from(base % 1000).map_err(|_| unknown())?;
        let (iso_z, iso_m) = match base / 1000 {
            0 => (false, false),
            1 => (true, false),
            2 => (false, true),
            3 => (true, true),
            _ => return Err(unknown()),
        };

        Ok(Self {
            geometry_type,
            dim: Dimension::from_flags(
                iso_z || code & EWKB_Z_FLAG != 0,
                iso_m || code & EWKB_M_FLAG != 0,
            ),
            has_srid: code & SRID_FLAG != 0,
        })
    }

    /// Encode as an ISO type code, with the SRID flag when `has_srid` is set.
    pub fn code(&self) -> u32 {
        let offset = match self.dim {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        };
        let base: u32 = self.geometry_type.into();
        let flag = if self.has_srid { SRID_FLAG } else { 0 };
        (base + offset) | flag
    }
}
