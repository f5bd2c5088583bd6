//! Reading and writing ISO-flavored WKB, with the EWKB SRID extension.

mod api;
mod common;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{from_hex, read, read_with_options, to_hex, write, write_to, FromWKB};
pub use common::{Endianness, WKBType, EWKB_M_FLAG, EWKB_Z_FLAG, SRID_FLAG};
pub use writer::{geometry_wkb_size, ToWkb, WkbWriter, WkbWriterOptions};
