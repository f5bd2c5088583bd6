//! Reading and writing WKT, with the EWKT `SRID=<int>;` prefix.

mod api;
pub(crate) mod reader;
pub(crate) mod writer;

pub use api::{read, read_with_options, write, write_ewkt, FromWKT};
pub use writer::ToWkt;
