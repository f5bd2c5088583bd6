//! [`Display`][std::fmt::Display] as WKT and [`FromStr`][std::str::FromStr] from WKT or EWKT.

mod scalar;
