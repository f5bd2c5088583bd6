mod collection;
mod geometry;
mod linestring;
mod point;
mod polygon;

pub(crate) use geometry::WKBReader;
