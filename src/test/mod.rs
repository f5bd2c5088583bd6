pub(crate) mod collection;
pub(crate) mod linestring;
pub(crate) mod point;
pub(crate) mod polygon;
