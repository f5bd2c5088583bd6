use crate::geometry::Polygon;
use crate::test::linestring::{ring0, square};

pub(crate) fn p0() -> Polygon {
    Polygon::xy(vec![ring0()], 0).unwrap()
}

/// A square with a square hole.
pub(crate) fn donut() -> Polygon {
    Polygon::xy(vec![square(0., 0., 10.), square(2., 2., 4.)], 0).unwrap()
}
