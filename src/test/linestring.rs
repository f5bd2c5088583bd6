use crate::geometry::{LineString, Point};

pub(crate) fn ls0() -> LineString {
    LineString::xy(vec![Point::xy(0., 1., 0), Point::xy(1., 2., 0)], 0).unwrap()
}

pub(crate) fn ls1() -> LineString {
    LineString::xy(
        vec![
            Point::xy(3., 4., 0),
            Point::xy(5., 6., 0),
            Point::xy(7., 8., 0),
        ],
        0,
    )
    .unwrap()
}

/// A closed 10 by 10 square at the origin.
pub(crate) fn ring0() -> LineString {
    square(0., 0., 10.)
}

pub(crate) fn square(x: f64, y: f64, size: f64) -> LineString {
    LineString::xy(
        vec![
            Point::xy(x, y, 0),
            Point::xy(x + size, y, 0),
            Point::xy(x + size, y + size, 0),
            Point::xy(x, y + size, 0),
            Point::xy(x, y, 0),
        ],
        0,
    )
    .unwrap()
}

pub(crate) fn ls_zm() -> LineString {
    LineString::xyzm(
        vec![
            Point::xyzm(0., 0., 1., 10., 4326),
            Point::xyzm(1., 1., 2., 20., 4326),
        ],
        4326,
    )
    .unwrap()
}
