use crate::geometry::Point;

pub(crate) fn p0() -> Point {
    Point::xy(0., 1., 0)
}

pub(crate) fn p1() -> Point {
    Point::xy(1., 2., 0)
}

pub(crate) fn p2() -> Point {
    Point::xy(2., 3., 0)
}

pub(crate) fn pz() -> Point {
    Point::xyz(1., 2., 3., 4326)
}

pub(crate) fn pm() -> Point {
    Point::xym(1., 2., 4., 0)
}

pub(crate) fn pzm() -> Point {
    Point::xyzm(1.5, -2.25, 3e10, 0.1, 0)
}
