use crate::geometry::{
    Geometry, GeometryCollection, MultiLineString, MultiPoint, MultiPolygon,
};
use crate::test::linestring::{ls0, ls1};
use crate::test::point::{p0, p1, p2};
use crate::test::polygon::{donut, p0 as poly0};

pub(crate) fn mp0() -> MultiPoint {
    MultiPoint::xy(vec![p0(), p1(), p2()], 0).unwrap()
}

pub(crate) fn ml0() -> MultiLineString {
    MultiLineString::xy(vec![ls0(), ls1()], 0).unwrap()
}

pub(crate) fn mpoly0() -> MultiPolygon {
    MultiPolygon::xy(vec![poly0(), donut()], 0).unwrap()
}

/// A collection holding one of everything, including a nested collection.
pub(crate) fn gc0() -> GeometryCollection {
    let nested = GeometryCollection::xy(vec![p2().into()], 0).unwrap();
    let members: Vec<Geometry> = vec![
        p0().into(),
        ls0().into(),
        poly0().into(),
        mp0().into(),
        ml0().into(),
        mpoly0().into(),
        nested.into(),
    ];
    GeometryCollection::xy(members, 0).unwrap()
}
