use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, NestedArray};
use crate::io::{wkb, wkt};
use crate::trait_::{CollectionMember, GeometryKind, GeometryTrait};

/// A single coordinate. `z` and `m` are present exactly when the dimensionality says so.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    /// The x ordinate
    pub x: f64,
    /// The y ordinate
    pub y: f64,
    /// The z ordinate, if any
    pub z: Option<f64>,
    /// The m ordinate, if any
    pub m: Option<f64>,
}

impl Coord {
    /// The dimensionality implied by which ordinates are present.
    pub fn dim(&self) -> Dimension {
        Dimension::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// Build a coordinate from ordinates in x, y, [z], [m] order.
    ///
    /// `values` must hold exactly `dim.size()` ordinates.
    pub(crate) fn from_slice(values: &[f64], dim: Dimension) -> Self {
        let z = if dim.has_z() { values.get(2).copied() } else { None };
        let m = match dim {
            Dimension::XYM => values.get(2).copied(),
            Dimension::XYZM => values.get(3).copied(),
            _ => None,
        };
        Coord {
            x: values.first().copied().unwrap_or(f64::NAN),
            y: values.get(1).copied().unwrap_or(f64::NAN),
            z,
            m,
        }
    }

    /// The ordinates in x, y, [z], [m] order.
    pub fn to_vec(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(4);
        out.push(self.x);
        out.push(self.y);
        out.extend(self.z);
        out.extend(self.m);
        out
    }
}

/// A Point: zero or one coordinate.
///
/// An empty point has no coordinate and is distinct from a point at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coord: Option<Coord>,
    dim: Dimension,
    srid: i32,
}

impl Point {
    /// Construct a point, checking that the coordinate agrees with `dim`.
    pub fn new(coord: Option<Coord>, dim: Dimension, srid: i32) -> Result<Self> {
        if let Some(coord) = &coord {
            if coord.dim() != dim {
                return Err(GeometryError::DimensionMismatch {
                    index: 0,
                    expected: dim,
                    actual: coord.dim(),
                });
            }
        }
        Ok(Self { coord, dim, srid })
    }

    /// A point with the dimensionality of its coordinate.
    pub fn from_coord(coord: Coord, srid: i32) -> Self {
        Self {
            coord: Some(coord),
            dim: coord.dim(),
            srid,
        }
    }

    /// An empty point.
    pub fn empty(dim: Dimension, srid: i32) -> Self {
        Self {
            coord: None,
            dim,
            srid,
        }
    }

    /// A 2D point.
    pub fn xy(x: f64, y: f64, srid: i32) -> Self {
        Self::from_coord(
            Coord {
                x,
                y,
                z: None,
                m: None,
            },
            srid,
        )
    }

    /// A 3D point.
    pub fn xyz(x: f64, y: f64, z: f64, srid: i32) -> Self {
        Self::from_coord(
            Coord {
                x,
                y,
                z: Some(z),
                m: None,
            },
            srid,
        )
    }

    /// A 2D point with a measure.
    pub fn xym(x: f64, y: f64, m: f64, srid: i32) -> Self {
        Self::from_coord(
            Coord {
                x,
                y,
                z: None,
                m: Some(m),
            },
            srid,
        )
    }

    /// A 3D point with a measure.
    pub fn xyzm(x: f64, y: f64, z: f64, m: f64, srid: i32) -> Self {
        Self::from_coord(
            Coord {
                x,
                y,
                z: Some(z),
                m: Some(m),
            },
            srid,
        )
    }

    /// The coordinate, or `None` for an empty point.
    pub fn coord(&self) -> Option<&Coord> {
        self.coord.as_ref()
    }

    /// The x ordinate, or `None` for an empty point.
    pub fn x(&self) -> Option<f64> {
        self.coord.map(|c| c.x)
    }

    /// The y ordinate, or `None` for an empty point.
    pub fn y(&self) -> Option<f64> {
        self.coord.map(|c| c.y)
    }

    /// The z ordinate, if present.
    pub fn z(&self) -> Option<f64> {
        self.coord.and_then(|c| c.z)
    }

    /// The m ordinate, if present.
    pub fn m(&self) -> Option<f64> {
        self.coord.and_then(|c| c.m)
    }
}

impl GeometryTrait for Point {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    fn dimension(&self) -> Result<usize> {
        Ok(0)
    }

    fn to_array(&self) -> NestedArray {
        NestedArray::Coord(self.coord.map(|c| c.to_vec()).unwrap_or_default())
    }

    fn as_text(&self) -> String {
        wkt::write(self)
    }

    fn as_binary(&self) -> Vec<u8> {
        wkb::write(self, &Default::default())
    }
}

impl GeometryKind for Point {
    const GEOMETRY_TYPE: Option<GeometryType> = Some(GeometryType::Point);

    fn from_geometry(geom: Geometry) -> Result<Self> {
        geom.try_into()
    }

    fn with_srid(&self, srid: i32) -> Self {
        Self { srid, ..*self }
    }
}

impl CollectionMember for Point {
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiPoint;
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_is_not_origin() {
        let empty = Point::empty(Dimension::XY, 0);
        let origin = Point::xy(0., 0., 0);
        assert!(empty.is_empty());
        assert!(!origin.is_empty());
        assert_ne!(empty, origin);
        assert_eq!(empty.x(), None);
        assert_eq!(origin.x(), Some(0.));
    }

    #[test]
    fn ordinates() {
        let p = Point::xyzm(1., 2., 3., 4., 4326);
        assert_eq!(p.z(), Some(3.));
        assert_eq!(p.m(), Some(4.));
        assert!(p.is_3d());
        assert!(p.is_measured());
        assert_eq!(p.coordinate_dimension(), 4);
        assert_eq!(p.spatial_dimension(), 3);

        let p = Point::xym(1., 2., 5., 0);
        assert_eq!(p.z(), None);
        assert_eq!(p.m(), Some(5.));
        assert_eq!(p.dim(), Dimension::XYM);
        assert_eq!(p.spatial_dimension(), 2);
        assert_eq!(p.to_array(), NestedArray::Coord(vec![1., 2., 5.]));
    }

    #[test]
    fn new_checks_dimension() {
        let coord = Coord {
            x: 1.,
            y: 2.,
            z: Some(3.),
            m: None,
        };
        assert!(Point::new(Some(coord), Dimension::XYZ, 0).is_ok());
        let err = Point::new(Some(coord), Dimension::XY, 0).unwrap_err();
        assert!(matches!(err, GeometryError::DimensionMismatch { .. }));
    }

    #[test]
    fn from_slice_places_measure() {
        let c = Coord::from_slice(&[1., 2., 9.], Dimension::XYM);
        assert_eq!(c.z, None);
        assert_eq!(c.m, Some(9.));
        let c = Coord::from_slice(&[1., 2., 3., 9.], Dimension::XYZM);
        assert_eq!(c.to_vec(), vec![1., 2., 3., 9.]);
    }

    #[test]
    fn empty_point_dimension() {
        let p = Point::empty(Dimension::XYZ, 0);
        assert_eq!(p.dimension().unwrap(), 0);
        assert_eq!(p.to_array(), NestedArray::Coord(vec![]));
    }
}
