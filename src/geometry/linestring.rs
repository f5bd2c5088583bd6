use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, NestedArray, Point};
use crate::io::{wkb, wkt};
use crate::trait_::{CollectionMember, GeometryKind, GeometryTrait};
use crate::validate::{nth, validate_members};

/// A LineString: an ordered sequence of zero or at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    points: Vec<Point>,
    dim: Dimension,
    srid: i32,
}

impl LineString {
    /// Construct a LineString from points sharing `dim` and `srid`.
    ///
    /// Fails on a single point, or on an empty point among the vertices.
    pub fn new(points: Vec<Point>, dim: Dimension, srid: i32) -> Result<Self> {
        validate_members(&points, Some(GeometryType::Point), dim, srid)?;

        if points.len() == 1 {
            return Err(GeometryError::Degenerate(
                "a LineString must have zero or at least two points".to_string(),
            ));
        }
        if let Some(index) = points.iter().position(|p| p.is_empty()) {
            return Err(GeometryError::Degenerate(format!(
                "a LineString cannot contain an empty point (point {index})"
            )));
        }

        Ok(Self { points, dim, srid })
    }

    /// An empty LineString.
    pub fn empty(dim: Dimension, srid: i32) -> Self {
        Self {
            points: vec![],
            dim,
            srid,
        }
    }

    /// A 2D LineString.
    pub fn xy(points: Vec<Point>, srid: i32) -> Result<Self> {
        Self::new(points, Dimension::XY, srid)
    }

    /// A 3D LineString.
    pub fn xyz(points: Vec<Point>, srid: i32) -> Result<Self> {
        Self::new(points, Dimension::XYZ, srid)
    }

    /// A 2D LineString with measures.
    pub fn xym(points: Vec<Point>, srid: i32) -> Result<Self> {
        Self::new(points, Dimension::XYM, srid)
    }

    /// A 3D LineString with measures.
    pub fn xyzm(points: Vec<Point>, srid: i32) -> Result<Self> {
        Self::new(points, Dimension::XYZM, srid)
    }

    /// The number of points in this LineString
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The `n`th point, 1-based.
    pub fn point_n(&self, n: usize) -> Result<&Point> {
        nth(&self.points, n)
    }

    /// An iterator over the points in this LineString
    pub fn points(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// The first point, or `None` when empty.
    pub fn start_point(&self) -> Option<&Point> {
        self.points.first()
    }

    /// The last point, or `None` when empty.
    pub fn end_point(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Whether the first and last points are coordinate-equal. Empty LineStrings are not closed.
    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.coord() == end.coord(),
            _ => false,
        }
    }

    /// Whether this LineString can bound a polygon: empty, or closed with at least four points.
    pub(crate) fn check_ring(&self) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        if self.num_points() < 4 {
            return Err(GeometryError::Degenerate(format!(
                "a ring must have at least 4 points, got {}",
                self.num_points()
            )));
        }
        if !self.is_closed() {
            return Err(GeometryError::Degenerate(
                "a ring must be closed".to_string(),
            ));
        }
        Ok(())
    }
}

impl GeometryTrait for LineString {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::LineString
    }

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn dimension(&self) -> Result<usize> {
        Ok(1)
    }

    fn to_array(&self) -> NestedArray {
        NestedArray::Nested(self.points.iter().map(|p| p.to_array()).collect())
    }

    fn as_text(&self) -> String {
        wkt::write(self)
    }

    fn as_binary(&self) -> Vec<u8> {
        wkb::write(self, &Default::default())
    }
}

impl GeometryKind for LineString {
    const GEOMETRY_TYPE: Option<GeometryType> = Some(GeometryType::LineString);

    fn from_geometry(geom: Geometry) -> Result<Self> {
        geom.try_into()
    }

    fn with_srid(&self, srid: i32) -> Self {
        Self {
            points: self.points.iter().map(|p| p.with_srid(srid)).collect(),
            dim: self.dim,
            srid,
        }
    }
}

impl CollectionMember for LineString {
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiLineString;
}

impl<'a> IntoIterator for &'a LineString {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}
