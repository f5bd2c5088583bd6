use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, LineString, NestedArray};
use crate::io::{wkb, wkt};
use crate::trait_::{CollectionMember, GeometryKind, GeometryTrait};
use crate::validate::{nth, validate_members};

/// A Polygon: an exterior ring followed by zero or more interior rings.
///
/// Every ring is a LineString that is either empty or closed with at least four points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<LineString>,
    dim: Dimension,
    srid: i32,
}

impl Polygon {
    /// Construct a polygon. The first ring is the exterior ring.
    pub fn new(rings: Vec<LineString>, dim: Dimension, srid: i32) -> Result<Self> {
        validate_members(&rings, Some(GeometryType::LineString), dim, srid)?;
        for ring in &rings {
            ring.check_ring()?;
        }
        if let Some((exterior, interiors)) = rings.split_first() {
            if exterior.is_empty() && interiors.iter().any(|ring| !ring.is_empty()) {
                return Err(GeometryError::Degenerate(
                    "a polygon with interior rings needs a non-empty exterior ring".to_string(),
                ));
            }
        }
        Ok(Self { rings, dim, srid })
    }

    /// An empty polygon.
    pub fn empty(dim: Dimension, srid: i32) -> Self {
        Self {
            rings: vec![],
            dim,
            srid,
        }
    }

    /// A 2D polygon.
    pub fn xy(rings: Vec<LineString>, srid: i32) -> Result<Self> {
        Self::new(rings, Dimension::XY, srid)
    }

    /// A 3D polygon.
    pub fn xyz(rings: Vec<LineString>, srid: i32) -> Result<Self> {
        Self::new(rings, Dimension::XYZ, srid)
    }

    /// A 2D polygon with measures.
    pub fn xym(rings: Vec<LineString>, srid: i32) -> Result<Self> {
        Self::new(rings, Dimension::XYM, srid)
    }

    /// A 3D polygon with measures.
    pub fn xyzm(rings: Vec<LineString>, srid: i32) -> Result<Self> {
        Self::new(rings, Dimension::XYZM, srid)
    }

    /// The exterior ring, or `None` for an empty polygon.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    /// The number of interior rings
    pub fn num_interior_rings(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// The `n`th interior ring, 1-based.
    pub fn interior_ring_n(&self, n: usize) -> Result<&LineString> {
        nth(self.rings.get(1..).unwrap_or_default(), n)
    }

    /// An iterator over the interior rings
    pub fn interior_rings(&self) -> std::slice::Iter<'_, LineString> {
        self.rings.get(1..).unwrap_or_default().iter()
    }

    /// An iterator over all rings, exterior first.
    pub fn rings(&self) -> std::slice::Iter<'_, LineString> {
        self.rings.iter()
    }
}

impl GeometryTrait for Polygon {
    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    fn dimension(&self) -> Result<usize> {
        Ok(2)
    }

    fn to_array(&self) -> NestedArray {
        NestedArray::Nested(self.rings.iter().map(|r| r.to_array()).collect())
    }

    fn as_text(&self) -> String {
        wkt::write(self)
    }

    fn as_binary(&self) -> Vec<u8> {
        wkb::write(self, &Default::default())
    }
}

impl GeometryKind for Polygon {
    const GEOMETRY_TYPE: Option<GeometryType> = Some(GeometryType::Polygon);

    fn from_geometry(geom: Geometry) -> Result<Self> {
        geom.try_into()
    }

    fn with_srid(&self, srid: i32) -> Self {
        Self {
            rings: self.rings.iter().map(|r| r.with_srid(srid)).collect(),
            dim: self.dim,
            srid,
        }
    }
}

impl CollectionMember for Polygon {
    const COLLECTION_TYPE: GeometryType = GeometryType::MultiPolygon;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Point;
    use crate::test::linestring::{ls0, ring0};
    use crate::test::polygon::{donut, p0};

    #[test]
    fn rings() {
        let poly = donut();
        assert_eq!(poly.num_interior_rings(), 1);
        assert_eq!(poly.exterior_ring().unwrap().num_points(), 5);
        assert_eq!(poly.interior_ring_n(1).unwrap().num_points(), 5);
        assert!(matches!(
            poly.interior_ring_n(2),
            Err(GeometryError::OutOfRange { index: 2, len: 1 })
        ));
        assert_eq!(poly.interior_rings().count(), 1);
        assert_eq!(poly.rings().count(), 2);
    }

    #[test]
    fn rejects_open_ring() {
        let open = LineString::xy(
            vec![
                Point::xy(0., 0., 0),
                Point::xy(1., 0., 0),
                Point::xy(1., 1., 0),
                Point::xy(0., 1., 0),
            ],
            0,
        )
        .unwrap();
        let err = Polygon::xy(vec![open], 0).unwrap_err();
        assert!(matches!(err, GeometryError::Degenerate(_)));
    }

    #[test]
    fn rejects_holes_without_exterior() {
        let holes = vec![LineString::empty(Dimension::XY, 0), ring0()];
        let err = Polygon::xy(holes, 0).unwrap_err();
        assert!(matches!(err, GeometryError::Degenerate(_)));

        let err = crate::io::wkt::read("POLYGON (EMPTY, (0 0, 10 0, 10 10, 0 10, 0 0))")
            .unwrap_err();
        assert!(matches!(err, GeometryError::Degenerate(_)));

        let exterior_only = Polygon::xy(vec![LineString::empty(Dimension::XY, 0)], 0);
        assert!(exterior_only.is_ok());
    }

    #[test]
    fn rejects_short_ring() {
        let err = Polygon::xy(vec![ls0()], 0).unwrap_err();
        assert!(matches!(err, GeometryError::Degenerate(_)));
    }

    #[test]
    fn rejects_ring_with_other_srid() {
        let err = Polygon::xy(vec![ring0().with_srid(3857)], 4326).unwrap_err();
        assert!(matches!(
            err,
            GeometryError::SridMismatch {
                index: 0,
                expected: 4326,
                actual: 3857,
            }
        ));
    }

    #[test]
    fn empty_polygon() {
        let poly = Polygon::empty(Dimension::XYM, 0);
        assert!(poly.is_empty());
        assert!(poly.exterior_ring().is_none());
        assert_eq!(poly.num_interior_rings(), 0);
        assert!(poly.interior_ring_n(1).is_err());
        assert_eq!(poly.dimension().unwrap(), 2);
    }

    #[test]
    fn to_array_nests_rings() {
        let arr = p0().to_array();
        let NestedArray::Nested(rings) = arr else {
            panic!("expected nested rings");
        };
        assert_eq!(rings.len(), 1);
    }
}
