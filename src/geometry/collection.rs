use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, LineString, NestedArray, Point, Polygon};
use crate::io::{wkb, wkt};
use crate::trait_::{CollectionMember, GeometryKind, GeometryTrait};
use crate::validate::{nth, validate_members};

/// An ordered collection of geometries sharing one dimensionality and SRID.
///
/// The member type decides the collection type: [`MultiPoint`], [`MultiLineString`],
/// [`MultiPolygon`], or the heterogeneous [`GeometryCollection`].
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<G> {
    geometries: Vec<G>,
    dim: Dimension,
    srid: i32,
}

/// A collection of points.
pub type MultiPoint = Collection<Point>;
/// A collection of LineStrings.
pub type MultiLineString = Collection<LineString>;
/// A collection of polygons.
pub type MultiPolygon = Collection<Polygon>;
/// A collection of geometries of any type.
pub type GeometryCollection = Collection<Geometry>;

impl<G: CollectionMember> Collection<G> {
    /// Construct a collection whose members all share `dim` and `srid`.
    pub fn new(geometries: Vec<G>, dim: Dimension, srid: i32) -> Result<Self> {
        validate_members(&geometries, G::GEOMETRY_TYPE, dim, srid)?;
        Ok(Self {
            geometries,
            dim,
            srid,
        })
    }

    /// Construct from untyped members, checking each member's type as well.
    pub fn try_from_geometries(
        geometries: Vec<Geometry>,
        dim: Dimension,
        srid: i32,
    ) -> Result<Self> {
        validate_members(&geometries, G::GEOMETRY_TYPE, dim, srid)?;
        let geometries = geometries
            .into_iter()
            .map(G::from_geometry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            geometries,
            dim,
            srid,
        })
    }

    /// An empty collection.
    pub fn empty(dim: Dimension, srid: i32) -> Self {
        Self {
            geometries: vec![],
            dim,
            srid,
        }
    }

    /// A 2D collection.
    pub fn xy(geometries: Vec<G>, srid: i32) -> Result<Self> {
        Self::new(geometries, Dimension::XY, srid)
    }

    /// A 3D collection.
    pub fn xyz(geometries: Vec<G>, srid: i32) -> Result<Self> {
        Self::new(geometries, Dimension::XYZ, srid)
    }

    /// A 2D collection with measures.
    pub fn xym(geometries: Vec<G>, srid: i32) -> Result<Self> {
        Self::new(geometries, Dimension::XYM, srid)
    }

    /// A 3D collection with measures.
    pub fn xyzm(geometries: Vec<G>, srid: i32) -> Result<Self> {
        Self::new(geometries, Dimension::XYZM, srid)
    }

    /// The number of geometries in this collection
    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// The `n`th member, 1-based.
    pub fn geometry_n(&self, n: usize) -> Result<&G> {
        nth(&self.geometries, n)
    }

    /// An iterator over the members of this collection
    pub fn iter(&self) -> std::slice::Iter<'_, G> {
        self.geometries.iter()
    }

    /// Whether both collections hold the same members, in any order.
    pub fn spatially_equals(&self, other: &Self) -> bool {
        if self.dim != other.dim
            || self.srid != other.srid
            || self.geometries.len() != other.geometries.len()
        {
            return false;
        }

        let mut used = vec![false; other.geometries.len()];
        self.geometries.iter().all(|geom| {
            let found = other
                .geometries
                .iter()
                .enumerate()
                .find(|(i, candidate)| !used[*i] && geom.spatially_equals(candidate));
            match found {
                Some((i, _)) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl<G: CollectionMember> GeometryTrait for Collection<G> {
    fn geometry_type(&self) -> GeometryType {
        G::COLLECTION_TYPE
    }

    fn dim(&self) -> Dimension {
        self.dim
    }

    fn srid(&self) -> i32 {
        self.srid
    }

    fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    fn dimension(&self) -> Result<usize> {
        let mut max = None;
        for geom in &self.geometries {
            let dimension = geom.dimension()?;
            max = Some(max.map_or(dimension, |m: usize| m.max(dimension)));
        }
        max.ok_or_else(|| {
            GeometryError::Degenerate(format!(
                "the dimension of an empty {} is undefined",
                G::COLLECTION_TYPE
            ))
        })
    }

    fn to_array(&self) -> NestedArray {
        NestedArray::Nested(self.geometries.iter().map(|g| g.to_array()).collect())
    }

    fn as_text(&self) -> String {
        wkt::write(self)
    }

    fn as_binary(&self) -> Vec<u8> {
        wkb::write(self, &Default::default())
    }
}

impl<'a, G> IntoIterator for &'a Collection<G> {
    type Item = &'a G;
    type IntoIter = std::slice::Iter<'a, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.geometries.iter()
    }
}

macro_rules! impl_geometry_kind {
    ($member:ty, $variant:ident) => {
        impl GeometryKind for Collection<$member> {
            const GEOMETRY_TYPE: Option<GeometryType> = Some(GeometryType::$variant);

            fn from_geometry(geom: Geometry) -> Result<Self> {
                geom.try_into()
            }

            fn with_srid(&self, srid: i32) -> Self {
                Self {
                    geometries: self.geometries.iter().map(|g| g.with_srid(srid)).collect(),
                    dim: self.dim,
                    srid,
                }
            }

            fn spatially_equals(&self, other: &Self) -> bool {
                Collection::spatially_equals(self, other)
            }
        }
    };
}

impl_geometry_kind!(Point, MultiPoint);
impl_geometry_kind!(LineString, MultiLineString);
impl_geometry_kind!(Polygon, MultiPolygon);
impl_geometry_kind!(Geometry, GeometryCollection);
