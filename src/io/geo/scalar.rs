use crate::datatypes::Dimension;
use crate::error::{GeometryError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::trait_::GeometryTrait;

fn check_xy(geom: &impl GeometryTrait) -> Result<()> {
    match geom.dim() {
        Dimension::XY => Ok(()),
        dim => Err(GeometryError::Degenerate(format!(
            "geo geometries are XY only, got {dim}"
        ))),
    }
}

/// Convert a [`Point`] to a [`geo::Point`]. Fails for empty or non-XY points.
pub fn point_to_geo(point: &Point) -> Result<geo::Point> {
    check_xy(point)?;
    match (point.x(), point.y()) {
        (Some(x), Some(y)) => Ok(geo::Point::new(x, y)),
        _ => Err(GeometryError::Degenerate(
            "geo has no empty point".to_string(),
        )),
    }
}

/// Convert a [`LineString`] to a [`geo::LineString`].
pub fn line_string_to_geo(line_string: &LineString) -> Result<geo::LineString> {
    check_xy(line_string)?;
    let coords = line_string
        .points()
        .map(|point| point_to_geo(point).map(|p| p.0))
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::LineString::new(coords))
}

/// Convert a [`Polygon`] to a [`geo::Polygon`]. An empty polygon has an empty exterior.
pub fn polygon_to_geo(polygon: &Polygon) -> Result<geo::Polygon> {
    check_xy(polygon)?;
    let exterior = match polygon.exterior_ring() {
        Some(ring) => line_string_to_geo(ring)?,
        None => geo::LineString::new(vec![]),
    };
    let interiors = polygon
        .interior_rings()
        .map(line_string_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::Polygon::new(exterior, interiors))
}

/// Convert a [`MultiPoint`] to a [`geo::MultiPoint`].
pub fn multi_point_to_geo(multi_point: &MultiPoint) -> Result<geo::MultiPoint> {
    check_xy(multi_point)?;
    let points = multi_point
        .iter()
        .map(point_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiPoint::new(points))
}

/// Convert a [`MultiLineString`] to a [`geo::MultiLineString`].
pub fn multi_line_string_to_geo(
    multi_line_string: &MultiLineString,
) -> Result<geo::MultiLineString> {
    check_xy(multi_line_string)?;
    let lines = multi_line_string
        .iter()
        .map(line_string_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiLineString::new(lines))
}

/// Convert a [`MultiPolygon`] to a [`geo::MultiPolygon`].
pub fn multi_polygon_to_geo(multi_polygon: &MultiPolygon) -> Result<geo::MultiPolygon> {
    check_xy(multi_polygon)?;
    let polygons = multi_polygon
        .iter()
        .map(polygon_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::MultiPolygon::new(polygons))
}

/// Convert a [`GeometryCollection`] to a [`geo::GeometryCollection`].
pub fn geometry_collection_to_geo(
    geometry_collection: &GeometryCollection,
) -> Result<geo::GeometryCollection> {
    check_xy(geometry_collection)?;
    let geoms = geometry_collection
        .iter()
        .map(geometry_to_geo)
        .collect::<Result<Vec<_>>>()?;
    Ok(geo::GeometryCollection::new_from(geoms))
}

/// Convert a [`Geometry`] to a [`geo::Geometry`].
pub fn geometry_to_geo(geometry: &Geometry) -> Result<geo::Geometry> {
    Ok(match geometry {
        Geometry::Point(g) => geo::Geometry::Point(point_to_geo(g)?),
        Geometry::LineString(g) => geo::Geometry::LineString(line_string_to_geo(g)?),
        Geometry::Polygon(g) => geo::Geometry::Polygon(polygon_to_geo(g)?),
        Geometry::MultiPoint(g) => geo::Geometry::MultiPoint(multi_point_to_geo(g)?),
        Geometry::MultiLineString(g) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(g)?)
        }
        Geometry::MultiPolygon(g) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(g)?),
        Geometry::GeometryCollection(g) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(g)?)
        }
    })
}

/// Convert a [`geo::Point`] to an XY [`Point`].
pub fn point_from_geo(point: &geo::Point, srid: i32) -> Point {
    Point::xy(point.x(), point.y(), srid)
}

fn points_from_geo(line_string: &geo::LineString, srid: i32) -> Vec<Point> {
    line_string
        .coords()
        .map(|coord| Point::xy(coord.x, coord.y, srid))
        .collect()
}

/// Convert a [`geo::LineString`] to an XY [`LineString`]. Fails for a single coordinate.
pub fn line_string_from_geo(line_string: &geo::LineString, srid: i32) -> Result<LineString> {
    LineString::xy(points_from_geo(line_string, srid), srid)
}

/// Convert a [`geo::Polygon`] to an XY [`Polygon`].
///
/// A polygon whose rings are all empty becomes the empty polygon.
pub fn polygon_from_geo(polygon: &geo::Polygon, srid: i32) -> Result<Polygon> {
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .filter(|ring| !ring.0.is_empty())
        .map(|ring| line_string_from_geo(ring, srid))
        .collect::<Result<Vec<_>>>()?;
    if !rings.is_empty() && polygon.exterior().0.is_empty() {
        return Err(GeometryError::Degenerate(
            "polygon has interior rings but no exterior ring".to_string(),
        ));
    }
    Polygon::xy(rings, srid)
}

/// Convert a [`geo::MultiPoint`] to an XY [`MultiPoint`].
pub fn multi_point_from_geo(multi_point: &geo::MultiPoint, srid: i32) -> Result<MultiPoint> {
    let points = multi_point
        .iter()
        .map(|point| point_from_geo(point, srid))
        .collect();
    MultiPoint::xy(points, srid)
}

/// Convert a [`geo::MultiLineString`] to an XY [`MultiLineString`].
pub fn multi_line_string_from_geo(
    multi_line_string: &geo::MultiLineString,
    srid: i32,
) -> Result<MultiLineString> {
    let lines = multi_line_string
        .iter()
        .map(|line| line_string_from_geo(line, srid))
        .collect::<Result<Vec<_>>>()?;
    MultiLineString::xy(lines, srid)
}

/// Convert a [`geo::MultiPolygon`] to an XY [`MultiPolygon`].
pub fn multi_polygon_from_geo(
    multi_polygon: &geo::MultiPolygon,
    srid: i32,
) -> Result<MultiPolygon> {
    let polygons = multi_polygon
        .iter()
        .map(|polygon| polygon_from_geo(polygon, srid))
        .collect::<Result<Vec<_>>>()?;
    MultiPolygon::xy(polygons, srid)
}

/// Convert a [`geo::GeometryCollection`] to an XY [`GeometryCollection`].
pub fn geometry_collection_from_geo(
    geometry_collection: &geo::GeometryCollection,
    srid: i32,
) -> Result<GeometryCollection> {
    let geoms = geometry_collection
        .iter()
        .map(|geom| geometry_from_geo(geom, srid))
        .collect::<Result<Vec<_>>>()?;
    GeometryCollection::xy(geoms, srid)
}

/// Convert a [`geo::Geometry`] to an XY [`Geometry`].
///
/// `Line` becomes a two-point LineString; `Rect` and `Triangle` become Polygons.
pub fn geometry_from_geo(geometry: &geo::Geometry, srid: i32) -> Result<Geometry> {
    let geom = match geometry {
        geo::Geometry::Point(g) => point_from_geo(g, srid).into(),
        geo::Geometry::Line(g) => line_string_from_geo(&geo::LineString::from(*g), srid)?.into(),
        geo::Geometry::LineString(g) => line_string_from_geo(g, srid)?.into(),
        geo::Geometry::Polygon(g) => polygon_from_geo(g, srid)?.into(),
        geo::Geometry::MultiPoint(g) => multi_point_from_geo(g, srid)?.into(),
        geo::Geometry::MultiLineString(g) => multi_line_string_from_geo(g, srid)?.into(),
        geo::Geometry::MultiPolygon(g) => multi_polygon_from_geo(g, srid)?.into(),
        geo::Geometry::GeometryCollection(g) => geometry_collection_from_geo(g, srid)?.into(),
        geo::Geometry::Rect(g) => polygon_from_geo(&g.to_polygon(), srid)?.into(),
        geo::Geometry::Triangle(g) => polygon_from_geo(&g.to_polygon(), srid)?.into(),
    };
    Ok(geom)
}

impl From<geo::Point> for Point {
    fn from(value: geo::Point) -> Self {
        point_from_geo(&value, 0)
    }
}

impl TryFrom<geo::Geometry> for Geometry {
    type Error = GeometryError;

    fn try_from(value: geo::Geometry) -> Result<Self> {
        geometry_from_geo(&value, 0)
    }
}

impl TryFrom<&Geometry> for geo::Geometry {
    type Error = GeometryError;

    fn try_from(value: &Geometry) -> Result<Self> {
        geometry_to_geo(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::collection::gc0;
    use crate::test::linestring::ls_zm;
    use crate::test::point::pz;
    use crate::test::polygon::donut;
    use geo::{line_string, polygon};

    #[test]
    fn round_trip_through_geo() {
        let gc = Geometry::from(gc0());
        let geo_geom = geo::Geometry::try_from(&gc).unwrap();
        assert_eq!(Geometry::try_from(geo_geom).unwrap(), gc);
    }

    #[test]
    fn polygon_to_geo_keeps_rings() {
        let polygon = polygon_to_geo(&donut()).unwrap();
        assert_eq!(polygon.exterior().0.len(), 5);
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn geo_closes_rings() {
        let open = polygon![(x: 0., y: 0.), (x: 1., y: 0.), (x: 1., y: 1.)];
        let polygon = polygon_from_geo(&open, 4326).unwrap();
        let ring = polygon.exterior_ring().unwrap();
        assert!(ring.is_closed());
        assert_eq!(ring.num_points(), 4);
        assert_eq!(polygon.srid(), 4326);
    }

    #[test]
    fn unrepresentable_in_geo() {
        assert!(matches!(
            point_to_geo(&pz()),
            Err(GeometryError::Degenerate(_))
        ));
        assert!(matches!(
            line_string_to_geo(&ls_zm()),
            Err(GeometryError::Degenerate(_))
        ));
        assert!(matches!(
            point_to_geo(&Point::empty(Dimension::XY, 0)),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn single_coordinate_line_string() {
        let line = line_string![(x: 1., y: 2.)];
        assert!(matches!(
            line_string_from_geo(&line, 0),
            Err(GeometryError::Degenerate(_))
        ));
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = geo::Rect::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 2., y: 1. });
        let geom = geometry_from_geo(&geo::Geometry::Rect(rect), 0).unwrap();
        let polygon = geom.into_polygon().unwrap();
        assert_eq!(polygon.exterior_ring().unwrap().num_points(), 5);
        assert_eq!(Point::from(geo::Point::new(1., 2.)), Point::xy(1., 2., 0));
    }
}
