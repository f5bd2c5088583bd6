//! Geometries that are decoded from WKT or WKB on first use.
//!
//! A [`Proxy`] holds a serialized payload until an accessor needs the geometry itself, then
//! decodes it once and keeps the result. Re-emitting the payload in its stored form never
//! decodes it.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::debug;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeometryError, Result};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    NestedArray, Point, Polygon,
};
use crate::io::{wkb, wkt};
use crate::trait_::GeometryKind;

/// The serialized form a proxy was created from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// WKT or EWKT
    Text(String),
    /// WKB or EWKB
    Binary(Vec<u8>),
}

impl Payload {
    fn kind(&self) -> &'static str {
        match self {
            Payload::Text(_) => "text",
            Payload::Binary(_) => "binary",
        }
    }
}

/// A lazily decoded geometry of kind `G`.
///
/// The proxy starts unloaded, holding its payload. The first accessor call other than
/// [`is_loaded`][Proxy::is_loaded] decodes the payload, checks that it is a `G`, and stores
/// the result; every later call reads the stored geometry. A failed load leaves the proxy
/// unloaded with its payload intact, so the same error is reported again on the next call.
///
/// Loading is synchronized: concurrent first callers block until one of them has finished and
/// then all observe the same value.
#[derive(Debug)]
pub struct Proxy<G> {
    /// `None` once loaded.
    payload: Mutex<Option<Payload>>,
    value: OnceLock<G>,
}

/// A proxy that only loads a Point.
pub type PointProxy = Proxy<Point>;
/// A proxy that only loads a LineString.
pub type LineStringProxy = Proxy<LineString>;
/// A proxy that only loads a Polygon.
pub type PolygonProxy = Proxy<Polygon>;
/// A proxy that only loads a MultiPoint.
pub type MultiPointProxy = Proxy<MultiPoint>;
/// A proxy that only loads a MultiLineString.
pub type MultiLineStringProxy = Proxy<MultiLineString>;
/// A proxy that only loads a MultiPolygon.
pub type MultiPolygonProxy = Proxy<MultiPolygon>;
/// A proxy that only loads a GeometryCollection.
pub type GeometryCollectionProxy = Proxy<GeometryCollection>;
/// A proxy accepting any kind of geometry.
pub type GeometryProxy = Proxy<Geometry>;

impl<G: GeometryKind> Proxy<G> {
    fn new(payload: Payload) -> Self {
        Self {
            payload: Mutex::new(Some(payload)),
            value: OnceLock::new(),
        }
    }

    /// An unloaded proxy over WKT or EWKT.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Payload::Text(text.into()))
    }

    /// An unloaded proxy over WKB or EWKB.
    pub fn from_binary(buf: impl Into<Vec<u8>>) -> Self {
        Self::new(Payload::Binary(buf.into()))
    }

    /// The geometry type this proxy requires, or `None` if it accepts any.
    pub fn expected_type(&self) -> Option<GeometryType> {
        G::GEOMETRY_TYPE
    }

    /// Whether the payload has been decoded. Never triggers a load.
    pub fn is_loaded(&self) -> bool {
        self.value.get().is_some()
    }

    /// The decoded geometry, loading it if needed.
    pub fn geometry(&self) -> Result<&G> {
        self.load()
    }

    /// Consume the proxy, returning the decoded geometry.
    pub fn into_inner(self) -> Result<G> {
        let Self { payload, value } = self;
        if let Some(value) = value.into_inner() {
            return Ok(value);
        }
        match payload.into_inner().unwrap_or_else(PoisonError::into_inner) {
            Some(payload) => decode(&payload),
            None => Err(unloaded_without_payload()),
        }
    }

    /// Topological dimension of the loaded geometry.
    pub fn dimension(&self) -> Result<usize> {
        self.load()?.dimension()
    }

    /// Coordinate dimensionality of the loaded geometry.
    pub fn dim(&self) -> Result<Dimension> {
        Ok(self.load()?.dim())
    }

    /// Whether the loaded geometry has Z ordinates.
    pub fn is_3d(&self) -> Result<bool> {
        Ok(self.load()?.is_3d())
    }

    /// Whether the loaded geometry has M ordinates.
    pub fn is_measured(&self) -> Result<bool> {
        Ok(self.load()?.is_measured())
    }

    /// SRID of the loaded geometry.
    pub fn srid(&self) -> Result<i32> {
        Ok(self.load()?.srid())
    }

    /// Runtime type of the loaded geometry.
    pub fn geometry_type(&self) -> Result<GeometryType> {
        Ok(self.load()?.geometry_type())
    }

    /// Whether the loaded geometry is empty.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    /// Nested ordinate arrays of the loaded geometry.
    pub fn to_array(&self) -> Result<NestedArray> {
        Ok(self.load()?.to_array())
    }

    /// WKT of the geometry. A proxy still holding text returns it unchanged.
    pub fn as_text(&self) -> Result<String> {
        if let Some(Payload::Text(text)) = self.lock_payload().as_ref() {
            return Ok(text.clone());
        }
        Ok(self.load()?.as_text())
    }

    /// WKB of the geometry. A proxy still holding bytes returns them unchanged.
    pub fn as_binary(&self) -> Result<Vec<u8>> {
        if let Some(Payload::Binary(buf)) = self.lock_payload().as_ref() {
            return Ok(buf.clone());
        }
        Ok(self.load()?.as_binary())
    }

    fn lock_payload(&self) -> MutexGuard<'_, Option<Payload>> {
        // The payload is only replaced after a successful decode, so a poisoned lock still
        // guards a consistent value
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Result<&G> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        let mut payload = self.lock_payload();
        // Another caller may have loaded while we waited for the lock
        if let Some(value) = self.value.get() {
            return Ok(value);
        }
        let Some(stored) = payload.as_ref() else {
            return Err(unloaded_without_payload());
        };

        debug!(
            "loading {} proxy from {} payload",
            expected_name::<G>(),
            stored.kind()
        );
        let decoded = decode::<G>(stored).map_err(|err| {
            debug!("{} proxy failed to load: {err}", expected_name::<G>());
            err
        })?;
        let value = self.value.get_or_init(|| decoded);
        *payload = None;
        Ok(value)
    }
}

impl<G: GeometryKind> From<G> for Proxy<G> {
    /// A proxy that is already loaded.
    fn from(value: G) -> Self {
        Self {
            payload: Mutex::new(None),
            value: OnceLock::from(value),
        }
    }
}

fn decode<G: GeometryKind>(payload: &Payload) -> Result<G> {
    let geom = match payload {
        Payload::Text(text) => wkt::read(text)?,
        Payload::Binary(buf) => wkb::read(buf)?,
    };
    G::from_geometry(geom)
}

fn expected_name<G: GeometryKind>() -> String {
    G::GEOMETRY_TYPE.map_or_else(|| "Geometry".to_string(), |t| t.to_string())
}

fn unloaded_without_payload() -> GeometryError {
    GeometryError::Decode("proxy holds neither a payload nor a geometry".to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trait_::GeometryTrait;
    use crate::io::wkb::WkbWriterOptions;
    use crate::test::collection::{gc0, mpoly0};
    use crate::test::linestring::ls_zm;
    use crate::test::point::pz;

    #[test]
    fn wrong_type_fails_and_stays_unloaded() {
        let proxy = PolygonProxy::from_text("POINT(1 2)");
        assert_eq!(proxy.expected_type(), Some(GeometryType::Polygon));
        let err = proxy.dimension().unwrap_err();
        assert!(matches!(
            err,
            GeometryError::TypeMismatch {
                index: None,
                expected: GeometryType::Polygon,
                actual: GeometryType::Point,
            }
        ));
        assert!(!proxy.is_loaded());
        assert!(proxy.srid().is_err());
        assert_eq!(proxy.as_text().unwrap(), "POINT(1 2)");
    }

    #[test]
    fn malformed_payload_is_retained() {
        let proxy = GeometryProxy::from_binary(vec![1u8, 1, 0]);
        assert!(matches!(proxy.is_empty(), Err(GeometryError::Decode(_))));
        assert!(!proxy.is_loaded());
        assert_eq!(proxy.as_binary().unwrap(), vec![1u8, 1, 0]);
        assert!(proxy.into_inner().is_err());
    }

    fn assert_transparent<G: GeometryKind + std::fmt::Debug>(proxy: Proxy<G>, expected: &G) {
        assert!(!proxy.is_loaded());
        assert_eq!(proxy.geometry_type().unwrap(), expected.geometry_type());
        assert!(proxy.is_loaded());
        assert_eq!(proxy.dim().unwrap(), expected.dim());
        assert_eq!(proxy.is_3d().unwrap(), expected.is_3d());
        assert_eq!(proxy.is_measured().unwrap(), expected.is_measured());
        assert_eq!(proxy.srid().unwrap(), expected.srid());
        assert_eq!(proxy.is_empty().unwrap(), expected.is_empty());
        assert_eq!(proxy.dimension().unwrap(), expected.dimension().unwrap());
        assert_eq!(proxy.to_array().unwrap(), expected.to_array());
        assert_eq!(proxy.as_text().unwrap(), expected.as_text());
        assert_eq!(proxy.as_binary().unwrap(), expected.as_binary());
        assert_eq!(proxy.geometry().unwrap(), expected);
        assert_eq!(&proxy.into_inner().unwrap(), expected);
    }

    #[test]
    fn transparency() {
        let line = ls_zm();
        assert_transparent(LineStringProxy::from_binary(line.as_binary()), &line);
        assert_transparent(
            LineStringProxy::from_text(wkt::write_ewkt(&line)),
            &line,
        );

        let polygons = mpoly0();
        assert_transparent(MultiPolygonProxy::from_text(polygons.as_text()), &polygons);

        let gc = Geometry::from(gc0());
        assert_transparent(GeometryProxy::from_binary(gc.as_binary()), &gc);
        assert_transparent(GeometryCollectionProxy::from_text(gc0().as_text()), &gc0());
    }

    #[test]
    fn text_fast_path() {
        let text = "point z ( 1 2 3 )";
        let proxy = PointProxy::from_text(text);
        assert_eq!(proxy.as_text().unwrap(), text);
        assert!(!proxy.is_loaded());

        // The other form needs the geometry
        assert_eq!(proxy.as_binary().unwrap(), pz().with_srid(0).as_binary());
        assert!(proxy.is_loaded());
        assert_eq!(proxy.as_text().unwrap(), "POINT Z (1 2 3)");
    }

    #[test]
    fn binary_fast_path() {
        let buf = wkb::write(&pz(), &WkbWriterOptions::big_endian());
        let proxy = PointProxy::from_binary(buf.clone());
        assert_eq!(proxy.as_binary().unwrap(), buf);
        assert!(!proxy.is_loaded());

        assert_eq!(proxy.as_text().unwrap(), "POINT Z (1 2 3)");
        assert!(proxy.is_loaded());
        // Re-encoded in the default byte order once loaded
        assert_eq!(proxy.as_binary().unwrap(), pz().as_binary());
    }

    #[test]
    fn already_loaded() {
        let proxy = PointProxy::from(pz());
        assert!(proxy.is_loaded());
        assert_eq!(proxy.srid().unwrap(), 4326);
        assert_eq!(proxy.into_inner().unwrap(), pz());
    }

    #[test]
    fn concurrent_first_access() {
        let proxy = GeometryProxy::from_text(gc0().as_text());
        let loaded: Vec<&Geometry> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| proxy.geometry().unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(loaded.iter().all(|geom| std::ptr::eq(*geom, loaded[0])));
        assert_eq!(loaded[0], &Geometry::from(gc0()));
    }
}
