use crate::error::Result;
use crate::geometry::{LineString, Polygon};
use crate::io::wkb::reader::geometry::{Header, WKBReader};

impl<'a> WKBReader<'a> {
    pub(super) fn read_polygon(&mut self, header: Header) -> Result<Polygon> {
        // Each ring holds at least its own point count
        let num_rings = self.read_count(header.byte_order, 4)?;
        let mut rings = Vec::with_capacity(num_rings);
        for _ in 0..num_rings {
            let points = self.read_points(header)?;
            rings.push(LineString::new(points, header.dim, header.srid)?);
        }
        Polygon::new(rings, header.dim, header.srid)
    }
}

#[cfg(test)]
mod test {
    use crate::error::GeometryError;
    use crate::io::wkb::read;

    fn ring_polygon(coords: &[(f64, f64)]) -> Vec<u8> {
        let mut buf = vec![1u8];
        buf.extend_from_slice(&3u32.to_le_bytes());
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&(coords.len() as u32).to_le_bytes());
        for (x, y) in coords {
            buf.extend_from_slice(&x.to_le_bytes());
            buf.extend_from_slice(&y.to_le_bytes());
        }
        buf
    }

    #[test]
    fn closed_ring() {
        let buf = ring_polygon(&[(0., 0.), (1., 0.), (1., 1.), (0., 0.)]);
        let poly = read(&buf).unwrap().into_polygon().unwrap();
        assert_eq!(poly.exterior_ring().unwrap().num_points(), 4);
    }

    #[test]
    fn open_ring() {
        let buf = ring_polygon(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]);
        assert!(matches!(read(&buf), Err(GeometryError::Degenerate(_))));
    }
}
