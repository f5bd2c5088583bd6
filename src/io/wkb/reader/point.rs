use crate::datatypes::Dimension;
use crate::error::Result;
use crate::geometry::{Coord, Point};
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::geometry::{Header, WKBReader};

impl<'a> WKBReader<'a> {
    /// Read one coordinate. A coordinate whose ordinates are all NaN encodes an empty point.
    pub(super) fn read_coord(
        &mut self,
        byte_order: Endianness,
        dim: Dimension,
    ) -> Result<Option<Coord>> {
        let mut values = [0.0; 4];
        for value in values.iter_mut().take(dim.size()) {
            *value = self.read_f64(byte_order)?;
        }
        let values = &values[..dim.size()];
        if values.iter().all(|v| v.is_nan()) {
            return Ok(None);
        }
        Ok(Some(Coord::from_slice(values, dim)))
    }

    pub(super) fn read_point(&mut self, header: Header) -> Result<Point> {
        let coord = self.read_coord(header.byte_order, header.dim)?;
        Point::new(coord, header.dim, header.srid)
    }
}

#[cfg(test)]
mod test {
    use crate::datatypes::Dimension;
    use crate::geometry::Point;
    use crate::io::wkb::read;
    use crate::trait_::GeometryTrait;

    #[test]
    fn big_endian_point() {
        let mut buf = vec![0u8, 0, 0, 0, 1];
        buf.extend_from_slice(&1.5f64.to_be_bytes());
        buf.extend_from_slice(&(-2.0f64).to_be_bytes());
        let geom = read(&buf).unwrap();
        assert_eq!(geom.into_point().unwrap(), Point::xy(1.5, -2., 0));
    }

    #[test]
    fn nan_point_is_empty() {
        let mut buf = vec![1u8];
        buf.extend_from_slice(&1001u32.to_le_bytes());
        for _ in 0..3 {
            buf.extend_from_slice(&f64::NAN.to_le_bytes());
        }
        let point = read(&buf).unwrap().into_point().unwrap();
        assert!(point.is_empty());
        assert_eq!(point.dim(), Dimension::XYZ);
    }

    #[test]
    fn embedded_srid() {
        let mut buf = vec![1u8];
        buf.extend_from_slice(&0x2000_0001u32.to_le_bytes());
        buf.extend_from_slice(&4326i32.to_le_bytes());
        buf.extend_from_slice(&1f64.to_le_bytes());
        buf.extend_from_slice(&2f64.to_le_bytes());
        let geom = read(&buf).unwrap();
        assert_eq!(geom.srid(), 4326);
    }
}
