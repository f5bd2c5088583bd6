use crate::geometry::Polygon;
use crate::io::wkb::writer::linestring::write_points;
use crate::io::wkb::writer::{ToWkb, WkbWriter};

impl ToWkb for Polygon {
    fn wkb_body_size(&self) -> usize {
        // Ring count, then per ring a point count and its coordinates
        4 + self
            .rings()
            .map(|ring| ring.wkb_body_size())
            .sum::<usize>()
    }

    fn write_wkb_body(&self, writer: &mut WkbWriter) {
        writer.write_count(self.rings().len());
        for ring in self.rings() {
            write_points(writer, ring.num_points(), ring.points());
        }
    }
}

#[cfg(test)]
mod test {
    use crate::datatypes::Dimension;
    use crate::geometry::Polygon;
    use crate::io::wkb::{geometry_wkb_size, read, write, WkbWriterOptions};
    use crate::test::polygon::{donut, p0};
    use crate::trait_::GeometryKind;

    #[test]
    fn round_trip() {
        let polygons = [
            p0(),
            donut(),
            donut().with_srid(4326),
            Polygon::empty(Dimension::XYZ, 0),
        ];
        for options in [WkbWriterOptions::little_endian(), WkbWriterOptions::big_endian()] {
            for polygon in polygons.iter() {
                let buf = write(polygon, &options);
                assert_eq!(buf.len(), geometry_wkb_size(polygon));
                assert_eq!(&read(&buf).unwrap().into_polygon().unwrap(), polygon);
            }
        }
    }

    #[test]
    fn ring_layout() {
        let buf = write(&donut(), &WkbWriterOptions::default());
        // header, ring count, first ring count
        assert_eq!(&buf[5..9], &2u32.to_le_bytes());
        assert_eq!(&buf[9..13], &5u32.to_le_bytes());
        assert_eq!(buf.len(), 5 + 4 + 2 * (4 + 5 * 16));
    }
}
