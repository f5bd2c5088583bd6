use crate::geometry::Collection;
use crate::io::wkb::writer::{header_size, ToWkb, WkbWriter};
use crate::trait_::CollectionMember;

impl<G: CollectionMember> ToWkb for Collection<G> {
    fn wkb_body_size(&self) -> usize {
        4 + self
            .iter()
            .map(|member| header_size(false) + member.wkb_body_size())
            .sum::<usize>()
    }

    fn write_wkb_body(&self, writer: &mut WkbWriter) {
        writer.write_count(self.num_geometries());
        for member in self.iter() {
            // Members inherit the SRID of the enclosing header
            writer.write_geometry(member, false);
        }
    }
}
