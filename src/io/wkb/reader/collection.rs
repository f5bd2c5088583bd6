use crate::error::Result;
use crate::geometry::Collection;
use crate::io::wkb::reader::geometry::{Header, WKBReader};
use crate::trait_::CollectionMember;

/// Smallest possible nested geometry: byte order, type code and a count.
const MIN_MEMBER_SIZE: u64 = 1 + 4 + 4;

impl<'a> WKBReader<'a> {
    /// Read a member count and that many self-describing members, then validate them as a
    /// whole. Members without their own SRID inherit the collection's.
    pub(super) fn read_collection<G: CollectionMember>(
        &mut self,
        header: Header,
        depth: usize,
    ) -> Result<Collection<G>> {
        let num_geometries = self.read_count(header.byte_order, MIN_MEMBER_SIZE)?;
        let mut geometries = Vec::with_capacity(num_geometries);
        for _ in 0..num_geometries {
            geometries.push(self.read_geometry(depth + 1, Some(header.srid))?);
        }
        Collection::try_from_geometries(geometries, header.dim, header.srid)
    }
}
