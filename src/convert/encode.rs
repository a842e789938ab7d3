use super::*;

/// One destination stream along with the source cell of each of its runs.
///
/// `sources[i]` is the mesh cell id encoded as the `i`th run of `stream`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedBucket {
    pub stream: Vec<u32>,
    pub sources: Vec<CellId>,
}

impl EncodedBucket {
    fn push(&mut self, source: CellId, ids: &[PointId]) {
        stream::push_run(&mut self.stream, ids);
        self.sources.push(source);
    }

    /// Move the runs of `other` onto the end of this bucket.
    fn append(&mut self, mut other: EncodedBucket) {
        self.stream.append(&mut other.stream);
        self.sources.append(&mut other.sources);
    }

    /// Number of runs in the stream.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Mesh cells sorted into poly data buckets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodedCells {
    pub vertices: EncodedBucket,
    /// Lines, followed by polylines.
    pub lines: EncodedBucket,
    /// Triangles, quadrilaterals, and polygons in visitation order.
    pub polygons: EncodedBucket,
    /// Always empty, no mesh cell encodes to a strip.
    pub triangle_strips: EncodedBucket,
    /// Cells with no poly data bucket (volumetric kinds).
    pub skipped: Vec<CellId>,
}

impl EncodedCells {
    pub fn bucket(&self, bucket: Bucket) -> &EncodedBucket {
        match bucket {
            Bucket::Vertices => &self.vertices,
            Bucket::Lines => &self.lines,
            Bucket::Polygons => &self.polygons,
            Bucket::TriangleStrips => &self.triangle_strips,
        }
    }

    /// Source cell ids in global cell order, the order cell data is laid out in.
    pub fn source_order(&self) -> impl Iterator<Item = CellId> + '_ {
        Bucket::ALL
            .into_iter()
            .flat_map(move |b| self.bucket(b).sources.iter().copied())
    }

    /// Total number of encoded runs.
    pub fn len(&self) -> usize {
        Bucket::ALL.into_iter().map(|b| self.bucket(b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort `cells` into buckets, visiting in increasing cell id.
///
/// Polylines share the lines bucket but are placed after every line. They are encoded
/// separately and concatenated so that the lines stream and its source ids stay aligned.
pub fn encode_cells(cells: &[Cell]) -> EncodedCells {
    let mut enc = EncodedCells::default();
    let mut polylines = EncodedBucket::default();

    for (id, cell) in cells.iter().enumerate() {
        let ids = cell.point_ids();
        match cell {
            Cell::Vertex(_) => enc.vertices.push(id, ids),
            Cell::Line(_) => enc.lines.push(id, ids),
            Cell::PolyLine(_) => polylines.push(id, ids),
            Cell::Triangle(_) | Cell::Quadrilateral(_) | Cell::Polygon(_) => {
                enc.polygons.push(id, ids)
            }
            Cell::Tetrahedron(_) | Cell::Hexahedron(_) => {
                log::trace!("cell {} ({}) has no poly data bucket", id, cell.kind());
                enc.skipped.push(id);
            }
        }
    }

    enc.lines.append(polylines);
    enc
}

/// Convert a mesh into poly data.
///
/// Points are padded (or truncated) to 3D and keep their ids. Point data is copied as is.
/// Cells are bucketed by [`encode_cells`], volumetric cells are dropped. Cell data is reordered
/// into global cell order; if the mesh's cell data does not cover every encoded cell, the
/// output has no cell data.
pub fn mesh_to_poly_data<T: Clone, const D: usize>(mesh: &Mesh<T, D>) -> PolyData<T> {
    let mut poly = PolyData::new();

    poly.set_points(resize_all(mesh.points()));

    if let Some(data) = mesh.point_data() {
        poly.set_point_data(data.to_vec());
    }

    let enc = encode_cells(mesh.cells());
    log::debug!(
        "encoded {} points: {} vertices, {} lines, {} polygons",
        mesh.number_of_points(),
        enc.vertices.len(),
        enc.lines.len(),
        enc.polygons.len()
    );
    if !enc.skipped.is_empty() {
        log::warn!(
            "{} volumetric cells are not supported by poly data and were dropped",
            enc.skipped.len()
        );
    }

    if let Some(data) = mesh.cell_data() {
        let reordered = enc
            .source_order()
            .map(|id| data.get(id).cloned())
            .collect::<Option<Vec<_>>>();
        match reordered {
            Some(d) => poly.set_cell_data(d),
            None => log::warn!(
                "mesh has {} cell data values for {} cells, dropping cell data",
                data.len(),
                mesh.number_of_cells()
            ),
        }
    }

    let EncodedCells {
        vertices,
        lines,
        polygons,
        triangle_strips,
        ..
    } = enc;
    poly.set_vertices(vertices.stream);
    poly.set_lines(lines.stream);
    poly.set_polygons(polygons.stream);
    poly.set_triangle_strips(triangle_strips.stream);

    poly
}

impl<T: Clone, const D: usize> From<&Mesh<T, D>> for PolyData<T> {
    fn from(mesh: &Mesh<T, D>) -> Self {
        mesh_to_poly_data(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_mesh() -> Mesh<i32, 3> {
        let points = (0..6).map(|i| [i as f64, 0.0, 1.0]).collect();
        let cells = vec![
            Cell::PolyLine(vec![0, 2, 5]),           // 0
            Cell::Triangle([0, 1, 2]),               // 1
            Cell::Vertex(3),                         // 2
            Cell::Tetrahedron([0, 1, 2, 3]),         // 3
            Cell::Line([3, 4]),                      // 4
            Cell::Quadrilateral([0, 1, 4, 3]),       // 5
            Cell::Polygon(vec![0, 1, 2, 3, 4]),      // 6
        ];
        let mut m = Mesh::from_raw(points, cells);
        m.set_cell_data((0..7).map(|i| i * 10).collect());
        m
    }

    #[test]
    fn encode_buckets_with_sources() {
        let enc = encode_cells(mixed_mesh().cells());

        assert_eq!(enc.vertices.stream, vec![1, 3]);
        assert_eq!(enc.vertices.sources, vec![2]);

        // line first, even though the polyline was visited first
        assert_eq!(enc.lines.stream, vec![2, 3, 4, 3, 0, 2, 5]);
        assert_eq!(enc.lines.sources, vec![4, 0]);

        assert_eq!(
            enc.polygons.stream,
            vec![3, 0, 1, 2, 4, 0, 1, 4, 3, 5, 0, 1, 2, 3, 4]
        );
        assert_eq!(enc.polygons.sources, vec![1, 5, 6]);

        assert!(enc.triangle_strips.is_empty());
        assert_eq!(enc.skipped, vec![3]);

        assert_eq!(enc.len(), 6);
        assert_eq!(enc.source_order().collect::<Vec<_>>(), vec![2, 4, 0, 1, 5, 6]);
    }

    #[test]
    fn cell_data_follows_buckets() {
        let pd = mesh_to_poly_data(&mixed_mesh());
        assert_eq!(pd.cell_data(), Some(&[20, 40, 0, 10, 50, 60][..]));
        assert!(pd.point_data().is_none());
        assert_eq!(pd.number_of_cells(), Ok(6));
    }

    #[test]
    fn short_cell_data_is_dropped() {
        let mut m = mixed_mesh();
        m.set_cell_data(vec![1, 2, 3]);
        let pd = PolyData::from(&m);
        assert!(pd.cell_data().is_none());
        assert_eq!(pd.lines(), &[2, 3, 4, 3, 0, 2, 5]);
    }

    #[test]
    fn points_are_padded() {
        let mut m = Mesh::<u8, 2>::from_raw(vec![[1.0, 2.0], [3.0, 4.0]], Vec::new());
        m.set_point_data(vec![7, 9]);
        let pd = mesh_to_poly_data(&m);
        assert_eq!(pd.points(), &[[1.0, 2.0, 0.0], [3.0, 4.0, 0.0]]);
        assert_eq!(pd.point_data(), Some(&[7, 9][..]));
        assert_eq!(pd.number_of_cells(), Ok(0));
        assert!(pd.cell_data().is_none());
    }

    #[test]
    fn empty_mesh() {
        let pd = mesh_to_poly_data(&Mesh::<f64, 3>::new());
        assert_eq!(pd, PolyData::new());
    }
}
