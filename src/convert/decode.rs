use super::*;

/// Mesh cells decoded from poly data streams.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedCells {
    /// Cells in creation order: vertices, lines, strip triangles, polygons.
    pub cells: Vec<Cell>,
    /// Run count of each bucket, indexed by [`Bucket`] declaration order.
    pub runs: [usize; 4],
    /// Number of triangles produced by each strip run.
    pub strip_triangles: Vec<usize>,
}

impl DecodedCells {
    /// Total number of runs across all buckets.
    pub fn run_count(&self) -> usize {
        self.runs.iter().sum()
    }

    fn runs_of(&self, bucket: Bucket) -> usize {
        self.runs[bucket as usize]
    }

    /// Lay out per-run data (in global cell order) as per-cell data (in creation order).
    ///
    /// Each strip's value is repeated for every triangle of the strip. Returns `None` if `data`
    /// does not have exactly one value per run.
    pub fn spread_run_data<T: Clone>(&self, data: &[T]) -> Option<Vec<T>> {
        if data.len() != self.run_count() {
            return None;
        }

        let nv = self.runs_of(Bucket::Vertices);
        let nl = self.runs_of(Bucket::Lines);
        let np = self.runs_of(Bucket::Polygons);
        let (head, rest) = data.split_at(nv + nl);
        let (polygons, strips) = rest.split_at(np);

        let mut out = Vec::with_capacity(self.cells.len());
        out.extend_from_slice(head);
        for (value, &n) in strips.iter().zip(&self.strip_triangles) {
            out.extend(std::iter::repeat(value).take(n).cloned());
        }
        out.extend_from_slice(polygons);
        Some(out)
    }
}

fn invalid(bucket: Bucket, run: stream::Run<'_>, expected: &'static str) -> Error {
    Error::InvalidRunLength {
        bucket,
        offset: run.offset,
        count: run.ids.len(),
        expected,
    }
}

/// Decode every stream of `poly` into mesh cells.
///
/// Buckets are processed as vertices, lines, triangle strips, then polygons:
/// - a vertex run must hold exactly one id,
/// - a line run of two ids is a [`Cell::Line`], longer runs are [`Cell::PolyLine`]s,
/// - a strip run of `n >= 3` ids becomes `n - 2` triangles, window `i` being
///   `(ids[i], ids[i+1], ids[i+2])`,
/// - a polygon run is classified by length with [`Cell::from_polygon_run`].
///
/// Any malformed stream or out of place run length fails the whole decode.
pub fn decode_cells<T>(poly: &PolyData<T>) -> Result<DecodedCells> {
    let mut dec = DecodedCells::default();

    for run in poly.runs(Bucket::Vertices) {
        let run = run?;
        match *run.ids {
            [id] => dec.cells.push(Cell::Vertex(id)),
            _ => return Err(invalid(Bucket::Vertices, run, "exactly 1")),
        }
        dec.runs[Bucket::Vertices as usize] += 1;
    }

    for run in poly.runs(Bucket::Lines) {
        let run = run?;
        let cell = match *run.ids {
            [a, b] => Cell::Line([a, b]),
            [_, _, _, ..] => Cell::PolyLine(run.ids.to_vec()),
            _ => return Err(invalid(Bucket::Lines, run, "2 or more")),
        };
        dec.cells.push(cell);
        dec.runs[Bucket::Lines as usize] += 1;
    }

    for run in poly.runs(Bucket::TriangleStrips) {
        let run = run?;
        if run.ids.len() < 3 {
            return Err(invalid(Bucket::TriangleStrips, run, "3 or more"));
        }
        dec.cells.extend(
            run.ids
                .windows(3)
                .map(|w| Cell::Triangle([w[0], w[1], w[2]])),
        );
        dec.strip_triangles.push(run.ids.len() - 2);
        dec.runs[Bucket::TriangleStrips as usize] += 1;
    }

    for run in poly.runs(Bucket::Polygons) {
        let run = run?;
        if run.ids.is_empty() {
            return Err(invalid(Bucket::Polygons, run, "1 or more"));
        }
        dec.cells.push(Cell::from_polygon_run(run.ids));
        dec.runs[Bucket::Polygons as usize] += 1;
    }

    Ok(dec)
}

/// Convert poly data into a mesh of `D` dimensional points.
///
/// Points keep their ids, truncated (or padded) to `D` axes. Point data is copied as is. Cells
/// are created by [`decode_cells`] with dense ids from zero.
///
/// Cell data holding one value per run is rearranged into creation order with
/// [`DecodedCells::spread_run_data`]. Any other cell data is copied by position.
pub fn poly_data_to_mesh<T: Clone, const D: usize>(poly: &PolyData<T>) -> Result<Mesh<T, D>> {
    let dec = decode_cells(poly)?;
    log::debug!(
        "decoded {} points: {} runs into {} cells",
        poly.number_of_points(),
        dec.run_count(),
        dec.cells.len()
    );

    let mut mesh = Mesh::new();
    mesh.set_points(resize_all(poly.points()));

    if let Some(data) = poly.point_data() {
        mesh.set_point_data(data.to_vec());
    }

    if let Some(data) = poly.cell_data() {
        let data = dec.spread_run_data(data).unwrap_or_else(|| {
            if data.len() != dec.cells.len() {
                log::warn!(
                    "{} cell data values for {} runs and {} cells, copying by position",
                    data.len(),
                    dec.run_count(),
                    dec.cells.len()
                );
            }
            data.to_vec()
        });
        mesh.set_cell_data(data);
    }

    mesh.set_cells(dec.cells);
    Ok(mesh)
}

impl<T: Clone, const D: usize> TryFrom<&PolyData<T>> for Mesh<T, D> {
    type Error = Error;

    fn try_from(poly: &PolyData<T>) -> Result<Self> {
        poly_data_to_mesh(poly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    fn run_err(bucket: Bucket, offset: usize, count: usize, expected: &'static str) -> Error {
        Error::InvalidRunLength {
            bucket,
            offset,
            count,
            expected,
        }
    }

    #[test]
    fn strip_expansion() {
        let mut pd = PolyData::<()>::new();
        pd.set_triangle_strips(vec![4, 0, 2, 1, 3, 3, 5, 6, 7]);
        let dec = decode_cells(&pd).unwrap();
        assert_eq!(
            dec.cells,
            vec![
                Cell::Triangle([0, 2, 1]),
                Cell::Triangle([2, 1, 3]),
                Cell::Triangle([5, 6, 7]),
            ]
        );
        assert_eq!(dec.strip_triangles, vec![2, 1]);
        assert_eq!(dec.runs, [0, 0, 0, 2]);
    }

    #[test]
    fn long_strip_makes_n_minus_2() {
        let mut pd = PolyData::<()>::new();
        let mut s = vec![10];
        s.extend(0..10);
        pd.set_triangle_strips(s);
        let dec = decode_cells(&pd).unwrap();
        assert_eq!(dec.cells.len(), 8);
        assert_eq!(dec.cells[7], Cell::Triangle([7, 8, 9]));
    }

    #[quickcheck]
    fn strip_windows_are_sequential(ids: Vec<u32>) -> TestResult {
        if ids.len() < 3 {
            return TestResult::discard();
        }
        let mut s = Vec::new();
        stream::push_run(&mut s, &ids);
        let mut pd = PolyData::<()>::new();
        pd.set_triangle_strips(s);

        let dec = decode_cells(&pd).unwrap();
        TestResult::from_bool(
            dec.cells.len() == ids.len() - 2
                && dec
                    .cells
                    .iter()
                    .zip(ids.windows(3))
                    .all(|(c, w)| c.point_ids() == w),
        )
    }

    #[test]
    fn polygon_bucket_is_polymorphic() {
        let mut pd = PolyData::<()>::new();
        pd.set_polygons(vec![1, 9, 2, 8, 7, 4, 0, 1, 2, 3, 6, 0, 1, 2, 3, 4, 5]);
        let dec = decode_cells(&pd).unwrap();
        assert_eq!(
            dec.cells,
            vec![
                Cell::Vertex(9),
                Cell::Line([8, 7]),
                Cell::Quadrilateral([0, 1, 2, 3]),
                Cell::Polygon(vec![0, 1, 2, 3, 4, 5]),
            ]
        );
    }

    #[test]
    fn bad_run_lengths() {
        let mut pd = PolyData::<()>::new();
        pd.set_vertices(vec![1, 0, 2, 1, 2]);
        assert_eq!(
            decode_cells(&pd),
            Err(run_err(Bucket::Vertices, 2, 2, "exactly 1"))
        );

        let mut pd = PolyData::<()>::new();
        pd.set_lines(vec![2, 0, 1, 1, 5]);
        assert_eq!(
            decode_cells(&pd),
            Err(run_err(Bucket::Lines, 3, 1, "2 or more"))
        );

        let mut pd = PolyData::<()>::new();
        pd.set_triangle_strips(vec![2, 0, 1]);
        assert_eq!(
            decode_cells(&pd),
            Err(run_err(Bucket::TriangleStrips, 0, 2, "3 or more"))
        );

        let mut pd = PolyData::<()>::new();
        pd.set_polygons(vec![3, 0, 1, 2, 0]);
        assert_eq!(
            decode_cells(&pd),
            Err(run_err(Bucket::Polygons, 4, 0, "1 or more"))
        );
    }

    #[test]
    fn malformed_stream_fails_conversion() {
        let mut pd = PolyData::<f64>::new();
        pd.set_points(vec![[0.0; 3]; 3]);
        pd.set_polygons(vec![3, 0, 1, 2, 4, 0, 1]);
        let r = poly_data_to_mesh::<f64, 3>(&pd);
        assert_eq!(
            r,
            Err(Error::MalformedStream {
                bucket: Bucket::Polygons,
                offset: 4,
                count: 4,
                remaining: 2
            })
        );
    }

    #[test]
    fn run_data_is_spread_over_strips() {
        let mut pd = PolyData::<char>::new();
        pd.set_vertices(vec![1, 0]);
        pd.set_lines(vec![2, 0, 1]);
        pd.set_polygons(vec![3, 0, 1, 2]);
        pd.set_triangle_strips(vec![5, 0, 1, 2, 3, 4, 4, 5, 6, 7, 8]);
        // global order: vertex, line, polygon, strip, strip
        pd.set_cell_data(vec!['v', 'l', 'p', 'a', 'b']);

        let m: Mesh<char, 3> = Mesh::try_from(&pd).unwrap();
        assert_eq!(m.number_of_cells(), 8);
        assert_eq!(
            m.cell_data(),
            Some(&['v', 'l', 'a', 'a', 'a', 'b', 'b', 'p'][..])
        );
        assert_eq!(m.cell(7), Some(&Cell::Triangle([0, 1, 2])));
    }

    #[test]
    fn single_triangle_strips_use_run_order() {
        // one triangle per strip, so runs and cells have the same count
        let mut pd = PolyData::<char>::new();
        pd.set_polygons(vec![3, 0, 1, 2]);
        pd.set_triangle_strips(vec![3, 3, 4, 5]);
        pd.set_cell_data(vec!['x', 'y']);

        let m = poly_data_to_mesh::<char, 3>(&pd).unwrap();
        assert_eq!(
            m.cells(),
            &[Cell::Triangle([3, 4, 5]), Cell::Triangle([0, 1, 2])]
        );
        assert_eq!(m.cell_data(), Some(&['y', 'x'][..]));
    }

    #[test]
    fn other_cell_data_is_positional() {
        let mut pd = PolyData::<u8>::new();
        pd.set_triangle_strips(vec![4, 0, 1, 2, 3]);
        pd.set_cell_data(vec![1, 2]);
        let m = poly_data_to_mesh::<u8, 3>(&pd).unwrap();
        assert_eq!(m.cell_data(), Some(&[1, 2][..]));
    }

    #[test]
    fn points_truncate_to_mesh_dimension() {
        let mut pd = PolyData::<f32>::new();
        pd.set_points(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        pd.set_point_data(vec![0.5, 0.25]);
        let m = poly_data_to_mesh::<f32, 2>(&pd).unwrap();
        assert_eq!(m.points(), &[[1.0, 2.0], [4.0, 5.0]]);
        assert_eq!(m.point_data(), Some(&[0.5, 0.25][..]));
        assert!(m.cell_data().is_none());
    }
}
