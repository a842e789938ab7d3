use crate::*;

/// Flat, VTK style poly data.
///
/// Cells live in four independent streams (vertices, lines, polygons, triangle strips), each
/// a sequence of `[count, ids..]` runs (see [`stream`]). Streams and arrays are only ever
/// replaced whole; an empty stream means there are no cells of that kind.
///
/// Point data, when present, is parallel to the points. Cell data, when present, is indexed by
/// the **global cell order**: every vertex run, then every line run, then polygons, then
/// triangle strips, each in stream order.
///
/// Absent data (`None`) is distinct from an empty data array.
///
/// `PartialEq` compares content only, the modification time is ignored.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PolyData<T> {
    points: Vec<Point3>,
    vertices: Vec<u32>,
    lines: Vec<u32>,
    polygons: Vec<u32>,
    triangle_strips: Vec<u32>,
    point_data: Option<Vec<T>>,
    cell_data: Option<Vec<T>>,
    #[serde(skip)]
    mtime: u64,
}

impl<T> Default for PolyData<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PolyData<T> {
    /// Empty poly data: no points, empty streams, no point or cell data.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            vertices: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            triangle_strips: Vec::new(),
            point_data: None,
            cell_data: None,
            mtime: 0,
        }
    }

    /// Reset to the empty state.
    pub fn initialize(&mut self) {
        let mtime = self.mtime;
        *self = Self::new();
        self.mtime = mtime;
        self.modified();
    }

    /// Modification time, advanced by every mutating call.
    pub fn mtime(&self) -> u64 {
        self.mtime
    }

    fn modified(&mut self) {
        self.mtime += 1;
    }

    // ===== Points =====================================================
    /// Number of points, `0` if none were set.
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// All points, indexed by point id.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Replace every point.
    pub fn set_points(&mut self, points: Vec<Point3>) {
        self.points = points;
        self.modified();
    }

    /// The point at `id`, `None` if out of range.
    pub fn point(&self, id: usize) -> Option<Point3> {
        self.points.get(id).copied()
    }

    /// Overwrite the point at `id`.
    ///
    /// An `id` equal to the number of points appends a new point, anything greater is
    /// [`Error::PointOutOfRange`].
    pub fn set_point(&mut self, id: usize, point: Point3) -> Result<()> {
        set_or_push(&mut self.points, id, point)
            .map_err(|len| Error::PointOutOfRange { id, len })?;
        self.modified();
        Ok(())
    }

    // ===== Streams ====================================================
    /// The vertices stream, one id per run.
    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    /// Replace the vertices stream.
    pub fn set_vertices(&mut self, stream: Vec<u32>) {
        self.set_stream(Bucket::Vertices, stream)
    }

    /// The lines stream, lines and polylines.
    pub fn lines(&self) -> &[u32] {
        &self.lines
    }

    /// Replace the lines stream.
    pub fn set_lines(&mut self, stream: Vec<u32>) {
        self.set_stream(Bucket::Lines, stream)
    }

    /// The polygons stream.
    pub fn polygons(&self) -> &[u32] {
        &self.polygons
    }

    /// Replace the polygons stream.
    pub fn set_polygons(&mut self, stream: Vec<u32>) {
        self.set_stream(Bucket::Polygons, stream)
    }

    /// The triangle strips stream.
    pub fn triangle_strips(&self) -> &[u32] {
        &self.triangle_strips
    }

    /// Replace the triangle strips stream.
    pub fn set_triangle_strips(&mut self, stream: Vec<u32>) {
        self.set_stream(Bucket::TriangleStrips, stream)
    }

    /// The stream of `bucket`.
    pub fn stream(&self, bucket: Bucket) -> &[u32] {
        match bucket {
            Bucket::Vertices => &self.vertices,
            Bucket::Lines => &self.lines,
            Bucket::Polygons => &self.polygons,
            Bucket::TriangleStrips => &self.triangle_strips,
        }
    }

    /// Replace the stream of `bucket`. The stream is not validated until decoded.
    pub fn set_stream(&mut self, bucket: Bucket, stream: Vec<u32>) {
        let s = match bucket {
            Bucket::Vertices => &mut self.vertices,
            Bucket::Lines => &mut self.lines,
            Bucket::Polygons => &mut self.polygons,
            Bucket::TriangleStrips => &mut self.triangle_strips,
        };
        *s = stream;
        self.modified();
    }

    /// Iterate the runs of a bucket's stream.
    pub fn runs(&self, bucket: Bucket) -> stream::Runs<'_> {
        stream::runs(bucket, self.stream(bucket))
    }

    /// Total number of runs across all four streams.
    ///
    /// This decodes every stream and fails if one is malformed.
    pub fn number_of_cells(&self) -> Result<usize> {
        Bucket::ALL
            .into_iter()
            .try_fold(0, |n, b| Ok(n + stream::count_runs(b, self.stream(b))?))
    }

    // ===== Attributes =================================================
    /// Per-point data, `None` if never set.
    pub fn point_data(&self) -> Option<&[T]> {
        self.point_data.as_deref()
    }

    /// Replace the point data, one value per point.
    pub fn set_point_data(&mut self, data: Vec<T>) {
        self.point_data = Some(data);
        self.modified();
    }

    /// The data of point `id`, `None` if there is no point data or `id` is out of range.
    pub fn point_datum(&self, id: usize) -> Option<&T> {
        self.point_data.as_ref().and_then(|d| d.get(id))
    }

    /// Overwrite the data of point `id`, creating the point data array if absent.
    ///
    /// Follows the same growth rule as [`PolyData::set_point`].
    pub fn set_point_datum(&mut self, id: usize, value: T) -> Result<()> {
        let data = self.point_data.get_or_insert_with(Vec::new);
        set_or_push(data, id, value).map_err(|len| Error::PointDataOutOfRange { id, len })?;
        self.modified();
        Ok(())
    }

    /// Per-cell data in global cell order, `None` if never set.
    pub fn cell_data(&self) -> Option<&[T]> {
        self.cell_data.as_deref()
    }

    /// Replace the cell data, one value per run in global cell order.
    pub fn set_cell_data(&mut self, data: Vec<T>) {
        self.cell_data = Some(data);
        self.modified();
    }

    /// The data of the cell at global position `id`, `None` if absent or out of range.
    pub fn cell_datum(&self, id: usize) -> Option<&T> {
        self.cell_data.as_ref().and_then(|d| d.get(id))
    }

    /// Overwrite the data of the cell at global position `id`, creating the cell data array if
    /// absent.
    pub fn set_cell_datum(&mut self, id: usize, value: T) -> Result<()> {
        let data = self.cell_data.get_or_insert_with(Vec::new);
        set_or_push(data, id, value).map_err(|len| Error::CellDataOutOfRange { id, len })?;
        self.modified();
        Ok(())
    }
}

/// Overwrite `v[id]`, or push when `id == v.len()`. Fails with the length otherwise.
fn set_or_push<T>(v: &mut Vec<T>, id: usize, value: T) -> std::result::Result<(), usize> {
    match id.cmp(&v.len()) {
        cmp::Ordering::Less => v[id] = value,
        cmp::Ordering::Equal => v.push(value),
        cmp::Ordering::Greater => return Err(v.len()),
    }
    Ok(())
}

impl<T: PartialEq> PartialEq for PolyData<T> {
    fn eq(&self, other: &Self) -> bool {
        self.points == other.points
            && self.vertices == other.vertices
            && self.lines == other.lines
            && self.polygons == other.polygons
            && self.triangle_strips == other.triangle_strips
            && self.point_data == other.point_data
            && self.cell_data == other.cell_data
    }
}

impl<T> fmt::Display for PolyData<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "PolyData")?;
        writeln!(f, "  Number Of Points: {}", self.number_of_points())?;
        for b in Bucket::ALL {
            match stream::count_runs(b, self.stream(b)) {
                Ok(n) => writeln!(f, "  {b}: {n} cells")?,
                Err(_) => writeln!(f, "  {b}: malformed")?,
            }
        }
        let present = |x: bool| if x { "present" } else { "absent" };
        writeln!(f, "  Point Data: {}", present(self.point_data.is_some()))?;
        write!(f, "  Cell Data: {}", present(self.cell_data.is_some()))
    }
}
