use crate::*;

/// A cell-indexed mesh with `D` dimensional points.
///
/// Points and cells are identified by their position. Point and cell data are optional,
/// and when present are parallel to the points and cells respectively.
///
/// Point ids referenced by cells are **not** checked against the point array.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh<T, const D: usize> {
    points: Vec<[f64; D]>,
    point_data: Option<Vec<T>>,
    cells: Vec<Cell>,
    cell_data: Option<Vec<T>>,
}

impl<T, const D: usize> Default for Mesh<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const D: usize> Mesh<T, D> {
    /// An empty mesh, without point or cell data.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            point_data: None,
            cells: Vec::new(),
            cell_data: None,
        }
    }

    pub fn from_raw(points: Vec<[f64; D]>, cells: Vec<Cell>) -> Self {
        Self {
            points,
            cells,
            ..Self::new()
        }
    }

    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// All points, indexed by point id.
    pub fn points(&self) -> &[[f64; D]] {
        &self.points
    }

    /// The point at `id`, `None` if out of range.
    pub fn point(&self, id: PointId) -> Option<[f64; D]> {
        self.points.get(id as usize).copied()
    }

    pub fn set_points(&mut self, points: Vec<[f64; D]>) {
        self.points = points;
    }

    /// Per-point data, `None` if never set.
    pub fn point_data(&self) -> Option<&[T]> {
        self.point_data.as_deref()
    }

    pub fn set_point_data(&mut self, data: Vec<T>) {
        self.point_data = Some(data);
    }

    pub fn take_point_data(&mut self) -> Option<Vec<T>> {
        self.point_data.take()
    }

    pub fn number_of_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `id`, `None` if out of range.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    /// Append a cell, returning its id.
    pub fn add_cell(&mut self, cell: Cell) -> CellId {
        self.cells.push(cell);
        self.cells.len() - 1
    }

    /// Replace every cell. Ids are reassigned from zero.
    pub fn set_cells(&mut self, cells: Vec<Cell>) {
        self.cells = cells;
    }

    /// Per-cell data, `None` if never set.
    pub fn cell_data(&self) -> Option<&[T]> {
        self.cell_data.as_deref()
    }

    pub fn set_cell_data(&mut self, data: Vec<T>) {
        self.cell_data = Some(data);
    }

    pub fn take_cell_data(&mut self) -> Option<Vec<T>> {
        self.cell_data.take()
    }

    /// Flatten the cells into ITK's `[type_code, n, ids..]` record layout.
    ///
    /// See [`CellKind::code`] for the type codes.
    pub fn cells_array(&self) -> Vec<u32> {
        let len = self.cells.iter().map(|c| c.len() + 2).sum();
        let mut array = Vec::with_capacity(len);
        for cell in &self.cells {
            array.push(cell.kind().code());
            array.push(cell.len() as u32);
            array.extend_from_slice(cell.point_ids());
        }
        array
    }

    /// Replace the cells with those decoded from an ITK `[type_code, n, ids..]` array.
    ///
    /// The mesh is left unchanged if the array does not decode.
    pub fn set_cells_array(&mut self, array: &[u32]) -> Result<()> {
        let mut cells = Vec::new();
        let mut offset = 0;
        while offset < array.len() {
            let (code, n) = match array[offset..] {
                [code, n, ..] => (code, n as usize),
                _ => return Err(Error::TruncatedCellsArray { offset }),
            };
            let kind = CellKind::from_code(code).ok_or(Error::UnknownCellType(code))?;
            let ids = array
                .get(offset + 2..offset + 2 + n)
                .ok_or(Error::TruncatedCellsArray { offset })?;
            cells.push(Cell::new(kind, ids)?);
            offset += 2 + n;
        }

        self.cells = cells;
        Ok(())
    }
}
