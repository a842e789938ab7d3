use crate::*;

/// Index of a point, its position in a point array.
pub type PointId = u32;

/// Index of a cell, its position in a mesh's cell list.
pub type CellId = usize;

/// A mesh cell: a typed, ordered list of point ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Cell {
    Vertex(PointId),
    Line([PointId; 2]),
    /// Open chain of two or more points.
    PolyLine(Vec<PointId>),
    Triangle([PointId; 3]),
    Quadrilateral([PointId; 4]),
    /// Closed loop of three or more points.
    Polygon(Vec<PointId>),
    Tetrahedron([PointId; 4]),
    Hexahedron([PointId; 8]),
}

/// The variant of a [`Cell`], without its point ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CellKind {
    Vertex,
    Line,
    PolyLine,
    Triangle,
    Quadrilateral,
    Polygon,
    Tetrahedron,
    Hexahedron,
}

impl Cell {
    /// The variant of this cell.
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Vertex(_) => CellKind::Vertex,
            Cell::Line(_) => CellKind::Line,
            Cell::PolyLine(_) => CellKind::PolyLine,
            Cell::Triangle(_) => CellKind::Triangle,
            Cell::Quadrilateral(_) => CellKind::Quadrilateral,
            Cell::Polygon(_) => CellKind::Polygon,
            Cell::Tetrahedron(_) => CellKind::Tetrahedron,
            Cell::Hexahedron(_) => CellKind::Hexahedron,
        }
    }

    /// The point ids of the cell, in corner order.
    pub fn point_ids(&self) -> &[PointId] {
        match self {
            Cell::Vertex(p) => std::slice::from_ref(p),
            Cell::Line(ps) => ps,
            Cell::PolyLine(ps) | Cell::Polygon(ps) => ps,
            Cell::Triangle(ps) => ps,
            Cell::Quadrilateral(ps) | Cell::Tetrahedron(ps) => ps,
            Cell::Hexahedron(ps) => ps,
        }
    }

    /// Number of point ids.
    pub fn len(&self) -> usize {
        self.point_ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Classify a polygon-bucket run by its point count.
    ///
    /// 1 is a vertex, 2 a line, 3 a triangle, 4 a quadrilateral, and anything else a
    /// polygon.
    pub fn from_polygon_run(ids: &[PointId]) -> Self {
        match *ids {
            [a] => Cell::Vertex(a),
            [a, b] => Cell::Line([a, b]),
            [a, b, c] => Cell::Triangle([a, b, c]),
            [a, b, c, d] => Cell::Quadrilateral([a, b, c, d]),
            _ => Cell::Polygon(ids.to_vec()),
        }
    }

    /// Build a cell of `kind` from its point ids, checking the arity.
    pub fn new(kind: CellKind, ids: &[PointId]) -> Result<Self> {
        let arity = |expected| Error::CellArity {
            kind,
            expected,
            found: ids.len(),
        };

        let cell = match kind {
            CellKind::Vertex => match *ids {
                [a] => Cell::Vertex(a),
                _ => return Err(arity("1")),
            },
            CellKind::Line => Cell::Line(ids.try_into().map_err(|_| arity("2"))?),
            CellKind::PolyLine if ids.len() >= 2 => Cell::PolyLine(ids.to_vec()),
            CellKind::PolyLine => return Err(arity("2 or more")),
            CellKind::Triangle => Cell::Triangle(ids.try_into().map_err(|_| arity("3"))?),
            CellKind::Quadrilateral => {
                Cell::Quadrilateral(ids.try_into().map_err(|_| arity("4"))?)
            }
            CellKind::Polygon if ids.len() >= 3 => Cell::Polygon(ids.to_vec()),
            CellKind::Polygon => return Err(arity("3 or more")),
            CellKind::Tetrahedron => Cell::Tetrahedron(ids.try_into().map_err(|_| arity("4"))?),
            CellKind::Hexahedron => Cell::Hexahedron(ids.try_into().map_err(|_| arity("8"))?),
        };

        Ok(cell)
    }
}

impl CellKind {
    /// Topological dimension of the cell.
    pub fn dimension(self) -> u8 {
        match self {
            CellKind::Vertex => 0,
            CellKind::Line | CellKind::PolyLine => 1,
            CellKind::Triangle | CellKind::Quadrilateral | CellKind::Polygon => 2,
            CellKind::Tetrahedron | CellKind::Hexahedron => 3,
        }
    }

    /// The numeric code ITK uses for this cell geometry in flat cell arrays.
    pub fn code(self) -> u32 {
        match self {
            CellKind::Vertex => 0,
            CellKind::Line => 1,
            CellKind::Triangle => 2,
            CellKind::Quadrilateral => 3,
            CellKind::Polygon => 4,
            CellKind::Tetrahedron => 5,
            CellKind::Hexahedron => 6,
            CellKind::PolyLine => 10,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        let kind = match code {
            0 => CellKind::Vertex,
            1 => CellKind::Line,
            2 => CellKind::Triangle,
            3 => CellKind::Quadrilateral,
            4 => CellKind::Polygon,
            5 => CellKind::Tetrahedron,
            6 => CellKind::Hexahedron,
            10 => CellKind::PolyLine,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            CellKind::Vertex => "vertex",
            CellKind::Line => "line",
            CellKind::PolyLine => "polyline",
            CellKind::Triangle => "triangle",
            CellKind::Quadrilateral => "quadrilateral",
            CellKind::Polygon => "polygon",
            CellKind::Tetrahedron => "tetrahedron",
            CellKind::Hexahedron => "hexahedron",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_ids_follow_variant() {
        assert_eq!(Cell::Vertex(7).point_ids(), &[7]);
        assert_eq!(Cell::Line([3, 4]).point_ids(), &[3, 4]);
        assert_eq!(Cell::PolyLine(vec![0, 2, 5]).point_ids(), &[0, 2, 5]);
        assert_eq!(Cell::Quadrilateral([0, 1, 2, 3]).len(), 4);
        assert_eq!(Cell::Hexahedron([0; 8]).len(), 8);
    }

    #[test]
    fn polygon_runs_are_polymorphic() {
        assert_eq!(Cell::from_polygon_run(&[4]), Cell::Vertex(4));
        assert_eq!(Cell::from_polygon_run(&[4, 5]), Cell::Line([4, 5]));
        assert_eq!(Cell::from_polygon_run(&[0, 1, 2]), Cell::Triangle([0, 1, 2]));
        assert_eq!(
            Cell::from_polygon_run(&[0, 1, 2, 3]),
            Cell::Quadrilateral([0, 1, 2, 3])
        );
        assert_eq!(
            Cell::from_polygon_run(&[0, 1, 2, 3, 4]),
            Cell::Polygon(vec![0, 1, 2, 3, 4])
        );
    }

    #[test]
    fn new_checks_arity() {
        assert_eq!(Cell::new(CellKind::Line, &[1, 2]), Ok(Cell::Line([1, 2])));
        assert_eq!(
            Cell::new(CellKind::Line, &[1, 2, 3]),
            Err(Error::CellArity {
                kind: CellKind::Line,
                expected: "2",
                found: 3
            })
        );
        assert!(Cell::new(CellKind::PolyLine, &[1]).is_err());
        assert!(Cell::new(CellKind::Polygon, &[1, 2]).is_err());
        assert_eq!(
            Cell::new(CellKind::Polygon, &[1, 2, 3]),
            Ok(Cell::Polygon(vec![1, 2, 3]))
        );
        assert!(Cell::new(CellKind::Vertex, &[]).is_err());
    }

    #[test]
    fn codes_round_trip() {
        let kinds = [
            CellKind::Vertex,
            CellKind::Line,
            CellKind::PolyLine,
            CellKind::Triangle,
            CellKind::Quadrilateral,
            CellKind::Polygon,
            CellKind::Tetrahedron,
            CellKind::Hexahedron,
        ];
        for kind in kinds {
            assert_eq!(CellKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(CellKind::from_code(7), None);
        assert_eq!(CellKind::PolyLine.code(), 10);
    }

    #[test]
    fn dimensions() {
        assert_eq!(CellKind::Vertex.dimension(), 0);
        assert_eq!(CellKind::PolyLine.dimension(), 1);
        assert_eq!(CellKind::Polygon.dimension(), 2);
        assert_eq!(CellKind::Hexahedron.dimension(), 3);
    }
}
