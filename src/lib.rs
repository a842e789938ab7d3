//! Conversion between cell-indexed meshes and flat poly data.
//!
//! A [`Mesh`] holds typed [`Cell`]s over an array of `D` dimensional points. A [`PolyData`]
//! holds 3D points and four flat streams of `[count, ids..]` runs: vertices, lines, polygons,
//! and triangle strips. [`mesh_to_poly_data`] and [`poly_data_to_mesh`] move geometry and
//! point/cell attributes between the two.
//!
//! ```rust
//! use polydata::*;
//!
//! let mut mesh = Mesh::<u8, 2>::from_raw(
//!     vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]],
//!     vec![Cell::Triangle([0, 1, 2]), Cell::Vertex(2)],
//! );
//! mesh.set_cell_data(vec![7, 9]);
//!
//! let poly = PolyData::from(&mesh);
//! assert_eq!(poly.vertices(), &[1, 2]);
//! assert_eq!(poly.polygons(), &[3, 0, 1, 2]);
//! assert_eq!(poly.cell_data(), Some(&[9, 7][..]));
//!
//! let back = Mesh::<u8, 2>::try_from(&poly).unwrap();
//! assert_eq!(back.points(), mesh.points());
//! assert_eq!(back.cells(), &[Cell::Vertex(2), Cell::Triangle([0, 1, 2])]);
//! ```
use std::{cmp, fmt};

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

mod cell;
pub mod convert;
pub mod error;
mod image;
mod mesh;
mod point;
mod poly_data;
pub mod stream;

pub use cell::*;
pub use convert::*;
pub use error::{Error, Result};
pub use image::*;
pub use mesh::*;
pub use point::*;
pub use poly_data::*;
pub use stream::Bucket;

/// A random mesh whose cells all have a poly data bucket.
///
/// Point data is the point id and cell data is the cell id, so attributes can be traced back
/// after conversion. Polygons always have 5 or more points so they are not reclassified.
#[cfg(test)]
#[derive(Clone, Debug)]
struct MeshGen {
    pub mesh: Mesh<u32, 3>,
}

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

#[cfg(test)]
impl Arbitrary for MeshGen {
    fn arbitrary(g: &mut Gen) -> Self {
        fn ids<const N: usize>(g: &mut Gen, npoints: usize) -> [PointId; N] {
            [0; N].map(|_| u32::arbitrary(g) % npoints as u32)
        }
        fn id_vec(g: &mut Gen, npoints: usize, n: usize) -> Vec<PointId> {
            (0..n).map(|_| u32::arbitrary(g) % npoints as u32).collect()
        }

        let npoints = usize::arbitrary(g) % 50 + 1;
        let points = (0..npoints)
            .map(|_| [0; 3].map(|_| i16::arbitrary(g) as f64 / 8.0))
            .collect();

        let ncells = usize::arbitrary(g) % 40;
        let cells = (0..ncells)
            .map(|_| match u8::arbitrary(g) % 6 {
                0 => Cell::Vertex(ids::<1>(g, npoints)[0]),
                1 => Cell::Line(ids(g, npoints)),
                2 => {
                    let n = usize::arbitrary(g) % 4 + 3;
                    Cell::PolyLine(id_vec(g, npoints, n))
                }
                3 => Cell::Triangle(ids(g, npoints)),
                4 => Cell::Quadrilateral(ids(g, npoints)),
                _ => {
                    let n = usize::arbitrary(g) % 3 + 5;
                    Cell::Polygon(id_vec(g, npoints, n))
                }
            })
            .collect();

        let mut mesh = Mesh::from_raw(points, cells);
        mesh.set_point_data((0..npoints as u32).collect());
        mesh.set_cell_data((0..ncells as u32).collect());
        Self { mesh }
    }
}
