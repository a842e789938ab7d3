//! Conversion between meshes and poly data.
//!
//! Both directions are single pass and produce a new value, the input is never modified.
//!
//! | From | To | Function |
//! |---|---|---|
//! | [`Mesh`] | [`PolyData`] | [`mesh_to_poly_data`] (or `PolyData::from(&mesh)`) |
//! | [`PolyData`] | [`Mesh`] | [`poly_data_to_mesh`] (or `Mesh::try_from(&poly)`) |
//! | [`Image`] | [`Mesh`] | [`image_to_point_set`] (or `Mesh::from(&image)`) |
use crate::*;

mod decode;
mod encode;
mod image;

pub use decode::*;
pub use encode::*;
pub use image::*;
