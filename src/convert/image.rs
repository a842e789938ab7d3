use super::*;

/// Convert an image into a point set: a mesh with a point per pixel and no cells.
///
/// Points are placed at each pixel's physical location, in the image's row-first order, and
/// the pixel values become the point data.
pub fn image_to_point_set<T: Clone>(image: &Image<T>) -> Mesh<T, 2> {
    log::debug!(
        "image of {}x{} pixels to point set",
        image.x_count(),
        image.y_count()
    );
    let mut mesh = Mesh::new();
    mesh.set_points(image.locations());
    mesh.set_point_data(image.pixels().to_vec());
    mesh
}

impl<T: Clone> From<&Image<T>> for Mesh<T, 2> {
    fn from(image: &Image<T>) -> Self {
        image_to_point_set(image)
    }
}
