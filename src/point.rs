/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

/// 3D Point (X,Y,Z).
pub type Point3 = [f64; 3];

/// Move a point between dimensions.
///
/// Shared axes are copied exactly, extra axes are filled with `0.0` and missing axes are
/// dropped.
///
/// # Example
/// ```rust
/// use polydata::*;
/// assert_eq!(resize::<2, 3>([1.0, 2.0]), [1.0, 2.0, 0.0]);
/// assert_eq!(resize::<3, 2>([1.0, 2.0, 3.0]), [1.0, 2.0]);
/// ```
#[inline(always)]
pub fn resize<const A: usize, const B: usize>(p: [f64; A]) -> [f64; B] {
    std::array::from_fn(|i| p.get(i).copied().unwrap_or(0.0))
}

/// [`resize`] a whole point array, preserving order.
#[cfg(feature = "parallel")]
pub fn resize_all<const A: usize, const B: usize>(points: &[[f64; A]]) -> Vec<[f64; B]> {
    use rayon::prelude::*;
    points.par_iter().copied().map(resize).collect()
}

/// [`resize`] a whole point array, preserving order.
#[cfg(not(feature = "parallel"))]
pub fn resize_all<const A: usize, const B: usize>(points: &[[f64; A]]) -> Vec<[f64; B]> {
    points.iter().copied().map(resize).collect()
}
