use crate::*;

/// A 2D raster of pixel values.
///
/// The image is axis aligned and evenly spaced on each axis. Pixels are stored row-first, so
/// `x` varies fastest.
///
/// There is no direction matrix: a pixel's physical location is always
/// `origin + index * spacing`, rotated or sheared images cannot be represented.
///
/// > `PartialEq` is derived and is _exact_ on the float values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Image<T> {
    /// The physical x,y of pixel 0,0.
    origin: Point2,

    /// The **X** count.
    stride: usize,

    /// Physical distance between neighbouring pixels, per axis.
    spacing: Point2,

    pixels: Vec<T>,
}

impl<T> Image<T> {
    /// Create an image with the given origin, size, and spacing, filled with `value`.
    pub fn new(origin: Point2, x_count: usize, y_count: usize, spacing: Point2, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            origin,
            stride: x_count,
            spacing,
            pixels: vec![value; x_count * y_count],
        }
    }

    /// Wrap an existing row-first pixel buffer.
    ///
    /// Fails if the buffer is not a whole number of `x_count` rows.
    pub fn from_pixels(
        origin: Point2,
        x_count: usize,
        spacing: Point2,
        pixels: Vec<T>,
    ) -> std::result::Result<Self, &'static str> {
        let whole = match x_count {
            0 => pixels.is_empty(),
            n => pixels.len() % n == 0,
        };
        if whole {
            Ok(Self {
                origin,
                stride: x_count,
                spacing,
                pixels,
            })
        } else {
            Err("pixel count must be a multiple of the x count")
        }
    }

    /// The physical location of pixel 0,0.
    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Physical distance between neighbouring pixels, as `[x, y]`.
    pub fn spacing(&self) -> Point2 {
        self.spacing
    }

    /// The number of pixels in the x-axis.
    pub fn x_count(&self) -> usize {
        self.stride
    }

    /// The number of pixels in the y-axis.
    pub fn y_count(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.pixels.len() / self.stride
        }
    }

    /// The number of pixels. (`x_count * y_count`)
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel buffer, row-first.
    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    /// Returns the physical coordinates of the `x` and `y` indices.
    ///
    /// Note that this will always return a value, even outside the image.
    pub fn get_xy(&self, x: usize, y: usize) -> Point2 {
        physical(self.origin, self.spacing, x, y)
    }

    /// The pixel at `x`,`y`, `None` if outside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.idx(x, y).and_then(|i| self.pixels.get(i))
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.idx(x, y).and_then(|i| self.pixels.get_mut(i))
    }

    /// Set a pixel, returning `false` if `x`,`y` is outside the image.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.get_mut(x, y) {
            Some(p) => {
                *p = value;
                true
            }
            None => false,
        }
    }

    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.stride).then(|| self.stride * y + x)
    }

    /// Physical location of every pixel, in buffer order.
    #[cfg(feature = "parallel")]
    pub fn locations(&self) -> Vec<Point2> {
        use rayon::prelude::*;
        // pixels are not touched, so no bound on T
        let (origin, spacing, stride) = (self.origin, self.spacing, self.stride);
        (0..self.len())
            .into_par_iter()
            .map(move |i| physical(origin, spacing, i % stride, i / stride))
            .collect()
    }

    /// Physical location of every pixel, in buffer order.
    #[cfg(not(feature = "parallel"))]
    pub fn locations(&self) -> Vec<Point2> {
        let (origin, spacing, stride) = (self.origin, self.spacing, self.stride);
        (0..self.len())
            .map(move |i| physical(origin, spacing, i % stride, i / stride))
            .collect()
    }

    /// Consume the image, returning the pixel buffer.
    pub fn into_pixels(self) -> Vec<T> {
        self.pixels
    }
}

fn physical([ox, oy]: Point2, [sx, sy]: Point2, x: usize, y: usize) -> Point2 {
    [ox + x as f64 * sx, oy + y as f64 * sy]
}
