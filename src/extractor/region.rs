//! Region structure for defining an object's crop area
//!
//! Coordinates are in pixels of the room source image, with (0,0) at the
//! top-left corner. Regions are not validated when they are defined; they are
//! fitted to the actual image with [`Region::clamp_to`] at extraction time.

/// Rectangular object area (in pixel coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether the region lies fully inside an image of the given size
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.end_x() <= image_width as u64 && self.end_y() <= image_height as u64
    }

    /// Fit the region into an image of the given size
    ///
    /// The origin is shifted back so the region ends at the image edge, then
    /// the size is shrunk to whatever is left. A region that already fits is
    /// returned unchanged. Out-of-bounds regions are never an error.
    ///
    /// # Arguments
    /// * `image_width` - Width of the source image
    /// * `image_height` - Height of the source image
    ///
    /// # Returns
    /// The clamped region, guaranteed to lie within `[0, image_width] x [0, image_height]`
    pub fn clamp_to(&self, image_width: u32, image_height: u32) -> Region {
        let x = self.x.min(image_width.saturating_sub(self.width));
        let y = self.y.min(image_height.saturating_sub(self.height));

        Region {
            x,
            y,
            width: self.width.min(image_width - x),
            height: self.height.min(image_height - y),
        }
    }

    /// Whether the region covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
