//! RGBA pixel and pixel grid data model
//!
//! A [`PixelGrid`] is stored row-major as `rows[y][x]`, which is the order the
//! PNG scanlines are emitted in.

/// A single 8-bit-per-channel RGBA pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent white, used for everything outside the icon and as
    /// the fallback for grid positions that don't exist
    pub const TRANSPARENT_WHITE: Pixel = Pixel::new(255, 255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a pixel with full alpha
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels in PNG byte order (R, G, B, A)
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Self::TRANSPARENT_WHITE
    }
}

/// A rectangular grid of pixels indexed `[row][column]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: Vec<Vec<Pixel>>,
}

impl PixelGrid {
    /// Builds a `width x height` grid by evaluating `f(x, y)` for every position
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let rows = (0..height)
            .map(|y| (0..width).map(|x| f(x, y)).collect())
            .collect();
        Self { rows }
    }

    /// Wraps existing rows without checking that they're rectangular.
    ///
    /// The encoder tolerates ragged rows by substituting
    /// [`Pixel::TRANSPARENT_WHITE`] for missing positions.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Self {
        Self { rows }
    }

    /// Number of rows
    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Length of the first row, or zero for an empty grid
    pub fn width(&self) -> u32 {
        self.rows.first().map_or(0, |row| row.len() as u32)
    }

    /// Pixel at column `x`, row `y`, if the grid has one there
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    pub fn rows(&self) -> &[Vec<Pixel>] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| Pixel::opaque(x as u8, y as u8, 0));
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.rows()[1][2], Pixel::opaque(2, 1, 0));
        assert_eq!(grid.get(2, 1), Some(Pixel::opaque(2, 1, 0)));
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = PixelGrid::from_rows(vec![vec![Pixel::opaque(1, 2, 3)], vec![]]);
        assert_eq!(grid.get(0, 0), Some(Pixel::opaque(1, 2, 3)));
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 9), None);
    }

    #[test]
    fn test_pixel_bytes_and_default() {
        assert_eq!(Pixel::new(10, 20, 30, 40).to_bytes(), [10, 20, 30, 40]);
        assert_eq!(Pixel::default(), Pixel::new(255, 255, 255, 0));
    }
}
