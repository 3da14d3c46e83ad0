use crate::error::*;

use chartfx_ramp::{Color};

///
/// A non-premultiplied RGBA pixel buffer with floating-point components
///
/// This is the raster a host renderer produces for a single shape: `height` rows of `width`
/// pixels, stored row-major with 4 channel values per pixel, each nominally in the range 0-1.
/// Row 0 is the top of the shape.
///
#[derive(Clone, PartialEq, Debug)]
pub struct RgbaBuffer {
    /// The width of the buffer in pixels (a row is 4x this value)
    width: usize,

    /// The height of the buffer in pixels
    height: usize,

    /// The channel values stored in this buffer
    pixels: Vec<f32>,
}

impl RgbaBuffer {
    ///
    /// Creates a buffer from raw channel values, which must contain exactly `width * height`
    /// RGBA quads
    ///
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<f32>) -> Result<RgbaBuffer, FilterError> {
        if pixels.len() != width * height * 4 {
            return Err(FilterError::InvalidInput(format!("a {}x{} buffer needs {} channel values, not {}", width, height, width*height*4, pixels.len())));
        }

        Ok(RgbaBuffer { width, height, pixels })
    }

    ///
    /// Creates a buffer with every pixel set to a single colour
    ///
    pub fn filled(width: usize, height: usize, color: Color) -> RgbaBuffer {
        let (r, g, b, a) = color.to_components();
        let pixels       = [r, g, b, a].iter().cloned()
            .cycle()
            .take(width * height * 4)
            .collect();

        RgbaBuffer { width, height, pixels }
    }

    /// The width of this buffer in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of this buffer in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// Reads the channel values of a single row of pixels
    ///
    #[inline]
    pub fn read_row(&self, y: usize) -> &[f32] {
        let stride = self.width * 4;
        &self.pixels[(y*stride)..((y+1)*stride)]
    }

    ///
    /// Reads the channel values of a single row of pixels for writing
    ///
    #[inline]
    pub fn read_row_mut(&mut self, y: usize) -> &mut [f32] {
        let stride = self.width * 4;
        &mut self.pixels[(y*stride)..((y+1)*stride)]
    }

    ///
    /// Returns the RGBA quad of a single pixel
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 4] {
        let idx = (y*self.width + x) * 4;

        [self.pixels[idx], self.pixels[idx+1], self.pixels[idx+2], self.pixels[idx+3]]
    }

    ///
    /// Unwraps this buffer into its raw channel values
    ///
    pub fn to_pixels(self) -> Vec<f32> {
        self.pixels
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn filled_buffer_repeats_the_color() {
        let buffer = RgbaBuffer::filled(3, 2, Color::Rgba(0.1, 0.2, 0.3, 0.4));

        assert!(buffer.width() == 3);
        assert!(buffer.height() == 2);

        for y in 0..2 {
            for x in 0..3 {
                assert!(buffer.pixel(x, y) == [0.1, 0.2, 0.3, 0.4]);
            }
        }
    }

    #[test]
    fn from_pixels_requires_matching_length() {
        match RgbaBuffer::from_pixels(2, 2, vec![0.0; 15]) {
            Err(FilterError::InvalidInput(_)) => { }
            other                             => { panic!("{:?}", other); }
        }

        assert!(RgbaBuffer::from_pixels(2, 2, vec![0.0; 16]).is_ok());
    }

    #[test]
    fn rows_are_read_in_order() {
        let pixels = (0..16).map(|idx| (idx as f32) / 16.0).collect::<Vec<_>>();
        let buffer = RgbaBuffer::from_pixels(2, 2, pixels).unwrap();

        assert!(buffer.read_row(0) == &[0.0, 1.0/16.0, 2.0/16.0, 3.0/16.0, 4.0/16.0, 5.0/16.0, 6.0/16.0, 7.0/16.0]);
        assert!(buffer.pixel(1, 1) == [12.0/16.0, 13.0/16.0, 14.0/16.0, 15.0/16.0]);
    }
}
