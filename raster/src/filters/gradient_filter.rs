use super::raster_filter_trait::*;
use crate::buffer::*;
use crate::error::*;

use chartfx_ramp::*;

use std::str::{FromStr};

///
/// The direction a gradient fill runs across a shape's raster
///
/// `Vertical` runs down the rows of the buffer, `Horizontal` across its columns, and
/// `Diagonal` from the top-left corner to the bottom-right corner.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GradientDirection {
    Vertical,
    Horizontal,
    Diagonal,
}

impl FromStr for GradientDirection {
    type Err = FilterError;

    fn from_str(direction: &str) -> Result<GradientDirection, FilterError> {
        match direction {
            "vertical"      => Ok(GradientDirection::Vertical),
            "horizontal"    => Ok(GradientDirection::Horizontal),
            "diagonal"      => Ok(GradientDirection::Diagonal),
            other           => Err(FilterError::InvalidInput(format!("'{}' is not a gradient direction (expected 'vertical', 'horizontal' or 'diagonal')", other)))
        }
    }
}

///
/// Paints a directional colour gradient over the raster of a shape
///
/// The filter samples its colour ramp across the buffer according to its direction and
/// rewrites the buffer's colour channels with the result, so the shape appears filled with
/// the gradient once composited. All pixels in a row (vertical) or column (horizontal) share
/// one sampled colour; the diagonal direction samples every pixel.
///
/// When `preserve_alpha` is on (the default) only the RGB channels are rewritten and the
/// buffer keeps the coverage the rasterizer computed, including its antialiased edges. This
/// also means transparent ramp stops such as `"#ffffff00"` have no visible effect: the
/// ramp's alpha values only reach the output when `preserve_alpha` is switched off.
///
/// A filter is an immutable bundle of ramp, direction and alpha policy. It can be shared
/// between any number of shapes, and applying it is a pure function of the buffer passed in.
///
#[derive(Clone, PartialEq, Debug)]
pub struct GradientFilter {
    /// The ramp that supplies the gradient's colours
    ramp: ColorRamp,

    /// The axis the gradient runs along
    direction: GradientDirection,

    /// True if the buffer's own alpha channel is kept instead of the ramp's
    preserve_alpha: bool,
}

///
/// The ramp position for a pixel index along an axis of the given length (a length-1 axis
/// always reads the start of the ramp)
///
#[inline]
fn axis_pos(idx: usize, len: usize) -> f32 {
    if len > 1 {
        (idx as f32) / ((len-1) as f32)
    } else {
        0.0
    }
}

///
/// Overwrites the channels of a single pixel with a sampled colour
///
#[inline]
fn write_pixel(pixel: &mut [f32], color: &(f32, f32, f32, f32), preserve_alpha: bool) {
    pixel[0] = color.0;
    pixel[1] = color.1;
    pixel[2] = color.2;

    if !preserve_alpha {
        pixel[3] = color.3;
    }
}

impl GradientFilter {
    ///
    /// Creates a gradient filter from a colour ramp
    ///
    /// The direction defaults to vertical and alpha preservation defaults to on; use
    /// `with_direction` and `with_preserve_alpha` to change either.
    ///
    pub fn with_ramp(ramp: ColorRamp) -> GradientFilter {
        GradientFilter {
            ramp:           ramp,
            direction:      GradientDirection::Vertical,
            preserve_alpha: true,
        }
    }

    ///
    /// Creates a gradient filter from a named preset ramp in a registry
    ///
    /// The name is resolved immediately, so an unknown preset is reported here rather than
    /// during rendering.
    ///
    pub fn with_preset(registry: &impl PresetRamps, name: &str) -> Result<GradientFilter, FilterError> {
        let ramp = lookup_preset(registry, name)?;

        Ok(Self::with_ramp(ramp))
    }

    ///
    /// Creates a gradient filter from a list of colour specifications and optional stop
    /// positions, as `ColorRamp::from_colors` accepts them
    ///
    pub fn from_colors<TSpec: Into<ColorSpec>>(colors: impl IntoIterator<Item=TSpec>, positions: Option<&[f32]>) -> Result<GradientFilter, FilterError> {
        let ramp = ColorRamp::from_colors(colors, positions)?;

        Ok(Self::with_ramp(ramp))
    }

    ///
    /// Returns this filter with a different gradient direction
    ///
    pub fn with_direction(mut self, direction: GradientDirection) -> GradientFilter {
        self.direction = direction;
        self
    }

    ///
    /// Returns this filter with the alpha policy changed
    ///
    /// Pass `false` to let the ramp's own alpha values replace the buffer's coverage (needed
    /// for transparent colour stops to show up).
    ///
    pub fn with_preserve_alpha(mut self, preserve_alpha: bool) -> GradientFilter {
        self.preserve_alpha = preserve_alpha;
        self
    }

    /// The ramp that supplies this filter's colours
    #[inline]
    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    /// The axis this filter's gradient runs along
    #[inline]
    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    /// True if the buffer's own alpha channel is kept
    #[inline]
    pub fn preserve_alpha(&self) -> bool {
        self.preserve_alpha
    }
}

impl RasterFilter for GradientFilter {
    fn filter_buffer(&self, buffer: &mut RgbaBuffer, _resolution: f64) -> (i32, i32) {
        let width   = buffer.width();
        let height  = buffer.height();

        if width == 0 || height == 0 {
            return (0, 0);
        }

        match self.direction {
            GradientDirection::Vertical => {
                // One sample per row, broadcast across the row
                for y in 0..height {
                    let color = self.ramp.sample(axis_pos(y, height)).to_components();

                    for pixel in buffer.read_row_mut(y).chunks_exact_mut(4) {
                        write_pixel(pixel, &color, self.preserve_alpha);
                    }
                }
            }

            GradientDirection::Horizontal => {
                // One sample per column, repeated down every row
                let colors = (0..width)
                    .map(|x| self.ramp.sample(axis_pos(x, width)).to_components())
                    .collect::<Vec<_>>();

                for y in 0..height {
                    for (pixel, color) in buffer.read_row_mut(y).chunks_exact_mut(4).zip(colors.iter()) {
                        write_pixel(pixel, color, self.preserve_alpha);
                    }
                }
            }

            GradientDirection::Diagonal => {
                // Every pixel is sampled at the mean of its row and column positions
                let col_pos = (0..width)
                    .map(|x| axis_pos(x, width))
                    .collect::<Vec<_>>();

                for y in 0..height {
                    let row_pos = axis_pos(y, height);

                    for (pixel, col_pos) in buffer.read_row_mut(y).chunks_exact_mut(4).zip(col_pos.iter()) {
                        let color = self.ramp.sample((row_pos + col_pos) / 2.0).to_components();

                        write_pixel(pixel, &color, self.preserve_alpha);
                    }
                }
            }
        }

        (0, 0)
    }
}
