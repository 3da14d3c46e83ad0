use crate::color::*;
use crate::error::*;

use smallvec::*;
use itertools::*;
use wide::*;

///
/// A single knot of a colour ramp: a position in the range 0-1 and the colour found exactly there
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct ColorStop {
    /// Where this stop lies along the ramp
    pos: f32,

    /// The RGBA components at this stop
    color: [f32; 4],
}

///
/// A continuous mapping from the range 0-1 onto RGBA colours
///
/// A ramp is defined by an ordered list of colour stops and interpolates linearly between
/// adjacent stops, one channel at a time and including the alpha channel. Sampling exactly at
/// a stop position returns that stop's colour with no interpolation round-off; sampling
/// outside the span covered by the stops clamps to the nearest end stop.
///
/// Ramps are immutable once built and cheap to clone, so a single ramp can back any number of
/// gradient filters.
///
#[derive(Clone, PartialEq, Debug)]
pub struct ColorRamp {
    /// The stops making up this ramp, ordered by position
    stops: SmallVec<[ColorStop; 8]>,
}

impl ColorRamp {
    ///
    /// Creates a colour ramp from a list of colour specifications and optional stop positions
    ///
    /// Positions must be the same length as the colour list, lie in the range 0-1 and be
    /// non-decreasing. When no positions are supplied the colours are spaced evenly over the
    /// whole range, with the first colour at 0 and the last at 1 (a single colour produces a
    /// constant ramp).
    ///
    pub fn from_colors<TSpec: Into<ColorSpec>>(colors: impl IntoIterator<Item=TSpec>, positions: Option<&[f32]>) -> Result<ColorRamp, RampError> {
        // Resolve every colour up front so bad specifications are reported before any stop is built
        let colors = colors.into_iter()
            .map(|spec| {
                let (r, g, b, a) = spec.into().resolve()?.to_components();
                Ok([r, g, b, a])
            })
            .collect::<Result<SmallVec<[_; 8]>, RampError>>()?;

        if colors.is_empty() {
            return Err(RampError::InvalidInput("a colour ramp needs at least one colour".to_string()));
        }

        let positions = match positions {
            Some(positions) => {
                if positions.len() != colors.len() {
                    return Err(RampError::InvalidInput(format!("{} positions were supplied for {} colours", positions.len(), colors.len())));
                }

                if positions.iter().any(|pos| !(0.0..=1.0).contains(pos)) {
                    return Err(RampError::InvalidInput("stop positions must lie between 0 and 1".to_string()));
                }

                if positions.iter().tuple_windows().any(|(p1, p2)| p2 < p1) {
                    return Err(RampError::InvalidInput("stop positions must be non-decreasing".to_string()));
                }

                SmallVec::from_slice(positions)
            }

            None => {
                Self::even_positions(colors.len())
            }
        };

        let stops = positions.into_iter().zip(colors)
            .map(|(pos, color)| ColorStop { pos, color })
            .collect();

        Ok(ColorRamp { stops })
    }

    ///
    /// Creates a ramp directly from resolved stops, which are trusted to be valid
    ///
    pub (crate) fn from_raw_stops(stops: impl IntoIterator<Item=(f32, [f32; 4])>) -> ColorRamp {
        ColorRamp {
            stops: stops.into_iter().map(|(pos, color)| ColorStop { pos, color }).collect()
        }
    }

    ///
    /// `count` evenly spaced positions covering the whole 0-1 range
    ///
    fn even_positions(count: usize) -> SmallVec<[f32; 8]> {
        if count == 1 {
            smallvec![0.0]
        } else {
            (0..count)
                .map(|idx| (idx as f32) / ((count-1) as f32))
                .collect()
        }
    }

    ///
    /// Returns the colour found at a point along this ramp
    ///
    /// `t` is expected in the range 0-1; values beyond the outermost stops clamp to the end
    /// stop colours.
    ///
    pub fn sample(&self, t: f32) -> Color {
        // A query landing exactly on a stop returns that stop's colour as-is
        if let Some(stop) = self.stops.iter().find(|stop| stop.pos == t) {
            let [r, g, b, a] = stop.color;
            return Color::Rgba(r, g, b, a);
        }

        // Clamp to the end stops outside the covered span
        let first = &self.stops[0];
        let last  = &self.stops[self.stops.len()-1];

        if t <= first.pos {
            let [r, g, b, a] = first.color;
            return Color::Rgba(r, g, b, a);
        }

        if t >= last.pos {
            let [r, g, b, a] = last.color;
            return Color::Rgba(r, g, b, a);
        }

        // Blend within the pair of stops that brackets t (zero-width pairs cannot bracket it)
        for (stop1, stop2) in self.stops.iter().tuple_windows() {
            if t > stop1.pos && t < stop2.pos {
                let ratio   = (t - stop1.pos) / (stop2.pos - stop1.pos);
                let c1      = f32x4::new(stop1.color);
                let c2      = f32x4::new(stop2.color);
                let blended = c1 + (c2-c1) * f32x4::splat(ratio);

                let [r, g, b, a] = blended.to_array();
                return Color::Rgba(r, g, b, a);
            }
        }

        // Unreachable for a well-formed stop list, but clamping is a safe answer
        let [r, g, b, a] = last.color;
        Color::Rgba(r, g, b, a)
    }

    /// The number of stops in this ramp
    #[inline]
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }
}
