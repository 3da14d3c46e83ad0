use crate::error::*;

use once_cell::sync::{Lazy};

use std::collections::{HashMap};

///
/// Representation of a colour as non-premultiplied components
///
/// Components are nominally in the range 0-1, with the alpha component last.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32),
}

///
/// A colour specification as accepted by ramp construction
///
/// This is the closed set of input forms a caller can supply a colour in: a string (a colour
/// name such as `"red"` or a hex form such as `"#rrggbb"`/`"#rrggbbaa"`), or an already
/// resolved colour value. Tuples and arrays of components convert into the `Value` variant.
///
#[derive(Clone, PartialEq, Debug)]
pub enum ColorSpec {
    /// A colour name or hex string, resolved via `Color::parse`
    Name(String),

    /// An explicit colour value
    Value(Color),
}

/// Named colours that can appear in a colour specification, plus the usual single-letter
/// charting shorthands. All components are in the range 0-1.
static NAMED_COLORS: Lazy<HashMap<&'static str, (f32, f32, f32)>> = Lazy::new(|| {
    let mut colors = HashMap::new();

    colors.insert("black",      (0.0,   0.0,   0.0));
    colors.insert("white",      (1.0,   1.0,   1.0));
    colors.insert("red",        (1.0,   0.0,   0.0));
    colors.insert("green",      (0.0,   0.5,   0.0));
    colors.insert("lime",       (0.0,   1.0,   0.0));
    colors.insert("blue",       (0.0,   0.0,   1.0));
    colors.insert("navy",       (0.0,   0.0,   0.5));
    colors.insert("cyan",       (0.0,   1.0,   1.0));
    colors.insert("aqua",       (0.0,   1.0,   1.0));
    colors.insert("magenta",    (1.0,   0.0,   1.0));
    colors.insert("fuchsia",    (1.0,   0.0,   1.0));
    colors.insert("yellow",     (1.0,   1.0,   0.0));
    colors.insert("orange",     (1.0,   0.647, 0.0));
    colors.insert("purple",     (0.5,   0.0,   0.5));
    colors.insert("violet",     (0.933, 0.51,  0.933));
    colors.insert("indigo",     (0.294, 0.0,   0.51));
    colors.insert("gray",       (0.5,   0.5,   0.5));
    colors.insert("grey",       (0.5,   0.5,   0.5));
    colors.insert("silver",     (0.753, 0.753, 0.753));
    colors.insert("maroon",     (0.5,   0.0,   0.0));
    colors.insert("olive",      (0.5,   0.5,   0.0));
    colors.insert("teal",       (0.0,   0.5,   0.5));
    colors.insert("pink",       (1.0,   0.753, 0.796));
    colors.insert("brown",      (0.647, 0.165, 0.165));
    colors.insert("gold",       (1.0,   0.843, 0.0));
    colors.insert("crimson",    (0.863, 0.078, 0.235));
    colors.insert("salmon",     (0.98,  0.5,   0.447));
    colors.insert("coral",      (1.0,   0.498, 0.314));
    colors.insert("turquoise",  (0.251, 0.878, 0.816));
    colors.insert("skyblue",    (0.529, 0.808, 0.922));
    colors.insert("steelblue",  (0.275, 0.51,  0.706));

    // Single-letter shorthands as used by charting tools
    colors.insert("r", (1.0, 0.0, 0.0));
    colors.insert("g", (0.0, 0.5, 0.0));
    colors.insert("b", (0.0, 0.0, 1.0));
    colors.insert("c", (0.0, 1.0, 1.0));
    colors.insert("m", (1.0, 0.0, 1.0));
    colors.insert("y", (1.0, 1.0, 0.0));
    colors.insert("k", (0.0, 0.0, 0.0));
    colors.insert("w", (1.0, 1.0, 1.0));

    colors
});

///
/// Parses a single hex component of the specified number of digits, returning it in the range 0-1
///
#[inline]
fn hex_component(digits: &str) -> Option<f32> {
    let value = u8::from_str_radix(digits, 16).ok()?;

    // Single-digit components repeat the nibble ('#f00' reads as '#ff0000')
    let value = if digits.len() == 1 { value * 0x11 } else { value };

    Some((value as f32) / 255.0)
}

///
/// Parses the digits of a hex colour string of the forms `rgb`, `rgba`, `rrggbb` or `rrggbbaa`
///
fn parse_hex(hex: &str) -> Option<Color> {
    let (digits_per_component, has_alpha) = match hex.len() {
        3 => (1, false),
        4 => (1, true),
        6 => (2, false),
        8 => (2, true),
        _ => { return None; }
    };

    let component = |idx: usize| hex_component(hex.get((idx*digits_per_component)..((idx+1)*digits_per_component))?);

    let r = component(0)?;
    let g = component(1)?;
    let b = component(2)?;
    let a = if has_alpha { component(3)? } else { 1.0 };

    Some(Color::Rgba(r, g, b, a))
}

impl Color {
    ///
    /// Resolves a colour specification string to a colour
    ///
    /// Accepts colour names (`"red"`, `"steelblue"`, the single-letter shorthands), and hex
    /// strings with an optional alpha suffix (`"#f00"`, `"#ff0000"`, `"#ff000080"`). Names are
    /// case-insensitive.
    ///
    pub fn parse(spec: &str) -> Result<Color, RampError> {
        let spec = spec.trim();

        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(hex)
                .ok_or_else(|| RampError::InvalidInput(format!("'{}' is not a valid hex colour", spec)));
        }

        NAMED_COLORS.get(spec.to_ascii_lowercase().as_str())
            .map(|(r, g, b)| Color::Rgba(*r, *g, *b, 1.0))
            .ok_or_else(|| RampError::InvalidInput(format!("'{}' is not a known colour name", spec)))
    }

    ///
    /// Returns the components that make up this colour
    ///
    #[inline]
    pub fn to_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Rgba(r, g, b, a) => (*r, *g, *b, *a)
        }
    }

    ///
    /// Returns this colour with the alpha component replaced
    ///
    #[inline]
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        let Color::Rgba(r, g, b, _) = *self;
        Color::Rgba(r, g, b, new_alpha)
    }

    /// The alpha component of this colour
    #[inline]
    pub fn alpha_component(&self) -> f32 {
        let Color::Rgba(_, _, _, a) = *self;
        a
    }
}

impl ColorSpec {
    ///
    /// Resolves this specification to a colour value
    ///
    pub fn resolve(&self) -> Result<Color, RampError> {
        match self {
            ColorSpec::Name(name)   => Color::parse(name),
            ColorSpec::Value(color) => Ok(*color),
        }
    }
}

impl From<(f32, f32, f32)> for Color {
    #[inline]
    fn from((r, g, b): (f32, f32, f32)) -> Color {
        Color::Rgba(r, g, b, 1.0)
    }
}

impl From<(f32, f32, f32, f32)> for Color {
    #[inline]
    fn from((r, g, b, a): (f32, f32, f32, f32)) -> Color {
        Color::Rgba(r, g, b, a)
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [f32; 4]) -> Color {
        Color::Rgba(r, g, b, a)
    }
}

impl<'a> From<&'a str> for ColorSpec {
    #[inline]
    fn from(name: &'a str) -> ColorSpec {
        ColorSpec::Name(name.to_string())
    }
}

impl From<String> for ColorSpec {
    #[inline]
    fn from(name: String) -> ColorSpec {
        ColorSpec::Name(name)
    }
}

impl From<Color> for ColorSpec {
    #[inline]
    fn from(color: Color) -> ColorSpec {
        ColorSpec::Value(color)
    }
}

impl From<(f32, f32, f32)> for ColorSpec {
    #[inline]
    fn from(components: (f32, f32, f32)) -> ColorSpec {
        ColorSpec::Value(components.into())
    }
}

impl From<(f32, f32, f32, f32)> for ColorSpec {
    #[inline]
    fn from(components: (f32, f32, f32, f32)) -> ColorSpec {
        ColorSpec::Value(components.into())
    }
}

impl From<[f32; 4]> for ColorSpec {
    #[inline]
    fn from(components: [f32; 4]) -> ColorSpec {
        ColorSpec::Value(components.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_named_color() {
        assert!(Color::parse("red") == Ok(Color::Rgba(1.0, 0.0, 0.0, 1.0)));
        assert!(Color::parse("blue") == Ok(Color::Rgba(0.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn parse_named_color_is_case_insensitive() {
        assert!(Color::parse("Red") == Ok(Color::Rgba(1.0, 0.0, 0.0, 1.0)));
        assert!(Color::parse("STEELBLUE") == Color::parse("steelblue"));
    }

    #[test]
    fn parse_single_letter_shorthand() {
        assert!(Color::parse("k") == Ok(Color::Rgba(0.0, 0.0, 0.0, 1.0)));
        assert!(Color::parse("w") == Ok(Color::Rgba(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn parse_six_digit_hex() {
        assert!(Color::parse("#ff0000") == Ok(Color::Rgba(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn parse_three_digit_hex() {
        assert!(Color::parse("#f00") == Ok(Color::Rgba(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn parse_hex_with_alpha() {
        assert!(Color::parse("#ffffff00") == Ok(Color::Rgba(1.0, 1.0, 1.0, 0.0)));
        assert!(Color::parse("#000000ff") == Ok(Color::Rgba(0.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn reject_unknown_name() {
        match Color::parse("not-a-colour") {
            Err(RampError::InvalidInput(_)) => { }
            other                           => { panic!("{:?}", other); }
        }
    }

    #[test]
    fn reject_bad_hex() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#zzzzzz").is_err());
    }

    #[test]
    fn spec_from_tuple() {
        let spec = ColorSpec::from((0.25, 0.5, 0.75, 1.0));
        assert!(spec.resolve() == Ok(Color::Rgba(0.25, 0.5, 0.75, 1.0)));
    }

    #[test]
    fn spec_from_rgb_tuple_is_opaque() {
        let spec = ColorSpec::from((0.25, 0.5, 0.75));
        assert!(spec.resolve() == Ok(Color::Rgba(0.25, 0.5, 0.75, 1.0)));
    }

    #[test]
    fn color_round_trips_through_serde() {
        let color   = Color::Rgba(1.0, 0.5, 0.0, 0.25);
        let json    = serde_json::to_string(&color).unwrap();
        let decoded = serde_json::from_str::<Color>(&json).unwrap();

        assert!(decoded == color);
    }
}
