use crate::ramp::*;
use crate::error::*;

use once_cell::sync::{Lazy};

use std::collections::{HashMap};

///
/// A read-only source of named preset colour ramps
///
/// Renderers receive their preset table through this trait rather than reading a global
/// registry, so a host plotting library can expose its own colormap table and tests can run
/// with a small fixed one.
///
pub trait PresetRamps {
    ///
    /// Returns the ramp registered under the given name, if there is one
    ///
    fn lookup(&self, name: &str) -> Option<ColorRamp>;
}

///
/// The preset ramps that ship with this crate
///
/// These cover the common charting sequences: single-hue sequences (`grays`, `blues`,
/// `greens`, `reds`), the perceptually-uniform maps (`viridis`, `magma`, `plasma`) and the
/// classic `cool` and `hot` scales. Names are matched exactly.
///
pub struct BuiltinPresets;

/// Stop tables for the built-in ramps. The multi-hue maps are compact stop approximations of
/// the usual 256-entry tables, which linear interpolation reconstructs closely enough for
/// fill effects.
static BUILTIN_RAMPS: Lazy<HashMap<&'static str, ColorRamp>> = Lazy::new(|| {
    let mut ramps = HashMap::new();

    ramps.insert("grays", ColorRamp::from_raw_stops(vec![
        (0.0, [0.0, 0.0, 0.0, 1.0]),
        (1.0, [1.0, 1.0, 1.0, 1.0]),
    ]));

    ramps.insert("blues", ColorRamp::from_raw_stops(vec![
        (0.0, [0.969, 0.984, 1.0,   1.0]),
        (0.5, [0.417, 0.681, 0.838, 1.0]),
        (1.0, [0.031, 0.188, 0.42,  1.0]),
    ]));

    ramps.insert("greens", ColorRamp::from_raw_stops(vec![
        (0.0, [0.968, 0.988, 0.961, 1.0]),
        (0.5, [0.455, 0.768, 0.462, 1.0]),
        (1.0, [0.0,   0.267, 0.106, 1.0]),
    ]));

    ramps.insert("reds", ColorRamp::from_raw_stops(vec![
        (0.0, [1.0,   0.961, 0.941, 1.0]),
        (0.5, [0.984, 0.416, 0.29,  1.0]),
        (1.0, [0.404, 0.0,   0.051, 1.0]),
    ]));

    ramps.insert("viridis", ColorRamp::from_raw_stops(vec![
        (0.0,  [0.267, 0.005, 0.329, 1.0]),
        (0.25, [0.229, 0.322, 0.546, 1.0]),
        (0.5,  [0.128, 0.567, 0.551, 1.0]),
        (0.75, [0.369, 0.789, 0.383, 1.0]),
        (1.0,  [0.993, 0.906, 0.144, 1.0]),
    ]));

    ramps.insert("magma", ColorRamp::from_raw_stops(vec![
        (0.0,  [0.001, 0.0,   0.014, 1.0]),
        (0.25, [0.281, 0.145, 0.469, 1.0]),
        (0.5,  [0.716, 0.215, 0.475, 1.0]),
        (0.75, [0.987, 0.536, 0.382, 1.0]),
        (1.0,  [0.987, 0.991, 0.75,  1.0]),
    ]));

    ramps.insert("plasma", ColorRamp::from_raw_stops(vec![
        (0.0,  [0.05,  0.03,  0.528, 1.0]),
        (0.25, [0.494, 0.012, 0.658, 1.0]),
        (0.5,  [0.798, 0.28,  0.47,  1.0]),
        (0.75, [0.973, 0.586, 0.252, 1.0]),
        (1.0,  [0.94,  0.975, 0.131, 1.0]),
    ]));

    ramps.insert("cool", ColorRamp::from_raw_stops(vec![
        (0.0, [0.0, 1.0, 1.0, 1.0]),
        (1.0, [1.0, 0.0, 1.0, 1.0]),
    ]));

    ramps.insert("hot", ColorRamp::from_raw_stops(vec![
        (0.0,  [0.042, 0.0,   0.0, 1.0]),
        (0.37, [1.0,   0.0,   0.0, 1.0]),
        (0.75, [1.0,   1.0,   0.0, 1.0]),
        (1.0,  [1.0,   1.0,   1.0, 1.0]),
    ]));

    ramps
});

impl PresetRamps for BuiltinPresets {
    fn lookup(&self, name: &str) -> Option<ColorRamp> {
        BUILTIN_RAMPS.get(name).cloned()
    }
}

///
/// Resolves a preset name against a registry, reporting a missing name as an error
///
pub fn lookup_preset(registry: &impl PresetRamps, name: &str) -> Result<ColorRamp, RampError> {
    registry.lookup(name)
        .ok_or_else(|| RampError::NotFound(name.to_string()))
}
