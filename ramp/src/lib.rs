//!
//! # chartfx_ramp
//!
//! `chartfx_ramp` describes the colours used by chart gradient fills without knowing anything
//! about how those fills are rendered. It supplies two things: a way to resolve a colour
//! specification (a name, a hex string or an explicit set of components) into an RGBA quad,
//! and the `ColorRamp` type, a continuous mapping from the range 0-1 onto those quads built
//! from a list of colour stops.
//!
//! Ramps can also be obtained by name from a preset registry. The registry is always passed
//! in via the `PresetRamps` trait rather than read from ambient global state, so renderers
//! and tests can substitute their own tables. `BuiltinPresets` provides the default table,
//! which contains the usual charting sequences (`grays`, `blues`, `viridis` and so on).
//!
//! The accompanying `chartfx_raster` crate consumes these ramps to rewrite the pixels of
//! rasterized shapes.
//!

#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod color;
mod ramp;
mod error;
mod presets;

pub use self::color::*;
pub use self::ramp::*;
pub use self::error::*;
pub use self::presets::*;
