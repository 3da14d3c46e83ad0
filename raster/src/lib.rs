//!
//! # chartfx_raster
//!
//! `chartfx_raster` rewrites the pixels of chart shapes after they have been rasterized and
//! before they are composited into the finished figure. The main type is `GradientFilter`,
//! which paints a directional colour gradient over a shape using a `ColorRamp` from the
//! `chartfx_ramp` crate: the host renderer rasterizes a bar, filled region or panel into an
//! `RgbaBuffer`, hands the buffer to the filter, and composites the rewritten buffer as if it
//! were the original shape.
//!
//! Filters implement the `RasterFilter` trait, which is the narrow surface a host rendering
//! pipeline needs: one call per shape per raster pass, mutating the buffer in place. Because
//! the effect is defined purely in raster space it is unavailable on vector output targets,
//! which never invoke the hook and render the shape unmodified.
//!
//! Shapes accept filters through the `FilterTarget` trait; `attach_filter` and
//! `attach_filter_to_all` attach one shared filter to a single shape or to a whole collection
//! of them (the bars of a bar series, say).
//!

#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

mod error;
mod buffer;
mod hook;

/// Filters rewrite the rasterized pixels of a shape before it reaches the finished image
pub mod filters;

pub use self::error::*;
pub use self::buffer::*;
pub use self::hook::*;
pub use self::filters::*;
