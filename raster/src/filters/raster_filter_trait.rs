use crate::buffer::*;

///
/// A raster filter rewrites the pixels of a single shape after antialiased rasterization and
/// before the shape is composited into the finished image
///
/// The host rendering pipeline invokes `filter_buffer` exactly once per raster pass for each
/// shape the filter is attached to, synchronously on its own thread. Vector output targets
/// (SVG, PDF and the like) have no raster pass, never invoke the filter and render the shape
/// unmodified.
///
/// Filters carry no per-invocation state, so one filter instance can safely be applied to
/// different buffers from different threads at the same time; applying it to the *same*
/// buffer concurrently is the caller's to serialize, as the buffer is mutated in place.
///
pub trait RasterFilter : Send + Sync {
    ///
    /// Transforms a rasterized buffer in place
    ///
    /// `resolution` is the output resolution in pixels per unit, supplied by the host for
    /// filters that scale with it. The return value is the (x, y) offset of the transformed
    /// image relative to the input's position; filters that keep the shape's footprint
    /// return `(0, 0)`.
    ///
    /// The filter must not hold on to any reference into the buffer once it returns: the
    /// host is free to reuse or discard the buffer's storage immediately afterwards.
    ///
    fn filter_buffer(&self, buffer: &mut RgbaBuffer, resolution: f64) -> (i32, i32);
}
