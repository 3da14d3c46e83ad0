mod raster_filter_trait;
mod gradient_filter;

pub use raster_filter_trait::*;
pub use gradient_filter::*;
