use crate::filters::*;

use std::sync::{Arc};

///
/// Implemented by renderable shapes that can have a raster filter attached to them
///
/// A target keeps a reference to at most one filter and arranges for the host renderer to
/// invoke it after the shape is rasterized. Many targets can share one filter: each holds its
/// own `Arc`, and the filter is dropped once the last target releases it.
///
pub trait FilterTarget {
    ///
    /// Sets the filter invoked on this shape's raster
    ///
    fn set_raster_filter(&mut self, filter: Arc<dyn RasterFilter>);
}

///
/// Attaches a filter to a single renderable shape
///
pub fn attach_filter<TFilter>(target: &mut impl FilterTarget, filter: &Arc<TFilter>)
where
    TFilter: 'static + RasterFilter,
{
    target.set_raster_filter(Arc::clone(filter) as Arc<dyn RasterFilter>);
}

///
/// Attaches one shared filter to every shape in a collection (the bars of a bar series, say)
///
pub fn attach_filter_to_all<'a, TTarget, TFilter>(targets: impl IntoIterator<Item=&'a mut TTarget>, filter: &Arc<TFilter>)
where
    TTarget: 'a + FilterTarget,
    TFilter: 'static + RasterFilter,
{
    for target in targets {
        attach_filter(target, filter);
    }
}
