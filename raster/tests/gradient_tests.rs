use chartfx_ramp::*;
use chartfx_raster::*;

use std::sync::{Arc};
use std::thread;

///
/// A white, fully opaque buffer of the specified size
///
fn white_buffer(width: usize, height: usize) -> RgbaBuffer {
    RgbaBuffer::filled(width, height, Color::Rgba(1.0, 1.0, 1.0, 1.0))
}

#[test]
pub fn apply_preserves_buffer_shape() {
    for direction in [GradientDirection::Vertical, GradientDirection::Horizontal, GradientDirection::Diagonal].iter() {
        let filter     = GradientFilter::from_colors(["red", "blue"], None).unwrap().with_direction(*direction);
        let mut buffer = white_buffer(7, 5);

        let offsets = filter.filter_buffer(&mut buffer, 100.0);

        assert!(offsets == (0, 0));
        assert!(buffer.width() == 7);
        assert!(buffer.height() == 5);
    }
}

#[test]
pub fn vertical_rows_are_constant() {
    let filter     = GradientFilter::with_preset(&BuiltinPresets, "viridis").unwrap();
    let mut buffer = white_buffer(9, 6);

    filter.filter_buffer(&mut buffer, 100.0);

    for y in 0..6 {
        let expected = buffer.pixel(0, y);

        for x in 1..9 {
            assert!(buffer.pixel(x, y) == expected, "row {} is not constant", y);
        }
    }
}

#[test]
pub fn vertical_rows_follow_the_ramp() {
    let ramp       = ColorRamp::from_colors(["red", "blue"], None).unwrap();
    let filter     = GradientFilter::with_ramp(ramp.clone());
    let mut buffer = white_buffer(3, 5);

    filter.filter_buffer(&mut buffer, 100.0);

    for y in 0..5 {
        let (r, g, b, _) = ramp.sample((y as f32) / 4.0).to_components();
        let pixel        = buffer.pixel(1, y);

        assert!(pixel[0] == r && pixel[1] == g && pixel[2] == b, "row {} does not match the ramp", y);
    }
}

#[test]
pub fn horizontal_columns_are_constant() {
    let filter     = GradientFilter::from_colors(["navy", "cyan"], None).unwrap()
        .with_direction(GradientDirection::Horizontal);
    let mut buffer = white_buffer(6, 9);

    filter.filter_buffer(&mut buffer, 100.0);

    for x in 0..6 {
        let expected = buffer.pixel(x, 0);

        for y in 1..9 {
            assert!(buffer.pixel(x, y) == expected, "column {} is not constant", x);
        }
    }
}

#[test]
pub fn diagonal_corners_sample_the_ramp_ends() {
    let ramp       = ColorRamp::from_colors(["red", "blue"], None).unwrap();
    let filter     = GradientFilter::with_ramp(ramp.clone())
        .with_direction(GradientDirection::Diagonal);
    let mut buffer = white_buffer(8, 5);

    filter.filter_buffer(&mut buffer, 100.0);

    let (r0, g0, b0, _) = ramp.sample(0.0).to_components();
    let (r1, g1, b1, _) = ramp.sample(1.0).to_components();

    let top_left     = buffer.pixel(0, 0);
    let bottom_right = buffer.pixel(7, 4);

    assert!(top_left[0] == r0 && top_left[1] == g0 && top_left[2] == b0);
    assert!(bottom_right[0] == r1 && bottom_right[1] == g1 && bottom_right[2] == b1);
}

#[test]
pub fn diagonal_is_constant_along_anti_diagonals() {
    let filter     = GradientFilter::from_colors(["red", "blue"], None).unwrap()
        .with_direction(GradientDirection::Diagonal);
    let mut buffer = white_buffer(5, 5);

    filter.filter_buffer(&mut buffer, 100.0);

    // On a square buffer, (x, y) and (y, x) share a ramp position
    for y in 0..5 {
        for x in 0..5 {
            assert!(buffer.pixel(x, y) == buffer.pixel(y, x));
        }
    }
}

#[test]
pub fn preserving_alpha_keeps_the_original_coverage() {
    // A buffer with a different alpha value in every pixel, as antialiased edges produce
    let pixels     = (0..6*4).flat_map(|idx| vec![1.0, 1.0, 1.0, (idx as f32) / 24.0]).collect::<Vec<_>>();
    let mut buffer = RgbaBuffer::from_pixels(6, 4, pixels).unwrap();
    let original   = buffer.clone();

    let filter = GradientFilter::from_colors(["red", "#ffffff00", "green"], None).unwrap();
    filter.filter_buffer(&mut buffer, 100.0);

    for y in 0..4 {
        for x in 0..6 {
            assert!(buffer.pixel(x, y)[3] == original.pixel(x, y)[3]);
        }
    }
}

#[test]
pub fn overwriting_alpha_uses_the_ramp_alpha() {
    let ramp       = ColorRamp::from_colors(["red", "#ffffff00", "green"], None).unwrap();
    let filter     = GradientFilter::with_ramp(ramp.clone())
        .with_preserve_alpha(false);
    let mut buffer = white_buffer(4, 9);

    filter.filter_buffer(&mut buffer, 100.0);

    for y in 0..9 {
        let expected = ramp.sample((y as f32) / 8.0).alpha_component();
        assert!(buffer.pixel(2, y)[3] == expected);
    }

    // The middle row sits on the transparent stop
    assert!(buffer.pixel(2, 4)[3] == 0.0);
}

#[test]
pub fn transparent_stops_are_invisible_while_alpha_is_preserved() {
    let filter     = GradientFilter::from_colors(["red", "#ffffff00", "green"], None).unwrap();
    let mut buffer = white_buffer(4, 9);

    filter.filter_buffer(&mut buffer, 100.0);

    // Every pixel keeps the buffer's opaque coverage
    for y in 0..9 {
        assert!(buffer.pixel(2, y)[3] == 1.0);
    }
}

#[test]
pub fn red_to_blue_column_scenario() {
    // A 4x1 column with a red-to-blue vertical gradient reads red at the top, blue at the
    // bottom, and stays opaque throughout
    let filter     = GradientFilter::from_colors(["red", "blue"], None).unwrap();
    let mut buffer = white_buffer(1, 4);

    filter.filter_buffer(&mut buffer, 100.0);

    assert!(buffer.pixel(0, 0) == [1.0, 0.0, 0.0, 1.0]);
    assert!(buffer.pixel(0, 3) == [0.0, 0.0, 1.0, 1.0]);

    for y in 0..4 {
        assert!(buffer.pixel(0, y)[3] == 1.0);
    }
}

#[test]
pub fn single_pixel_buffer_reads_the_ramp_start() {
    for direction in [GradientDirection::Vertical, GradientDirection::Horizontal, GradientDirection::Diagonal].iter() {
        let filter     = GradientFilter::from_colors(["red", "blue"], None).unwrap().with_direction(*direction);
        let mut buffer = white_buffer(1, 1);

        filter.filter_buffer(&mut buffer, 100.0);

        assert!(buffer.pixel(0, 0) == [1.0, 0.0, 0.0, 1.0]);
    }
}

#[test]
pub fn single_row_diagonal_degenerates_to_horizontal() {
    let ramp       = ColorRamp::from_colors(["red", "blue"], None).unwrap();
    let filter     = GradientFilter::with_ramp(ramp.clone())
        .with_direction(GradientDirection::Diagonal);
    let mut buffer = white_buffer(5, 1);

    filter.filter_buffer(&mut buffer, 100.0);

    // The row term is 0, so each pixel samples at half its column position
    for x in 0..5 {
        let (r, g, b, _) = ramp.sample((x as f32) / 4.0 / 2.0).to_components();
        let pixel        = buffer.pixel(x, 0);

        assert!(pixel[0] == r && pixel[1] == g && pixel[2] == b);
    }
}

#[test]
pub fn resolution_has_no_effect() {
    let filter      = GradientFilter::with_preset(&BuiltinPresets, "magma").unwrap()
        .with_direction(GradientDirection::Diagonal);
    let mut low_res  = white_buffer(6, 6);
    let mut high_res = white_buffer(6, 6);

    filter.filter_buffer(&mut low_res, 72.0);
    filter.filter_buffer(&mut high_res, 300.0);

    assert!(low_res == high_res);
}

#[test]
pub fn filter_applies_through_the_trait_object() {
    let filter: Arc<dyn RasterFilter> = Arc::new(GradientFilter::from_colors(["red", "blue"], None).unwrap());
    let mut buffer                    = white_buffer(2, 4);

    filter.filter_buffer(&mut buffer, 100.0);

    assert!(buffer.pixel(0, 0) == [1.0, 0.0, 0.0, 1.0]);
}

#[test]
pub fn one_filter_can_run_against_different_buffers_in_parallel() {
    let filter = Arc::new(GradientFilter::with_preset(&BuiltinPresets, "plasma").unwrap());

    let threads = (0..4).map(|_| {
            let filter = Arc::clone(&filter);

            thread::spawn(move || {
                let mut buffer = white_buffer(16, 16);
                filter.filter_buffer(&mut buffer, 100.0);
                buffer
            })
        })
        .collect::<Vec<_>>();

    let results = threads.into_iter()
        .map(|thread| thread.join().unwrap())
        .collect::<Vec<_>>();

    // Every thread computed the same pixels
    for buffer in results.iter() {
        assert!(buffer == &results[0]);
    }
}

#[test]
pub fn bad_direction_fails_before_any_buffer_exists() {
    // Directions parse eagerly, so a bad literal never reaches the filtering path
    assert!("circular".parse::<GradientDirection>().is_err());
}
