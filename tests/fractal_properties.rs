use rand::SeedableRng;
use rand::rngs::StdRng;

use fractal_toolkit::core::fractals::escape_time::compute_escape_time;
use fractal_toolkit::core::fractals::koch::curve::koch_segments;
use fractal_toolkit::{
    Colour, Complex, FractalError, PixelBuffer, Point, draw_line, fill_triangle,
    generate_barnsley_fern, generate_barnsley_fern_seeded, generate_julia, generate_koch_curve,
    generate_mandelbrot,
};

#[test]
fn mandelbrot_800_origin_is_white_and_far_corner_is_dark() {
    let buffer = generate_mandelbrot(800, 800, -2.0, 2.0, -2.0, 2.0, 100).unwrap();

    assert_eq!((buffer.width(), buffer.height()), (800, 800));
    assert!(
        buffer
            .buffer()
            .chunks_exact(3)
            .all(|px| px[0] == px[1] && px[1] == px[2])
    );
    assert_eq!(buffer.get_pixel(Point::new(400, 400)), Some(Colour::WHITE));

    let corner = buffer.get_pixel(Point::new(799, 799)).unwrap();
    assert!(corner.r < 16, "corner intensity {}", corner.r);
}

#[test]
fn escape_time_stays_within_budget() {
    for max in [1, 7, 100] {
        for step in -20..=20 {
            let c = Complex::new(f64::from(step) / 10.0, f64::from(-step) / 13.0);
            assert!(compute_escape_time(c, c, max) <= max);
        }
        assert_eq!(compute_escape_time(Complex::ZERO, Complex::ZERO, max), max);
    }
}

#[test]
fn julia_rejects_bad_parameters() {
    let c = Complex::new(-0.7, 0.27015);

    assert!(matches!(
        generate_julia(0, 10, -2.0, 2.0, -2.0, 2.0, 10, c),
        Err(FractalError::InvalidDimension { .. })
    ));
    assert!(matches!(
        generate_julia(10, 10, -2.0, 2.0, -2.0, 2.0, 0, c),
        Err(FractalError::InvalidIterationBudget { .. })
    ));
}

#[test]
fn koch_depth_zero_is_the_base_line() {
    let buffer = generate_koch_curve(0).unwrap();

    assert_eq!(buffer.count_pixels(Colour::WHITE), 701);
    for x in 50..=750 {
        assert_eq!(buffer.get_pixel(Point::new(x, 400)), Some(Colour::WHITE));
    }
}

#[test]
fn koch_segments_chain_end_to_end() {
    let start = Point::new(50, 400);
    let end = Point::new(750, 400);

    for depth in 0..=4 {
        let segments = koch_segments(depth, start, end).unwrap();

        assert_eq!(segments.len(), 4usize.pow(depth));
        assert_eq!(segments[0].0, start);
        assert_eq!(segments[segments.len() - 1].1, end);
        assert!(segments.windows(2).all(|pair| pair[0].1 == pair[1].0));
    }
}

#[test]
fn seeded_ferns_are_identical() {
    let first = generate_barnsley_fern_seeded(5, 42).unwrap();
    let second = generate_barnsley_fern(5, &mut StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(first, second);
    assert!(first.count_pixels(Colour::WHITE) > 0);
    assert_ne!(first, generate_barnsley_fern_seeded(5, 43).unwrap());
}

#[test]
fn right_triangle_fill_matches_half_plane() {
    let mut buffer = PixelBuffer::with_size(20, 20).unwrap();

    fill_triangle(
        &mut buffer,
        Point::new(0, 0),
        Point::new(10, 0),
        Point::new(0, 10),
        Colour::WHITE,
    )
    .unwrap();

    for y in 0..20 {
        for x in 0..20 {
            let expected = if x + y <= 10 {
                Colour::WHITE
            } else {
                Colour::BLACK
            };
            assert_eq!(buffer.get_pixel(Point::new(x, y)), Some(expected), "({x}, {y})");
        }
    }
}

#[test]
fn horizontal_line_sets_exactly_its_pixels() {
    let mut buffer = PixelBuffer::with_size(8, 3).unwrap();

    draw_line(&mut buffer, Point::new(0, 0), Point::new(5, 0), Colour::WHITE);

    assert_eq!(buffer.count_pixels(Colour::WHITE), 6);
    for x in 0..=5 {
        assert_eq!(buffer.get_pixel(Point::new(x, 0)), Some(Colour::WHITE));
    }
}
