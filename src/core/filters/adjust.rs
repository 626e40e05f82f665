use rayon::prelude::*;

use crate::core::data::pixel_buffer::{CHANNELS, PixelBuffer};

fn clamp_to_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Adds `delta` to every channel, saturating at 0 and 255.
pub fn adjust_brightness(buffer: &mut PixelBuffer, delta: i32) {
    buffer.buffer_mut().par_iter_mut().for_each(|channel| {
        *channel = i32::from(*channel).saturating_add(delta).clamp(0, 255) as u8;
    });
}

/// Scales every channel's distance from mid-grey (128) by `factor`.
pub fn adjust_contrast(buffer: &mut PixelBuffer, factor: f64) {
    buffer.buffer_mut().par_iter_mut().for_each(|channel| {
        *channel = clamp_to_channel((f64::from(*channel) - 128.0) * factor + 128.0);
    });
}

/// Scales HSV saturation by `factor`, keeping hue and value.
pub fn adjust_saturation(buffer: &mut PixelBuffer, factor: f64) {
    buffer
        .buffer_mut()
        .par_chunks_exact_mut(CHANNELS)
        .for_each(|pixel| {
            let (h, s, v) = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
            let (r, g, b) = hsv_to_rgb(h, (s * factor).clamp(0.0, 1.0), v);

            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        });
}

/// Hue in `[0, 1)`, saturation and value in `[0, 1]`. Greys have hue 0.
#[must_use]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let s = if max == 0.0 { 0.0 } else { delta / max };
    if s == 0.0 {
        return (0.0, 0.0, max);
    }

    let h = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    (h / 6.0, s, max)
}

/// Inverse of [`rgb_to_hsv`]; channels are truncated to `u8`.
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let sector = (h * 6.0) as i32;
    let f = h * 6.0 - f64::from(sector);

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    (
        clamp_to_channel(r * 255.0),
        clamp_to_channel(g * 255.0),
        clamp_to_channel(b * 255.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn single(colour: Colour) -> PixelBuffer {
        let mut buffer = PixelBuffer::with_size(1, 1).unwrap();
        buffer.set_pixel(Point::new(0, 0), colour).unwrap();
        buffer
    }

    fn pixel(buffer: &PixelBuffer) -> Colour {
        buffer.get_pixel(Point::new(0, 0)).unwrap()
    }

    #[test]
    fn test_brightness_saturates() {
        let mut buffer = single(Colour { r: 10, g: 128, b: 250 });

        adjust_brightness(&mut buffer, 50);
        assert_eq!(pixel(&buffer), Colour { r: 60, g: 178, b: 255 });

        adjust_brightness(&mut buffer, -100);
        assert_eq!(pixel(&buffer), Colour { r: 0, g: 78, b: 155 });
    }

    #[test]
    fn test_brightness_extreme_deltas_clamp_without_overflow() {
        let mut buffer = single(Colour { r: 10, g: 128, b: 250 });

        adjust_brightness(&mut buffer, i32::MAX);
        assert_eq!(pixel(&buffer), Colour::WHITE);

        adjust_brightness(&mut buffer, i32::MIN);
        assert_eq!(pixel(&buffer), Colour::BLACK);
    }

    #[test]
    fn test_contrast_stretches_around_mid_grey() {
        let mut buffer = single(Colour { r: 128, g: 138, b: 28 });

        adjust_contrast(&mut buffer, 1.5);

        // 128 is fixed, 138 -> 143, 28 -> -22 clamps to 0
        assert_eq!(pixel(&buffer), Colour { r: 128, g: 143, b: 0 });
    }

    #[test]
    fn test_contrast_zero_is_flat_grey() {
        let mut buffer = single(Colour { r: 0, g: 77, b: 255 });

        adjust_contrast(&mut buffer, 0.0);

        assert_eq!(pixel(&buffer), Colour::grey(128));
    }

    #[test]
    fn test_desaturate_to_value() {
        let mut buffer = single(Colour { r: 255, g: 0, b: 0 });

        adjust_saturation(&mut buffer, 0.0);

        assert_eq!(pixel(&buffer), Colour::WHITE);
    }

    #[test]
    fn test_saturating_pure_colours_is_stable() {
        for colour in [
            Colour { r: 255, g: 0, b: 0 },
            Colour { r: 0, g: 255, b: 0 },
            Colour { r: 0, g: 0, b: 255 },
            Colour::BLACK,
            Colour::WHITE,
        ] {
            let mut buffer = single(colour);

            adjust_saturation(&mut buffer, 1.5);

            assert_eq!(pixel(&buffer), colour);
        }
    }

    #[test]
    fn test_rgb_to_hsv_primaries() {
        assert_eq!(rgb_to_hsv(255, 0, 0), (0.0, 1.0, 1.0));
        assert_eq!(rgb_to_hsv(0, 0, 0), (0.0, 0.0, 0.0));

        let (h, s, v) = rgb_to_hsv(0, 255, 0);
        assert!((h - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!((s, v), (1.0, 1.0));

        let (h, _, _) = rgb_to_hsv(0, 0, 255);
        assert!((h - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_hsv_to_rgb_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (255, 0, 0));
        assert_eq!(hsv_to_rgb(0.5, 1.0, 1.0), (0, 255, 255));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), (255, 255, 255));
    }
}
