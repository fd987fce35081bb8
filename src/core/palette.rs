// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;

use anywho::Error;
use cosmic::iced::Color;

/// Images bigger than this area are downsampled before counting colors
const MAX_AREA: u32 = 112 * 112;
/// Pixels more transparent than this are background
const MIN_ALPHA: u8 = 128;
/// Bits kept per channel when bucketing colors
const QUANTIZE_BITS: u8 = 5;

/// A plain 8-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Whether white text reads better than black on top of this color
    pub fn is_dark(&self) -> bool {
        let luminance =
            0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32;
        luminance < 140.0
    }

    /// Hue in degrees, saturation and lightness in `0.0..=1.0`
    fn hsl(&self) -> (f32, f32, f32) {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return (0.0, 0.0, lightness);
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());
        let hue = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        (hue * 60.0, saturation, lightness)
    }

    /// Colors that would make a dull swatch: almost black, almost white or skin-like reds
    fn is_filtered(&self) -> bool {
        let (hue, saturation, lightness) = self.hsl();

        lightness <= 0.05
            || lightness >= 0.95
            || ((10.0..=37.0).contains(&hue) && saturation <= 0.82)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::from_rgb8(rgb.r, rgb.g, rgb.b)
    }
}

#[derive(Default)]
struct Bucket {
    population: u32,
    r: u32,
    g: u32,
    b: u32,
}

impl Bucket {
    fn average(&self) -> Rgb {
        Rgb::new(
            (self.r / self.population) as u8,
            (self.g / self.population) as u8,
            (self.b / self.population) as u8,
        )
    }
}

/// Finds the most common color of an encoded image.
///
/// Returns `Ok(None)` when every pixel is transparent or filtered out.
pub fn dominant_color(bytes: &[u8]) -> Result<Option<Rgb>, Error> {
    let mut image = image::load_from_memory(bytes)?;

    let area = image.width() * image.height();
    if area > MAX_AREA {
        let scale = (MAX_AREA as f32 / area as f32).sqrt();
        let width = ((image.width() as f32 * scale).ceil() as u32).max(1);
        let height = ((image.height() as f32 * scale).ceil() as u32).max(1);
        image = image.thumbnail(width, height);
    }

    let shift = 8 - QUANTIZE_BITS;
    let mut buckets: HashMap<u16, Bucket> = HashMap::new();

    for pixel in image.to_rgba8().pixels() {
        let [r, g, b, a] = pixel.0;
        if a < MIN_ALPHA {
            continue;
        }

        let key = ((r >> shift) as u16) << (2 * QUANTIZE_BITS)
            | ((g >> shift) as u16) << QUANTIZE_BITS
            | (b >> shift) as u16;

        let bucket = buckets.entry(key).or_default();
        bucket.population += 1;
        bucket.r += r as u32;
        bucket.g += g as u32;
        bucket.b += b as u32;
    }

    let dominant = buckets
        .into_iter()
        .map(|(key, bucket)| (key, bucket.population, bucket.average()))
        .filter(|(_, _, color)| !color.is_filtered())
        .max_by(|(a_key, a_population, _), (b_key, b_population, _)| {
            a_population
                .cmp(b_population)
                .then_with(|| b_key.cmp(a_key))
        })
        .map(|(_, _, color)| color);

    Ok(dominant)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn encode(image: RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn picks_most_populated_color() {
        let image = RgbaImage::from_fn(10, 10, |x, _| {
            if x < 7 {
                Rgba([40, 80, 200, 255])
            } else {
                Rgba([60, 180, 60, 255])
            }
        });

        assert_eq!(
            dominant_color(&encode(image)).unwrap(),
            Some(Rgb::new(40, 80, 200))
        );
    }

    #[test]
    fn ignores_transparent_background() {
        let image = RgbaImage::from_fn(10, 10, |x, y| {
            if x == 5 && y == 5 {
                Rgba([240, 200, 40, 255])
            } else {
                Rgba([10, 120, 10, 0])
            }
        });

        assert_eq!(
            dominant_color(&encode(image)).unwrap(),
            Some(Rgb::new(240, 200, 40))
        );
    }

    #[test]
    fn ignores_black_and_white_outlines() {
        let image = RgbaImage::from_fn(12, 12, |x, _| match x {
            0..=4 => Rgba([0, 0, 0, 255]),
            5..=9 => Rgba([255, 255, 255, 255]),
            _ => Rgba([120, 60, 160, 255]),
        });

        assert_eq!(
            dominant_color(&encode(image)).unwrap(),
            Some(Rgb::new(120, 60, 160))
        );
    }

    /// A 10x10 image whose columns left of `split` are `left` and the rest `right`
    fn split(split: u32, left: [u8; 3], right: [u8; 3]) -> RgbaImage {
        RgbaImage::from_fn(10, 10, |x, _| {
            let [r, g, b] = if x < split { left } else { right };
            Rgba([r, g, b, 255])
        })
    }

    #[rstest]
    // Skin tones fall on the red I line even when they cover most of the sprite
    #[case::skips_skin_tones(split(8, [210, 160, 130], [40, 80, 200]), Rgb::new(40, 80, 200))]
    // Equal populations go to the lower bucket key, blue before red
    #[case::tie_prefers_lower_key(split(5, [250, 10, 10], [10, 10, 250]), Rgb::new(10, 10, 250))]
    #[case::tie_ignores_pixel_order(split(5, [10, 10, 250], [250, 10, 10]), Rgb::new(10, 10, 250))]
    #[case::downsamples_large_images(
        RgbaImage::from_pixel(500, 300, Rgba([40, 160, 90, 255])),
        Rgb::new(40, 160, 90)
    )]
    fn selects_swatch(#[case] image: RgbaImage, #[case] expected: Rgb) {
        assert_eq!(dominant_color(&encode(image)).unwrap(), Some(expected));
    }

    #[test]
    fn keeps_saturated_oranges() {
        // hue inside the red I line but saturation above its cut-off
        assert!(!Rgb::new(250, 120, 0).is_filtered());
        assert!(Rgb::new(210, 160, 130).is_filtered());
    }

    #[test]
    fn fully_transparent_image_has_no_color() {
        let image = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));

        assert_eq!(dominant_color(&encode(image)).unwrap(), None);
    }

    #[test]
    fn rejects_garbage_bytes() {
        assert!(dominant_color(b"definitely not a png").is_err());
    }

    #[test]
    fn tells_dark_from_light() {
        assert!(Rgb::new(20, 30, 90).is_dark());
        assert!(!Rgb::new(250, 230, 120).is_dark());
    }
}
