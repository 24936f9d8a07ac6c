//! Motif colours sampled from an HSV hue wheel.
//!
//! For `count` motifs the wheel is cut into `count + 1` equal steps and only
//! the first `count` are used, so the last motif never wraps back onto the
//! first motif's red.

use motif_mark_protocol::Rgba;

const SATURATION: f64 = 1.0;
const VALUE: f64 = 1.0;

fn hsv_to_rgba(hue_degrees: f64, saturation: f64, value: f64) -> Rgba {
    let h = hue_degrees.rem_euclid(360.0) / 60.0;
    let chroma = value * saturation;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    Rgba::new((r + m) as f32, (g + m) as f32, (b + m) as f32, 1.0)
}

/// Colour of motif `index` out of `count`. Pure in `(count, index)`.
pub fn motif_color(count: usize, index: usize) -> Rgba {
    let hue = 360.0 * index as f64 / (count as f64 + 1.0);
    hsv_to_rgba(hue, SATURATION, VALUE)
}

pub fn motif_palette(count: usize) -> Vec<Rgba> {
    (0..count).map(|index| motif_color(count, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_color_is_red() {
        assert_eq!(motif_color(1, 0), Rgba::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(motif_color(5, 0), motif_color(1, 0));
    }

    #[test]
    fn test_hue_steps() {
        // Two motifs split the wheel at 0, 120 and 240 degrees; 240 is unused.
        assert_eq!(motif_color(2, 1), Rgba::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(motif_color(3, 2), Rgba::new(0.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_palette_is_distinct() {
        for count in [1, 2, 4, 7, 13, 40] {
            let palette = motif_palette(count);
            assert_eq!(palette.len(), count);
            for i in 0..count {
                for j in (i + 1)..count {
                    assert_ne!(palette[i], palette[j], "count {count}: {i} vs {j}");
                }
            }
        }
    }

    #[test]
    fn test_color_is_stable() {
        for index in 0..6 {
            assert_eq!(motif_color(6, index), motif_color(6, index));
            assert_eq!(motif_palette(6)[index], motif_color(6, index));
        }
    }
}
