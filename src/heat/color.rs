//! Count-to-color mapping for heatmap cells.
//!
//! Each day gets two ramps, blue for my commits and red for everyone else's,
//! blended into one fill. A day with no commits at all is `#eeeeee`.

use std::fmt;

const BASE: f64 = 238.0;
const STRONG: f64 = 180.0;
const MILD: f64 = 140.0;

/// RGB color with floating channels; rounding happens only in [`Color::hex`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise mean, truncated to whole intensities.
    pub fn average(self, other: Color) -> Color {
        let mean = |a: f64, b: f64| ((a + b) / 2.0).trunc();
        Color::new(mean(self.r, other.r), mean(self.g, other.g), mean(self.b, other.b))
    }

    /// Six lowercase hex digits, no leading `#`.
    pub fn hex(&self) -> String {
        let channel = |v: f64| v.clamp(0.0, 255.0) as u8;
        format!("{:02x}{:02x}{:02x}", channel(self.r), channel(self.g), channel(self.b))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex())
    }
}

/// Intensity of `count` against `max` in `[0, 1]`.
///
/// A quarter of `max` is added to both sides, so a single commit stays
/// visibly darker than an empty day even when `max` is large.
pub fn density(count: u32, max: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let offset = max as f64 * 0.25;
    let denominator = max as f64 + offset;
    if denominator <= 0.0 {
        return 1.0;
    }
    ((count as f64 + offset) / denominator).min(1.0)
}

pub fn mine_color(density: f64) -> Color {
    Color::new(BASE - density * STRONG, BASE - density * MILD, BASE)
}

pub fn others_color(density: f64) -> Color {
    Color::new(BASE, BASE - density * STRONG, BASE - density * MILD)
}

/// Fill for a day with `mine` and `others` commits, scaled by `global_max`.
pub fn cell_color(mine: u32, others: u32, global_max: u32) -> Color {
    mine_color(density(mine, global_max)).average(others_color(density(others, global_max)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_primary_colors() {
        let red = Color::new(255.0, 0.0, 0.0);
        let green = Color::new(0.0, 255.0, 0.0);
        let blue = Color::new(0.0, 0.0, 255.0);
        assert_eq!(red.average(green), Color::new(127.0, 127.0, 0.0));
        assert_eq!(red.average(blue), Color::new(127.0, 0.0, 127.0));
        assert_eq!(green.average(blue), Color::new(0.0, 127.0, 127.0));
    }

    #[test]
    fn averaging_is_commutative() {
        let samples = [
            Color::new(0.0, 0.0, 0.0),
            Color::new(255.0, 255.0, 255.0),
            Color::new(12.5, 200.25, 99.0),
            mine_color(0.7),
            others_color(0.3),
        ];
        for a in samples {
            for b in samples {
                assert_eq!(a.average(b), b.average(a));
            }
        }
    }

    #[test]
    fn hex_is_zero_padded_lowercase() {
        assert_eq!(Color::new(238.0, 238.0, 238.0).hex(), "eeeeee");
        assert_eq!(Color::new(1.0, 10.0, 171.9).hex(), "010aab");
        assert_eq!(Color::new(-4.0, 300.0, 0.0).to_string(), "#00ff00");
    }

    #[test]
    fn density_bounds() {
        for max in [1, 2, 7, 100] {
            assert_eq!(density(0, max), 0.0);
            assert!((density(max, max) - 1.0).abs() < 1e-12);
        }
        assert_eq!(density(3, 0), 1.0);
    }

    #[test]
    fn density_never_decreases_with_count() {
        for max in [1u32, 4, 25] {
            let mut previous = density(0, max);
            for count in 1..=max {
                let d = density(count, max);
                assert!(d >= previous, "max={max} count={count}");
                previous = d;
            }
        }
    }

    #[test]
    fn one_commit_is_distinguishable_from_none() {
        // 1 against 100: (1 + 25) / 125
        assert!((density(1, 100) - 0.208).abs() < 1e-12);
        assert_ne!(cell_color(1, 0, 100).hex(), cell_color(0, 0, 100).hex());
    }

    #[test]
    fn empty_day_is_base_gray() {
        assert_eq!(cell_color(0, 0, 0).hex(), "eeeeee");
        assert_eq!(cell_color(0, 0, 12).hex(), "eeeeee");
    }

    #[test]
    fn full_days_blend_both_ramps() {
        // mine (58, 98, 238), others (238, 58, 98)
        assert_eq!(cell_color(5, 0, 5).hex(), "94a8ee");
        assert_eq!(cell_color(0, 5, 5).hex(), "ee94a8");
        assert_eq!(cell_color(5, 5, 5).hex(), "944ea8");
    }
}
