use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Kind;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            to_color32(hsl)
        })
        .collect()
}

fn to_color32(hsl: Hsl) -> Color32 {
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Fixed colors
// ---------------------------------------------------------------------------

/// Fixed colour per title kind, shared by the pie, scatter, and box charts
/// so the two categories read the same everywhere.
pub fn kind_color(kind: Kind) -> Color32 {
    match kind {
        Kind::Movie => Color32::from_rgb(229, 66, 66),
        Kind::TvShow => Color32::from_rgb(66, 135, 229),
    }
}

/// Heatmap ramp: `t` in `[0, 1]` maps dark-blue → warm yellow.
pub fn heat_color(t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let hue = 240.0 - 190.0 * t;
    let lightness = 0.18 + 0.42 * t;
    to_color32(Hsl::new(hue, 0.85, lightness))
}

// ---------------------------------------------------------------------------
// Category colors: enum value → Color32
// ---------------------------------------------------------------------------

/// Maps the values of a categorical column to distinct colours.
#[derive(Debug, Clone)]
pub struct CategoryColors<T: Ord + Copy> {
    mapping: BTreeMap<T, Color32>,
    default_color: Color32,
}

impl<T: Ord + Copy> CategoryColors<T> {
    /// Build a colour map over the given values, in their sorted order.
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        let sorted: BTreeSet<T> = values.into_iter().collect();
        let palette = generate_palette(sorted.len());
        let mapping = sorted.into_iter().zip(palette).collect();

        CategoryColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a value.
    pub fn color_for(&self, value: T) -> Color32 {
        self.mapping
            .get(&value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Genre;

    #[test]
    fn palette_sizes_match() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(6).len(), 6);
    }

    #[test]
    fn category_colors_are_distinct_per_value() {
        let colors = CategoryColors::new(Genre::ALL);
        let a = colors.color_for(Genre::Action);
        let b = colors.color_for(Genre::Thriller);
        assert_ne!(a, b);
    }
}
