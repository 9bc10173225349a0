use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Position;

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
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Position → Color32
// ---------------------------------------------------------------------------

/// Stable colour per position.
///
/// Built once from every position in the dataset (not just the selected
/// ones), so a line keeps its colour while other positions are toggled.
#[derive(Debug, Clone, Default)]
pub struct PositionColors {
    mapping: BTreeMap<Position, Color32>,
}

impl PositionColors {
    pub fn new(positions: &[Position]) -> Self {
        let mut sorted: Vec<&Position> = positions.iter().collect();
        sorted.sort();
        sorted.dedup();

        let palette = generate_palette(sorted.len());
        let mapping = sorted
            .into_iter()
            .cloned()
            .zip(palette)
            .collect();

        PositionColors { mapping }
    }

    /// Look up the colour for a position; unknown positions are gray.
    pub fn color_for(&self, position: &Position) -> Color32 {
        self.mapping
            .get(position)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}
