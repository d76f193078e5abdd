use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Series colours
// ---------------------------------------------------------------------------

/// Hue step between consecutive series indices (the golden angle). Any run of
/// neighbouring indices lands far apart on the colour wheel.
const HUE_STEP: f32 = 137.507_77;

/// Lightness alternates so adjacent indices differ even where hues are close.
const LIGHTNESS: [f32; 2] = [0.50, 0.62];

/// Colour of series `index`.
///
/// Depends only on the index, so a species keeps its colour whatever else is
/// selected and across File → Open of runs with the same species.
pub fn series_color(index: usize) -> Color32 {
    let hue = (index as f32 * HUE_STEP) % 360.0;
    let hsl = Hsl::new(hue, 0.75, LIGHTNESS[index % LIGHTNESS.len()]);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
