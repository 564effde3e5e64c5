//! ASCII rendering of a fractal noise field.

use brisk_noise::PerlinNoise;

use crate::config::{MAX_PREVIEW_CELLS, MAX_PREVIEW_SIDE, PreviewConfig};

/// Characters from lowest to highest value.
const RAMP: &[u8] = b" .:-=+*#%@";

/// Render `fractal_2d` over a `width × height` grid starting at the origin.
///
/// Values are divided by the total octave amplitude before picking a character,
/// so the ramp covers the whole output range whatever the amplitude settings.
#[must_use]
pub fn render(noise: &PerlinNoise, preview: &PreviewConfig) -> String {
    let total = noise.config().total_amplitude();
    let scale = if total > 0.0 { total.recip() } else { 0.0 };
    let last = RAMP.len() - 1;

    let capacity = (preview.width as usize)
        .saturating_add(1)
        .saturating_mul(preview.height as usize)
        .min(MAX_PREVIEW_SIDE as usize + MAX_PREVIEW_CELLS as usize);
    let mut out = String::with_capacity(capacity);
    for row in 0..preview.height {
        for col in 0..preview.width {
            let x = col as f32 * preview.scale;
            // Offset rows by half a cell so no row sits on y = 0 exactly.
            let y = (row as f32 + 0.5) * preview.scale;
            let level = (noise.fractal_2d(x, y) * scale).clamp(0.0, 1.0);
            let index = (level * last as f32).round() as usize;
            out.push(char::from(RAMP[index.min(last)]));
        }
        out.push('\n');
    }
    out
}
