//! Gradient directions for each noise dimension.
//!
//! A corner's hash is masked to the table length (a power of two) to pick its
//! gradient, so every table length here must stay a power of two.

/// 1D gradients.
pub const GRADIENT_1D: [[i8; 1]; 2] = [[-1], [1]];

/// 2D gradients: the four axis directions.
pub const GRADIENT_2D: [[i8; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];

/// 3D gradients: the twelve cube edge midpoints, padded to sixteen with
/// repeats so the hash can be masked instead of reduced modulo 12.
pub const GRADIENT_3D: [[i8; 3]; 16] = [
    [1, 1, 0],
    [-1, 1, 0],
    [1, -1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [-1, 0, 1],
    [1, 0, -1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, -1, 1],
    [0, 1, -1],
    [0, -1, -1],
    [1, 1, 0],
    [-1, 1, 0],
    [0, -1, 1],
    [0, -1, -1],
];

/// 4D gradients: the 32 edge midpoints of the tesseract.
pub const GRADIENT_4D: [[i8; 4]; 32] = [
    [-1, -1, -1, 0],
    [-1, -1, 1, 0],
    [-1, 1, -1, 0],
    [-1, 1, 1, 0],
    [1, -1, -1, 0],
    [1, -1, 1, 0],
    [1, 1, -1, 0],
    [1, 1, 1, 0],
    [-1, -1, 0, -1],
    [-1, 1, 0, -1],
    [1, -1, 0, -1],
    [1, 1, 0, -1],
    [-1, -1, 0, 1],
    [-1, 1, 0, 1],
    [1, -1, 0, 1],
    [1, 1, 0, 1],
    [-1, 0, -1, -1],
    [1, 0, -1, -1],
    [-1, 0, -1, 1],
    [1, 0, -1, 1],
    [-1, 0, 1, -1],
    [1, 0, 1, -1],
    [-1, 0, 1, 1],
    [1, 0, 1, 1],
    [0, -1, -1, -1],
    [0, -1, -1, 1],
    [0, -1, 1, -1],
    [0, -1, 1, 1],
    [0, 1, -1, -1],
    [0, 1, -1, 1],
    [0, 1, 1, -1],
    [0, 1, 1, 1],
];

/// Dot product of a gradient direction with an offset vector.
#[inline]
pub(crate) fn dot<const N: usize>(g: &[i8; N], offset: [f32; N]) -> f32 {
    g.iter()
        .zip(offset)
        .map(|(&g, d)| d * f32::from(g))
        .sum()
}
