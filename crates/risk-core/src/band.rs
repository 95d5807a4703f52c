//! Band selection: which pill a continuous level belongs to

use crate::layout::Pill;

/// First pill whose band `[level - 0.5, level + 0.5)` contains `level`
///
/// Bands are contiguous, so at most one pill matches. Any level inside the
/// scale range matches exactly one pill; the outer boundaries belong to the
/// outermost pills.
pub fn select_band(level: f32, pills: &[Pill]) -> Option<&Pill> {
    pills.iter().find(|pill| pill.contains(level))
}
