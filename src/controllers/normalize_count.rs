pub const DEFAULT_COUNT: usize = 5_000;
pub const MIN_COUNT: usize = 100;
pub const MAX_COUNT: usize = 1_000_000_000;

/// Turns a caller-supplied count into one the engines should be asked for.
/// Non-positive values fall back to the default, everything else is clamped.
#[must_use]
pub fn normalize_count(requested: i64) -> usize {
    if requested <= 0 {
        return DEFAULT_COUNT;
    }

    usize::try_from(requested)
        .unwrap_or(MAX_COUNT)
        .clamp(MIN_COUNT, MAX_COUNT)
}
