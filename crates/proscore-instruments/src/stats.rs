//! Aggregate helpers shared by the scoring code.
//!
//! Every aggregate returns `None` for empty input; callers pick their own
//! default with `unwrap_or`.

pub fn sum(values: &[f64]) -> Option<f64> {
    sum_by(values, |v| *v)
}

pub fn sum_by<T, F>(items: &[T], value: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }
    Some(items.iter().map(value).sum())
}

pub fn mean(values: &[f64]) -> Option<f64> {
    mean_by(values, |v| *v)
}

pub fn mean_by<T, F>(items: &[T], value: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    sum_by(items, value).map(|total| total / items.len() as f64)
}

pub fn variance(values: &[f64]) -> Option<f64> {
    variance_by(values, |v| *v)
}

/// Population variance: `Σ(x - μ)² / n`.
pub fn variance_by<T, F>(items: &[T], value: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    let mu = mean_by(items, &value)?;
    sum_by(items, |item| (value(item) - mu).powi(2)).map(|total| total / items.len() as f64)
}

/// `start, start + step, …` strictly below `end`, produced lazily.
///
/// Yields `ceil((end - start) / step)` values. Non-positive steps, non-finite
/// arguments and `end <= start` give an empty sequence.
pub fn range(start: f64, end: f64, step: f64) -> impl ExactSizeIterator<Item = f64> {
    let degenerate = !(start.is_finite() && end.is_finite() && step.is_finite())
        || step <= 0.0
        || end <= start;
    // Saturates for spans wider than usize; nothing is allocated up front.
    let count = if degenerate {
        0
    } else {
        ((end - start) / step).ceil() as usize
    };
    (0..count).map(move |i| start + i as f64 * step)
}

/// English ordinal for `n` truncated toward zero: `1st`, `22nd`, `13th`, `-19th`.
///
/// Works on the float directly, so values beyond the `i64` range keep every
/// digit. Returns `None` for NaN and infinities.
pub fn ordinal(n: f64) -> Option<String> {
    if !n.is_finite() {
        return None;
    }
    // `+ 0.0` turns -0.0 into 0.0.
    let whole = n.trunc() + 0.0;
    let magnitude = whole.abs();
    let suffix = match ((magnitude % 10.0) as u8, (magnitude % 100.0) as u8) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    Some(format!("{whole:.0}{suffix}"))
}
