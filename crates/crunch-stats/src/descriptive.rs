use std::collections::HashMap;

/// The most frequent value(s) in a sample.
///
/// A sample has a single mode when exactly one value reaches the maximum
/// frequency, and multiple modes when several values tie for it. Keeping the
/// two cases as separate variants lets callers format each shape explicitly
/// instead of special-casing a one-element list.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Exactly one value has the highest frequency.
    Single(f64),
    /// Several values tie for the highest frequency, in the order each was
    /// first encountered in the sample.
    Multiple(Vec<f64>),
}

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and
/// dispersion for a dataset of `f64` values.
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The most frequent value(s) in the dataset.
    pub mode: Mode,
    /// The population variance of the dataset (divisor `n`).
    pub variance: f64,
    /// The standard deviation of the dataset.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from a sample.
    ///
    /// The values are collected and sorted internally for the median; the
    /// mode is computed over the sample in its original order so that tied
    /// values keep their first-encountered ordering.
    ///
    /// # Arguments
    ///
    /// * `values` - An iterator over `f64` values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the dataset contains at least one value
    /// * `None` - if the dataset is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use crunch_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.variance, 2.0);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let values = values.into_iter().collect::<Vec<_>>();
        if values.is_empty() {
            return None;
        }

        let mode = compute_mode(&values);

        let mut sorted = values;
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len() as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let median = compute_median(&sorted);
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Some(Self {
            mean,
            median,
            mode,
            variance,
            std_dev,
        })
    }
}

/// Computes the median of values sorted in ascending order.
///
/// For an odd-length sample this is the middle element; for an even-length
/// sample it is the average of the two middle elements.
///
/// # Examples
///
/// ```
/// use crunch_stats::descriptive::compute_median;
///
/// assert_eq!(compute_median(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(compute_median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
#[must_use]
pub fn compute_median(sorted_values: &[f64]) -> f64 {
    let n = sorted_values.len();
    let mid = n / 2;
    if n.is_multiple_of(2) {
        (sorted_values[mid - 1] + sorted_values[mid]) / 2.0
    } else {
        sorted_values[mid]
    }
}

/// Computes the mode of a sample, preserving first-encountered order of
/// tied values.
///
/// # Examples
///
/// ```
/// use crunch_stats::descriptive::{Mode, compute_mode};
///
/// assert_eq!(compute_mode(&[5.0, 5.0, 5.0, 1.0]), Mode::Single(5.0));
/// assert_eq!(
///     compute_mode(&[1.0, 1.0, 2.0, 2.0, 3.0]),
///     Mode::Multiple(vec![1.0, 2.0]),
/// );
/// ```
#[must_use]
pub fn compute_mode(values: &[f64]) -> Mode {
    let mut frequencies = HashMap::new();
    let mut first_seen = Vec::new();
    for &value in values {
        // -0.0 and 0.0 count as the same value
        let value = if value == 0.0 { 0.0 } else { value };
        let count = frequencies.entry(value.to_bits()).or_insert(0_usize);
        if *count == 0 {
            first_seen.push(value);
        }
        *count += 1;
    }

    let max_frequency = frequencies.values().copied().max().unwrap_or(0);
    let modes = first_seen
        .into_iter()
        .filter(|value| frequencies[&value.to_bits()] == max_frequency)
        .collect::<Vec<_>>();
    if modes.len() == 1 {
        Mode::Single(modes[0])
    } else {
        Mode::Multiple(modes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::cast_precision_loss)]
    #[test]
    fn test_mean_times_count_equals_sum() {
        let values = [1.5, 2.25, -3.0, 10.0, 0.125];
        let stats = DescriptiveStats::new(values).unwrap();
        let sum = values.iter().sum::<f64>();
        assert!((stats.mean * values.len() as f64 - sum).abs() < 1e-9);
    }

    #[test]
    fn test_median_even_length() {
        let stats = DescriptiveStats::new([4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.5);
    }

    #[test]
    fn test_median_odd_length() {
        let stats = DescriptiveStats::new([3.0, 1.0, 2.0]).unwrap();
        assert_eq!(stats.median, 2.0);
    }

    #[test]
    fn test_mode_tie_keeps_first_seen_order() {
        let stats = DescriptiveStats::new([2.0, 1.0, 1.0, 2.0, 3.0]).unwrap();
        assert_eq!(stats.mode, Mode::Multiple(vec![2.0, 1.0]));
    }

    #[test]
    fn test_mode_scalar() {
        let stats = DescriptiveStats::new([5.0, 5.0, 5.0, 1.0]).unwrap();
        assert_eq!(stats.mode, Mode::Single(5.0));
    }

    #[test]
    fn test_mode_all_unique_returns_every_value() {
        assert_eq!(
            compute_mode(&[3.0, 1.0, 2.0]),
            Mode::Multiple(vec![3.0, 1.0, 2.0]),
        );
    }

    #[test]
    fn test_constant_sample_has_zero_spread() {
        let stats = DescriptiveStats::new([2.0, 2.0, 2.0, 2.0]).unwrap();
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.mode, Mode::Single(2.0));
    }

    #[test]
    fn test_single_element_sample() {
        let stats = DescriptiveStats::new([7.5]).unwrap();
        assert_eq!(stats.mean, 7.5);
        assert_eq!(stats.median, 7.5);
        assert_eq!(stats.mode, Mode::Single(7.5));
        assert_eq!(stats.variance, 0.0);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_empty_sample() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn test_variance_population_divisor() {
        // Population variance of [1, 2, 3, 4] is 1.25 (the sample-variance
        // convention with divisor n - 1 would give ~1.667).
        let stats = DescriptiveStats::new([1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((stats.variance - 1.25).abs() < 1e-12);
    }
}
