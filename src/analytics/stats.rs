//! Shared numeric helpers for the analytics engine

/// Arithmetic mean, or None for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n-1 denominator), or None for fewer than 2 values
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Round to 2 decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pearson correlation coefficient between two equal-length series
///
/// Returns None when the correlation is undefined: fewer than 2 points, or
/// zero variance on either side. A defined result is always in [-1, 1].
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }

    let n = x.len() as f64;

    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y.iter()).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();
    let sum_y2: f64 = y.iter().map(|b| b * b).sum();

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x.powi(2)) * (n * sum_y2 - sum_y.powi(2))).sqrt();

    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }

    // Floating-point noise can push |r| a hair past 1
    Some((numerator / denominator).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_std_dev() {
        // Known value: std dev of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 is ~2.138
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = sample_std_dev(&values).unwrap();
        assert!((sd - 2.138).abs() < 0.001);

        assert_eq!(sample_std_dev(&[3.0]), None);
        assert_eq!(sample_std_dev(&[]), None);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.678), 2.68);
        assert_eq!(round2(4.0), 4.0);
    }

    #[test]
    fn test_pearson_perfect_positive() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![2.0, 4.0, 6.0, 8.0, 10.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((r - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_perfect_negative() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = vec![10.0, 8.0, 6.0, 4.0, 2.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((r + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_pearson_zero_variance_is_undefined() {
        let x = vec![3.0, 3.0, 3.0];
        let y = vec![1.0, 2.0, 3.0];
        assert_eq!(pearson_correlation(&x, &y), None);
        assert_eq!(pearson_correlation(&y, &x), None);
    }

    #[test]
    fn test_pearson_too_few_points() {
        assert_eq!(pearson_correlation(&[], &[]), None);
        assert_eq!(pearson_correlation(&[1.0], &[2.0]), None);
        assert_eq!(pearson_correlation(&[1.0, 2.0], &[2.0]), None);
    }

    #[test]
    fn test_pearson_bounded() {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let y = vec![1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((-1.0..=1.0).contains(&r));
    }
}
