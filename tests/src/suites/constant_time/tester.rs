//! Welch's t-test over repeated timing samples

use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Outcome of comparing two timing distributions
#[derive(Debug, Clone)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub is_constant_time: bool,
}

/// Collects per-call timings by averaging over batches of calls
pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Mean nanoseconds per call of `f`, one value per sample
    pub fn measure<F: FnMut()>(&self, mut f: F) -> Vec<f64> {
        (0..self.num_samples)
            .map(|_| {
                let start = Instant::now();
                for _ in 0..self.num_iterations {
                    f();
                }
                start.elapsed().as_nanos() as f64 / self.num_iterations as f64
            })
            .collect()
    }

    /// Interleave warmup calls of both paths
    pub fn warm_up<A: FnMut(), B: FnMut()>(rounds: usize, mut a: A, mut b: B) {
        for _ in 0..rounds {
            a();
            b();
        }
    }

    pub fn mean(samples: &[f64]) -> f64 {
        samples.iter().sum::<f64>() / samples.len() as f64
    }

    /// Unbiased sample variance
    pub fn variance(samples: &[f64], mean: f64) -> f64 {
        let ss: f64 = samples.iter().map(|s| (s - mean).powi(2)).sum();
        ss / (samples.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn trim_outliers(samples: &[f64]) -> Vec<f64> {
        if samples.len() < 4 {
            return samples.to_vec();
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let q1 = sorted[sorted.len() / 4];
        let q3 = sorted[sorted.len() * 3 / 4];
        let fence = 1.5 * (q3 - q1);
        samples
            .iter()
            .copied()
            .filter(|&s| s >= q1 - fence && s <= q3 + fence)
            .collect()
    }

    /// Welch's t-statistic and Welch-Satterthwaite degrees of freedom
    pub fn welch(a: &[f64], b: &[f64]) -> (f64, f64) {
        let (mean_a, mean_b) = (Self::mean(a), Self::mean(b));
        let se_a = Self::variance(a, mean_a) / a.len() as f64;
        let se_b = Self::variance(b, mean_b) / b.len() as f64;

        let t = (mean_a - mean_b).abs() / (se_a + se_b).sqrt();
        let df = (se_a + se_b).powi(2)
            / (se_a.powi(2) / (a.len() as f64 - 1.0) + se_b.powi(2) / (b.len() as f64 - 1.0));
        (t, df)
    }

    /// Two-tailed p-value of `t` under Student's t with `df` degrees of freedom
    pub fn p_value(t: f64, df: f64) -> f64 {
        if !t.is_finite() {
            return 0.0;
        }
        match StudentsT::new(0.0, 1.0, df.max(1.0)) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.0,
        }
    }

    /// Compare two sample sets against `config`
    ///
    /// The paths count as constant-time unless the difference is both
    /// statistically significant and larger than the accepted ratio.
    pub fn analyze(&self, a: &[f64], b: &[f64], config: &TestConfig) -> Result<TimingAnalysis, String> {
        let a = Self::trim_outliers(a);
        let b = Self::trim_outliers(b);
        if a.len() < 2 || b.len() < 2 {
            return Err("not enough samples left after trimming outliers".to_string());
        }

        let mean_a = Self::mean(&a);
        let mean_b = Self::mean(&b);
        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);
        let (t_statistic, degrees_of_freedom) = Self::welch(&a, &b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        let significant = t_statistic > config.t_stat_threshold;
        let large = mean_ratio > config.mean_ratio_max;

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            is_constant_time: !(significant && large),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples_pass() {
        let a: Vec<f64> = (0..30).map(|i| 100.0 + (i % 5) as f64).collect();
        let tester = TimingTester::new(30, 1);
        let analysis = tester.analyze(&a, &a, &TestConfig::default()).unwrap();
        assert!(analysis.is_constant_time);
        assert!((analysis.mean_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_clearly_different_samples_fail() {
        let a: Vec<f64> = (0..30).map(|i| 100.0 + (i % 3) as f64).collect();
        let b: Vec<f64> = (0..30).map(|i| 200.0 + (i % 3) as f64).collect();
        let tester = TimingTester::new(30, 1);
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(!analysis.is_constant_time);
        assert!(analysis.p_value < 0.001);
    }

    #[test]
    fn test_trim_outliers_drops_spikes() {
        let mut samples = vec![10.0; 20];
        samples.push(1000.0);
        let trimmed = TimingTester::trim_outliers(&samples);
        assert_eq!(trimmed.len(), 20);
    }
}
