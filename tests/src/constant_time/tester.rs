//! Welch t-test comparison of two timing distributions

use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;
use thiserror::Error;

use super::config::TestConfig;

/// Failure to produce an analysis
#[derive(Debug, Error, PartialEq)]
pub enum TimingError {
    #[error("not enough samples after outlier removal: {remaining}")]
    NotEnoughSamples { remaining: usize },
}

/// Results of comparing two timing samples
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
    pub cohens_d: f64,
}

impl TimingAnalysis {
    /// One-paragraph summary for test output
    pub fn summary(&self, name: &str) -> String {
        format!(
            "{name}: mean {:.0} ns vs {:.0} ns (ratio {:.3}), t={:.2}, df={:.1}, p={:.3}, d={:.2}, score={:.3} -> {}",
            self.mean_a,
            self.mean_b,
            self.mean_ratio,
            self.t_statistic,
            self.degrees_of_freedom,
            self.p_value,
            self.cohens_d,
            self.combined_score,
            if self.is_constant_time { "constant" } else { "variable" },
        )
    }
}

/// Measurement context; construct once and pass by reference
pub struct TimingTester {
    config: TestConfig,
}

impl TimingTester {
    pub fn new(config: TestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TestConfig {
        &self.config
    }

    /// Average nanoseconds per call over `num_iterations`, `num_samples` times
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let mut times = Vec::with_capacity(self.config.num_samples);
        for _ in 0..self.config.num_samples {
            let start = Instant::now();
            for _ in 0..self.config.num_iterations {
                f();
            }
            let avg = start.elapsed().as_nanos() / self.config.num_iterations as u128;
            times.push(avg);
        }
        times
    }

    /// Warm both closures up, measure them interleaved, and analyze
    pub fn compare<A, B>(&self, mut a: A, mut b: B) -> Result<TimingAnalysis, TimingError>
    where
        A: FnMut(),
        B: FnMut(),
    {
        for _ in 0..self.config.num_warmup {
            a();
            b();
        }
        let times_a = self.measure(&mut a);
        let times_b = self.measure(&mut b);
        self.analyze(&times_a, &times_b)
    }

    pub fn mean(times: &[u128]) -> f64 {
        let sum: u128 = times.iter().sum();
        sum as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lower, upper) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .filter(|&&t| (t as f64) >= lower && (t as f64) <= upper)
            .copied()
            .collect()
    }

    /// Welch's t-statistic
    pub fn t_statistic(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        (mean_a - mean_b).abs() / ((var_a / n_a + var_b / n_b).sqrt())
    }

    /// Welch-Satterthwaite degrees of freedom
    pub fn degrees_of_freedom(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let term_a = Self::variance(times_a, mean_a) / times_a.len() as f64;
        let term_b = Self::variance(times_b, mean_b) / times_b.len() as f64;

        (term_a + term_b).powi(2)
            / (term_a.powi(2) / (times_a.len() as f64 - 1.0)
                + term_b.powi(2) / (times_b.len() as f64 - 1.0))
    }

    /// Two-tailed p-value from the t distribution
    pub fn p_value(t_stat: f64, df: f64) -> f64 {
        if df < 1.0 || !df.is_finite() {
            return if t_stat.abs() < 2.0 { 0.12 } else { 0.01 };
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.01,
        }
    }

    /// Cohen's d with pooled standard deviation
    pub fn cohens_d(times_a: &[u128], times_b: &[u128]) -> f64 {
        let mean_a = Self::mean(times_a);
        let mean_b = Self::mean(times_b);
        let var_a = Self::variance(times_a, mean_a);
        let var_b = Self::variance(times_b, mean_b);
        let n_a = times_a.len() as f64;
        let n_b = times_b.len() as f64;

        let pooled = ((var_a * (n_a - 1.0) + var_b * (n_b - 1.0)) / (n_a + n_b - 2.0)).sqrt();
        (mean_a - mean_b).abs() / pooled
    }

    /// Weighted mix of mean ratio, t-statistic and relative spread; 1.0 is ideal
    pub fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev_a: f64, rel_std_dev_b: f64) -> f64 {
        let spread = f64::max(rel_std_dev_a, rel_std_dev_b);
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + spread * 0.3;
        if score.is_nan() || score.is_infinite() || score < 1.0 {
            mean_ratio
        } else {
            score
        }
    }

    pub fn analyze(&self, times_a: &[u128], times_b: &[u128]) -> Result<TimingAnalysis, TimingError> {
        let clean_a = Self::remove_outliers(times_a);
        let clean_b = Self::remove_outliers(times_b);
        let remaining = clean_a.len().min(clean_b.len());
        if remaining < 2 {
            return Err(TimingError::NotEnoughSamples { remaining });
        }

        let mean_a = Self::mean(&clean_a);
        let mean_b = Self::mean(&clean_b);
        let std_dev_a = Self::variance(&clean_a, mean_a).sqrt();
        let std_dev_b = Self::variance(&clean_b, mean_b).sqrt();
        let mean_ratio = if mean_a > mean_b {
            mean_a / mean_b
        } else {
            mean_b / mean_a
        };

        let t_statistic = Self::t_statistic(&clean_a, &clean_b);
        let degrees_of_freedom = Self::degrees_of_freedom(&clean_a, &clean_b);
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);
        let combined_score =
            Self::combined_score(mean_ratio, t_statistic, std_dev_a / mean_a, std_dev_b / mean_b);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a,
            std_dev_b,
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            combined_score,
            is_constant_time: combined_score <= self.config.combined_score_threshold
                && mean_ratio <= self.config.mean_ratio_max,
            cohens_d: Self::cohens_d(&clean_a, &clean_b),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outliers_are_dropped() {
        let times = [100u128, 101, 99, 100, 102, 98, 100, 5000];
        let clean = TimingTester::remove_outliers(&times);
        assert!(!clean.contains(&5000));
        assert_eq!(clean.len(), 7);
    }

    #[test]
    fn identical_distributions_pass() {
        let tester = TimingTester::new(TestConfig::default());
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let analysis = tester.analyze(&a, &a).unwrap();
        assert_eq!(analysis.t_statistic, 0.0);
        assert!((analysis.mean_ratio - 1.0).abs() < 1e-12);
        assert!(analysis.is_constant_time);
    }

    #[test]
    fn separated_distributions_fail() {
        let tester = TimingTester::new(TestConfig::default());
        let a = [100u128, 102, 98, 101, 99, 100, 103, 97];
        let b = [300u128, 302, 298, 301, 299, 300, 303, 297];
        let analysis = tester.analyze(&a, &b).unwrap();
        assert!(analysis.mean_ratio > 2.9);
        assert!(analysis.p_value < 0.001);
        assert!(!analysis.is_constant_time);
    }

    #[test]
    fn too_few_samples() {
        let tester = TimingTester::new(TestConfig::default());
        assert_eq!(
            tester.analyze(&[1], &[1, 2, 3]).unwrap_err(),
            TimingError::NotEnoughSamples { remaining: 1 }
        );
    }
}
