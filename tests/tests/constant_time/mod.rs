// Constant-time tests for padding removal

pub mod padding_tests;

pub use blockflow_tests::suites::constant_time::{TestConfig, TimingAnalysis, TimingTester};

/// Print the analysis and fail the test if the two paths differ
pub fn report(label: &str, analysis: &TimingAnalysis, config: &TestConfig) {
    println!("{} timing analysis:", label);
    println!(
        "  mean times: {:.2} ns vs {:.2} ns (ratio {:.3})",
        analysis.mean_a, analysis.mean_b, analysis.mean_ratio
    );
    println!(
        "  t = {:.3}, df = {:.1}, p = {:.4}",
        analysis.t_statistic, analysis.degrees_of_freedom, analysis.p_value
    );
    assert!(
        analysis.is_constant_time,
        "{} is not constant-time: ratio {:.3} (max {:.3}), t {:.3} (threshold {:.3})",
        label,
        analysis.mean_ratio,
        config.mean_ratio_max,
        analysis.t_statistic,
        config.t_stat_threshold
    );
}
