pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 0.01;
pub const DEFAULT_DISTINCTION_THRESHOLD: f64 = 80.0;
pub const DEFAULT_PASS_THRESHOLD: f64 = 50.0;

/// Grading policy: renormalization tolerance and inclusive grade lower bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    weight_tolerance: f64,
    distinction_threshold: f64,
    pass_threshold: f64,
}

impl ScoringPolicy {
    /// Invalid dials fall back to the defaults: a non-finite or negative tolerance, a
    /// non-finite threshold, or a pass threshold above the distinction threshold.
    pub fn new(weight_tolerance: f64, distinction_threshold: f64, pass_threshold: f64) -> Self {
        let weight_tolerance = if weight_tolerance.is_finite() && weight_tolerance >= 0.0 {
            weight_tolerance
        } else {
            DEFAULT_WEIGHT_TOLERANCE
        };

        let (distinction_threshold, pass_threshold) = if distinction_threshold.is_finite()
            && pass_threshold.is_finite()
            && pass_threshold <= distinction_threshold
        {
            (distinction_threshold, pass_threshold)
        } else {
            (DEFAULT_DISTINCTION_THRESHOLD, DEFAULT_PASS_THRESHOLD)
        };

        Self {
            weight_tolerance,
            distinction_threshold,
            pass_threshold,
        }
    }

    pub fn weight_tolerance(&self) -> f64 {
        self.weight_tolerance
    }

    pub fn distinction_threshold(&self) -> f64 {
        self.distinction_threshold
    }

    pub fn pass_threshold(&self) -> f64 {
        self.pass_threshold
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_WEIGHT_TOLERANCE,
            DEFAULT_DISTINCTION_THRESHOLD,
            DEFAULT_PASS_THRESHOLD,
        )
    }
}
