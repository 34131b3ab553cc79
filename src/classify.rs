//! Analytic classification of f(x) = a·b^x.
//!
//! The verdict is a pure function of the sign of `a` and the regime of
//! `b`; it is never derived from sampled values. The seven-row decision
//! table is a single exhaustive match over `(Basis, CoefficientSign)` so
//! every case stays auditable.

use thiserror::Error;

/// Behavior of the curve as x grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Monotonicity {
    Increasing,
    Decreasing,
    /// The function takes the same value everywhere: 0 when a = 0, and
    /// a when b = 1.
    Constant { value: f64 },
}

/// Basis regimes that drive the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basis {
    /// b > 1: the bare exponential rises.
    Growth,
    /// 0 < b < 1: the bare exponential decays.
    Decay,
    /// b = 1: b^x is identically 1.
    Unit,
}

impl Basis {
    /// Place a basis value into its regime.
    ///
    /// b ≤ 0 has no real-valued exponential for fractional x and is
    /// rejected rather than extrapolated.
    pub fn of(b: f64) -> Result<Self, ClassifyError> {
        if !b.is_finite() || b <= 0.0 {
            return Err(ClassifyError::InvalidBasis(b));
        }
        if b > 1.0 {
            Ok(Self::Growth)
        } else if b < 1.0 {
            Ok(Self::Decay)
        } else {
            Ok(Self::Unit)
        }
    }
}

/// Sign of the coefficient `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientSign {
    Positive,
    Negative,
    Zero,
}

impl CoefficientSign {
    pub fn of(a: f64) -> Result<Self, ClassifyError> {
        if !a.is_finite() {
            return Err(ClassifyError::InvalidCoefficient(a));
        }
        if a > 0.0 {
            Ok(Self::Positive)
        } else if a < 0.0 {
            Ok(Self::Negative)
        } else {
            Ok(Self::Zero)
        }
    }
}

/// Severity used by the UI to color the conclusion callout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Info,
    Warning,
    Error,
}

/// Verdict plus the human-readable rationale shown under the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub monotonicity: Monotonicity,
    /// Headline such as "Increasing function".
    pub headline: String,
    /// Why the basis pushes the curve the way it does.
    pub basis_note: String,
    /// How the coefficient follows or reflects that trend.
    pub coefficient_note: String,
    pub tone: Tone,
}

/// Inputs the decision table does not cover.
#[derive(Debug, Error, PartialEq)]
pub enum ClassifyError {
    #[error("basis must be a finite number greater than zero, got {0}")]
    InvalidBasis(f64),
    #[error("coefficient must be a finite number, got {0}")]
    InvalidCoefficient(f64),
}

/// Classify a·b^x from the coefficient sign and basis regime alone.
pub fn classify(a: f64, b: f64) -> Result<Classification, ClassifyError> {
    let basis = Basis::of(b)?;
    let sign = CoefficientSign::of(a)?;
    let a_text = format_scalar(a);
    let b_text = format_scalar(b);

    let rising = format!(
        "The basis b = {b_text} is greater than 1, so the exponential curve rises as x grows."
    );
    let falling = format!(
        "The basis b = {b_text} lies between 0 and 1, so the exponential curve decays as x grows."
    );
    let collapse =
        "The coefficient a = 0 collapses the function to f(x) = 0, a horizontal line.".to_string();

    Ok(match (basis, sign) {
        (Basis::Growth, CoefficientSign::Positive) => Classification {
            monotonicity: Monotonicity::Increasing,
            headline: "Increasing function".to_string(),
            basis_note: rising,
            coefficient_note: format!(
                "The coefficient a = {a_text} is positive, so the curve follows that rising trend."
            ),
            tone: Tone::Success,
        },
        (Basis::Growth, CoefficientSign::Negative) => Classification {
            monotonicity: Monotonicity::Decreasing,
            headline: "Decreasing function".to_string(),
            basis_note: rising,
            coefficient_note: format!(
                "The coefficient a = {a_text} is negative, so the rising curve is reflected \
                 across the x-axis and falls instead."
            ),
            tone: Tone::Warning,
        },
        (Basis::Growth, CoefficientSign::Zero) => Classification {
            monotonicity: Monotonicity::Constant { value: 0.0 },
            headline: "Constant function".to_string(),
            basis_note: rising,
            coefficient_note: collapse,
            tone: Tone::Info,
        },
        (Basis::Decay, CoefficientSign::Positive) => Classification {
            monotonicity: Monotonicity::Decreasing,
            headline: "Decreasing function".to_string(),
            basis_note: falling,
            coefficient_note: format!(
                "The coefficient a = {a_text} is positive, so the curve follows that falling trend."
            ),
            tone: Tone::Error,
        },
        (Basis::Decay, CoefficientSign::Negative) => Classification {
            monotonicity: Monotonicity::Increasing,
            headline: "Increasing function".to_string(),
            basis_note: falling,
            coefficient_note: format!(
                "The coefficient a = {a_text} is negative, so the falling curve is reflected \
                 across the x-axis and rises instead."
            ),
            tone: Tone::Success,
        },
        (Basis::Decay, CoefficientSign::Zero) => Classification {
            monotonicity: Monotonicity::Constant { value: 0.0 },
            headline: "Constant function".to_string(),
            basis_note: falling,
            coefficient_note: collapse,
            tone: Tone::Info,
        },
        (Basis::Unit, _) => Classification {
            monotonicity: Monotonicity::Constant { value: a },
            headline: "Constant function".to_string(),
            basis_note:
                "The basis b = 1 makes b^x identically 1, so the exponential part is flat."
                    .to_string(),
            coefficient_note: format!("The function value is always equal to a = {a_text}."),
            tone: Tone::Info,
        },
    })
}

/// Format a slider value the way it was entered: trailing zeros trimmed,
/// at most two decimals.
pub fn format_scalar(value: f64) -> String {
    // -0.0 prints as 0.
    let value = if value == 0.0 { 0.0 } else { value };
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_with_positive_coefficient_is_increasing() {
        let result = classify(2.0, 3.0).unwrap();
        assert_eq!(result.monotonicity, Monotonicity::Increasing);
        assert_eq!(result.tone, Tone::Success);
        assert!(result.basis_note.contains("b = 3"));
        assert!(result.coefficient_note.contains("a = 2"));
    }

    #[test]
    fn growth_with_negative_coefficient_is_decreasing() {
        let result = classify(-2.0, 3.0).unwrap();
        assert_eq!(result.monotonicity, Monotonicity::Decreasing);
        assert_eq!(result.tone, Tone::Warning);
        assert!(result.coefficient_note.contains("reflected"));
    }

    #[test]
    fn growth_with_zero_coefficient_is_constant_zero() {
        let result = classify(0.0, 3.0).unwrap();
        assert_eq!(result.monotonicity, Monotonicity::Constant { value: 0.0 });
        assert_eq!(result.headline, "Constant function");
        assert_eq!(result.tone, Tone::Info);
    }

    #[test]
    fn decay_with_positive_coefficient_is_decreasing() {
        let result = classify(2.0, 0.5).unwrap();
        assert_eq!(result.monotonicity, Monotonicity::Decreasing);
        assert_eq!(result.tone, Tone::Error);
    }

    #[test]
    fn decay_with_negative_coefficient_is_increasing() {
        let result = classify(-2.0, 0.5).unwrap();
        assert_eq!(result.monotonicity, Monotonicity::Increasing);
        assert_eq!(result.tone, Tone::Success);
    }

    #[test]
    fn decay_with_zero_coefficient_is_constant_zero() {
        let result = classify(0.0, 0.5).unwrap();
        assert_eq!(result.monotonicity, Monotonicity::Constant { value: 0.0 });
    }

    #[test]
    fn unit_basis_is_constant_at_coefficient() {
        let result = classify(5.0, 1.0).unwrap();
        assert_eq!(result.monotonicity, Monotonicity::Constant { value: 5.0 });
        assert!(result.coefficient_note.contains("a = 5"));

        let negative = classify(-3.0, 1.0).unwrap();
        assert_eq!(negative.monotonicity, Monotonicity::Constant { value: -3.0 });
    }

    #[test]
    fn non_positive_basis_is_rejected() {
        assert_eq!(classify(1.0, 0.0), Err(ClassifyError::InvalidBasis(0.0)));
        assert_eq!(classify(1.0, -2.0), Err(ClassifyError::InvalidBasis(-2.0)));
        assert!(classify(1.0, f64::NAN).is_err());
    }

    #[test]
    fn non_finite_coefficient_is_rejected() {
        assert!(matches!(
            classify(f64::INFINITY, 2.0),
            Err(ClassifyError::InvalidCoefficient(_))
        ));
    }

    #[test]
    fn format_scalar_trims_trailing_zeros() {
        assert_eq!(format_scalar(2.0), "2");
        assert_eq!(format_scalar(0.5), "0.5");
        assert_eq!(format_scalar(-1.5), "-1.5");
        assert_eq!(format_scalar(0.30000000000000004), "0.3");
        assert_eq!(format_scalar(-0.0), "0");
    }
}
