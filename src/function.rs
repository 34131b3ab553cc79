//! Sampling and evaluation of the exponential family f(x) = a·b^x.
//!
//! The slider bounds declared here are the boundary that keeps the basis
//! strictly positive; everything downstream may assume b > 0.

use std::ops::RangeInclusive;

/// Number of points sampled across the x-range for one curve.
pub const CURVE_SAMPLES: usize = 400;

/// Valid range for the coefficient `a`.
pub const COEFFICIENT_RANGE: RangeInclusive<f64> = -5.0..=5.0;
/// Slider step for the coefficient `a`.
pub const COEFFICIENT_STEP: f64 = 0.5;
/// Valid range for the basis `b`. The lower bound enforces b > 0.
pub const BASIS_RANGE: RangeInclusive<f64> = 0.1..=4.0;
/// Slider step for the basis `b`.
pub const BASIS_STEP: f64 = 0.1;
/// Valid range for the lower end of the x-range.
pub const X_MIN_RANGE: RangeInclusive<i32> = -5..=0;
/// Valid range for the upper end of the x-range.
pub const X_MAX_RANGE: RangeInclusive<i32> = 0..=5;

/// User-adjustable inputs for one render pass.
///
/// Immutable within a pass; rebuilt from the widgets whenever a slider
/// moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Scalar multiplier; its sign reflects the curve across the x-axis.
    pub a: f64,
    /// Exponential basis; growth above 1, decay below, flat at exactly 1.
    pub b: f64,
    /// Lower end of the sampled x-range.
    pub x_min: f64,
    /// Upper end of the sampled x-range.
    pub x_max: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 2.0,
            x_min: -2.0,
            x_max: 3.0,
        }
    }
}

impl Parameters {
    /// Snap every field into its declared slider range.
    ///
    /// Non-finite values (a hand-edited config file can contain them) fall
    /// back to the defaults before clamping.
    pub fn clamped(self) -> Self {
        let defaults = Self::default();
        Self {
            a: sanitize(self.a, defaults.a, COEFFICIENT_RANGE),
            b: sanitize(self.b, defaults.b, BASIS_RANGE),
            x_min: sanitize(self.x_min, defaults.x_min, range_as_f64(X_MIN_RANGE)),
            x_max: sanitize(self.x_max, defaults.x_max, range_as_f64(X_MAX_RANGE)),
        }
    }
}

fn sanitize(value: f64, default: f64, range: RangeInclusive<f64>) -> f64 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        default
    }
}

fn range_as_f64(range: RangeInclusive<i32>) -> RangeInclusive<f64> {
    f64::from(*range.start())..=f64::from(*range.end())
}

/// Evenly spaced sequence from `start` to `end` inclusive.
///
/// The first element equals `start` exactly and the last equals `end`
/// exactly; interior points are interpolated. A degenerate span
/// (`start == end`) yields `count` copies of the endpoint.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let span = end - start;
            let last = count - 1;
            (0..count)
                .map(|index| {
                    if index == last {
                        end
                    } else {
                        start + span * (index as f64 / last as f64)
                    }
                })
                .collect()
        }
    }
}

/// Elementwise a·b^x over the given sample positions.
///
/// Total for b > 0; callers clamp the basis at the boundary. Passing
/// b ≤ 0 is not meaningful for real exponents and yields NaN for
/// fractional x.
pub fn evaluate(xs: &[f64], a: f64, b: f64) -> Vec<f64> {
    xs.iter().map(|&x| a * b.powf(x)).collect()
}

/// One sampled curve: ordered (x, f(x)) pairs over the requested range.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSeries {
    /// Sample [`CURVE_SAMPLES`] points of a·b^x over `[x_min, x_max]`.
    pub fn sample(params: &Parameters) -> Self {
        let xs = linspace(params.x_min, params.x_max, CURVE_SAMPLES);
        let ys = evaluate(&xs, params.a, params.b);
        Self { xs, ys }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Sample positions, in ascending order.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Function values aligned with [`Self::xs`].
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Iterate over (x, f(x)) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
