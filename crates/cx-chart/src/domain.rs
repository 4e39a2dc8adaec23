//! Value-axis range for the chart.

use cx_core::{Real, Tolerances, nearly_equal, parse_real};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregate::DisplayPoint;

/// Headroom applied to the data maximum unless a manual maximum is in effect.
pub const HEADROOM: Real = 1.1;

/// Inclusive `[min, max]` range of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min: Real,
    pub max: Real,
}

impl Domain {
    /// Raw range assumed when there is no data at all.
    pub const DEFAULT: Domain = Domain { min: 0.0, max: 1.0 };

    /// Range used on a log axis when nothing positive is left to show.
    pub const LOG_DEFAULT: Domain = Domain {
        min: 1e-3,
        max: 1.0,
    };

    pub fn new(min: Real, max: Real) -> Self {
        Self { min, max }
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Zero-width (or numerically zero-width) range.
    pub fn is_degenerate(&self) -> bool {
        nearly_equal(self.min, self.max, Tolerances::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Follow the data.
    #[default]
    Fit,
    /// Use the manual bounds where they parse, the data otherwise.
    Fixed,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 2] = [ScaleMode::Fit, ScaleMode::Fixed];

    pub fn label(&self) -> &'static str {
        match self {
            ScaleMode::Fit => "Fit",
            ScaleMode::Fixed => "Fixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl AxisScale {
    pub const ALL: [AxisScale; 2] = [AxisScale::Linear, AxisScale::Log];

    pub fn label(&self) -> &'static str {
        match self {
            AxisScale::Linear => "Linear",
            AxisScale::Log => "Log",
        }
    }
}

/// Scale settings as the user typed them.
///
/// Manual bounds stay raw text so half-typed input never blocks a redraw.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    pub mode: ScaleMode,
    pub manual_min: String,
    pub manual_max: String,
    pub axis: AxisScale,
}

impl ScaleConfig {
    pub fn fit() -> Self {
        Self::default()
    }

    pub fn fixed(manual_min: impl Into<String>, manual_max: impl Into<String>) -> Self {
        Self {
            mode: ScaleMode::Fixed,
            manual_min: manual_min.into(),
            manual_max: manual_max.into(),
            axis: AxisScale::Linear,
        }
    }

    pub fn with_axis(mut self, axis: AxisScale) -> Self {
        self.axis = axis;
        self
    }

    /// Manual minimum in effect, if any.
    pub fn manual_min_value(&self) -> Option<Real> {
        self.manual_bound(&self.manual_min, "manual_min")
    }

    /// Manual maximum in effect, if any.
    pub fn manual_max_value(&self) -> Option<Real> {
        self.manual_bound(&self.manual_max, "manual_max")
    }

    fn manual_bound(&self, text: &str, what: &'static str) -> Option<Real> {
        match self.mode {
            ScaleMode::Fit => None,
            ScaleMode::Fixed => parse_real(text, what).ok(),
        }
    }
}

fn finite_values(points: &[DisplayPoint]) -> impl Iterator<Item = Real> + '_ {
    points.iter().map(|p| p.value).filter(|v| v.is_finite())
}

fn value_range(points: &[DisplayPoint]) -> Option<(Real, Real)> {
    let skipped = points.iter().filter(|p| !p.value.is_finite()).count();
    if skipped > 0 {
        warn!(skipped, "ignoring non-finite values for the chart domain");
    }
    finite_values(points).fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Compute the value-axis range.
///
/// Uses `display` when it has any finite value, else `fallback` (the
/// unfiltered quantities), else `Domain::DEFAULT` as the raw range. The maximum gets
/// `HEADROOM` unless a manual one applies; the result is always finite.
pub fn compute_domain(
    display: &[DisplayPoint],
    fallback: &[DisplayPoint],
    scale: &ScaleConfig,
) -> Domain {
    let source = if finite_values(display).next().is_some() {
        display
    } else {
        fallback
    };
    let (raw_min, raw_max) =
        value_range(source).unwrap_or((Domain::DEFAULT.min, Domain::DEFAULT.max));

    let padded_max = raw_max * HEADROOM;
    let auto_max = if padded_max.is_finite() {
        padded_max
    } else {
        raw_max
    };

    let manual_min = scale.manual_min_value();
    let mut domain = Domain {
        min: manual_min.unwrap_or(raw_min),
        max: scale.manual_max_value().unwrap_or(auto_max),
    };

    if scale.axis == AxisScale::Log {
        domain = fit_log_axis(domain, manual_min.is_some(), source);
    }

    debug!(
        min = domain.min,
        max = domain.max,
        mode = scale.mode.label(),
        "computed chart domain"
    );
    domain
}

fn fit_log_axis(domain: Domain, manual_min: bool, source: &[DisplayPoint]) -> Domain {
    if domain.max <= 0.0 {
        return Domain::LOG_DEFAULT;
    }
    if manual_min || domain.min > 0.0 {
        return domain;
    }
    let smallest_positive = finite_values(source).filter(|v| *v > 0.0).reduce(Real::min);
    Domain {
        min: smallest_positive.unwrap_or(domain.max / 10.0),
        max: domain.max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[Real]) -> Vec<DisplayPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DisplayPoint::new(format!("p{i}"), *v))
            .collect()
    }

    fn close(a: Real, b: Real) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn fit_adds_headroom() {
        let d = compute_domain(&points(&[1.0, 2.0, 4.0]), &[], &ScaleConfig::fit());
        assert_eq!(d.min, 1.0);
        assert!(close(d.max, 4.4));
    }

    #[test]
    fn fixed_min_with_empty_max() {
        let d = compute_domain(
            &points(&[1.0, 2.0, 4.0]),
            &[],
            &ScaleConfig::fixed("0.5", ""),
        );
        assert_eq!(d.min, 0.5);
        assert!(close(d.max, 4.4));
    }

    #[test]
    fn fixed_non_numeric_falls_back() {
        let d = compute_domain(
            &points(&[1.0, 2.0, 4.0]),
            &[],
            &ScaleConfig::fixed("abc", "xyz"),
        );
        assert_eq!(d.min, 1.0);
        assert!(close(d.max, 4.4));
    }

    #[test]
    fn fixed_zero_is_a_real_bound() {
        let d = compute_domain(&points(&[1.0, 4.0]), &[], &ScaleConfig::fixed("0", "10"));
        assert_eq!(d, Domain::new(0.0, 10.0));
    }

    #[test]
    fn fit_ignores_manual_text() {
        let mut scale = ScaleConfig::fixed("0.5", "9");
        scale.mode = ScaleMode::Fit;
        let d = compute_domain(&points(&[1.0, 4.0]), &[], &scale);
        assert_eq!(d.min, 1.0);
        assert!(close(d.max, 4.4));
    }

    #[test]
    fn empty_display_uses_fallback() {
        let d = compute_domain(&[], &points(&[3.0, 10.0]), &ScaleConfig::fit());
        assert_eq!(d.min, 3.0);
        assert!(close(d.max, 11.0));
    }

    #[test]
    fn nothing_at_all_gives_default() {
        let d = compute_domain(&[], &[], &ScaleConfig::fit());
        assert_eq!(d.min, 0.0);
        assert!(close(d.max, 1.1));
        assert!(d.is_finite());
    }

    #[test]
    fn negative_max_is_tightened_not_corrected() {
        let d = compute_domain(&points(&[-4.0, -2.0]), &[], &ScaleConfig::fit());
        assert_eq!(d.min, -4.0);
        assert!(close(d.max, -2.2));
    }

    #[test]
    fn single_zero_value_is_degenerate() {
        let d = compute_domain(&points(&[0.0]), &[], &ScaleConfig::fit());
        assert!(d.is_degenerate());
    }

    #[test]
    fn non_finite_values_never_reach_the_domain() {
        let d = compute_domain(
            &points(&[Real::NAN, 2.0, Real::INFINITY]),
            &[],
            &ScaleConfig::fit(),
        );
        assert_eq!(d.min, 2.0);
        assert!(close(d.max, 2.2));

        let huge = compute_domain(&points(&[Real::MAX]), &[], &ScaleConfig::fit());
        assert!(huge.is_finite());
    }

    #[test]
    fn log_axis_lifts_non_positive_min() {
        let scale = ScaleConfig::fit().with_axis(AxisScale::Log);
        let d = compute_domain(&points(&[0.0, 1e-6, 1e-3]), &[], &scale);
        assert_eq!(d.min, 1e-6);
        assert!(close(d.max, 1.1e-3));
    }

    #[test]
    fn log_axis_keeps_manual_min() {
        let scale = ScaleConfig::fixed("0", "").with_axis(AxisScale::Log);
        let d = compute_domain(&points(&[1e-6, 1e-3]), &[], &scale);
        assert_eq!(d.min, 0.0);
    }

    #[test]
    fn log_axis_without_positive_data() {
        let scale = ScaleConfig::fit().with_axis(AxisScale::Log);
        assert_eq!(
            compute_domain(&points(&[-1.0, 0.0]), &[], &scale),
            Domain::LOG_DEFAULT
        );
        let scale = ScaleConfig::fixed("", "5").with_axis(AxisScale::Log);
        let d = compute_domain(&points(&[0.0]), &[], &scale);
        assert_eq!(d, Domain::new(0.5, 5.0));
    }
}
