//! Group expressions -> display points.

use cx_core::Real;
use cx_expr::GroupExpression;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::quantity::QuantityMap;

/// One bar of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPoint {
    pub label: String,
    pub value: Real,
}

impl DisplayPoint {
    pub fn new(label: impl Into<String>, value: Real) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Evaluate every group against `quantities`, in group order.
///
/// With no groups the whole map passes through unfiltered.
pub fn aggregate(quantities: &QuantityMap, groups: &[GroupExpression]) -> Vec<DisplayPoint> {
    if groups.is_empty() {
        return quantities.to_points();
    }

    let points: Vec<DisplayPoint> = groups
        .iter()
        .filter_map(|group| evaluate_group(quantities, group))
        .collect();
    debug!(
        groups = groups.len(),
        points = points.len(),
        "aggregated filter groups"
    );
    points
}

/// Evaluate a single group.
///
/// Sums always produce a point labelled with the token text, counting
/// unknown terms as zero. A single term produces a point, labelled with the
/// quantity's own name, only if the quantity exists.
pub fn evaluate_group(quantities: &QuantityMap, group: &GroupExpression) -> Option<DisplayPoint> {
    match group.single_term() {
        Some(term) => {
            let found = quantities.entry(term);
            if found.is_none() {
                debug!(term, "dropping unresolved single term");
            }
            found.map(|(name, value)| DisplayPoint::new(name, value))
        }
        None => Some(DisplayPoint::new(
            group.label.clone(),
            sum_terms(quantities, &group.terms),
        )),
    }
}

/// Sum of the resolved terms, saturated to `±Real::MAX` on overflow.
fn sum_terms(quantities: &QuantityMap, terms: &[String]) -> Real {
    let total: Real = terms
        .iter()
        .map(|term| match quantities.resolve(term) {
            Some(value) => value,
            None => {
                debug!(term = term.as_str(), "unresolved term counts as zero");
                0.0
            }
        })
        .sum();
    if total.is_finite() {
        total
    } else if total.is_nan() {
        warn!("sum of filter terms is NaN, showing zero");
        0.0
    } else {
        warn!(total, "sum of filter terms overflowed, saturating");
        total.clamp(-Real::MAX, Real::MAX)
    }
}
