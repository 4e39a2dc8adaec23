//! Filter + scale snapshot -> chart data for one entry.
//!
//! Every call runs the full parse -> aggregate -> domain sequence against a
//! single `ViewState`, so a renderer never sees points from one snapshot
//! paired with a domain from another.

use cx_chart::{AxisScale, DisplayPoint, Domain, ScaleConfig, aggregate, compute_domain};
use cx_dataset::{Dataset, Record};
use cx_expr::GroupExpression;
use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::query::quantities_for;

/// Everything the user controls, captured at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub filter_text: String,
    pub scale: ScaleConfig,
    /// 0-based entry index. Clamped when rendering.
    pub index: usize,
    /// Reject unbalanced parentheses instead of parsing them leniently.
    pub strict: bool,
}

/// Chart data ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    /// 1-based entry position.
    pub entry: usize,
    pub entry_count: usize,
    pub filter: String,
    pub points: Vec<DisplayPoint>,
    pub domain: Domain,
    pub axis: AxisScale,
}

fn parse_filter(state: &ViewState) -> AppResult<Vec<GroupExpression>> {
    if state.strict {
        Ok(cx_expr::parse_strict(&state.filter_text)?)
    } else {
        Ok(cx_expr::parse(&state.filter_text))
    }
}

/// Points and domain for one record.
pub fn chart_record(
    record: &Record,
    groups: &[GroupExpression],
    scale: &ScaleConfig,
) -> (Vec<DisplayPoint>, Domain) {
    let quantities = quantities_for(record);
    let points = aggregate(&quantities, groups);
    let domain = compute_domain(&points, &quantities.to_points(), scale);
    (points, domain)
}

/// Run the whole pipeline for the entry selected by `state`.
pub fn render_view(dataset: &Dataset, state: &ViewState) -> AppResult<ChartView> {
    if dataset.is_empty() {
        return Err(AppError::NoEntries);
    }
    let index = state.index.min(dataset.len() - 1);
    let record = dataset.get(index).ok_or(AppError::NoEntries)?;

    let groups = parse_filter(state)?;
    let (points, domain) = chart_record(record, &groups, &state.scale);
    debug!(
        entry = index + 1,
        points = points.len(),
        "rendered chart view"
    );

    Ok(ChartView {
        entry: index + 1,
        entry_count: dataset.len(),
        filter: state.filter_text.clone(),
        points,
        domain,
        axis: state.scale.axis,
    })
}
