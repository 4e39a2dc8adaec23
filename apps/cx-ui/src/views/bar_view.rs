use cx_app::{ChartView, format_concentration};
use cx_chart::{AxisScale, Domain};
use egui_plot::{Bar, BarChart, Plot, PlotBounds};

const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(0x88, 0x84, 0xd8);

/// Bar chart of the aggregated points, pinned to the computed domain.
#[derive(Default)]
pub struct BarView;

/// Map a value onto the plot's y coordinate.
fn to_axis(value: f64, axis: AxisScale) -> f64 {
    match axis {
        AxisScale::Linear => value,
        AxisScale::Log => value.log10(),
    }
}

/// Plot-space y range for the domain. Never empty, never inverted.
fn y_range(view: &ChartView) -> (f64, f64) {
    let hi = to_axis(view.domain.max, view.axis);
    let lo = match view.axis {
        AxisScale::Log if view.domain.min <= 0.0 => hi - 3.0,
        _ => to_axis(view.domain.min, view.axis),
    };
    let (lo, hi) = (lo.min(hi), lo.max(hi));
    if Domain::new(lo, hi).is_degenerate() {
        (lo, lo + 1.0)
    } else {
        (lo, hi)
    }
}

fn label_at(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}

impl BarView {
    pub fn show(&mut self, ui: &mut egui::Ui, view: &ChartView) {
        if view.points.is_empty() {
            ui.weak("No quantities match the filter");
        }

        let axis = view.axis;
        let (y_lo, y_hi) = y_range(view);
        let base = match axis {
            AxisScale::Linear => 0.0,
            AxisScale::Log => y_lo,
        };

        let bars: Vec<Bar> = view
            .points
            .iter()
            .enumerate()
            .filter(|(_, p)| axis == AxisScale::Linear || p.value > 0.0)
            .map(|(i, p)| {
                Bar::new(i as f64, to_axis(p.value, axis) - base)
                    .base_offset(base)
                    .name(format!("{} = {}", p.label, format_concentration(p.value)))
                    .width(0.6)
            })
            .collect();

        let labels: Vec<String> = view.points.iter().map(|p| p.label.clone()).collect();
        let x_max = labels.len().max(1) as f64 - 0.5;

        Plot::new("concentration_bars")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_formatter(move |mark, _range| label_at(&labels, mark.value))
            .y_axis_formatter(move |mark, _range| {
                let value = match axis {
                    AxisScale::Linear => mark.value,
                    AxisScale::Log => 10f64.powf(mark.value),
                };
                format!("{:.1e}", value)
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([-0.5, y_lo], [x_max, y_hi]));
                plot_ui.bar_chart(BarChart::new(bars).color(BAR_COLOR));
            });
    }
}
