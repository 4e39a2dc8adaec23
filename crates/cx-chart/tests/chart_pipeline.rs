//! Filter -> points -> domain, end to end on plain quantity maps.

use cx_chart::*;
use cx_core::{Tolerances, nearly_equal};
use cx_expr::parse;
use proptest::prelude::*;

fn sample_quantities() -> QuantityMap {
    [
        ("(analyte)", 1.0e-6),
        ("(r0)", 2.5e-7),
        ("(r1)", 7.5e-7),
        ("(r2_p0)", 0.0),
        ("(analyte+r0)", 3.0e-8),
    ]
    .into_iter()
    .collect()
}

#[test]
fn dashboard_filter_end_to_end() {
    let quantities = sample_quantities();
    let groups = parse("(analyte);(r0)+(r1);(r2_p0);(missing)");
    let points = aggregate(&quantities, &groups);

    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["(analyte)", "(r0)+(r1)", "(r2_p0)"]);
    assert!(nearly_equal(points[1].value, 1.0e-6, Tolerances::default()));
    assert_eq!(points[2].value, 0.0);

    let domain = compute_domain(&points, &quantities.to_points(), &ScaleConfig::fit());
    assert_eq!(domain.min, 0.0);
    assert!(nearly_equal(domain.max, 1.1e-6, Tolerances::default()));
}

#[test]
fn parenthesised_name_with_plus_resolves_as_one_term() {
    let quantities = sample_quantities();
    let points = aggregate(&quantities, &parse("(analyte+r0)"));
    assert_eq!(points, vec![DisplayPoint::new("(analyte+r0)", 3.0e-8)]);
}

#[test]
fn filter_matching_nothing_falls_back_to_all_values() {
    let quantities = sample_quantities();
    let points = aggregate(&quantities, &parse("(nope);(also_nope)"));
    assert!(points.is_empty());

    let domain = compute_domain(&points, &quantities.to_points(), &ScaleConfig::fit());
    assert_eq!(domain.min, 0.0);
    assert!(nearly_equal(domain.max, 1.1e-6, Tolerances::default()));
}

#[test]
fn overflowing_sum_stays_finite_through_the_domain() {
    let quantities: QuantityMap = [("a", 1e308), ("b", 1e308), ("c", 5.0)]
        .into_iter()
        .collect();
    let points = aggregate(&quantities, &parse("a+b"));
    assert_eq!(points.len(), 1);
    assert!(points.iter().all(|p| p.value.is_finite()));

    let domain = compute_domain(&points, &quantities.to_points(), &ScaleConfig::fit());
    assert!(domain.is_finite());
    assert_eq!(domain.max, f64::MAX);
    assert_eq!(domain.min, f64::MAX);
}

#[test]
fn non_finite_display_uses_fallback_values() {
    let display = vec![DisplayPoint::new("bad", f64::INFINITY)];
    let fallback = vec![DisplayPoint::new("x", 2.0), DisplayPoint::new("y", 4.0)];
    let domain = compute_domain(&display, &fallback, &ScaleConfig::fit());
    assert_eq!(domain.min, 2.0);
    assert!(nearly_equal(domain.max, 4.4, Tolerances::default()));
}

#[test]
fn aggregate_is_repeatable() {
    let quantities = sample_quantities();
    let groups = parse("(r1);(r0)+(r1)+(zzz);(analyte)");
    assert_eq!(
        aggregate(&quantities, &groups),
        aggregate(&quantities, &groups)
    );
}

proptest! {
    #[test]
    fn domain_is_always_finite(
        display in prop::collection::vec(-1.0e300_f64..1.0e300, 0..8),
        fallback in prop::collection::vec(-1.0e300_f64..1.0e300, 0..8),
        fixed in any::<bool>(),
        log in any::<bool>(),
        min_text in "[0-9a-z.\\-]{0,6}",
        max_text in "[0-9a-z.\\-]{0,6}",
    ) {
        let to_points = |values: &[f64]| -> Vec<DisplayPoint> {
            values.iter().map(|v| DisplayPoint::new("q", *v)).collect()
        };
        let mut scale = if fixed {
            ScaleConfig::fixed(min_text, max_text)
        } else {
            ScaleConfig::fit()
        };
        if log {
            scale = scale.with_axis(AxisScale::Log);
        }
        let domain = compute_domain(&to_points(&display), &to_points(&fallback), &scale);
        prop_assert!(domain.is_finite());
    }

    #[test]
    fn fit_domain_brackets_the_minimum(values in prop::collection::vec(0.0_f64..1.0e6, 1..16)) {
        let points: Vec<DisplayPoint> = values.iter().map(|v| DisplayPoint::new("q", *v)).collect();
        let domain = compute_domain(&points, &[], &ScaleConfig::fit());
        let lo = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        prop_assert_eq!(domain.min, lo);
        prop_assert!(domain.max >= hi);
    }

    #[test]
    fn sums_equal_sum_of_resolved_terms(
        values in prop::collection::vec(0.0_f64..100.0, 1..6),
        extra_missing in 0usize..3,
    ) {
        let quantities: QuantityMap = values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("(q{i})"), *v))
            .collect();
        let mut terms: Vec<String> = quantities.names().map(str::to_string).collect();
        for i in 0..extra_missing {
            terms.push(format!("(missing{i})"));
        }
        let filter = terms.join("+");
        let points = aggregate(&quantities, &parse(&filter));

        if terms.len() > 1 {
            let expected: f64 = values.iter().sum();
            prop_assert_eq!(points.len(), 1);
            prop_assert!(nearly_equal(points[0].value, expected, Tolerances::default()));
        } else {
            prop_assert_eq!(points, vec![DisplayPoint::new(terms[0].clone(), values[0])]);
        }
    }
}
