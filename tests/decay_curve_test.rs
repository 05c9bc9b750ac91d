use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;

use decayscore::anchor::Anchor;
use decayscore::decayerror::DecayError;
use decayscore::math::curve::curve::DecayCurve;
use decayscore::math::curve::exponentialdecaycurve::ExponentialDecayCurve;
use decayscore::math::curve::logisticdecaycurve::LogisticDecayCurve;
use decayscore::math::curve::piecewiselineardecaycurve::PiecewiseLinearDecayCurve;
use decayscore::model::decaymodel::DecayModel;

fn assert_between(value: f64, lower: f64, upper: f64) {
    assert!(value > lower && value < upper, "value {} not between {} and {}", value, lower, upper);
}

fn logistic_curve() -> LogisticDecayCurve {
    LogisticDecayCurve::new(&[
        Anchor::at_time(365.0, 0.9),
        Anchor::at_time(730.0, 0.7),
        Anchor::at_time(1825.0, 0.25),
    ]).unwrap()
}

fn piecewise_anchors() -> Vec<Anchor> {
    vec![
        Anchor::point(90.0, 0.99),
        Anchor::point(180.0, 0.5),
        Anchor::point(270.0, 0.5),
        Anchor::point(365.0, 0.75),
        Anchor::point(366.0, 0.1),
    ]
}

// ── Exponential ──────────────────────────────────────────────────────────

#[test]
fn exponential_with_floor() {
    let curve = ExponentialDecayCurve::with_min_constraint(2.0, 0.5, 0.2).unwrap();
    assert_eq!(curve.evaluate(0.0), 1.0);
    assert_between(curve.evaluate(1.0), 0.70, 0.71);
    assert_eq!(curve.evaluate(10.0), 0.2);
}

// ── Logistic ─────────────────────────────────────────────────────────────

#[test]
fn logistic_reference_points() {
    let curve = logistic_curve();
    assert!(curve.evaluate(0.0) > 0.9999);
    assert_between(curve.evaluate(180.0), 0.9, 0.9999);
    assert_between(curve.evaluate(365.0), 0.89, 0.91);
    assert_between(curve.evaluate(500.0), 0.7, 0.9);
    assert_between(curve.evaluate(730.0), 0.69, 0.71);
    assert_between(curve.evaluate(1000.0), 0.25, 0.7);
    assert_between(curve.evaluate(1825.0), 0.24, 0.26);
    assert_between(curve.evaluate(2000.0), 0.0, 0.25);
}

#[test]
fn logistic_is_decreasing_for_decreasing_scores() {
    let curve = logistic_curve();
    let mut prev = curve.evaluate(0.0);
    for day in (30..=9999).step_by(30) {
        let value = curve.evaluate(day as f64);
        assert!(value <= prev, "increase at day {}: {} > {}", day, value, prev);
        prev = value;
    }
}

#[test]
fn logistic_rejects_out_of_order_anchors() {
    let result = LogisticDecayCurve::new(&[
        Anchor::at_time(730.0, 0.7),
        Anchor::at_time(365.0, 0.9),
    ]);
    assert!(matches!(result, Err(DecayError::InvalidArgument(_))));
}

#[test]
fn logistic_rejects_empty_anchor_list() {
    assert!(matches!(LogisticDecayCurve::new(&[]), Err(DecayError::InvalidArgument(_))));
}

// ── Piecewise linear ─────────────────────────────────────────────────────

#[test]
fn piecewise_reference_points() {
    let curve = PiecewiseLinearDecayCurve::new(&piecewise_anchors()).unwrap();
    assert!(curve.evaluate(0.0) > 0.9999);
    assert_between(curve.evaluate(45.0), 0.99, 1.0);
    assert_between(curve.evaluate(90.0), 0.98, 0.999);
    assert_between(curve.evaluate(100.0), 0.5, 0.99);
    assert_between(curve.evaluate(180.0), 0.49, 0.51);
    assert_between(curve.evaluate(300.0), 0.5, 0.75);
    assert_between(curve.evaluate(365.0), 0.749, 0.751);
    assert_between(curve.evaluate(400.0), 0.09, 0.11);
}

#[test]
fn piecewise_holds_last_anchor_beyond_range() {
    let curve = PiecewiseLinearDecayCurve::new(&piecewise_anchors()).unwrap();
    assert_eq!(curve.evaluate(400.0), 0.1);
    assert_eq!(curve.evaluate(1e7), 0.1);
}

#[test]
fn piecewise_passes_through_every_anchor() {
    let anchors = piecewise_anchors();
    let curve = PiecewiseLinearDecayCurve::new(&anchors).unwrap();
    for anchor in &anchors {
        assert_eq!(curve.evaluate(anchor.x()), anchor.y(), "missed anchor ({}, {})", anchor.x(), anchor.y());
    }
}

#[test]
fn piecewise_duplicate_x_is_degenerate() {
    let result = PiecewiseLinearDecayCurve::new(&[
        Anchor::point(90.0, 0.99),
        Anchor::point(180.0, 0.5),
        Anchor::point(180.0, 0.4),
    ]);
    assert_eq!(result, Err(DecayError::NumericDegenerate(180.0)));
}

// ── Shared behaviour ─────────────────────────────────────────────────────

#[test]
fn repeated_evaluation_is_bit_identical() {
    let models = vec![
        DecayModel::default(),
        DecayModel::from(ExponentialDecayCurve::new(30.0, 0.6).unwrap()),
        DecayModel::from(logistic_curve()),
        DecayModel::from(PiecewiseLinearDecayCurve::new(&piecewise_anchors()).unwrap()),
    ];
    for model in &models {
        for t in [0.0, 1.5, 42.0, 365.0, 5000.0] {
            assert_eq!(model.evaluate(t).to_bits(), model.evaluate(t).to_bits(), "{} at {}", model.kind(), t);
        }
    }
}

#[test]
fn evaluates_elapsed_days_between_dates() {
    let curve = PiecewiseLinearDecayCurve::new(&piecewise_anchors()).unwrap();
    let event = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 29).unwrap();
    assert_eq!(curve.evaluate_between(event, as_of), curve.evaluate(180.0));
}

#[test]
fn curves_are_shareable_across_threads() {
    let model = Arc::new(DecayModel::booking_piecewise_linear().unwrap());
    let expected = model.evaluate(3.0);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = Arc::clone(&model);
            thread::spawn(move || model.evaluate(3.0))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
