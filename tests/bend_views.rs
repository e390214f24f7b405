use std::f64::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use tracebend::bend::{BendExplorer, BendPath, BendViews, ANGLE_SAMPLES};

#[test]
fn matched_arc_equals_inner_corner_length() {
    for length in 1..=100 {
        for width in 1..length {
            let views = BendViews::generate(length as f64, width as f64);
            let inner = views.matched.corners.inner.length();

            assert_relative_eq!(FRAC_PI_2 * views.matched.radius, inner, max_relative = 1e-12);
            assert_relative_eq!(views.matched.arc.length(), (length - width) as f64, max_relative = 1e-12);
        }
    }
}

#[test]
fn every_curve_has_the_same_resolution() {
    let views = BendViews::generate(73.0, 12.0);
    let arcs = views.combined.arcs;
    let corners = views.combined.corners;

    for path in [arcs.center, arcs.inner, arcs.outer] {
        let segments = path.segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].len(), ANGLE_SAMPLES);
    }
    for path in [corners.center, corners.inner, corners.outer] {
        assert!(path.segments().iter().all(|s| s.len() == ANGLE_SAMPLES));
    }
}

#[test]
fn slider_changes_replace_all_three_views() {
    let mut explorer = BendExplorer::default();
    let before = *explorer.views();

    explorer.set_trace_width(20.0);
    let after = *explorer.views();

    assert_ne!(before.combined, after.combined);
    assert_ne!(before.diagonal, after.diagonal);
    assert_ne!(before.matched, after.matched);
    assert_eq!(after.combined.corners.lengths(), [50.0, 30.0, 70.0]);
    assert_eq!(after.matched.quarter_label(), "Quarter Circ: 30.0 mils");
}

#[test]
fn grid_follows_trace_length() {
    let views = BendViews::generate(100.0, 1.0);

    assert_eq!(views.combined.frame.grid_step, 10.0);
    assert_eq!(views.diagonal.frame.grid_step, 10.0);
    let ticks = views.diagonal.frame.ticks();
    assert_eq!(ticks[1] - ticks[0], 10.0);
    assert!(ticks[ticks.len() - 1] < views.diagonal.frame.limit + 10.0);
}
