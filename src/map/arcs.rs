//! Connection arc engine: nearest-neighbour selection and the animated
//! quadratic curves drawn between a hovered hotspot and its neighbours.

use std::cmp::Ordering;

use crate::map::percent_to_viewport;

/// At most this many neighbours get an arc.
pub const MAX_CONNECTIONS: usize = 4;
/// Stagger between consecutive arc draw-ins.
pub const ARC_REVEAL_STEP_MS: f64 = 80.0;
/// Stagger between consecutive arcs' particle cycles.
pub const PARTICLE_ARC_STEP_MS: f64 = 200.0;
/// Trail particle lags the lead by this much.
pub const PARTICLE_TRAIL_OFFSET_MS: f64 = 100.0;
/// One full particle trip along an arc.
pub const PARTICLE_CYCLE_MS: f64 = 1200.0;
/// Used when a path length cannot be measured.
pub const FALLBACK_PATH_LENGTH: f64 = 200.0;

const LENGTH_SAMPLES: usize = 32;

/// Quadratic Bézier in viewport units.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct QuadCurve {
    pub from: (f64, f64),
    pub ctrl: (f64, f64),
    pub to: (f64, f64),
}

impl QuadCurve {
    pub fn point_at(&self, t: f64) -> (f64, f64) {
        let u = 1.0 - t;
        (
            u * u * self.from.0 + 2.0 * u * t * self.ctrl.0 + t * t * self.to.0,
            u * u * self.from.1 + 2.0 * u * t * self.ctrl.1 + t * t * self.to.1,
        )
    }

    /// Arc length by flattening. Falls back to [`FALLBACK_PATH_LENGTH`]
    /// when the curve is degenerate (non-finite endpoints).
    pub fn length(&self) -> f64 {
        let mut total = 0.0;
        let mut prev = self.point_at(0.0);
        for i in 1..=LENGTH_SAMPLES {
            let next = self.point_at(i as f64 / LENGTH_SAMPLES as f64);
            total += (next.0 - prev.0).hypot(next.1 - prev.1);
            prev = next;
        }
        if total.is_finite() {
            total
        } else {
            FALLBACK_PATH_LENGTH
        }
    }

    pub fn to_path_data(&self) -> String {
        format!(
            "M{},{} Q{},{} {},{}",
            self.from.0, self.from.1, self.ctrl.0, self.ctrl.1, self.to.0, self.to.1
        )
    }
}

/// Arcs alternate between two gradient strokes by index parity.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArcStyle {
    Primary,
    Alternate,
}

impl ArcStyle {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            ArcStyle::Primary
        } else {
            ArcStyle::Alternate
        }
    }

    pub fn gradient_id(self) -> &'static str {
        match self {
            ArcStyle::Primary => "arcGrad",
            ArcStyle::Alternate => "arcGradAlt",
        }
    }
}

/// One live connector between the hovered hotspot and a neighbour.
/// Exists only while the origin hotspot stays hovered.
#[derive(Clone, PartialEq, Debug)]
pub struct ConnectionArc {
    /// Index of the target hotspot.
    pub target: usize,
    pub curve: QuadCurve,
    pub length: f64,
    pub style: ArcStyle,
    pub revealed: bool,
    pub reveal_at_ms: f64,
    pub particles_begin_ms: f64,
}

/// A data particle travelling along an arc, computed for the current
/// animation clock.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ParticleDot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub lead: bool,
}

/// Indices of the up-to-`limit` nearest hotspots to `from`, by Euclidean
/// distance in percentage space, ascending. The origin is excluded by
/// exact coordinate match; ties keep original array order.
pub fn nearest_hotspots(positions: &[(f64, f64)], from: (f64, f64), limit: usize) -> Vec<usize> {
    let mut candidates: Vec<(usize, f64)> = positions
        .iter()
        .enumerate()
        .filter(|(_, p)| p.0 != from.0 || p.1 != from.1)
        .map(|(i, p)| (i, (p.0 - from.0).hypot(p.1 - from.1)))
        .collect();
    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    candidates.truncate(limit);
    candidates.into_iter().map(|(i, _)| i).collect()
}

/// Builds the `index`-th arc of a connection set drawn at `now_ms`.
/// Endpoints are percentage coordinates; the curve always bows upward,
/// clearing the higher endpoint by `min(80, distance * 0.2) + 20` units.
pub fn connection_arc(
    from_pct: (f64, f64),
    to_pct: (f64, f64),
    target: usize,
    index: usize,
    now_ms: f64,
) -> ConnectionArc {
    let (x1, y1) = percent_to_viewport(from_pct.0, from_pct.1);
    let (x2, y2) = percent_to_viewport(to_pct.0, to_pct.1);
    let distance = (x2 - x1).hypot(y2 - y1);
    let curve_height = (distance * 0.2).min(80.0);
    let curve = QuadCurve {
        from: (x1, y1),
        ctrl: ((x1 + x2) / 2.0, y1.min(y2) - curve_height - 20.0),
        to: (x2, y2),
    };
    let length = curve.length();
    ConnectionArc {
        target,
        curve,
        length,
        style: ArcStyle::for_index(index),
        revealed: false,
        reveal_at_ms: now_ms + index as f64 * ARC_REVEAL_STEP_MS,
        particles_begin_ms: now_ms + index as f64 * PARTICLE_ARC_STEP_MS,
    }
}

/// Lead and trail particles for an arc at the given clock, if their
/// cycles have begun. Cycles repeat indefinitely.
pub fn particles_for_arc(arc: &ConnectionArc, clock_ms: f64) -> Vec<ParticleDot> {
    let mut dots = Vec::with_capacity(2);
    if let Some(t) = cycle_phase(clock_ms, arc.particles_begin_ms) {
        let (x, y) = arc.curve.point_at(t);
        dots.push(ParticleDot {
            x,
            y,
            radius: 4.0,
            lead: true,
        });
    }
    if let Some(t) = cycle_phase(clock_ms, arc.particles_begin_ms + PARTICLE_TRAIL_OFFSET_MS) {
        let (x, y) = arc.curve.point_at(t);
        dots.push(ParticleDot {
            x,
            y,
            radius: 2.0,
            lead: false,
        });
    }
    dots
}

fn cycle_phase(clock_ms: f64, begin_ms: f64) -> Option<f64> {
    if clock_ms < begin_ms {
        return None;
    }
    Some(((clock_ms - begin_ms) % PARTICLE_CYCLE_MS) / PARTICLE_CYCLE_MS)
}

/// Decorative always-on connectors between fixed points, independent of
/// hotspot interaction.
pub const AMBIENT_ARC_PATHS: [&str; 6] = [
    "M508,200 Q600,80 750,180",
    "M508,200 Q400,100 250,150",
    "M508,200 Q550,320 700,350",
    "M508,200 Q450,280 300,320",
    "M250,150 Q400,200 508,200",
    "M750,180 Q650,250 508,200",
];

/// Stagger between consecutive ambient arc animations.
pub const AMBIENT_ARC_DELAY_STEP_S: f64 = 0.8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_selects_four_closest_in_order() {
        let positions = [
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (10.0, 10.0),
            (50.0, 50.0),
            (3.0, 0.0),
        ];
        let picked = nearest_hotspots(&positions, (0.0, 0.0), MAX_CONNECTIONS);
        assert_eq!(picked, vec![1, 2, 5, 3]);
    }

    #[test]
    fn nearest_excludes_exact_origin_only() {
        // Two hotspots share the origin's x but not y; both stay eligible.
        let positions = [(5.0, 5.0), (5.0, 6.0), (5.0, 4.0)];
        let picked = nearest_hotspots(&positions, (5.0, 5.0), MAX_CONNECTIONS);
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn nearest_breaks_ties_by_array_order() {
        let positions = [(0.0, 0.0), (0.0, 3.0), (3.0, 0.0), (0.0, -3.0)];
        let picked = nearest_hotspots(&positions, (0.0, 0.0), 2);
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn nearest_returns_fewer_when_fewer_exist() {
        let positions = [(0.0, 0.0), (1.0, 1.0)];
        let picked = nearest_hotspots(&positions, (0.0, 0.0), MAX_CONNECTIONS);
        assert_eq!(picked, vec![1]);
    }

    #[test]
    fn arc_control_point_sits_above_higher_endpoint() {
        let arc = connection_arc((10.0, 50.0), (30.0, 20.0), 1, 0, 0.0);
        let higher_y = arc.curve.from.1.min(arc.curve.to.1);
        assert!(arc.curve.ctrl.1 < higher_y);
        // Horizontal midpoint.
        let mid_x = (arc.curve.from.0 + arc.curve.to.0) / 2.0;
        assert!((arc.curve.ctrl.0 - mid_x).abs() < 1e-9);
    }

    #[test]
    fn arc_curve_height_is_capped() {
        // Endpoints far apart: the bow clears the higher endpoint by
        // exactly 80 + 20 units.
        let arc = connection_arc((0.0, 50.0), (100.0, 50.0), 1, 0, 0.0);
        let higher_y = arc.curve.from.1.min(arc.curve.to.1);
        assert!((higher_y - arc.curve.ctrl.1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn arc_styles_alternate_by_parity() {
        assert_eq!(ArcStyle::for_index(0), ArcStyle::Primary);
        assert_eq!(ArcStyle::for_index(1), ArcStyle::Alternate);
        assert_eq!(ArcStyle::for_index(2), ArcStyle::Primary);
        assert_eq!(ArcStyle::for_index(0).gradient_id(), "arcGrad");
        assert_eq!(ArcStyle::for_index(3).gradient_id(), "arcGradAlt");
    }

    #[test]
    fn reveal_and_particle_staggers_scale_with_index() {
        let a0 = connection_arc((0.0, 0.0), (10.0, 10.0), 1, 0, 1000.0);
        let a3 = connection_arc((0.0, 0.0), (10.0, 10.0), 2, 3, 1000.0);
        assert_eq!(a0.reveal_at_ms, 1000.0);
        assert_eq!(a3.reveal_at_ms, 1000.0 + 3.0 * ARC_REVEAL_STEP_MS);
        assert_eq!(a3.particles_begin_ms, 1000.0 + 3.0 * PARTICLE_ARC_STEP_MS);
    }

    #[test]
    fn curve_length_is_at_least_chord() {
        let curve = QuadCurve {
            from: (0.0, 0.0),
            ctrl: (50.0, -80.0),
            to: (100.0, 0.0),
        };
        assert!(curve.length() >= 100.0);
    }

    #[test]
    fn degenerate_curve_falls_back_to_nominal_length() {
        let curve = QuadCurve {
            from: (f64::NAN, 0.0),
            ctrl: (0.0, 0.0),
            to: (1.0, 1.0),
        };
        assert_eq!(curve.length(), FALLBACK_PATH_LENGTH);
    }

    #[test]
    fn particles_wait_for_their_begin_offset() {
        let arc = connection_arc((0.0, 0.0), (10.0, 10.0), 1, 1, 0.0);
        // Before the arc's particle cycle begins: nothing.
        assert!(particles_for_arc(&arc, 100.0).is_empty());
        // Lead running, trail still pending.
        let dots = particles_for_arc(&arc, PARTICLE_ARC_STEP_MS + 50.0);
        assert_eq!(dots.len(), 1);
        assert!(dots[0].lead);
        // Both running.
        let dots = particles_for_arc(&arc, PARTICLE_ARC_STEP_MS + 150.0);
        assert_eq!(dots.len(), 2);
        assert!(dots[0].radius > dots[1].radius);
    }

    #[test]
    fn particle_cycle_repeats() {
        let arc = connection_arc((0.0, 0.0), (20.0, 0.0), 1, 0, 0.0);
        let first = particles_for_arc(&arc, 300.0);
        let wrapped = particles_for_arc(&arc, 300.0 + PARTICLE_CYCLE_MS);
        assert_eq!(first[0].x, wrapped[0].x);
        assert_eq!(first[0].y, wrapped[0].y);
    }
}
