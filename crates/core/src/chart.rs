//! Radar geometry for a [`PowerDistribution`].
//!
//! Offsets use screen orientation: `dx` grows to the right, `dy` grows
//! downward, so an angle of `-PI/2` points straight up. Renderers with an
//! upward y axis (ratatui canvas) flip `dy`.

use crate::content::PowerDistribution;
use crate::domain::Axis;
use std::f64::consts::{FRAC_PI_2, TAU};

pub const DOMAIN_MAX: f64 = 100.0;

/// Fractions of the outer radius at which the polar grid is drawn.
pub const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Spoke length is `value / max`.
    DomainMax(f64),
    /// Spoke length is `value / largest axis value`.
    RelativeToLargest,
}

impl Default for Normalization {
    fn default() -> Self {
        Self::DomainMax(DOMAIN_MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub axis: Axis,
    pub label: &'static str,
    pub value: f64,
    pub ratio: f64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub normalization: Normalization,
}

impl ChartGeometry {
    /// Data points at the given outer radius, in axis order.
    pub fn scaled(&self, radius: f64) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|point| (point.dx * radius, point.dy * radius))
            .collect()
    }

    /// Closed outline of the data polygon (first vertex repeated at the end).
    pub fn polygon(&self, radius: f64) -> Vec<(f64, f64)> {
        let mut vertices = self.scaled(radius);
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
        vertices
    }

    /// Spoke end points at full radius, one per axis.
    pub fn spokes(&self, radius: f64) -> Vec<(f64, f64)> {
        let count = self.points.len();
        (0..count)
            .map(|index| {
                let angle = axis_angle(index, count);
                (angle.cos() * radius, angle.sin() * radius)
            })
            .collect()
    }
}

/// `2π·index/count − π/2`: index 0 points up, the rest proceed clockwise.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return -FRAC_PI_2;
    }
    #[allow(clippy::cast_precision_loss)]
    let fraction = index as f64 / count as f64;
    TAU.mul_add(fraction, -FRAC_PI_2)
}

pub fn project(distribution: &PowerDistribution, normalization: Normalization) -> ChartGeometry {
    let denominator = match normalization {
        Normalization::DomainMax(max) => max,
        Normalization::RelativeToLargest => distribution.largest(),
    };
    let count = Axis::ALL.len();

    let points = distribution
        .iter()
        .enumerate()
        .map(|(index, (axis, value))| {
            let ratio = spoke_ratio(value, denominator);
            let angle = axis_angle(index, count);
            ChartPoint {
                axis,
                label: axis.as_str(),
                value,
                ratio,
                dx: angle.cos() * ratio,
                dy: angle.sin() * ratio,
            }
        })
        .collect();

    ChartGeometry {
        points,
        normalization,
    }
}

fn spoke_ratio(value: f64, denominator: f64) -> f64 {
    if !denominator.is_finite() || denominator <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / denominator).max(0.0)
}

/// Vertices of one polar grid polygon, closed like [`ChartGeometry::polygon`].
pub fn grid_ring(level: f64, radius: f64, count: usize) -> Vec<(f64, f64)> {
    let mut vertices: Vec<(f64, f64)> = (0..count)
        .map(|index| {
            let angle = axis_angle(index, count);
            (angle.cos() * radius * level, angle.sin() * radius * level)
        })
        .collect();
    if let Some(first) = vertices.first().copied() {
        vertices.push(first);
    }
    vertices
}

/// Character-cell box `(dx, dy, width, height)` inside a `width` x `height`
/// area: the largest centred box whose width is twice its height, which draws
/// a round chart on a typical terminal font.
pub fn chart_cell_box(width: u16, height: u16) -> (u16, u16, u16, u16) {
    let box_width = width.min(height.saturating_mul(2));
    let box_height = (box_width / 2).min(height);
    (
        (width - box_width) / 2,
        (height - box_height) / 2,
        box_width,
        box_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRUMAN: PowerDistribution = PowerDistribution {
        diplomatic: 80.0,
        informational: 70.0,
        military: 90.0,
        economic: 100.0,
    };

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn first_axis_points_straight_up() {
        let geometry = project(&TRUMAN, Normalization::default());
        let first = geometry.points[0];

        assert_eq!(first.axis, Axis::Diplomatic);
        assert_close(first.dx, 0.0);
        assert_close(first.dy, -0.8);
    }

    #[test]
    fn axes_proceed_clockwise() {
        let geometry = project(&TRUMAN, Normalization::default());
        let informational = geometry.points[1];
        let military = geometry.points[2];
        let economic = geometry.points[3];

        assert_close(informational.dx, 0.7);
        assert_close(informational.dy, 0.0);
        assert_close(military.dx, 0.0);
        assert_close(military.dy, 0.9);
        assert_close(economic.dx, -1.0);
        assert_close(economic.dy, 0.0);
    }

    #[test]
    fn relative_normalization_uses_largest_axis() {
        let halved = PowerDistribution {
            diplomatic: 40.0,
            informational: 35.0,
            military: 45.0,
            economic: 50.0,
        };
        let geometry = project(&halved, Normalization::RelativeToLargest);
        let ratios: Vec<f64> = geometry.points.iter().map(|p| p.ratio).collect();

        assert_close(ratios[0], 0.8);
        assert_close(ratios[3], 1.0);
        assert_close(geometry.points[0].value, 40.0);
    }

    #[test]
    fn zero_distribution_collapses_to_centre() {
        let zero = PowerDistribution {
            diplomatic: 0.0,
            informational: 0.0,
            military: 0.0,
            economic: 0.0,
        };
        let geometry = project(&zero, Normalization::RelativeToLargest);
        assert!(geometry.points.iter().all(|p| p.ratio == 0.0));
    }

    #[test]
    fn negative_values_clamp_to_centre() {
        let skewed = PowerDistribution {
            diplomatic: -20.0,
            ..TRUMAN
        };
        let geometry = project(&skewed, Normalization::default());
        assert_close(geometry.points[0].ratio, 0.0);
    }

    #[test]
    fn projection_is_deterministic() {
        let first = project(&TRUMAN, Normalization::default());
        let second = project(&TRUMAN, Normalization::default());
        assert_eq!(first, second);
    }

    #[test]
    fn polygon_is_closed() {
        let polygon = project(&TRUMAN, Normalization::default()).polygon(10.0);
        assert_eq!(polygon.len(), 5);
        assert_eq!(polygon.first(), polygon.last());
    }

    #[test]
    fn grid_ring_scales_with_level() {
        let ring = grid_ring(0.5, 10.0, 4);
        assert_eq!(ring.len(), 5);
        assert_close(ring[0].1, -5.0);
        assert_close(ring[1].0, 5.0);
    }

    #[test]
    fn chart_cell_box_keeps_two_to_one_ratio() {
        assert_eq!(chart_cell_box(100, 20), (30, 0, 40, 20));
        assert_eq!(chart_cell_box(20, 30), (0, 10, 20, 10));
        assert_eq!(chart_cell_box(0, 5), (0, 2, 0, 0));
    }
}
