//! Maximum-distance-to-chord knee detection.

use super::types::ElbowPoint;

/// Perpendicular distance of `(x0, y0)` to the line through `(x1, y1)` and
/// `(x2, y2)`.
///
/// Returns `None` when the two line points coincide.
pub fn perpendicular_distance(x0: f64, y0: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> Option<f64> {
    let dy = y2 - y1;
    let dx = x2 - x1;
    let denominator = (dy * dy + dx * dx).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return None;
    }
    let numerator = (dy * x0 - dx * y0 + x2 * y1 - y2 * x1).abs();
    Some(numerator / denominator)
}

/// Suggested k for a curve of points ordered by k.
///
/// - Fewer than 3 points: 1.
/// - Otherwise the interior point farthest from the first-last chord; the
///   first such point wins ties.
/// - A degenerate chord or a perfectly straight curve gives 1.
pub fn find_elbow(points: &[ElbowPoint]) -> usize {
    if points.len() < 3 {
        return 1;
    }

    let first = points[0];
    let last = points[points.len() - 1];
    let (x1, y1) = (first.k as f64, first.wcss);
    let (x2, y2) = (last.k as f64, last.wcss);

    let mut best: Option<(usize, f64)> = None;
    for p in &points[1..points.len() - 1] {
        let Some(distance) = perpendicular_distance(p.k as f64, p.wcss, x1, y1, x2, y2) else {
            return 1;
        };
        match best {
            Some((_, d)) if distance <= d => {}
            _ => best = Some((p.k, distance)),
        }
    }

    match best {
        Some((k, d)) if d > 0.0 => k,
        _ => 1,
    }
}
