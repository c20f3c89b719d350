//! Compactness scoring.
//!
//! A tessellation scores the sum of its polygons' isoperimetric quotients.
//! There is no normalization by polygon count, so a few compact polygons
//! beat many small ones, and an empty tessellation scores 0.

use super::types::Polygon;
use crate::geometry::{isoperimetric_quotient, Point};

/// Isoperimetric quotient of one polygon, using its index order.
pub fn polygon_fitness(points: &[Point], polygon: &Polygon) -> f64 {
    isoperimetric_quotient(&polygon.vertices(points))
}

/// Total fitness of a list of polygons. Lower is better.
pub fn tessellation_fitness(points: &[Point], polygons: &[Polygon]) -> f64 {
    polygons.iter().map(|p| polygon_fitness(points, p)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn square() -> Vec<Point> {
        [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn test_unit_square_fitness() {
        let f = tessellation_fitness(&square(), &[Polygon::new(vec![0, 1, 2, 3])]);
        assert!((f - 4.0 / PI).abs() < 1e-9, "got {f}");
        assert!((f - 1.273).abs() < 1e-3);
    }

    #[test]
    fn test_empty_tessellation_scores_zero() {
        assert_eq!(tessellation_fitness(&square(), &[]), 0.0);
    }

    #[test]
    fn test_scores_are_summed() {
        let points = square();
        let a = Polygon::new(vec![0, 1, 2]);
        let b = Polygon::new(vec![0, 2, 3]);
        let total = tessellation_fitness(&points, &[a.clone(), b.clone()]);
        let parts = polygon_fitness(&points, &a) + polygon_fitness(&points, &b);
        assert!((total - parts).abs() < 1e-12);
        // right isoceles triangle: (2 + √2)² / (4π · 0.5)
        let tri = (2.0 + 2f64.sqrt()).powi(2) / (2.0 * PI);
        assert!((polygon_fitness(&points, &a) - tri).abs() < 1e-9);
    }

    #[test]
    fn test_index_order_matters() {
        let points = square();
        let cyclic = polygon_fitness(&points, &Polygon::new(vec![0, 1, 2, 3]));
        let bowtie = polygon_fitness(&points, &Polygon::new(vec![0, 1, 3, 2]));
        assert!(bowtie > 1000.0 * cyclic, "bowtie {bowtie} vs square {cyclic}");
    }

    #[test]
    fn test_compact_beats_elongated_with_same_point_count() {
        let points: Vec<Point> = [
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 0.01),
            (0.0, 0.01),
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        let compact = polygon_fitness(&points, &Polygon::new(vec![0, 1, 2, 3]));
        let thin = polygon_fitness(&points, &Polygon::new(vec![4, 5, 6, 7]));
        assert!(compact < thin);
    }

    #[test]
    fn test_short_polygons_stay_finite() {
        let points = square();
        let single = polygon_fitness(&points, &Polygon::new(vec![2]));
        let pair = polygon_fitness(&points, &Polygon::new(vec![0, 1]));
        assert_eq!(single, 0.0);
        assert!(pair.is_finite() && pair > 1e4);
    }
}
