//! Polygon and tessellation value types.

use crate::ga::{Fitness, Individual};
use crate::geometry::Point;
use std::collections::BTreeSet;

/// An ordered loop of point indices.
///
/// Order matters for convexity, area, and perimeter. Equality is exact:
/// the same indices in a different order are a different polygon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon(Vec<usize>);

impl Polygon {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits into `[..at]` and `[at..]`.
    ///
    /// # Panics
    /// Panics if `at > self.len()`.
    pub fn split_at(&self, at: usize) -> (Polygon, Polygon) {
        let (front, back) = self.0.split_at(at);
        (Polygon(front.to_vec()), Polygon(back.to_vec()))
    }

    /// Distinct indices in ascending order.
    pub fn unique_indices(&self) -> Vec<usize> {
        self.0.iter().copied().collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// Looks up the vertex coordinates in loop order.
    ///
    /// # Panics
    /// Panics if an index is out of range for `points`.
    pub fn vertices(&self, points: &[Point]) -> Vec<Point> {
        vertices_of(points, &self.0)
    }
}

impl From<Vec<usize>> for Polygon {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for Polygon {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

/// Coordinates of `indices` in order.
pub fn vertices_of(points: &[Point], indices: &[usize]) -> Vec<Point> {
    indices.iter().map(|&i| points[i]).collect()
}

/// A candidate solution: an ordered list of polygons plus its cached score.
///
/// Polygons are meant to be disjoint and to cover every point, but the
/// genetic operators do not enforce either; a tessellation may miss points
/// or list one point in several polygons.
///
/// Equality compares polygons only; the cached fitness is ignored.
#[derive(Debug, Clone)]
pub struct Tessellation {
    polygons: Vec<Polygon>,
    fitness: f64,
}

impl Tessellation {
    /// Creates an unscored tessellation.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self {
            polygons,
            fitness: <f64 as Fitness>::worst(),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Every index that appears in at least one polygon.
    pub fn covered_indices(&self) -> BTreeSet<usize> {
        self.polygons
            .iter()
            .flat_map(|p| p.indices().iter().copied())
            .collect()
    }
}

impl PartialEq for Tessellation {
    fn eq(&self, other: &Self) -> bool {
        self.polygons == other.polygons
    }
}

impl Individual for Tessellation {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
