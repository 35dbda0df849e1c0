//! Polyline data structures and functionality

use crate::point::*;
use std::ops::Index;

/// An ordered sequence of 2D points describing a path
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Point2d>,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
        }
    }

    /// Create a new polyline with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a polyline from a vector of points
    pub fn from_points(points: Vec<Point2d>) -> Self {
        Self { points }
    }

    /// Get the number of points in the polyline
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polyline is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Append a point to the end of the path
    pub fn push(&mut self, point: Point2d) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<Point2d> {
        self.points.iter()
    }

    /// Borrow the points as a slice
    pub fn as_slice(&self) -> &[Point2d] {
        &self.points
    }

    /// Consume the polyline and return its points
    pub fn into_points(self) -> Vec<Point2d> {
        self.points
    }

    pub fn first(&self) -> Option<&Point2d> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point2d> {
        self.points.last()
    }

    /// True when the path has at least two points and ends where it starts
    pub fn is_closed(&self) -> bool {
        self.points.len() > 1 && self.points.first() == self.points.last()
    }

    /// Total length of the path, summed over consecutive segments
    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }
}

/// Total length of the path through `points`, summed over consecutive segments
pub fn path_length(points: &[Point2d]) -> f64 {
    points
        .windows(2)
        .map(|pair| nalgebra::distance(&pair[0], &pair[1]))
        .sum()
}

impl Index<usize> for Polyline {
    type Output = Point2d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl AsRef<[Point2d]> for Polyline {
    fn as_ref(&self) -> &[Point2d] {
        &self.points
    }
}

impl From<Vec<Point2d>> for Polyline {
    fn from(points: Vec<Point2d>) -> Self {
        Self { points }
    }
}

impl IntoIterator for Polyline {
    type Item = Point2d;
    type IntoIter = std::vec::IntoIter<Point2d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Polyline {
    type Item = &'a Point2d;
    type IntoIter = std::slice::Iter<'a, Point2d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point2d> for Polyline {
    fn extend<I: IntoIterator<Item = Point2d>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point2d> for Polyline {
    fn from_iter<I: IntoIterator<Item = Point2d>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}
