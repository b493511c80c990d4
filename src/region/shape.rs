//! Vector shape geometry and fill containment.

use crate::types::{Bounds, Point};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    Ellipse { center_x: f64, center_y: f64, radius_x: f64, radius_y: f64 },
    Polygon { points: Vec<Point> },
}

impl Shape {
    /// Layout bounds of the shape in target-local space.
    pub fn bounds(&self) -> Bounds {
        match self {
            Shape::Rectangle { x, y, width, height } => Bounds::new(*x, *y, *width, *height),
            Shape::Ellipse {
                center_x,
                center_y,
                radius_x,
                radius_y,
            } => Bounds::new(center_x - radius_x, center_y - radius_y, radius_x * 2.0, radius_y * 2.0),
            Shape::Polygon { points } => {
                let Some(first) = points.first() else {
                    return Bounds::default();
                };
                points
                    .iter()
                    .skip(1)
                    .fold(Bounds::new(first.x, first.y, 0.0, 0.0), |acc, p| {
                        acc.union(&Bounds::new(p.x, p.y, 0.0, 0.0))
                    })
            }
        }
    }

    /// Whether `p` (in the shape's own un-scaled space) lies in the fill.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Shape::Rectangle { .. } => self.bounds().contains(p),
            Shape::Ellipse {
                center_x,
                center_y,
                radius_x,
                radius_y,
            } => {
                if *radius_x <= 0.0 || *radius_y <= 0.0 {
                    return false;
                }
                let dx = (p.x - center_x) / radius_x;
                let dy = (p.y - center_y) / radius_y;
                dx * dx + dy * dy <= 1.0
            }
            Shape::Polygon { points } => polygon_contains(points, p),
        }
    }
}

/// Even-odd ray cast.
fn polygon_contains(points: &[Point], p: Point) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
