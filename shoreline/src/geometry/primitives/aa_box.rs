use crate::geometry::geo_traits::ChordLowerBound;
use crate::geometry::primitives::UnitVector;

/// Axis-aligned box in 3D space, used as bounding volume around positions on the unit sphere
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct AABox {
    pub min: UnitVector,
    pub max: UnitVector,
}

impl AABox {
    /// Degenerate box around a single point
    pub fn from_point(p: UnitVector) -> Self {
        AABox { min: p, max: p }
    }

    /// Smallest box containing the ball with the given center and radius
    pub fn around_ball(center: UnitVector, radius: f64) -> Self {
        let r = UnitVector(radius, radius, radius);
        AABox {
            min: center - r,
            max: center + r,
        }
    }

    /// Smallest box enclosing all given boxes, `None` if the iterator is empty
    pub fn enclosing<'a>(boxes: impl IntoIterator<Item = &'a AABox>) -> Option<AABox> {
        boxes.into_iter().copied().reduce(|a, b| a.union(&b))
    }

    pub fn union(&self, other: &AABox) -> AABox {
        AABox {
            min: UnitVector(
                f64::min(self.min.0, other.min.0),
                f64::min(self.min.1, other.min.1),
                f64::min(self.min.2, other.min.2),
            ),
            max: UnitVector(
                f64::max(self.max.0, other.max.0),
                f64::max(self.max.1, other.max.1),
                f64::max(self.max.2, other.max.2),
            ),
        }
    }

    pub fn centroid(&self) -> UnitVector {
        (self.min + self.max) * 0.5
    }

    /// Axis (0, 1 or 2) along which the box is the widest
    pub fn longest_axis(&self) -> usize {
        let extent = self.max - self.min;
        match (extent.0 >= extent.1, extent.0 >= extent.2, extent.1 >= extent.2) {
            (true, true, _) => 0,
            (false, _, true) => 1,
            _ => 2,
        }
    }

    pub fn contains_box(&self, other: &AABox) -> bool {
        (0..3).all(|a| self.min.axis(a) <= other.min.axis(a) && other.max.axis(a) <= self.max.axis(a))
    }
}

impl ChordLowerBound for AABox {
    #[inline(always)]
    fn sq_chord_lower_bound(&self, point: &UnitVector) -> f64 {
        (0..3)
            .map(|a| {
                let (lo, hi, p) = (self.min.axis(a), self.max.axis(a), point.axis(a));
                if p < lo {
                    (lo - p).powi(2)
                } else if p > hi {
                    (p - hi).powi(2)
                } else {
                    0.0
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bound_is_zero_inside_and_exact_outside() {
        let bbox = AABox {
            min: UnitVector(0.0, 0.0, 0.0),
            max: UnitVector(1.0, 1.0, 1.0),
        };
        assert_eq!(bbox.sq_chord_lower_bound(&UnitVector(0.5, 0.5, 0.5)), 0.0);
        assert_eq!(bbox.sq_chord_lower_bound(&UnitVector(2.0, 0.5, 0.5)), 1.0);
        assert_eq!(bbox.sq_chord_lower_bound(&UnitVector(2.0, 2.0, -1.0)), 3.0);
    }

    #[test]
    fn longest_axis() {
        let bbox = AABox {
            min: UnitVector(0.0, 0.0, 0.0),
            max: UnitVector(0.1, 0.3, 0.2),
        };
        assert_eq!(bbox.longest_axis(), 1);
        let cube = AABox::around_ball(UnitVector(0.0, 0.0, 0.0), 1.0);
        assert_eq!(cube.longest_axis(), 0);
    }

    #[test]
    fn union_encloses_both() {
        let a = AABox::from_point(UnitVector(1.0, 0.0, 0.0));
        let b = AABox::around_ball(UnitVector(0.0, 1.0, 0.0), 0.1);
        let u = AABox::enclosing([&a, &b]).unwrap();
        assert!(u.contains_box(&a));
        assert!(u.contains_box(&b));
        assert!(AABox::enclosing(std::iter::empty()).is_none());
    }
}
