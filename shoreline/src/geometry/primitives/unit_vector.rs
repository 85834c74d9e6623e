use std::ops::{Add, Mul, Sub};

/// Point in 3D space, typically a position on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitVector(pub f64, pub f64, pub f64);

impl UnitVector {
    #[inline(always)]
    pub fn dot(&self, other: &UnitVector) -> f64 {
        self.0 * other.0 + self.1 * other.1 + self.2 * other.2
    }

    #[inline(always)]
    pub fn cross(&self, other: &UnitVector) -> UnitVector {
        UnitVector(
            self.1 * other.2 - self.2 * other.1,
            self.2 * other.0 - self.0 * other.2,
            self.0 * other.1 - self.1 * other.0,
        )
    }

    pub fn norm(&self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn sq_distance(&self, other: &UnitVector) -> f64 {
        (*self - *other).dot(&(*self - *other))
    }

    pub fn distance(&self, other: &UnitVector) -> f64 {
        self.sq_distance(other).sqrt()
    }

    /// Rescales the vector to unit length. `None` if it is (numerically) the zero vector.
    pub fn normalized(&self) -> Option<UnitVector> {
        let n = self.norm();
        match n > f64::EPSILON && n.is_finite() {
            true => Some(*self * (1.0 / n)),
            false => None,
        }
    }

    /// Coordinate along axis `0`, `1` or `2`
    #[inline(always)]
    pub fn axis(&self, axis: usize) -> f64 {
        match axis {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => unreachable!("a 3D vector has no axis {axis}"),
        }
    }
}

impl Add for UnitVector {
    type Output = UnitVector;

    fn add(self, rhs: Self) -> Self::Output {
        UnitVector(self.0 + rhs.0, self.1 + rhs.1, self.2 + rhs.2)
    }
}

impl Sub for UnitVector {
    type Output = UnitVector;

    fn sub(self, rhs: Self) -> Self::Output {
        UnitVector(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

impl Mul<f64> for UnitVector {
    type Output = UnitVector;

    fn mul(self, rhs: f64) -> Self::Output {
        UnitVector(self.0 * rhs, self.1 * rhs, self.2 * rhs)
    }
}
