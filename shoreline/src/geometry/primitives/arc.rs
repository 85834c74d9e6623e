use crate::geometry::geo_traits::AngularDistanceTo;
use crate::geometry::primitives::{AABox, GeoPoint, UnitVector};

/// Minor great-circle arc between two [`GeoPoint`]s, the spherical counterpart of a line segment
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Arc {
    pub start: GeoPoint,
    pub end: GeoPoint,
    start_v: UnitVector,
    end_v: UnitVector,
    /// Unit normal of the plane containing the arc, `None` for coincident or antipodal endpoints
    normal: Option<UnitVector>,
}

impl Arc {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        let (start_v, end_v) = (start.to_unit_vector(), end.to_unit_vector());
        let cross = start_v.cross(&end_v);
        //below this, the plane of the arc is too ill-conditioned to be of any use
        let normal = match cross.norm() > 1e-12 {
            true => cross.normalized(),
            false => None,
        };
        Arc {
            start,
            end,
            start_v,
            end_v,
            normal,
        }
    }

    /// `true` if the arc does not define a unique great circle (coincident or antipodal endpoints)
    pub fn is_degenerate(&self) -> bool {
        self.normal.is_none()
    }

    /// Bounding box of the arc on the unit sphere.
    ///
    /// A minor arc is contained in the ball centered at the midpoint of its chord, with half the
    /// chord length as radius.
    pub fn bbox(&self) -> AABox {
        match self.normal {
            Some(_) => {
                let center = (self.start_v + self.end_v) * 0.5;
                let radius = self.start_v.distance(&self.end_v) / 2.0;
                AABox::around_ball(center, radius)
            }
            //endpoints are the only points considered for degenerate arcs
            None => AABox::from_point(self.start_v).union(&AABox::from_point(self.end_v)),
        }
    }

    /// Central angle between the arc and a point, with `point_v` the point's position on the unit sphere.
    pub fn angle_to_probe(&self, point: &GeoPoint, point_v: &UnitVector) -> f64 {
        let endpoint_angle = f64::min(self.start.angle_to(point), self.end.angle_to(point));
        match self.normal {
            None => endpoint_angle,
            Some(n) => {
                let height = point_v.dot(&n);
                let projected = *point_v - n * height;
                let within_arc = self.start_v.cross(&projected).dot(&n) >= 0.0
                    && projected.cross(&self.end_v).dot(&n) >= 0.0;
                match within_arc {
                    true => {
                        let interior_angle = f64::atan2(height.abs(), projected.norm());
                        f64::min(interior_angle, endpoint_angle)
                    }
                    false => endpoint_angle,
                }
            }
        }
    }
}

impl AngularDistanceTo<GeoPoint> for Arc {
    fn angle_to(&self, point: &GeoPoint) -> f64 {
        self.angle_to_probe(point, &point.to_unit_vector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::ChordLowerBound;
    use crate::geometry::geodesic::{self, EARTH_RADIUS_M};
    use float_cmp::approx_eq;

    #[test]
    fn perpendicular_foot_inside_arc() {
        //arc along the equator, query straight north of its middle
        let arc = Arc::new(GeoPoint::new(0.0, -1.0), GeoPoint::new(0.0, 1.0));
        let q = GeoPoint::new(0.5, 0.0);
        let expected = 0.5_f64.to_radians();
        assert!(approx_eq!(f64, arc.angle_to(&q), expected, epsilon = 1e-12));
        assert!(arc.angle_to(&q) < arc.start.angle_to(&q));
    }

    #[test]
    fn foot_outside_arc_falls_back_to_endpoint() {
        let arc = Arc::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        let q = GeoPoint::new(0.5, 2.0);
        assert_eq!(arc.angle_to(&q), arc.end.angle_to(&q));
    }

    #[test]
    fn degenerate_arcs() {
        let p = GeoPoint::new(10.0, 20.0);
        let arc = Arc::new(p, p);
        assert!(arc.is_degenerate());
        let q = GeoPoint::new(11.0, 20.0);
        assert!(approx_eq!(f64, arc.distance_to(&q), geodesic::distance_m(&p, &q)));

        let antipodal = Arc::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert!(antipodal.is_degenerate());
        assert!(antipodal.angle_to(&GeoPoint::new(0.0, 90.0)).is_finite());
    }

    #[test]
    fn arc_across_anti_meridian() {
        let arc = Arc::new(GeoPoint::new(-1.0, 179.5), GeoPoint::new(1.0, -179.5));
        let q = GeoPoint::new(0.0, 180.0);
        //the arc passes through (0, 180)
        assert!(arc.distance_to(&q) < 1.0, "{}", arc.distance_to(&q));
        assert!(arc.distance_to(&GeoPoint::new(0.0, 0.0)) > EARTH_RADIUS_M * 3.0);
    }

    #[test]
    fn bbox_contains_arc_samples() {
        let arc = Arc::new(GeoPoint::new(-30.0, 110.0), GeoPoint::new(20.0, 150.0));
        let bbox = arc.bbox();
        let (a, b) = (arc.start.to_unit_vector(), arc.end.to_unit_vector());
        for i in 0..=100 {
            let t = i as f64 / 100.0;
            let sample = (a * (1.0 - t) + b * t).normalized().unwrap();
            assert!(bbox.sq_chord_lower_bound(&sample) < 1e-24, "sample {i} outside bbox");
        }
    }
}
