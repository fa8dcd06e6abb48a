//! Ray Records

use super::RayType;
use crate::base::*;
use crate::geometry::*;
use crate::spectrum::*;

/// A ray segment of an eye or photon path, together with the bookkeeping
/// needed to classify it later.
#[derive(Clone, Debug)]
pub struct Ray {
    /// Origin.
    pub o: Point3f,

    /// Direction.
    pub d: Vector3f,

    /// Distance to the current intersection; set by the tracer on a hit.
    pub t_max: Float,

    /// How this segment was spawned.
    pub ray_type: RayType,

    /// Union of the types of every segment on the path so far.
    pub cumulative_type: RayType,

    /// Recursion level (bounce depth).
    pub level: u32,

    /// Flux (photons) or weight (eye rays) carried by the ray.
    pub flux: Spectrum,
}

impl Ray {
    /// Returns a primary ray at level 0 carrying unit flux.
    ///
    /// * `o` - Origin.
    /// * `d` - Direction.
    pub fn new(o: Point3f, d: Vector3f) -> Self {
        Self {
            o,
            d,
            t_max: INFINITY,
            ray_type: RayType::PRIMARY,
            cumulative_type: RayType::PRIMARY,
            level: 0,
            flux: Spectrum::ONE,
        }
    }

    /// Returns true if either coordinate is NaN.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_max.is_nan()
    }

    /// Get position along the ray at given parameter.
    ///
    /// * `t` - Parameter to evaluate.
    pub fn at(&self, t: Float) -> Point3f {
        self.o + self.d * t
    }

    /// Returns the point of the current intersection.
    pub fn hit_point(&self) -> Point3f {
        debug_assert!(self.t_max.is_finite(), "ray has no intersection");
        self.at(self.t_max)
    }

    /// Spawn a child ray at the current intersection. The child inherits the
    /// path history and flux; its level is bumped only for reflective types.
    ///
    /// * `ray_type` - How the child was spawned.
    /// * `d`        - Direction of the child.
    pub fn spawn_child(&self, ray_type: RayType, d: Vector3f) -> Self {
        let level = if ray_type.is_reflective() {
            self.level + 1
        } else {
            self.level
        };

        Self {
            o: self.hit_point(),
            d,
            t_max: INFINITY,
            ray_type,
            cumulative_type: self.cumulative_type | ray_type,
            level,
            flux: self.flux,
        }
    }

    /// Replace the direction.
    ///
    /// * `d` - New direction.
    pub fn with_direction(mut self, d: Vector3f) -> Self {
        self.d = d;
        self
    }

    /// Replace the flux.
    ///
    /// * `flux` - New flux.
    pub fn with_flux(mut self, flux: Spectrum) -> Self {
        self.flux = flux;
        self
    }

    /// Replace the recursion level.
    ///
    /// * `level` - New level.
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Replace the accumulated path type.
    ///
    /// * `cumulative_type` - New accumulated type.
    pub fn with_cumulative_type(mut self, cumulative_type: RayType) -> Self {
        self.cumulative_type = cumulative_type;
        self
    }

    /// Record an intersection at the given distance.
    ///
    /// * `t` - Distance along the ray.
    pub fn with_hit(mut self, t: Float) -> Self {
        self.t_max = t;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn has_nans() {
        let nan_point = Point3::new(f32::NAN, f32::NAN, f32::NAN);
        let point = Point3::new(0.0, 0.0, 0.0);
        let vector = Vector3::new(1.0, 0.0, 0.0);

        assert!(Ray::new(nan_point, vector).has_nans());
        assert!(!Ray::new(point, vector).has_nans());
    }

    #[test]
    fn new_is_primary() {
        let r = Ray::new(Point3::zero(), Vector3::new(0.0, 0.0, 1.0));
        assert!(r.ray_type.is_primary());
        assert!(r.cumulative_type.is_primary());
        assert_eq!(r.level, 0);
        assert_eq!(r.flux, Spectrum::ONE);
    }

    #[test]
    fn spawn_child_accumulates_history() {
        let r = Ray::new(Point3::zero(), Vector3::new(0.0, 0.0, 1.0)).with_hit(2.0);
        let amb = r.spawn_child(RayType::AMBIENT, Vector3::new(1.0, 0.0, 0.0));
        assert!(amb.o == Point3::new(0.0, 0.0, 2.0));
        assert_eq!(amb.level, 1);
        assert_eq!(amb.ray_type, RayType::AMBIENT);

        let shadow = amb
            .with_hit(1.0)
            .spawn_child(RayType::SHADOW, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(shadow.level, 1);
        assert_eq!(shadow.ray_type, RayType::SHADOW);
        assert_eq!(shadow.cumulative_type, RayType::AMBIENT | RayType::SHADOW);
        assert!(shadow.o == Point3::new(1.0, 0.0, 2.0));
    }

    #[test]
    fn trans_child_keeps_level() {
        let r = Ray::new(Point3::zero(), Vector3::new(0.0, 0.0, 1.0))
            .with_level(3)
            .with_hit(1.0);
        assert_eq!(r.spawn_child(RayType::TRANS, r.d).level, 3);
        assert_eq!(r.spawn_child(RayType::REFRACTED, r.d).level, 4);
    }

    prop_range!(range_f32, f32, -100.0..100.0f32);

    prop_point3!(
        point3_f32,
        f32,
        -100.0..100.0f32,
        -100.0..100.0f32,
        -100.0..100.0f32
    );

    prop_vector3!(
        vector3_f32,
        f32,
        -100.0..100.0f32,
        -100.0..100.0f32,
        -100.0..100.0f32
    );

    proptest! {
        #[test]
        fn at_f32(o in point3_f32(), d in vector3_f32(), t in range_f32()) {
            let r = Ray::new(o, d);
            prop_assert_eq!(r.at(t), o + d * t);
        }
    }
}
