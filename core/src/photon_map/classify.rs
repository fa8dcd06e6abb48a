//! Path classification for double-counting avoidance.
//!
//! During the backward pass some sub-paths are already represented by
//! photons:
//!
//! * DIFFUSE -> (DIFFUSE|SPECULAR) -> * : an ambient ray spawning an
//!   indirect ray. Covered by the global, caustic or contribution map.
//! * DIFFUSE -> SPECULAR -> LIGHT : a shadow ray transferred through a
//!   transparent material. Covered by caustic photons in the global map.

use super::PhotonMapConfig;
use crate::ray::Ray;

/// Returns true if the ambient sub-path ending in `ray` is already
/// accounted for by an active photon map.
///
/// * `config` - Photon map mode flags.
/// * `ray`    - Candidate backward ray.
pub fn amb_ray_in_pmap(config: &PhotonMapConfig, ray: &Ray) -> bool {
    ray.cumulative_type.is_ambient()
        && ((config.global && (config.ambient_bounces < 0 || ray.level > 1))
            || config.caustic
            || config.contrib)
}

/// Returns true if the shadow sub-path ending in `ray` is already accounted
/// for by caustic photons.
///
/// * `config` - Photon map mode flags.
/// * `ray`    - Candidate backward ray.
pub fn shadow_ray_in_pmap(config: &PhotonMapConfig, ray: &Ray) -> bool {
    ray.cumulative_type.is_shadow() && config.global
}

/// Returns true if either check reports the ray's contribution as already
/// present in a photon map.
///
/// * `config` - Photon map mode flags.
/// * `ray`    - Candidate backward ray.
pub fn ray_in_pmap(config: &PhotonMapConfig, ray: &Ray) -> bool {
    amb_ray_in_pmap(config, ray) || shadow_ray_in_pmap(config, ray)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Int;
    use crate::geometry::*;
    use crate::ray::RayType;
    use proptest::prelude::*;

    fn ray(cumulative_type: RayType, level: u32) -> Ray {
        Ray::new(Point3f::zero(), Vector3f::new(0.0, 0.0, 1.0))
            .with_cumulative_type(cumulative_type)
            .with_level(level)
    }

    prop_compose! {
        fn ray_type()(bits in 0u8..0x40u8) -> RayType {
            RayType::from_bits_truncate(bits)
        }
    }

    prop_compose! {
        fn config()(
            global in any::<bool>(),
            caustic in any::<bool>(),
            contrib in any::<bool>(),
            ambient_bounces in -2..4 as Int,
        ) -> PhotonMapConfig {
            PhotonMapConfig::new(global, caustic, contrib, ambient_bounces)
        }
    }

    #[test]
    fn ambient_at_first_bounce_with_global_only() {
        let config = PhotonMapConfig::new(true, false, false, 1);
        assert!(!amb_ray_in_pmap(&config, &ray(RayType::AMBIENT, 0)));
        assert!(!amb_ray_in_pmap(&config, &ray(RayType::AMBIENT, 1)));
        assert!(amb_ray_in_pmap(&config, &ray(RayType::AMBIENT, 2)));
    }

    #[test]
    fn ambient_with_negative_bounce_limit() {
        let config = PhotonMapConfig::new(true, false, false, -1);
        assert!(amb_ray_in_pmap(&config, &ray(RayType::AMBIENT, 0)));
        assert!(amb_ray_in_pmap(&config, &ray(RayType::AMBIENT, 1)));
    }

    #[test]
    fn ambient_with_caustic_or_contrib_at_any_depth() {
        let caustic = PhotonMapConfig::new(false, true, false, 2);
        let contrib = PhotonMapConfig::new(false, false, true, 2);
        for level in 0..4 {
            assert!(amb_ray_in_pmap(&caustic, &ray(RayType::AMBIENT, level)));
            assert!(amb_ray_in_pmap(&contrib, &ray(RayType::AMBIENT, level)));
        }
    }

    #[test]
    fn nothing_active_never_classifies() {
        let config = PhotonMapConfig::new(false, false, false, -1);
        let r = ray(RayType::AMBIENT | RayType::SHADOW, 5);
        assert!(!amb_ray_in_pmap(&config, &r));
        assert!(!shadow_ray_in_pmap(&config, &r));
        assert!(!ray_in_pmap(&config, &r));
    }

    #[test]
    fn shadow_through_transparent_material() {
        let on = PhotonMapConfig::new(true, false, false, 0);
        let off = PhotonMapConfig::new(false, true, true, 0);
        let r = ray(RayType::AMBIENT | RayType::SPECULAR | RayType::SHADOW, 1);
        assert!(shadow_ray_in_pmap(&on, &r));
        assert!(!shadow_ray_in_pmap(&off, &r));
    }

    proptest! {
        #[test]
        fn deep_ambient_with_global(t in ray_type(), level in 2u32..64, c in config()) {
            let c = PhotonMapConfig { global: true, ..c };
            let r = ray(t | RayType::AMBIENT, level);
            prop_assert!(amb_ray_in_pmap(&c, &r));
        }

        #[test]
        fn shallow_ambient_with_global_only(
            t in ray_type(),
            level in 0u32..2,
            ambient_bounces in 0..8 as Int,
        ) {
            let c = PhotonMapConfig::new(true, false, false, ambient_bounces);
            let r = ray(t | RayType::AMBIENT, level);
            prop_assert!(!amb_ray_in_pmap(&c, &r));
        }

        #[test]
        fn non_ambient_never_in_pmap(t in ray_type(), level in 0u32..64, c in config()) {
            let r = ray(t - RayType::AMBIENT, level);
            prop_assert!(!amb_ray_in_pmap(&c, &r));
        }

        #[test]
        fn shadow_follows_global(t in ray_type(), level in 0u32..64, c in config()) {
            let r = ray(t | RayType::SHADOW, level);
            prop_assert_eq!(shadow_ray_in_pmap(&c, &r), c.global);
            let r = ray(t - RayType::SHADOW, level);
            prop_assert!(!shadow_ray_in_pmap(&c, &r));
        }

        #[test]
        fn ray_type_of_segment_is_ignored(t in ray_type(), level in 0u32..64, c in config()) {
            // Only the accumulated path history is classified.
            let mut r = ray(RayType::PRIMARY, level);
            r.ray_type = t;
            prop_assert!(!ray_in_pmap(&c, &r));
        }
    }
}
