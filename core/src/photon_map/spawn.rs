//! Photon ray spawning.

use super::ScatterType;
use crate::base::*;
use crate::ray::Ray;
use crate::spectrum::*;

impl Ray {
    /// Spawn a new photon ray from this one. This is the photon variant of
    /// `spawn_child`: the new ray starts at this ray's intersection, keeps
    /// this ray's direction until the caller replaces it, carries the path
    /// history forward, always increments the level and attenuates the flux.
    ///
    /// * `scatter`    - Scattering event that produced the new ray.
    /// * `flux_atten` - Per-channel flux attenuation in `[0, 1]`.
    pub fn photon_ray(&self, scatter: ScatterType, flux_atten: &Spectrum) -> Ray {
        debug_assert!(
            flux_atten.samples().iter().all(|a| (0.0..=1.0).contains(a)),
            "flux attenuation {} outside [0, 1]",
            flux_atten
        );

        let ray_type = scatter.ray_type();
        Ray {
            o: self.hit_point(),
            d: self.d,
            t_max: INFINITY,
            ray_type,
            cumulative_type: self.cumulative_type | ray_type,
            level: self.level + 1,
            flux: self.flux * flux_atten,
        }
    }

    /// Returns true if this photon ray was spawned by a specular event and
    /// therefore belongs in the caustic map.
    pub fn is_caustic_photon(&self) -> bool {
        self.ray_type.is_specular()
    }

    /// Returns the scattering event that spawned this photon ray, if any.
    pub fn scatter_type(&self) -> Option<ScatterType> {
        ScatterType::from_ray_type(self.ray_type)
    }
}
