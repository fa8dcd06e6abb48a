//! Common

use pmap::base::*;
use pmap::geometry::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::photon_map::*;
use pmap::ray::*;
use pmap::reflection::*;
use pmap::rng::RNG;
use pmap::sampling::*;
use pmap::spectrum::*;

/// Maximum number of attempts at perturbing a rough specular direction.
pub const MAX_SPEC_ITER: usize = 10;

/// A candidate scattering event and its reflectance.
#[derive(Copy, Clone, Debug)]
pub struct Lobe {
    /// The event.
    pub scatter: ScatterType,

    /// Fraction of incident flux the event carries away.
    pub albedo: Spectrum,
}

impl Lobe {
    /// Create a new `Lobe`.
    ///
    /// * `scatter` - The event.
    /// * `albedo`  - Reflectance of the event.
    pub fn new(scatter: ScatterType, albedo: Spectrum) -> Self {
        Self { scatter, albedo }
    }

    /// Returns the probability of selecting the event.
    pub fn probability(&self) -> Float {
        clamp(self.albedo.max_component_value(), 0.0, 1.0)
    }
}

/// Select at most one event by Russian roulette. Each event is chosen with
/// the probability of its largest reflectance channel; the remaining
/// probability absorbs the photon. Returns the event and the flux
/// attenuation `albedo / probability`, clamped to `[0, 1]`.
///
/// * `lobes` - Candidate events.
/// * `rng`   - Random number generator.
pub fn choose_lobe(lobes: &[Lobe], rng: &mut RNG) -> Option<(ScatterType, Spectrum)> {
    let total: Float = lobes.iter().map(Lobe::probability).sum();
    let scale = if total > 1.0 { 1.0 / total } else { 1.0 };

    let mut xi = rng.uniform_float();
    for lobe in lobes {
        let p = lobe.probability() * scale;
        if p <= 0.0 {
            continue;
        }
        if xi < p {
            return Some((lobe.scatter, (lobe.albedo / p).clamp_default()));
        }
        xi -= p;
    }
    None
}

/// Perturb an ideal specular direction by a disk sample scaled by the
/// roughness. Retries up to `MAX_SPEC_ITER` times while the result falls on
/// the wrong side of `axis`. Returns `None` for smooth lobes or when every
/// attempt failed.
///
/// * `ideal`     - Unit ideal direction.
/// * `axis`      - Accepted directions have a positive dot product with it.
/// * `roughness` - Roughness along the `u` and `v` tangents.
/// * `u_dir`     - Orientation of the `u` tangent, if anisotropic.
/// * `rng`       - Random number generator.
pub fn perturb(
    ideal: &Vector3f,
    axis: &Normal3f,
    roughness: (Float, Float),
    u_dir: Option<&Vector3f>,
    rng: &mut RNG,
) -> Option<Vector3f> {
    if roughness.0 <= 0.0 && roughness.1 <= 0.0 {
        return None;
    }

    let (u, v) = tangent_frame(ideal, u_dir);
    for _ in 0..MAX_SPEC_ITER {
        let d = concentric_sample_disk(&sample_2d(rng));
        let w = *ideal + u * (d[0] * roughness.0) + v * (d[1] * roughness.1);
        if w.length_squared() > 0.0 && axis.dot(&w) > 0.0 {
            return Some(w.normalize());
        }
    }
    None
}

/// Returns tangents perpendicular to `w`, with the first aligned to the
/// projection of `u_dir` when it is given and not parallel to `w`.
///
/// * `w`     - Unit direction.
/// * `u_dir` - Preferred orientation of the first tangent.
fn tangent_frame(w: &Vector3f, u_dir: Option<&Vector3f>) -> (Vector3f, Vector3f) {
    if let Some(u_dir) = u_dir {
        let u = *u_dir - *w * u_dir.dot(w);
        if u.length_squared() > MACHINE_EPSILON {
            let u = u.normalize();
            return (u, w.cross(&u));
        }
    }
    coordinate_system(w)
}

/// Reflectances of a plastic, metal or translucent surface split by event.
#[derive(Clone, Debug)]
pub struct SurfaceLobes {
    /// Specular reflectance.
    pub spec_refl: Spectrum,

    /// Diffuse reflectance.
    pub diff_refl: Spectrum,

    /// Specular transmittance.
    pub spec_trans: Spectrum,

    /// Diffuse transmittance.
    pub diff_trans: Spectrum,

    /// Roughness along the `u` and `v` tangents.
    pub roughness: (Float, Float),

    /// Orientation of the `u` tangent for anisotropic surfaces.
    pub u_dir: Option<Vector3f>,
}

impl SurfaceLobes {
    /// Split the surface reflectance into events. Metals tint the specular
    /// component with the surface colour; other surfaces reflect it white.
    /// The transmitted part of the diffuse component is split between
    /// specular and diffuse transmission.
    ///
    /// * `kind`      - Material type.
    /// * `color`     - Surface colour.
    /// * `spec`      - Specular fraction.
    /// * `trans`     - Transmitted fraction of the non-specular component.
    /// * `tspec`     - Specular fraction of the transmitted component.
    /// * `roughness` - Roughness along the `u` and `v` tangents.
    /// * `u_dir`     - Orientation of the `u` tangent.
    pub fn new(
        kind: MaterialKind,
        color: Spectrum,
        spec: Float,
        trans: Float,
        tspec: Float,
        roughness: (Float, Float),
        u_dir: Option<Vector3f>,
    ) -> Self {
        let spec = clamp(spec, 0.0, 1.0);
        let trans = clamp(trans, 0.0, 1.0);
        let tspec = clamp(tspec, 0.0, 1.0);

        let spec_refl = match kind {
            MaterialKind::Metal | MaterialKind::Metal2 => color * spec,
            _ => Spectrum::new(spec),
        };
        let diffuse = color * (1.0 - spec);

        Self {
            spec_refl,
            diff_refl: diffuse * (1.0 - trans),
            spec_trans: diffuse * (trans * tspec),
            diff_trans: diffuse * (trans * (1.0 - tspec)),
            roughness: (abs(roughness.0), abs(roughness.1)),
            u_dir,
        }
    }

    /// Scatter a photon off the surface. Unperturbed specular transmission
    /// leaves the direction unchanged and is reported as a transfer.
    ///
    /// * `si`  - The surface interaction.
    /// * `ray` - The incoming photon ray.
    /// * `rng` - Random number generator.
    pub fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> ScatterStatus {
        let lobes = [
            Lobe::new(ScatterType::SpecularReflect, self.spec_refl),
            Lobe::new(ScatterType::DiffuseReflect, self.diff_refl),
            Lobe::new(ScatterType::SpecularTransmit, self.spec_trans),
            Lobe::new(ScatterType::DiffuseTransmit, self.diff_trans),
        ];

        let (scatter, atten) = match choose_lobe(&lobes, rng) {
            Some(choice) => choice,
            None => return ScatterStatus::Absorbed,
        };

        let d = ray.d.normalize();
        let n = si.facing_normal(&d);
        let u_dir = self.u_dir.as_ref();

        let out = match scatter {
            ScatterType::SpecularReflect => {
                let ideal = reflect(&d, &n);
                let w = perturb(&ideal, &n, self.roughness, u_dir, rng).unwrap_or(ideal);
                ray.photon_ray(scatter, &atten).with_direction(w)
            }
            ScatterType::DiffuseReflect => {
                let w = cosine_sample_about(&n, &sample_2d(rng));
                ray.photon_ray(scatter, &atten).with_direction(w)
            }
            ScatterType::SpecularTransmit => match perturb(&d, &-n, self.roughness, u_dir, rng) {
                Some(w) => ray.photon_ray(scatter, &atten).with_direction(w),
                None => ray.photon_ray(ScatterType::Transfer, &atten),
            },
            ScatterType::DiffuseTransmit => {
                let w = cosine_sample_about(&-n, &sample_2d(rng));
                ray.photon_ray(scatter, &atten).with_direction(w)
            }
            ScatterType::Refract | ScatterType::Transfer => ray.photon_ray(ScatterType::Transfer, &atten),
        };

        ScatterStatus::Scattered(out)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Arc;

    /// Returns an interaction with the `xy` plane at the origin and a photon
    /// arriving from above at 45 degrees.
    ///
    /// * `kind` - Material type.
    /// * `args` - Real arguments.
    pub fn hit_from_above(kind: MaterialKind, args: Vec<Float>) -> (SurfaceInteraction, Ray) {
        let m = Arc::new(MaterialRecord::new("test", kind, args));
        let si = SurfaceInteraction::new(Normal3f::new(0.0, 0.0, 1.0), 0, &m);
        let ray = Ray::new(
            Point3f::new(-1.0, 0.0, 1.0),
            Vector3f::new(1.0, 0.0, -1.0).normalize(),
        )
        .with_flux(Spectrum::from_rgb(1.0, 2.0, 3.0))
        .with_hit((2.0 as Float).sqrt());
        (si, ray)
    }

    /// Same as `hit_from_above` but the photon arrives from below.
    ///
    /// * `kind` - Material type.
    /// * `args` - Real arguments.
    pub fn hit_from_below(kind: MaterialKind, args: Vec<Float>) -> (SurfaceInteraction, Ray) {
        let (si, ray) = hit_from_above(kind, args);
        let ray = Ray::new(Point3f::new(-1.0, 0.0, -1.0), Vector3f::new(1.0, 0.0, 1.0).normalize())
            .with_flux(ray.flux)
            .with_hit(ray.t_max);
        (si, ray)
    }

    /// Check the scattering contract on the outcome of one event.
    ///
    /// * `parent` - The incoming photon.
    /// * `status` - The outcome.
    pub fn check_contract(parent: &Ray, status: &ScatterStatus) {
        if let Some(child) = status.ray() {
            assert!(child.scatter_type().is_some(), "untagged ray {:?}", child.ray_type);
            assert_eq!(child.level, parent.level + 1);
            assert!(!child.has_nans());
            for i in 0..SPECTRUM_SAMPLES {
                assert!(child.flux[i] >= 0.0);
                assert!(child.flux[i] <= parent.flux[i]);
            }
        }
    }
}
