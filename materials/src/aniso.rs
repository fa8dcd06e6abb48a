//! Anisotropic Plastic, Metal and Trans

use super::*;
use pmap::error::*;
use pmap::geometry::*;
use pmap::interaction::*;
use pmap::material::*;
use pmap::ray::*;
use pmap::rng::RNG;

/// Photon scattering for anisotropic `plastic2`, `metal2` and `trans2`.
///
/// Arguments are `ux uy uz r g b spec urough vrough` and, for `trans2`,
/// additionally `trans tspec`. The vector `u` orients the first roughness
/// axis.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnisoScatter;

impl AnisoScatter {
    /// Split the material into scattering events.
    ///
    /// * `m` - The material.
    pub fn lobes(m: &MaterialRecord) -> Result<SurfaceLobes> {
        let (args, trans, tspec) = match m.kind {
            MaterialKind::Trans2 => {
                let args = m.checked_args(&[11])?;
                (args, args[9], args[10])
            }
            _ => (m.checked_args(&[9])?, 0.0, 0.0),
        };

        let u = Vector3f::new(args[0], args[1], args[2]);
        Ok(SurfaceLobes::new(
            m.kind,
            m.color(3),
            args[6],
            trans,
            tspec,
            (args[7], args[8]),
            Some(u),
        ))
    }
}

impl PhotonScatter for AnisoScatter {
    fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> Result<ScatterStatus> {
        let lobes = Self::lobes(&si.material)?;
        Ok(lobes.scatter(si, ray, rng))
    }

    fn name(&self) -> &'static str {
        "aniso"
    }
}
