//! Material

use crate::base::*;
use crate::error::*;
use crate::interaction::*;
use crate::ray::*;
use crate::rng::RNG;
use crate::spectrum::*;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Material types understood by the scene description. This is the key of
/// the photon scattering dispatch table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MaterialKind {
    Plastic,
    Metal,
    Trans,
    Plastic2,
    Metal2,
    Trans2,
    Mirror,
    Dielectric,
    Interface,
    Glass,
    Light,
    Illum,
    Glow,
    Spot,
    Antimatter,
    Mist,
    Prism1,
    Prism2,
}

impl MaterialKind {
    /// Every material type, in declaration order.
    pub const ALL: [MaterialKind; 18] = [
        Self::Plastic,
        Self::Metal,
        Self::Trans,
        Self::Plastic2,
        Self::Metal2,
        Self::Trans2,
        Self::Mirror,
        Self::Dielectric,
        Self::Interface,
        Self::Glass,
        Self::Light,
        Self::Illum,
        Self::Glow,
        Self::Spot,
        Self::Antimatter,
        Self::Mist,
        Self::Prism1,
        Self::Prism2,
    ];

    /// Returns the scene file keyword.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Plastic => "plastic",
            Self::Metal => "metal",
            Self::Trans => "trans",
            Self::Plastic2 => "plastic2",
            Self::Metal2 => "metal2",
            Self::Trans2 => "trans2",
            Self::Mirror => "mirror",
            Self::Dielectric => "dielectric",
            Self::Interface => "interface",
            Self::Glass => "glass",
            Self::Light => "light",
            Self::Illum => "illum",
            Self::Glow => "glow",
            Self::Spot => "spot",
            Self::Antimatter => "antimatter",
            Self::Mist => "mist",
            Self::Prism1 => "prism1",
            Self::Prism2 => "prism2",
        }
    }

    /// Returns true for light emitting materials.
    pub fn is_emitter(&self) -> bool {
        matches!(self, Self::Light | Self::Illum | Self::Glow | Self::Spot)
    }

    /// Returns true for materials with a diffuse component, where arriving
    /// photons are stored. Specular, transfer and emitting materials hold
    /// no photons.
    pub fn stores_photons(&self) -> bool {
        matches!(
            self,
            Self::Plastic | Self::Metal | Self::Trans | Self::Plastic2 | Self::Metal2 | Self::Trans2
        )
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for MaterialKind {
    type Err = PhotonMapError;

    /// Parse a scene file keyword.
    ///
    /// * `s` - The keyword.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|k| k.keyword() == s)
            .copied()
            .ok_or_else(|| PhotonMapError::UnknownMaterialKind(s.to_owned()))
    }
}

/// A material definition as declared in the scene. Read-only once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialRecord {
    /// Identifier used by geometry to refer to this material.
    pub name: String,

    /// Material type.
    pub kind: MaterialKind,

    /// Real arguments.
    pub args: Vec<Float>,
}

impl MaterialRecord {
    /// Create a new `MaterialRecord`.
    ///
    /// * `name` - Identifier.
    /// * `kind` - Material type.
    /// * `args` - Real arguments.
    pub fn new(name: &str, kind: MaterialKind, args: Vec<Float>) -> Self {
        Self {
            name: name.to_owned(),
            kind,
            args,
        }
    }

    /// Returns the real arguments if their count is one of `expected`.
    ///
    /// * `expected` - Accepted argument counts.
    pub fn checked_args(&self, expected: &[usize]) -> Result<&[Float]> {
        if expected.contains(&self.args.len()) {
            Ok(&self.args)
        } else {
            let expected = expected
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" or ");
            Err(PhotonMapError::InvalidArguments {
                name: self.name.clone(),
                kind: self.kind,
                expected,
                found: self.args.len(),
            })
        }
    }

    /// Returns the colour stored in three consecutive arguments starting at
    /// `i`, clamped to `[0, 1]`.
    ///
    /// * `i` - Index of the red component.
    pub fn color(&self, i: usize) -> Spectrum {
        Spectrum::from_rgb(self.args[i], self.args[i + 1], self.args[i + 2]).clamp_default()
    }
}

/// Atomic reference counted `MaterialRecord`.
pub type ArcMaterialRecord = Arc<MaterialRecord>;

/// Outcome of a photon/surface interaction.
#[derive(Clone, Debug)]
pub enum ScatterStatus {
    /// The photon continues along the new ray.
    Scattered(Ray),

    /// The photon was absorbed; its path ends here.
    Absorbed,
}

impl ScatterStatus {
    /// Returns the scattered ray, if any.
    pub fn ray(&self) -> Option<&Ray> {
        match self {
            Self::Scattered(ray) => Some(ray),
            Self::Absorbed => None,
        }
    }
}

/// PhotonScatter is implemented by each material family to move a photon
/// across a surface interaction.
pub trait PhotonScatter {
    /// Scatter the incoming photon. Implementations spawn at most one ray
    /// through `Ray::photon_ray` and never mutate the incoming ray.
    ///
    /// * `si`  - The surface interaction at the photon's intersection.
    /// * `ray` - The incoming photon ray; `t_max` is the hit distance.
    /// * `rng` - Random number generator owned by the calling worker.
    fn scatter(&self, si: &SurfaceInteraction, ray: &Ray, rng: &mut RNG) -> Result<ScatterStatus>;

    /// Returns a short name for logging.
    fn name(&self) -> &'static str;
}

/// Atomic reference counted `PhotonScatter`.
pub type ArcPhotonScatter = Arc<dyn PhotonScatter + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        for kind in MaterialKind::ALL {
            assert_eq!(kind.keyword().parse::<MaterialKind>().unwrap(), kind);
        }
        assert!("void".parse::<MaterialKind>().is_err());
    }

    #[test]
    fn only_diffuse_materials_store_photons() {
        let storing: Vec<_> = MaterialKind::ALL
            .iter()
            .filter(|k| k.stores_photons())
            .map(|k| k.keyword())
            .collect();
        assert_eq!(
            storing,
            vec!["plastic", "metal", "trans", "plastic2", "metal2", "trans2"]
        );
        assert!(!MaterialKind::Mirror.stores_photons());
        assert!(!MaterialKind::Glass.stores_photons());
    }

    #[test]
    fn checked_args_reports_counts() {
        let m = MaterialRecord::new("red", MaterialKind::Plastic, vec![0.5, 0.1, 0.1, 0.0]);
        match m.checked_args(&[5]) {
            Err(PhotonMapError::InvalidArguments {
                expected, found, ..
            }) => {
                assert_eq!(expected, "5");
                assert_eq!(found, 4);
            }
            _ => panic!("expected InvalidArguments"),
        }
        assert!(m.checked_args(&[3, 4]).is_ok());
    }

    #[test]
    fn color_is_clamped() {
        let m = MaterialRecord::new("hot", MaterialKind::Mirror, vec![2.0, 0.5, -1.0]);
        assert_eq!(m.color(0), Spectrum::from_rgb(1.0, 0.5, 0.0));
    }
}
