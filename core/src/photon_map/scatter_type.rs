//! Scattered photon ray types.

use crate::ray::RayType;
use std::fmt;

/// Diffuse reflection.
pub const PMAP_DIFFREFL: RayType = RayType::REFLECTED.union(RayType::AMBIENT);

/// Diffuse transmission.
pub const PMAP_DIFFTRANS: RayType = RayType::REFLECTED
    .union(RayType::AMBIENT)
    .union(RayType::TRANS);

/// Specular reflection.
pub const PMAP_SPECREFL: RayType = RayType::REFLECTED.union(RayType::SPECULAR);

/// Specular transmission through a surface sampled by its BSDF.
pub const PMAP_SPECTRANS: RayType = RayType::REFLECTED
    .union(RayType::SPECULAR)
    .union(RayType::TRANS);

/// Refraction through a dielectric boundary.
pub const PMAP_REFRACT: RayType = RayType::REFRACTED.union(RayType::SPECULAR);

/// Pure transfer: the photon passes through unchanged in direction.
pub const PMAP_XFER: RayType = RayType::TRANS;

/// Scattering events a material can produce for a photon. Every spawned
/// photon ray carries exactly one of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScatterType {
    DiffuseReflect,
    DiffuseTransmit,
    SpecularReflect,
    SpecularTransmit,
    Refract,
    Transfer,
}

impl ScatterType {
    /// Every scattering event.
    pub const ALL: [ScatterType; 6] = [
        Self::DiffuseReflect,
        Self::DiffuseTransmit,
        Self::SpecularReflect,
        Self::SpecularTransmit,
        Self::Refract,
        Self::Transfer,
    ];

    /// Returns the ray type composition for the event.
    pub fn ray_type(&self) -> RayType {
        match self {
            Self::DiffuseReflect => PMAP_DIFFREFL,
            Self::DiffuseTransmit => PMAP_DIFFTRANS,
            Self::SpecularReflect => PMAP_SPECREFL,
            Self::SpecularTransmit => PMAP_SPECTRANS,
            Self::Refract => PMAP_REFRACT,
            Self::Transfer => PMAP_XFER,
        }
    }

    /// Recover the event from an exact ray type composition.
    ///
    /// * `t` - Ray type.
    pub fn from_ray_type(t: RayType) -> Option<Self> {
        Self::ALL.iter().find(|s| s.ray_type() == t).copied()
    }

    /// Returns true if the event produces a caustic photon.
    pub fn is_caustic(&self) -> bool {
        self.ray_type().is_specular()
    }
}

impl fmt::Display for ScatterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::DiffuseReflect => "diffuse reflection",
            Self::DiffuseTransmit => "diffuse transmission",
            Self::SpecularReflect => "specular reflection",
            Self::SpecularTransmit => "specular transmission",
            Self::Refract => "refraction",
            Self::Transfer => "transfer",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compositions() {
        assert_eq!(PMAP_DIFFREFL.bits(), 0x12);
        assert_eq!(PMAP_DIFFTRANS.bits(), 0x1a);
        assert_eq!(PMAP_SPECREFL.bits(), 0x22);
        assert_eq!(PMAP_SPECTRANS.bits(), 0x2a);
        assert_eq!(PMAP_REFRACT.bits(), 0x24);
        assert_eq!(PMAP_XFER.bits(), 0x08);
    }

    #[test]
    fn compositions_are_distinct_and_recoverable() {
        for s in ScatterType::ALL {
            assert_eq!(ScatterType::from_ray_type(s.ray_type()), Some(s));
        }
        assert_eq!(ScatterType::from_ray_type(RayType::AMBIENT), None);
        assert_eq!(ScatterType::from_ray_type(RayType::SHADOW | RayType::TRANS), None);
    }

    #[test]
    fn caustic_eligibility() {
        assert!(!ScatterType::DiffuseReflect.is_caustic());
        assert!(!ScatterType::DiffuseTransmit.is_caustic());
        assert!(ScatterType::SpecularReflect.is_caustic());
        assert!(ScatterType::SpecularTransmit.is_caustic());
        assert!(ScatterType::Refract.is_caustic());
        assert!(!ScatterType::Transfer.is_caustic());
    }
}
