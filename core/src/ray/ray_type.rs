//! Ray Types

use bitflags::bitflags;

bitflags! {
    /// Stores combination of flags describing how a ray segment was spawned.
    /// The flags are orthogonal; an empty set is a primary (eye) ray.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RayType: u8 {
        /// Ray towards a light source.
        const SHADOW = 0x01;

        /// Ray leaving the same side of a surface it arrived on.
        const REFLECTED = 0x02;

        /// Ray bent through a refractive boundary.
        const REFRACTED = 0x04;

        /// Ray transmitted through a surface.
        const TRANS = 0x08;

        /// Ray sampling indirect (interreflected) illumination.
        const AMBIENT = 0x10;

        /// Ray from a specular (mirror-like) interaction.
        const SPECULAR = 0x20;
    }
}

impl RayType {
    /// A primary ray carries no flags.
    pub const PRIMARY: Self = Self::empty();

    /// Types that start a new recursion level.
    pub const REFLECTIVE: Self = Self::AMBIENT.union(Self::REFLECTED).union(Self::REFRACTED);

    /// Tests the given flags and returns whether any of them is set.
    ///
    /// * `other` - Ray type flags to match.
    pub fn matches(&self, other: Self) -> bool {
        self.intersects(other)
    }

    /// Returns true if no flags are set.
    pub fn is_primary(&self) -> bool {
        self.is_empty()
    }

    /// Returns true if the SHADOW flag is set.
    pub fn is_shadow(&self) -> bool {
        self.contains(Self::SHADOW)
    }

    /// Returns true if the AMBIENT flag is set.
    pub fn is_ambient(&self) -> bool {
        self.contains(Self::AMBIENT)
    }

    /// Returns true if the SPECULAR flag is set.
    pub fn is_specular(&self) -> bool {
        self.contains(Self::SPECULAR)
    }

    /// Returns true if the TRANS flag is set.
    pub fn is_transmitted(&self) -> bool {
        self.contains(Self::TRANS)
    }

    /// Returns true if any of AMBIENT, REFLECTED or REFRACTED is set.
    pub fn is_reflective(&self) -> bool {
        self.matches(Self::REFLECTIVE)
    }
}
