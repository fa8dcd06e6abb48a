//! Photon map mode flags

use crate::app::Options;
use crate::base::*;

/// Which photon maps are active and the configured ambient bounce limit.
/// Built once before rendering and shared read-only afterwards.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PhotonMapConfig {
    /// Global photon map is active.
    pub global: bool,

    /// Dedicated caustic photon map is active.
    pub caustic: bool,

    /// Contribution photon map is active.
    pub contrib: bool,

    /// Ambient bounce limit; negative disables ambient interreflection.
    pub ambient_bounces: Int,
}

impl PhotonMapConfig {
    /// Create a new `PhotonMapConfig`.
    ///
    /// * `global`          - Global photon map is active.
    /// * `caustic`         - Caustic photon map is active.
    /// * `contrib`         - Contribution photon map is active.
    /// * `ambient_bounces` - Ambient bounce limit.
    pub fn new(global: bool, caustic: bool, contrib: bool, ambient_bounces: Int) -> Self {
        Self {
            global,
            caustic,
            contrib,
            ambient_bounces,
        }
    }

    /// Returns true if any photon map is active.
    pub fn is_active(&self) -> bool {
        self.global || self.caustic || self.contrib
    }
}

impl From<&Options> for PhotonMapConfig {
    /// Create the configuration from command line options.
    ///
    /// * `options` - The command line options.
    fn from(options: &Options) -> Self {
        Self::new(
            options.global,
            options.caustic,
            options.contrib,
            options.ambient_bounces,
        )
    }
}
