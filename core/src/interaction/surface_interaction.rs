//! Surface Interactions

use crate::geometry::*;
use crate::material::*;
use crate::scene::ObjectId;
use std::sync::Arc;

/// SurfaceInteraction describes the surface a photon hit. The hit point
/// itself is carried by the ray (`Ray::hit_point`).
#[derive(Clone, Debug)]
pub struct SurfaceInteraction {
    /// Unit geometric normal, oriented by the surface definition.
    pub n: Normal3f,

    /// The object that was hit.
    pub object: ObjectId,

    /// The material of the object.
    pub material: ArcMaterialRecord,
}

impl SurfaceInteraction {
    /// Create a new surface interaction.
    ///
    /// * `n`        - Unit geometric normal.
    /// * `object`   - The object that was hit.
    /// * `material` - The material of the object.
    pub fn new(n: Normal3f, object: ObjectId, material: &ArcMaterialRecord) -> Self {
        Self {
            n,
            object,
            material: Arc::clone(material),
        }
    }

    /// Returns true if a ray travelling along `d` hits the side the normal
    /// points to.
    ///
    /// * `d` - Incoming ray direction.
    pub fn is_front_face(&self, d: &Vector3f) -> bool {
        d.dot(&self.n) < 0.0
    }

    /// Returns the normal flipped to face the incoming ray.
    ///
    /// * `d` - Incoming ray direction.
    pub fn facing_normal(&self, d: &Vector3f) -> Normal3f {
        self.n.face_forward(&-*d)
    }
}
