//! Scene

use crate::material::*;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Index of an object in the `ObjectRegistry`.
pub type ObjectId = usize;

/// What a scene object is.
#[derive(Clone, Debug, PartialEq)]
pub enum ObjectKind {
    /// A material (modifier) definition.
    Material(MaterialKind),

    /// A surface or volume primitive of the given type, e.g. `sphere`.
    Geometry(String),
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Material(kind) => write!(f, "{}", kind),
            Self::Geometry(t) => write!(f, "{}", t),
        }
    }
}

/// An object declared in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    /// Position in declaration order.
    pub id: ObjectId,

    /// Object identifier.
    pub name: String,

    /// Object type.
    pub kind: ObjectKind,

    /// Name of the modifier applied to the object (`void` for none).
    pub modifier: String,
}

/// ObjectRegistry holds every object of the scene in declaration order.
/// It is populated during setup and read-only afterwards.
#[derive(Clone, Debug, Default)]
pub struct ObjectRegistry {
    /// Objects in declaration order.
    objects: Vec<SceneObject>,

    /// Material records keyed by object id.
    materials: HashMap<ObjectId, ArcMaterialRecord>,
}

impl ObjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material definition and return its id.
    ///
    /// * `modifier` - Name of the material's own modifier.
    /// * `material` - The material record.
    pub fn add_material(&mut self, modifier: &str, material: MaterialRecord) -> ObjectId {
        let id = self.objects.len();
        self.objects.push(SceneObject {
            id,
            name: material.name.clone(),
            kind: ObjectKind::Material(material.kind),
            modifier: modifier.to_owned(),
        });
        self.materials.insert(id, Arc::new(material));
        id
    }

    /// Add a geometric primitive and return its id.
    ///
    /// * `modifier`  - Name of the material applied to the primitive.
    /// * `geometry`  - Primitive type.
    /// * `name`      - Object identifier.
    pub fn add_geometry(&mut self, modifier: &str, geometry: &str, name: &str) -> ObjectId {
        let id = self.objects.len();
        self.objects.push(SceneObject {
            id,
            name: name.to_owned(),
            kind: ObjectKind::Geometry(geometry.to_owned()),
            modifier: modifier.to_owned(),
        });
        id
    }

    /// Returns all objects in declaration order.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Returns the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if no objects were declared.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns the object with the given id.
    ///
    /// * `id` - Object id.
    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Find the most recent definition of an object by name.
    ///
    /// * `name` - Object identifier.
    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().rev().find(|o| o.name == name)
    }

    /// Returns the material record of a material object.
    ///
    /// * `id` - Object id.
    pub fn material(&self, id: ObjectId) -> Option<&ArcMaterialRecord> {
        self.materials.get(&id)
    }

    /// Find the most recent material definition by name.
    ///
    /// * `name` - Material identifier.
    pub fn find_material(&self, name: &str) -> Option<&ArcMaterialRecord> {
        self.objects
            .iter()
            .rev()
            .filter(|o| o.name == name)
            .find_map(|o| self.materials.get(&o.id))
    }

    /// Returns the material records in declaration order.
    pub fn materials(&self) -> impl Iterator<Item = &ArcMaterialRecord> {
        self.objects
            .iter()
            .filter_map(move |o| self.materials.get(&o.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ObjectRegistry {
        let mut reg = ObjectRegistry::new();
        reg.add_material(
            "void",
            MaterialRecord::new("red", MaterialKind::Plastic, vec![0.5, 0.1, 0.1, 0.0, 0.0]),
        );
        reg.add_geometry("red", "sphere", "ball");
        reg.add_material("void", MaterialRecord::new("port", MaterialKind::Antimatter, vec![]));
        reg
    }

    #[test]
    fn ids_follow_declaration_order() {
        let reg = registry();
        assert_eq!(reg.len(), 3);
        for (i, o) in reg.objects().iter().enumerate() {
            assert_eq!(o.id, i);
        }
        assert_eq!(reg.get(1).map(|o| o.kind.clone()), Some(ObjectKind::Geometry("sphere".to_owned())));
        assert!(reg.get(3).is_none());
    }

    #[test]
    fn find_by_name() {
        let reg = registry();
        assert_eq!(reg.find("ball").map(|o| o.modifier.as_str()), Some("red"));
        assert!(reg.find("missing").is_none());
        assert_eq!(reg.find_material("port").map(|m| m.kind), Some(MaterialKind::Antimatter));
        assert!(reg.find_material("ball").is_none());
        assert!(reg.material(1).is_none());
    }

    #[test]
    fn redefinition_shadows_earlier_object() {
        let mut reg = registry();
        reg.add_material("void", MaterialRecord::new("red", MaterialKind::Mirror, vec![1.0, 0.0, 0.0]));
        assert_eq!(reg.find_material("red").map(|m| m.kind), Some(MaterialKind::Mirror));
        assert_eq!(reg.materials().count(), 3);
    }
}
