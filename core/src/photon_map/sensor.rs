//! Photon Sensors

use crate::error::*;
use crate::material::MaterialKind;
use crate::scene::*;

/// Maximum number of sensor modifiers.
pub const MAX_SENSORS: usize = 511;

/// SensorSet holds the objects that record photon flux crossing them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorSet {
    entries: Vec<(ObjectId, String)>,
}

impl SensorSet {
    /// Returns true if the object is a sensor.
    ///
    /// * `id` - Object id.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.entries.iter().any(|(i, _)| *i == id)
    }

    /// Returns the sensor object ids in registry order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.entries.iter().map(|(i, _)| *i)
    }

    /// Returns the sensor names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, n)| n.as_str())
    }

    /// Returns the number of sensors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no sensors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve sensor modifier names against the scene. Every object whose name
/// is listed becomes a sensor and must be an antimatter material. Names with
/// no matching object are skipped with a warning.
///
/// * `registry` - The scene objects.
/// * `names`    - Sensor modifier names.
pub fn locate_sensors(registry: &ObjectRegistry, names: &[String]) -> Result<SensorSet> {
    let mut sensors = SensorSet::default();
    if names.is_empty() {
        return Ok(sensors);
    }

    if names.len() > MAX_SENSORS {
        return Err(PhotonMapError::TooManySensors {
            count: names.len(),
            max: MAX_SENSORS,
        });
    }

    for object in registry.objects() {
        if !names.iter().any(|n| *n == object.name) {
            continue;
        }

        if object.kind != ObjectKind::Material(MaterialKind::Antimatter) {
            return Err(PhotonMapError::SensorNotAntimatter(object.name.clone()));
        }

        if sensors.len() >= MAX_SENSORS {
            return Err(PhotonMapError::TooManySensors {
                count: sensors.len() + 1,
                max: MAX_SENSORS,
            });
        }

        debug!("Photon sensor '{}' is object {}", object.name, object.id);
        sensors.entries.push((object.id, object.name.clone()));
    }

    for name in names {
        if !sensors.names().any(|n| n == name) {
            warn!("Photon sensor modifier '{}' not found", name);
        }
    }

    Ok(sensors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::MaterialRecord;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn registry() -> ObjectRegistry {
        let mut reg = ObjectRegistry::new();
        reg.add_material("void", MaterialRecord::new("sensorA", MaterialKind::Antimatter, vec![]));
        reg.add_material(
            "void",
            MaterialRecord::new("floor", MaterialKind::Plastic, vec![0.5, 0.5, 0.5, 0.0, 0.0]),
        );
        reg.add_material("void", MaterialRecord::new("sensorB", MaterialKind::Antimatter, vec![]));
        reg
    }

    #[test]
    fn no_names_no_sensors() {
        let sensors = locate_sensors(&registry(), &[]).unwrap();
        assert!(sensors.is_empty());
    }

    #[test]
    fn single_antimatter_sensor() {
        let sensors = locate_sensors(&registry(), &names(&["sensorA"])).unwrap();
        assert_eq!(sensors.len(), 1);
        assert!(sensors.contains(0));
        assert!(!sensors.contains(2));
        assert_eq!(sensors.names().collect::<Vec<_>>(), vec!["sensorA"]);
    }

    #[test]
    fn only_named_sensor_is_found() {
        let mut reg = ObjectRegistry::new();
        reg.add_material("void", MaterialRecord::new("sensorA", MaterialKind::Antimatter, vec![]));
        reg.add_geometry("void", "polygon", "wallB");
        let sensors = locate_sensors(&reg, &names(&["sensorA"])).unwrap();
        assert_eq!(sensors.names().collect::<Vec<_>>(), vec!["sensorA"]);
    }

    #[test]
    fn registry_order_is_kept() {
        let sensors = locate_sensors(&registry(), &names(&["sensorB", "sensorA"])).unwrap();
        assert_eq!(sensors.ids().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn unknown_names_are_skipped() {
        let sensors = locate_sensors(&registry(), &names(&["nowhere", "sensorB"])).unwrap();
        assert_eq!(sensors.names().collect::<Vec<_>>(), vec!["sensorB"]);
    }

    #[test]
    fn sensor_must_be_antimatter() {
        match locate_sensors(&registry(), &names(&["sensorA", "floor"])) {
            Err(PhotonMapError::SensorNotAntimatter(name)) => assert_eq!(name, "floor"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn too_many_sensors() {
        let many: Vec<String> = (0..=MAX_SENSORS).map(|i| format!("s{}", i)).collect();
        match locate_sensors(&registry(), &many) {
            Err(PhotonMapError::TooManySensors { count, max }) => {
                assert_eq!(count, MAX_SENSORS + 1);
                assert_eq!(max, MAX_SENSORS);
            }
            other => panic!("unexpected {:?}", other),
        }

        let most: Vec<String> = (0..MAX_SENSORS).map(|i| format!("s{}", i)).collect();
        assert!(locate_sensors(&registry(), &most).unwrap().is_empty());
    }

    #[test]
    fn too_many_sensor_objects() {
        let mut reg = ObjectRegistry::new();
        for _ in 0..=MAX_SENSORS {
            reg.add_material("void", MaterialRecord::new("sensor", MaterialKind::Antimatter, vec![]));
        }
        match locate_sensors(&reg, &names(&["sensor"])) {
            Err(PhotonMapError::TooManySensors { count, max }) => {
                assert_eq!(count, MAX_SENSORS + 1);
                assert_eq!(max, MAX_SENSORS);
            }
            other => panic!("unexpected {:?}", other),
        }

        let mut reg = ObjectRegistry::new();
        for _ in 0..MAX_SENSORS {
            reg.add_material("void", MaterialRecord::new("sensor", MaterialKind::Antimatter, vec![]));
        }
        let sensors = locate_sensors(&reg, &names(&["sensor"])).unwrap();
        assert_eq!(sensors.len(), MAX_SENSORS);
    }
}
