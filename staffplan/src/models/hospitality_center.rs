// src/models/hospitality_center.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const fn active_by_default() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalityCenter {
    pub id: u32,
    pub name: String,
    #[serde(default = "active_by_default")]
    pub active: bool,
    /// Falls back to the plan's present population when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pilgrims: Option<f64>,
}

/// Ordered set of centers keyed by an id that is never handed out twice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HospitalityCenter>", into = "Vec<HospitalityCenter>")]
pub struct HospitalityCenters {
    centers: Vec<HospitalityCenter>,
    next_id: u32,
}

impl TryFrom<Vec<HospitalityCenter>> for HospitalityCenters {
    type Error = String;

    fn try_from(centers: Vec<HospitalityCenter>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for center in &centers {
            if !seen.insert(center.id) {
                return Err(format!("duplicate hospitality center id {}", center.id));
            }
        }
        let next_id = centers
            .iter()
            .map(|center| center.id)
            .max()
            .map_or(1, |id| id.saturating_add(1));
        Ok(Self { centers, next_id })
    }
}

impl From<HospitalityCenters> for Vec<HospitalityCenter> {
    #[inline]
    fn from(centers: HospitalityCenters) -> Self {
        centers.centers
    }
}

impl Default for HospitalityCenters {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl HospitalityCenters {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            centers: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends an active center and returns its id.
    #[inline]
    pub fn add(&mut self, name: &str, pilgrims: Option<f64>) -> u32 {
        let id = self.next_id;
        self.next_id = id.saturating_add(1);
        self.centers.push(HospitalityCenter {
            id,
            name: name.to_owned(),
            active: true,
            pilgrims,
        });
        id
    }

    /// Returns `false` if no center has this id.
    #[inline]
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.centers.len();
        self.centers.retain(|center| center.id != id);
        self.centers.len() != before
    }

    #[inline]
    pub fn set_active(&mut self, id: u32, active: bool) -> bool {
        let Some(center) = self.get_mut(id) else {
            return false;
        };
        center.active = active;
        true
    }

    #[inline]
    pub fn rename(&mut self, id: u32, name: &str) -> bool {
        let Some(center) = self.get_mut(id) else {
            return false;
        };
        name.clone_into(&mut center.name);
        true
    }

    #[inline]
    pub fn set_pilgrims(&mut self, id: u32, pilgrims: f64) -> bool {
        let Some(center) = self.get_mut(id) else {
            return false;
        };
        center.pilgrims = Some(pilgrims);
        true
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&HospitalityCenter> {
        self.centers.iter().find(|center| center.id == id)
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut HospitalityCenter> {
        self.centers.iter_mut().find(|center| center.id == id)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &HospitalityCenter> {
        self.centers.iter()
    }

    #[inline]
    pub fn active(&self) -> impl Iterator<Item = &HospitalityCenter> {
        self.centers.iter().filter(|center| center.active)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hospitality {
    pub category: String,
    /// Pilgrims served per staff member in each center.
    pub unit_ratio: f64,
    pub centers: HospitalityCenters,
}

impl Default for Hospitality {
    #[inline]
    fn default() -> Self {
        Self {
            category: String::from("Hospitality"),
            unit_ratio: 100.0,
            centers: HospitalityCenters::new(),
        }
    }
}
