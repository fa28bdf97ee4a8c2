use slotmap::SlotMap;

use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a captured territory.
    pub struct TerritoryId;
}

/// A successful capture kept for the rest of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedTerritory {
    /// Counter-clockwise hull polygon the territory was extruded from.
    pub hull: Vec<Point2>,
    /// Footprint area of the hull.
    pub area: f64,
    /// Extrusion height used for the mesh.
    pub height: f64,
}

/// Session arena of captured territories.
///
/// Overlapping captures are stored independently; no union is computed.
#[derive(Debug, Default)]
pub struct TerritoryStore {
    territories: SlotMap<TerritoryId, CapturedTerritory>,
}

impl TerritoryStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a territory and returns its ID.
    pub fn add(&mut self, territory: CapturedTerritory) -> TerritoryId {
        self.territories.insert(territory)
    }

    /// Looks up a territory by ID; `None` once it has been removed.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&CapturedTerritory> {
        self.territories.get(id)
    }

    /// Removes a territory, e.g. after the host destroyed its scene object.
    pub fn remove(&mut self, id: TerritoryId) -> Option<CapturedTerritory> {
        self.territories.remove(id)
    }

    /// Number of territories captured and not yet removed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// `true` if nothing has been captured this session.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Iterates over every stored territory with its ID, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &CapturedTerritory)> {
        self.territories.iter()
    }

    /// Sum of the footprint areas of every stored territory.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.territories.values().map(|t| t.area).sum()
    }
}
