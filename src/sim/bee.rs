//! Bee - polymorphic actor over the three bee kinds

use serde::{Deserialize, Serialize};

use crate::core::types::{compatibility, BeeId, BeeKind, Compatibility, Day, PlantKind};
use crate::registry::Keyed;

/// A single bee.
///
/// Visit counters are kept in one array keyed by [`PlantKind::index`];
/// the counter for the kind this bee cannot use stays at zero for its
/// whole lifetime. Counters never decrease.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bee {
    pub id: BeeId,
    pub kind: BeeKind,
    active_days_left: Day,
    visits: [u32; 3],
}

impl Bee {
    pub fn new(id: BeeId, kind: BeeKind) -> Self {
        Self {
            id,
            kind,
            active_days_left: kind.initial_active_days(),
            visits: [0; 3],
        }
    }

    /// True while the bee still participates in daily visits
    pub fn is_active(&self) -> bool {
        self.active_days_left > 0
    }

    pub fn active_days_left(&self) -> Day {
        self.active_days_left
    }

    /// Age by one day. Inactive bees stay at zero; the counter never
    /// goes negative.
    pub fn advance_day(&mut self) {
        if self.active_days_left > 0 {
            self.active_days_left -= 1;
        }
    }

    pub fn prefers(&self, plant: PlantKind) -> bool {
        compatibility(self.kind, plant) == Compatibility::Preferred
    }

    pub fn can_use_as_alternative(&self, plant: PlantKind) -> bool {
        compatibility(self.kind, plant) == Compatibility::Alternative
    }

    /// Preferred or alternative
    pub fn can_use(&self, plant: PlantKind) -> bool {
        compatibility(self.kind, plant) != Compatibility::Unusable
    }

    /// Record a successful visit to a plant of the given kind.
    ///
    /// Increments exactly one counter when the kind is usable; an
    /// unusable kind leaves all counters untouched.
    pub(crate) fn record_visit(&mut self, plant: PlantKind) {
        if self.can_use(plant) {
            self.visits[plant.index()] += 1;
        }
    }

    pub fn visit_count_for(&self, plant: PlantKind) -> u32 {
        self.visits[plant.index()]
    }

    pub fn total_visits(&self) -> u32 {
        self.visits.iter().sum()
    }
}

impl Keyed for Bee {
    type Key = BeeId;

    fn key(&self) -> BeeId {
        self.id
    }
}
