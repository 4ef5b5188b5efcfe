//! Plant - polymorphic actor over the three plant kinds

use serde::{Deserialize, Serialize};

use crate::core::types::{compatibility, BeeKind, Compatibility, Day, PlantId, PlantKind};
use crate::registry::Keyed;

/// A single plant, symmetric to [`crate::sim::bee::Bee`].
///
/// Visit counters are keyed by [`BeeKind::index`]; exactly one stays at
/// zero permanently (the bee kind that cannot use this plant).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub kind: PlantKind,
    blooming_days_left: Day,
    visits: [u32; 3],
}

impl Plant {
    pub fn new(id: PlantId, kind: PlantKind) -> Self {
        Self {
            id,
            kind,
            blooming_days_left: kind.initial_bloom_days(),
            visits: [0; 3],
        }
    }

    /// True while the plant can still receive visits
    pub fn is_blooming(&self) -> bool {
        self.blooming_days_left > 0
    }

    pub fn blooming_days_left(&self) -> Day {
        self.blooming_days_left
    }

    pub fn advance_day(&mut self) {
        if self.blooming_days_left > 0 {
            self.blooming_days_left -= 1;
        }
    }

    pub fn is_preferred_by(&self, bee: BeeKind) -> bool {
        compatibility(bee, self.kind) == Compatibility::Preferred
    }

    pub fn is_alternative_for(&self, bee: BeeKind) -> bool {
        compatibility(bee, self.kind) == Compatibility::Alternative
    }

    pub(crate) fn record_visit(&mut self, bee: BeeKind) {
        if compatibility(bee, self.kind) != Compatibility::Unusable {
            self.visits[bee.index()] += 1;
        }
    }

    pub fn visit_count_for(&self, bee: BeeKind) -> u32 {
        self.visits[bee.index()]
    }

    pub fn total_visits(&self) -> u32 {
        self.visits.iter().sum()
    }
}

impl Keyed for Plant {
    type Key = PlantId;

    fn key(&self) -> PlantId {
        self.id
    }
}
