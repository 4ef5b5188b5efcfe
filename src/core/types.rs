//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for bees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BeeId(pub u32);

impl BeeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Unique identifier for plants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlantId(pub u32);

impl PlantId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Simulation time unit (one day per step)
pub type Day = u32;

/// Bee kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeeKind {
    Mason,
    Bumble,
    Honey,
}

impl BeeKind {
    pub const ALL: [BeeKind; 3] = [BeeKind::Mason, BeeKind::Bumble, BeeKind::Honey];

    /// Stable index for counter arrays keyed by bee kind
    pub fn index(self) -> usize {
        match self {
            BeeKind::Mason => 0,
            BeeKind::Bumble => 1,
            BeeKind::Honey => 2,
        }
    }

    /// Days a freshly created bee of this kind stays active
    pub fn initial_active_days(self) -> Day {
        match self {
            BeeKind::Mason => 9,
            BeeKind::Bumble => 8,
            BeeKind::Honey => 10,
        }
    }
}

/// Plant kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantKind {
    Clover,
    Lavender,
    Sunflower,
}

impl PlantKind {
    pub const ALL: [PlantKind; 3] = [
        PlantKind::Clover,
        PlantKind::Lavender,
        PlantKind::Sunflower,
    ];

    /// Stable index for counter arrays keyed by plant kind
    pub fn index(self) -> usize {
        match self {
            PlantKind::Clover => 0,
            PlantKind::Lavender => 1,
            PlantKind::Sunflower => 2,
        }
    }

    /// Days a freshly created plant of this kind stays in bloom
    pub fn initial_bloom_days(self) -> Day {
        match self {
            PlantKind::Clover => 9,
            PlantKind::Lavender => 8,
            PlantKind::Sunflower => 10,
        }
    }
}

/// Three-way classification of a (bee kind, plant kind) pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compatibility {
    Preferred,
    Alternative,
    Unusable,
}

/// The full preference relation between bee kinds and plant kinds.
///
/// Every pairing resolves here; bees and plants never carry per-instance
/// preference state. Each bee kind has exactly one preferred plant kind,
/// one alternative, and one it cannot use at all. Changing a rule means
/// editing this table and nothing else.
pub fn compatibility(bee: BeeKind, plant: PlantKind) -> Compatibility {
    use Compatibility::*;
    match (bee, plant) {
        (BeeKind::Mason, PlantKind::Clover) => Preferred,
        (BeeKind::Mason, PlantKind::Lavender) => Alternative,
        (BeeKind::Mason, PlantKind::Sunflower) => Unusable,

        (BeeKind::Bumble, PlantKind::Lavender) => Preferred,
        (BeeKind::Bumble, PlantKind::Sunflower) => Alternative,
        (BeeKind::Bumble, PlantKind::Clover) => Unusable,

        (BeeKind::Honey, PlantKind::Sunflower) => Preferred,
        (BeeKind::Honey, PlantKind::Clover) => Alternative,
        (BeeKind::Honey, PlantKind::Lavender) => Unusable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatibility_table() {
        assert_eq!(
            compatibility(BeeKind::Mason, PlantKind::Clover),
            Compatibility::Preferred
        );
        assert_eq!(
            compatibility(BeeKind::Mason, PlantKind::Lavender),
            Compatibility::Alternative
        );
        assert_eq!(
            compatibility(BeeKind::Mason, PlantKind::Sunflower),
            Compatibility::Unusable
        );

        assert_eq!(
            compatibility(BeeKind::Bumble, PlantKind::Lavender),
            Compatibility::Preferred
        );
        assert_eq!(
            compatibility(BeeKind::Bumble, PlantKind::Sunflower),
            Compatibility::Alternative
        );
        assert_eq!(
            compatibility(BeeKind::Bumble, PlantKind::Clover),
            Compatibility::Unusable
        );

        assert_eq!(
            compatibility(BeeKind::Honey, PlantKind::Sunflower),
            Compatibility::Preferred
        );
        assert_eq!(
            compatibility(BeeKind::Honey, PlantKind::Clover),
            Compatibility::Alternative
        );
        assert_eq!(
            compatibility(BeeKind::Honey, PlantKind::Lavender),
            Compatibility::Unusable
        );
    }

    #[test]
    fn test_each_bee_kind_covers_all_three_classes() {
        for bee in BeeKind::ALL {
            let classes: Vec<Compatibility> = PlantKind::ALL
                .iter()
                .map(|&p| compatibility(bee, p))
                .collect();
            assert!(classes.contains(&Compatibility::Preferred));
            assert!(classes.contains(&Compatibility::Alternative));
            assert!(classes.contains(&Compatibility::Unusable));
        }
    }

    #[test]
    fn test_kind_indices_are_distinct() {
        let bee_indices: Vec<usize> = BeeKind::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(bee_indices, vec![0, 1, 2]);
        let plant_indices: Vec<usize> = PlantKind::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(plant_indices, vec![0, 1, 2]);
    }
}
