//! Simulation output and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::types::{BeeKind, Day, PlantKind};
use crate::registry::Registry;
use crate::sim::bee::Bee;
use crate::sim::plant::Plant;

/// Final statistics for one bee kind
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BeeKindStats {
    pub kind: BeeKind,
    pub population: u32,
    /// Total plant visits made by all bees of this kind
    pub total_visits: u32,
    /// Plants visited at least once by this kind
    pub plants_visited: u32,
    /// total_visits / plants_visited, 0.0 when no plant was visited
    pub avg_visits_per_plant: f64,
}

/// Final statistics for one plant kind
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlantKindStats {
    pub kind: PlantKind,
    pub population: u32,
    pub total_visits: u32,
    /// Bees that visited at least once (of any kind this plant accepts)
    pub bees_hosted: u32,
    pub avg_visits_per_bee: f64,
}

/// Complete simulation output, read-only over the final counters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub days_simulated: Day,
    pub simulation_time_ms: u64,
    pub total_bees: u32,
    pub total_plants: u32,
    pub bee_stats: Vec<BeeKindStats>,
    pub plant_stats: Vec<PlantKindStats>,
}

impl SimulationOutput {
    pub fn new(
        bees: &Registry<Bee>,
        plants: &Registry<Plant>,
        days: Day,
        elapsed: Duration,
    ) -> Self {
        let bee_stats = BeeKind::ALL
            .iter()
            .map(|&kind| {
                let population = bees.iter().filter(|b| b.kind == kind).count() as u32;
                // Both sides of every visit are counted, so the bee-side sum
                // and the plant-side sum for this kind agree.
                let total_visits: u32 = bees
                    .iter()
                    .filter(|b| b.kind == kind)
                    .map(|b| b.total_visits())
                    .sum();
                let plants_visited = plants
                    .iter()
                    .filter(|p| p.visit_count_for(kind) > 0)
                    .count() as u32;
                let avg_visits_per_plant = if plants_visited > 0 {
                    f64::from(total_visits) / f64::from(plants_visited)
                } else {
                    0.0
                };
                BeeKindStats {
                    kind,
                    population,
                    total_visits,
                    plants_visited,
                    avg_visits_per_plant,
                }
            })
            .collect();

        let plant_stats = PlantKind::ALL
            .iter()
            .map(|&kind| {
                let population = plants.iter().filter(|p| p.kind == kind).count() as u32;
                let total_visits: u32 = plants
                    .iter()
                    .filter(|p| p.kind == kind)
                    .map(|p| p.total_visits())
                    .sum();
                let bees_hosted = bees
                    .iter()
                    .filter(|b| b.visit_count_for(kind) > 0)
                    .count() as u32;
                let avg_visits_per_bee = if bees_hosted > 0 {
                    f64::from(total_visits) / f64::from(bees_hosted)
                } else {
                    0.0
                };
                PlantKindStats {
                    kind,
                    population,
                    total_visits,
                    bees_hosted,
                    avg_visits_per_bee,
                }
            })
            .collect();

        Self {
            days_simulated: days,
            simulation_time_ms: elapsed.as_millis() as u64,
            total_bees: bees.len() as u32,
            total_plants: plants.len() as u32,
            bee_stats,
            plant_stats,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let mut out = format!(
            "Simulated {} days in {}ms\n{} bees, {} plants\n",
            self.days_simulated, self.simulation_time_ms, self.total_bees, self.total_plants,
        );
        for s in &self.bee_stats {
            out.push_str(&format!(
                "  {:?} bees: {} individuals, {} visits across {} plants (avg {:.2})\n",
                s.kind, s.population, s.total_visits, s.plants_visited, s.avg_visits_per_plant,
            ));
        }
        for s in &self.plant_stats {
            out.push_str(&format!(
                "  {:?} plants: {} individuals, {} visits from {} bees (avg {:.2})\n",
                s.kind, s.population, s.total_visits, s.bees_hosted, s.avg_visits_per_bee,
            ));
        }
        out
    }
}
