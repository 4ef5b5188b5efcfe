//! Simulation driver - day-stepping, seeding, randomized visitation

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::types::{BeeId, BeeKind, Day, PlantId, PlantKind};
use crate::registry::Registry;
use crate::sim::bee::Bee;
use crate::sim::output::SimulationOutput;
use crate::sim::plant::Plant;
use crate::sim::visit::visit;

/// Driver phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fixed number of days with daily population growth
    Seeding,
    /// Visits continue until no active bee can reach a usable blooming plant
    Extended,
    Done,
}

/// What happened during one simulated day
#[derive(Debug, Clone, Copy)]
pub struct DayReport {
    pub day: Day,
    pub bees_spawned: u32,
    pub plants_spawned: u32,
    pub visits: u32,
    /// Bees whose last active day this was
    pub bees_retired: u32,
    /// Plants whose last blooming day this was
    pub plants_wilted: u32,
}

/// Daily spawn pairings; each seeding day picks one uniformly
const BEE_PAIRINGS: [[BeeKind; 2]; 3] = [
    [BeeKind::Mason, BeeKind::Bumble],
    [BeeKind::Bumble, BeeKind::Honey],
    [BeeKind::Mason, BeeKind::Honey],
];

const PLANT_PAIRINGS: [[PlantKind; 2]; 3] = [
    [PlantKind::Clover, PlantKind::Lavender],
    [PlantKind::Lavender, PlantKind::Sunflower],
    [PlantKind::Clover, PlantKind::Sunflower],
];

/// The meadow: both registries, the clock, and the driver state machine.
///
/// Owns the only RNG in the simulation; runs with the same seed are
/// bit-identical.
pub struct Meadow {
    config: SimulationConfig,
    pub bees: Registry<Bee>,
    pub plants: Registry<Plant>,
    pub day: Day,
    phase: Phase,
    rng: ChaCha8Rng,
    next_bee_id: u32,
    next_plant_id: u32,
}

impl Meadow {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self::with_rng(config, rng))
    }

    /// Construct with an explicit RNG (tests substitute their own)
    pub fn with_rng(config: SimulationConfig, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            bees: Registry::new(),
            plants: Registry::new(),
            day: 0,
            phase: Phase::Seeding,
            rng,
            next_bee_id: 1,
            next_plant_id: 1,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn spawn_bee(&mut self, kind: BeeKind) -> BeeId {
        let id = BeeId(self.next_bee_id);
        self.next_bee_id += 1;
        self.bees.add(Bee::new(id, kind));
        id
    }

    pub fn spawn_plant(&mut self, kind: PlantKind) -> PlantId {
        let id = PlantId(self.next_plant_id);
        self.next_plant_id += 1;
        self.plants.add(Plant::new(id, kind));
        id
    }

    fn blooming_count(&self) -> usize {
        self.plants.iter().filter(|p| p.is_blooming()).count()
    }

    /// Daily population growth: one kind pairing per family, 1-3 entities
    /// each drawing its kind from the pairing.
    fn seed_populations(&mut self) -> (u32, u32) {
        let min = self.config.min_daily_spawn;
        let max = self.config.max_daily_spawn;

        let bee_pair = BEE_PAIRINGS[self.rng.gen_range(0..BEE_PAIRINGS.len())];
        let bee_count = self.rng.gen_range(min..=max);
        for _ in 0..bee_count {
            let kind = bee_pair[self.rng.gen_range(0..2)];
            self.spawn_bee(kind);
        }

        let plant_pair = PLANT_PAIRINGS[self.rng.gen_range(0..PLANT_PAIRINGS.len())];
        let plant_count = self.rng.gen_range(min..=max);
        for _ in 0..plant_count {
            let kind = plant_pair[self.rng.gen_range(0..2)];
            self.spawn_plant(kind);
        }

        (bee_count, plant_count)
    }

    /// Every active bee performs its randomized visits for the day.
    ///
    /// Each bee draws a quota in [1, blooming plant count], then works
    /// through its preferred blooming plants by random index without
    /// replacement, falling back to alternatives once the preferred set is
    /// exhausted. Quota left over when both sets run out is forfeited.
    fn daily_visits(&mut self) -> u32 {
        let blooming = self.blooming_count();
        if blooming == 0 {
            return 0;
        }

        let mut performed = 0;
        let Self {
            bees, plants, rng, ..
        } = self;

        for bee in bees.iter_mut().filter(|b| b.is_active()) {
            let mut preferred: Vec<PlantId> = Vec::new();
            let mut alternative: Vec<PlantId> = Vec::new();
            for plant in plants.iter().filter(|p| p.is_blooming()) {
                if bee.prefers(plant.kind) {
                    preferred.push(plant.id);
                } else if bee.can_use_as_alternative(plant.kind) {
                    alternative.push(plant.id);
                }
            }

            let mut quota = rng.gen_range(1..=blooming);

            for pool in [&mut preferred, &mut alternative] {
                while quota > 0 && !pool.is_empty() {
                    let idx = rng.gen_range(0..pool.len());
                    let target = pool.swap_remove(idx);
                    if let Some(plant) = plants.iter_mut().find(|p| p.id == target) {
                        visit(bee, plant);
                        performed += 1;
                    }
                    quota -= 1;
                }
            }
        }

        performed
    }

    /// End of day: exactly one `advance_day` per bee and per plant.
    ///
    /// Returns how many bees and plants went inactive/dormant today.
    fn day_over(&mut self) -> (u32, u32) {
        let mut retired = 0;
        for bee in self.bees.iter_mut() {
            let was_active = bee.is_active();
            bee.advance_day();
            if was_active && !bee.is_active() {
                retired += 1;
            }
        }

        let mut wilted = 0;
        for plant in self.plants.iter_mut() {
            let was_blooming = plant.is_blooming();
            plant.advance_day();
            if was_blooming && !plant.is_blooming() {
                wilted += 1;
            }
        }

        (retired, wilted)
    }

    /// True while some active bee can still reach a usable blooming plant.
    ///
    /// Short-circuits on the first viable (bee, plant) pair.
    pub fn has_viable_pair(&self) -> bool {
        self.bees.iter().filter(|b| b.is_active()).any(|bee| {
            self.plants
                .iter()
                .any(|p| p.is_blooming() && bee.can_use(p.kind))
        })
    }

    /// Advance the simulation by one day.
    ///
    /// During seeding this spawns, visits, and ages regardless of bloom
    /// state; visitation itself is skipped on days with zero blooming
    /// plants. The day-advance step always runs.
    pub fn step_day(&mut self) -> DayReport {
        let (bees_spawned, plants_spawned) = match self.phase {
            Phase::Seeding => self.seed_populations(),
            _ => (0, 0),
        };

        let visits = self.daily_visits();
        let (bees_retired, plants_wilted) = self.day_over();

        let report = DayReport {
            day: self.day,
            bees_spawned,
            plants_spawned,
            visits,
            bees_retired,
            plants_wilted,
        };

        tracing::debug!(
            day = report.day,
            bees_spawned,
            plants_spawned,
            visits,
            bees_retired,
            plants_wilted,
            "day complete"
        );

        self.day += 1;
        if self.phase == Phase::Seeding && self.day >= self.config.seeding_days {
            self.phase = Phase::Extended;
            tracing::info!(day = self.day, "seeding phase complete");
        }

        report
    }

    /// Run both phases to completion and aggregate the results.
    pub fn run(&mut self) -> SimulationOutput {
        let start = std::time::Instant::now();

        while self.phase == Phase::Seeding {
            self.step_day();
        }

        let mut extended_days: Day = 0;
        while self.phase == Phase::Extended {
            if !self.has_viable_pair() {
                self.phase = Phase::Done;
                break;
            }
            if extended_days >= self.config.max_extended_days {
                tracing::warn!(
                    extended_days,
                    "extended phase hit the configured day cap"
                );
                self.phase = Phase::Done;
                break;
            }
            self.step_day();
            extended_days += 1;
        }

        self.phase = Phase::Done;
        tracing::info!(day = self.day, "simulation finished");

        SimulationOutput::new(&self.bees, &self.plants, self.day, start.elapsed())
    }
}
