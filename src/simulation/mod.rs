// File: simulation/mod.rs
pub mod balancer;
pub mod collision;
pub mod lifecycle;
pub mod motion;
pub mod store;
pub mod unit;

pub use store::EntityStore;
pub use unit::{InteractionView, LifeStage, StageCounts, Unit, UnitView};

use crate::config::SimulationConfig;
use crate::constants::{MAX_UNITS, POPULATION_REPORT_INTERVAL_FRAMES, RESTITUTION};
use crate::input::InputSample;
use crate::utils::{random_position, random_velocity};
use glam::Vec2;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt::Write as _;

pub type SimRng = StdRng;

/// Owns the population and runs one frame at a time.
pub struct SimulationState {
    store: EntityStore,
    rng: SimRng,
    pub config: SimulationConfig,
    is_paused: bool,
    // Seconds the current interaction unit has been alive
    interaction_timer: f32,
    frame_count: u64,
}

impl SimulationState {
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SimRng::seed_from_u64(seed),
            None => SimRng::from_entropy(),
        };
        let mut state = Self {
            store: EntityStore::new(MAX_UNITS),
            rng,
            config,
            is_paused: false,
            interaction_timer: 0.0,
            frame_count: 0,
        };
        state.initialize_units();
        state
    }

    fn initialize_units(&mut self) {
        self.store.clear();
        for _ in 0..self.config.initial_juveniles {
            self.spawn_random(LifeStage::Juvenile);
        }
        for _ in 0..self.config.initial_adults {
            self.spawn_random(LifeStage::Adult);
        }
    }

    #[inline]
    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.config.arena_width, self.config.arena_height)
    }

    /// Spawns a unit of `stage` anywhere in bounds, heading in a random direction.
    pub fn spawn_random(&mut self, stage: LifeStage) -> usize {
        let arena = self.arena();
        let stage_config = self.config.stage(stage);
        let position = random_position(&mut self.rng, arena, stage_config.radius);
        let velocity = random_velocity(&mut self.rng, stage_config.speed);
        self.store.spawn(stage, position, velocity, stage_config)
    }

    /// Spawns a unit at an explicit position and velocity.
    pub fn spawn_unit(&mut self, stage: LifeStage, position: Vec2, velocity: Vec2) -> usize {
        self.store
            .spawn(stage, position, velocity, self.config.stage(stage))
    }

    /// Advances the simulation by one frame.
    ///
    /// Order: aging/hatching and motion per unit, pairwise collisions (eggs
    /// laid afterwards), population balancing, input injection, then the
    /// interaction push and its expiry.
    pub fn update(&mut self, delta_time: f32, input: &InputSample) {
        if self.is_paused {
            return;
        }
        let dt = delta_time.max(0.0);
        let arena = self.arena();

        {
            let Self {
                store, rng, config, ..
            } = self;
            for unit in store.units_mut() {
                // Freshly hatched units start moving next frame
                if lifecycle::advance(unit, dt, config, rng).is_none() {
                    motion::integrate(unit, arena);
                }
            }
        }

        let clutches = collision::resolve_pairs(self.store.units_mut(), RESTITUTION);
        for position in clutches {
            self.store
                .spawn(LifeStage::Egg, position, Vec2::ZERO, &self.config.egg);
            log::info!("Egg laid at {:?}", position);
        }

        if let Some(stage) = balancer::replenishment(self.stage_counts(), self.store.capacity()) {
            self.spawn_random(stage);
        }

        if input.pressed {
            self.store
                .set_interaction(input.position, &self.config.interaction);
            self.interaction_timer = 0.0;
            log::debug!("Interaction placed at {:?}", input.position);
        }

        if self.store.interaction().is_some() {
            let factor = self.config.interaction.deflect_factor;
            let (units, interaction) = self.store.split_interaction_mut();
            if let Some(interaction) = interaction {
                collision::deflect_from_interaction(units, interaction, factor);
            }

            self.interaction_timer += dt;
            if self.interaction_timer >= self.config.interaction.ttl_secs {
                self.store.clear_interaction();
                self.interaction_timer = 0.0;
                log::debug!("Interaction expired");
            }
        }

        self.frame_count += 1;
        if self.frame_count % POPULATION_REPORT_INTERVAL_FRAMES == 0 {
            log::info!("Current unit count: {}", self.store.len());
        }
    }

    pub fn set_arena(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.config.arena_width = width;
            self.config.arena_height = height;
            log::info!("Resized arena to {}x{}", width, height);
        }
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        log::info!(
            "Simulation {}",
            if self.is_paused { "Paused" } else { "Resumed" }
        );
    }

    pub fn restart(&mut self) {
        log::info!("Restarting simulation with new seed...");
        self.rng = SimRng::from_entropy();
        self.interaction_timer = 0.0;
        self.frame_count = 0;
        self.is_paused = false;
        self.initialize_units();
    }

    // --- Read-only queries ---

    #[inline]
    pub fn units(&self) -> &[Unit] {
        self.store.units()
    }

    pub fn unit_mut(&mut self, index: usize) -> Option<&mut Unit> {
        self.store.units_mut().get_mut(index)
    }

    #[inline]
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn unit_positions(&self) -> Vec<Vec2> {
        self.store.positions()
    }

    pub fn unit_radii(&self) -> Vec<f32> {
        self.store.radii()
    }

    pub fn render_units(&self) -> Vec<UnitView> {
        self.store.unit_views()
    }

    pub fn interaction_view(&self) -> InteractionView {
        self.store.interaction_view()
    }

    /// True when any unit currently touches the interaction unit.
    pub fn interaction_contact(&self) -> bool {
        self.store
            .interaction()
            .is_some_and(|pointer| collision::first_contact(self.store.units(), pointer).is_some())
    }

    pub fn stage_counts(&self) -> StageCounts {
        StageCounts::tally(self.store.units())
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn interaction_timer(&self) -> f32 {
        self.interaction_timer
    }

    /// One line per unit: index, stage, position, velocity, age.
    pub fn describe_units(&self) -> String {
        let mut out = String::from("Unit info:\n");
        for (i, unit) in self.store.units().iter().enumerate() {
            let _ = writeln!(
                out,
                "Unit {}: State: {}, Position: ({:.2}, {:.2}), Speed: ({:.2}, {:.2}), Age: {:.2}",
                i,
                unit.stage,
                unit.position.x,
                unit.position.y,
                unit.velocity.x,
                unit.velocity.y,
                unit.age
            );
        }
        out
    }

    pub fn log_unit_info(&self) {
        log::info!("{}", self.describe_units());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn empty_state(seed: u64) -> SimulationState {
        SimulationState::new(
            SimulationConfig::new()
                .with_seed(seed)
                .with_initial_population(0, 0),
        )
    }

    #[test]
    fn starts_with_configured_population_in_bounds() {
        let state = SimulationState::new(SimulationConfig::new().with_seed(5));
        let counts = state.stage_counts();
        assert_eq!((counts.eggs, counts.juveniles, counts.adults), (0, 4, 1));
        for unit in state.units() {
            assert!(unit.position.x >= unit.radius && unit.position.x <= 800.0 - unit.radius);
            assert!(unit.position.y >= unit.radius && unit.position.y <= 600.0 - unit.radius);
            assert!((unit.velocity.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn hatching_unit_does_not_move_on_hatch_frame() {
        let mut state = empty_state(9);
        let egg = state.spawn_unit(LifeStage::Egg, Vec2::new(400.0, 300.0), Vec2::ZERO);
        if let Some(unit) = state.unit_mut(egg) {
            unit.age = 5.0;
        }
        state.update(DT, &InputSample::default());

        let unit = &state.units()[egg];
        assert_ne!(unit.stage, LifeStage::Egg);
        assert_eq!(unit.position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn balancer_adds_one_unit_per_frame() {
        let mut state = empty_state(4);
        state.update(DT, &InputSample::default());
        assert_eq!(state.stage_counts().adults, 1);
        assert_eq!(state.units().len(), 1);

        state.update(DT, &InputSample::default());
        let counts = state.stage_counts();
        assert_eq!((counts.juveniles, counts.adults), (1, 1));
    }

    #[test]
    fn pause_freezes_everything() {
        let mut state = SimulationState::new(SimulationConfig::new().with_seed(8));
        let before = state.unit_positions();
        state.toggle_pause();
        state.update(DT, &InputSample::pressed_at(Vec2::new(10.0, 10.0)));
        assert_eq!(state.unit_positions(), before);
        assert!(!state.interaction_view().present);
        assert_eq!(state.frame_count(), 0);
    }

    #[test]
    fn restart_restores_initial_population() {
        let mut state = SimulationState::new(SimulationConfig::new().with_seed(8));
        for _ in 0..30 {
            state.update(DT, &InputSample::default());
        }
        state.spawn_unit(LifeStage::Egg, Vec2::new(50.0, 50.0), Vec2::ZERO);
        state.restart();
        let counts = state.stage_counts();
        assert_eq!((counts.eggs, counts.juveniles, counts.adults), (0, 4, 1));
        assert_eq!(state.frame_count(), 0);
        assert!(state.units().iter().all(|u| u.age == 0.0));
    }

    #[test]
    fn set_arena_ignores_degenerate_sizes() {
        let mut state = empty_state(1);
        state.set_arena(0.0, 300.0);
        assert_eq!(state.arena(), Vec2::new(800.0, 600.0));
        state.set_arena(1024.0, 768.0);
        assert_eq!(state.arena(), Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn interaction_contact_reports_overlap() {
        let mut state = empty_state(2);
        assert!(!state.interaction_contact());
        state.spawn_unit(LifeStage::Adult, Vec2::new(100.0, 100.0), Vec2::ZERO);
        state.spawn_unit(LifeStage::Juvenile, Vec2::new(500.0, 500.0), Vec2::ZERO);
        state.spawn_unit(LifeStage::Juvenile, Vec2::new(520.0, 500.0), Vec2::ZERO);
        state.spawn_unit(LifeStage::Juvenile, Vec2::new(500.0, 520.0), Vec2::ZERO);
        state.spawn_unit(LifeStage::Juvenile, Vec2::new(540.0, 540.0), Vec2::ZERO);
        state.update(DT, &InputSample::pressed_at(Vec2::new(125.0, 100.0)));
        assert!(state.interaction_contact());
    }

    #[test]
    fn describe_units_lists_every_unit() {
        let state = SimulationState::new(SimulationConfig::new().with_seed(3));
        let dump = state.describe_units();
        assert_eq!(dump.lines().count(), 1 + state.units().len());
        assert!(dump.contains("State: Adult"));
        assert!(dump.contains("State: Juvenile"));
    }
}
