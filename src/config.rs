// --- File: config.rs ---
use crate::constants::*;
use crate::simulation::LifeStage;

/// Per-stage shape, speed and display color.
#[derive(Debug, Clone, PartialEq)]
pub struct StageConfig {
    pub radius: f32,
    pub speed: f32,
    pub color: [f32; 4],
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            radius: HATCHED_RADIUS,
            speed: UNIT_SPEED,
            color: JUVENILE_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionConfig {
    pub radius: f32,
    pub ttl_secs: f32,
    pub deflect_factor: f32,
    pub color: [f32; 4],
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            radius: INTERACTION_RADIUS,
            ttl_secs: INTERACTION_TTL_SECS,
            deflect_factor: INTERACTION_DEFLECT_FACTOR,
            color: INTERACTION_COLOR,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub egg: StageConfig,
    pub juvenile: StageConfig,
    pub adult: StageConfig,
    pub interaction: InteractionConfig,
    pub initial_juveniles: usize,
    pub initial_adults: usize,
    // None seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        // Eggs sit still until they hatch
        let egg = StageConfig {
            radius: EGG_RADIUS,
            speed: 0.0,
            color: EGG_COLOR,
        };
        let juvenile = StageConfig::default();
        let adult = StageConfig {
            color: ADULT_COLOR,
            ..StageConfig::default()
        };

        Self {
            arena_width: WINDOW_WIDTH as f32,
            arena_height: WINDOW_HEIGHT as f32,
            egg,
            juvenile,
            adult,
            interaction: InteractionConfig::default(),
            initial_juveniles: INITIAL_JUVENILE_COUNT,
            initial_adults: INITIAL_ADULT_COUNT,
            seed: None,
        }
    }

    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_initial_population(mut self, juveniles: usize, adults: usize) -> Self {
        self.initial_juveniles = juveniles;
        self.initial_adults = adults;
        self
    }

    pub fn stage(&self, stage: LifeStage) -> &StageConfig {
        match stage {
            LifeStage::Egg => &self.egg,
            LifeStage::Juvenile => &self.juvenile,
            LifeStage::Adult => &self.adult,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_table_matches_fixed_ruleset() {
        let config = SimulationConfig::new();
        assert_eq!(config.stage(LifeStage::Egg).radius, 5.0);
        assert_eq!(config.stage(LifeStage::Egg).speed, 0.0);
        assert_eq!(config.stage(LifeStage::Juvenile).radius, 10.0);
        assert_eq!(config.stage(LifeStage::Adult).radius, 10.0);
        assert_ne!(
            config.stage(LifeStage::Juvenile).color,
            config.stage(LifeStage::Adult).color
        );
        assert_eq!(config.interaction.radius, 20.0);
        assert_eq!(config.initial_juveniles, 4);
        assert_eq!(config.initial_adults, 1);
    }

    #[test]
    fn builders_override_arena_and_seed() {
        let config = SimulationConfig::new()
            .with_arena(320.0, 240.0)
            .with_seed(7)
            .with_initial_population(0, 2);
        assert_eq!((config.arena_width, config.arena_height), (320.0, 240.0));
        assert_eq!(config.seed, Some(7));
        assert_eq!((config.initial_juveniles, config.initial_adults), (0, 2));
    }
}
// --- End of File: config.rs ---
