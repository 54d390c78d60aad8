use rand::Rng;

use super::unit::{LifeStage, Unit};
use crate::config::SimulationConfig;
use crate::constants::{ADULT_HATCH_ODDS_MAX, HATCH_AGE_SECS};
use crate::utils::random_velocity;

/// Ages the unit and hatches it once it is an egg old enough.
/// Returns the new stage when a hatch happened this call.
pub fn advance<R: Rng + ?Sized>(
    unit: &mut Unit,
    delta_time: f32,
    config: &SimulationConfig,
    rng: &mut R,
) -> Option<LifeStage> {
    unit.age += delta_time.max(0.0);

    if unit.stage != LifeStage::Egg || unit.age < HATCH_AGE_SECS {
        return None;
    }

    let stage = hatch_outcome(rng);
    let stage_config = config.stage(stage);
    unit.become_stage(stage, stage_config);
    unit.velocity = random_velocity(rng, stage_config.speed);
    log::debug!("Egg at {:?} hatched into {}", unit.position, stage);
    Some(stage)
}

/// One draw in 0..=4; only zero yields an adult.
pub fn hatch_outcome<R: Rng + ?Sized>(rng: &mut R) -> LifeStage {
    if rng.gen_range(0..=ADULT_HATCH_ODDS_MAX) == 0 {
        LifeStage::Adult
    } else {
        LifeStage::Juvenile
    }
}
