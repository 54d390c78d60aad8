use super::unit::{LifeStage, StageCounts};
use crate::constants::JUVENILE_PER_ADULT_RATIO;

/// Picks at most one stage to top up this frame.
///
/// Juveniles are replenished while they number fewer than four per adult;
/// otherwise an adult is added when none are left. Nothing is added once the
/// population has reached `capacity`.
pub fn replenishment(counts: StageCounts, capacity: usize) -> Option<LifeStage> {
    if counts.total() >= capacity {
        return None;
    }
    if counts.juveniles < counts.adults * JUVENILE_PER_ADULT_RATIO {
        Some(LifeStage::Juvenile)
    } else if counts.adults == 0 {
        Some(LifeStage::Adult)
    } else {
        None
    }
}
