use glam::{Vec2, Vec4};
use std::fmt;

use crate::config::StageConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LifeStage {
    Egg,
    Juvenile,
    Adult,
}

impl LifeStage {
    #[inline]
    pub fn is_mobile(self) -> bool {
        !matches!(self, LifeStage::Egg)
    }

    /// Adult/Juvenile pairings lay eggs, in either order.
    #[inline]
    pub fn breeds_with(self, other: LifeStage) -> bool {
        matches!(
            (self, other),
            (LifeStage::Adult, LifeStage::Juvenile) | (LifeStage::Juvenile, LifeStage::Adult)
        )
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifeStage::Egg => "Egg",
            LifeStage::Juvenile => "Juvenile",
            LifeStage::Adult => "Adult",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub stage: LifeStage,
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub age: f32,
    pub color: Vec4, // Display only
}

impl Unit {
    pub fn new(stage: LifeStage, position: Vec2, velocity: Vec2, config: &StageConfig) -> Self {
        // Eggs never carry velocity
        let velocity = if stage.is_mobile() { velocity } else { Vec2::ZERO };
        Self {
            stage,
            position,
            velocity,
            radius: config.radius,
            age: 0.0,
            color: Vec4::from(config.color),
        }
    }

    /// Switches stage and takes on that stage's radius and color.
    pub fn become_stage(&mut self, stage: LifeStage, config: &StageConfig) {
        self.stage = stage;
        self.radius = config.radius;
        self.color = Vec4::from(config.color);
    }
}

/// Read-only view handed to the renderer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct UnitView {
    pub position: Vec2,
    pub radius: f32,
    pub color: Vec4,
}

impl From<&Unit> for UnitView {
    fn from(unit: &Unit) -> Self {
        Self {
            position: unit.position,
            radius: unit.radius,
            color: unit.color,
        }
    }
}

/// Interaction unit snapshot. Zeroed with `present == false` when absent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InteractionView {
    pub position: Vec2,
    pub radius: f32,
    pub color: Vec4,
    pub present: bool,
}

impl InteractionView {
    pub const ABSENT: Self = Self {
        position: Vec2::ZERO,
        radius: 0.0,
        color: Vec4::ZERO,
        present: false,
    };
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub eggs: usize,
    pub juveniles: usize,
    pub adults: usize,
}

impl StageCounts {
    pub fn tally<'a>(units: impl IntoIterator<Item = &'a Unit>) -> Self {
        let mut counts = Self::default();
        for unit in units {
            match unit.stage {
                LifeStage::Egg => counts.eggs += 1,
                LifeStage::Juvenile => counts.juveniles += 1,
                LifeStage::Adult => counts.adults += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.eggs + self.juveniles + self.adults
    }
}
