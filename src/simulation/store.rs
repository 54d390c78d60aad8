use glam::{Vec2, Vec4};

use super::unit::{InteractionView, LifeStage, Unit, UnitView};
use crate::config::{InteractionConfig, StageConfig};

/// Owns the bounded unit population plus the single optional interaction unit.
#[derive(Debug, Clone)]
pub struct EntityStore {
    units: Vec<Unit>,
    interaction: Option<Unit>,
    capacity: usize,
}

impl EntityStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            units: Vec::with_capacity(capacity),
            interaction: None,
            capacity: capacity.max(1),
        }
    }

    /// Inserts a unit, evicting the oldest first when full. Never rejects.
    /// Returns the index of the new unit.
    pub fn spawn(
        &mut self,
        stage: LifeStage,
        position: Vec2,
        velocity: Vec2,
        config: &StageConfig,
    ) -> usize {
        while self.units.len() >= self.capacity {
            log::warn!(
                "Unit capacity {} reached, evicting oldest before spawning {}",
                self.capacity,
                stage
            );
            if self.evict_oldest().is_none() {
                break;
            }
        }
        self.units.push(Unit::new(stage, position, velocity, config));
        log::info!("Spawned {} at {:?}. Total count: {}", stage, position, self.units.len());
        self.units.len() - 1
    }

    /// Removes the unit with the greatest age (first one on ties).
    pub fn evict_oldest(&mut self) -> Option<Unit> {
        let oldest = self
            .units
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f32)>, (index, unit)| match best {
                Some((_, age)) if age >= unit.age => best,
                _ => Some((index, unit.age)),
            });

        match oldest {
            Some((index, age)) => {
                let removed = self.units.remove(index);
                log::debug!(
                    "Evicted {} with age {:.2}s. Current count: {}",
                    removed.stage,
                    age,
                    self.units.len()
                );
                Some(removed)
            }
            None => {
                log::warn!("Eviction requested but there are no units to remove");
                None
            }
        }
    }

    /// Replaces any existing interaction unit with a fresh one at `position`.
    pub fn set_interaction(&mut self, position: Vec2, config: &InteractionConfig) {
        self.interaction = Some(Unit {
            stage: LifeStage::Juvenile, // Cosmetic only
            position,
            velocity: Vec2::ZERO,
            radius: config.radius,
            age: 0.0,
            color: Vec4::from(config.color),
        });
    }

    /// Returns true if an interaction unit was present.
    pub fn clear_interaction(&mut self) -> bool {
        self.interaction.take().is_some()
    }

    pub fn clear(&mut self) {
        self.units.clear();
        self.interaction = None;
    }

    #[inline]
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    #[inline]
    pub fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    /// Units and the interaction slot borrowed together for the interaction pass.
    pub(crate) fn split_interaction_mut(&mut self) -> (&mut [Unit], Option<&Unit>) {
        (&mut self.units, self.interaction.as_ref())
    }

    #[inline]
    pub fn interaction(&self) -> Option<&Unit> {
        self.interaction.as_ref()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.units.iter().map(|u| u.position).collect()
    }

    pub fn radii(&self) -> Vec<f32> {
        self.units.iter().map(|u| u.radius).collect()
    }

    pub fn unit_views(&self) -> Vec<UnitView> {
        self.units.iter().map(UnitView::from).collect()
    }

    pub fn interaction_view(&self) -> InteractionView {
        match &self.interaction {
            Some(unit) => InteractionView {
                position: unit.position,
                radius: unit.radius,
                color: unit.color,
                present: true,
            },
            None => InteractionView::ABSENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;

    fn store_with_ages(ages: &[f32]) -> EntityStore {
        let config = SimulationConfig::new();
        let mut store = EntityStore::new(ages.len().max(1));
        for (i, age) in ages.iter().enumerate() {
            let index = store.spawn(
                LifeStage::Juvenile,
                Vec2::new(20.0 * (i as f32 + 1.0), 20.0),
                Vec2::X,
                &config.juvenile,
            );
            store.units_mut()[index].age = *age;
        }
        store
    }

    #[test]
    fn spawn_takes_stage_shape() {
        let config = SimulationConfig::new();
        let mut store = EntityStore::new(10);
        let egg = store.spawn(LifeStage::Egg, Vec2::new(50.0, 50.0), Vec2::ONE, &config.egg);
        let adult = store.spawn(LifeStage::Adult, Vec2::new(80.0, 50.0), Vec2::X, &config.adult);

        let units = store.units();
        assert_eq!(units[egg].radius, 5.0);
        assert_eq!(units[egg].velocity, Vec2::ZERO);
        assert_eq!(units[adult].radius, 10.0);
        assert_eq!(units[adult].velocity, Vec2::X);
        assert_eq!(units[adult].age, 0.0);
    }

    #[test]
    fn spawn_at_capacity_evicts_oldest() {
        let config = SimulationConfig::new();
        let mut store = store_with_ages(&[1.0, 7.0, 3.0]);
        let oldest_position = store.units()[1].position;

        store.spawn(LifeStage::Egg, Vec2::new(5.0, 5.0), Vec2::ZERO, &config.egg);

        assert_eq!(store.len(), 3);
        assert!(store.units().iter().all(|u| u.position != oldest_position));
        assert_eq!(store.units()[2].stage, LifeStage::Egg);
    }

    #[test]
    fn evict_oldest_prefers_first_on_ties() {
        let mut store = store_with_ages(&[4.0, 4.0, 2.0]);
        let first = store.units()[0].position;
        let removed = store.evict_oldest().map(|u| u.position);
        assert_eq!(removed, Some(first));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn evict_oldest_on_empty_store_is_noop() {
        let mut store = EntityStore::new(4);
        assert!(store.evict_oldest().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn interaction_slot_replaces_and_clears() {
        let config = SimulationConfig::new();
        let mut store = EntityStore::new(4);
        assert_eq!(store.interaction_view(), InteractionView::ABSENT);

        store.set_interaction(Vec2::new(10.0, 10.0), &config.interaction);
        store.set_interaction(Vec2::new(30.0, 40.0), &config.interaction);
        let view = store.interaction_view();
        assert!(view.present);
        assert_eq!(view.position, Vec2::new(30.0, 40.0));
        assert_eq!(view.radius, 20.0);
        assert!(store.is_empty());

        assert!(store.clear_interaction());
        assert!(!store.clear_interaction());
        assert_eq!(store.interaction_view().radius, 0.0);
    }

    #[test]
    fn snapshots_follow_unit_order() {
        let store = store_with_ages(&[0.0, 0.0]);
        assert_eq!(
            store.positions(),
            vec![Vec2::new(20.0, 20.0), Vec2::new(40.0, 20.0)]
        );
        assert_eq!(store.radii(), vec![10.0, 10.0]);
        assert_eq!(store.unit_views().len(), 2);
    }
}
