//! Pairwise circle collisions with impulse response, plus the pointer
//! interaction push.

use glam::Vec2;

use super::unit::Unit;
use crate::utils::circles_touch;

/// What happened when a single pair was checked.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PairOutcome {
    /// Not overlapping.
    Apart,
    /// Centers coincide; no normal exists, pair skipped this frame.
    Coincident,
    /// Overlapping but already moving apart; left untouched.
    Separating,
    /// Impulse and positional correction applied. `clutch` holds the egg
    /// position when the pair is an Adult/Juvenile pairing.
    Resolved { clutch: Option<Vec2> },
}

/// Resolves one overlapping pair in place.
///
/// Inertia is proportional to radius. Eggs take part in positional
/// correction but never pick up velocity.
pub fn resolve_pair(a: &mut Unit, b: &mut Unit, restitution: f32) -> PairOutcome {
    let delta = b.position - a.position;
    let distance = delta.length();
    if distance >= a.radius + b.radius {
        return PairOutcome::Apart;
    }
    if distance <= f32::EPSILON {
        return PairOutcome::Coincident;
    }

    let normal = delta / distance;
    let approach = (b.velocity - a.velocity).dot(normal);
    if approach > 0.0 {
        return PairOutcome::Separating;
    }

    let impulse = -(1.0 + restitution) * approach / (1.0 / a.radius + 1.0 / b.radius);
    if a.stage.is_mobile() {
        a.velocity -= impulse * normal / a.radius;
    }
    if b.stage.is_mobile() {
        b.velocity += impulse * normal / b.radius;
    }

    let half_overlap = (a.radius + b.radius - distance) * 0.5;
    a.position -= half_overlap * normal;
    b.position += half_overlap * normal;

    let clutch = a
        .stage
        .breeds_with(b.stage)
        .then(|| (a.position + b.position) * 0.5);
    PairOutcome::Resolved { clutch }
}

/// Runs `resolve_pair` over every unordered pair (i < j) and returns the
/// positions where eggs should be laid, in pair order.
pub fn resolve_pairs(units: &mut [Unit], restitution: f32) -> Vec<Vec2> {
    let mut clutches = Vec::new();
    for i in 0..units.len() {
        let (head, tail) = units.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if let PairOutcome::Resolved { clutch: Some(at) } = resolve_pair(a, b, restitution) {
                clutches.push(at);
            }
        }
    }
    clutches
}

/// Pushes the first unit touching the interaction circle directly away from
/// its center at `factor` times its current speed. Returns that unit's index.
pub fn deflect_from_interaction(
    units: &mut [Unit],
    interaction: &Unit,
    factor: f32,
) -> Option<usize> {
    let index = first_contact(units, interaction)?;
    let unit = &mut units[index];
    let away = (unit.position - interaction.position).normalize_or_zero();
    let speed = unit.velocity.length();
    unit.velocity = away * speed * factor;
    Some(index)
}

/// Index of the first unit in contact with the interaction circle.
pub fn first_contact(units: &[Unit], interaction: &Unit) -> Option<usize> {
    units.iter().position(|unit| {
        circles_touch(
            unit.position,
            unit.radius,
            interaction.position,
            interaction.radius,
        )
    })
}
