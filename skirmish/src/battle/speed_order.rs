use std::cmp::Ordering;

use skirmish_data::{
    Boost,
    Stat,
    Status,
};

use crate::battle::{
    ParticipantView,
    effective_stat,
};

/// Speed multiplier for a paralyzed creature.
pub const PARALYSIS_SPEED_MODIFIER: f64 = 0.5;

/// An object that can be ordered by speed.
pub trait SpeedOrderable {
    /// Order. Lowest order goes first.
    fn order(&self) -> u32;
    /// Priority. Highest priority goes first.
    fn priority(&self) -> i8;
    /// Speed. Highest speed goes first.
    fn speed(&self) -> f64;
}

impl<T> SpeedOrderable for &'_ T
where
    T: SpeedOrderable,
{
    #[inline]
    fn order(&self) -> u32 {
        (*self).order()
    }
    #[inline]
    fn priority(&self) -> i8 {
        (*self).priority()
    }
    #[inline]
    fn speed(&self) -> f64 {
        (*self).speed()
    }
}

/// Compares the priority of two objects.
///
/// [`Ordering::Less`] means `a` goes first.
pub fn compare_priority<T>(a: &T, b: &T) -> Ordering
where
    T: SpeedOrderable,
{
    // Higher priority first.
    b.priority().cmp(&a.priority()).then_with(|| {
        // Higher speed first.
        b.speed()
            .total_cmp(&a.speed())
            // Lower order first.
            .then_with(|| a.order().cmp(&b.order()))
    })
}

/// Speed used for ordering actions, with the speed stage and paralysis applied.
pub fn effective_speed(view: &ParticipantView<'_>, paralysis_penalty: bool) -> f64 {
    let speed = effective_stat(view, Stat::Spe, Boost::Spe);
    if paralysis_penalty && view.creature.status() == Some(Status::Paralysis) {
        speed * PARALYSIS_SPEED_MODIFIER
    } else {
        speed
    }
}
