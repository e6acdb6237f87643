use anyhow::Result;
use skirmish::{
    battle::{
        CombatEngineOptions,
        CombatOptions,
        RandomizeBaseDamage,
        Side,
    },
    dex::Dex,
    mons::{
        Creature,
        CreatureData,
    },
};

use crate::{
    ScriptedPlayer,
    controlled_rng_factory,
};

/// Builds a side from creature descriptions.
pub fn make_side(
    dex: &Dex,
    name: &str,
    roster: &[CreatureData],
    player: ScriptedPlayer,
) -> Result<Side> {
    let roster = roster
        .iter()
        .map(|data| Creature::from_data(data, dex))
        .collect::<Result<Vec<_>>>()?;
    Ok(Side::new(name, roster, player.boxed()))
}

/// Options using a [`crate::ControlledRandomNumberGenerator`].
pub fn controlled_options(randomize_base_damage: RandomizeBaseDamage) -> CombatOptions {
    CombatOptions {
        seed: Some(0),
        engine: CombatEngineOptions {
            rng_factory: controlled_rng_factory,
            randomize_base_damage,
            ..Default::default()
        },
    }
}
