use anyhow::Result;
use itertools::Itertools;
use serde::{
    Deserialize,
    Serialize,
};
use skirmish_data::{
    Id,
    MoveData,
    Nature,
    SpeciesData,
    Stat,
    StatTable,
    Status,
    Type,
};
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    dex::Dex,
    error::{
        ValidationError,
        WrapOptionError,
        WrapResultError,
        general_error,
    },
    mons::{
        calculate_stats,
        validate_stat_inputs,
    },
};

/// Maximum number of moves a creature can know.
pub const MAX_MOVES: usize = 4;

/// Describes a creature to be built through a [`Dex`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureData {
    /// Nickname, used in the event log.
    pub name: String,
    /// Species name.
    pub species: String,
    pub level: u8,
    #[serde(default)]
    pub nature: Nature,
    #[serde(default)]
    pub ivs: StatTable,
    #[serde(default)]
    pub evs: StatTable,
    /// Move names, in slot order.
    pub moves: Vec<String>,
}

/// Generates individual values uniformly in `[0, 31]`.
pub fn random_ivs(prng: &mut dyn PseudoRandomNumberGenerator) -> StatTable {
    StatTable::from_iter(
        Stat::ALL.map(|stat| (stat, rand_util::range_inclusive(prng, 0, 31) as u16)),
    )
}

/// Generates effort values uniformly in `[0, 80)`, which always fits under the total limit.
pub fn random_evs(prng: &mut dyn PseudoRandomNumberGenerator) -> StatTable {
    StatTable::from_iter(Stat::ALL.map(|stat| (stat, rand_util::range(prng, 0, 80) as u16)))
}

/// How long the current status lasts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StatusDuration {
    /// No status.
    #[default]
    None,
    /// Lasts until cured.
    Persistent,
    /// Cured when the countdown reaches zero.
    Turns(u8),
}

/// A known move and its remaining uses.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveSlot {
    pub data: MoveData,
    pub pp: u8,
}

impl MoveSlot {
    pub fn new(data: MoveData) -> Self {
        let pp = data.pp;
        Self { data, pp }
    }

    pub fn id(&self) -> Id {
        Id::from(self.data.name.as_str())
    }
}

/// A single creature, with stats fixed at construction and mutable combat state.
#[derive(Debug, Clone)]
pub struct Creature {
    name: String,
    species: SpeciesData,
    level: u8,
    nature: Nature,
    ivs: StatTable,
    evs: StatTable,
    stats: StatTable,
    move_slots: [Option<MoveSlot>; MAX_MOVES],

    hp: u16,
    status: Option<Status>,
    status_duration: StatusDuration,
}

impl Creature {
    /// Builds a creature from already resolved species and move data.
    ///
    /// Fails with a [`ValidationError`] listing every problem with the input.
    pub fn new(data: &CreatureData, species: SpeciesData, moves: Vec<MoveData>) -> Result<Self> {
        let mut problems = ValidationError::new();
        validate_stat_inputs(
            &species.base_stats,
            &data.ivs,
            &data.evs,
            data.level,
            &mut problems,
        );
        if moves.is_empty() {
            problems.add_problem("creature must know at least one move");
        }
        if moves.len() > MAX_MOVES {
            problems.add_problem(format!(
                "creature cannot know more than {MAX_MOVES} moves"
            ));
        }
        for (id, _) in moves
            .iter()
            .map(|data| Id::from(data.name.as_str()))
            .counts()
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .sorted()
        {
            problems.add_problem(format!("move {id} is known more than once"));
        }
        problems
            .into_result()
            .wrap_error_with_format(format_args!("invalid creature {}", data.name))?;

        let stats = calculate_stats(
            &species.base_stats,
            &data.ivs,
            &data.evs,
            data.level,
            data.nature,
        );
        let mut move_slots: [Option<MoveSlot>; MAX_MOVES] = Default::default();
        for (slot, data) in move_slots.iter_mut().zip(moves) {
            *slot = Some(MoveSlot::new(data));
        }
        Ok(Self {
            name: data.name.clone(),
            species,
            level: data.level,
            nature: data.nature,
            ivs: data.ivs.clone(),
            evs: data.evs.clone(),
            hp: stats.hp,
            stats,
            move_slots,
            status: None,
            status_duration: StatusDuration::None,
        })
    }

    /// Builds a creature, looking up its species and moves by name.
    pub fn from_data(data: &CreatureData, dex: &Dex) -> Result<Self> {
        let species = dex.species(&data.species)?;
        let moves = data
            .moves
            .iter()
            .map(|name| dex.move_data(name))
            .collect::<Result<Vec<_>>>()?;
        Self::new(data, species, moves)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &SpeciesData {
        &self.species
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn nature(&self) -> Nature {
        self.nature
    }

    pub fn ivs(&self) -> &StatTable {
        &self.ivs
    }

    pub fn evs(&self) -> &StatTable {
        &self.evs
    }

    /// Derived stats. The HP entry is the maximum HP.
    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn stat(&self, stat: Stat) -> u16 {
        self.stats.get(stat)
    }

    pub fn max_hp(&self) -> u16 {
        self.stats.hp
    }

    pub fn hp(&self) -> u16 {
        self.hp
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn types(&self) -> impl Iterator<Item = Type> + '_ {
        self.species.types()
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn status_duration(&self) -> StatusDuration {
        self.status_duration
    }

    pub fn move_slots(&self) -> &[Option<MoveSlot>; MAX_MOVES] {
        &self.move_slots
    }

    /// Iterates over the known moves.
    pub fn moves(&self) -> impl Iterator<Item = &MoveSlot> {
        self.move_slots.iter().flatten()
    }

    fn move_slot_mut(&mut self, id: &Id) -> Option<&mut MoveSlot> {
        self.move_slots
            .iter_mut()
            .flatten()
            .find(|slot| slot.id() == *id)
    }

    /// Remaining uses of the named move, if known.
    pub fn pp(&self, name: &str) -> Option<u8> {
        let id = Id::from(name);
        self.moves().find(|slot| slot.id() == id).map(|slot| slot.pp)
    }

    /// Looks up a move the creature can use, without spending it.
    ///
    /// Fails if the move is not known or has no uses left.
    pub fn usable_move(&self, name: &str) -> Result<&MoveData> {
        let id = Id::from(name);
        let slot = self
            .moves()
            .find(|slot| slot.id() == id)
            .wrap_not_found_error(format_args!("move {name} on {}", self.name))?;
        if slot.pp == 0 {
            return Err(general_error(format!(
                "{} has no PP left for {}",
                self.name, slot.data.name
            )));
        }
        Ok(&slot.data)
    }

    /// Spends one use of the named move, returning its data.
    pub fn use_move(&mut self, name: &str) -> Result<MoveData> {
        let data = self.usable_move(name)?.clone();
        if let Some(slot) = self.move_slot_mut(&Id::from(name)) {
            slot.pp -= 1;
        }
        Ok(data)
    }

    /// Adjusts HP by a signed amount, clamped to `[0, max HP]`.
    ///
    /// Returns the change that actually took place.
    pub fn adjust_hp(&mut self, delta: i32) -> i32 {
        let before = self.hp as i32;
        let after = (before + delta).clamp(0, self.max_hp() as i32);
        self.hp = after as u16;
        after - before
    }

    /// Deals damage, returning the HP actually lost.
    pub fn damage(&mut self, amount: u16) -> u16 {
        (-self.adjust_hp(-(amount as i32))) as u16
    }

    /// Restores HP, returning the HP actually gained.
    pub fn heal(&mut self, amount: u16) -> u16 {
        self.adjust_hp(amount as i32) as u16
    }

    /// Inflicts a status if the creature has none.
    ///
    /// Sleep lasts 1 to 3 turns, drawn from the generator. Every other status lasts until cured.
    /// Returns whether the status was applied.
    pub fn set_status(
        &mut self,
        status: Status,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> bool {
        if self.status.is_some() {
            return false;
        }
        self.status_duration = match status {
            Status::Sleep => StatusDuration::Turns(rand_util::range_inclusive(prng, 1, 3) as u8),
            Status::Burn
            | Status::Freeze
            | Status::Paralysis
            | Status::Poison
            | Status::BadPoison => StatusDuration::Persistent,
        };
        self.status = Some(status);
        true
    }

    /// Cures the current status, returning it.
    pub fn cure_status(&mut self) -> Option<Status> {
        self.status_duration = StatusDuration::None;
        self.status.take()
    }

    /// Counts down a timed status, curing it when the countdown runs out.
    ///
    /// Returns the cured status, if any.
    pub fn tick_status_duration(&mut self) -> Option<Status> {
        match self.status_duration {
            StatusDuration::Turns(turns) => {
                let turns = turns.saturating_sub(1);
                if turns == 0 {
                    self.cure_status()
                } else {
                    self.status_duration = StatusDuration::Turns(turns);
                    None
                }
            }
            StatusDuration::None | StatusDuration::Persistent => None,
        }
    }

    /// Restores full HP, clears status, and replenishes every move.
    pub fn reset(&mut self) {
        self.hp = self.max_hp();
        self.cure_status();
        for slot in self.move_slots.iter_mut().flatten() {
            slot.pp = slot.data.pp;
        }
    }
}
