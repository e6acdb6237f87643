use anyhow::Result;
use skirmish_data::{
    Boost,
    MoveData,
    Status,
    TypeChart,
};
use skirmish_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    battle::{
        CombatEngineOptions,
        CombatOptions,
        ParticipantContext,
        Side,
        SpeedOrderable,
        apply_effect,
        apply_residual,
        calculate_damage,
        compare_priority,
        does_hit,
        effective_speed,
        effects::health,
    },
    battle_event,
    dex::Dex,
    error::{
        WrapOptionError,
        WrapResultError,
        general_error,
    },
    log::EventLog,
};

/// Chance for paralysis to prevent a creature from acting.
pub const PARALYSIS_BLOCK_CHANCE: (u64, u64) = (1, 4);

/// A move selected for the round, waiting to be applied.
struct Action {
    /// 0 for side 1, 1 for side 2.
    side: u32,
    move_data: MoveData,
    speed: f64,
}

impl SpeedOrderable for Action {
    fn order(&self) -> u32 {
        self.side
    }

    fn priority(&self) -> i8 {
        self.move_data.priority
    }

    fn speed(&self) -> f64 {
        self.speed
    }
}

/// Resolves combat between two sides, one round at a time.
///
/// Owns the random number generator and the event log. The sides themselves are owned by the
/// caller and passed into each operation.
pub struct CombatManager {
    round: u32,
    prng: Box<dyn PseudoRandomNumberGenerator>,
    log: EventLog,
    type_chart: TypeChart,
    engine_options: CombatEngineOptions,
}

impl CombatManager {
    pub fn new(options: CombatOptions, dex: &Dex) -> Result<Self> {
        let prng = (options.engine.rng_factory)(options.seed);
        log::debug!("combat manager seeded with {}", prng.initial_seed());
        Ok(Self {
            round: 0,
            prng,
            log: EventLog::new(options.engine.record_events),
            type_chart: dex
                .type_chart()
                .wrap_error_with_message("failed to load type chart")?,
            engine_options: options.engine,
        })
    }

    /// Number of rounds executed since the last reset.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn engine_options(&self) -> &CombatEngineOptions {
        &self.engine_options
    }

    pub fn prng(&mut self) -> &mut dyn PseudoRandomNumberGenerator {
        self.prng.as_mut()
    }

    /// Every event since the last reset.
    pub fn full_log(&self) -> impl Iterator<Item = &str> {
        self.log.logs()
    }

    pub fn has_new_logs(&self) -> bool {
        self.log.has_new_messages()
    }

    /// Reads out events added since the last call.
    pub fn new_logs(&mut self) -> impl Iterator<Item = &str> {
        self.log.read_out()
    }

    /// Starts a new match.
    ///
    /// Clears the round counter and the log, then asks each side for its first creature. A side
    /// that does not send out a creature is an error.
    pub fn reset(&mut self, side_1: &mut Side, side_2: &mut Side) -> Result<()> {
        self.round = 0;
        self.log.clear();
        side_1.withdraw();
        side_2.withdraw();
        for side in [side_1, side_2] {
            let index = side.request_next_creature(None)?.wrap_expectation(format_args!(
                "side {} did not send out a creature",
                side.name()
            ))?;
            self.switch(side, index)?;
        }
        Ok(())
    }

    /// Sends in the creature at the given roster index.
    pub fn switch(&mut self, side: &mut Side, index: usize) -> Result<()> {
        side.switch_in(index)?;
        let context = side
            .context()
            .wrap_expectation("side has no active creature after switching")?;
        log::debug!("{} sent out {}", context.side, context.creature.name());
        self.log.push(battle_event!(
            "switch",
            format!("mon:{}", context.ident()),
            format!("species:{}", context.creature.species().name),
            health(&context),
        ));
        Ok(())
    }

    /// Executes one round.
    ///
    /// Both sides must have an active creature. Both selections are validated before any PP is
    /// spent, so a failed selection leaves the match unchanged.
    pub fn step_round(&mut self, side_1: &mut Side, side_2: &mut Side) -> Result<()> {
        for side in [&*side_1, &*side_2] {
            if side.is_defeated() {
                return Err(general_error(format!(
                    "side {} has no active creature",
                    side.name()
                )));
            }
        }

        let mut actions = [
            self.select_action(0, side_1, side_2)?,
            self.select_action(1, side_2, side_1)?,
        ];
        for action in &actions {
            let side = match action.side {
                0 => &mut *side_1,
                _ => &mut *side_2,
            };
            side.context()
                .wrap_expectation("side has no active creature")?
                .creature
                .use_move(&action.move_data.name)?;
        }

        self.round += 1;
        log::debug!("starting round {}", self.round);
        self.log
            .push(battle_event!("turn", format!("turn:{}", self.round)));

        actions.sort_by(compare_priority);
        for action in actions {
            let (user, target) = match action.side {
                0 => (&mut *side_1, &mut *side_2),
                _ => (&mut *side_2, &mut *side_1),
            };
            if !user.active().is_some_and(|creature| creature.is_alive()) {
                log::debug!("{} cannot act after fainting", user.name());
                continue;
            }
            self.apply_action(user, target, &action.move_data)?;
        }

        for side in [&mut *side_1, &mut *side_2] {
            if let Some(mut context) = side.context() {
                self.residual(&mut context);
            }
        }

        self.faint_and_replace(side_1, side_2)
    }

    fn select_action(&self, order: u32, user: &mut Side, opponent: &Side) -> Result<Action> {
        let opponent = opponent
            .view()
            .wrap_expectation("opponent has no active creature")?;
        let name = user.request_move(&opponent)?;
        let user = user.view().wrap_expectation("side has no active creature")?;
        let move_data = user
            .creature
            .usable_move(&name)
            .wrap_error_with_format(format_args!("{} cannot use {name}", user.ident()))?
            .clone();
        let speed = effective_speed(&user, self.engine_options.paralysis_speed_penalty);
        log::trace!(
            "{} selected {} (priority {}, speed {speed})",
            user.ident(),
            move_data.name,
            move_data.priority
        );
        Ok(Action {
            side: order,
            move_data,
            speed,
        })
    }

    fn apply_action(
        &mut self,
        user: &mut Side,
        target: &mut Side,
        move_data: &MoveData,
    ) -> Result<()> {
        let mut attacker = user
            .context()
            .wrap_expectation("attacker has no active creature")?;
        let mut defender = target
            .context()
            .wrap_expectation("defender has no active creature")?;
        let prng = self.prng.as_mut();

        if attacker.creature.status() == Some(Status::Paralysis) {
            let (numerator, denominator) = PARALYSIS_BLOCK_CHANCE;
            if rand_util::chance(prng, numerator, denominator) {
                self.log.push(battle_event!(
                    "cant",
                    format!("mon:{}", attacker.ident()),
                    "from:status:par",
                ));
                return Ok(());
            }
        }

        self.log.push(battle_event!(
            "move",
            format!("mon:{}", attacker.ident()),
            format!("name:{}", move_data.name),
            format!("target:{}", defender.ident()),
        ));

        if move_data.is_attack() {
            if does_hit(
                prng,
                move_data.accuracy,
                attacker.participant.boost(Boost::Accuracy),
                defender.participant.boost(Boost::Evasion),
            ) {
                let damage = calculate_damage(
                    prng,
                    self.engine_options.randomize_base_damage,
                    &self.type_chart,
                    move_data,
                    &attacker.as_view(),
                    &defender.as_view(),
                )
                .wrap_error_with_format(format_args!(
                    "failed to calculate damage for {}",
                    move_data.name
                ))?;
                if damage.crit {
                    self.log
                        .push(battle_event!("crit", format!("mon:{}", defender.ident())));
                }
                defender.creature.damage(damage.amount);
                self.log.push(battle_event!(
                    "damage",
                    format!("mon:{}", defender.ident()),
                    health(&defender),
                ));

                let drained = move_data
                    .drain()
                    .map_or(0, |drain| attacker.creature.heal(drain.resolve(damage.amount)));
                if drained > 0 {
                    self.log.push(battle_event!(
                        "heal",
                        format!("mon:{}", attacker.ident()),
                        health(&attacker),
                        "from:drain",
                    ));
                }
            } else {
                self.log.push(battle_event!(
                    "miss",
                    format!("mon:{}", attacker.ident()),
                    format!("target:{}", defender.ident()),
                ));
            }
        }

        for effect in &move_data.user_effects {
            apply_effect(&mut attacker, effect, prng, &mut self.log);
        }
        for effect in &move_data.target_effects {
            apply_effect(&mut defender, effect, prng, &mut self.log);
        }
        for effect in &move_data.field_effects {
            log::trace!("ignoring field effect {effect} of {}", move_data.name);
        }
        Ok(())
    }

    fn residual(&mut self, context: &mut ParticipantContext<'_>) {
        let outcome = apply_residual(context, self.prng.as_mut());
        if let Some((status, _)) = outcome.damage {
            self.log.push(battle_event!(
                "damage",
                format!("mon:{}", context.ident()),
                health(context),
                format!("from:status:{status}"),
            ));
        }
        if let Some(status) = outcome.cured {
            self.log.push(battle_event!(
                "curestatus",
                format!("mon:{}", context.ident()),
                format!("status:{status}"),
            ));
        }
    }

    fn faint_and_replace(&mut self, side_1: &mut Side, side_2: &mut Side) -> Result<()> {
        let mut fainted = [false, false];
        for (i, side) in [&mut *side_1, &mut *side_2].into_iter().enumerate() {
            if let Some(view) = side.view() {
                if !view.creature.is_alive() {
                    self.log
                        .push(battle_event!("faint", format!("mon:{}", view.ident())));
                    fainted[i] = true;
                }
            }
            if fainted[i] {
                side.withdraw();
            }
        }

        if fainted[0] {
            self.replace(side_1, side_2)?;
        }
        if fainted[1] {
            self.replace(side_2, side_1)?;
        }
        Ok(())
    }

    fn replace(&mut self, side: &mut Side, opponent: &Side) -> Result<()> {
        let opponent = opponent.view();
        match side.request_next_creature(opponent.as_ref())? {
            Some(index) => self.switch(side, index),
            None => {
                log::debug!("side {} has no replacement", side.name());
                Ok(())
            }
        }
    }
}
