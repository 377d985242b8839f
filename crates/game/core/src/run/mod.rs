//! Run orchestration.
//!
//! A [`RunOrchestrator`] owns the player, the instantiated roster and the
//! encounter cursor for one run. It is built from an [`ArenaSetup`] and held
//! by the shell; there is no global run state.
//!
//! ```text
//! Preparing --start_run--> InEncounter --victory--> AwaitingAdvance --advance--> InEncounter
//!                               |                         |
//!                               +--defeat--> Finished <---+ (roster exhausted)
//! ```
mod errors;
mod events;
mod record;

pub use errors::RunError;
pub use events::RunEvent;
pub use record::{Rank, ResultRecord, RunOutcome, RunSummary};

use crate::combat::VictoryReward;
use crate::config::ArenaConfig;
use crate::engine::{Battle, BattleOutcome, BattlePhase, StepReport};
use crate::env::{ArenaSetup, RngOracle, SetupError};
use crate::market::{Market, MarketVisit, Transaction};
use crate::state::{Adversary, AdversaryProfile, Combatant, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RunPhase {
    /// Before the first encounter; the market is open.
    Preparing,
    InEncounter,
    /// An encounter was won and the next one has not begun.
    AwaitingAdvance,
    Finished,
}

/// Result of one [`RunOrchestrator::step`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunStep {
    pub report: StepReport,
    /// Run-level events caused by this step (rewards, finalization).
    pub events: Vec<RunEvent>,
}

pub struct RunOrchestrator {
    config: ArenaConfig,
    market: Market,
    player: Player,
    roster: Vec<Adversary>,
    cursor: usize,
    battle: Option<Battle>,
    phase: RunPhase,
    market_visits: u64,
    victories: usize,
    summary: Option<RunSummary>,
}

impl RunOrchestrator {
    /// Validates the setup and prepares a run. Nothing starts until
    /// [`start_run`](Self::start_run).
    pub fn new(setup: ArenaSetup) -> Result<Self, SetupError> {
        setup.validate()?;

        let ArenaSetup {
            config,
            player,
            roster,
            catalog,
        } = setup;

        Ok(Self {
            config,
            market: Market::new(catalog),
            player: player.instantiate(),
            roster: roster.iter().map(|entry| entry.instantiate()).collect(),
            cursor: 0,
            battle: None,
            phase: RunPhase::Preparing,
            market_visits: 0,
            victories: 0,
            summary: None,
        })
    }

    // ===== read access =====

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn market(&self) -> &Market {
        &self.market
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Zero-based index of the current encounter.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Enemy gallery, in encounter order.
    pub fn roster_profiles(&self) -> Vec<AdversaryProfile> {
        self.roster.iter().map(Adversary::profile).collect()
    }

    /// The adversary being fought, or the one just beaten while awaiting advance.
    pub fn current_adversary(&self) -> Option<&Adversary> {
        match self.phase {
            RunPhase::InEncounter | RunPhase::AwaitingAdvance => self.roster.get(self.cursor),
            RunPhase::Preparing | RunPhase::Finished => None,
        }
    }

    pub fn battle(&self) -> Option<&Battle> {
        self.battle.as_ref()
    }

    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    /// Number of market visits rolled so far.
    pub fn market_visits(&self) -> u64 {
        self.market_visits
    }

    pub fn is_finished(&self) -> bool {
        self.phase == RunPhase::Finished
    }

    // ===== market =====

    /// Rolls a new market visit. Each call counts as a separate visit.
    pub fn open_market(
        &mut self,
        rng: &impl RngOracle,
        seed: u64,
    ) -> Result<MarketVisit, RunError> {
        self.ensure_market_open()?;
        let visit = self
            .market
            .open_visit(rng, seed, self.market_visits, &self.config);
        self.market_visits += 1;
        Ok(visit)
    }

    /// Buys or returns `name` at the price of `visit`.
    pub fn toggle_item(
        &mut self,
        visit: &MarketVisit,
        name: &str,
    ) -> Result<Transaction, RunError> {
        self.ensure_market_open()?;
        Ok(visit.toggle(&mut self.player, name)?)
    }

    fn ensure_market_open(&self) -> Result<(), RunError> {
        if self.phase == RunPhase::Preparing {
            Ok(())
        } else {
            Err(RunError::MarketClosed { phase: self.phase })
        }
    }

    // ===== encounters =====

    /// Moves the cursor to the first adversary and begins that encounter.
    pub fn start_run(&mut self) -> Result<Vec<RunEvent>, RunError> {
        self.ensure_phase("start the run", RunPhase::Preparing)?;

        let mut events = vec![RunEvent::RunStarted {
            gladiator: self.player.name.clone(),
            encounters: self.roster.len(),
        }];
        events.push(self.begin_encounter(0)?);
        Ok(events)
    }

    /// Performs one half-turn of the current encounter.
    ///
    /// A victory pays the reward and waits for [`advance`](Self::advance).
    /// A defeat finalizes the run at once.
    pub fn step(&mut self) -> Result<RunStep, RunError> {
        self.ensure_phase("step", RunPhase::InEncounter)?;

        let index = self.cursor;
        let (Some(battle), Some(adversary)) = (self.battle.as_mut(), self.roster.get_mut(index))
        else {
            return Err(RunError::WrongPhase {
                operation: "step",
                phase: self.phase,
            });
        };
        let report = battle.step(&mut self.player, adversary);

        let mut events = Vec::new();
        match report.phase {
            BattlePhase::Resolved(BattleOutcome::Victory) => {
                let reward = VictoryReward::for_adversary(adversary, &self.config);
                let (adversary, is_boss) = (adversary.name.clone(), adversary.is_boss());
                self.player.add_score(reward.score);
                self.player.add_currency(reward.currency);
                self.victories += 1;
                events.push(RunEvent::EncounterWon {
                    index,
                    adversary,
                    is_boss,
                    reward,
                });
                if self.config.heal_between_encounters {
                    self.player.restore_to_full();
                    events.push(RunEvent::Healed {
                        hit_points: self.player.hit_points(),
                    });
                }
                self.phase = RunPhase::AwaitingAdvance;
            }
            BattlePhase::Resolved(BattleOutcome::Defeat) => {
                events.push(RunEvent::EncounterLost {
                    index,
                    adversary: adversary.name.clone(),
                });
                events.push(self.finalize(RunOutcome::Fallen));
            }
            BattlePhase::NotStarted | BattlePhase::PlayerTurn | BattlePhase::EnemyTurn => {}
        }

        Ok(RunStep { report, events })
    }

    /// Moves past a won encounter: begins the next one, or finalizes the run
    /// when the roster is exhausted.
    pub fn advance(&mut self) -> Result<Vec<RunEvent>, RunError> {
        self.ensure_phase("advance", RunPhase::AwaitingAdvance)?;

        let next = self.cursor + 1;
        if next < self.roster.len() {
            Ok(vec![self.begin_encounter(next)?])
        } else {
            self.cursor = next;
            Ok(vec![self.finalize(RunOutcome::Champion)])
        }
    }

    /// Plays the current encounter to resolution without pacing.
    pub fn play_encounter(&mut self) -> Result<Vec<RunStep>, RunError> {
        let mut steps = Vec::new();
        while self.phase == RunPhase::InEncounter {
            steps.push(self.step()?);
        }
        Ok(steps)
    }

    /// Starts the run if needed and plays it to the end without pacing.
    pub fn play_to_end(&mut self) -> Result<RunSummary, RunError> {
        if self.phase == RunPhase::Preparing {
            self.start_run()?;
        }
        loop {
            match self.phase {
                RunPhase::InEncounter => {
                    self.play_encounter()?;
                }
                RunPhase::AwaitingAdvance => {
                    self.advance()?;
                }
                RunPhase::Finished | RunPhase::Preparing => break,
            }
        }
        self.summary.clone().ok_or(RunError::WrongPhase {
            operation: "summarize",
            phase: self.phase,
        })
    }

    fn begin_encounter(&mut self, index: usize) -> Result<RunEvent, RunError> {
        let adversary = self.roster.get(index).ok_or(RunError::WrongPhase {
            operation: "begin an encounter",
            phase: self.phase,
        })?;
        let battle = Battle::new(&self.player, adversary)?;
        let profile = adversary.profile();

        self.cursor = index;
        self.battle = Some(battle);
        self.phase = RunPhase::InEncounter;
        Ok(RunEvent::EncounterStarted {
            index,
            adversary: profile,
        })
    }

    fn finalize(&mut self, outcome: RunOutcome) -> RunEvent {
        let record = ResultRecord::from_player(&self.player);
        let summary = RunSummary {
            rank: Rank::for_score(record.total_score, self.config.veteran_threshold),
            record,
            outcome,
            victories: self.victories,
        };
        self.battle = None;
        self.phase = RunPhase::Finished;
        self.summary = Some(summary.clone());
        RunEvent::RunFinished { summary }
    }

    fn ensure_phase(&self, operation: &'static str, expected: RunPhase) -> Result<(), RunError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RunError::WrongPhase {
                operation,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AdversaryTemplate, PcgRng, PlayerTemplate};
    use crate::state::{AssetRef, Item, ItemCategory, Rarity};

    fn player_template(hit_points: u32, base_attack: u32) -> PlayerTemplate {
        PlayerTemplate {
            name: "Apuleyo Diocles".into(),
            image: AssetRef::new("img/gladiator.png"),
            hit_points,
            base_attack,
            base_defense: 5,
            starting_currency: 500,
        }
    }

    fn catalog() -> Vec<Item> {
        vec![
            Item::new(
                "Trident",
                AssetRef::default(),
                250,
                ItemCategory::Weapon,
                30,
                Rarity::Rare,
            ),
            Item::new(
                "Galea",
                AssetRef::default(),
                80,
                ItemCategory::Armor,
                10,
                Rarity::Common,
            ),
        ]
    }

    fn setup(player: PlayerTemplate, roster: Vec<AdversaryTemplate>) -> ArenaSetup {
        ArenaSetup::new(ArenaConfig::default(), player, roster, catalog())
    }

    fn lion() -> AdversaryTemplate {
        AdversaryTemplate::regular("Lion", AssetRef::default(), 80, 20)
    }

    #[test]
    fn invalid_setup_is_refused() {
        let result = RunOrchestrator::new(setup(player_template(100, 10), Vec::new()));
        assert!(matches!(result, Err(SetupError::EmptyRoster)));
    }

    #[test]
    fn gallery_lists_roster_before_start() {
        let run = RunOrchestrator::new(setup(
            player_template(100, 10),
            vec![
                lion(),
                AdversaryTemplate::boss("Centurion", AssetRef::default(), 120, 30, Some(2.0)),
            ],
        ))
        .unwrap();

        let gallery = run.roster_profiles();
        assert_eq!(gallery.len(), 2);
        assert!(!gallery[0].is_boss);
        assert!(gallery[1].is_boss);
        assert_eq!(run.current_adversary(), None);
    }

    #[test]
    fn reference_scenario_finalizes_on_defeat() {
        let mut run = RunOrchestrator::new(setup(player_template(100, 10), vec![lion(), lion()]))
            .unwrap();

        let summary = run.play_to_end().unwrap();

        assert_eq!(summary.outcome, RunOutcome::Fallen);
        assert_eq!(summary.victories, 0);
        assert_eq!(summary.record.battle_score, 0);
        assert_eq!(summary.record.total_score, 500);
        assert_eq!(summary.rank, Rank::Veteran);
        assert!(run.is_finished());
        // The second lion is never fought.
        assert_eq!(run.cursor(), 0);
    }

    #[test]
    fn victory_pays_and_waits_for_advance() {
        let mut run = RunOrchestrator::new(setup(player_template(100, 40), vec![lion(), lion()]))
            .unwrap();
        run.start_run().unwrap();

        let steps = run.play_encounter().unwrap();

        let won = steps.last().unwrap().events.first().unwrap();
        assert!(matches!(
            won,
            RunEvent::EncounterWon {
                reward: VictoryReward {
                    score: 120,
                    currency: 5
                },
                ..
            }
        ));
        assert_eq!(run.phase(), RunPhase::AwaitingAdvance);
        assert_eq!(run.player().score(), 120);
        assert_eq!(run.player().currency(), 505);
        assert!(matches!(run.step(), Err(RunError::WrongPhase { .. })));

        let events = run.advance().unwrap();
        assert!(matches!(events[0], RunEvent::EncounterStarted { index: 1, .. }));
        assert_eq!(run.phase(), RunPhase::InEncounter);
    }

    #[test]
    fn clearing_the_roster_makes_a_champion() {
        let mut run = RunOrchestrator::new(setup(
            player_template(100, 60),
            vec![
                lion(),
                AdversaryTemplate::boss("Centurion", AssetRef::default(), 120, 30, Some(2.0)),
            ],
        ))
        .unwrap();

        let summary = run.play_to_end().unwrap();

        // Lion: 120 + 5. Centurion: floor(130 * 2.0) = 260 + 10.
        assert_eq!(summary.outcome, RunOutcome::Champion);
        assert_eq!(summary.victories, 2);
        assert_eq!(summary.record.battle_score, 380);
        assert_eq!(summary.record.remaining_currency, 515);
        assert_eq!(summary.record.total_score, 895);
        assert_eq!(run.current_adversary(), None);
    }

    #[test]
    fn hp_carries_over_unless_healing_is_enabled() {
        let roster = vec![lion(), lion()];

        let mut run =
            RunOrchestrator::new(setup(player_template(100, 40), roster.clone())).unwrap();
        run.start_run().unwrap();
        run.play_encounter().unwrap();
        assert_eq!(run.player().hit_points(), 85);

        let mut setup = setup(player_template(100, 40), roster);
        setup.config = setup.config.with_heal_between_encounters(true);
        let mut run = RunOrchestrator::new(setup).unwrap();
        run.start_run().unwrap();
        let steps = run.play_encounter().unwrap();
        assert_eq!(run.player().hit_points(), 100);
        assert!(
            steps
                .last()
                .unwrap()
                .events
                .iter()
                .any(|event| matches!(event, RunEvent::Healed { hit_points: 100 }))
        );
    }

    #[test]
    fn market_only_opens_while_preparing() {
        let mut run = RunOrchestrator::new(setup(player_template(100, 10), vec![lion()])).unwrap();

        let visit = run.open_market(&PcgRng, 7).unwrap();
        run.toggle_item(&visit, "Galea").unwrap();
        assert!(run.player().owns("Galea"));

        run.start_run().unwrap();
        assert!(matches!(
            run.open_market(&PcgRng, 7),
            Err(RunError::MarketClosed {
                phase: RunPhase::InEncounter
            })
        ));
        assert!(matches!(
            run.toggle_item(&visit, "Galea"),
            Err(RunError::MarketClosed { .. })
        ));
    }

    #[test]
    fn shopping_changes_the_fight() {
        let mut run = RunOrchestrator::new(setup(player_template(100, 10), vec![lion()])).unwrap();
        let visit = run.market().visit_with(Rarity::Legendary, 10);
        run.toggle_item(&visit, "Trident").unwrap();

        let summary = run.play_to_end().unwrap();

        assert_eq!(summary.outcome, RunOutcome::Champion);
        assert_eq!(summary.record.remaining_currency, 255);
        assert_eq!(summary.record.total_score, 375);
        assert_eq!(summary.rank, Rank::Novice);
    }

    #[test]
    fn maximal_attack_with_weapon_still_wins() {
        let arena = setup(player_template(100, u32::MAX), vec![lion()]);
        assert_eq!(arena.validate(), Ok(()));
        let mut run = RunOrchestrator::new(arena).unwrap();
        let visit = run.market().visit_with(Rarity::Legendary, 10);
        run.toggle_item(&visit, "Trident").unwrap();
        assert_eq!(run.player().total_attack(), u32::MAX);

        let summary = run.play_to_end().unwrap();

        assert_eq!(summary.outcome, RunOutcome::Champion);
        assert_eq!(summary.record.total_score, 375);
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut run = RunOrchestrator::new(setup(player_template(100, 10), vec![lion()])).unwrap();
        run.start_run().unwrap();
        assert!(matches!(
            run.start_run(),
            Err(RunError::WrongPhase {
                phase: RunPhase::InEncounter,
                ..
            })
        ));
    }
}
