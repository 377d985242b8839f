//! Async driver for one run.
//!
//! [`ArenaSession`] wraps the core [`RunOrchestrator`], publishes everything it
//! does on the [`EventBus`], and sleeps between half-turns so a presentation
//! layer can animate each exchange.

use arena_content::{ContentFactory, builtin};
use arena_core::{
    ArenaSetup, BattleOutcome, GameError, MarketVisit, PcgRng, RunError, RunEvent,
    RunOrchestrator, RunPhase, RunSummary, Transaction,
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::config::RuntimeConfig;
use crate::events::{Event, EventBus, MarketEvent, Topic};
use crate::repository::{RankingEntry, RankingRepository};

pub struct ArenaSession {
    run: RunOrchestrator,
    bus: EventBus,
    config: RuntimeConfig,
    rng: PcgRng,
    seed: u64,
}

impl ArenaSession {
    /// Builds a session over `setup`. The market seed comes from the config or
    /// is drawn at random.
    pub fn new(setup: ArenaSetup, config: RuntimeConfig) -> Result<Self> {
        let run = RunOrchestrator::new(setup)?;
        let seed = config.market_seed.unwrap_or_else(rand::random);
        let bus = EventBus::with_capacity(config.event_buffer_size);

        info!(
            gladiator = %run.player().name,
            adversaries = run.roster_len(),
            seed,
            "arena session ready"
        );
        Ok(Self {
            run,
            bus,
            config,
            rng: PcgRng,
            seed,
        })
    }

    /// Reads content from `config.data_dir`, or the built-in tables when unset.
    pub fn load_setup(config: &RuntimeConfig) -> Result<ArenaSetup> {
        match &config.data_dir {
            Some(dir) => ContentFactory::new(dir)
                .load_setup()
                .map_err(RuntimeError::Content),
            None => {
                debug!("no data directory configured, using built-in content");
                Ok(builtin::reference_setup())
            }
        }
    }

    pub fn run(&self) -> &RunOrchestrator {
        &self.run
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.bus.subscribe(topic)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    // ===== market =====

    pub fn open_market(&mut self) -> Result<MarketVisit> {
        let visit = self.run.open_market(&self.rng, self.seed)?;
        debug!(
            featured = %visit.featured,
            discount = visit.discount_percent,
            "market visit opened"
        );
        self.bus.publish(Event::Market(MarketEvent::Opened {
            visit: self.run.market_visits().saturating_sub(1),
            featured: visit.featured,
            discount_percent: visit.discount_percent,
            offers: visit.offers().len(),
        }));
        Ok(visit)
    }

    /// Buys or returns `name`. Refusals are published before the error is returned.
    pub fn toggle_item(&mut self, visit: &MarketVisit, name: &str) -> Result<Transaction> {
        match self.run.toggle_item(visit, name) {
            Ok(transaction) => {
                let currency = self.run.player().currency();
                debug!(item = name, price = transaction.price(), currency, "market transaction");
                self.bus.publish(Event::Market(MarketEvent::Completed {
                    transaction: transaction.clone(),
                    currency,
                }));
                Ok(transaction)
            }
            Err(RunError::Transaction(error)) => {
                warn!(item = name, code = error.error_code(), "market refused: {error}");
                self.bus.publish(Event::Market(MarketEvent::Refused {
                    name: name.to_string(),
                    reason: error.to_string(),
                }));
                Err(RunError::Transaction(error).into())
            }
            Err(error) => Err(error.into()),
        }
    }

    // ===== battles =====

    /// Starts the run and announces the first encounter.
    pub fn start(&mut self) -> Result<()> {
        let events = self.run.start_run()?;
        info!(gladiator = %self.run.player().name, "run started");
        self.publish_run_events(events);
        Ok(())
    }

    /// Plays the current encounter to resolution, pausing between half-turns.
    pub async fn play_encounter(&mut self) -> Result<BattleOutcome> {
        let encounter = self.run.cursor();
        loop {
            let step = self.run.step()?;
            let outcome = step.report.phase.outcome();
            debug!(
                encounter,
                phase = ?step.report.phase,
                player_hp = step.report.snapshot.player_hp,
                adversary_hp = step.report.snapshot.adversary_hp,
                "half-turn"
            );

            self.bus.publish(Event::Battle {
                encounter,
                report: step.report,
            });
            self.publish_run_events(step.events);

            if let Some(outcome) = outcome {
                return Ok(outcome);
            }
            self.pace().await;
        }
    }

    /// Plays every remaining encounter and returns the final summary.
    pub async fn play_run(&mut self) -> Result<RunSummary> {
        if self.run.phase() == RunPhase::Preparing {
            self.start()?;
        }
        loop {
            match self.run.phase() {
                RunPhase::InEncounter => {
                    self.play_encounter().await?;
                }
                RunPhase::AwaitingAdvance => {
                    self.pace().await;
                    let events = self.run.advance()?;
                    self.publish_run_events(events);
                }
                RunPhase::Finished | RunPhase::Preparing => break,
            }
        }
        self.run
            .summary()
            .cloned()
            .ok_or(RuntimeError::RunNotFinished)
    }

    /// Appends the finished run to `repository`.
    pub fn record_result(&self, repository: &dyn RankingRepository) -> Result<RankingEntry> {
        let summary = self.run.summary().ok_or(RuntimeError::RunNotFinished)?;
        let entry = RankingEntry::from_summary(summary);
        repository.append(entry.clone())?;
        info!(
            gladiator = %entry.record.gladiator_name,
            total_score = entry.record.total_score,
            rank = %entry.rank,
            "result recorded"
        );
        Ok(entry)
    }

    async fn pace(&self) {
        if !self.config.turn_delay.is_zero() {
            tokio::time::sleep(self.config.turn_delay).await;
        }
    }

    fn publish_run_events(&self, events: Vec<RunEvent>) {
        for event in events {
            match &event {
                RunEvent::EncounterWon { adversary, reward, .. } => info!(
                    adversary = %adversary,
                    score = reward.score,
                    currency = reward.currency,
                    "encounter won"
                ),
                RunEvent::EncounterLost { adversary, .. } => {
                    info!(adversary = %adversary, "encounter lost")
                }
                RunEvent::RunFinished { summary } => info!(
                    outcome = %summary.outcome,
                    total_score = summary.record.total_score,
                    rank = %summary.rank,
                    "run finished"
                ),
                other => debug!(event = ?other, "run event"),
            }
            self.bus.publish(Event::Run(event));
        }
    }
}
