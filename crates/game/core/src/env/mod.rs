//! Static inputs of a run: templates, catalog, tunables and the RNG oracle.
//!
//! Nothing here is loaded from disk. The content crate parses data files into
//! these types and the runtime hands an [`ArenaSetup`] to the orchestrator.
mod error;
mod rng;
mod templates;

pub use error::SetupError;
pub use rng::{PcgRng, RngOracle, compute_seed, roll};
pub use templates::{AdversaryTemplate, PlayerTemplate, is_valid_gladiator_name};

use crate::config::ArenaConfig;
use crate::state::Item;

/// Everything a run needs before it can start.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArenaSetup {
    pub config: ArenaConfig,
    pub player: PlayerTemplate,
    /// Encounter order is the order of this list.
    pub roster: Vec<AdversaryTemplate>,
    pub catalog: Vec<Item>,
}

impl ArenaSetup {
    pub fn new(
        config: ArenaConfig,
        player: PlayerTemplate,
        roster: Vec<AdversaryTemplate>,
        catalog: Vec<Item>,
    ) -> Self {
        Self {
            config,
            player,
            roster,
            catalog,
        }
    }

    /// Checks every invariant the run relies on. The first violation wins.
    pub fn validate(&self) -> Result<(), SetupError> {
        self.player.validate()?;

        if self.roster.is_empty() {
            return Err(SetupError::EmptyRoster);
        }
        for adversary in &self.roster {
            adversary.validate()?;
        }

        for (i, item) in self.catalog.iter().enumerate() {
            if self.catalog[..i].iter().any(|other| other.name == item.name) {
                return Err(SetupError::DuplicateCatalogItem {
                    name: item.name.clone(),
                });
            }
        }

        let (min, max) = (
            self.config.discount_min_percent,
            self.config.discount_max_percent,
        );
        if min > max || max > 100 {
            return Err(SetupError::InvalidDiscountRange { min, max });
        }

        Ok(())
    }
}
