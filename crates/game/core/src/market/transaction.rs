//! Buy/sell toggle against the player aggregate.

use crate::state::{Item, Player};

use super::error::TransactionError;

/// Result of a successful toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transaction {
    /// The item was bought and `price` deducted.
    Purchased { name: String, price: u32 },
    /// The item was returned and `price` credited.
    Refunded { name: String, price: u32 },
}

impl Transaction {
    pub fn name(&self) -> &str {
        match self {
            Self::Purchased { name, .. } | Self::Refunded { name, .. } => name,
        }
    }

    pub fn price(&self) -> u32 {
        match self {
            Self::Purchased { price, .. } | Self::Refunded { price, .. } => *price,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Purchased { name, price } => format!("Bought {name} for {price} €."),
            Self::Refunded { name, price } => format!("Returned {name} for {price} €."),
        }
    }
}

/// Buys `item` if the player does not own it, otherwise returns it.
///
/// A refund credits `item.price`, which is the price of the current visit and
/// may differ from what was originally paid.
pub fn purchase_or_refund(
    player: &mut Player,
    item: &Item,
) -> Result<Transaction, TransactionError> {
    if player.owns(&item.name) {
        player.remove_item(&item.name)?;
        player.add_currency(item.price);
        return Ok(Transaction::Refunded {
            name: item.name.clone(),
            price: item.price,
        });
    }

    let available = player.currency();
    if !player.try_spend(item.price) {
        return Err(TransactionError::InsufficientFunds {
            name: item.name.clone(),
            price: item.price,
            available,
        });
    }
    // Not owned, so the insert cannot collide.
    if let Err(error) = player.add_item(item.clone()) {
        player.add_currency(item.price);
        return Err(error.into());
    }
    Ok(Transaction::Purchased {
        name: item.name.clone(),
        price: item.price,
    })
}
