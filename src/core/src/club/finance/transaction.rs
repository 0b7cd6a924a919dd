use crate::club::PlayerId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    TransferIn,
    TransferOut,
    Wages,
    TicketSales,
    Sponsorship,
    PrizeMoney,
    Other,
}

/// A single budget movement. Positive amounts credit the budget,
/// negative amounts debit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub transaction_type: TransactionType,
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    pub player_id: Option<PlayerId>,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        transaction_type: TransactionType,
        amount: i64,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Transaction {
            id: id.into(),
            transaction_type,
            amount,
            description: description.into(),
            date,
            player_id: None,
        }
    }

    pub fn with_player(mut self, player_id: PlayerId) -> Self {
        self.player_id = Some(player_id);
        self
    }

    pub fn is_income(&self) -> bool {
        self.amount > 0
    }
}
