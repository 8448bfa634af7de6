use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A lease row joined with an EXISTS check against `inventories`.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct LeaseRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub has_inventory: bool,
}

impl LeaseRecord {
    /// A lease is active at `date` iff `start_date <= date <= end_date`.
    pub fn is_active(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
