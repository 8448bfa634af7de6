use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::LeaseRecord;

const LEASE_COLUMNS: &str = "l.id, l.user_id, l.label, l.start_date, l.end_date,
     EXISTS(SELECT 1 FROM inventories i WHERE i.lease_id = l.id) AS has_inventory";

pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<LeaseRecord>, sqlx::Error> {
    sqlx::query_as::<_, LeaseRecord>(&format!(
        "SELECT {LEASE_COLUMNS} FROM leases l WHERE l.user_id = $1 ORDER BY l.start_date",
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Leases whose date range contains `date`, across all users (map view).
pub async fn list_active(pool: &PgPool, date: NaiveDate) -> Result<Vec<LeaseRecord>, sqlx::Error> {
    sqlx::query_as::<_, LeaseRecord>(&format!(
        "SELECT {LEASE_COLUMNS} FROM leases l
         WHERE l.start_date <= $1 AND l.end_date >= $1 ORDER BY l.start_date",
    ))
    .bind(date)
    .fetch_all(pool)
    .await
}
