use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct WorkingGroup {
    pub id: Uuid,
    pub name: String,
}
