use sqlx::PgPool;
use uuid::Uuid;

use crate::models::WorkingGroup;

pub async fn list_working_groups(pool: &PgPool) -> Result<Vec<WorkingGroup>, sqlx::Error> {
    sqlx::query_as::<_, WorkingGroup>(
        "SELECT * FROM working_groups WHERE name LIKE '%WG%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
}

/// Names of every working group the user belongs to.
pub async fn memberships(pool: &PgPool, user_id: Uuid) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT g.name FROM working_groups g
         JOIN wg_members m ON m.group_id = g.id
         WHERE m.user_id = $1 ORDER BY g.name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

pub async fn add_member<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    group_name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO wg_members (group_id, user_id)
         SELECT id, $2 FROM working_groups WHERE name = $1
         ON CONFLICT DO NOTHING",
    )
    .bind(group_name)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn remove_member<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    group_name: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "DELETE FROM wg_members m USING working_groups g
         WHERE m.group_id = g.id AND g.name = $1 AND m.user_id = $2",
    )
    .bind(group_name)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(())
}
