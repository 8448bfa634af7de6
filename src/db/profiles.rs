use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Profile;

pub async fn create<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
) -> Result<Profile, sqlx::Error> {
    sqlx::query_as::<_, Profile>(
        "INSERT INTO profiles (user_id) VALUES ($1) RETURNING *",
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
}

pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn update_contact<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    phone_number: &str,
    perm_address: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE profiles SET phone_number = $2, perm_address = $3 WHERE user_id = $1")
        .bind(user_id)
        .bind(phone_number)
        .bind(perm_address)
        .execute(executor)
        .await?;
    Ok(())
}
