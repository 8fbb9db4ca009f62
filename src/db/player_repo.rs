use anyhow::{anyhow, Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

/// Delete a player together with their equipment sets and participations.
pub async fn delete_player(db: &PgPool, id: Uuid) -> Result<()> {
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM event_participations WHERE player_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .context("deleting participations")?;

    sqlx::query("DELETE FROM equipment_sets WHERE player_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .context("deleting equipment sets")?;

    let rows = sqlx::query("DELETE FROM players WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .context("deleting player")?
        .rows_affected();

    if rows == 0 {
        return Err(anyhow!("no such player"));
    }

    tx.commit().await?;
    Ok(())
}
