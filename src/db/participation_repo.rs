use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::models::EventParticipation;
use crate::roster::events;

const PARTICIPATION_COLUMNS: &str =
    "id, event_id, player_id, participated, score, position, notes";

/// One participant row joined with its player, as the event screen shows it.
#[derive(Debug, FromRow, Serialize)]
pub struct ParticipantDetail {
    pub id: Uuid,
    pub player_id: Uuid,
    /// In-game governor id of the player.
    pub ingame_id: String,
    pub name: String,
    pub power: i64,
    pub participated: bool,
    pub score: Option<i32>,
    pub position: i32,
    pub notes: Option<String>,
}

/// A player's participation history entry with its event summary.
#[derive(Debug, FromRow, Serialize)]
pub struct ParticipationHistory {
    pub id: Uuid,
    pub participated: bool,
    pub score: Option<i32>,
    pub event_id: Uuid,
    pub event_name: String,
    pub event_type: String,
    pub start_date: DateTime<Utc>,
}

/// Partial field update; `Some(None)` clears a nullable field, which is
/// distinct from setting a score of zero.
#[derive(Debug, Default, Clone)]
pub struct ParticipationPatch {
    pub participated: Option<bool>,
    pub score: Option<Option<i32>>,
    pub notes: Option<Option<String>>,
}

async fn max_position<'e, E>(executor: E, event: Uuid) -> Result<Option<i32>>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT MAX(position) FROM event_participations WHERE event_id = $1")
        .bind(event)
        .fetch_one(executor)
        .await
        .context("fetching max position")
}

/// Participants of an event in display order.
pub async fn list_for_event(db: &PgPool, event: Uuid) -> Result<Vec<ParticipantDetail>> {
    sqlx::query_as::<_, ParticipantDetail>(
        r#"
        SELECT ep.id, ep.player_id, p.player_id AS ingame_id, p.name, p.power,
               ep.participated, ep.score, ep.position, ep.notes
          FROM event_participations ep
          JOIN players p ON p.id = ep.player_id
         WHERE ep.event_id = $1
         ORDER BY ep.position
        "#,
    )
    .bind(event)
    .fetch_all(db)
    .await
    .context("listing participants")
}

/// A player's participations joined with event summaries, newest first.
pub async fn history_for_player(db: &PgPool, player: Uuid) -> Result<Vec<ParticipationHistory>> {
    sqlx::query_as::<_, ParticipationHistory>(
        r#"
        SELECT ep.id, ep.participated, ep.score,
               e.id AS event_id, e.name AS event_name, e.event_type, e.start_date
          FROM event_participations ep
          JOIN events e ON e.id = ep.event_id
         WHERE ep.player_id = $1
         ORDER BY e.start_date DESC
        "#,
    )
    .bind(player)
    .fetch_all(db)
    .await
    .context("fetching participation history")
}

/// Append one player at the end of the event's ordering.
pub async fn add_participant(
    db: &PgPool,
    event: Uuid,
    player: Uuid,
) -> Result<EventParticipation> {
    let position = events::next_position(max_position(db, event).await?);

    match sqlx::query_as::<_, EventParticipation>(&format!(
        "INSERT INTO event_participations (event_id, player_id, participated, position)
         VALUES ($1, $2, FALSE, $3)
         RETURNING {PARTICIPATION_COLUMNS}"
    ))
    .bind(event)
    .bind(player)
    .bind(position)
    .fetch_one(db)
    .await
    {
        Ok(row) => Ok(row),
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
            Err(anyhow!("already a participant"))
        }
        Err(e) => Err(e).context("adding participant"),
    }
}

/// Append several players in input order, one counter seeded from the
/// current max. Players already in the event are skipped without touching
/// their position; the counter still advances, so gaps may appear (the
/// next full reorder restores density).
pub async fn bulk_add_participants(db: &PgPool, event: Uuid, players: &[Uuid]) -> Result<()> {
    let mut tx = db.begin().await?;

    let mut next = events::next_position(max_position(&mut *tx, event).await?);
    for player in players {
        sqlx::query(
            "INSERT INTO event_participations (event_id, player_id, participated, position)
             VALUES ($1, $2, FALSE, $3)
             ON CONFLICT (player_id, event_id) DO NOTHING",
        )
        .bind(event)
        .bind(player)
        .bind(next)
        .execute(&mut *tx)
        .await
        .context("bulk adding participant")?;
        next += 1;
    }

    tx.commit().await?;
    Ok(())
}

/// Drop a player from an event. Remaining positions are not renumbered.
pub async fn remove_participant(db: &PgPool, event: Uuid, player: Uuid) -> Result<()> {
    let rows =
        sqlx::query("DELETE FROM event_participations WHERE event_id = $1 AND player_id = $2")
            .bind(event)
            .bind(player)
            .execute(db)
            .await
            .context("removing participant")?
            .rows_affected();

    if rows == 0 {
        Err(anyhow!("not a participant"))
    } else {
        Ok(())
    }
}

/// Rewrite every participant's position to its index in `ordered`,
/// restoring a dense 0-based sequence. The caller supplies the complete
/// current membership, permuted.
pub async fn reorder_participants(db: &PgPool, event: Uuid, ordered: &[Uuid]) -> Result<()> {
    let mut tx = db.begin().await?;

    for (id, position) in events::renumber(ordered) {
        sqlx::query(
            "UPDATE event_participations SET position = $3 WHERE id = $1 AND event_id = $2",
        )
        .bind(id)
        .bind(event)
        .bind(position)
        .execute(&mut *tx)
        .await
        .context("rewriting position")?;
    }

    tx.commit().await?;
    Ok(())
}

/// Field-level update of one participation record.
pub async fn update_participation(
    db: &PgPool,
    id: Uuid,
    patch: ParticipationPatch,
) -> Result<EventParticipation> {
    sqlx::query_as::<_, EventParticipation>(&format!(
        "UPDATE event_participations
            SET participated = COALESCE($2, participated),
                score = CASE WHEN $3 THEN $4 ELSE score END,
                notes = CASE WHEN $5 THEN $6 ELSE notes END
          WHERE id = $1
      RETURNING {PARTICIPATION_COLUMNS}"
    ))
    .bind(id)
    .bind(patch.participated)
    .bind(patch.score.is_some())
    .bind(patch.score.flatten())
    .bind(patch.notes.is_some())
    .bind(patch.notes.flatten())
    .fetch_optional(db)
    .await
    .context("updating participation")?
    .ok_or_else(|| anyhow!("no such participation"))
}
