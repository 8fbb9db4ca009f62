use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Event;
use crate::roster::events::{EventStatus, EventType};

const EVENT_COLUMNS: &str =
    "id, name, event_type, max_players, start_date, end_date, status, description";

/// Partial event update; absent fields keep their stored value.
#[derive(Debug, Default, Clone)]
pub struct EventPatch {
    pub name: Option<String>,
    pub event_type: Option<EventType>,
    pub max_players: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<EventStatus>,
    pub description: Option<String>,
}

/// Apply a field-level update. A status change must move forward in the
/// Upcoming → Active → Completed life-cycle; participation data is never
/// touched by a transition.
pub async fn update_event(db: &PgPool, id: Uuid, patch: EventPatch) -> Result<Event> {
    if let Some(next) = patch.status {
        let stored: Option<String> = sqlx::query_scalar("SELECT status FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("fetching event status")?;
        let stored = stored.ok_or_else(|| anyhow!("no such event"))?;
        let current =
            EventStatus::parse(&stored).ok_or_else(|| anyhow!("stored status is invalid"))?;
        if !current.can_advance_to(next) {
            anyhow::bail!(
                "cannot move a {} event back to {}",
                current.label(),
                next.label()
            );
        }
    }

    sqlx::query_as::<_, Event>(&format!(
        "UPDATE events
            SET name = COALESCE($2, name),
                event_type = COALESCE($3, event_type),
                max_players = COALESCE($4, max_players),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                status = COALESCE($7, status),
                description = COALESCE($8, description)
          WHERE id = $1
      RETURNING {EVENT_COLUMNS}"
    ))
    .bind(id)
    .bind(patch.name)
    .bind(patch.event_type.map(EventType::as_str))
    .bind(patch.max_players)
    .bind(patch.start_date)
    .bind(patch.end_date)
    .bind(patch.status.map(EventStatus::as_str))
    .bind(patch.description)
    .fetch_optional(db)
    .await
    .context("updating event")?
    .ok_or_else(|| anyhow!("no such event"))
}

/// Delete an event together with its participation records.
pub async fn delete_event(db: &PgPool, id: Uuid) -> Result<()> {
    let mut tx = db.begin().await?;

    sqlx::query("DELETE FROM event_participations WHERE event_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .context("deleting participations")?;

    let rows = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await
        .context("deleting event")?
        .rows_affected();

    if rows == 0 {
        return Err(anyhow!("no such event"));
    }

    tx.commit().await?;
    Ok(())
}
