//! Event management and participation ordering.

use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::db::event_repo::{self, EventPatch};
use crate::db::models::Event;
use crate::db::participation_repo::{self, ParticipantDetail, ParticipationPatch};
use crate::roster::events::{self, EventStatus, EventType};

const EVENT_COLUMNS: &str =
    "id, name, event_type, max_players, start_date, end_date, status, description";

//////////////////////////////////////////////////
// Data transfer objects
//////////////////////////////////////////////////

#[derive(Debug, FromRow, Serialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub event_type: String,
    pub max_players: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: String,
    pub description: Option<String>,
    pub participant_count: i64,
}

#[derive(Serialize)]
pub struct EventInfo {
    pub id: Uuid,
    pub name: String,
    pub event_type: String,
    /// Human-readable name of the event type, when recognized.
    pub type_label: Option<&'static str>,
    pub max_players: Option<i32>,
    /// Explicit override, or the type default when none is set.
    pub effective_max_players: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: String,
    pub description: Option<String>,
    pub participants: Vec<ParticipantDetail>,
}

//////////////////////////////////////////////////
// Requests
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateReq {
    pub name: String,
    pub event_type: EventType,
    pub max_players: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateReq {
    pub id: Uuid,
    pub name: Option<String>,
    pub event_type: Option<EventType>,
    pub max_players: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<EventStatus>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteReq {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct ParticipantReq {
    pub event_id: Uuid,
    pub player_id: Uuid,
}

#[derive(Deserialize)]
pub struct BulkAddReq {
    pub event_id: Uuid,
    pub player_ids: Vec<Uuid>,
}

#[derive(Deserialize)]
pub struct ReorderReq {
    pub event_id: Uuid,
    /// Complete current membership of the event, permuted into the
    /// desired display order.
    pub ordered_ids: Vec<Uuid>,
}

#[derive(Deserialize)]
pub struct UpdateParticipationReq {
    pub id: Uuid,
    pub participated: Option<bool>,
    /// `null` clears the score, a number sets it, absence keeps it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub score: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notes: Option<Option<String>>,
}

//////////////////////////////////////////////////
// Handlers
//////////////////////////////////////////////////

/// GET /api/events
#[get("/events")]
pub async fn list(web::Query(query): web::Query<ListQuery>, db: web::Data<PgPool>) -> impl Responder {
    let status = match query.status.as_deref() {
        Some(raw) => match EventStatus::parse(raw) {
            Some(s) => Some(s),
            None => return HttpResponse::BadRequest().body("unknown status"),
        },
        None => None,
    };

    let rows = sqlx::query_as::<_, EventSummary>(
        r#"
        SELECT e.id, e.name, e.event_type, e.max_players, e.start_date, e.end_date,
               e.status, e.description,
               COUNT(ep.id) AS participant_count
          FROM events e
          LEFT JOIN event_participations ep ON ep.event_id = e.id
         WHERE ($1::text IS NULL OR e.status = $1)
         GROUP BY e.id
         ORDER BY e.start_date DESC
        "#,
    )
    .bind(status.map(EventStatus::as_str))
    .fetch_all(&**db)
    .await
    .unwrap_or_default();

    HttpResponse::Ok().json(rows)
}

/// GET /api/events/{id}
#[get("/events/{id}")]
pub async fn detail(path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    let eid = path.into_inner();

    let event = match sqlx::query_as::<_, Event>(&format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
    ))
    .bind(eid)
    .fetch_optional(&**db)
    .await
    {
        Ok(Some(e)) => e,
        Ok(None) => return HttpResponse::NotFound().body("event not found"),
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };

    let participants = participation_repo::list_for_event(&db, eid)
        .await
        .unwrap_or_default();

    let known_type = EventType::parse(&event.event_type);
    let effective_max_players = match known_type {
        Some(t) => events::effective_max_players(t, event.max_players),
        None => event.max_players,
    };

    HttpResponse::Ok().json(EventInfo {
        id: event.id,
        name: event.name,
        event_type: event.event_type,
        type_label: known_type.map(EventType::label),
        max_players: event.max_players,
        effective_max_players,
        start_date: event.start_date,
        end_date: event.end_date,
        status: event.status,
        description: event.description,
        participants,
    })
}

/// POST /api/events/create
#[post("/events/create")]
pub async fn create(info: web::Json<CreateReq>, db: web::Data<PgPool>) -> impl Responder {
    let info = info.into_inner();

    match sqlx::query_as::<_, Event>(&format!(
        "INSERT INTO events (name, event_type, max_players, start_date, end_date, status, description)
         VALUES ($1, $2, $3, $4, $5, 'UPCOMING', $6)
         RETURNING {EVENT_COLUMNS}"
    ))
    .bind(info.name)
    .bind(info.event_type.as_str())
    .bind(info.max_players)
    .bind(info.start_date)
    .bind(info.end_date)
    .bind(info.description)
    .fetch_one(&**db)
    .await
    {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// POST /api/events/update
#[post("/events/update")]
pub async fn update(info: web::Json<UpdateReq>, db: web::Data<PgPool>) -> impl Responder {
    let info = info.into_inner();

    let patch = EventPatch {
        name: info.name,
        event_type: info.event_type,
        max_players: info.max_players,
        start_date: info.start_date,
        end_date: info.end_date,
        status: info.status,
        description: info.description,
    };

    match event_repo::update_event(&db, info.id, patch).await {
        Ok(event) => HttpResponse::Ok().json(event),
        Err(e) => {
            log::warn!("event update failed: {e:?}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// POST /api/events/delete
#[post("/events/delete")]
pub async fn delete(info: web::Json<DeleteReq>, db: web::Data<PgPool>) -> impl Responder {
    match event_repo::delete_event(&db, info.id).await {
        Ok(_) => HttpResponse::Ok().body("deleted"),
        Err(e) => {
            log::warn!("event delete failed: {e:?}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// POST /api/events/participants/add
#[post("/events/participants/add")]
pub async fn add_participant(
    info: web::Json<ParticipantReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match participation_repo::add_participant(&db, info.event_id, info.player_id).await {
        Ok(participation) => HttpResponse::Ok().json(participation),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

/// POST /api/events/participants/bulk_add
#[post("/events/participants/bulk_add")]
pub async fn bulk_add_participants(
    info: web::Json<BulkAddReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match participation_repo::bulk_add_participants(&db, info.event_id, &info.player_ids).await {
        Ok(_) => HttpResponse::Ok().body("added"),
        Err(e) => {
            log::warn!("bulk add failed: {e:?}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// POST /api/events/participants/remove
#[post("/events/participants/remove")]
pub async fn remove_participant(
    info: web::Json<ParticipantReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match participation_repo::remove_participant(&db, info.event_id, info.player_id).await {
        Ok(_) => HttpResponse::Ok().body("removed"),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

/// POST /api/events/participants/reorder
#[post("/events/participants/reorder")]
pub async fn reorder_participants(
    info: web::Json<ReorderReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match participation_repo::reorder_participants(&db, info.event_id, &info.ordered_ids).await {
        Ok(_) => HttpResponse::Ok().body("reordered"),
        Err(e) => {
            log::warn!("reorder failed: {e:?}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// POST /api/events/participants/update
#[post("/events/participants/update")]
pub async fn update_participation(
    info: web::Json<UpdateParticipationReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let info = info.into_inner();

    let patch = ParticipationPatch {
        participated: info.participated,
        score: info.score,
        notes: info.notes,
    };

    match participation_repo::update_participation(&db, info.id, patch).await {
        Ok(participation) => HttpResponse::Ok().json(participation),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(detail)
        .service(create)
        .service(update)
        .service(delete)
        .service(add_participant)
        .service(bulk_add_participants)
        .service(remove_participant)
        .service(reorder_participants)
        .service(update_participation);
}
