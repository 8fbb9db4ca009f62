//! Roster management (list / detail / create / update / delete / alliance flag)

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::Player;
use crate::db::participation_repo::{self, ParticipationHistory};
use crate::db::player_repo;

const PLAYER_COLUMNS: &str =
    "id, player_id, name, power, kill_points, in_alliance, created_at, updated_at";

//////////////////////////////////////////////////
// Data transfer objects
//////////////////////////////////////////////////

#[derive(Serialize)]
pub struct PlayerInfo {
    pub id: Uuid,
    pub player_id: String,
    pub name: String,
    pub power: i64,
    pub kill_points: i64,
    pub in_alliance: bool,
    pub participations: Vec<ParticipationHistory>,
}

//////////////////////////////////////////////////
// Requests
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct ListQuery {
    /// Filter on alliance membership; omit for the whole pool.
    pub alliance: Option<bool>,
}

#[derive(Deserialize)]
pub struct CreateReq {
    pub player_id: String,
    pub name: String,
    #[serde(default)]
    pub power: i64,
    #[serde(default)]
    pub kill_points: i64,
    #[serde(default)]
    pub in_alliance: bool,
}

#[derive(Deserialize)]
pub struct UpdateReq {
    pub id: Uuid,
    pub player_id: Option<String>,
    pub name: Option<String>,
    pub power: Option<i64>,
    pub kill_points: Option<i64>,
    pub in_alliance: Option<bool>,
}

#[derive(Deserialize)]
pub struct DeleteReq {
    pub id: Uuid,
}

#[derive(Deserialize)]
pub struct AllianceReq {
    pub player_id: Uuid,
}

//////////////////////////////////////////////////
// Handlers
//////////////////////////////////////////////////

/// GET /api/players
#[get("/players")]
pub async fn list(web::Query(query): web::Query<ListQuery>, db: web::Data<PgPool>) -> impl Responder {
    let rows = sqlx::query_as::<_, Player>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players
          WHERE ($1::bool IS NULL OR in_alliance = $1)
          ORDER BY power DESC"
    ))
    .bind(query.alliance)
    .fetch_all(&**db)
    .await
    .unwrap_or_default();

    HttpResponse::Ok().json(rows)
}

/// GET /api/players/{id}
#[get("/players/{id}")]
pub async fn detail(path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    let pid = path.into_inner();

    let player = match sqlx::query_as::<_, Player>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
    ))
    .bind(pid)
    .fetch_optional(&**db)
    .await
    {
        Ok(Some(p)) => p,
        Ok(None) => return HttpResponse::NotFound().body("player not found"),
        Err(_) => return HttpResponse::InternalServerError().finish(),
    };

    let participations = participation_repo::history_for_player(&db, pid)
        .await
        .unwrap_or_default();

    HttpResponse::Ok().json(PlayerInfo {
        id: player.id,
        player_id: player.player_id,
        name: player.name,
        power: player.power,
        kill_points: player.kill_points,
        in_alliance: player.in_alliance,
        participations,
    })
}

/// POST /api/players/create
#[post("/players/create")]
pub async fn create(info: web::Json<CreateReq>, db: web::Data<PgPool>) -> impl Responder {
    match sqlx::query_as::<_, Player>(&format!(
        "INSERT INTO players (player_id, name, power, kill_points, in_alliance)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {PLAYER_COLUMNS}"
    ))
    .bind(&info.player_id)
    .bind(&info.name)
    .bind(info.power.max(0))
    .bind(info.kill_points.max(0))
    .bind(info.in_alliance)
    .fetch_one(&**db)
    .await
    {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
            HttpResponse::BadRequest().body("player id already taken")
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// POST /api/players/update
#[post("/players/update")]
pub async fn update(info: web::Json<UpdateReq>, db: web::Data<PgPool>) -> impl Responder {
    let info = info.into_inner();

    match sqlx::query_as::<_, Player>(&format!(
        "UPDATE players
            SET player_id = COALESCE($2, player_id),
                name = COALESCE($3, name),
                power = COALESCE($4, power),
                kill_points = COALESCE($5, kill_points),
                in_alliance = COALESCE($6, in_alliance),
                updated_at = NOW()
          WHERE id = $1
      RETURNING {PLAYER_COLUMNS}"
    ))
    .bind(info.id)
    .bind(info.player_id)
    .bind(info.name)
    .bind(info.power.map(|p| p.max(0)))
    .bind(info.kill_points.map(|k| k.max(0)))
    .bind(info.in_alliance)
    .fetch_optional(&**db)
    .await
    {
        Ok(Some(player)) => HttpResponse::Ok().json(player),
        Ok(None) => HttpResponse::NotFound().body("player not found"),
        Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
            HttpResponse::BadRequest().body("player id already taken")
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// POST /api/players/delete
#[post("/players/delete")]
pub async fn delete(info: web::Json<DeleteReq>, db: web::Data<PgPool>) -> impl Responder {
    match player_repo::delete_player(&db, info.id).await {
        Ok(_) => HttpResponse::Ok().body("deleted"),
        Err(e) => {
            log::warn!("player delete failed: {e:?}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// GET /api/alliance — current members, strongest first.
#[get("/alliance")]
pub async fn alliance_roster(db: web::Data<PgPool>) -> impl Responder {
    let rows = sqlx::query_as::<_, Player>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM players WHERE in_alliance ORDER BY power DESC"
    ))
    .fetch_all(&**db)
    .await
    .unwrap_or_default();

    HttpResponse::Ok().json(rows)
}

async fn set_alliance_flag(db: &PgPool, player: Uuid, member: bool) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("UPDATE players SET in_alliance = $2, updated_at = NOW() WHERE id = $1")
        .bind(player)
        .bind(member)
        .execute(db)
        .await?
        .rows_affected();
    Ok(rows > 0)
}

/// POST /api/alliance/add
#[post("/alliance/add")]
pub async fn alliance_add(info: web::Json<AllianceReq>, db: web::Data<PgPool>) -> impl Responder {
    match set_alliance_flag(&db, info.player_id, true).await {
        Ok(true) => HttpResponse::Ok().body("added"),
        Ok(false) => HttpResponse::NotFound().body("player not found"),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// POST /api/alliance/remove
#[post("/alliance/remove")]
pub async fn alliance_remove(
    info: web::Json<AllianceReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    match set_alliance_flag(&db, info.player_id, false).await {
        Ok(true) => HttpResponse::Ok().body("removed"),
        Ok(false) => HttpResponse::NotFound().body("player not found"),
        Err(_) => HttpResponse::InternalServerError().finish(),
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
        .service(alliance_roster)
        .service(alliance_add)
        .service(alliance_remove);
}
