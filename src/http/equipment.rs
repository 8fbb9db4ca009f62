//! Equipment-set endpoints: loadouts, gear slots and enhancements.

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::equipment_repo;
use crate::db::models::EquipmentSet;
use crate::gear::{stats, GearSlot, GearStats};
use crate::roster::equipment::{Enhancements, EnhancementPatch, SET_CAP};

//////////////////////////////////////////////////
// Data transfer objects
//////////////////////////////////////////////////

#[derive(Serialize)]
pub struct SetView {
    pub id: Uuid,
    pub set_number: i32,
    /// Stored name, or "Set N" when unnamed.
    pub name: String,
    pub helmet: Option<String>,
    pub chest: Option<String>,
    pub weapon: Option<String>,
    pub gloves: Option<String>,
    pub legs: Option<String>,
    pub boots: Option<String>,
    pub accessory1: Option<String>,
    pub accessory2: Option<String>,
    pub enhancements: Enhancements,
    /// Aggregated troop bonuses of the equipped gear.
    pub stats: GearStats,
    pub armament_image_url: Option<String>,
}

impl From<EquipmentSet> for SetView {
    fn from(set: EquipmentSet) -> Self {
        let stats = stats::aggregate(set.equipped());
        let enhancements = set.enhancements();
        let name = set.display_name();

        SetView {
            id: set.id,
            set_number: set.set_number,
            name,
            helmet: set.helmet,
            chest: set.chest,
            weapon: set.weapon,
            gloves: set.gloves,
            legs: set.legs,
            boots: set.boots,
            accessory1: set.accessory1,
            accessory2: set.accessory2,
            enhancements,
            stats,
            armament_image_url: set.armament_image_url,
        }
    }
}

//////////////////////////////////////////////////
// Requests
//////////////////////////////////////////////////

#[derive(Deserialize)]
pub struct AddReq {
    pub player_id: Uuid,
}

#[derive(Deserialize)]
pub struct SetRef {
    pub player_id: Uuid,
    pub set_number: i32,
}

#[derive(Deserialize)]
pub struct RenameReq {
    pub player_id: Uuid,
    pub set_number: i32,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct SlotReq {
    pub player_id: Uuid,
    pub set_number: i32,
    pub slot: GearSlot,
    /// Catalog id; omit or send empty to clear the slot.
    pub gear_id: Option<String>,
}

#[derive(Deserialize)]
pub struct EnhancementReq {
    pub player_id: Uuid,
    pub set_number: i32,
    pub slot: GearSlot,
    pub crit: Option<bool>,
    pub attunement: Option<u8>,
}

#[derive(Deserialize)]
pub struct ArmamentImageReq {
    pub player_id: Uuid,
    pub set_number: i32,
    pub url: Option<String>,
}

fn set_number_in_range(set_number: i32) -> bool {
    (1..=SET_CAP as i32).contains(&set_number)
}

//////////////////////////////////////////////////
// Handlers
//////////////////////////////////////////////////

/// GET /api/equipment/{player_id}
///
/// Lazily creates set 1 on first view, then returns every set with its
/// aggregated stats.
#[get("/equipment/{player_id}")]
pub async fn list_sets(path: web::Path<Uuid>, db: web::Data<PgPool>) -> impl Responder {
    let pid = path.into_inner();

    let known: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
        .bind(pid)
        .fetch_one(&**db)
        .await
        .unwrap_or(false);
    if !known {
        return HttpResponse::NotFound().body("player not found");
    }

    match equipment_repo::initialize(&db, pid).await {
        Ok(sets) => {
            let out: Vec<SetView> = sets.into_iter().map(SetView::from).collect();
            HttpResponse::Ok().json(out)
        }
        Err(e) => {
            log::warn!("equipment init failed: {e:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// POST /api/equipment/add
#[post("/equipment/add")]
pub async fn add_set(info: web::Json<AddReq>, db: web::Data<PgPool>) -> impl Responder {
    match equipment_repo::add_set(&db, info.player_id).await {
        Ok(set) => HttpResponse::Ok().json(SetView::from(set)),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

/// POST /api/equipment/delete
#[post("/equipment/delete")]
pub async fn delete_set(info: web::Json<SetRef>, db: web::Data<PgPool>) -> impl Responder {
    match equipment_repo::delete_set(&db, info.player_id, info.set_number).await {
        Ok(_) => HttpResponse::Ok().body("deleted"),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

/// POST /api/equipment/rename
#[post("/equipment/rename")]
pub async fn rename_set(info: web::Json<RenameReq>, db: web::Data<PgPool>) -> impl Responder {
    // An empty name clears back to the "Set N" default.
    let name = info.name.as_deref().filter(|s| !s.is_empty());

    match equipment_repo::rename_set(&db, info.player_id, info.set_number, name).await {
        Ok(_) => HttpResponse::Ok().body("renamed"),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

/// POST /api/equipment/slot
#[post("/equipment/slot")]
pub async fn set_gear_slot(info: web::Json<SlotReq>, db: web::Data<PgPool>) -> impl Responder {
    if !set_number_in_range(info.set_number) {
        return HttpResponse::BadRequest().body("set number out of range");
    }

    let gear_id = info.gear_id.as_deref().filter(|s| !s.is_empty());

    match equipment_repo::set_gear_slot(&db, info.player_id, info.set_number, info.slot, gear_id)
        .await
    {
        Ok(_) => HttpResponse::Ok().body("updated"),
        Err(e) => {
            log::warn!("slot update failed: {e:?}");
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

/// POST /api/equipment/enhancement
#[post("/equipment/enhancement")]
pub async fn update_enhancement(
    info: web::Json<EnhancementReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let patch = EnhancementPatch {
        crit: info.crit,
        attunement: info.attunement,
    };

    match equipment_repo::update_enhancement(&db, info.player_id, info.set_number, info.slot, patch)
        .await
    {
        Ok(set) => HttpResponse::Ok().json(SetView::from(set)),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

/// POST /api/equipment/armament_image
#[post("/equipment/armament_image")]
pub async fn set_armament_image(
    info: web::Json<ArmamentImageReq>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let url = info.url.as_deref().filter(|s| !s.is_empty());

    match equipment_repo::set_armament_image(&db, info.player_id, info.set_number, url).await {
        Ok(_) => HttpResponse::Ok().body("updated"),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

//////////////////////////////////////////////////
// Mount
//////////////////////////////////////////////////
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_sets)
        .service(add_set)
        .service(delete_set)
        .service(rename_set)
        .service(set_gear_slot)
        .service(update_enhancement)
        .service(set_armament_image);
}
