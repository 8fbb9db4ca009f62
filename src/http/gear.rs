//! Static gear catalogue.

use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::gear::catalog::{gear_for_slot, GearDef, GEAR_TABLE};
use crate::gear::{GearSlot, GearStats, Rarity};

#[derive(Serialize)]
struct GearEntry {
    id: &'static str,
    name: &'static str,
    slot: GearSlot,
    rarity: Rarity,
    stats: GearStats,
}

impl From<&'static GearDef> for GearEntry {
    fn from(def: &'static GearDef) -> Self {
        GearEntry {
            id: def.id,
            name: def.name,
            slot: def.slot,
            rarity: def.rarity,
            stats: def.stats(),
        }
    }
}

/// GET /api/gear
#[get("/gear")]
pub async fn list_gear() -> impl Responder {
    let out: Vec<GearEntry> = GEAR_TABLE.iter().map(GearEntry::from).collect();
    HttpResponse::Ok().json(out)
}

/// GET /api/gear/{slot}
#[get("/gear/{slot}")]
pub async fn gear_by_slot(path: web::Path<String>) -> impl Responder {
    let Some(slot) = GearSlot::parse(&path.into_inner()) else {
        return HttpResponse::BadRequest().body("unknown slot");
    };

    let out: Vec<GearEntry> = gear_for_slot(slot).into_iter().map(GearEntry::from).collect();
    HttpResponse::Ok().json(out)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list_gear).service(gear_by_slot);
}
