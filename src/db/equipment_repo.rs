use anyhow::{anyhow, Context, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::EquipmentSet;
use crate::gear::GearSlot;
use crate::roster::equipment::{self, Enhancement, EnhancementPatch, SET_CAP};

const SET_COLUMNS: &str = "id, player_id, set_number, name, helmet, chest, weapon, gloves, \
                           legs, boots, accessory1, accessory2, enhancements, armament_image_url";

/// All sets of a player, ordered by set number.
pub async fn list_sets(db: &PgPool, player: Uuid) -> Result<Vec<EquipmentSet>> {
    sqlx::query_as::<_, EquipmentSet>(&format!(
        "SELECT {SET_COLUMNS} FROM equipment_sets WHERE player_id = $1 ORDER BY set_number"
    ))
    .bind(player)
    .fetch_all(db)
    .await
    .context("listing equipment sets")
}

/// Create set 1 for a player who has none yet, then return the full list.
/// Idempotent: a player with existing sets is left untouched.
pub async fn initialize(db: &PgPool, player: Uuid) -> Result<Vec<EquipmentSet>> {
    let existing = list_sets(db, player).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }

    sqlx::query(
        "INSERT INTO equipment_sets (player_id, set_number)
         VALUES ($1, 1)
         ON CONFLICT (player_id, set_number) DO NOTHING",
    )
    .bind(player)
    .execute(db)
    .await
    .context("creating first equipment set")?;

    list_sets(db, player).await
}

/// Create an empty set under the lowest unused number in [1,7].
/// Fails once the player already owns 7 sets; nothing is written then.
pub async fn add_set(db: &PgPool, player: Uuid) -> Result<EquipmentSet> {
    let used: Vec<i32> = sqlx::query_scalar(
        "SELECT set_number FROM equipment_sets WHERE player_id = $1 ORDER BY set_number",
    )
    .bind(player)
    .fetch_all(db)
    .await
    .context("listing set numbers")?;

    if used.len() >= SET_CAP {
        anyhow::bail!("maximum {SET_CAP} equipment sets allowed");
    }
    let number = equipment::next_set_number(&used)
        .ok_or_else(|| anyhow!("no free set number"))?;

    sqlx::query_as::<_, EquipmentSet>(&format!(
        "INSERT INTO equipment_sets (player_id, set_number)
         VALUES ($1, $2)
         RETURNING {SET_COLUMNS}"
    ))
    .bind(player)
    .bind(number)
    .fetch_one(db)
    .await
    .context("creating equipment set")
}

/// Remove one set. Remaining sets keep their numbers; gaps are filled by
/// the next [`add_set`].
pub async fn delete_set(db: &PgPool, player: Uuid, set_number: i32) -> Result<()> {
    let rows = sqlx::query("DELETE FROM equipment_sets WHERE player_id = $1 AND set_number = $2")
        .bind(player)
        .bind(set_number)
        .execute(db)
        .await
        .context("deleting equipment set")?
        .rows_affected();

    if rows == 0 {
        Err(anyhow!("no such equipment set"))
    } else {
        Ok(())
    }
}

/// Set or clear a set's display name. Presentation falls back to "Set N"
/// when cleared.
pub async fn rename_set(
    db: &PgPool,
    player: Uuid,
    set_number: i32,
    name: Option<&str>,
) -> Result<()> {
    let rows = sqlx::query(
        "UPDATE equipment_sets SET name = $3 WHERE player_id = $1 AND set_number = $2",
    )
    .bind(player)
    .bind(set_number)
    .bind(name)
    .execute(db)
    .await
    .context("renaming equipment set")?
    .rows_affected();

    if rows == 0 {
        Err(anyhow!("no such equipment set"))
    } else {
        Ok(())
    }
}

/// Store the externally-hosted armament screenshot URL for a set.
pub async fn set_armament_image(
    db: &PgPool,
    player: Uuid,
    set_number: i32,
    url: Option<&str>,
) -> Result<()> {
    let rows = sqlx::query(
        "UPDATE equipment_sets SET armament_image_url = $3
          WHERE player_id = $1 AND set_number = $2",
    )
    .bind(player)
    .bind(set_number)
    .bind(url)
    .execute(db)
    .await
    .context("storing armament image")?
    .rows_affected();

    if rows == 0 {
        Err(anyhow!("no such equipment set"))
    } else {
        Ok(())
    }
}

fn upsert_slot_sql(slot: GearSlot) -> &'static str {
    macro_rules! sql {
        ($col:literal) => {
            concat!(
                "INSERT INTO equipment_sets (player_id, set_number, ",
                $col,
                ") VALUES ($1, $2, $3) ",
                "ON CONFLICT (player_id, set_number) DO UPDATE SET ",
                $col,
                " = EXCLUDED.",
                $col
            )
        };
    }
    match slot {
        GearSlot::Helmet => sql!("helmet"),
        GearSlot::Chest => sql!("chest"),
        GearSlot::Weapon => sql!("weapon"),
        GearSlot::Gloves => sql!("gloves"),
        GearSlot::Legs => sql!("legs"),
        GearSlot::Boots => sql!("boots"),
        GearSlot::Accessory1 => sql!("accessory1"),
        GearSlot::Accessory2 => sql!("accessory2"),
    }
}

/// Assign gear to one slot, or clear it with `None`.
///
/// The set is created on the fly if it does not exist yet. Clearing a slot
/// also resets that slot's enhancement, so stale crit/attunement state
/// never survives a gear swap.
pub async fn set_gear_slot(
    db: &PgPool,
    player: Uuid,
    set_number: i32,
    slot: GearSlot,
    gear_id: Option<&str>,
) -> Result<()> {
    let mut tx = db.begin().await?;

    sqlx::query(upsert_slot_sql(slot))
        .bind(player)
        .bind(set_number)
        .bind(gear_id)
        .execute(&mut *tx)
        .await
        .context("assigning gear slot")?;

    if gear_id.is_none() {
        let raw: Option<Option<String>> = sqlx::query_scalar(
            "SELECT enhancements FROM equipment_sets WHERE player_id = $1 AND set_number = $2",
        )
        .bind(player)
        .bind(set_number)
        .fetch_optional(&mut *tx)
        .await
        .context("reading enhancements")?;

        if let Some(raw) = raw {
            let mut map = equipment::decode_enhancements(raw.as_deref());
            map.insert(slot, Enhancement::default());
            sqlx::query(
                "UPDATE equipment_sets SET enhancements = $3
                  WHERE player_id = $1 AND set_number = $2",
            )
            .bind(player)
            .bind(set_number)
            .bind(equipment::encode_enhancements(&map))
            .execute(&mut *tx)
            .await
            .context("resetting slot enhancement")?;
        }
    }

    tx.commit().await?;
    Ok(())
}

/// Merge a partial crit/attunement update into one slot's enhancement
/// record, leaving every other slot untouched.
pub async fn update_enhancement(
    db: &PgPool,
    player: Uuid,
    set_number: i32,
    slot: GearSlot,
    patch: EnhancementPatch,
) -> Result<EquipmentSet> {
    let set = sqlx::query_as::<_, EquipmentSet>(&format!(
        "SELECT {SET_COLUMNS} FROM equipment_sets WHERE player_id = $1 AND set_number = $2"
    ))
    .bind(player)
    .bind(set_number)
    .fetch_optional(db)
    .await
    .context("fetching equipment set")?
    .ok_or_else(|| anyhow!("no such equipment set"))?;

    let mut map = set.enhancements();
    map.entry(slot).or_default().apply(patch);

    sqlx::query_as::<_, EquipmentSet>(&format!(
        "UPDATE equipment_sets SET enhancements = $3
          WHERE player_id = $1 AND set_number = $2
      RETURNING {SET_COLUMNS}"
    ))
    .bind(player)
    .bind(set_number)
    .bind(equipment::encode_enhancements(&map))
    .fetch_one(db)
    .await
    .context("storing enhancements")
}
