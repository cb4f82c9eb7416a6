#![allow(dead_code)]

use super::*;

table! {
    game_list_quotas (game_id, list_id) {
        game_id -> BigInt,
        list_id -> BigInt,
        minimum_required -> Integer,
        maximum_allowed -> Integer,
        current_assigned -> Integer,
    }
}

#[derive(Queryable, Insertable)]
#[diesel(table_name = game_list_quotas)]
struct QuotaPrivate {
    game_id: i64,
    list_id: i64,
    minimum_required: i32,
    maximum_allowed: i32,
    current_assigned: i32,
}

fn private_to_public(p: QuotaPrivate) -> Result<QuotaRecord> {
    use conversions::*;
    Ok(QuotaRecord {
        game_id: i64_to_u32(p.game_id)?,
        list_id: i64_to_u32(p.list_id)?,
        minimum_required: i32_to_u32(p.minimum_required)?,
        maximum_allowed: i32_to_u32(p.maximum_allowed)?,
        current_assigned: i32_to_u32(p.current_assigned)?,
    })
}

fn public_to_private(p: &QuotaRecord) -> Result<QuotaPrivate> {
    use conversions::*;
    Ok(QuotaPrivate {
        game_id: u32_to_i64(p.game_id)?,
        list_id: u32_to_i64(p.list_id)?,
        minimum_required: u32_to_i32(p.minimum_required)?,
        maximum_allowed: u32_to_i32(p.maximum_allowed)?,
        current_assigned: u32_to_i32(p.current_assigned)?,
    })
}

/// Count the quota rows already present for a game.
pub fn count_quotas_for_game(conn: &mut SqliteConnection, input_game_id: u32) -> Result<u32> {
    use self::game_list_quotas::dsl::*;

    let game = conversions::u32_to_i64(input_game_id)?;
    let count: i64 = game_list_quotas
        .filter(game_id.eq(game))
        .count()
        .get_result(conn)?;
    conversions::i64_to_u32(count)
}

/// Get the quota rows for a game, ordered by list id.
pub fn get_quotas_for_game(
    conn: &mut SqliteConnection,
    input_game_id: u32,
) -> Result<Vec<QuotaRecord>> {
    use self::game_list_quotas::dsl::*;

    let game = conversions::u32_to_i64(input_game_id)?;
    let results: Vec<QuotaPrivate> = game_list_quotas
        .filter(game_id.eq(game))
        .order(list_id.asc())
        .load(conn)?;
    results.into_iter().map(private_to_public).collect()
}

/// Insert or replace the quota row keyed by (game_id, list_id).
pub fn upsert_quota(conn: &mut SqliteConnection, quota: &QuotaRecord) -> Result<()> {
    use self::game_list_quotas::dsl::*;

    let insert_row = public_to_private(quota)?;
    diesel::replace_into(game_list_quotas)
        .values(&insert_row)
        .execute(conn)?;
    Ok(())
}
