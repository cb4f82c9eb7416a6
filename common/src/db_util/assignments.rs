#![allow(dead_code)]

use super::*;

table! {
    game_assignments (game_id, official_id) {
        game_id -> BigInt,
        official_id -> BigInt,
    }
}

/// Get the distinct officials assigned to work a game.
pub fn get_assigned_official_ids(
    conn: &mut SqliteConnection,
    input_game_id: u32,
) -> Result<Vec<u32>> {
    use self::game_assignments::dsl::*;

    let game = conversions::u32_to_i64(input_game_id)?;
    let results: Vec<i64> = game_assignments
        .filter(game_id.eq(game))
        .select(official_id)
        .distinct()
        .order(official_id.asc())
        .load(conn)?;
    results.into_iter().map(conversions::i64_to_u32).collect()
}
