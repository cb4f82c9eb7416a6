#![allow(dead_code)]

use super::*;

table! {
    games (id) {
        id -> BigInt,
        sport_id -> BigInt,
        method -> Text,
        created_at -> Nullable<Timestamp>,
    }
}

#[derive(Queryable)]
struct GamePrivate {
    id: i64,
    sport_id: i64,
    method: String,
    created_at: Option<NaiveDateTime>,
}

fn private_to_public(p: GamePrivate) -> Result<GameRecord> {
    use conversions::*;
    Ok(GameRecord {
        game_id: i64_to_u32(p.id)?,
        sport_id: i64_to_u32(p.sport_id)?,
        created_at: p.created_at,
    })
}

/// Get every game staffed with the multiple-lists ("advanced") method,
/// ordered by id ascending.
pub fn get_advanced_games(conn: &mut SqliteConnection) -> Result<Vec<GameRecord>> {
    use self::games::dsl::*;

    let results: Vec<GamePrivate> = games
        .filter(method.eq("advanced"))
        .order(id.asc())
        .load(conn)?;
    results.into_iter().map(private_to_public).collect()
}
