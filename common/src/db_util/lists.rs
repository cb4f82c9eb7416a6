#![allow(dead_code)]

use super::*;

table! {
    official_lists (id) {
        id -> BigInt,
        sport_id -> BigInt,
        name -> Text,
    }
}

#[derive(Queryable)]
struct OfficialListPrivate {
    id: i64,
    sport_id: i64,
    name: String,
}

fn private_to_public(p: OfficialListPrivate) -> Result<OfficialListRecord> {
    use conversions::*;
    Ok(OfficialListRecord {
        list_id: i64_to_u32(p.id)?,
        sport_id: i64_to_u32(p.sport_id)?,
        name: p.name,
    })
}

/// Get every official list for a sport, ordered by name ascending.
pub fn get_lists_for_sport(
    conn: &mut SqliteConnection,
    input_sport_id: u32,
) -> Result<Vec<OfficialListRecord>> {
    use self::official_lists::dsl::*;

    let sport = conversions::u32_to_i64(input_sport_id)?;
    let results: Vec<OfficialListPrivate> = official_lists
        .filter(sport_id.eq(sport))
        .order(name.asc())
        .load(conn)?;
    results.into_iter().map(private_to_public).collect()
}
