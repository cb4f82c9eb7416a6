#![allow(dead_code)]

use super::*;

table! {
    official_list_members (official_id, list_id) {
        official_id -> BigInt,
        list_id -> BigInt,
    }
}

#[derive(Insertable)]
#[diesel(table_name = official_list_members)]
struct MemberPrivateNew {
    official_id: i64,
    list_id: i64,
}

/// Count how many of the given officials are members of a list.
/// The membership filter is a parameterized `IN` set sized to the input.
pub fn count_assigned_in_list(
    conn: &mut SqliteConnection,
    input_list_id: u32,
    input_official_ids: &[u32],
) -> Result<u32> {
    use self::official_list_members::dsl::*;

    let list = conversions::u32_to_i64(input_list_id)?;
    let officials: Vec<i64> = input_official_ids
        .iter()
        .map(|o| conversions::u32_to_i64(*o))
        .collect::<Result<_>>()?;

    let count: i64 = official_list_members
        .filter(list_id.eq(list))
        .filter(official_id.eq_any(officials))
        .count()
        .get_result(conn)?;
    conversions::i64_to_u32(count)
}

/// Make sure an official is a member of a list.
/// Inserting an existing membership is a no-op, not an error.
pub fn ensure_member(
    conn: &mut SqliteConnection,
    input_official_id: u32,
    input_list_id: u32,
) -> Result<()> {
    use self::official_list_members::dsl::*;

    let insert_row = MemberPrivateNew {
        official_id: conversions::u32_to_i64(input_official_id)?,
        list_id: conversions::u32_to_i64(input_list_id)?,
    };
    diesel::insert_or_ignore_into(official_list_members)
        .values(&insert_row)
        .execute(conn)?;
    Ok(())
}

/// Get the officials belonging to a list, ordered by id.
pub fn get_members_of_list(conn: &mut SqliteConnection, input_list_id: u32) -> Result<Vec<u32>> {
    use self::official_list_members::dsl::*;

    let list = conversions::u32_to_i64(input_list_id)?;
    let results: Vec<i64> = official_list_members
        .filter(list_id.eq(list))
        .select(official_id)
        .order(official_id.asc())
        .load(conn)?;
    results.into_iter().map(conversions::i64_to_u32).collect()
}
