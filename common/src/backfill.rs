//! The backfill reconciler.
//!
//! Older multiple-lists games kept their list setup in client-side cached
//! preferences, so the database has assignments but no quota or membership
//! rows for them. This pass infers which lists each game drew from and writes
//! `game_list_quotas` and `official_list_members` rows to match, making the
//! claiming flow database-first.

use anyhow::Result;
use diesel::prelude::*;
use log::{info, warn};

use crate::db_util;
use crate::{GameRecord, QuotaRecord};

/// Totals for one reconciliation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackfillSummary {
    /// Games with the multiple-lists method, whether or not they needed work.
    pub candidates: usize,
    /// Games that received new quota rows this run.
    pub migrated: usize,
}

/// What happened to a single candidate game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Migrated { lists: usize },
    AlreadyMigrated { quotas: u32 },
    NoListsForSport,
    NoAssignedOfficials,
}

/// A list inferred to have been used to staff a game, with the number of
/// assigned officials attributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UsedList {
    list_id: u32,
    list_name: String,
    officials_count: u32,
}

/// Run the reconciliation over every multiple-lists game.
///
/// The whole run is one transaction: a database error partway through rolls
/// back every write and surfaces as the run's error. Games that are skipped
/// (already migrated, no lists, no officials) are logged and do not count as
/// migrated; re-running after completion is a no-op.
pub fn run_backfill(conn: &mut SqliteConnection) -> Result<BackfillSummary> {
    conn.transaction::<_, anyhow::Error, _>(|conn| {
        let games = db_util::get_advanced_games(conn)?;
        info!("found {} multiple-lists games to migrate", games.len());

        let mut migrated = 0;
        for game in &games {
            match migrate_game(conn, game)? {
                GameOutcome::Migrated { lists } => {
                    info!("migrated game {} with {} list(s)", game.game_id, lists);
                    migrated += 1;
                }
                GameOutcome::AlreadyMigrated { quotas } => {
                    info!(
                        "game {} already has {} quota(s) in the database, skipping",
                        game.game_id, quotas
                    );
                }
                GameOutcome::NoListsForSport => {
                    warn!(
                        "no official lists found for sport {}, skipping game {}",
                        game.sport_id, game.game_id
                    );
                }
                GameOutcome::NoAssignedOfficials => {
                    warn!(
                        "no assigned officials found for game {}, skipping",
                        game.game_id
                    );
                }
            }
        }

        Ok(BackfillSummary {
            candidates: games.len(),
            migrated,
        })
    })
}

/// Reconcile a single game. Writes nothing unless the outcome is `Migrated`.
fn migrate_game(conn: &mut SqliteConnection, game: &GameRecord) -> Result<GameOutcome> {
    let existing_quotas = db_util::count_quotas_for_game(conn, game.game_id)?;
    if existing_quotas > 0 {
        return Ok(GameOutcome::AlreadyMigrated {
            quotas: existing_quotas,
        });
    }

    let sport_lists = db_util::get_lists_for_sport(conn, game.sport_id)?;
    if sport_lists.is_empty() {
        return Ok(GameOutcome::NoListsForSport);
    }

    let assigned = db_util::get_assigned_official_ids(conn, game.game_id)?;
    if assigned.is_empty() {
        return Ok(GameOutcome::NoAssignedOfficials);
    }
    info!(
        "game {}: {} assigned official(s)",
        game.game_id,
        assigned.len()
    );

    // Any sport list that already holds one of the assigned officials was
    // presumably used to staff the game.
    let mut used_lists = Vec::new();
    for list in &sport_lists {
        let officials_count = db_util::count_assigned_in_list(conn, list.list_id, &assigned)?;
        if officials_count > 0 {
            info!(
                "game {}: list '{}' has {} assigned official(s)",
                game.game_id, list.name, officials_count
            );
            used_lists.push(UsedList {
                list_id: list.list_id,
                list_name: list.name.clone(),
                officials_count,
            });
        }
    }

    // No memberships to infer from. Attribute every assigned official to the
    // first list by name rather than leaving the game unmigrated.
    if used_lists.is_empty() {
        let first = &sport_lists[0];
        warn!(
            "game {}: no lists with assigned officials, defaulting to '{}'",
            game.game_id, first.name
        );
        used_lists.push(UsedList {
            list_id: first.list_id,
            list_name: first.name.clone(),
            officials_count: u32::try_from(assigned.len())?,
        });
    }

    for used in &used_lists {
        let (minimum_required, maximum_allowed) = quota_bounds(used.officials_count);
        db_util::upsert_quota(
            conn,
            &QuotaRecord {
                game_id: game.game_id,
                list_id: used.list_id,
                minimum_required,
                maximum_allowed,
                current_assigned: used.officials_count,
            },
        )?;
        info!(
            "game {}: created quota for list '{}' -> min={}, max={}, current={}",
            game.game_id, used.list_name, minimum_required, maximum_allowed, used.officials_count
        );

        // The claiming flow requires every assigned official to be a member
        // of every list the game draws from.
        for official_id in &assigned {
            db_util::ensure_member(conn, *official_id, used.list_id)?;
        }
    }

    Ok(GameOutcome::Migrated {
        lists: used_lists.len(),
    })
}

/// Quota bounds for a list given the number of officials attributed to it:
/// (minimum_required, maximum_allowed). The maximum never drops below 3 so
/// the quota keeps headroom above the observed count. Note the minimum is
/// `min(count, 1)`, which is always 1 here since counts below 1 never reach
/// quota creation.
pub fn quota_bounds(officials_count: u32) -> (u32, u32) {
    (officials_count.min(1), officials_count.max(3))
}
