//! A library with common utilities for the efficials scheduling database.

pub mod backfill;
pub mod db_util;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A game pulled from the schedule. Only the columns the migration consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: u32,
    pub sport_id: u32,
    pub created_at: Option<NaiveDateTime>,
}

/// A named group of officials scoped to a sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialListRecord {
    pub list_id: u32,
    pub sport_id: u32,
    pub name: String,
}

/// A per-game, per-list staffing requirement.
/// At most one row exists per (game, list) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRecord {
    pub game_id: u32,
    pub list_id: u32,
    pub minimum_required: u32,
    pub maximum_allowed: u32,
    pub current_assigned: u32,
}
