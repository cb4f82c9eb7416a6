//! Interfaces between the migration code and the scheduling database.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::path::{Path, PathBuf};

use crate::{GameRecord, OfficialListRecord, QuotaRecord};

mod assignments;
mod conversions;
mod games;
mod lists;
mod members;
mod quotas;

pub use assignments::get_assigned_official_ids;
pub use games::get_advanced_games;
pub use lists::get_lists_for_sport;
pub use members::{count_assigned_in_list, ensure_member, get_members_of_list};
pub use quotas::{count_quotas_for_game, get_quotas_for_game, upsert_quota};

/// Database filenames to try, in order. The app writes the development
/// database under the first name; the other two are older deployments.
pub const DB_FILENAME_CANDIDATES: &[&str] = &[
    "efficials_app_development.db",
    "efficials.db",
    "database.db",
];

/// Return the first candidate filename that exists on disk.
pub fn resolve_database_path(candidates: &[&str]) -> Option<PathBuf> {
    candidates.iter().map(PathBuf::from).find(|p| p.exists())
}

/// Open a connection to the database at the given path.
pub fn get_database_connection(path: &Path) -> Result<SqliteConnection> {
    let database_url = path.to_string_lossy();
    SqliteConnection::establish(&database_url)
        .with_context(|| format!("failed to open database at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test_log::test]
    fn test_resolve_database_path_none_exist() {
        let candidates = ["does_not_exist_1.db", "does_not_exist_2.db"];
        assert_eq!(resolve_database_path(&candidates), None);
    }

    #[test_log::test]
    fn test_resolve_database_path_first_existing_wins() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.db");
        let third = dir.path().join("third.db");
        File::create(&second).unwrap();
        File::create(&third).unwrap();

        let missing = dir.path().join("first.db");
        let candidates = [
            missing.to_str().unwrap(),
            second.to_str().unwrap(),
            third.to_str().unwrap(),
        ];
        assert_eq!(resolve_database_path(&candidates), Some(second));
    }

    #[test_log::test]
    fn test_get_database_connection_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.db");
        let conn = get_database_connection(&path);
        assert!(conn.is_ok());
    }
}
