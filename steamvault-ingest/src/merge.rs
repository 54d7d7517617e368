//! Tri-state developer/publisher relation merge.

use rusqlite::Connection;
use steamvault_db::operations;
use steamvault_model::types::{CompanyRole, Game};

use crate::ingest::{try_row, IngestError, IngestStats};

/// Merge one game's developer and publisher sets into `develop_publish`.
///
/// All developer rows for the game are inserted (role `dev`) before any
/// publisher id is examined; the publisher pass relies on that ordering to
/// classify an existing row. A publisher id that already has a `dev` row is
/// upgraded to `both`; rows already `pub` or `both` (from an earlier run)
/// are left alone, so replaying the same collections re-derives the same
/// roles.
pub fn merge_game_relations(
    conn: &Connection,
    game: &Game,
    stats: &mut IngestStats,
) -> Result<(), IngestError> {
    for company_id in &game.dev_company_ids {
        stats.total += 1;
        try_row(
            operations::insert_relation(conn, company_id, game.game_id, CompanyRole::Dev),
            stats,
            || format!("dev relation ({}, {})", company_id, game.game_id),
        )?;
    }

    for company_id in &game.pub_company_ids {
        stats.total += 1;
        match operations::relation_role(conn, company_id, game.game_id)? {
            None => {
                try_row(
                    operations::insert_relation(conn, company_id, game.game_id, CompanyRole::Pub),
                    stats,
                    || format!("pub relation ({}, {})", company_id, game.game_id),
                )?;
            }
            Some(CompanyRole::Dev) => {
                operations::set_relation_role(conn, company_id, game.game_id, CompanyRole::Both)?;
                stats.merged_roles += 1;
            }
            Some(_) => {
                // Already pub or both from a previous run.
                stats.skipped_conflict += 1;
            }
        }
    }

    Ok(())
}
