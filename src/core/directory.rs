use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{deactivate_employee, insert_employee, is_unique_violation, load_active_names};
use crate::errors::AppResult;
use crate::models::employee::{NO_SELECTION, normalize_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// Roster management: add, soft-deactivate, list active.
pub struct DirectoryLogic;

impl DirectoryLogic {
    /// Active employee names, ascending.
    pub fn list_active(pool: &mut DbPool) -> AppResult<Vec<String>> {
        Ok(load_active_names(&pool.conn)?)
    }

    /// Roster prefixed by the `NO_SELECTION` placeholder, ready for a picker.
    pub fn selection_list(pool: &mut DbPool) -> AppResult<Vec<String>> {
        let mut out = vec![NO_SELECTION.to_string()];
        out.extend(Self::list_active(pool)?);
        Ok(out)
    }

    /// Add a new employee. A name already on file (active or not) is
    /// reported as `AlreadyExists`; other storage failures propagate.
    pub fn add(pool: &mut DbPool, raw_name: &str) -> AppResult<AddOutcome> {
        let name = normalize_name(raw_name)?;

        match insert_employee(&pool.conn, name) {
            Ok(()) => {
                ttlog_soft(&pool.conn, "hire", name, "Employee added to roster");
                Ok(AddOutcome::Added)
            }
            Err(e) if is_unique_violation(&e) => Ok(AddOutcome::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }

    /// Soft-deactivate. Unknown or already inactive names are a no-op.
    pub fn deactivate(pool: &mut DbPool, raw_name: &str) -> AppResult<()> {
        let name = raw_name.trim();

        if deactivate_employee(&pool.conn, name)? > 0 {
            ttlog_soft(&pool.conn, "revoke", name, "Employee deactivated");
        }

        Ok(())
    }
}
