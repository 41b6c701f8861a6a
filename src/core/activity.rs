use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_activity, is_active_employee};
use crate::errors::{AppError, AppResult};
use crate::models::activity::{NewActivity, RecordId};
use crate::models::employee::normalize_name;
use crate::utils::time::CivilClock;

/// Write-only side of the activity log: operators record their own actions,
/// reading and correcting is an admin concern.
pub struct ActivityLogic;

impl ActivityLogic {
    pub fn append(pool: &mut DbPool, clock: &CivilClock, new: NewActivity) -> AppResult<RecordId> {
        let employee = normalize_name(&new.employee)?.to_string();

        if !is_active_employee(&pool.conn, &employee)? {
            return Err(AppError::UnknownEmployee(employee));
        }

        let row = NewActivity {
            employee,
            project: new.project.trim().to_string(),
            note: new.note.trim().to_string(),
            ..new
        };

        let now = clock.now();
        let id = insert_activity(&pool.conn, &row, &now)?;

        let operation = if row.action.is_start() {
            "start"
        } else {
            "stop"
        };
        ttlog_soft(
            &pool.conn,
            operation,
            &row.employee,
            &format!("#{} {} | {}", id, row.category, row.project),
        );

        Ok(id)
    }
}
