use crate::core::admin::{AdminLogic, RecordFilter};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ActivityExport;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use chrono_tz::Tz;

pub struct ExportRequest {
    pub format: ExportFormat,
    pub file: String,
    /// `None`, `"all"` or a range expression (see `utils::date::parse_range`).
    pub range: Option<String>,
    pub filter: RecordFilter,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export activity records in chronological order.
    /// Returns the number of rows written (0 means nothing matched and no
    /// file was created).
    pub fn export(
        pool: &mut DbPool,
        tz: Tz,
        display_format: &str,
        req: &ExportRequest,
    ) -> AppResult<usize> {
        let path = expand_tilde(&req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match req.range.as_deref() {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let mut records = AdminLogic::filter(&AdminLogic::list_all(pool)?, &req.filter);

        if let Some((start, end)) = bounds {
            records.retain(|r| {
                let d = r.civil_date(tz);
                d >= start && d <= end
            });
        }

        if records.is_empty() {
            warning("No activity records match the selected filters. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(&path, req.force)?;

        records.sort_by_key(|r| r.id);
        let rows: Vec<ActivityExport> = records
            .iter()
            .map(|r| ActivityExport::from_record(r, tz, display_format))
            .collect();

        match req.format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
