use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{employees, pairing};
use crate::db::cache::RecordCache;
use crate::db::log::{self, LogAction};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export;
use crate::ui::messages::{success, warning};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        employee,
        format,
        out,
        limit,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let employee = employees::get_employee(&pool.conn, *employee)?;
        let cache = RecordCache::new(Config::cache_file_for(&cfg.database));

        let pairs = pairing::employee_pairs(&pool.conn, &cache, employee.id, *limit)?;
        if pairs.is_empty() {
            warning(format!("Sin registros que exportar para {}", employee.name));
            return Ok(());
        }

        let path = Path::new(out);
        export::export_pairs(&pairs, format, path)?;
        log::audit(
            &pool.conn,
            LogAction::Export,
            &format!(
                "Exportado {} ({} pares, {})",
                employee.name,
                pairs.len(),
                format.as_str()
            ),
            "cli",
        );
        success(format!(
            "Reporte de {} exportado a {}",
            employee.name,
            path.display()
        ));
    }
    Ok(())
}
