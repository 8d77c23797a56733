use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lunch;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::format_minutes;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lunch { record, time } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let minutes = lunch::update_lunch_minutes(&pool.conn, cfg, *record, time, "cli")?;
        success(format!(
            "Tiempo de almuerzo actualizado correctamente a {} ({} min)",
            format_minutes(minutes as i64),
            minutes
        ));
    }
    Ok(())
}
