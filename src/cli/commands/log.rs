use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !print {
            info("Usa --print para listar la actividad.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let rows = log::load_activity(&pool.conn)?;
        if rows.is_empty() {
            info("Sin actividad registrada.");
            return Ok(());
        }
        for (date, action, details, actor) in &rows {
            println!("{date} [{action}] {details} ({actor})");
        }
    }
    Ok(())
}
