use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Observe { record, text } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        records::set_observation(&pool.conn, *record, text, "cli")?;
        success(format!("Comentario guardado en registro {record}"));
    }
    Ok(())
}
