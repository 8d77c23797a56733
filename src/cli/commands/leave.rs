use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave { record, off } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        records::set_paid_leave(&pool.conn, *record, !off, "cli")?;
        if *off {
            success(format!("Licencia remunerada retirada del registro {record}"));
        } else {
            success(format!("Licencia remunerada marcada en registro {record}"));
        }
    }
    Ok(())
}
