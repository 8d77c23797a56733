use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{employees, punch};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { employee } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let employee = employees::get_employee(&pool.conn, *employee)?;
        let next = punch::decide_next_action(&pool.conn, employee.id)?;
        info(format!("Próxima acción para {}: {}", employee.name, next));
    }
    Ok(())
}
