use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sweeper;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::clock::SystemClock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sweep = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let closed = sweeper::sweep(&mut pool.conn, &SystemClock, cfg)?;
        if closed == 0 {
            info("Sin entradas abiertas por cerrar.");
        } else {
            success(format!("Cierres automáticos generados: {closed}"));
        }
    }
    Ok(())
}
