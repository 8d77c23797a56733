use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::clock::SystemClock;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { record, assume_yes } = cmd {
        if !assume_yes
            && !ask_confirmation(&format!(
                "Delete record #{record}? The row is kept but hidden from every view."
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        records::soft_delete(&pool.conn, &SystemClock, *record, "cli")?;
        success(format!("Registro {record} eliminado."));
    }
    Ok(())
}
