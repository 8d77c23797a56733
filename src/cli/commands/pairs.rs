use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{employees, pairing};
use crate::db::cache::RecordCache;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::PairRow;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pairs { employee, limit } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let employee = employees::get_employee(&pool.conn, *employee)?;
        let cache = RecordCache::new(Config::cache_file_for(&cfg.database));

        let pairs = pairing::employee_pairs(&pool.conn, &cache, employee.id, *limit)?;
        if pairs.is_empty() {
            info(format!("Sin registros para {}", employee.name));
            return Ok(());
        }

        info(format!("Últimos registros de {}", employee.name));
        for (i, pair) in pairs.iter().enumerate() {
            let row = PairRow::from_pair(pair);
            println!(
                "#{:<3} {} {:<9} entrada {:<8} salida {:<8} almuerzo {} total {} ({}) {}",
                i + 1,
                row.fecha,
                row.dia,
                row.entrada,
                row.salida,
                row.almuerzo,
                row.total_horas,
                row.total_decimal,
                row.observaciones,
            );
        }
    }
    Ok(())
}
