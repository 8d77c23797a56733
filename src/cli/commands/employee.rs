use crate::cli::parser::{Commands, EmployeeCommands};
use crate::config::Config;
use crate::core::{employees, validation};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::clock::SystemClock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        match action {
            EmployeeCommands::Add {
                name,
                cedula,
                role,
                password,
            } => {
                let role = validation::parse_role(role)?;
                let id = employees::add_employee(
                    &pool.conn,
                    name,
                    cedula,
                    role,
                    password.as_deref(),
                    "cli",
                )?;
                success(format!("Colaborador {name} registrado con id {id}"));
            }
            EmployeeCommands::List => {
                let all = employees::list_employees(&pool.conn)?;
                if all.is_empty() {
                    info("Sin empleados registrados.");
                } else {
                    for e in &all {
                        println!(
                            "#{:<5} {:<25} cédula {:<12} {:<8}{}",
                            e.id,
                            e.name,
                            e.cedula,
                            e.role,
                            if e.blocked { " [bloqueado]" } else { "" },
                        );
                    }
                }
            }
            EmployeeCommands::Block { id } => {
                employees::set_blocked(&pool.conn, *id, true, "cli")?;
                success(format!("Empleado {id} bloqueado."));
            }
            EmployeeCommands::Unblock { id } => {
                employees::set_blocked(&pool.conn, *id, false, "cli")?;
                success(format!("Empleado {id} desbloqueado."));
            }
            EmployeeCommands::Del { id } => {
                employees::remove_employee(&pool.conn, &SystemClock, *id, "cli")?;
                success(format!("Empleado {id} eliminado."));
            }
        }
    }
    Ok(())
}
