//! Employee directory management. The attendance core only consumes the
//! id → name resolution; these operations back the admin account commands.

use crate::core::validation::{validate_cedula, validate_name, validate_password};
use crate::db::log::{self, LogAction};
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, Role};
use crate::utils::clock::Clock;
use rusqlite::Connection;

pub fn add_employee(
    conn: &Connection,
    name: &str,
    cedula: &str,
    role: Role,
    password: Option<&str>,
    actor: &str,
) -> AppResult<i64> {
    validate_name(name)?;
    validate_cedula(cedula)?;
    if let Some(pw) = password {
        validate_password(pw)?;
    }

    let id = store::insert_employee(conn, name.trim(), cedula.trim(), role, password.unwrap_or(""))?;
    log::audit(
        conn,
        LogAction::EmployeeAdded,
        &format!("Colaborador {} agregado", name.trim()),
        actor,
    );
    Ok(id)
}

pub fn get_employee(conn: &Connection, id: i64) -> AppResult<Employee> {
    store::get_employee(conn, id)?
        .ok_or_else(|| AppError::NotFound(format!("Empleado {id} no encontrado")))
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    store::list_employees(conn)
}

pub fn set_blocked(conn: &Connection, id: i64, blocked: bool, actor: &str) -> AppResult<()> {
    if !store::set_employee_blocked(conn, id, blocked)? {
        return Err(AppError::NotFound(format!("Empleado {id} no encontrado")));
    }
    let action = if blocked {
        LogAction::EmployeeBlocked
    } else {
        LogAction::EmployeeUnblocked
    };
    log::audit(conn, action, &format!("Empleado {id}"), actor);
    Ok(())
}

pub fn remove_employee(
    conn: &Connection,
    clock: &dyn Clock,
    id: i64,
    actor: &str,
) -> AppResult<()> {
    if !store::soft_delete_employee(conn, id, clock.now_utc())? {
        return Err(AppError::NotFound(format!("Empleado {id} no encontrado")));
    }
    log::audit(conn, LogAction::EmployeeDeleted, &format!("Empleado {id}"), actor);
    Ok(())
}
