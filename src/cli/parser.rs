use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeclock
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee attendance over SQLite: ENTRADA/SALIDA punches, pair reports, lunch edits and auto-closure",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the active configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Record a punch (ENTRADA or SALIDA) for an employee
    Punch {
        /// Employee id
        employee: i64,

        /// Punch kind: entrada | salida
        kind: String,

        /// Backfill the punch instant (RFC3339, admin corrections only)
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Show the next required action for an employee
    Status {
        /// Employee id
        employee: i64,
    },

    /// Show the most recent ENTRADA/SALIDA pairs for an employee
    Pairs {
        /// Employee id
        employee: i64,

        #[arg(long, default_value_t = 10, help = "Maximum pairs to show")]
        limit: usize,
    },

    /// Edit the lunch duration of an ENTRADA record (allowed once)
    Lunch {
        /// ENTRADA record id
        record: i64,

        /// New lunch duration (HH:MM, at most 02:00)
        time: String,
    },

    /// Set the observation text of a record
    Observe {
        /// Record id
        record: i64,

        /// Observation text
        text: String,
    },

    /// Mark or clear the paid-leave flag of a record
    Leave {
        /// Record id
        record: i64,

        #[arg(long, help = "Clear the flag instead of setting it")]
        off: bool,
    },

    /// Soft-delete a record by id
    Del {
        /// Record id
        record: i64,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        assume_yes: bool,
    },

    /// Close ENTRADAs left open past the configured thresholds
    Sweep,

    /// List recent records (all employees, or one with --employee)
    List {
        #[arg(long, help = "Filter by employee id")]
        employee: Option<i64>,

        #[arg(long, help = "Range start date (YYYY-MM-DD, local)")]
        from: Option<String>,

        #[arg(long, help = "Range end date (YYYY-MM-DD, local)")]
        to: Option<String>,

        #[arg(long, default_value_t = 50, help = "Maximum rows")]
        limit: u32,
    },

    /// Manage employee accounts
    Employee {
        #[command(subcommand)]
        action: EmployeeCommands,
    },

    /// Export an employee's pair report
    Export {
        /// Employee id
        employee: i64,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        out: String,

        #[arg(long, default_value_t = 10, help = "Maximum pairs to export")]
        limit: usize,
    },

    /// Print the activity audit log
    Log {
        #[arg(long, help = "Print rows from the activity log")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeCommands {
    /// Register a new employee
    Add {
        name: String,

        /// National id, 7-10 digits
        cedula: String,

        #[arg(long, default_value = "employee", help = "employee | admin | master")]
        role: String,

        #[arg(long, help = "Initial password (validated, 6-20 chars, letter+digit)")]
        password: Option<String>,
    },

    /// List active employees
    List,

    /// Block an employee from punching
    Block { id: i64 },

    /// Unblock an employee
    Unblock { id: i64 },

    /// Soft-delete an employee
    Del { id: i64 },
}
