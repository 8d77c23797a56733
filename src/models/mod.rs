pub mod employee;
pub mod pair;
pub mod punch_record;
pub mod record_kind;
