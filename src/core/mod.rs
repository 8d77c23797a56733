pub mod employees;
pub mod hours;
pub mod lunch;
pub mod pairing;
pub mod punch;
pub mod records;
pub mod sweeper;
pub mod validation;
