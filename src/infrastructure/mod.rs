pub mod observability;
pub mod persistence;
pub mod random;
pub mod time;
