pub mod database;
pub mod profile;
pub mod repositories;
