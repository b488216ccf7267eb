pub mod collection;
pub mod config;
pub mod database;
pub mod discovery;
pub mod entities;
pub mod errors;
pub mod models;
