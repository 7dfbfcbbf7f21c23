#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

pub mod configuration;
pub mod error;
pub mod models;
pub mod schema;
pub mod startup;
pub mod store;
pub mod telemetry;
