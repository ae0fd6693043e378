//! Domain data model shared across commands and services.

pub mod models;
