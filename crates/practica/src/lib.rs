//! Practica library — application logic for the coursework toolkit.

pub mod app;
pub mod config;
pub mod errors;
