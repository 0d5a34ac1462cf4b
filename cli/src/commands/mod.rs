//! Command implementations

pub mod config;
pub mod doctor;
pub mod install;
pub mod launch;
pub mod update;
pub mod version;
