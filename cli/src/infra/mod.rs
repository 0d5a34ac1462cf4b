//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: child process supervision,
//! filesystem access, HTTP downloads, archive extraction and settings files.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod archive;
pub mod browser;
pub mod config;
pub mod fs;
pub(crate) mod http;
pub mod manifest;
pub mod settings;
pub mod supervisor;
