//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! `docker compose` adapter, filesystem access, location resolution,
//! configuration loading, package discovery and embedded resources.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod assets;
pub mod command_runner;
pub mod compose;
pub mod config;
pub mod fs;
pub mod locations;
pub mod package;
pub mod validator;
