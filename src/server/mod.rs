//! Server application core modules.
//!
//! This module contains all server-side functionality for the courier switch page: HTTP
//! routing, configuration, the Syrve/iikoCloud API client, session-backed token caching and
//! the change-driver workflow that submits a command and checks its status once.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod syrve;
