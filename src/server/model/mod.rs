//! Server application models and type definitions.
//!
//! This module contains the application state shared by handlers, the Syrve API request and
//! response models, and the session data wrappers.

pub mod app;
pub mod session;
pub mod syrve;
