//! Fixtures for building mock Syrve payloads and endpoints.

pub mod syrve;
