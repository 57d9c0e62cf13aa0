//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the Syrve client: token caching, the
//! change-driver submit-then-poll workflow, and assembly of everything the page renders.

pub mod change_driver;
pub mod page;
pub mod token;
