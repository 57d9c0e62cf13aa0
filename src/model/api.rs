use serde::{Deserialize, Serialize};

/// The response when a request cannot produce a page
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
