//! Shared response envelopes.
//!
//! Resource endpoints wrap their payload under a named key (`{"items": [...]}`,
//! `{"item": {...}}`); mutations add a human-readable `message`.

use serde::Serialize;

/// A bare `{"message": "..."}` acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}
