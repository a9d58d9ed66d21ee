//! Server reply payload
//!
//! The envelope around the reply is validated by `codec`; this is only the
//! JSON body inside it. The core never validates the body itself, so
//! deserializing it is the orchestrator's choice, not an obligation.

use serde::{Deserialize, Serialize};

/// Decoded trapper reply: `{"response":"success","info":"processed: 1; ..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapperResponse {
    pub response: String,
    pub info: String,
}

impl TrapperResponse {
    /// Whether the server reported the submission as accepted.
    pub fn is_success(&self) -> bool {
        self.response == "success"
    }
}
