mod code;
mod health;

pub use code::{CodeResponse, CreateCodeRequest, CreateCodeResponse, DEFAULT_EXPIRES_IN_HOURS};
pub use health::HealthResponse;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
