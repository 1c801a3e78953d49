use crate::error::AppError;
use codeshare_core::{CreateParams, Created, ShareId, ShareRecord};
use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPIRES_IN_HOURS: f64 = 24.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Body of `POST /api/code`.
///
/// `expiresIn` is in hours and may be fractional. Leaving it out means 24
/// hours; sending `null` keeps the share until the server restarts.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCodeRequest {
    pub code: String,
    pub input: String,
    pub file_name: String,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[serde(default)]
    pub allow_edit: bool,
    #[serde(default = "default_expires_in")]
    pub expires_in: Option<f64>,
}

fn default_is_public() -> bool {
    true
}

fn default_expires_in() -> Option<f64> {
    Some(DEFAULT_EXPIRES_IN_HOURS)
}

impl CreateCodeRequest {
    pub fn into_params(self) -> Result<CreateParams, AppError> {
        let ttl = self.expires_in.map(hours_to_duration).transpose()?;

        Ok(CreateParams::builder()
            .content(self.code)
            .stdin(self.input)
            .display_name(self.file_name)
            .is_public(self.is_public)
            .allow_edit(self.allow_edit)
            .ttl(ttl)
            .build())
    }
}

/// Converts hours to a duration. Sign is preserved so the store can reject
/// non-positive values itself.
fn hours_to_duration(hours: f64) -> Result<SignedDuration, AppError> {
    SignedDuration::try_from_secs_f64(hours * SECONDS_PER_HOUR)
        .map_err(|e| AppError::BadRequest(format!("invalid expiresIn {hours}: {e}")))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCodeResponse {
    pub id: ShareId,
    pub allow_edit: bool,
}

impl From<Created> for CreateCodeResponse {
    fn from(value: Created) -> Self {
        Self {
            id: value.id,
            allow_edit: value.allow_edit,
        }
    }
}

/// Body of `GET /api/code/{id}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeResponse {
    pub id: ShareId,
    pub code: String,
    pub input: String,
    pub file_name: String,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<Timestamp>,
    pub is_public: bool,
    pub allow_edit: bool,
    pub views: u64,
}

impl From<ShareRecord> for CodeResponse {
    fn from(record: ShareRecord) -> Self {
        Self {
            id: record.id,
            code: record.content,
            input: record.stdin,
            file_name: record.display_name,
            created_at: record.created_at,
            expires_at: record.expires_at,
            is_public: record.is_public,
            allow_edit: record.allow_edit,
            views: record.views,
        }
    }
}
