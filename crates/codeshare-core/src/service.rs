use crate::error::Result;
use crate::record::ShareRecord;
use crate::share_id::ShareId;
use async_trait::async_trait;
use jiff::SignedDuration;
use typed_builder::TypedBuilder;

/// Parameters for creating a share.
#[derive(Debug, Clone, TypedBuilder)]
pub struct CreateParams {
    #[builder(setter(into))]
    pub content: String,
    #[builder(default, setter(into))]
    pub stdin: String,
    #[builder(setter(into))]
    pub display_name: String,
    #[builder(default = true)]
    pub is_public: bool,
    #[builder(default = false)]
    pub allow_edit: bool,
    /// Lifetime of the share. `None` keeps it until the process exits.
    #[builder(default)]
    pub ttl: Option<SignedDuration>,
}

/// What a successful create hands back to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: ShareId,
    /// The edit permission that was granted, echoed from the request.
    pub allow_edit: bool,
}

#[async_trait]
pub trait ShareService: Send + Sync + 'static {
    /// Stores a new snippet under a freshly generated id.
    async fn create(&self, params: CreateParams) -> Result<Created>;

    /// Returns the live record for `id` and counts this call as a view.
    /// Fails with `NotFound` for unknown and expired ids alike.
    async fn fetch(&self, id: &ShareId) -> Result<ShareRecord>;

    /// Evicts expired records, returning how many were removed.
    async fn sweep(&self) -> Result<usize>;
}
