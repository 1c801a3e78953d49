use crate::share_id::ShareId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored snippet plus its metadata.
///
/// `content`, `stdin` and `display_name` are written once at creation;
/// the only field that changes afterwards is `views`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub id: ShareId,
    /// The shared source text.
    pub content: String,
    /// Program input saved alongside the source.
    pub stdin: String,
    /// File name shown by the editor.
    pub display_name: String,
    pub created_at: Timestamp,
    /// When the record stops being readable, if ever.
    pub expires_at: Option<Timestamp>,
    pub is_public: bool,
    /// Whether holders of the id may edit the snippet.
    pub allow_edit: bool,
    pub views: u64,
}

impl ShareRecord {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        is_expired(self, now)
    }
}

/// Returns `true` once `now` is strictly past the record's expiry.
///
/// A record is still live at exactly `expires_at`. Every eviction path
/// (lazy on access, eager on sweep) goes through this function.
pub fn is_expired(record: &ShareRecord, now: Timestamp) -> bool {
    record.expires_at.is_some_and(|expires_at| expires_at < now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::SignedDuration;

    fn record(expires_at: Option<Timestamp>) -> ShareRecord {
        ShareRecord {
            id: ShareId::new_unchecked("abc123"),
            content: "int main(){}".to_string(),
            stdin: String::new(),
            display_name: "Main".to_string(),
            created_at: Timestamp::from_second(0).unwrap(),
            expires_at,
            is_public: true,
            allow_edit: false,
            views: 0,
        }
    }

    #[test]
    fn never_expires_without_deadline() {
        let r = record(None);
        assert!(!is_expired(&r, Timestamp::MAX));
    }

    #[test]
    fn live_up_to_deadline_inclusive() {
        let deadline = Timestamp::from_second(3600).unwrap();
        let r = record(Some(deadline));

        assert!(!r.is_expired(deadline - SignedDuration::from_secs(1)));
        assert!(!r.is_expired(deadline));
        assert!(r.is_expired(deadline + SignedDuration::from_nanos(1)));
    }
}
