use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Success response wrapper shared by every API endpoint.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub meta: Meta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// RFC 3339 timestamp with millisecond precision.
    pub requested_at: String,
    pub endpoint: &'static str,
}

impl<T> Envelope<T> {
    pub fn new(data: T, endpoint: &'static str) -> Self {
        Self {
            success: true,
            data,
            meta: Meta {
                requested_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                endpoint,
            },
        }
    }
}
