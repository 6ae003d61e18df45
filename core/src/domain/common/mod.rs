use chrono::{DateTime, Utc};
use url::Url;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;
pub mod value_objects;

#[derive(Clone, Debug)]
pub struct NourishConfig {
    pub backend: BackendConfig,
}

/// Location of the external inventory backend.
#[derive(Clone, Debug)]
pub struct BackendConfig {
    pub base_url: Url,
    pub timeout_secs: u64,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
