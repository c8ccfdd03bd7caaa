//! Query parameters that produced a list of logs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Parameters of the query whose results are being displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Free-text query string
    #[serde(default)]
    pub query: String,
    /// Start of the time window
    pub time_start: DateTime<Utc>,
    /// End of the time window
    pub time_end: DateTime<Utc>,
    /// Maximum number of results requested
    pub size: u32,
}
