/// Application name
pub const APP_NAME: &str = "Passage";

/// Default status of a freshly submitted consultation or contact message
pub const STATUS_PENDING: &str = "pending";

/// Default status of a fundraising campaign
pub const STATUS_ACTIVE: &str = "active";

/// Maximum number of entries returned by the top-contributors leaderboard
pub const TOP_CONTRIBUTORS_LIMIT: usize = 10;

/// Prefix shared by every JSON API route
pub const API_PREFIX: &str = "/api";

/// Default HTTP API port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Default request body limit in bytes (1 MiB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 1024 * 1024;

/// Default number of response-body characters echoed by the request log
pub const DEFAULT_LOG_BODY_PREVIEW: usize = 80;
