/// Configuration constants for the Flatfile API
pub mod api {
    /// Token exchange endpoint (POST)
    pub const AUTH_EXCHANGE: &str = "auth/access-key/exchange";

    /// Workbooks endpoint
    pub const WORKBOOKS: &str = "workbooks";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Environments endpoint
    pub const ENVIRONMENTS: &str = "environments";

    /// Spaces endpoint
    pub const SPACES: &str = "spaces";

    /// Content type expected on every API response
    pub const JSON_CONTENT_TYPE: &str = "application/json";
}

/// Environment variable names for configuration and credentials
pub mod env_vars {
    /// Hostname used to build every endpoint URL
    pub const API_HOST: &str = "FLATFILE_API_HOST";

    /// Client ID half of the credential pair
    pub const CLIENT_ID: &str = "FLATFILE_CLIENT_ID";

    /// Secret half of the credential pair
    pub const SECRET: &str = "FLATFILE_SECRET";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
