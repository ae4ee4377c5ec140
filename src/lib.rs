//! flatctl - Explore Flatfile platform resources
//!
//! A CLI client that authenticates against the Flatfile REST API with a
//! client-credential exchange and lists resources.
//!
//! # Features
//!
//! - List workbooks, users, environments, and spaces
//! - Multiple output formats (JSON, table, CSV, YAML)
//! - Closed error taxonomy: every HTTP exchange resolves to one structured
//!   failure kind (transport, status range, content type, decode)
//! - Credentials and host configured via environment variables
//!
//! # Example
//!
//! ```bash
//! export FLATFILE_API_HOST=platform.flatfile.com
//! export FLATFILE_CLIENT_ID=...
//! export FLATFILE_SECRET=...
//!
//! # List workbooks in a space
//! flatctl get wb --space dev_sp_dPDmdbu2
//!
//! # List users as a table
//! flatctl get user -o table
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod flatfile;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, GetResource, ListArgs, OutputFormat, WbArgs};
pub use error::{FlatfileError, Result};
pub use flatfile::{
    create_token, list_environments, list_spaces, list_users, list_workbooks, run_get_command,
    ApiEnv, Credentials, Environment, FlatfileClient, HttpRequest, HttpTransport, RawResponse,
    Space, StatusRange, User, Workbook,
};
pub use output::{output_environments, output_spaces, output_users, output_workbooks};
