//! Output formatting for listed resources

pub mod common;
mod environments;
mod spaces;
mod users;
mod workbooks;

pub use environments::output_environments;
pub use spaces::output_spaces;
pub use users::output_users;
pub use workbooks::output_workbooks;
