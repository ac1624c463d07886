//! Messages surfaced to callers of the role operations.

pub const INTERNAL_SERVER_ERROR: &str =
    "Oops! We are experiencing an issue with our server. Please try again later";
pub const ROLE_ADDED: &str = "Role added successfully";
pub const ROLE_REMOVED: &str = "Role Removed successfully";
pub const ROLE_FETCH_FAILED: &str = "Oops! we are unable to fetch the roles";
