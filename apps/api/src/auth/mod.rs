// Session-cookie authentication: password login, logout, "who am I",
// plus the user-management operations used by the operator CLI.

pub mod handlers;
pub mod password;
pub mod session;
pub mod users;
