// ── User-facing message texts ──
//
// Shared by the orchestrator (toast texts) and the view layer.

pub const USERS_FETCHED: &str = "Users fetched successfully";
pub const USER_ADDED: &str = "User added successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";

pub const FETCH_FAILED: &str = "Failed to fetch users";
pub const ADD_FAILED: &str = "Failed to add user";
pub const UPDATE_FAILED: &str = "Failed to update user";
pub const DELETE_FAILED: &str = "Failed to delete user";

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this user?";
pub const NO_USERS: &str = "No users found. Please add a new user.";
