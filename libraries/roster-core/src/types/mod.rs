mod auth;
mod staff;

pub use auth::{Credentials, LoginResponse, ValidationState};
pub use staff::{ListItem, StaffMember, StaffPage};
