pub mod email;
pub mod username;
