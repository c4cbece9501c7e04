pub mod home;
pub mod lists;
pub mod message;
