pub mod favorites;
pub mod home;
