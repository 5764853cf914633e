pub mod about;
pub mod error;
pub mod home;
pub mod result;
pub mod team;
pub mod upload;
