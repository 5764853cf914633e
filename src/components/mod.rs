pub mod disclaimer;
pub mod navigation;
