pub mod browse;
pub mod home;
