pub mod evaluation_settings;
pub mod home;
