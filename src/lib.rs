pub mod app;
pub mod config;
pub mod error;
pub mod layout;
pub mod navigation;
pub mod notification;
pub mod suggest;
pub mod voice;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;
