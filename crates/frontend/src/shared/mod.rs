pub mod api_utils;
pub mod clipboard;
pub mod context;
pub mod icons;
pub mod notifications;
pub mod overlay;
