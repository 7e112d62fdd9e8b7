pub mod api;
pub mod jobs;
pub mod preview;
pub mod view;
