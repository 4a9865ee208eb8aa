//! Reusable iced components for the Article settings panel

mod components;

pub use components::*;
