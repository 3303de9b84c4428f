//! Hero banner slider: rotates background images while the banner is on
//! screen, the tab is visible, and nobody is hovering or focused on it.

pub mod config;
pub mod constants;
pub mod controller;
pub mod environment;
pub mod event;
pub mod geometry;
pub mod sim;
pub mod slide;
pub mod state;

#[cfg(feature = "desktop")]
pub mod desktop;

pub use config::{DisplayPreferences, HeroConfig, HeroMode};
pub use controller::HeroSlider;
pub use environment::{HeroEnvironment, TimerHandle};
pub use event::HeroEvent;
