mod config;
mod debounce;
mod device_detector;
mod environment;
mod error;
mod navigation;
mod rules;
mod screen;
mod session;
mod store;
mod types;

pub use config::{DetectionConfig, ScreenThresholds, DEFAULT_SESSION_KEY};
pub use device_detector::DeviceClassifier;
pub use environment::{probe_touch, Environment, StaticEnvironment, TouchSignals};
pub use error::{Error, Result};
pub use navigation::{resolve_navigation, Element, NAVIGATION_ATTRIBUTE};
pub use screen::classify_screen;
pub use session::{DisabledSessionStorage, MemorySessionStorage, SessionStorage};
pub use store::SnapshotStore;
pub use types::*;
