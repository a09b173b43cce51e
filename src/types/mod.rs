mod browser;
mod detection;
mod device_type;
mod viewport;

pub use browser::*;
pub use detection::*;
pub use device_type::*;
pub use viewport::*;
