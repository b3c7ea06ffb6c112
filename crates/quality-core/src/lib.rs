pub mod capability;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod handle;
pub mod monitor;
pub mod throttle;
pub mod tier;

pub use capability::*;
pub use config::*;
pub use controller::*;
pub use error::QualityError;
pub use handle::*;
pub use monitor::*;
pub use throttle::*;
pub use tier::*;
