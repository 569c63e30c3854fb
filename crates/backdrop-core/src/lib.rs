//! Platform-free core of the particle backdrop.
//!
//! Everything here is plain Rust: the web front-end supplies a [`Surface`]
//! to draw on and a [`Host`] that owns listeners and frame callbacks, and
//! drives [`Backdrop`] from its animation frame loop.

pub mod backdrop;
pub mod capabilities;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod gradient;
pub mod host;
pub mod particle;
pub mod pointer;
pub mod surface;
pub mod throttle;

pub use backdrop::*;
pub use capabilities::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use gradient::GradientCache;
pub use host::*;
pub use particle::*;
pub use pointer::PointerState;
pub use surface::*;
pub use throttle::{FpsMeter, FrameThrottle};
