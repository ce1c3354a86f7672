//! Heart swarm visualization component.
//!
//! Renders a swarm of particles that converge onto a pulsing heart outline:
//! - The heart curve is sampled once into normalized points
//! - Every frame the points are projected to the surface at the current pulse
//! - Each particle seeks its target point and drags a smoothed trail
//! - Trails fade over a translucent wash and glow where they overlap
//!
//! # Example
//!
//! ```ignore
//! use heart_swarm::{HeartCanvas, SwarmConfig};
//!
//! view! { <HeartCanvas config=SwarmConfig { seed: Some(7), ..Default::default() } /> }
//! ```

mod component;
pub mod config;
pub mod curve;
pub mod particles;
pub mod profile;
pub mod random;
pub mod render;
pub mod state;
pub mod swarm;
pub mod targets;
pub mod theme;

pub use component::HeartCanvas;
pub use config::{ConfigError, SwarmConfig};
pub use profile::{DeviceClass, DeviceProfile};
pub use random::RandomSource;
pub use render::{BlendMode, Compositor, Surface};
pub use swarm::{Phase, Swarm};
pub use theme::Theme;
