//! Deterministic per-pixel noise sources.
//!
//! Two independent strategies feed the dither engine:
//!
//! - [`ThresholdMap`]: a tileable Bayer ordered-dithering matrix with
//!   centered values in `[-0.5, 0.5)`
//! - [`gradient_noise`]: interleaved gradient noise, a procedural hash of
//!   the pixel coordinates in `[0, 1)`
//!
//! Both are pure functions of the pixel position. No state is carried
//! between pixels, so any pixel can be evaluated in isolation.

mod gradient;
mod threshold_map;

pub use gradient::gradient_noise;
pub use threshold_map::ThresholdMap;
