//! ami-color - RGB/HSV conversion and HSV adjustment
//!
//! This crate provides the color math of the AMI engine:
//!
//! - [`Hsv`]: tagged per-pixel HSV state (chromatic or achromatic)
//! - [`rgb_to_hsv`] / [`hsv_to_rgb`]: the per-pixel conversions
//! - [`adjust_hsv`]: hue rotation and saturation/value scaling over a
//!   buffer region, reading from a frozen snapshot

mod adjust;
mod error;
mod hsv;

pub use adjust::{HsvAdjustment, adjust_hsv, adjust_hsv_from};
pub use error::{ColorError, ColorResult};
pub use hsv::{Hsv, MAX_DEGREES, hsv_to_rgb, rgb_to_hsv};
