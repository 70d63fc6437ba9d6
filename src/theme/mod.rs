//! Page styling for Posterwall.

mod styles;

pub use styles::GLOBAL_STYLES;
