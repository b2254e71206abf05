#![no_std]

pub mod full_math;
pub mod sqrt;
pub mod swap_math;

pub use full_math::*;
pub use sqrt::*;
pub use swap_math::*;
