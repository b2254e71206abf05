#![no_std]

mod error;
mod pool;

pub use error::*;
pub use pool::*;
