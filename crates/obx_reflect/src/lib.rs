#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Extern Self

// We need to use `crate` in the crate itself and `obx_reflect` in generated
// code and doc tests. An `extern self` ensures `obx_reflect` can be used as an
// alias for `crate` in both positions.
extern crate self as obx_reflect;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod classify;
pub mod compare;
pub mod error;
pub mod impls;
pub mod info;
pub mod locator;
pub mod lookup;
pub mod ops;
pub mod props;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::ReflectError;
pub use obx_reflect_derive as derive;
pub use reflection::Reflect;
