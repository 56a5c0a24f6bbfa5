#![doc = include_str!("../README.md")]

pub use obx_reflect as reflect;
