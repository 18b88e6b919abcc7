//! Core callable model shared by reflection, the registry and the decorator.

pub mod callable;

pub use callable::{Callable, CallableKey, Component, ParameterNameList};
