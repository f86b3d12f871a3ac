#![doc(hidden)]

//! DaisyUI-inspired component wrappers shared by the destination atoms.

pub mod foundations;

pub mod button;

pub use button::{Button, ButtonProps};
pub use foundations::*;
