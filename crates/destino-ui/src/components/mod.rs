//! Yew components: DaisyUI wrappers and the destination atoms built on them.

pub mod atoms;
pub mod daisy;
