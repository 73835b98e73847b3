//! Binary counter on an 8-bit serial-in/parallel-out shift register.
//!
//! [`ShiftRegister`] bit-bangs a byte onto three output lines (data, shift
//! clock, latch), most-significant bit first. [`BinaryCounter`] shows a
//! counting pattern on the register outputs, one value per step.
#![cfg_attr(not(test), no_std)]

pub mod counter;
pub mod line;
pub mod shift;

pub use counter::{BinaryCounter, CounterConfig, Silent};
pub use line::Line;
pub use shift::ShiftRegister;
