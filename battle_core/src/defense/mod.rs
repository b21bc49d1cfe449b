//! Defense system - Evasion

mod dodge;

pub use dodge::{base_dodge_rate, dodge_rate};
