//! Multi-step flows started from the setup message buttons.

pub mod deletion;
pub mod finder;
pub mod signup;
