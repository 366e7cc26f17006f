//! Registration, deletion and discovery flows, independent of Discord.
//!
//! The `discord` layer collects input from interactions, hands it to these
//! functions and renders what they return.

pub mod deletion;
pub mod discovery;
pub mod registration;
