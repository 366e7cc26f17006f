mod bot;
pub mod commands;
mod components;
mod embeds;
mod failure;
mod handler;
mod ids;
mod interactions;

pub use bot::{Data, create_framework};
