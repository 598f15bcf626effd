//! HTTP Handlers

mod assets;
mod chat;
mod health;
mod memory;
mod pages;
mod tasks;

pub use assets::*;
pub use chat::*;
pub use health::*;
pub use memory::*;
pub use pages::*;
pub use tasks::*;
