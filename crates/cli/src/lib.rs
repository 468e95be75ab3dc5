//! `storefront-cli`
//!
//! Terminal render target and control surface for the catalog view pipeline.
//! The binary is a thin shell: parse configuration, start a session, feed it
//! commands.

pub mod app;
pub mod command;
pub mod config;
pub mod text;

pub use app::App;
pub use command::Command;
pub use config::{Args, Config};
