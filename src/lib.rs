#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

pub mod classify;
pub mod config;
pub mod journal;
pub mod log;
pub mod migrate;
pub mod persist;
pub mod person;
pub mod templates;

pub mod error {
    pub use anyhow::{Error, Result};
}
