#![forbid(unsafe_code)]

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod detail;
pub mod filter;
pub mod labels;
pub mod list;
pub mod loader;
pub mod logging;
pub mod model;
pub mod provider;
pub mod render;
pub mod show;

#[cfg(test)]
pub(crate) mod test_support;
