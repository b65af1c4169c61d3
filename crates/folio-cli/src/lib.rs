//! Command-line interface for a Folio site.
//!
//! # Key Abstractions
//!
//! - [`FolioCli<C>`](app::FolioCli): the application, generic over the
//!   [`ConfigProvider`](folio_core::ConfigProvider) that supplies site paths
//! - [`FolioConfig`](config::FolioConfig): file, environment, and default
//!   configuration loaded with `confyg`

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod gallery_handlers;
pub mod index_handlers;

pub use app::FolioCli;
pub use cli::CliArgs;
pub use config::FolioConfig;
