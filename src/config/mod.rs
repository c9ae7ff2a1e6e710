//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_ENDPOINT, GlossaConfig, InvalidEndpoint, ResolveOptions,
    ResolvedConfig, resolve_config,
};
