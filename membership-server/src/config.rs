//! Command-line and environment configuration for the server binary.

use clap::Parser;

/// In-memory membership REST service.
#[derive(Debug, Clone, Parser)]
#[command(name = "membership-server", version, about, long_about = None)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "MEMBERSHIP_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// TCP port to listen on.
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Only accept the canonical `value` form field, ignoring fields named
    /// after the member key.
    #[arg(long, env = "MEMBERSHIP_NO_LEGACY_KEY_FIELD")]
    pub no_legacy_key_field: bool,

    /// Tracing filter directive, e.g. `membership_server=debug`.
    #[arg(
        long,
        env = "RUST_LOG",
        default_value = "membership_server=info,tower_http=info"
    )]
    pub log_filter: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn router_options(&self) -> RouterOptions {
        RouterOptions {
            legacy_key_field: !self.no_legacy_key_field,
        }
    }
}

/// Behavior switches consumed by the request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    /// Accept `<key>=<value>` when the canonical `value` field is absent.
    pub legacy_key_field: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            legacy_key_field: true,
        }
    }
}
