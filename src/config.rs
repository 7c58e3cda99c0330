//! Layered application configuration.
//!
//! Resolution order: built-in defaults, then an optional YAML file
//! (`--config`/`CONFIG_FILE`, falling back to `./config.yaml`), then
//! `BUDDY_`-prefixed environment variables, then CLI flags.

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Downstream chat endpoint URL
    #[arg(long, env = "DOWNSTREAM_CHAT_URL")]
    pub downstream_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub downstream: DownstreamConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DownstreamConfig {
    /// Full URL of the downstream chat endpoint.
    ///
    /// Must not point back at this relay's own listening address; the
    /// original deployment shipped one revision doing exactly that, which
    /// made every request fail against itself.
    pub chat_url: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3001)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("downstream.chat_url", "http://localhost:5000/api/chat")?;

        // Optional config file: explicit path wins, else ./config.yaml if present
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::with_name(path));
        } else if std::path::Path::new("config.yaml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        // Environment variables prefixed with BUDDY_, e.g. BUDDY_SERVER__PORT=8000.
        // `separator` alone would also split the prefix on `__`; the prefix is
        // joined with a single underscore.
        builder = builder.add_source(
            Environment::with_prefix("BUDDY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // CLI overrides (clap also resolves PORT / DOWNSTREAM_CHAT_URL env vars)
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(url) = cli.downstream_url {
            builder = builder.set_override("downstream.chat_url", url)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
