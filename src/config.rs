use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::model::{ChatMessage, HistoryEntry};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "michat.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "GALLERY_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub gallery: GalleryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Sample data shown on the gallery page.
#[derive(Debug, Deserialize, Clone)]
pub struct GalleryConfig {
    pub title: String,
    #[serde(default = "sample_messages")]
    pub messages: Vec<ChatMessage>,
    #[serde(default = "sample_history")]
    pub history: Vec<HistoryEntry>,
}

fn sample_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::user("Can you summarise the attached notes?"),
        ChatMessage::other("Sure. Upload the file and I will take a look."),
    ]
}

fn sample_history() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry::new("hello"),
        HistoryEntry::new(
            "Write a short story about a lighthouse keeper who collects shipwrecked letters",
        ),
    ]
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
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("gallery.title", "MiChat components")?;

        // An explicit file must exist; the working-directory fallback is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::with_name(path)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        // E.g. MICHAT_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("MICHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Flags (and their clap env fallbacks) win over everything else.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }

        builder.build()?.try_deserialize()
    }
}
