use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::agent::{openai, AgentSettings, DEFAULT_MODEL};
use crate::render::DEFAULT_RENDER_URL;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerSettings,
    pub render: RenderSettings,
    pub llm: LlmSettings,
    pub chat: ChatSettings,
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Image endpoint the encoded diagram is appended to
    pub base_url: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RENDER_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub max_consecutive_tool_calls: usize,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: openai::DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            max_consecutive_tool_calls: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatSettings {
    pub max_message_chars: usize,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            max_message_chars: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeSettings {
    /// Draw a random theme per session until the user picks one
    pub random_theme: bool,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self { random_theme: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlRenderConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlLlmConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
    pub max_consecutive_tool_calls: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlChatConfig {
    pub max_message_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlThemeConfig {
    pub random_theme: Option<bool>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub server: Option<TomlServerConfig>,
    pub render: Option<TomlRenderConfig>,
    pub llm: Option<TomlLlmConfig>,
    pub chat: Option<TomlChatConfig>,
    pub theme: Option<TomlThemeConfig>,
}

impl Config {
    /// Load configuration from the data directory, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`; a missing or malformed file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return config,
        };
        match toml::from_str::<TomlConfig>(&contents) {
            Ok(toml_config) => config.merge(toml_config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
            }
        }

        config
    }

    /// Overlay the values set in a parsed config file
    pub fn merge(&mut self, toml: TomlConfig) {
        if let Some(server) = toml.server {
            if let Some(host) = server.host {
                self.server.host = host;
            }
            if let Some(port) = server.port {
                self.server.port = port;
            }
        }

        if let Some(base_url) = toml.render.and_then(|r| r.base_url) {
            self.render.base_url = base_url;
        }

        if let Some(llm) = toml.llm {
            if let Some(base_url) = llm.base_url {
                self.llm.base_url = base_url;
            }
            if let Some(model) = llm.model {
                self.llm.model = model;
            }
            if let Some(api_key_env) = llm.api_key_env {
                self.llm.api_key_env = api_key_env;
            }
            if let Some(max) = llm.max_consecutive_tool_calls {
                self.llm.max_consecutive_tool_calls = max;
            }
        }

        if let Some(max) = toml.chat.and_then(|c| c.max_message_chars) {
            self.chat.max_message_chars = max;
        }

        if let Some(random_theme) = toml.theme.and_then(|t| t.random_theme) {
            self.theme.random_theme = random_theme;
        }
    }

    /// Settings handed to each new session's agent
    pub fn agent_settings(&self) -> AgentSettings {
        AgentSettings {
            model: self.llm.model.clone(),
            max_consecutive_tool_calls: self.llm.max_consecutive_tool_calls,
            max_message_chars: self.chat.max_message_chars,
        }
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }
}
