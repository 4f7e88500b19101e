mod settings;

pub use settings::{
    ChatSettings, Config, LlmSettings, RenderSettings, ServerSettings, ThemeSettings, TomlConfig,
    EXAMPLE_CONFIG,
};
