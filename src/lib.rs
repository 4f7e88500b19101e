pub mod agent;
pub mod config;
pub mod diagram;
pub mod render;
pub mod session;
pub mod util;
pub mod web;

pub use agent::{AgentError, ChatAgent, LlmClient, OpenAiClient};
pub use config::Config;
pub use diagram::DiagramBuffer;
pub use render::PlantUmlRenderer;
pub use session::{Session, SessionStore};
pub use web::{build_router, WebAppState};
