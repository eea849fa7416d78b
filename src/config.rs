use once_cell::sync::OnceCell;
use serde::Deserialize;

mod app_env;

pub use app_env::app_env;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub upstream: UpstreamSettings,
    pub draft_store: DraftStoreSettings,
    pub request_deadline_ms: u64,
    pub concept_batch_size: usize,
    pub default_schema_version: String,
    pub pac_origin_id: String,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    /// Contains a `{content_id}` placeholder substituted per request.
    pub annotations_url_template: String,
    pub concept_resolver_url: String,
    pub credentials: Credentials,
    /// A concept id known to exist, used by the concept resolver's GTG probe.
    pub gtg_concept_id: String,
    /// A content id known to exist (or to return a stable response), used by
    /// the upstream annotations client's GTG probe.
    pub gtg_content_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DraftStoreSettings {
    pub root_url: String,
    #[serde(default)]
    pub credentials: Option<Credentials>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

pub fn settings() -> &'static Settings {
    static SETTINGS: OnceCell<Settings> = OnceCell::new();
    SETTINGS.get_or_init(|| load_settings().expect("failed to load settings"))
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let current_dir = std::env::current_dir()?;
    let config_dir = current_dir.join("config");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_dir.join("base")).required(false))
        .add_source(config::File::from(config_dir.join(app_env().as_str())).required(false))
        .add_source(
            config::Environment::with_prefix("DRAFT_ANNOTATIONS")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
