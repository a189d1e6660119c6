use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub synthesizer: SynthesizerConfig,
}

/// Page-fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Total request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_fetch_timeout")]
    pub timeout_secs: u64,

    /// Connect-phase timeout in seconds
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Maximum redirect hops to follow
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-agent header; defaults to a mainstream browser string
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Generator endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Chat-completions endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Output token ceiling per request
    #[serde(rename = "max-output-tokens", default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// Send a JSON response-format constraint when the request wants JSON
    #[serde(rename = "structured-output", default = "default_structured_output")]
    pub structured_output: bool,

    /// Generator request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_generator_timeout")]
    pub timeout_secs: u64,

    /// Name of the environment variable holding the bearer credential
    #[serde(rename = "api-key-env", default = "default_api_key_env")]
    pub api_key_env: String,

    /// Bearer credential, resolved from the environment at load time
    #[serde(skip)]
    pub api_key: String,
}

/// Synthesis behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SynthesizerConfig {
    /// Input ceiling in characters before silent truncation
    #[serde(rename = "max-input-chars", default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Minimum cleaned-text length for a page to be considered usable;
    /// enforced by the caller, not the extractor
    #[serde(rename = "min-content-length", default = "default_min_content_length")]
    pub min_content_length: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_fetch_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            structured_output: default_structured_output(),
            timeout_secs: default_generator_timeout(),
            api_key_env: default_api_key_env(),
            api_key: String::new(),
        }
    }
}

impl Default for SynthesizerConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            min_content_length: default_min_content_length(),
        }
    }
}

fn default_fetch_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36"
        .to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_structured_output() -> bool {
    true
}

fn default_generator_timeout() -> u64 {
    120
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_max_input_chars() -> usize {
    10_000
}

fn default_min_content_length() -> usize {
    50
}
