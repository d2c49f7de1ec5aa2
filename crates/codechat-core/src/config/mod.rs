use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub llm: LlmSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    pub model: String,
    pub api_key_env: String,
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for the analysis log. None means ~/.codechat.
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            llm: LlmSettings {
                model: "mixtral-8x7b-32768".to_string(),
                api_key_env: "GROQ_API_KEY".to_string(),
                base_url: None,
                max_tokens: 4096,
                temperature: 0.0,
            },
            storage: StorageSettings::default(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codechat")
            .join("config.toml")
    }

    pub fn load() -> Self {
        let config_path = Self::config_path();
        if config_path.exists() {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), crate::error::ChatError> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::ChatError::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Get the API key from the environment variable specified in settings.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env).ok()
    }

    /// Build the transport client from the current settings.
    pub fn build_llm_client(
        &self,
    ) -> Result<Box<dyn crate::llm::LlmClient>, crate::error::ChatError> {
        let api_key = self.api_key().ok_or_else(|| {
            crate::error::ChatError::Config(format!(
                "Set {} environment variable",
                self.llm.api_key_env
            ))
        })?;

        let mut client = crate::llm::GroqClient::new(api_key)
            .with_model(&self.llm.model)
            .with_max_tokens(self.llm.max_tokens)
            .with_temperature(self.llm.temperature);
        if let Some(ref url) = self.llm.base_url {
            client = client.with_base_url(url);
        }

        Ok(Box::new(client))
    }

    /// Build the analysis store from the current settings.
    pub fn build_analysis_store(
        &self,
    ) -> Result<Box<dyn crate::store::AnalysisStore>, crate::error::ChatError> {
        let store = match self.storage.data_dir {
            Some(ref dir) => crate::store::JsonlAnalysisStore::with_dir(dir.clone())?,
            None => crate::store::JsonlAnalysisStore::new()?,
        };
        Ok(Box::new(store))
    }
}
