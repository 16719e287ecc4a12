use crate::error::{LeafError, Result};
use leaf_nutrition_common::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 環境変数でエンドポイントを上書きする
pub const ENDPOINT_ENV: &str = "LEAF_NUTRITION_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub client: ClientConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.client.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// 既存ファイルを読まずにデフォルトで上書きする（壊れた設定の修復用）
    pub fn reset() -> Result<Self> {
        Self::reset_at(&Self::config_path()?)
    }

    pub fn reset_at(path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LeafError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("leaf-nutrition").join("config.json"))
    }

    /// 実際に使う接続設定
    ///
    /// 優先順位: コマンドライン > 環境変数 > 設定ファイル
    pub fn resolve(&self, endpoint: Option<&str>) -> Result<ClientConfig> {
        let env = std::env::var(ENDPOINT_ENV).ok();
        self.resolve_with(endpoint, env.as_deref())
    }

    pub fn resolve_with(&self, endpoint: Option<&str>, env: Option<&str>) -> Result<ClientConfig> {
        let mut client = self.client.clone();
        if let Some(url) = endpoint.or(env).filter(|u| !u.trim().is_empty()) {
            client.endpoint = url.trim().to_string();
        }
        client.validate()?;
        Ok(client)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        let candidate = ClientConfig {
            endpoint,
            ..self.client.clone()
        };
        candidate.validate()?;
        self.client = candidate;
        self.save()
    }
}
