//! クライアント設定
//!
//! Web(WASM)とCLIで共有する予測APIの接続先とアップロード制限

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// 予測APIのデフォルトURL
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

/// アップロード上限（10MiB）
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// 受け付けるMIMEタイプ（宣言値のみで判定）
pub const ACCEPTED_FORMATS: &[&str] = &["image/png", "image/jpeg", "image/jpg"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub max_file_size: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

impl ClientConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = self.endpoint.trim();
        if endpoint.is_empty() {
            return Err(Error::Config("endpoint is empty".into()));
        }
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(Error::Config(format!(
                "endpoint must be an http(s) URL: {}",
                endpoint
            )));
        }
        if self.max_file_size == 0 {
            return Err(Error::Config("maxFileSize must be positive".into()));
        }
        Ok(())
    }

    /// エンドポイントのオリジン部分（"http://host:port"）
    ///
    /// # Examples
    /// ```
    /// use leaf_nutrition_common::ClientConfig;
    ///
    /// let config = ClientConfig::default();
    /// assert_eq!(config.backend_origin(), "http://localhost:5000");
    /// ```
    pub fn backend_origin(&self) -> &str {
        let endpoint = self.endpoint.trim();
        let host_start = endpoint.find("://").map(|i| i + 3).unwrap_or(0);
        match endpoint[host_start..].find('/') {
            Some(offset) => &endpoint[..host_start + offset],
            None => endpoint,
        }
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.backend_origin())
    }
}
