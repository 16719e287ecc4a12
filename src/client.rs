//! 予測APIクライアント
//!
//! ブラウザ版と同じく画像を `file` フィールド1つのmultipartで送る。

use crate::error::Result;
use leaf_nutrition_common::{
    parse_api_error, parse_prediction, ClientConfig, Error, PredictionResponse, SelectedFile,
};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// multipartのフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// `/health` のレスポンス
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}

pub struct PredictionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// 画像を送信して予測結果を受け取る
    ///
    /// 失敗はすべて共通エラーで返し、そのまま `Pipeline::finish_submit` に渡せる。
    pub async fn predict(
        &self,
        file: &SelectedFile<Vec<u8>>,
    ) -> leaf_nutrition_common::Result<PredictionResponse> {
        let part = Part::bytes(file.blob.clone())
            .file_name(file.name.clone())
            .mime_str(&file.media_type)
            .map_err(transport)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        log::debug!("POST {} ({} bytes)", self.config.endpoint, file.size);
        let resp = self
            .http
            .post(&self.config.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(match parse_api_error(&body) {
                Some(message) => Error::Api {
                    status: status.as_u16(),
                    message,
                },
                None => Error::HttpStatus(status.as_u16()),
            });
        }

        parse_prediction(&body)
    }

    /// バックエンドの稼働確認
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.config.health_url();
        log::debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let status: HealthStatus = resp.json().await?;
        Ok(status)
    }
}

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}
