//! エラー型定義

use thiserror::Error;

/// エラー種別（ユーザーへの通知方法と復帰先の判定に使う）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 形式不正・サイズ超過
    InvalidUpload,
    /// 通信失敗・非2xx・不正なレスポンス
    Network,
    /// 未知の判定ラベル
    UnknownResult,
    /// 解析画面の要素が見つからない
    Binding,
    /// 設定不正
    Config,
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported media type: {0}")]
    UnsupportedFormat(String),

    #[error("file too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("prediction API returned status {0}")]
    HttpStatus(u16),

    #[error("prediction API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),

    #[error("unknown prediction label: {0}")]
    UnknownLabel(String),

    #[error("analysis view element missing: #{0}")]
    MissingElement(&'static str),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat(_) | Error::FileTooLarge { .. } => ErrorKind::InvalidUpload,
            Error::Transport(_)
            | Error::HttpStatus(_)
            | Error::Api { .. }
            | Error::MalformedResponse(_)
            | Error::Json(_) => ErrorKind::Network,
            Error::UnknownLabel(_) => ErrorKind::UnknownResult,
            Error::MissingElement(_) => ErrorKind::Binding,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// アラート表示用メッセージ
    ///
    /// # Arguments
    /// * `backend_origin` - 通信失敗時に案内するバックエンドのオリジン
    pub fn user_message(&self, backend_origin: &str) -> String {
        match self {
            Error::UnsupportedFormat(_) => "Please upload a PNG or JPEG image file.".to_string(),
            Error::FileTooLarge { max, .. } => {
                format!("File size exceeds {}MB limit.", max / (1024 * 1024))
            }
            Error::UnknownLabel(_) => "Unknown prediction result".to_string(),
            e if e.kind() == ErrorKind::Network => format!(
                "Analysis failed. Please make sure the backend server is running on {}",
                backend_origin
            ),
            other => other.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
