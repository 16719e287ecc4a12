use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeafError {
    #[error(transparent)]
    Common(#[from] leaf_nutrition_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未知のラベルです: {label}（有効: {known}）")]
    UnknownLabel { label: String, known: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LeafError>;
