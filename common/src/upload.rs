//! アップロードファイルの検証

use crate::config::{ClientConfig, ACCEPTED_FORMATS};
use crate::error::{Error, Result};

/// 選択中のファイル
///
/// `B` は実データの型（Webでは `web_sys::File`、CLIでは `Vec<u8>`）
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<B> {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub blob: B,
}

impl<B> SelectedFile<B> {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64, blob: B) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
            blob,
        }
    }
}

pub fn is_accepted_format(media_type: &str) -> bool {
    ACCEPTED_FORMATS
        .iter()
        .any(|f| *f == media_type)
}

/// 宣言されたMIMEタイプとサイズで検証（形式→サイズの順）
pub fn validate(media_type: &str, size: u64, config: &ClientConfig) -> Result<()> {
    if !is_accepted_format(media_type) {
        return Err(Error::UnsupportedFormat(media_type.to_string()));
    }
    if size > config.max_file_size {
        return Err(Error::FileTooLarge {
            size,
            max: config.max_file_size,
        });
    }
    Ok(())
}

/// 拡張子からMIMEタイプを推定（ブラウザのファイル選択と同じ宣言値）
pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;

    #[test]
    fn test_accepted_formats() {
        assert!(is_accepted_format("image/png"));
        assert!(is_accepted_format("image/jpeg"));
        assert!(is_accepted_format("image/jpg"));
        assert!(!is_accepted_format("image/gif"));
        assert!(!is_accepted_format("image/webp"));
        assert!(!is_accepted_format(""));
    }

    /// 宣言値は完全一致のみ（大文字・前後の空白は別物）
    #[test]
    fn test_declared_type_must_match_exactly() {
        assert!(!is_accepted_format("IMAGE/PNG"));
        assert!(!is_accepted_format("Image/Jpeg"));
        assert!(!is_accepted_format(" image/png"));
        assert!(!is_accepted_format("image/png "));
        assert!(matches!(
            validate("IMAGE/PNG", 1, &ClientConfig::default()),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_size_boundary() {
        let config = ClientConfig::default();
        assert!(validate("image/png", MAX_FILE_SIZE, &config).is_ok());
        assert!(matches!(
            validate("image/png", MAX_FILE_SIZE + 1, &config),
            Err(Error::FileTooLarge { size, max }) if size == MAX_FILE_SIZE + 1 && max == MAX_FILE_SIZE
        ));
        assert!(validate("image/jpeg", 0, &config).is_ok());
    }

    #[test]
    fn test_format_checked_before_size() {
        let config = ClientConfig::default();
        let result = validate("application/pdf", MAX_FILE_SIZE * 2, &config);
        assert!(matches!(result, Err(Error::UnsupportedFormat(t)) if t == "application/pdf"));
    }

    #[test]
    fn test_media_type_for_extension() {
        assert_eq!(media_type_for_extension("png"), Some("image/png"));
        assert_eq!(media_type_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(media_type_for_extension("jpeg"), Some("image/jpeg"));
        assert_eq!(media_type_for_extension("gif"), None);
        assert_eq!(media_type_for_extension("txt"), None);
    }
}
