use crate::error::{LeafError, Result};
use leaf_nutrition_common::{media_type_for_extension, validate, ClientConfig, SelectedFile};
use std::path::Path;

/// 拡張子から判定できないときの宣言値（検証で必ず弾かれる）
const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// 画像ファイルを読み込んで送信用に包む
///
/// 形式とサイズはメタデータで先に検証し、通ったものだけ読み込む。
pub fn load_image(path: &Path, config: &ClientConfig) -> Result<SelectedFile<Vec<u8>>> {
    if !path.is_file() {
        return Err(LeafError::FileNotFound(path.display().to_string()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let media_type = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(media_type_for_extension)
        .unwrap_or(UNKNOWN_MEDIA_TYPE);
    let size = std::fs::metadata(path)?.len();

    validate(media_type, size, config)?;

    let bytes = std::fs::read(path)?;
    log::debug!("loaded {} ({}, {} bytes)", name, media_type, bytes.len());
    Ok(SelectedFile::new(name, media_type, size, bytes))
}
