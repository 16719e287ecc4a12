//! 画像読み込みテスト
//!
//! 拡張子による形式判定とサイズ検証の順序を確認

use leaf_nutrition::error::LeafError;
use leaf_nutrition::upload::load_image;
use leaf_nutrition_common::{ClientConfig, Error};
use tempfile::tempdir;

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[test]
fn test_load_png() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("leaf.png");
    std::fs::write(&path, PNG_BYTES).unwrap();

    let file = load_image(&path, &ClientConfig::default()).unwrap();
    assert_eq!(file.name, "leaf.png");
    assert_eq!(file.media_type, "image/png");
    assert_eq!(file.size, PNG_BYTES.len() as u64);
    assert_eq!(file.blob, PNG_BYTES);
}

/// 拡張子の大文字小文字は区別しない
#[test]
fn test_load_uppercase_jpeg() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("LEAF.JPEG");
    std::fs::write(&path, b"\xFF\xD8\xFF").unwrap();

    let file = load_image(&path, &ClientConfig::default()).unwrap();
    assert_eq!(file.media_type, "image/jpeg");
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = load_image(&dir.path().join("missing.png"), &ClientConfig::default());
    assert!(matches!(result, Err(LeafError::FileNotFound(_))));
}

#[test]
fn test_load_unsupported_extension() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("leaf.gif");
    std::fs::write(&path, b"GIF89a").unwrap();

    let result = load_image(&path, &ClientConfig::default());
    assert!(matches!(
        result,
        Err(LeafError::Common(Error::UnsupportedFormat(_)))
    ));
}

/// 上限ちょうどは許可、1バイト超過で拒否
#[test]
fn test_load_size_boundary() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = ClientConfig {
        max_file_size: 16,
        ..ClientConfig::default()
    };

    let exact = dir.path().join("exact.png");
    std::fs::write(&exact, [0u8; 16]).unwrap();
    assert!(load_image(&exact, &config).is_ok());

    let over = dir.path().join("over.png");
    std::fs::write(&over, [0u8; 17]).unwrap();
    assert!(matches!(
        load_image(&over, &config),
        Err(LeafError::Common(Error::FileTooLarge { size: 17, max: 16 }))
    ));
}

/// 形式の検証がサイズより先
#[test]
fn test_format_checked_before_size() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = ClientConfig {
        max_file_size: 4,
        ..ClientConfig::default()
    };
    let path = dir.path().join("big.bmp");
    std::fs::write(&path, [0u8; 32]).unwrap();

    assert!(matches!(
        load_image(&path, &config),
        Err(LeafError::Common(Error::UnsupportedFormat(_)))
    ));
}
