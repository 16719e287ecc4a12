//! 予測API連携

mod predict;

pub use predict::{request_prediction, UPLOAD_FIELD};

use wasm_bindgen::JsValue;
use leaf_nutrition_common::Error;

/// JS側の例外を通信エラーに変換
pub(crate) fn js_error(e: JsValue) -> Error {
    Error::Transport(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}
