//! 予測エンドポイントへのmultipart送信
//!
//! 選択中のファイルを1フィールドのフォームとしてPOSTし、
//! レスポンス本文を `PredictionResponse` に変換する。
//! 再試行・タイムアウトは行わない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};
use leaf_nutrition_common::{parse_prediction, Error, PredictionResponse, Result};
use super::js_error;

/// multipartのフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// 予測API呼び出し
///
/// # Arguments
/// * `endpoint` - 予測APIのURL
/// * `file` - 送信する画像ファイル
///
/// # Returns
/// * `Ok(PredictionResponse)` - 2xxかつ本文がパースできた場合
/// * `Err` - 通信失敗・非2xx・不正な本文
pub async fn request_prediction(endpoint: &str, file: &File) -> Result<PredictionResponse> {
    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(js_error)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form);

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::HttpStatus(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::MalformedResponse("response body is not text".into()))?;

    parse_prediction(&body)
}
