//! 予測APIレスポンスの型とパーサー

use std::collections::BTreeMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// 分類器が返すラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PredictionLabel {
    #[serde(rename = "N_Deficiency")]
    NitrogenDeficiency,
    #[serde(rename = "P_Deficiency")]
    PhosphorusDeficiency,
    #[serde(rename = "K_Deficiency")]
    PotassiumDeficiency,
    #[serde(rename = "Healthy")]
    Healthy,
}

impl PredictionLabel {
    pub const ALL: [PredictionLabel; 4] = [
        PredictionLabel::NitrogenDeficiency,
        PredictionLabel::PhosphorusDeficiency,
        PredictionLabel::PotassiumDeficiency,
        PredictionLabel::Healthy,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionLabel::NitrogenDeficiency => "N_Deficiency",
            PredictionLabel::PhosphorusDeficiency => "P_Deficiency",
            PredictionLabel::PotassiumDeficiency => "K_Deficiency",
            PredictionLabel::Healthy => "Healthy",
        }
    }

    /// ワイヤ上の文字列から変換（完全一致のみ）
    pub fn from_wire(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, PredictionLabel::Healthy)
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 予測APIの成功レスポンス
///
/// ラベルはバックエンドでは `prediction` として返るが、`label` も受け付ける。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "prediction", alias = "label")]
    pub label: String,
    pub confidence: f64,
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,
}

impl PredictionResponse {
    pub fn new(label: impl Into<String>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
            probabilities: BTreeMap::new(),
        }
    }

    /// 既知ラベルへの変換。未知なら `UnknownLabel`
    pub fn known_label(&self) -> Result<PredictionLabel> {
        PredictionLabel::from_wire(&self.label).ok_or_else(|| Error::UnknownLabel(self.label.clone()))
    }
}

/// エラー時のレスポンス（`{"error": "..."}`）
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// レスポンス本文をパース
///
/// 信頼度が有限でない、または [0,1] の範囲外なら不正なレスポンスとして扱う。
///
/// # Examples
/// ```
/// use leaf_nutrition_common::parse_prediction;
///
/// let response = parse_prediction(r#"{"prediction": "Healthy", "confidence": 0.5}"#).unwrap();
/// assert_eq!(response.label, "Healthy");
/// ```
pub fn parse_prediction(body: &str) -> Result<PredictionResponse> {
    let response: PredictionResponse = serde_json::from_str(body.trim())
        .map_err(|e| Error::MalformedResponse(e.to_string()))?;

    if !response.confidence.is_finite() || !(0.0..=1.0).contains(&response.confidence) {
        return Err(Error::MalformedResponse(format!(
            "confidence out of range: {}",
            response.confidence
        )));
    }

    Ok(response)
}

/// 非2xxレスポンス本文からエラーメッセージを取り出す
pub fn parse_api_error(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body.trim())
        .ok()
        .map(|b| b.error)
}

/// 信頼度をパーセント表示用の整数に変換（四捨五入）
pub fn confidence_percent(confidence: f64) -> u8 {
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backend_response() {
        let body = r#"{
            "prediction": "N_Deficiency",
            "confidence": 0.93,
            "probabilities": {
                "P_Deficiency": 0.02,
                "Healthy": 0.03,
                "N_Deficiency": 0.93,
                "K_Deficiency": 0.02
            }
        }"#;

        let response = parse_prediction(body).expect("パース失敗");
        assert_eq!(response.label, "N_Deficiency");
        assert_eq!(response.known_label().unwrap(), PredictionLabel::NitrogenDeficiency);
        assert_eq!(response.probabilities.len(), 4);
        assert_eq!(response.probabilities["Healthy"], 0.03);
    }

    #[test]
    fn test_parse_label_alias_without_probabilities() {
        let response = parse_prediction(r#"{"label": "Healthy", "confidence": 0.5}"#).unwrap();
        assert_eq!(response.known_label().unwrap(), PredictionLabel::Healthy);
        assert!(response.probabilities.is_empty());
    }

    #[test]
    fn test_unknown_label_is_parsed_but_not_known() {
        let response = parse_prediction(r#"{"prediction": "Unknown_Class", "confidence": 0.8}"#).unwrap();
        assert!(matches!(response.known_label(), Err(Error::UnknownLabel(l)) if l == "Unknown_Class"));
    }

    #[test]
    fn test_malformed_bodies() {
        for body in [
            "",
            "<html>502 Bad Gateway</html>",
            r#"{"confidence": 0.4}"#,
            r#"{"prediction": "Healthy"}"#,
            r#"{"prediction": "Healthy", "confidence": "high"}"#,
            r#"{"prediction": "Healthy", "confidence": 1.2}"#,
            r#"{"prediction": "Healthy", "confidence": -0.1}"#,
        ] {
            assert!(
                matches!(parse_prediction(body), Err(Error::MalformedResponse(_))),
                "expected malformed: {body}"
            );
        }
    }

    #[test]
    fn test_parse_api_error() {
        assert_eq!(
            parse_api_error(r#"{"error": "No file uploaded"}"#).as_deref(),
            Some("No file uploaded")
        );
        assert_eq!(parse_api_error("Internal Server Error"), None);
    }

    #[test]
    fn test_confidence_percent_rounding() {
        assert_eq!(confidence_percent(0.93), 93);
        assert_eq!(confidence_percent(0.5), 50);
        assert_eq!(confidence_percent(0.125), 13);
        assert_eq!(confidence_percent(0.994), 99);
        assert_eq!(confidence_percent(0.996), 100);
        assert_eq!(confidence_percent(0.0), 0);
        assert_eq!(confidence_percent(1.0), 100);
    }

    #[test]
    fn test_label_wire_names() {
        for label in PredictionLabel::ALL {
            assert_eq!(PredictionLabel::from_wire(label.as_str()), Some(label));
            let json = serde_json::to_string(&label).unwrap();
            assert_eq!(json, format!("\"{}\"", label.as_str()));
        }
        assert_eq!(PredictionLabel::from_wire("healthy"), None);
    }
}
