//! 診断結果の表示
//!
//! 端末向けテキストと `--json` 用の機械可読な形式。

use leaf_nutrition_common::{Diagnosis, NutrientAdvice, PredictionLabel, RecommendationRecord};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisReport<'a> {
    pub file: &'a str,
    pub label: PredictionLabel,
    pub diagnosis: &'static str,
    pub confidence: f64,
    pub confidence_percent: u8,
    #[serde(skip_serializing_if = "no_probabilities")]
    pub probabilities: &'a BTreeMap<String, f64>,
    pub nutrients: &'static [NutrientAdvice; 3],
    pub treatment: &'static [&'static str],
}

impl<'a> DiagnosisReport<'a> {
    pub fn new(file: &'a str, diagnosis: &'a Diagnosis) -> Self {
        Self {
            file,
            label: diagnosis.label,
            diagnosis: diagnosis.record.diagnosis,
            confidence: diagnosis.confidence,
            confidence_percent: diagnosis.confidence_percent(),
            probabilities: &diagnosis.probabilities,
            nutrients: &diagnosis.record.nutrients,
            treatment: diagnosis.record.treatment,
        }
    }
}

fn no_probabilities(map: &&BTreeMap<String, f64>) -> bool {
    map.is_empty()
}

pub fn render_json(file: &str, diagnosis: &Diagnosis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DiagnosisReport::new(file, diagnosis))
}

/// 診断・信頼度・確率分布・推奨事項をまとめて整形
pub fn render_text(file: &str, diagnosis: &Diagnosis) -> String {
    let record = diagnosis.record;
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", record.icon, record.diagnosis));
    out.push_str(&format!("  ファイル: {}\n", file));
    out.push_str(&format!("  信頼度: {}%\n", diagnosis.confidence_percent()));

    if !diagnosis.probabilities.is_empty() {
        out.push_str("\n確率分布:\n");
        // 高い順
        let mut probs: Vec<_> = diagnosis.probabilities.iter().collect();
        probs.sort_by(|a, b| b.1.total_cmp(a.1));
        for (label, p) in probs {
            out.push_str(&format!("  {:<14} {:>5.1}%\n", label, p * 100.0));
        }
    }

    out.push('\n');
    out.push_str(&render_recommendation(record));
    out
}

/// 推奨事項のみ（`recommend` コマンド用）
pub fn render_recommendation(record: &RecommendationRecord) -> String {
    let mut out = String::new();

    out.push_str("Nutrient Recommendations:\n");
    for advice in &record.nutrients {
        out.push_str(&format!(
            "  {:<16} {}\n",
            advice.nutrient.name(),
            advice.status.badge()
        ));
        out.push_str(&format!("    {}\n", advice.description));
    }

    out.push_str("\nRecommended Actions:\n");
    for (i, action) in record.treatment.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, action));
    }
    out
}
