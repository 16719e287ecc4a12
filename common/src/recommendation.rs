//! 栄養素の推奨事項テーブル
//!
//! 判定ラベルごとの診断文・アイコン・N/P/Kの状態・対処法。
//! 実行時の入力には依存しない静的データ。

use serde::Serialize;
use crate::prediction::PredictionLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nutrient {
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Nutrient {
    pub fn name(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "Nitrogen (N)",
            Nutrient::Phosphorus => "Phosphorus (P)",
            Nutrient::Potassium => "Potassium (K)",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "N",
            Nutrient::Phosphorus => "P",
            Nutrient::Potassium => "K",
        }
    }

    /// CSSクラス名
    pub fn key(&self) -> &'static str {
        match self {
            Nutrient::Nitrogen => "nitrogen",
            Nutrient::Phosphorus => "phosphorus",
            Nutrient::Potassium => "potassium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NutrientStatus {
    Needed,
    Sufficient,
}

impl NutrientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientStatus::Needed => "needed",
            NutrientStatus::Sufficient => "sufficient",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            NutrientStatus::Needed => "⚠️ Action Required",
            NutrientStatus::Sufficient => "✓ Sufficient",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientAdvice {
    pub nutrient: Nutrient,
    pub status: NutrientStatus,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecommendationRecord {
    pub label: PredictionLabel,
    pub diagnosis: &'static str,
    pub icon: &'static str,
    /// N, P, K の順
    pub nutrients: [NutrientAdvice; 3],
    pub treatment: &'static [&'static str],
}

impl RecommendationRecord {
    /// 状態アイコンのCSSクラス
    pub fn status_class(&self) -> &'static str {
        if self.label.is_healthy() {
            "healthy"
        } else {
            "deficiency"
        }
    }

    pub fn needed_nutrients(&self) -> impl Iterator<Item = Nutrient> + '_ {
        self.nutrients
            .iter()
            .filter(|n| n.status == NutrientStatus::Needed)
            .map(|n| n.nutrient)
    }
}

const fn advice(nutrient: Nutrient, status: NutrientStatus, description: &'static str) -> NutrientAdvice {
    NutrientAdvice { nutrient, status, description }
}

use Nutrient::{Nitrogen, Phosphorus, Potassium};
use NutrientStatus::{Needed, Sufficient};

pub static RECOMMENDATIONS: [RecommendationRecord; 4] = [
    RecommendationRecord {
        label: PredictionLabel::NitrogenDeficiency,
        diagnosis: "Nitrogen Deficiency Detected",
        icon: "🍃",
        nutrients: [
            advice(Nitrogen, Needed, "Critical macronutrient needed immediately. Nitrogen is essential for leaf growth and chlorophyll production."),
            advice(Phosphorus, Sufficient, "Maintain current levels through regular fertilization schedule."),
            advice(Potassium, Sufficient, "Adequate levels detected. Continue monitoring."),
        ],
        treatment: &[
            "Apply nitrogen-rich fertilizer (urea or ammonium nitrate) at 50-100 kg/ha",
            "Use organic compost or manure to improve soil nitrogen content",
            "Consider foliar spray with urea solution (2-3%) for quick recovery",
            "Monitor leaf color improvement within 7-10 days",
            "Implement crop rotation with nitrogen-fixing legumes",
        ],
    },
    RecommendationRecord {
        label: PredictionLabel::PhosphorusDeficiency,
        diagnosis: "Phosphorus Deficiency Detected",
        icon: "🌿",
        nutrients: [
            advice(Nitrogen, Sufficient, "Current nitrogen levels are adequate."),
            advice(Phosphorus, Needed, "Critical deficiency detected. Phosphorus is vital for root development and energy transfer."),
            advice(Potassium, Sufficient, "Potassium levels are within normal range."),
        ],
        treatment: &[
            "Apply phosphate fertilizer (DAP or SSP) at 40-60 kg P₂O₅/ha",
            "Use rock phosphate for long-term phosphorus availability",
            "Apply bone meal or fish meal as organic phosphorus source",
            "Ensure soil pH is between 6.0-7.0 for optimal phosphorus uptake",
            "Consider mycorrhizal inoculation to improve phosphorus absorption",
        ],
    },
    RecommendationRecord {
        label: PredictionLabel::PotassiumDeficiency,
        diagnosis: "Potassium Deficiency Detected",
        icon: "🌾",
        nutrients: [
            advice(Nitrogen, Sufficient, "Nitrogen levels are within acceptable range."),
            advice(Phosphorus, Sufficient, "Phosphorus levels are adequate."),
            advice(Potassium, Needed, "Severe deficiency detected. Potassium is crucial for disease resistance and fruit quality."),
        ],
        treatment: &[
            "Apply potassium fertilizer (MOP or SOP) at 60-80 kg K₂O/ha",
            "Use wood ash as an organic potassium source",
            "Apply potassium sulfate for sulfur-deficient soils",
            "Foliar spray with potassium nitrate (1-2%) for rapid correction",
            "Improve soil drainage to prevent potassium leaching",
        ],
    },
    RecommendationRecord {
        label: PredictionLabel::Healthy,
        diagnosis: "Healthy Leaf - No Deficiency",
        icon: "✅",
        nutrients: [
            advice(Nitrogen, Sufficient, "Optimal nitrogen levels detected. Continue current fertilization."),
            advice(Phosphorus, Sufficient, "Phosphorus levels are excellent."),
            advice(Potassium, Sufficient, "Potassium levels are optimal."),
        ],
        treatment: &[
            "Maintain current fertilization schedule",
            "Continue regular monitoring of plant health",
            "Ensure consistent watering and proper drainage",
            "Monitor for early signs of pest or disease",
            "Apply balanced NPK fertilizer as per soil test recommendations",
        ],
    },
];

pub fn recommendation(label: PredictionLabel) -> &'static RecommendationRecord {
    match label {
        PredictionLabel::NitrogenDeficiency => &RECOMMENDATIONS[0],
        PredictionLabel::PhosphorusDeficiency => &RECOMMENDATIONS[1],
        PredictionLabel::PotassiumDeficiency => &RECOMMENDATIONS[2],
        PredictionLabel::Healthy => &RECOMMENDATIONS[3],
    }
}

/// ワイヤ上のラベル文字列で検索
pub fn lookup_recommendation(label: &str) -> Option<&'static RecommendationRecord> {
    PredictionLabel::from_wire(label).map(recommendation)
}
