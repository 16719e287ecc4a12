//! アップロード→解析→結果表示の状態管理
//!
//! 描画からは独立しており、Web側はシグナルに保持して表示を導出し、
//! CLIは同じ遷移をそのまま順に呼び出す。
//!
//! 状態:
//! - Idle: ファイル未選択
//! - Previewing: 検証済みファイルあり（解析可能）
//! - Submitting: 予測APIへ送信中（解析ボタン無効）
//! - Displaying: 診断結果を表示中

use std::collections::BTreeMap;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::prediction::{confidence_percent, PredictionLabel, PredictionResponse};
use crate::recommendation::{recommendation, RecommendationRecord};
use crate::upload::{validate, SelectedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Previewing,
    Submitting,
    Displaying,
}

/// 選択の世代。古い世代のプレビューや予測結果は破棄する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 表示用の診断結果
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnosis {
    pub label: PredictionLabel,
    pub confidence: f64,
    pub probabilities: BTreeMap<String, f64>,
    pub record: &'static RecommendationRecord,
}

impl Diagnosis {
    /// 未知ラベルは `UnknownLabel`
    pub fn from_response(response: PredictionResponse) -> Result<Self> {
        let label = response.known_label()?;
        Ok(Self {
            label,
            confidence: response.confidence,
            probabilities: response.probabilities,
            record: recommendation(label),
        })
    }

    pub fn confidence_percent(&self) -> u8 {
        confidence_percent(self.confidence)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Displayed(Diagnosis),
    /// 送信中に別のファイルが選択・削除された
    Superseded,
}

/// 画面に現れる状態の要約
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub placeholder_visible: bool,
    pub preview: Option<String>,
    pub analyze_enabled: bool,
    pub busy: bool,
    pub results_visible: bool,
}

#[derive(Debug, Clone)]
pub struct Pipeline<B> {
    config: ClientConfig,
    selected: Option<SelectedFile<B>>,
    generation: u64,
    preview: Option<String>,
    in_flight: Option<Ticket>,
    diagnosis: Option<Diagnosis>,
}

impl<B> Pipeline<B> {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            selected: None,
            generation: 0,
            preview: None,
            in_flight: None,
            diagnosis: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        if self.selected.is_none() {
            Phase::Idle
        } else if self.in_flight.is_some() {
            Phase::Submitting
        } else if self.diagnosis.is_some() {
            Phase::Displaying
        } else {
            Phase::Previewing
        }
    }

    /// ファイル選択（ファイル選択ダイアログ・ドロップ共通）
    ///
    /// 検証に失敗した場合は状態を変更せずにエラーを返す。
    /// 成功時は前回の結果を消し、プレビュー読み込み用のチケットを返す。
    pub fn select(&mut self, file: SelectedFile<B>) -> Result<Ticket> {
        validate(&file.media_type, file.size, &self.config)?;

        log::info!("selected {} ({}, {} bytes)", file.name, file.media_type, file.size);
        self.generation += 1;
        self.selected = Some(file);
        self.preview = None;
        self.diagnosis = None;
        Ok(self.current_ticket())
    }

    /// プレビュー読み込み完了。古いチケットなら無視して `false`
    pub fn preview_ready(&mut self, ticket: Ticket, data_url: String) -> bool {
        if ticket != self.current_ticket() || self.selected.is_none() {
            log::debug!("discarding stale preview");
            return false;
        }
        self.preview = Some(data_url);
        true
    }

    /// 選択解除
    pub fn remove(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.preview = None;
        self.diagnosis = None;
    }

    pub fn selected(&self) -> Option<&SelectedFile<B>> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.preview.is_none()
    }

    pub fn analyze_enabled(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    pub fn results_visible(&self) -> bool {
        self.diagnosis.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase(),
            placeholder_visible: self.placeholder_visible(),
            preview: self.preview.clone(),
            analyze_enabled: self.analyze_enabled(),
            busy: self.is_busy(),
            results_visible: self.results_visible(),
        }
    }

    /// 予測結果の反映
    ///
    /// 失敗時は Previewing に戻し（ファイルは保持）、エラーをそのまま返す。
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        outcome: Result<PredictionResponse>,
    ) -> Result<SubmitOutcome> {
        self.in_flight = None;

        if ticket != self.current_ticket() || self.selected.is_none() {
            log::debug!("discarding prediction for superseded selection");
            return Ok(SubmitOutcome::Superseded);
        }

        match outcome.and_then(Diagnosis::from_response) {
            Ok(diagnosis) => {
                log::info!(
                    "diagnosis {} ({}%)",
                    diagnosis.label,
                    diagnosis.confidence_percent()
                );
                self.diagnosis = Some(diagnosis.clone());
                Ok(SubmitOutcome::Displayed(diagnosis))
            }
            Err(e) => {
                self.diagnosis = None;
                Err(e)
            }
        }
    }

    fn current_ticket(&self) -> Ticket {
        Ticket(self.generation)
    }
}

impl<B: Clone> Pipeline<B> {
    /// 解析開始。送信するファイルとチケットを返す
    ///
    /// ファイル未選択または送信中なら `None`（多重送信防止）
    pub fn begin_submit(&mut self) -> Option<(Ticket, SelectedFile<B>)> {
        if !self.analyze_enabled() {
            return None;
        }
        let file = self.selected.clone()?;
        let ticket = self.current_ticket();
        self.in_flight = Some(ticket);
        Some((ticket, file))
    }
}

impl<B> Default for Pipeline<B> {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FILE_SIZE;
    use crate::error::{Error, ErrorKind};
    use crate::recommendation::{Nutrient, NutrientStatus};

    fn png(name: &str, size: u64) -> SelectedFile<Vec<u8>> {
        SelectedFile::new(name, "image/png", size, vec![0u8; 4])
    }

    fn previewing(name: &str) -> (Pipeline<Vec<u8>>, Ticket) {
        let mut pipeline = Pipeline::default();
        let ticket = pipeline.select(png(name, 1024)).expect("valid file");
        pipeline.preview_ready(ticket, format!("data:image/png;base64,{name}"));
        (pipeline, ticket)
    }

    #[test]
    fn test_initial_state() {
        let pipeline: Pipeline<Vec<u8>> = Pipeline::default();
        assert_eq!(pipeline.phase(), Phase::Idle);
        assert!(pipeline.placeholder_visible());
        assert!(!pipeline.analyze_enabled());
        assert!(!pipeline.results_visible());
    }

    #[test]
    fn test_rejected_selection_leaves_slot_unchanged() {
        let (mut pipeline, _) = previewing("first.png");
        let before = pipeline.snapshot();

        let gif = SelectedFile::new("anim.gif", "image/gif", 100, vec![]);
        assert!(matches!(pipeline.select(gif), Err(Error::UnsupportedFormat(_))));
        let huge = png("huge.png", MAX_FILE_SIZE + 1);
        assert!(matches!(pipeline.select(huge), Err(Error::FileTooLarge { .. })));

        assert_eq!(pipeline.snapshot(), before);
        assert_eq!(pipeline.selected().unwrap().name, "first.png");
    }

    #[test]
    fn test_rejected_selection_from_idle() {
        let mut pipeline: Pipeline<Vec<u8>> = Pipeline::default();
        let pdf = SelectedFile::new("doc.pdf", "application/pdf", 10, vec![]);
        assert!(pipeline.select(pdf).is_err());
        assert_eq!(pipeline.phase(), Phase::Idle);
        assert!(pipeline.selected().is_none());
    }

    #[test]
    fn test_valid_selection_enables_analyze_and_previews() {
        let mut pipeline: Pipeline<Vec<u8>> = Pipeline::default();
        let ticket = pipeline.select(png("leaf.png", 2048)).unwrap();
        assert_eq!(pipeline.phase(), Phase::Previewing);
        assert!(pipeline.analyze_enabled());
        assert!(pipeline.placeholder_visible());

        assert!(pipeline.preview_ready(ticket, "data:image/png;base64,AAAA".into()));
        assert!(!pipeline.placeholder_visible());
        assert_eq!(pipeline.preview(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_select_then_remove_is_idempotent() {
        let mut pipeline: Pipeline<Vec<u8>> = Pipeline::default();
        let initial = pipeline.snapshot();

        let ticket = pipeline.select(png("leaf.png", 10)).unwrap();
        pipeline.preview_ready(ticket, "data:image/png;base64,AA".into());
        pipeline.remove();

        assert_eq!(pipeline.snapshot(), initial);
    }

    #[test]
    fn test_last_selection_wins_for_preview() {
        let mut pipeline: Pipeline<Vec<u8>> = Pipeline::default();
        let first = pipeline.select(png("a.png", 10)).unwrap();
        let second = pipeline.select(png("b.png", 10)).unwrap();

        assert!(!pipeline.preview_ready(first, "data:a".into()));
        assert!(pipeline.placeholder_visible());
        assert!(pipeline.preview_ready(second, "data:b".into()));
        assert_eq!(pipeline.preview(), Some("data:b"));
    }

    #[test]
    fn test_preview_after_remove_is_ignored() {
        let mut pipeline: Pipeline<Vec<u8>> = Pipeline::default();
        let ticket = pipeline.select(png("a.png", 10)).unwrap();
        pipeline.remove();
        assert!(!pipeline.preview_ready(ticket, "data:a".into()));
        assert_eq!(pipeline.phase(), Phase::Idle);
    }

    #[test]
    fn test_nitrogen_round_trip() {
        let (mut pipeline, _) = previewing("leaf.png");
        let (ticket, file) = pipeline.begin_submit().expect("can submit");
        assert_eq!(file.name, "leaf.png");
        assert_eq!(pipeline.phase(), Phase::Submitting);
        assert!(!pipeline.analyze_enabled());
        assert!(pipeline.is_busy());

        let outcome = pipeline
            .finish_submit(ticket, Ok(PredictionResponse::new("N_Deficiency", 0.93)))
            .expect("display");
        let SubmitOutcome::Displayed(diagnosis) = outcome else {
            panic!("expected display");
        };

        assert_eq!(pipeline.phase(), Phase::Displaying);
        assert!(pipeline.results_visible());
        assert!(pipeline.analyze_enabled());
        assert_eq!(diagnosis.record.diagnosis, "Nitrogen Deficiency Detected");
        assert_eq!(diagnosis.confidence_percent(), 93);

        let statuses: Vec<_> = diagnosis
            .record
            .nutrients
            .iter()
            .map(|n| (n.nutrient, n.status))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (Nutrient::Nitrogen, NutrientStatus::Needed),
                (Nutrient::Phosphorus, NutrientStatus::Sufficient),
                (Nutrient::Potassium, NutrientStatus::Sufficient),
            ]
        );
        assert_eq!(diagnosis.record.treatment.len(), 5);
        assert!(diagnosis.record.treatment[0].contains("nitrogen-rich fertilizer"));
    }

    #[test]
    fn test_healthy_scenario() {
        let (mut pipeline, _) = previewing("leaf.jpg");
        let (ticket, _) = pipeline.begin_submit().unwrap();
        let outcome = pipeline
            .finish_submit(ticket, Ok(PredictionResponse::new("Healthy", 0.5)))
            .unwrap();
        let SubmitOutcome::Displayed(diagnosis) = outcome else {
            panic!("expected display");
        };
        assert_eq!(diagnosis.record.diagnosis, "Healthy Leaf - No Deficiency");
        assert_eq!(diagnosis.confidence_percent(), 50);
        assert!(diagnosis
            .record
            .nutrients
            .iter()
            .all(|n| n.status == NutrientStatus::Sufficient));
    }

    #[test]
    fn test_unknown_label_renders_nothing() {
        let (mut pipeline, _) = previewing("leaf.png");
        let (ticket, _) = pipeline.begin_submit().unwrap();
        let result = pipeline.finish_submit(ticket, Ok(PredictionResponse::new("Unknown_Class", 0.8)));

        assert!(matches!(result, Err(Error::UnknownLabel(_))));
        assert!(!pipeline.results_visible());
        assert!(pipeline.diagnosis().is_none());
        assert_eq!(pipeline.phase(), Phase::Previewing);
    }

    #[test]
    fn test_server_error_keeps_selection() {
        let (mut pipeline, _) = previewing("leaf.png");
        let (ticket, _) = pipeline.begin_submit().unwrap();
        let result = pipeline.finish_submit(ticket, Err(Error::HttpStatus(500)));

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(pipeline.analyze_enabled());
        assert!(!pipeline.is_busy());
        assert_eq!(pipeline.selected().unwrap().name, "leaf.png");
        assert!(!pipeline.results_visible());
        assert_eq!(pipeline.phase(), Phase::Previewing);
    }

    #[test]
    fn test_no_duplicate_submission() {
        let (mut pipeline, _) = previewing("leaf.png");
        assert!(pipeline.begin_submit().is_some());
        assert!(pipeline.begin_submit().is_none());

        let mut idle: Pipeline<Vec<u8>> = Pipeline::default();
        assert!(idle.begin_submit().is_none());
    }

    #[test]
    fn test_new_selection_clears_previous_results() {
        let (mut pipeline, _) = previewing("first.png");
        let (ticket, _) = pipeline.begin_submit().unwrap();
        pipeline
            .finish_submit(ticket, Ok(PredictionResponse::new("K_Deficiency", 0.7)))
            .unwrap();
        assert!(pipeline.results_visible());

        pipeline.select(png("second.png", 10)).unwrap();
        assert!(!pipeline.results_visible());
        assert!(pipeline.analyze_enabled());
        assert_eq!(pipeline.phase(), Phase::Previewing);
    }

    #[test]
    fn test_response_for_superseded_selection_is_discarded() {
        let (mut pipeline, _) = previewing("first.png");
        let (ticket, _) = pipeline.begin_submit().unwrap();

        pipeline.select(png("second.png", 10)).unwrap();
        // 送信中は新しいファイルでも解析不可
        assert!(!pipeline.analyze_enabled());

        let outcome = pipeline
            .finish_submit(ticket, Ok(PredictionResponse::new("Healthy", 0.9)))
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::Superseded);
        assert!(!pipeline.results_visible());
        assert!(pipeline.analyze_enabled());
        assert_eq!(pipeline.selected().unwrap().name, "second.png");
    }
}
