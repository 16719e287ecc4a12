//! 解析画面（アップロード→予測→結果表示）
//!
//! 状態遷移は `Pipeline` に任せ、ここではDOMイベントと非同期処理の配線だけを行う。

use gloo::dialogs::alert;
use gloo::timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlElement, HtmlInputElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use leaf_nutrition_common::content::ANALYSIS_HERO;
use leaf_nutrition_common::{ClientConfig, Diagnosis, Error, Pipeline, Result, SelectedFile, SubmitOutcome};
use crate::api::request_prediction;
use crate::components::{
    hero::Hero,
    recommendations::RecommendationsPanel,
    results_panel::ResultsPanel,
    upload_area::UploadArea,
};
use crate::preview::read_data_url;
use crate::reactive::update_on_success;

/// メーターを伸ばし始めるまでの遅延
const FILL_DELAY_MS: u32 = 100;
/// 結果までスクロールするまでの遅延
const SCROLL_DELAY_MS: u32 = 300;

/// 描画後に解決する要素の参照
#[derive(Clone, Copy)]
struct AnalysisHandles {
    file_input: NodeRef<html::Input>,
    results_section: NodeRef<html::Section>,
}

/// 解決済みの要素
struct BoundAnalysis {
    file_input: HtmlInputElement,
    results_section: HtmlElement,
}

impl AnalysisHandles {
    fn new() -> Self {
        Self {
            file_input: NodeRef::new(),
            results_section: NodeRef::new(),
        }
    }

    /// 要素が揃っていなければ `MissingElement`
    fn bind(&self) -> Result<BoundAnalysis> {
        let file_input = self
            .file_input
            .get_untracked()
            .ok_or(Error::MissingElement("fileInput"))?;
        let results_section = self
            .results_section
            .get_untracked()
            .ok_or(Error::MissingElement("resultsSection"))?;
        Ok(BoundAnalysis {
            file_input,
            results_section,
        })
    }
}

#[component]
pub fn AnalysisPage(config: ClientConfig) -> impl IntoView {
    let origin = config.backend_origin().to_string();
    let pipeline = RwSignal::new_local(Pipeline::<File>::new(config));
    let (fill_width, set_fill_width) = signal(0u8);
    let handles = AnalysisHandles::new();

    let diagnosis = Signal::derive(move || pipeline.with(|p| p.diagnosis().cloned()));
    let busy = move || pipeline.with(|p| p.is_busy());
    let analyze_enabled = move || pipeline.with(|p| p.analyze_enabled());

    // マウント後に一度だけ要素の存在を確認する
    Effect::new(move |_| match handles.bind() {
        Ok(_) => log::debug!("analysis view bound"),
        Err(e) => log::error!("{}", e),
    });

    let on_file = {
        let origin = origin.clone();
        move |file: File| {
            let selected = SelectedFile::new(file.name(), file.type_(), file.size() as u64, file.clone());
            let ticket = match update_on_success(&pipeline, |p| p.select(selected)) {
                Some(Ok(ticket)) => ticket,
                Some(Err(e)) => {
                    log::warn!("rejected {}: {}", file.name(), e);
                    alert(&e.user_message(&origin));
                    return;
                }
                None => return,
            };
            set_fill_width.set(0);

            spawn_local(async move {
                match read_data_url(&file).await {
                    Ok(data_url) => {
                        pipeline.update(|p| {
                            if !p.preview_ready(ticket, data_url) {
                                log::debug!("discarding preview for superseded selection");
                            }
                        });
                    }
                    Err(e) => log::error!("failed to read {}: {}", file.name(), e),
                }
            });
        }
    };

    let on_remove = move || {
        pipeline.update(|p| p.remove());
        set_fill_width.set(0);
        // 同じファイルを選び直せるように入力値も消す
        match handles.bind() {
            Ok(bound) => bound.file_input.set_value(""),
            Err(e) => log::error!("{}", e),
        }
    };

    let on_analyze = move |_: MouseEvent| {
        let Some(Ok((ticket, file))) = update_on_success(&pipeline, |p| p.begin_submit().ok_or(())) else {
            return;
        };
        let endpoint = pipeline.with_untracked(|p| p.config().endpoint.clone());
        let origin = origin.clone();
        set_fill_width.set(0);
        log::info!("analyzing {} ({} bytes)", file.name, file.size);

        spawn_local(async move {
            let outcome = request_prediction(&endpoint, &file.blob).await;
            match pipeline.try_update(|p| p.finish_submit(ticket, outcome)) {
                Some(Ok(SubmitOutcome::Displayed(diagnosis))) => reveal(&diagnosis, set_fill_width, handles),
                Some(Ok(SubmitOutcome::Superseded)) | None => {}
                Some(Err(e)) => {
                    log::error!("analysis error: {}", e);
                    alert(&e.user_message(&origin));
                }
            }
        });
    };

    view! {
        <div class="container">
            <Hero hero=ANALYSIS_HERO />

            <div class="app-grid">
                <section class="upload-section card">
                    <div class="card-header">
                        <h3>"Upload Leaf Image"</h3>
                        <p>"Supported formats: PNG, JPEG, JPG"</p>
                    </div>

                    <UploadArea
                        pipeline=pipeline
                        file_input=handles.file_input
                        on_file=on_file
                        on_remove=on_remove
                    />

                    <button
                        class="btn btn-primary"
                        class:loading=busy
                        id="analyzeBtn"
                        type="button"
                        disabled=move || !analyze_enabled()
                        on:click=on_analyze
                    >
                        <span class="btn-text">"Analyze Leaf"</span>
                        <svg class="btn-icon" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path d="M5 12H19M19 12L12 5M19 12L12 19" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" />
                        </svg>
                    </button>
                </section>

                <ResultsPanel
                    diagnosis=diagnosis
                    fill_width=fill_width
                    section_ref=handles.results_section
                />

                <RecommendationsPanel diagnosis=diagnosis />
            </div>
        </div>
    }
}

/// 結果表示後の演出（メーターのアニメーションとスクロール）
fn reveal(diagnosis: &Diagnosis, set_fill_width: WriteSignal<u8>, handles: AnalysisHandles) {
    let percent = diagnosis.confidence_percent();
    Timeout::new(FILL_DELAY_MS, move || set_fill_width.set(percent)).forget();

    Timeout::new(SCROLL_DELAY_MS, move || match handles.bind() {
        Ok(bound) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Nearest);
            bound
                .results_section
                .scroll_into_view_with_scroll_into_view_options(&opts);
        }
        // 表示前に画面を離れた
        Err(e) => log::debug!("skip scroll: {}", e),
    })
    .forget();
}
