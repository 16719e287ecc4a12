use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use leaf_nutrition::{cli, client, config, error, report, upload};
use leaf_nutrition_common::{lookup_recommendation, Pipeline, PredictionLabel, SubmitOutcome};
use cli::{Cli, Commands};
use client::PredictionClient;
use config::Config;
use error::{LeafError, Result};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 設定ファイルは必要なコマンドでだけ読む
    match cli.command {
        Commands::Predict { image, endpoint, json } => {
            let client_config = Config::load()?.resolve(endpoint.as_deref())?;
            predict(&image, PredictionClient::new(client_config), json).await?;
        }

        Commands::Recommend { label } => {
            let record = lookup_recommendation(&label).ok_or_else(|| LeafError::UnknownLabel {
                known: PredictionLabel::ALL
                    .iter()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
                label,
            })?;
            println!("{} {}\n", record.icon, record.diagnosis);
            print!("{}", report::render_recommendation(record));
        }

        Commands::Health { endpoint } => {
            let client = PredictionClient::new(Config::load()?.resolve(endpoint.as_deref())?);
            println!("🩺 {}", client.config().health_url());

            let status = client.health().await?;
            println!("  状態: {}", status.status);
            println!("  モデル: {}", if status.model_loaded { "読み込み済み" } else { "未読み込み" });
            if status.is_ready() {
                println!("\n✅ 解析可能");
            } else {
                println!("\n⚠️ バックエンドは応答していますがモデルが準備できていません");
            }
        }

        Commands::Config { set_endpoint, reset, show } => {
            let mut config = if reset {
                let config = Config::reset()?;
                println!("✔ 設定をリセットしました");
                config
            } else {
                Config::load()?
            };

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show || !reset {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  エンドポイント: {}", config.client.endpoint);
                println!("  最大ファイルサイズ: {}MB", config.client.max_file_size / (1024 * 1024));
                if let Ok(env) = std::env::var(config::ENDPOINT_ENV) {
                    println!("  {}: {}（優先）", config::ENDPOINT_ENV, env);
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

/// ブラウザ版と同じ状態遷移（選択→送信→表示）を1回分たどる
async fn predict(image: &Path, client: PredictionClient, json: bool) -> Result<()> {
    let mut pipeline = Pipeline::new(client.config().clone());

    let file = upload::load_image(image, pipeline.config())?;
    let name = file.name.clone();
    pipeline.select(file)?;

    let Some((ticket, file)) = pipeline.begin_submit() else {
        return Err(LeafError::Config("解析を開始できません".into()));
    };
    log::debug!("phase: {:?}", pipeline.phase());

    let spinner = if json { ProgressBar::hidden() } else { ProgressBar::new_spinner() };
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("{} を解析中...", name));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = client.predict(&file).await;
    spinner.finish_and_clear();

    let result = pipeline.finish_submit(ticket, outcome).map_err(|e| {
        log::error!("analysis error: {}", e);
        e
    })?;

    match result {
        SubmitOutcome::Displayed(diagnosis) => {
            if json {
                println!("{}", report::render_json(&name, &diagnosis)?);
            } else {
                print!("{}", report::render_text(&name, &diagnosis));
            }
        }
        // 単発実行では起こらない
        SubmitOutcome::Superseded => log::warn!("prediction for {} was superseded", name),
    }

    Ok(())
}
