use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "leaf-nutrition")]
#[command(about = "コーヒー葉の栄養欠乏診断クライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 葉の画像を予測APIに送って診断する
    Predict {
        /// 画像ファイル（PNG/JPEG）
        #[arg(required = true)]
        image: PathBuf,

        /// 予測APIのURL（設定ファイル・環境変数より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 判定ラベルに対する推奨事項を表示
    Recommend {
        /// N_Deficiency / P_Deficiency / K_Deficiency / Healthy
        label: String,
    },

    /// バックエンドの稼働確認
    Health {
        /// 予測APIのURL（オリジン部分を使う）
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 設定を管理
    Config {
        /// 予測APIのURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定をデフォルトに戻す
        #[arg(long)]
        reset: bool,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
