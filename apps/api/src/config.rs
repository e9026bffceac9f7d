//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//! 開発環境では `.env` ファイルを `dotenvy` で読み込んでから呼び出す。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | No | `8000` | ポート番号 |
//! | `SEED_ITEMS` | No | `true` | 起動時に商品の初期データを投入するか |
//!
//! ログ関連（`RUST_LOG`, `LOG_FORMAT`）は `catalog_shared::observability` が読み込む。

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 8000;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 値を解釈できない
    #[error("環境変数 {name} の値が不正です: {value:?}")]
    InvalidValue {
        /// 環境変数名
        name:  &'static str,
        /// 設定されていた値
        value: String,
    },
}

/// アプリケーション全体の設定
///
/// アプリケーション起動時に一度だけ構築する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
    pub host:       String,
    /// ポート番号
    pub port:       u16,
    /// 起動時に商品の初期データを投入するか
    pub seed_items: bool,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    ///
    /// 未設定の項目はデフォルト値を使う。値が解釈できない場合はエラーを返す。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// プロセスの環境変数を書き換えずにテストするために使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("API_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                name: "API_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let seed_items = match lookup("SEED_ITEMS") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidValue {
                name: "SEED_ITEMS",
                value,
            })?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            seed_items,
        })
    }

    /// `host:port` 形式のバインドアドレスを返す
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
