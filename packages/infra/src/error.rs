//! # インフラ層エラー定義
//!
//! レコードストアの操作で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! convenience constructor でエラーを生成すると、その時点のスパン情報
//! （どのハンドラ・ユースケースから呼ばれたか）が自動的にキャプチャされる。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
///
/// どの種別も利用者の入力に起因しない障害であり、API 層では 500 として扱う。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// ストアのロックが汚染されている
    ///
    /// ロックを保持したスレッドがパニックした後にアクセスした場合に発生する。
    #[error("ストアのロックが汚染されています: {store}")]
    LockPoisoned {
        /// ストア名（"items", "users"）
        store: &'static str,
    },

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    // ===== Convenience constructors =====

    /// ロック汚染エラーを生成する
    pub fn lock_poisoned(store: &'static str) -> Self {
        Self {
            kind:       InfraErrorKind::LockPoisoned { store },
            span_trace: SpanTrace::capture(),
        }
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self {
            kind:       InfraErrorKind::Unexpected(msg.into()),
            span_trace: SpanTrace::capture(),
        }
    }
}

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_lock_poisonedでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_append", store = "items");
            let _enter = span.enter();

            let err = InfraError::lock_poisoned("items");

            assert!(matches!(
                err.kind(),
                InfraErrorKind::LockPoisoned { store: "items" }
            ));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_append"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_unexpectedのdisplayは種別のメッセージになる() {
        let err = InfraError::unexpected("テスト用の失敗");

        assert_eq!(err.to_string(), "予期しないエラー: テスト用の失敗");
    }
}
