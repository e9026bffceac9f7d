//! # 値オブジェクト
//!
//! 商品とユーザーのフィールドを表す値オブジェクトを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: プリミティブ型をラップし、型安全性を確保
//! - **バリデーション**: 生成時に検証し、違反時は違反フィールド名付きの
//!   `DomainError::Validation` を返す
//! - **不変性**: 一度作成したら変更不可
//!
//! ## 含まれる型
//!
//! | 型 | ラップ対象 | 制約 |
//! |---|-----------|------|
//! | [`Name`] | `String` | 空・空白のみは不可 |
//! | [`Price`] | `f64` | 0 以上の有限値 |
//! | [`Tax`] | `f64` | 有限値 |
//! | [`Email`] | `String` | `@` と `.` を含む |
//! | [`Age`] | `u64` | 0 以上 |
//! | [`RecordIndex`] | `usize` | 0 以上（ストア内の位置） |

use std::str::FromStr;

use derive_more::Display;

use crate::DomainError;

// =========================================================================
// Name（名前）
// =========================================================================

/// 名前（値オブジェクト）
///
/// 商品名・ユーザー名の両方で使う。値は入力どおりに保持する（trim しない）。
///
/// # 不変条件
///
/// - 空文字列ではない
/// - 空白文字だけで構成されていない
///
/// # 使用例
///
/// ```rust
/// use catalog_domain::value_objects::Name;
///
/// assert!(Name::new("tomato").is_ok());
/// assert!(Name::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct Name(String);

impl Name {
    /// 名前を作成する
    ///
    /// # エラー
    ///
    /// 空または空白のみの場合は `field = "name"` のバリデーションエラーを返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::invalid_field("name", "名前は必須です"));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =========================================================================
// Price / Tax（価格・税額）
// =========================================================================

/// 価格（値オブジェクト）
///
/// # 不変条件
///
/// - 有限値（NaN・無限大は不可）
/// - 0 以上
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// 価格を作成する
    ///
    /// # エラー
    ///
    /// 負の値または有限値でない場合は `field = "price"` のバリデーションエラーを返す。
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::invalid_field(
                "price",
                "価格は有限の数値である必要があります",
            ));
        }

        if value < 0.0 {
            return Err(DomainError::invalid_field(
                "price",
                "価格は 0 以上である必要があります",
            ));
        }

        Ok(Self(value))
    }

    /// 0 円
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

/// 税額（値オブジェクト）
///
/// 符号の制約はない。有限値であることのみ検証する。
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tax(f64);

impl Tax {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::invalid_field(
                "tax",
                "税額は有限の数値である必要があります",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

// =========================================================================
// Email（メールアドレス）
// =========================================================================

/// メールアドレス（値オブジェクト）
///
/// 形式の検証は最小限で、`@` と `.` をそれぞれ 1 つ以上含むことだけを確認する。
///
/// ```rust
/// use catalog_domain::value_objects::Email;
///
/// assert!(Email::new("a@b.c").is_ok());
/// assert!(Email::new("not-an-email").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{_0}")]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # エラー
    ///
    /// `@` または `.` を含まない場合は `field = "email"` のバリデーションエラーを返す。
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if !value.contains('@') || !value.contains('.') {
            return Err(DomainError::invalid_field(
                "email",
                "メールアドレスの形式が不正です",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =========================================================================
// Age（年齢）
// =========================================================================

/// 年齢（値オブジェクト）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct Age(u64);

impl Age {
    /// 年齢を作成する
    ///
    /// # エラー
    ///
    /// 負の値の場合は `field = "age"` のバリデーションエラーを返す。
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::invalid_field("age", "年齢は 0 以上である必要があります"))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

// =========================================================================
// RecordIndex（ストア内の位置）
// =========================================================================

/// ストア内の位置（値オブジェクト）
///
/// レコードの識別子。生成時点のストア内 0 始まりの位置で、レコードが削除されないため
/// 一度割り当てた位置は無効にならない。
///
/// パスセグメントからは [`str::parse`] で変換する。
///
/// ```rust
/// use catalog_domain::{DomainError, value_objects::RecordIndex};
///
/// let index: RecordIndex = "2".parse().unwrap();
/// assert_eq!(index.as_usize(), 2);
/// assert!(matches!(
///     "-1".parse::<RecordIndex>(),
///     Err(DomainError::Validation { field: "id", .. })
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("{_0}")]
pub struct RecordIndex(usize);

impl RecordIndex {
    pub fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl FromStr for RecordIndex {
    type Err = DomainError;

    /// 10 進整数の文字列から変換する
    ///
    /// 先頭の `+` / `-` を 1 つだけ許す。桁数に上限はなく、`usize` に収まらない値は
    /// `usize::MAX` に丸める。丸めた位置はどのストアにも存在しないため NotFound になる。
    ///
    /// # エラー
    ///
    /// - 整数として解釈できない場合は `field = "id"` のバリデーションエラー
    /// - 0 未満の場合は `field = "id"` のバリデーションエラー
    ///
    /// 範囲外（NotFound）の判定はストアの件数を知る呼び出し側で行う。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_field(
                "id",
                format!("ID は整数である必要があります: {s:?}"),
            ));
        }

        // 数字のみなので、失敗するのは桁あふれだけ
        let value = digits.parse::<usize>().unwrap_or(usize::MAX);

        if negative && value != 0 {
            return Err(DomainError::invalid_field(
                "id",
                "ID は 0 以上である必要があります",
            ));
        }

        Ok(Self(value))
    }
}
