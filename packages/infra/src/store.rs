//! # レコードストア
//!
//! プロセス内メモリに保持する、追記専用の順序付きコレクション。
//!
//! - レコードの識別子は追記時点の 0 始まりの位置
//! - 更新・削除は提供しないため、一度割り当てた位置は無効にならない
//! - 追記は書き込みロックの中で行い、実行時点の次の連番を割り当てる
//!
//! ロックが汚染されている場合（保持中のスレッドがパニックした場合）はパニックせず
//! [`InfraError`] を返す。

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use catalog_domain::value_objects::RecordIndex;

use crate::InfraError;

/// 追記専用のレコードストア
#[derive(Debug)]
pub struct RecordStore<T> {
    name:    &'static str,
    records: RwLock<Vec<T>>,
}

impl<T: Clone> RecordStore<T> {
    /// 空のストアを作成する
    ///
    /// `name` はログとエラーメッセージに使う（例: `"items"`）。
    pub fn new(name: &'static str) -> Self {
        Self::with_records(name, Vec::new())
    }

    /// 初期レコード付きのストアを作成する
    pub fn with_records(name: &'static str, records: Vec<T>) -> Self {
        Self {
            name,
            records: RwLock::new(records),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 全レコードを追記順で返す
    pub fn list(&self) -> Result<Vec<T>, InfraError> {
        Ok(self.read()?.clone())
    }

    /// レコードを末尾に追記し、追記後の件数を返す
    ///
    /// 追記したレコードの位置は `戻り値 - 1`。
    pub fn append(&self, record: T) -> Result<usize, InfraError> {
        let mut records = self.write()?;
        records.push(record);
        Ok(records.len())
    }

    /// 指定位置のレコードを返す
    ///
    /// 位置が `[0, count)` の外なら `None`。
    pub fn get(&self, index: RecordIndex) -> Result<Option<T>, InfraError> {
        Ok(self.read()?.get(index.as_usize()).cloned())
    }

    /// 現在の件数を返す
    pub fn count(&self) -> Result<usize, InfraError> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, InfraError> {
        self.records
            .read()
            .map_err(|_| InfraError::lock_poisoned(self.name))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, InfraError> {
        self.records
            .write()
            .map_err(|_| InfraError::lock_poisoned(self.name))
    }
}
