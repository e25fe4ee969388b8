//! # Ranking Service
//!
//! 既存レコードと新規取得レコードのマージ・重複排除・ランキング

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::entities::repo_record::RepoRecord;

/// マージ結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    /// 永続化対象のランキング済みレコード（上限件数まで）
    pub all: Vec<RepoRecord>,
    /// 既存レコードに存在しなかった新規レコード（取得順）
    pub new_unique: Vec<RepoRecord>,
}

impl MergeResult {
    /// 新規レコードがあるかどうか
    #[inline]
    pub fn has_new(&self) -> bool {
        !self.new_unique.is_empty()
    }
}

/// ランキングサービス
///
/// 副作用を持たない純粋なビジネスロジック
pub struct RankingService;

impl RankingService {
    /// 既存レコードと取得レコードをマージする
    ///
    /// 既存IDと一致する取得レコードは、スター数が変わっていても無視される。
    ///
    /// # Arguments
    ///
    /// * `previous` - 前回保存されたレコード
    /// * `fetched` - 今回取得したレコード
    /// * `limit` - 保持する最大件数
    ///
    /// # Returns
    ///
    /// ランキング済みの全レコードと新規レコード
    pub fn merge(previous: &[RepoRecord], fetched: &[RepoRecord], limit: usize) -> MergeResult {
        let new_unique = Self::filter_new(previous, fetched);

        let mut all: Vec<RepoRecord> = previous.iter().chain(new_unique.iter()).cloned().collect();
        Self::rank(&mut all);
        all.truncate(limit);

        MergeResult { all, new_unique }
    }

    /// 既存IDに含まれないレコードを取得順に返す
    ///
    /// `fetched` 内部で重複したIDは最初の1件だけが残る。
    pub fn filter_new(previous: &[RepoRecord], fetched: &[RepoRecord]) -> Vec<RepoRecord> {
        let mut seen: HashSet<u64> = Self::extract_ids(previous).into_iter().collect();

        fetched
            .iter()
            .filter(|record| seen.insert(record.id))
            .cloned()
            .collect()
    }

    /// スター数の降順、同数ならIDの昇順に並べ替える
    pub fn rank(records: &mut [RepoRecord]) {
        records.sort_by(Self::compare);
    }

    fn compare(a: &RepoRecord, b: &RepoRecord) -> Ordering {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| a.id.cmp(&b.id))
    }

    /// レコードのIDリストを抽出
    pub fn extract_ids(records: &[RepoRecord]) -> Vec<u64> {
        records.iter().map(|record| record.id).collect()
    }
}
