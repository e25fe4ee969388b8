//! # Report Service
//!
//! ランキングをMarkdownレポートにレンダリングする

use chrono::NaiveDateTime;

use crate::domain::entities::repo_record::RepoRecord;

/// スター数の前に付けるアイコン
pub const STAR_ICON: &str = "🌟";

/// タイムスタンプの表示形式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// レポートサービス
pub struct ReportService;

impl ReportService {
    /// Markdownレポートを生成する
    ///
    /// # Arguments
    ///
    /// * `topic` - 見出しに使うトピック
    /// * `records` - ランキング済みのレコード（この順で出力）
    /// * `generated_at` - 生成時刻（ローカル時刻）
    pub fn render(topic: &str, records: &[RepoRecord], generated_at: NaiveDateTime) -> String {
        let mut out = String::new();

        out.push_str(&format!("# 🔍 Top {} Repositories\n\n", Self::title_case(topic)));
        out.push_str(&format!(
            "_Last updated: {}_\n\n",
            generated_at.format(TIMESTAMP_FORMAT)
        ));

        for record in records {
            out.push_str(&Self::render_line(record));
            out.push('\n');
        }

        out
    }

    /// 1レコード分の箇条書き行
    pub fn render_line(record: &RepoRecord) -> String {
        format!(
            "- [{}]({}) {} {}",
            record.full_name, record.html_url, STAR_ICON, record.stargazers_count
        )
    }

    /// 先頭だけ大文字、残りは小文字にする
    fn title_case(topic: &str) -> String {
        let mut chars = topic.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap()
    }

    #[test]
    fn test_render_full_report() {
        let records = vec![
            RepoRecord::new(2, "big/model", "https://github.com/big/model", 200),
            RepoRecord::new(1, "small/lib", "https://github.com/small/lib", 50),
        ];

        let report = ReportService::render("machine-learning", &records, generated_at());

        let expected = "# 🔍 Top Machine-learning Repositories\n\n\
                        _Last updated: 2024-12-25 09:05_\n\n\
                        - [big/model](https://github.com/big/model) 🌟 200\n\
                        - [small/lib](https://github.com/small/lib) 🌟 50\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_empty_list_has_header_only() {
        let report = ReportService::render("rust", &[], generated_at());

        assert_eq!(
            report,
            "# 🔍 Top Rust Repositories\n\n_Last updated: 2024-12-25 09:05_\n\n"
        );
    }

    #[test]
    fn test_render_line() {
        let record = RepoRecord::new(7, "a/b", "https://github.com/a/b", 123);
        assert_eq!(
            ReportService::render_line(&record),
            "- [a/b](https://github.com/a/b) 🌟 123"
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(ReportService::title_case("machine-learning"), "Machine-learning");
        assert_eq!(ReportService::title_case("RUST"), "Rust");
        assert_eq!(ReportService::title_case(""), "");
    }
}
