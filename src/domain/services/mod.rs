//! # Domain Services
//!
//! エンティティにまたがるビジネスルール
//!
//! - **ranking**: マージ・重複排除・ランキング
//! - **report**: Markdownレポートのレンダリング

pub mod ranking;
pub mod report;
