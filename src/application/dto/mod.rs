//! # DTO
//!
//! 層をまたいで受け渡す設定値

pub mod collect_config;
