//! Authentication Module
//!
//! GitHub認証関連の機能

pub mod token;

pub use token::{load_dotenv, load_token};
