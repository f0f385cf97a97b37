//! # 统一错误处理模块
//!
//! 定义 Webpify 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Webpify 统一错误类型
#[derive(Error, Debug)]
pub enum WebpifyError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    // ─────────────────────────────────────────────────────────────
    // 编解码错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to decode {path}: {reason}")]
    DecodeError { path: String, reason: String },

    #[error("WebP encoding failed: {reason}")]
    EncodeError { reason: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WebpifyError>;
