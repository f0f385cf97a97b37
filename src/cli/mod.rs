//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 批量图片转 WebP
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert

pub mod convert;

use clap::{Parser, Subcommand};

/// Webpify - 批量图片 WebP 转换工具
#[derive(Parser)]
#[command(name = "webpify")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A batch image to WebP conversion tool", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert all images in a directory to WebP format
    Convert(convert::ConvertArgs),
}
