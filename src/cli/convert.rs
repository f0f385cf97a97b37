//! # convert 子命令 CLI 定义
//!
//! 批量转换图片为 WebP 格式 (jpg/jpeg/png/bmp/gif/tiff/tif/webp -> .webp)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input directory containing image files
    pub input: PathBuf,

    /// Output directory for converted WebP files
    pub output: PathBuf,

    /// WebP quality (1-100)
    #[arg(default_value_t = 85, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Overwrite existing output files
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Write a per-file outcome report to a CSV file
    #[arg(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}
