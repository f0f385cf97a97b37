//! # Webpify - 批量图片 WebP 转换工具
//!
//! 将目录下的图片文件批量转换为 WebP 格式，保留原文件名。
//!
//! ## 子命令
//! - `convert` - 批量转换图片 (jpg/jpeg/png/bmp/gif/tiff/tif/webp -> .webp)
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/    (文件收集与顺序执行)
//!   │     ├── codec.rs  (图片解码与 WebP 编码)
//!   │     └── report.rs (结果导出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
