//! # convert 命令实现
//!
//! 批量转换目录下的图片为 WebP 格式。
//!
//! ## 功能
//! - 验证输入目录并创建输出目录
//! - 收集支持的图片文件（非递归）
//! - 逐文件决策：自跳过 / 已存在跳过 / 转换
//! - 错误隔离：单文件失败不中断整批
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `batch/`, `codec.rs`, `report.rs`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, ConversionOutcome, ConversionSummary, ImageCollector};
use crate::cli::convert::ConvertArgs;
use crate::codec;
use crate::error::{Result, WebpifyError};
use crate::report;
use crate::utils::output;

use std::fs;
use std::path::Path;
use tabled::{Table, Tabled};

/// 失败详情表格行
#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    output::print_header("Converting images to WebP");

    // 验证输入目录（失败时不创建输出目录）
    let collector = ImageCollector::new(args.input.clone());
    if !collector.exists() {
        return Err(WebpifyError::DirectoryNotFound {
            path: args.input.display().to_string(),
        });
    }
    if !collector.is_directory() {
        return Err(WebpifyError::NotADirectory {
            path: args.input.display().to_string(),
        });
    }

    // 创建输出目录
    fs::create_dir_all(&args.output).map_err(|e| WebpifyError::FileWriteError {
        path: args.output.display().to_string(),
        source: e,
    })?;
    output::print_info(&format!("Output directory: {}", args.output.display()));

    // 收集输入文件
    let files = collector.collect();
    if files.is_empty() {
        output::print_warning(&format!(
            "No image files found in '{}'",
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} image(s) to convert", files.len()));
    output::print_info(&format!("Output quality: {}", args.quality));

    // 顺序处理
    let outcomes = BatchRunner::new().run(&files, |input_path| {
        process_file(input_path, &args.output, args.quality, args.overwrite)
    });

    let summary = ConversionSummary::from_outcomes(&outcomes);

    output::print_separator();
    output::print_done(&format!(
        "Converted: {} Skipped: {} Errors: {}",
        summary.converted, summary.skipped, summary.errors
    ));

    if !summary.failures.is_empty() {
        let rows: Vec<FailureRow> = summary
            .failures
            .iter()
            .map(|(file, reason)| FailureRow {
                file: file.clone(),
                reason: reason.clone(),
            })
            .collect();
        let table = Table::new(&rows);
        println!("{}", table);
    }

    if let Some(ref report_path) = args.report {
        report::write_csv(&outcomes, report_path)?;
        output::print_info(&format!(
            "Outcome report written to '{}'",
            report_path.display()
        ));
    }

    Ok(())
}

/// 单文件决策与转换
///
/// 决策顺序：
/// 1. 输出路径与输入路径相同 -> 跳过（防止 .webp 文件覆盖自身）
/// 2. 输出文件已存在且未指定 --overwrite -> 跳过
/// 3. 否则尝试转换，失败时隔离为单文件错误
fn process_file(
    input: &Path,
    output_dir: &Path,
    quality: u8,
    overwrite: bool,
) -> ConversionOutcome {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| input.display().to_string());

    let output_path = match input.file_name() {
        Some(name) => output_dir.join(name).with_extension("webp"),
        None => return ConversionOutcome::Failed(file_name, "invalid file name".to_string()),
    };

    if output_path == input {
        return ConversionOutcome::SkippedAlreadyTarget(file_name);
    }

    if output_path.exists() && !overwrite {
        return ConversionOutcome::SkippedExists(file_name);
    }

    match codec::convert_file(input, &output_path, quality) {
        Ok(()) => {
            let target = output_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| output_path.display().to_string());
            ConversionOutcome::Converted(file_name, target)
        }
        Err(e) => ConversionOutcome::Failed(file_name, e.to_string()),
    }
}
