//! # 批量执行器
//!
//! 顺序执行批量转换任务。
//!
//! ## 功能
//! - 严格顺序的单线程迭代
//! - 进度条显示与逐文件日志
//! - 错误隔离与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 打印逐文件结果

use crate::utils::{output, progress};

use std::path::{Path, PathBuf};

/// 单个文件转换结果
#[derive(Debug, Clone)]
pub enum ConversionOutcome {
    /// 转换成功 (输入文件名, 输出文件名)
    Converted(String, String),
    /// 跳过：输出路径与输入路径相同（输入已是目标 .webp 文件）
    SkippedAlreadyTarget(String),
    /// 跳过：输出文件已存在且未指定 --overwrite
    SkippedExists(String),
    /// 转换失败 (文件名, 错误信息)
    Failed(String, String),
}

impl ConversionOutcome {
    /// 输入文件名
    pub fn file(&self) -> &str {
        match self {
            ConversionOutcome::Converted(file, _) => file,
            ConversionOutcome::SkippedAlreadyTarget(file) => file,
            ConversionOutcome::SkippedExists(file) => file,
            ConversionOutcome::Failed(file, _) => file,
        }
    }
}

/// 批量转换结果统计
#[derive(Debug, Default)]
pub struct ConversionSummary {
    /// 成功数量
    pub converted: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub errors: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl ConversionSummary {
    /// 合并单个转换结果
    pub fn merge(&mut self, outcome: &ConversionOutcome) {
        match outcome {
            ConversionOutcome::Converted(_, _) => self.converted += 1,
            ConversionOutcome::SkippedAlreadyTarget(_) | ConversionOutcome::SkippedExists(_) => {
                self.skipped += 1
            }
            ConversionOutcome::Failed(file, err) => {
                self.errors += 1;
                self.failures.push((file.clone(), err.clone()));
            }
        }
    }

    /// 从结果列表折叠出统计
    pub fn from_outcomes(outcomes: &[ConversionOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.merge(outcome);
        }
        summary
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.errors
    }
}

/// 批量执行器
#[derive(Debug, Default)]
pub struct BatchRunner;

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new() -> Self {
        Self
    }

    /// 顺序处理文件列表，逐文件打印结果
    pub fn run<F>(&self, files: &[PathBuf], processor: F) -> Vec<ConversionOutcome>
    where
        F: Fn(&Path) -> ConversionOutcome,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Converting");

        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            let outcome = processor(file);
            pb.suspend(|| report_outcome(&outcome));
            outcomes.push(outcome);
            pb.inc(1);
        }

        pb.finish_and_clear();
        outcomes
    }
}

/// 打印单个文件的转换结果
fn report_outcome(outcome: &ConversionOutcome) {
    match outcome {
        ConversionOutcome::Converted(from, to) => output::print_conversion(from, to),
        ConversionOutcome::SkippedAlreadyTarget(file) => {
            output::print_skip(&format!("{} (already .webp)", file));
        }
        ConversionOutcome::SkippedExists(file) => {
            output::print_skip(&format!("{} (output already exists)", file));
        }
        ConversionOutcome::Failed(file, err) => {
            output::print_error(&format!("{}: {}", file, err));
        }
    }
}
