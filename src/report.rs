//! # 转换结果导出
//!
//! 导出逐文件转换结果到 CSV 格式。
//!
//! ## 输出格式
//! - CSV: 包含 file, outcome, detail 三列，每个候选文件一行
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `batch/runner.rs` 的 ConversionOutcome 结构
//! - 使用 `csv` 库写入 CSV 文件

use crate::batch::ConversionOutcome;
use crate::error::{Result, WebpifyError};

use serde::Serialize;
use std::path::Path;

/// CSV 报告中的一行
#[derive(Debug, Serialize)]
struct OutcomeRecord {
    file: String,
    outcome: String,
    detail: String,
}

impl From<&ConversionOutcome> for OutcomeRecord {
    fn from(outcome: &ConversionOutcome) -> Self {
        match outcome {
            ConversionOutcome::Converted(file, target) => OutcomeRecord {
                file: file.clone(),
                outcome: "converted".to_string(),
                detail: target.clone(),
            },
            ConversionOutcome::SkippedAlreadyTarget(file) => OutcomeRecord {
                file: file.clone(),
                outcome: "skipped-already-webp".to_string(),
                detail: String::new(),
            },
            ConversionOutcome::SkippedExists(file) => OutcomeRecord {
                file: file.clone(),
                outcome: "skipped-exists".to_string(),
                detail: String::new(),
            },
            ConversionOutcome::Failed(file, reason) => OutcomeRecord {
                file: file.clone(),
                outcome: "error".to_string(),
                detail: reason.clone(),
            },
        }
    }
}

/// 导出逐文件结果为 CSV 格式
pub fn write_csv(outcomes: &[ConversionOutcome], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path).map_err(WebpifyError::CsvError)?;

    for outcome in outcomes {
        wtr.serialize(OutcomeRecord::from(outcome))
            .map_err(WebpifyError::CsvError)?;
    }

    wtr.flush().map_err(|e| WebpifyError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let outcomes = vec![
            ConversionOutcome::Converted("a.png".into(), "a.webp".into()),
            ConversionOutcome::SkippedExists("b.jpg".into()),
            ConversionOutcome::Failed("c.gif".into(), "truncated file".into()),
        ];

        write_csv(&outcomes, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), outcomes.len() + 1);
        assert_eq!(lines[0], "file,outcome,detail");
        assert_eq!(lines[1], "a.png,converted,a.webp");
        assert_eq!(lines[2], "b.jpg,skipped-exists,");
        assert_eq!(lines[3], "c.gif,error,truncated file");
    }
}
