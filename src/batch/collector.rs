//! # 文件收集器
//!
//! 根据固定的图片扩展名集合收集待转换文件列表。
//!
//! ## 功能
//! - 非递归扫描输入目录
//! - 扩展名匹配（不区分大小写）
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 支持的输入图片扩展名（不区分大小写）
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"];

/// 图片文件收集器
pub struct ImageCollector {
    /// 输入目录
    input: PathBuf,
}

impl ImageCollector {
    /// 创建新的文件收集器
    pub fn new(input: PathBuf) -> Self {
        Self { input }
    }

    /// 检查输入是否存在
    pub fn exists(&self) -> bool {
        self.input.exists()
    }

    /// 检查输入是否为目录
    pub fn is_directory(&self) -> bool {
        self.input.is_dir()
    }

    /// 收集目录下（不含子目录）所有匹配的图片文件，按路径排序
    pub fn collect(&self) -> Vec<PathBuf> {
        if !self.input.is_dir() {
            return vec![];
        }

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::is_supported_image(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    /// 检查文件扩展名是否为支持的图片格式
    fn is_supported_image(path: &Path) -> bool {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext,
            None => return false,
        };

        SUPPORTED_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_supported_image() {
        assert!(ImageCollector::is_supported_image(Path::new("photo.jpg")));
        assert!(ImageCollector::is_supported_image(Path::new("photo.JPG")));
        assert!(ImageCollector::is_supported_image(Path::new("photo.Png")));
        assert!(ImageCollector::is_supported_image(Path::new("scan.tiff")));
        assert!(ImageCollector::is_supported_image(Path::new("anim.webp")));
        assert!(!ImageCollector::is_supported_image(Path::new("notes.txt")));
        assert!(!ImageCollector::is_supported_image(Path::new("archive.tar.gz")));
        assert!(!ImageCollector::is_supported_image(Path::new("noextension")));
    }

    #[test]
    fn test_collect_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"x").unwrap();
        fs::write(dir.path().join("b.JPG"), b"x").unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();

        let sub = dir.path().join("nested");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("deep.png"), b"x").unwrap();

        let files = ImageCollector::new(dir.path().to_path_buf()).collect();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();

        assert_eq!(names, vec!["a.png", "b.JPG"]);
    }

    #[test]
    fn test_collect_missing_directory() {
        let collector = ImageCollector::new(PathBuf::from("/no/such/directory"));
        assert!(!collector.exists());
        assert!(collector.collect().is_empty());
    }
}
