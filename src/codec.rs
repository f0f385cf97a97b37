//! # 图片编解码模块
//!
//! 解码输入图片并编码为 WebP 格式。
//!
//! ## 功能
//! - 使用 `image` 解码所有支持的输入格式
//! - 使用 `webp` (libwebp) 进行有损编码，质量可调
//! - 带透明通道的图片保留透明度
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `error.rs` 的错误类型

use crate::error::{Result, WebpifyError};

use image::DynamicImage;
use std::fs;
use std::path::Path;

/// 解码输入文件并将 WebP 编码结果写入输出路径
pub fn convert_file(input: &Path, output: &Path, quality: u8) -> Result<()> {
    let img = image::open(input).map_err(|e| WebpifyError::DecodeError {
        path: input.display().to_string(),
        reason: e.to_string(),
    })?;

    let encoded = encode_webp(&img, quality)?;

    fs::write(output, &encoded).map_err(|e| WebpifyError::FileWriteError {
        path: output.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 将解码后的图片编码为 WebP 字节流
///
/// 调色板格式在解码阶段已被展开为 RGB/RGBA，因此只需根据
/// 是否带透明通道选择编码路径。
pub fn encode_webp(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    if img.color().has_alpha() {
        encode_rgba(img, quality)
    } else {
        encode_rgb(img, quality)
    }
}

/// 带透明通道的编码路径（最高压缩努力等级）
fn encode_rgba(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let encoder = webp::Encoder::from_rgba(rgba.as_raw(), width, height);

    let mut config = webp::WebPConfig::new().map_err(|_| WebpifyError::EncodeError {
        reason: "failed to initialize libwebp encoder configuration".to_string(),
    })?;
    config.quality = quality as f32;
    config.method = 6;

    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| WebpifyError::EncodeError {
            reason: format!("{:?}", e),
        })?;

    Ok(memory.to_vec())
}

/// 不带透明通道的编码路径
fn encode_rgb(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let encoder = webp::Encoder::from_rgb(rgb.as_raw(), width, height);

    Ok(encoder.encode(quality as f32).to_vec())
}
