//! # 错误类型模块
//!
//! 核心库向调用方报告的所有可预期失败。
//! 规划器的索引越界属于编程错误，直接 panic，不在此列。

use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 载荷超出图像可容纳的字节数。在修改任何像素之前检查。
    #[error(
        "Not enough space in the image to hide the text. Required: {required_bytes} bytes, Available: {max_bytes} bytes"
    )]
    CapacityExceeded { required_bytes: u64, max_bytes: u64 },

    /// 长度头解码出的长度超过了图像能容纳的比特数。
    /// 通常意味着图像里根本没有隐藏信息，或者选错了图像。
    #[error(
        "Corrupt length header: a payload of {decoded_length} bytes does not fit in the {total_bits} bits of this image"
    )]
    CorruptHeader { decoded_length: u64, total_bits: u64 },

    /// 恢复出的字节不是合法的 UTF-8。
    #[error("The recovered payload is not valid UTF-8")]
    InvalidEncoding(#[source] FromUtf8Error),

    #[error("Invalid image dimensions {width}x{height}: width and height must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel count mismatch: a {width}x{height} grid needs {expected} pixels, got {actual}")]
    PixelCountMismatch {
        width: u32,
        height: u32,
        expected: u64,
        actual: u64,
    },
}

pub type Result<T> = std::result::Result<T, StegoError>;
