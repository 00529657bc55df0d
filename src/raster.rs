//! # 图像读写模块
//!
//! 在磁盘上的无损图像文件 (BMP, PNG, TIFF, WebP, QOI) 与 `PixelGrid` 之间转换。
//! alpha 通道在读取时被丢弃，写入格式由目标路径的扩展名决定。

use crate::grid::PixelGrid;
use anyhow::{Context, Result};
use colored::Colorize;
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

impl TryFrom<&RgbImage> for PixelGrid {
    type Error = crate::error::StegoError;

    fn try_from(image: &RgbImage) -> Result<Self, Self::Error> {
        let pixels = image.pixels().map(|&Rgb(px)| px).collect();
        PixelGrid::from_pixels(image.width(), image.height(), pixels)
    }
}

impl From<&PixelGrid> for RgbImage {
    fn from(grid: &PixelGrid) -> Self {
        let width = grid.width() as usize;
        let pixels = grid.pixels();
        ImageBuffer::from_fn(grid.width(), grid.height(), |x, y| {
            Rgb(pixels[y as usize * width + x as usize])
        })
    }
}

/// 读取图像文件并解码为像素网格。
///
/// # Errors
///
/// * 文件无法打开或不是受支持的图像格式。
/// * 图像宽或高为 0。
pub fn load_grid(path: &Path) -> Result<PixelGrid> {
    let image = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let grid = PixelGrid::try_from(&image).with_context(|| {
        format!(
            "Image file has no usable pixels: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    log::info!(
        "Read image {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(grid)
}

/// 把像素网格编码后写入 `path`。
pub fn save_grid(grid: &PixelGrid, path: &Path) -> Result<()> {
    RgbImage::from(grid).save(path).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    log::info!("Wrote image {}", path.display());
    Ok(())
}
