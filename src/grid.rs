//! # 像素网格模块
//!
//! `PixelGrid` 是核心库唯一操作的数据结构：一个按行优先顺序存放的
//! 8 位 RGB 像素矩形。它由 I/O 层从图像文件解码得到，核心只借用或克隆它。

use crate::error::{Result, StegoError};
use crate::planner::{self, BitAddress};

/// 一个像素的三个通道，顺序为 R, G, B。
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// 用行优先顺序的像素构造网格。
    ///
    /// # Errors
    ///
    /// * 宽或高为 0 时返回 `InvalidDimensions`。
    /// * 像素数不等于 `width * height` 时返回 `PixelCountMismatch`。
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(StegoError::InvalidDimensions { width, height });
        }

        let expected = u64::from(width) * u64::from(height);
        let actual = pixels.len() as u64;
        if expected != actual {
            return Err(StegoError::PixelCountMismatch {
                width,
                height,
                expected,
                actual,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// 构造一个所有像素都相同的网格。
    pub fn filled(width: u32, height: u32, pixel: Rgb) -> Result<Self> {
        let count = u64::from(width) * u64::from(height);
        Self::from_pixels(width, height, vec![pixel; count as usize])
    }

    /// 按坐标逐个生成像素，`x` 为列，`y` 为行。
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Result<Self> {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .map(|(x, y)| f(x, y))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 行优先顺序的全部像素。
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// 取 (x, y) 处的像素，越界时返回 `None`。
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.linear_index(x, y)])
    }

    /// 图像可用于隐写的总比特数。
    pub fn total_bits(&self) -> u64 {
        planner::total_bits(self.width, self.height)
    }

    /// 读取比特地址指向的通道值。
    pub(crate) fn channel(&self, address: BitAddress) -> u8 {
        self.pixels[self.linear_index(address.column, address.row)][address.channel.index()]
    }

    pub(crate) fn channel_mut(&mut self, address: BitAddress) -> &mut u8 {
        let index = self.linear_index(address.column, address.row);
        &mut self.pixels[index][address.channel.index()]
    }

    /// 对每个通道值应用 `f`，得到同尺寸的新网格。
    pub fn map_channels(&self, f: impl Fn(u8) -> u8) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|px| px.map(&f)).collect(),
        }
    }

    fn linear_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
