//! # 隐写编解码模块
//!
//! 把带长度前缀的字节载荷写入像素通道的最低有效位，并能原样取回。
//!
//! 布局：
//! * 比特 `[0, 32)`：载荷字节数 `L`，最低位在前。
//! * 比特 `[32, 32 + L*8)`：载荷字节，每个字节最低位在前。
//! * 其余比特保持不变。

use crate::constants::{BITS_PER_BYTE, LENGTH_HEADER_BITS};
use crate::error::{Result, StegoError};
use crate::grid::PixelGrid;
use crate::logging::{Level, LogSink, NoopSink};
use crate::planner::{self, Capacity};

/// 通道值的最低有效位。
pub fn lsb(value: u8) -> u8 {
    value & 1
}

/// 把通道值的最低有效位替换为 `bit`。
pub fn with_lsb(value: u8, bit: u8) -> u8 {
    (value & 0xFE) | (bit & 1)
}

/// 编解码器，持有一个日志接收器。
pub struct Codec<'a> {
    sink: &'a dyn LogSink,
}

impl Default for Codec<'_> {
    fn default() -> Self {
        Self { sink: &NoopSink }
    }
}

impl<'a> Codec<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(sink: &'a dyn LogSink) -> Self {
        Self { sink }
    }

    /// 判断 `text` 能否嵌入 `grid`。纯函数，不会失败。
    ///
    /// 不足 32 比特的图像连长度头都放不下，任何文本 (包括空串) 都返回 `false`。
    pub fn can_embed(&self, grid: &PixelGrid, text: &str) -> bool {
        let Capacity {
            total_bits,
            max_payload_bytes: max,
        } = Capacity::of(grid.width(), grid.height());
        let required = text.len() as u64;
        let fits = total_bits >= LENGTH_HEADER_BITS && required <= max;
        self.sink.log(
            Level::Debug,
            &format!("Can embed text: {fits} (max: {max} bytes, actual: {required} bytes)"),
        );
        fits
    }

    /// 把 `text` 嵌入 `grid` 的副本并返回该副本，原网格保持不变。
    ///
    /// # Errors
    ///
    /// 载荷超过容量时返回 `CapacityExceeded`，此时不会产生任何修改。
    pub fn embed(&self, grid: &PixelGrid, text: &str) -> Result<PixelGrid> {
        let payload = text.as_bytes();
        self.sink.log(
            Level::Info,
            &format!(
                "Embedding {} bytes into a {}x{} image",
                payload.len(),
                grid.width(),
                grid.height()
            ),
        );

        if !self.can_embed(grid, text) {
            let max_bytes = planner::max_payload_bytes(grid.width(), grid.height());
            return Err(self.fail(StegoError::CapacityExceeded {
                required_bytes: payload.len() as u64,
                max_bytes,
            }));
        }
        let length = u32::try_from(payload.len()).map_err(|_| {
            self.fail(StegoError::CapacityExceeded {
                required_bytes: payload.len() as u64,
                max_bytes: u64::from(u32::MAX),
            })
        })?;

        let mut embedded = grid.clone();
        let (width, height) = (grid.width(), grid.height());

        let header_bits = (0..LENGTH_HEADER_BITS).map(|k| ((length >> k) & 1) as u8);
        let payload_bits = payload
            .iter()
            .flat_map(|&byte| (0..BITS_PER_BYTE).map(move |j| (byte >> j) & 1));

        for (index, bit) in header_bits.chain(payload_bits).enumerate() {
            let address = planner::bit_address(index as u64, width, height);
            let channel = embedded.channel_mut(address);
            *channel = with_lsb(*channel, bit);
        }

        self.sink
            .log(Level::Info, "Text successfully embedded into image");
        Ok(embedded)
    }

    /// 从 `grid` 中恢复之前嵌入的文本。
    ///
    /// # Errors
    ///
    /// * 长度头所需比特超过图像容量时返回 `CorruptHeader`。
    /// * 恢复的字节不是合法 UTF-8 时返回 `InvalidEncoding`。
    pub fn extract(&self, grid: &PixelGrid) -> Result<String> {
        self.sink.log(
            Level::Info,
            &format!(
                "Extracting text from a {}x{} image",
                grid.width(),
                grid.height()
            ),
        );

        let Capacity { total_bits, .. } = Capacity::of(grid.width(), grid.height());
        if total_bits < LENGTH_HEADER_BITS {
            return Err(self.fail(StegoError::CorruptHeader {
                decoded_length: 0,
                total_bits,
            }));
        }

        let length = u64::from(read_bits(grid, 0, LENGTH_HEADER_BITS));
        if LENGTH_HEADER_BITS + length * BITS_PER_BYTE > total_bits {
            return Err(self.fail(StegoError::CorruptHeader {
                decoded_length: length,
                total_bits,
            }));
        }

        let bytes: Vec<u8> = (0..length)
            .map(|i| read_bits(grid, LENGTH_HEADER_BITS + i * BITS_PER_BYTE, BITS_PER_BYTE) as u8)
            .collect();

        let text = String::from_utf8(bytes)
            .map_err(|e| self.fail(StegoError::InvalidEncoding(e)))?;

        self.sink.log(
            Level::Info,
            &format!("Successfully extracted {length} bytes of text"),
        );
        Ok(text)
    }

    fn fail(&self, error: StegoError) -> StegoError {
        self.sink.log(Level::Warn, &error.to_string());
        error
    }
}

/// 从 `start` 开始读取 `count` (至多 32) 个比特，最低位在前。
fn read_bits(grid: &PixelGrid, start: u64, count: u64) -> u32 {
    (0..count).fold(0u32, |value, k| {
        let address = planner::bit_address(start + k, grid.width(), grid.height());
        value | (u32::from(lsb(grid.channel(address))) << k)
    })
}

/// 使用默认 (无日志) 编解码器嵌入。
pub fn embed(grid: &PixelGrid, text: &str) -> Result<PixelGrid> {
    Codec::new().embed(grid, text)
}

/// 使用默认 (无日志) 编解码器提取。
pub fn extract(grid: &PixelGrid) -> Result<String> {
    Codec::new().extract(grid)
}

pub fn can_embed(grid: &PixelGrid, text: &str) -> bool {
    Codec::new().can_embed(grid, text)
}
