//! # 容量与比特规划模块
//!
//! 负责容量计算，以及把线性比特索引映射到具体的像素通道。
//! 嵌入和提取共用同一个映射，两者的一致性是正确性的全部前提。

use crate::constants::{BITS_PER_BYTE, CHANNELS_PER_PIXEL, LENGTH_HEADER_BITS};

/// 参与隐写的颜色通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// 通道在 `[u8; 3]` 中的下标。
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    fn from_bit_index(index: u64) -> Self {
        match index % CHANNELS_PER_PIXEL {
            0 => Channel::Red,
            1 => Channel::Green,
            _ => Channel::Blue,
        }
    }
}

/// 线性比特索引对应的像素通道位置。
///
/// 比特按行优先遍历：`row = i / (width*3)`，`column = (i % (width*3)) / 3`，
/// `channel = i % 3`。等价于第 `i / 3` 个像素 (行优先) 的第 `i % 3` 个通道。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitAddress {
    pub row: u32,
    pub column: u32,
    pub channel: Channel,
}

/// 图像的容量概况。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub total_bits: u64,
    pub max_payload_bytes: u64,
}

impl Capacity {
    pub fn of(width: u32, height: u32) -> Self {
        Self {
            total_bits: total_bits(width, height),
            max_payload_bytes: max_payload_bytes(width, height),
        }
    }
}

/// 图像的总比特容量：`width * height * 3`。
pub fn total_bits(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * CHANNELS_PER_PIXEL
}

/// 扣除 32 位长度头后可容纳的最大载荷字节数，向下取整。
pub fn max_payload_bytes(width: u32, height: u32) -> u64 {
    total_bits(width, height).saturating_sub(LENGTH_HEADER_BITS) / BITS_PER_BYTE
}

/// 把线性比特索引映射为像素通道位置。
///
/// # Panics
///
/// `index >= total_bits(width, height)` 时 panic。索引只由库内部在容量检查之后计算，
/// 越界说明调用方存在逻辑错误。
pub fn bit_address(index: u64, width: u32, height: u32) -> BitAddress {
    let total = total_bits(width, height);
    assert!(
        index < total,
        "bit index {index} is outside the {total} bits of a {width}x{height} grid"
    );

    let row_bits = u64::from(width) * CHANNELS_PER_PIXEL;
    // index < width*height*3，所以两个商都落在 u32 范围内
    BitAddress {
        row: (index / row_bits) as u32,
        column: ((index % row_bits) / CHANNELS_PER_PIXEL) as u32,
        channel: Channel::from_bit_index(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_of_small_grids() {
        assert_eq!(total_bits(10, 10), 300);
        assert_eq!(max_payload_bytes(10, 10), 33);
        assert_eq!(max_payload_bytes(100, 100), 3746);
        // 3x3 只有 27 比特，连长度头都放不下
        assert_eq!(max_payload_bytes(3, 3), 0);
        assert_eq!(max_payload_bytes(1, 11), 0);
        assert_eq!(max_payload_bytes(1, 14), 1);
    }

    #[test]
    fn addresses_walk_rows_then_columns_then_channels() {
        assert_eq!(
            bit_address(0, 7, 3),
            BitAddress {
                row: 0,
                column: 0,
                channel: Channel::Red
            }
        );
        assert_eq!(
            bit_address(22, 7, 3),
            BitAddress {
                row: 1,
                column: 0,
                channel: Channel::Green
            }
        );
        assert_eq!(
            bit_address(62, 7, 3),
            BitAddress {
                row: 2,
                column: 6,
                channel: Channel::Blue
            }
        );
    }

    #[test]
    fn address_matches_linear_pixel_index() {
        let (width, height) = (5, 4);
        for index in 0..total_bits(width, height) {
            let address = bit_address(index, width, height);
            let pixel = u64::from(address.row) * u64::from(width) + u64::from(address.column);
            assert_eq!(pixel, index / 3);
            assert_eq!(address.channel.index() as u64, index % 3);
        }
    }

    #[test]
    #[should_panic(expected = "outside the 63 bits")]
    fn address_past_capacity_panics() {
        bit_address(63, 7, 3);
    }
}
