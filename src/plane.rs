//! # LSB 平面渲染
//!
//! 把每个通道替换为 0 或 255，用来直观地查看最低有效位的分布。
//! 仅用于诊断，编解码器不依赖它。

use crate::grid::PixelGrid;
use crate::logging::{Level, LogSink, NoopSink};
use crate::steganography::lsb;

/// 生成同尺寸的 LSB 平面图：`out = (in & 1) * 255`。
pub fn render_lsb_plane(grid: &PixelGrid) -> PixelGrid {
    render_lsb_plane_with(grid, &NoopSink)
}

pub fn render_lsb_plane_with(grid: &PixelGrid, sink: &dyn LogSink) -> PixelGrid {
    sink.log(
        Level::Info,
        &format!(
            "Creating LSB visualization for a {}x{} image",
            grid.width(),
            grid.height()
        ),
    );
    let plane = grid.map_channels(|value| lsb(value) * 255);
    sink.log(Level::Info, "LSB visualization created successfully");
    plane
}
