//! # lsb_embed 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：容量规划、文本的嵌入与提取，
//! 以及 LSB 平面可视化。核心只处理内存中的 `PixelGrid`，
//! 文件读写由 `raster` 模块和命令行层负责。

// 声明库包含的所有模块。

pub mod cli;
pub mod constants;
pub mod error;
pub mod grid;
pub mod handler;
pub mod logging;
pub mod plane;
pub mod planner;
pub mod raster;
pub mod steganography;

pub use error::{Result, StegoError};
pub use grid::{PixelGrid, Rgb};
pub use plane::render_lsb_plane;
pub use planner::{BitAddress, Capacity, Channel, bit_address, max_payload_bytes, total_bits};
pub use steganography::{Codec, can_embed, embed, extract};
