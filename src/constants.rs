/// 长度头占用的比特数。
/// 载荷长度以 `u32` 存储，最低位在前，占据前 32 个通道的最低有效位。
pub const LENGTH_HEADER_BITS: u64 = 32;

/// 每个载荷字节展开后的比特数。
pub const BITS_PER_BYTE: u64 = 8;

/// 每个像素参与隐写的通道数 (R, G, B，不使用 alpha)。
pub const CHANNELS_PER_PIXEL: u64 = 3;

/// 未指定输出路径时，隐写结果图像的文件名前缀。
pub const HIDDEN_IMAGE_PREFIX: &str = "doctored_";

/// 未指定输出路径时，恢复文本的文件名前缀。
pub const RECOVERED_TEXT_PREFIX: &str = "recovered_";

/// 未指定输出路径时，LSB 平面图像的文件名前缀。
pub const LSB_PLANE_PREFIX: &str = "lsb_plane_";

/// 日志 target，`LogFacade` 转发的所有记录都归在这里。
pub const LOG_TARGET: &str = "lsb_embed";
