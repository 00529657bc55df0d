//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，把 UTF-8 文本逐比特写入无损图像 (如 BMP, PNG) 的 RGB 通道。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，把 UTF-8 文本逐比特写入无损图像 (如 BMP, PNG) 的 RGB 通道，并能原样恢复。"
)]
pub struct Cli {
    /// 提高日志级别，可重复使用 (-v: info, -vv: debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像中隐藏文本文件内容。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 生成图像的 LSB 平面可视化图。
    Plane(PlaneArgs),

    /// 报告图像的隐写容量。
    Capacity(CapacityArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 BMP, PNG)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径，内容必须是 UTF-8。
    #[arg(short, long)]
    pub text: PathBuf,

    /// 结果图像的输出路径。省略时在输入图像旁生成 `doctored_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本的输出路径。省略时在图像旁生成 `recovered_<文件名>.txt`。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'plane' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct PlaneArgs {
    /// 要可视化的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// LSB 平面图的输出路径。省略时在输入图像旁生成 `lsb_plane_<文件名>`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要检查的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 可选的文本文件，用于检查它能否放进图像。
    #[arg(short, long)]
    pub text: Option<PathBuf>,
}
