//! # 命令处理逻辑模块
//!
//! 包含处理各个子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, PlaneArgs, RecoverArgs};
use crate::constants::{HIDDEN_IMAGE_PREFIX, LSB_PLANE_PREFIX, RECOVERED_TEXT_PREFIX};
use crate::logging::LogFacade;
use crate::planner::Capacity;
use crate::plane::render_lsb_plane_with;
use crate::raster::{load_grid, save_grid};
use crate::steganography::Codec;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、检查隐写空间是否足够、调用编解码器嵌入文本，
/// 最后将结果写入目标图像文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或文本文件，或文本不是 UTF-8。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像没有足够的空间来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| sibling_path(&args.image, HIDDEN_IMAGE_PREFIX, None));
    ensure_writable(&dest, args.force)?;

    let grid = load_grid(&args.image)?;
    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file (it must exist and be valid UTF-8): {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let embedded = Codec::with_sink(&LogFacade).embed(&grid, &text)?;

    save_grid(&embedded, &dest)?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用编解码器恢复文本，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中的长度头损坏，或恢复的内容不是 UTF-8。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args
        .text
        .unwrap_or_else(|| sibling_path(&args.image, RECOVERED_TEXT_PREFIX, Some("txt")));
    ensure_writable(&dest, args.force)?;

    let grid = load_grid(&args.image)?;

    let text = Codec::with_sink(&LogFacade)
        .extract(&grid)
        .with_context(|| {
            format!(
                "Failed to recover text from '{}'. \nThe image may not contain a hidden message or is corrupted.",
                args.image.to_string_lossy().red().bold()
            )
        })?;

    fs::write(&dest, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Plane' 命令：把图像的 LSB 平面写入目标文件。
pub fn handle_plane(args: PlaneArgs) -> Result<()> {
    let dest = args
        .dest
        .unwrap_or_else(|| sibling_path(&args.image, LSB_PLANE_PREFIX, None));
    ensure_writable(&dest, args.force)?;

    let grid = load_grid(&args.image)?;
    let plane = render_lsb_plane_with(&grid, &LogFacade);
    save_grid(&plane, &dest)?;

    println!(
        "The LSB plane has been saved: {}",
        dest.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：打印图像容量，并可检查某个文本文件能否放入。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let grid = load_grid(&args.image)?;
    let capacity = Capacity::of(grid.width(), grid.height());

    println!(
        "{}: {}x{}, {} bits, up to {} bytes of text",
        args.image.to_string_lossy().bold(),
        grid.width(),
        grid.height(),
        capacity.total_bits,
        capacity.max_payload_bytes.to_string().green().bold()
    );

    if let Some(text_path) = args.text {
        let text = fs::read_to_string(&text_path).with_context(|| {
            format!(
                "Unable to read text file (it must exist and be valid UTF-8): {}",
                text_path.to_string_lossy().red().bold()
            )
        })?;

        if Codec::with_sink(&LogFacade).can_embed(&grid, &text) {
            println!(
                "{} ({} bytes) fits.",
                text_path.to_string_lossy().green().bold(),
                text.len()
            );
        } else {
            println!(
                "{} ({} bytes) does not fit.",
                text_path.to_string_lossy().red().bold(),
                text.len().to_string().red().bold()
            );
        }
    }

    Ok(())
}

/// 在 `source` 所在目录生成 `<prefix><文件名>`，可替换扩展名。
fn sibling_path(source: &Path, prefix: &str, extension: Option<&str>) -> PathBuf {
    let name = match extension {
        Some(ext) => {
            let stem = source.file_stem().unwrap_or_default().to_string_lossy();
            format!("{prefix}{stem}.{ext}")
        }
        None => {
            let file_name = source.file_name().unwrap_or_default().to_string_lossy();
            format!("{prefix}{file_name}")
        }
    };
    source.with_file_name(name)
}

fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
