//! # 日志接收器模块
//!
//! 核心库不绑定具体的日志后端，只向一个 `(级别, 消息)` 接收器报告状态。
//! 默认接收器什么都不做，有无接收器时库的行为完全一致。

use crate::constants::LOG_TARGET;
pub use log::Level;

/// 接收核心库在调用边界上产生的状态消息。
pub trait LogSink {
    fn log(&self, level: Level, message: &str);
}

/// 丢弃所有消息。
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _level: Level, _message: &str) {}
}

/// 转发到 `log` 门面，由二进制程序里初始化的 `env_logger` 输出。
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl LogSink for LogFacade {
    fn log(&self, level: Level, message: &str) {
        log::log!(target: LOG_TARGET, level, "{message}");
    }
}

impl<F> LogSink for F
where
    F: Fn(Level, &str),
{
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}
