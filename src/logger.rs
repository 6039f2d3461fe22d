use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

/// 初始化全局日志器
///
/// 静默模式下只输出错误日志，避免干扰管道输出。
pub fn init_logger(silent: bool) {
    let level = if silent {
        LevelFilter::Error
    } else {
        LevelFilter::Warn
    };
    // 重复初始化（例如测试中）直接忽略
    let _ = SimpleLogger::init(level, Config::default());
}
