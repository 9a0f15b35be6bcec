// 日志工具模块
//
// 封装 flexi_logger 的初始化和关闭，保证异步日志在退出前写完

use crate::config::Config;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use parking_lot::Mutex;

/// 全局日志句柄，退出时用于 flush
static LOGGER_HANDLE: Mutex<Option<LoggerHandle>> = parking_lot::const_mutex(None);

/// 初始化日志系统
///
/// 按配置写入 `<dir>/<file>`，超过 `max_file_size` 后按序号滚动，
/// 最多保留 `max_files` 个文件
pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let handle = Logger::try_with_str(&config.log.level)?
        .log_to_file(
            FileSpec::default()
                .basename(&config.log.file)
                .directory(&config.log.dir),
        )
        .rotate(
            Criterion::Size(config.log.max_file_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.log.max_files),
        )
        .write_mode(WriteMode::Async)
        .append()
        .start()?;

    *LOGGER_HANDLE.lock() = Some(handle);

    log::info!("日志系统初始化完成: {}/{}", config.log.dir, config.log.file);
    Ok(())
}

/// 刷新并关闭日志系统
///
/// 阻塞直到异步写线程处理完已提交的日志
pub fn shutdown() {
    if let Some(handle) = LOGGER_HANDLE.lock().take() {
        handle.flush();
    }
}

pub fn is_initialized() -> bool {
    LOGGER_HANDLE.lock().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_and_shutdown() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = Config::default();
        config.log.dir = dir.path().to_string_lossy().into_owned();
        config.log.level = "debug".to_string();

        let result = init(&config);
        assert!(result.is_ok(), "日志初始化失败: {:?}", result.err());
        assert!(is_initialized());

        log::error!("Storage Error: part: 1, error code: -16.");

        shutdown();
        assert!(!is_initialized());
    }
}
