//! 控制台日志工具
//!
//! 进程级的分级日志：阈值在编译期确定（开发构建放开 Debug，
//! 发布构建只保留 Warn 以上），低于阈值的调用是空操作。
//! 输出为带样式的标签行，纯诊断用途，不做缓冲或持久化。

use wasm_bindgen::JsValue;
use web_sys::console;

/// 日志级别，从低到高
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// 当前阈值：由构建环境决定
pub const fn current_level() -> LogLevel {
    if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    }
}

/// 该级别是否会产生输出
pub fn enabled(level: LogLevel) -> bool {
    level >= current_level()
}

const STYLE_DEBUG: &str = "color: #909399; font-weight: bold;";
const STYLE_INFO: &str = "color: white; background: #409eff; padding: 2px 5px; border-radius: 3px;";
const STYLE_WARN: &str = "color: white; background: #e6a23c; padding: 2px 5px; border-radius: 3px;";
const STYLE_ERROR: &str = "color: white; background: #f56c6c; padding: 2px 5px; border-radius: 3px;";
const STYLE_TAG: &str = "color: #409eff; font-weight: bold; margin-left: 5px;";

fn emit(level: LogLevel, label: &str, style: &str, tag: &str, msg: &str, data: JsValue) {
    if !enabled(level) {
        return;
    }
    let fmt = JsValue::from_str(&format!("%c[{}]%c %c{}%c {}", label, tag, msg));
    let reset = JsValue::from_str("");
    let style = JsValue::from_str(style);
    let tag_style = JsValue::from_str(STYLE_TAG);
    match level {
        LogLevel::Warn => console::warn_6(&fmt, &style, &reset, &tag_style, &reset, &data),
        LogLevel::Error => console::error_6(&fmt, &style, &reset, &tag_style, &reset, &data),
        _ => console::log_6(&fmt, &style, &reset, &tag_style, &reset, &data),
    }
}

pub fn debug(tag: &str, msg: &str, data: impl Into<JsValue>) {
    emit(LogLevel::Debug, "DEBUG", STYLE_DEBUG, tag, msg, data.into());
}

pub fn info(tag: &str, msg: &str, data: impl Into<JsValue>) {
    emit(LogLevel::Info, "INFO", STYLE_INFO, tag, msg, data.into());
}

pub fn warn(tag: &str, msg: &str, data: impl Into<JsValue>) {
    emit(LogLevel::Warn, "WARN", STYLE_WARN, tag, msg, data.into());
}

pub fn error(tag: &str, msg: &str, data: impl Into<JsValue>) {
    emit(LogLevel::Error, "ERROR", STYLE_ERROR, tag, msg, data.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn error_is_never_filtered() {
        // 不管构建环境如何，Error 都不低于阈值
        assert!(enabled(LogLevel::Error));
        assert!(enabled(current_level()));
    }
}
