//! 原生 Web API 封装模块
//!
//! 对浏览器 History / Storage / fetch 的轻量封装，
//! 所有直接触碰 web_sys 的代码都集中在这里。

pub mod http;
pub mod route;
pub mod router;
mod storage;
pub mod url;

pub use storage::LocalStorage;

/// window.confirm 封装，破坏性操作前的二次确认
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
