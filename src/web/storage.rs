//! LocalStorage 封装
//!
//! 会话凭据（token/role）持久化在浏览器 LocalStorage 中。
//! 登出与会话失效通过 `clear` 整体清空，不做逐键删除。

/// 浏览器本地存储的静态封装
pub struct LocalStorage;

impl LocalStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取键值，键不存在或底层出错时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok()?
    }

    /// 写入键值，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::raw()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 整体清空，会话销毁时使用
    pub fn clear() -> bool {
        Self::raw().and_then(|s| s.clear().ok()).is_some()
    }
}
