//! 会话上下文
//!
//! token/role 的唯一归口：写入只有 `login` 一个入口，
//! 清除只有 `clear` 一个入口（登出与 401/403 失效共用）。
//! 路由守卫与请求层都通过注入的上下文读取会话，
//! 不直接触碰 LocalStorage。

use crate::web::LocalStorage;
use leptos::prelude::*;

pub const KEY_TOKEN: &str = "token";
pub const KEY_ROLE: &str = "role";

/// 守卫决策用的纯数据快照
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub role: Option<String>,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// 本地存储的角色是否为管理员。纯客户端门禁，
    /// 真正的鉴权由服务端对每个请求执行。
    pub fn is_admin(&self) -> bool {
        self.is_authenticated() && self.role.as_deref() == Some(crate::types::ROLE_ADMIN)
    }
}

/// 会话上下文，经 Context 注入路由守卫与请求层
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: ReadSignal<SessionSnapshot>,
    set_state: WriteSignal<SessionSnapshot>,
}

impl SessionContext {
    /// 从 LocalStorage 恢复上次的会话（token 无过期跟踪，
    /// 是否仍然有效只能由 401/403 响应事后发现）
    pub fn restore() -> Self {
        let snapshot = SessionSnapshot {
            token: LocalStorage::get(KEY_TOKEN),
            role: LocalStorage::get(KEY_ROLE),
        };
        let (state, set_state) = signal(snapshot);
        Self { state, set_state }
    }

    /// 守卫用的响应式快照信号
    pub fn guard_signal(&self) -> Signal<SessionSnapshot> {
        self.state.into()
    }

    pub fn token(&self) -> Option<String> {
        self.state.get_untracked().token
    }

    pub fn is_authenticated(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    pub fn is_admin(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_admin())
    }

    /// 登录成功后的唯一写入口：持久化并更新信号
    pub fn login(&self, token: String, role: String) {
        LocalStorage::set(KEY_TOKEN, &token);
        LocalStorage::set(KEY_ROLE, &role);
        self.set_state.set(SessionSnapshot {
            token: Some(token),
            role: Some(role),
        });
    }

    /// 唯一的会话销毁入口：整体清空 LocalStorage 并复位信号。
    /// 登出按钮与 HTTP 层的 401/403 处理都走这里，
    /// 后续的重定向由路由服务监听会话信号完成。
    pub fn clear(&self) {
        LocalStorage::clear();
        self.set_state.set(SessionSnapshot::default());
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_snapshot() {
        let snap = SessionSnapshot::default();
        assert!(!snap.is_authenticated());
        assert!(!snap.is_admin());
    }

    #[test]
    fn token_without_admin_role() {
        let snap = SessionSnapshot {
            token: Some("jwt".into()),
            role: Some("user".into()),
        };
        assert!(snap.is_authenticated());
        assert!(!snap.is_admin());
    }

    #[test]
    fn admin_snapshot() {
        let snap = SessionSnapshot {
            token: Some("jwt".into()),
            role: Some("admin".into()),
        };
        assert!(snap.is_admin());
    }

    #[test]
    fn role_alone_is_not_enough() {
        // 只有 role 没有 token 视为未认证
        let snap = SessionSnapshot {
            token: None,
            role: Some("admin".into()),
        };
        assert!(!snap.is_admin());
    }
}
