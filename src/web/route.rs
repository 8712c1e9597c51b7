//! 路由定义与守卫决策 - 领域模型
//!
//! 纯业务逻辑层，不依赖 DOM 或 web_sys。
//! 路由枚举携带元数据（是否需要认证/管理员、页面标题），
//! `decide` 是每次导航意图的守卫决策函数。

use crate::session::SessionSnapshot;
use crate::web::url::{percent_encode, query_param};

/// 应用路由
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 公共检索页（默认路由，也是兜底重定向目标）
    #[default]
    Search,
    /// 登录页，可携带登录成功后要回到的目标路径
    Login { redirect: Option<String> },
    /// 注册页
    Signup,
    /// 字段管理（`/admin` 的落地页）
    AdminFields,
    /// 词根管理
    AdminRoots,
    /// 用户管理
    AdminUsers,
}

impl AppRoute {
    /// 将 URL（path + query）解析为路由。未知路径一律回公共检索页。
    pub fn from_path(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path, ""),
        };
        match path {
            "/" => Self::Search,
            "/login" => Self::Login {
                redirect: query_param(query, "redirect"),
            },
            "/signup" => Self::Signup,
            // /admin 重定向到字段管理
            "/admin" | "/admin/" | "/admin/fields" => Self::AdminFields,
            "/admin/roots" => Self::AdminRoots,
            "/admin/users" => Self::AdminUsers,
            _ => Self::Search,
        }
    }

    /// 路由对应的 URL
    pub fn to_path(&self) -> String {
        match self {
            Self::Search => "/".to_string(),
            Self::Login { redirect: None } => "/login".to_string(),
            Self::Login {
                redirect: Some(target),
            } => format!("/login?redirect={}", percent_encode(target)),
            Self::Signup => "/signup".to_string(),
            Self::AdminFields => "/admin/fields".to_string(),
            Self::AdminRoots => "/admin/roots".to_string(),
            Self::AdminUsers => "/admin/users".to_string(),
        }
    }

    /// 页面标题，每次成功导航后写入 document.title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Search => "数据字典检索",
            Self::Login { .. } => "登录",
            Self::Signup => "注册",
            Self::AdminFields => "字段管理",
            Self::AdminRoots => "词根管理",
            Self::AdminUsers => "用户管理",
        }
    }

    /// 是否需要登录
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::AdminFields | Self::AdminRoots | Self::AdminUsers)
    }

    /// 是否仅限管理员（当前管理子树整体仅限 admin）
    pub fn requires_admin(&self) -> bool {
        self.requires_auth()
    }

    fn is_login(&self) -> bool {
        matches!(self, Self::Login { .. })
    }

    /// 管理端首页
    pub fn admin_home() -> Self {
        Self::AdminFields
    }
}

/// 一次导航意图的守卫结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// 未登录访问受保护页面：去登录页并携带原始目标
    RedirectToLogin { redirect: String },
    /// 已登录但角色不足：警告并回公共首页
    DenyToHome,
    /// 已登录的管理员访问登录页：直接进管理首页
    RedirectToAdminHome,
}

/// 登录成功后的落地路径。管理员优先回守卫带入的原始目标，
/// 没有目标时进管理首页；普通用户一律回公共检索页。
pub fn post_login_target(is_admin: bool, redirect: Option<String>) -> String {
    if is_admin {
        redirect.unwrap_or_else(|| AppRoute::admin_home().to_path())
    } else {
        "/".to_string()
    }
}

/// 守卫决策。只读本地会话快照，不发请求；
/// 这是可伪造的客户端门禁，真正的授权由服务端逐请求执行。
pub fn decide(target: &AppRoute, session: &SessionSnapshot) -> GuardDecision {
    if !target.requires_auth() {
        if target.is_login() && session.is_admin() {
            return GuardDecision::RedirectToAdminHome;
        }
        return GuardDecision::Allow;
    }
    if !session.is_authenticated() {
        return GuardDecision::RedirectToLogin {
            redirect: target.to_path(),
        };
    }
    if target.requires_admin() && !session.is_admin() {
        return GuardDecision::DenyToHome;
    }
    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anonymous() -> SessionSnapshot {
        SessionSnapshot::default()
    }

    fn user() -> SessionSnapshot {
        SessionSnapshot {
            token: Some("jwt".into()),
            role: Some("user".into()),
        }
    }

    fn admin() -> SessionSnapshot {
        SessionSnapshot {
            token: Some("jwt".into()),
            role: Some("admin".into()),
        }
    }

    #[test]
    fn parses_known_paths() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/signup"), AppRoute::Signup);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::AdminFields);
        assert_eq!(AppRoute::from_path("/admin/fields"), AppRoute::AdminFields);
        assert_eq!(AppRoute::from_path("/admin/roots"), AppRoute::AdminRoots);
        assert_eq!(AppRoute::from_path("/admin/users"), AppRoute::AdminUsers);
    }

    #[test]
    fn unknown_path_falls_back_to_search() {
        assert_eq!(AppRoute::from_path("/nonsense"), AppRoute::Search);
        assert_eq!(AppRoute::from_path("/admin/secret"), AppRoute::Search);
    }

    #[test]
    fn login_redirect_survives_round_trip() {
        let route = AppRoute::Login {
            redirect: Some("/admin/roots".into()),
        };
        let path = route.to_path();
        assert_eq!(path, "/login?redirect=%2Fadmin%2Froots");
        assert_eq!(AppRoute::from_path(&path), route);
    }

    #[test]
    fn anonymous_is_sent_to_login_with_target() {
        let decision = decide(&AppRoute::AdminRoots, &anonymous());
        assert_eq!(
            decision,
            GuardDecision::RedirectToLogin {
                redirect: "/admin/roots".into()
            }
        );
    }

    #[test]
    fn non_admin_is_denied_to_home() {
        for target in [AppRoute::AdminFields, AppRoute::AdminRoots, AppRoute::AdminUsers] {
            assert_eq!(decide(&target, &user()), GuardDecision::DenyToHome);
        }
    }

    #[test]
    fn admin_passes_protected_routes() {
        assert_eq!(decide(&AppRoute::AdminRoots, &admin()), GuardDecision::Allow);
        assert_eq!(decide(&AppRoute::AdminUsers, &admin()), GuardDecision::Allow);
    }

    #[test]
    fn admin_skips_login_page() {
        let login = AppRoute::Login { redirect: None };
        assert_eq!(decide(&login, &admin()), GuardDecision::RedirectToAdminHome);
        // 普通用户和未登录用户可以停留在登录页
        assert_eq!(decide(&login, &user()), GuardDecision::Allow);
        assert_eq!(decide(&login, &anonymous()), GuardDecision::Allow);
    }

    #[test]
    fn admin_login_without_redirect_lands_on_admin_home() {
        assert_eq!(post_login_target(true, None), "/admin/fields");
    }

    #[test]
    fn admin_login_honors_original_target() {
        assert_eq!(
            post_login_target(true, Some("/admin/roots".into())),
            "/admin/roots"
        );
    }

    #[test]
    fn non_admin_login_goes_to_search() {
        // 普通用户即使带着管理端目标也不进管理端
        assert_eq!(post_login_target(false, Some("/admin/roots".into())), "/");
    }

    #[test]
    fn public_routes_are_open() {
        for snap in [anonymous(), user(), admin()] {
            assert_eq!(decide(&AppRoute::Search, &snap), GuardDecision::Allow);
        }
        assert_eq!(decide(&AppRoute::Signup, &anonymous()), GuardDecision::Allow);
    }
}
