//! 路由服务 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作
//! 都集中在此模块。每次导航意图（编程导航、popstate、会话变化）
//! 都先经过 `route::decide` 守卫，再推入 History 并更新信号；
//! 成功导航后把路由元数据写入 document.title。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardDecision, decide};
use crate::logger;
use crate::session::SessionSnapshot;
use crate::store::MessageStore;

/// 当前浏览器路径（含查询串，登录页的 redirect 参数在其中）
fn current_path() -> String {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return "/".to_string();
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    format!("{}{}", path, search)
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 重定向用 replace，避免把被守卫拦下的路径留在历史栈里
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(&format!("{} - 数据字典", title));
    }
}

/// 路由器服务
///
/// 通过注入的会话快照信号做守卫决策，与会话模块解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<SessionSnapshot>,
    messages: MessageStore,
}

impl RouterService {
    fn new(session: Signal<SessionSnapshot>, messages: MessageStore) -> Self {
        let initial = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial);
        Self {
            current_route,
            set_route,
            session,
            messages,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 编程导航入口：请求 -> 守卫 -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        self.apply(AppRoute::from_path(path), true);
    }

    /// 对一次导航意图执行守卫并落地
    fn apply(&self, target: AppRoute, use_push: bool) {
        let snapshot = self.session.get_untracked();
        match decide(&target, &snapshot) {
            GuardDecision::Allow => self.load(target, use_push),
            GuardDecision::RedirectToLogin { redirect } => {
                logger::info("Router", "访问受保护页面但未登录，转登录页", redirect.as_str());
                self.load(
                    AppRoute::Login {
                        redirect: Some(redirect),
                    },
                    false,
                );
            }
            GuardDecision::DenyToHome => {
                self.messages.warn("该页面仅限管理员访问");
                self.load(AppRoute::Search, false);
            }
            GuardDecision::RedirectToAdminHome => self.load(AppRoute::admin_home(), false),
        }
    }

    /// 守卫通过后的加载：写 History、更新标题、驱动视图
    fn load(&self, route: AppRoute, use_push: bool) {
        let path = route.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        set_document_title(route.title());
        self.set_route.set(route);
    }

    /// 浏览器后退/前进也要过守卫
    fn init_popstate_listener(&self) {
        let service = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            service.apply(target, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话状态变化时重新校验当前路由：
    /// 登出/401 失效会把受保护页面换成登录页，
    /// 登录成功会把登录页换成管理首页。
    fn setup_session_effect(&self) {
        let service = *self;
        Effect::new(move |_| {
            let snapshot = service.session.get();
            let route = service.current_route.get_untracked();
            if decide(&route, &snapshot) != GuardDecision::Allow {
                service.apply(route, false);
            }
        });
    }
}

fn provide_router(session: Signal<SessionSnapshot>, messages: MessageStore) -> RouterService {
    let router = RouterService::new(session, messages);

    // 首次进入也执行守卫（直接输入受保护 URL 的情况）
    router.apply(router.current_route.get_untracked(), false);

    router.init_popstate_listener();
    router.setup_session_effect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 会话快照信号（守卫依据）
    session: Signal<SessionSnapshot>,
    /// 全局提示条（守卫拦截时的警告出口）
    messages: MessageStore,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(session, messages);

    children()
}

/// 路由出口：根据当前路由渲染对应视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
