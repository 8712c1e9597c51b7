//! 数据字典管理系统前端
//!
//! 纯展示层：检索标准字段/词根词汇，管理端对词汇、用户账号与
//! "新增术语"申请做 CRUD。所有业务计算（分词、候选打分、组合
//! 匹配）都在服务端，这里只经由 HTTP 接口消费结果。
//!
//! 架构与职责划分：
//! - `web::route` / `web::router`: 路由领域模型与 History 引擎（含守卫）
//! - `web::http`: 统一请求通道（凭据注入、超时、401/403 会话销毁）
//! - `session`: 会话上下文，token/role 的唯一归口
//! - `api`: 按后端端点一一对应的类型化目录
//! - `store`: 待办计数与全局提示条
//! - `components`: UI 页面层

mod api;
mod logger;
mod session;
mod store;
mod types;

mod components {
    pub mod admin_layout;
    pub mod field_list;
    pub mod login;
    pub mod root_list;
    pub mod search;
    pub mod signup;
    pub mod toast;
    pub mod user_list;
}

pub(crate) mod web;

use crate::api::DictionaryApi;
use crate::components::admin_layout::AdminLayout;
use crate::components::field_list::FieldListPage;
use crate::components::login::LoginPage;
use crate::components::root_list::RootListPage;
use crate::components::search::SearchPage;
use crate::components::signup::SignupPage;
use crate::components::toast::MessageToast;
use crate::components::user_list::UserListPage;
use crate::session::SessionContext;
use crate::store::{MessageStore, TaskStore};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

use leptos::prelude::*;

/// 路由匹配：AppRoute -> 视图
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Search => view! { <SearchPage /> }.into_any(),
        AppRoute::Login { redirect } => view! { <LoginPage redirect=redirect /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::AdminFields => view! {
            <AdminLayout>
                <FieldListPage />
            </AdminLayout>
        }
        .into_any(),
        AppRoute::AdminRoots => view! {
            <AdminLayout>
                <RootListPage />
            </AdminLayout>
        }
        .into_any(),
        AppRoute::AdminUsers => view! {
            <AdminLayout>
                <UserListPage />
            </AdminLayout>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话上下文：从 LocalStorage 恢复 token/role
    let session = SessionContext::restore();
    provide_context(session);

    // 2. 全局提示条与 API 客户端（请求层注入同一个会话上下文）
    let messages = MessageStore::new();
    provide_context(messages);
    provide_context(DictionaryApi::new(session, messages));

    // 3. 待办计数
    provide_context(TaskStore::new());

    view! {
        // 4. 路由器：注入会话快照信号实现守卫
        <Router session=session.guard_signal() messages=messages>
            <MessageToast />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
