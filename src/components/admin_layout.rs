//! 管理端布局
//!
//! 顶部导航 + 待办角标 + 登出。子页面（字段/词根/用户）作为
//! children 渲染。待办下拉里可直接把申请标记为已处理。

use crate::api::use_api;
use crate::session::use_session;
use crate::store::{use_messages, use_tasks};
use crate::types::Task;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let tasks = use_tasks();
    let messages = use_messages();
    let router = use_router();

    let (show_tasks, set_show_tasks) = signal(false);
    let (pending, set_pending) = signal(Vec::<Task>::new());

    // 进入管理端即刷新角标
    Effect::new(move |_| {
        spawn_local(async move {
            tasks.refresh(&api).await;
        });
    });

    let load_pending = move || {
        spawn_local(async move {
            if let Ok(list) = api.list_tasks().await {
                set_pending.set(list);
            }
        });
    };

    let toggle_tasks = move |_| {
        let next = !show_tasks.get_untracked();
        set_show_tasks.set(next);
        if next {
            load_pending();
        }
    };

    let complete = move |id: i32| {
        spawn_local(async move {
            if api.complete_task(id).await.is_ok() {
                messages.success("已标记处理");
                if let Ok(list) = api.list_tasks().await {
                    set_pending.set(list);
                }
                tasks.refresh(&api).await;
            }
        });
    };

    let logout = move |_| {
        session.clear();
        messages.info("已退出登录");
        // 跳转登录页由路由服务监听会话信号自动完成
    };

    let count = tasks.unprocessed_count();
    let current = router.current_route();
    let tab_class = move |route: AppRoute| {
        if current.get() == route {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <span class="text-xl font-bold px-2">"数据字典 · 管理端"</span>
                    <div role="tablist" class="tabs tabs-boxed ml-4">
                        <a role="tab" class=move || tab_class(AppRoute::AdminFields)
                            on:click=move |_| router.navigate("/admin/fields")>"字段管理"</a>
                        <a role="tab" class=move || tab_class(AppRoute::AdminRoots)
                            on:click=move |_| router.navigate("/admin/roots")>"词根管理"</a>
                        <a role="tab" class=move || tab_class(AppRoute::AdminUsers)
                            on:click=move |_| router.navigate("/admin/users")>"用户管理"</a>
                    </div>
                </div>
                <div class="flex-none gap-2">
                    <button class="btn btn-ghost indicator" on:click=toggle_tasks>
                        <Show when=move || { count.get() > 0 }>
                            <span class="indicator-item badge badge-error badge-sm">
                                {move || count.get()}
                            </span>
                        </Show>
                        "待办"
                    </button>
                    <button class="btn btn-ghost" on:click=move |_| router.navigate("/")>
                        "前台检索"
                    </button>
                    <button class="btn btn-outline btn-sm" on:click=logout>"退出登录"</button>
                </div>
            </div>

            // 待办面板
            <Show when=move || show_tasks.get()>
                <div class="max-w-5xl mx-auto px-6 pt-4">
                    <div class="card bg-base-100 shadow">
                        <div class="card-body p-4">
                            <h3 class="font-bold">"待处理申请"</h3>
                            {move || if pending.get().is_empty() {
                                view! { <p class="text-base-content/60">"暂无待处理申请"</p> }.into_any()
                            } else {
                                pending.get().into_iter().map(|task| {
                                    let id = task.id;
                                    view! {
                                        <div class="flex items-center justify-between border-b border-base-200 py-2">
                                            <span>
                                                {task.payload.field_cn_name.clone()}
                                                <span class="text-xs text-base-content/50 ml-2">
                                                    {task.created_at.clone().unwrap_or_default()}
                                                </span>
                                            </span>
                                            <button class="btn btn-xs btn-success" on:click=move |_| complete(id)>
                                                "标记处理"
                                            </button>
                                        </div>
                                    }
                                }).collect_view().into_any()
                            }}
                        </div>
                    </div>
                </div>
            </Show>

            <div class="max-w-5xl mx-auto p-6">{children()}</div>
        </div>
    }
}
