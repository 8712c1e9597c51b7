//! 公共检索页
//!
//! 标准字段的精确检索；检索落空时回退到语义相似词根，
//! 并允许用户就缺失的术语提交新增申请。

use crate::api::use_api;
use crate::logger;
use crate::session::use_session;
use crate::store::use_messages;
use crate::types::{SimilarRoot, StandardField};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SearchPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let messages = use_messages();
    let router = use_router();

    let (keyword, set_keyword) = signal(String::new());
    let (results, set_results) = signal(Vec::<StandardField>::new());
    let (similar, set_similar) = signal(Vec::<SimilarRoot>::new());
    let (searched, set_searched) = signal(false);
    let (is_searching, set_is_searching) = signal(false);

    let run_search = move || {
        let q = keyword.get_untracked().trim().to_string();
        if q.is_empty() {
            return;
        }
        set_is_searching.set(true);
        spawn_local(async move {
            match api.search_fields(&q).await {
                Ok(fields) => {
                    let missed = fields.is_empty();
                    set_results.set(fields);
                    set_similar.set(Vec::new());
                    if missed {
                        // 精确检索落空，退而求其次查语义相似词根
                        if let Ok(roots) = api.similar_roots(&q).await {
                            set_similar.set(roots);
                        }
                    }
                }
                Err(e) => logger::warn("Search", "检索失败", e.to_string().as_str()),
            }
            set_searched.set(true);
            set_is_searching.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run_search();
    };

    let submit_request = move |_| {
        let q = keyword.get_untracked().trim().to_string();
        if q.is_empty() {
            return;
        }
        spawn_local(async move {
            if api.submit_task(&q).await.is_ok() {
                messages.success("申请已提交，等待管理员处理");
            }
        });
    };

    let is_authenticated = session.is_authenticated();
    let is_admin = session.is_admin();

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow">
                <div class="flex-1">
                    <span class="text-xl font-bold px-2">"数据字典"</span>
                </div>
                <div class="flex-none">
                    {move || if is_admin.get() {
                        view! {
                            <button class="btn btn-ghost" on:click=move |_| router.navigate("/admin")>
                                "管理后台"
                            </button>
                        }
                        .into_any()
                    } else if !is_authenticated.get() {
                        view! {
                            <button class="btn btn-ghost" on:click=move |_| router.navigate("/login")>
                                "登录"
                            </button>
                        }
                        .into_any()
                    } else {
                        ().into_any()
                    }}
                </div>
            </div>

            <div class="max-w-3xl mx-auto p-6">
                <form class="join w-full" on:submit=on_submit>
                    <input
                        type="text"
                        class="input input-bordered join-item flex-1"
                        placeholder="输入业务术语，如：客户温度"
                        on:input=move |ev| set_keyword.set(event_target_value(&ev))
                        prop:value=keyword
                    />
                    <button class="btn btn-primary join-item" disabled=move || is_searching.get()>
                        {move || if is_searching.get() { "检索中..." } else { "检索" }}
                    </button>
                </form>

                // 标准字段结果
                <Show when=move || !results.get().is_empty()>
                    <div class="card bg-base-100 shadow mt-6">
                        <div class="card-body p-4">
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"中文名"</th>
                                        <th>"英文名"</th>
                                        <th>"数据类型"</th>
                                        <th>"标准"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {move || results.get().into_iter().map(|f| view! {
                                        <tr>
                                            <td>{f.field_cn_name.clone()}</td>
                                            <td><code>{f.field_en_name.clone()}</code></td>
                                            <td>{f.data_type.clone().unwrap_or_default()}</td>
                                            <td>
                                                {if f.is_standard {
                                                    view! { <span class="badge badge-success">"标准"</span> }.into_any()
                                                } else {
                                                    view! { <span class="badge badge-ghost">"草案"</span> }.into_any()
                                                }}
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </Show>

                // 未命中：展示相似词根 + 新增申请入口
                <Show when=move || searched.get() && results.get().is_empty()>
                    <div class="card bg-base-100 shadow mt-6">
                        <div class="card-body p-4">
                            <p class="text-base-content/70">"没有找到匹配的标准字段。"</p>
                            <Show when=move || !similar.get().is_empty()>
                                <p class="font-bold mt-2">"语义相近的词根："</p>
                                <div class="flex flex-wrap gap-2">
                                    {move || similar.get().into_iter().map(|r| view! {
                                        <div class="badge badge-outline badge-lg">
                                            {format!("{} ({}) {:.2}", r.cn_name, r.en_abbr, r.score)}
                                        </div>
                                    }).collect_view()}
                                </div>
                            </Show>
                            <div class="card-actions mt-4">
                                <button class="btn btn-outline btn-primary btn-sm" on:click=submit_request>
                                    "申请新增该术语"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
