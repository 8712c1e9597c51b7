//! 登录页

use crate::api::use_api;
use crate::session::use_session;
use crate::store::use_messages;
use crate::types::{AuthPayload, ROLE_ADMIN};
use crate::web::route::post_login_target;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage(
    /// 登录成功后要回到的路径（守卫重定向时带入）
    #[prop(optional_no_strip)]
    redirect: Option<String>,
) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let messages = use_messages();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let redirect = StoredValue::new(redirect);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("请输入用户名和密码".to_string()));
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let payload = AuthPayload {
                username: username.get_untracked().trim().to_string(),
                password: password.get_untracked(),
            };
            match api.login(&payload).await {
                Ok(res) => {
                    let is_admin = res.role == ROLE_ADMIN;
                    session.login(res.token, res.role);
                    messages.success("登录成功");
                    let target = post_login_target(is_admin, redirect.get_value());
                    router.navigate(&target);
                }
                Err(_) => {
                    set_error_msg.set(Some("登录失败，请检查用户名和密码".to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"数据字典管理系统"</h1>
                    <p class="text-base-content/70 mt-2">"登录以继续"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"用户名"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                class="input input-bordered"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"密码"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "登录中..." } else { "登录" }}
                            </button>
                        </div>
                        <div class="text-center text-sm mt-2">
                            <a class="link link-primary" on:click=move |_| router.navigate("/signup")>
                                "没有账号？去注册"
                            </a>
                            <span class="mx-2">"·"</span>
                            <a class="link" on:click=move |_| router.navigate("/")>
                                "返回检索"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
