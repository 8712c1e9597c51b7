//! 注册页

use crate::api::use_api;
use crate::store::use_messages;
use crate::types::AuthPayload;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SignupPage() -> impl IntoView {
    let api = use_api();
    let messages = use_messages();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().trim().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("请输入用户名和密码".to_string()));
            return;
        }
        if password.get() != confirm.get() {
            set_error_msg.set(Some("两次输入的密码不一致".to_string()));
            return;
        }
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let payload = AuthPayload {
                username: username.get_untracked().trim().to_string(),
                password: password.get_untracked(),
            };
            match api.signup(&payload).await {
                Ok(()) => {
                    messages.success("注册成功，请登录");
                    router.navigate("/login");
                }
                Err(_) => {
                    // 服务端返回的具体原因已由 HTTP 层提示
                    set_error_msg.set(Some("注册失败".to_string()));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">"注册账号"</h1>
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
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">"确认密码"</span>
                            </label>
                            <input
                                id="confirm"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                prop:value=confirm
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "提交中..." } else { "注册" }}
                            </button>
                        </div>
                        <div class="text-center text-sm mt-2">
                            <a class="link link-primary" on:click=move |_| router.navigate("/login")>
                                "已有账号？去登录"
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
