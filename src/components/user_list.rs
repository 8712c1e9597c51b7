//! 用户管理页
//!
//! 账号列表、创建、角色切换与删除。

use crate::api::use_api;
use crate::store::use_messages;
use crate::types::{NewUser, ROLE_ADMIN, UserAccount};
use crate::web::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn UserListPage() -> impl IntoView {
    let api = use_api();
    let messages = use_messages();

    let (users, set_users) = signal(Vec::<UserAccount>::new());

    // 创建对话框
    let (dialog_open, set_dialog_open) = signal(false);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (role, set_role) = signal("user".to_string());

    let load = move || {
        spawn_local(async move {
            if let Ok(list) = api.list_users().await {
                set_users.set(list);
            }
        });
    };

    Effect::new(move |_| load());

    let open_create = move |_| {
        set_username.set(String::new());
        set_password.set(String::new());
        set_role.set("user".to_string());
        set_dialog_open.set(true);
    };

    let save = move |_| {
        let payload = NewUser {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        if payload.username.is_empty() || payload.password.is_empty() {
            messages.warn("用户名与密码不能为空");
            return;
        }
        spawn_local(async move {
            if api.create_user(&payload).await.is_ok() {
                messages.success("用户已创建");
                set_dialog_open.set(false);
                load();
            }
        });
    };

    // admin 与 user 互换
    let toggle_role = move |user: UserAccount| {
        let next = if user.role == ROLE_ADMIN { "user" } else { ROLE_ADMIN };
        spawn_local(async move {
            if api.update_user_role(user.id, next).await.is_ok() {
                messages.success("角色已更新");
                load();
            }
        });
    };

    let delete = move |id: i32| {
        if !confirm("确定删除该用户吗？") {
            return;
        }
        spawn_local(async move {
            if api.delete_user(id).await.is_ok() {
                messages.success("已删除");
                load();
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body p-4">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">"用户账号"</h2>
                    <button class="btn btn-primary btn-sm" on:click=open_create>"创建用户"</button>
                </div>

                <table class="table table-sm mt-4">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"用户名"</th>
                            <th>"角色"</th>
                            <th>"创建时间"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || users.get().into_iter().map(|user| {
                            let id = user.id;
                            let is_admin = user.role == ROLE_ADMIN;
                            let toggle_target = user.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{user.username.clone()}</td>
                                    <td>
                                        {if is_admin {
                                            view! { <span class="badge badge-primary">"admin"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge-ghost">"user"</span> }.into_any()
                                        }}
                                    </td>
                                    <td>{user.created_at.clone().unwrap_or_default()}</td>
                                    <td class="text-right">
                                        <button class="btn btn-xs" on:click=move |_| toggle_role(toggle_target.clone())>
                                            {if is_admin { "降为 user" } else { "升为 admin" }}
                                        </button>
                                        <button class="btn btn-xs btn-error btn-outline ml-1" on:click=move |_| delete(id)>
                                            "删除"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>

        // 创建用户对话框
        <Show when=move || dialog_open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"创建用户"</h3>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"用户名 *"</span></label>
                        <input type="text" class="input input-bordered input-sm"
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            prop:value=username />
                    </div>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"初始密码 *"</span></label>
                        <input type="password" class="input input-bordered input-sm"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password />
                    </div>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"角色"</span></label>
                        <select class="select select-bordered select-sm"
                            on:change=move |ev| set_role.set(event_target_value(&ev))
                            prop:value=role>
                            <option value="user">"user"</option>
                            <option value="admin">"admin"</option>
                        </select>
                    </div>
                    <div class="modal-action">
                        <button class="btn btn-sm" on:click=move |_| set_dialog_open.set(false)>"取消"</button>
                        <button class="btn btn-primary btn-sm" on:click=save>"创建"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
