//! 标准字段管理页
//!
//! 字段列表 + 新建/编辑对话框（带智能命名建议）+ 组成明细 + 清空。
//! 智能建议由服务端完成分词与匹配，这里只消费
//! `{suggested_en, missing_words, matched_ids}` 结果。

use crate::api::use_api;
use crate::store::use_messages;
use crate::types::{NewStandardField, StandardField, WordRoot};
use crate::web::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn FieldListPage() -> impl IntoView {
    let api = use_api();
    let messages = use_messages();

    let (fields, set_fields) = signal(Vec::<StandardField>::new());
    // 展开的组成明细：(字段 id, 组成词根)
    let (details, set_details) = signal(Option::<(i32, Vec<WordRoot>)>::None);

    // 编辑对话框
    let (dialog_open, set_dialog_open) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<i32>::None);
    let (field_cn, set_field_cn) = signal(String::new());
    let (field_en, set_field_en) = signal(String::new());
    let (data_type, set_data_type) = signal("VARCHAR".to_string());
    let (composition, set_composition) = signal(Vec::<i32>::new());
    let (missing, set_missing) = signal(Vec::<String>::new());
    let (is_suggesting, set_is_suggesting) = signal(false);

    let load = move || {
        spawn_local(async move {
            if let Ok(list) = api.list_fields().await {
                set_fields.set(list);
            }
        });
    };

    Effect::new(move |_| load());

    let open_create = move |_| {
        set_editing_id.set(None);
        set_field_cn.set(String::new());
        set_field_en.set(String::new());
        set_data_type.set("VARCHAR".to_string());
        set_composition.set(Vec::new());
        set_missing.set(Vec::new());
        set_dialog_open.set(true);
    };

    let open_edit = move |field: StandardField| {
        set_editing_id.set(Some(field.id));
        set_field_cn.set(field.field_cn_name);
        set_field_en.set(field.field_en_name);
        set_data_type.set(field.data_type.unwrap_or_else(|| "VARCHAR".to_string()));
        set_composition.set(field.composition_ids);
        set_missing.set(Vec::new());
        set_dialog_open.set(true);
    };

    // 根据中文名请求英文命名建议
    let run_suggest = move |_| {
        let cn = field_cn.get_untracked().trim().to_string();
        if cn.is_empty() {
            messages.warn("请先填写中文字段名");
            return;
        }
        set_is_suggesting.set(true);
        spawn_local(async move {
            if let Ok(res) = api.suggest(&cn).await {
                set_field_en.set(res.suggested_en);
                set_composition.set(res.matched_ids);
                set_missing.set(res.missing_words);
            }
            set_is_suggesting.set(false);
        });
    };

    let save = move |_| {
        let payload = NewStandardField {
            field_cn_name: field_cn.get_untracked().trim().to_string(),
            field_en_name: field_en.get_untracked().trim().to_string(),
            composition_ids: composition.get_untracked(),
            data_type: Some(data_type.get_untracked()),
        };
        if payload.field_cn_name.is_empty() || payload.field_en_name.is_empty() {
            messages.warn("中文名与英文名不能为空");
            return;
        }
        let editing = editing_id.get_untracked();
        spawn_local(async move {
            let saved = match editing {
                Some(id) => api.update_field(id, &payload).await.is_ok(),
                None => api.create_field(&payload).await.is_ok(),
            };
            if saved {
                messages.success("保存成功");
                set_dialog_open.set(false);
                load();
            }
        });
    };

    let delete = move |id: i32| {
        if !confirm("确定删除该字段吗？") {
            return;
        }
        spawn_local(async move {
            if api.delete_field(id).await.is_ok() {
                messages.success("已删除");
                load();
            }
        });
    };

    let clear_all = move |_| {
        if !confirm("确定清空全部标准字段吗？此操作不可恢复！") {
            return;
        }
        spawn_local(async move {
            if api.clear_fields().await.is_ok() {
                messages.success("已清空全部字段");
                load();
            }
        });
    };

    let toggle_details = move |id: i32| {
        if details.get_untracked().map(|(open_id, _)| open_id) == Some(id) {
            set_details.set(None);
            return;
        }
        spawn_local(async move {
            if let Ok(roots) = api.field_details(id).await {
                set_details.set(Some((id, roots)));
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body p-4">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">"标准字段"</h2>
                    <div class="flex gap-2">
                        <button class="btn btn-primary btn-sm" on:click=open_create>"新建字段"</button>
                        <button class="btn btn-error btn-outline btn-sm" on:click=clear_all>"清空"</button>
                    </div>
                </div>

                <table class="table table-sm mt-4">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"中文名"</th>
                            <th>"英文名"</th>
                            <th>"数据类型"</th>
                            <th>"标准"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || fields.get().into_iter().map(|field| {
                            let id = field.id;
                            let edit_target = field.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{field.field_cn_name.clone()}</td>
                                    <td><code>{field.field_en_name.clone()}</code></td>
                                    <td>{field.data_type.clone().unwrap_or_default()}</td>
                                    <td>
                                        {if field.is_standard {
                                            view! { <span class="badge badge-success">"标准"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge-ghost">"草案"</span> }.into_any()
                                        }}
                                    </td>
                                    <td class="text-right">
                                        <button class="btn btn-xs" on:click=move |_| toggle_details(id)>"组成"</button>
                                        <button class="btn btn-xs ml-1" on:click=move |_| open_edit(edit_target.clone())>
                                            "编辑"
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

                // 组成词根明细
                {move || details.get().map(|(id, roots)| view! {
                    <div class="bg-base-200 rounded-lg p-3 mt-2">
                        <p class="text-sm font-bold">{format!("字段 #{} 的组成词根：", id)}</p>
                        <div class="flex flex-wrap gap-2 mt-2">
                            {roots.into_iter().map(|root| view! {
                                <div class="badge badge-outline badge-lg">
                                    {format!("{} ({})", root.cn_name, root.en_abbr)}
                                </div>
                            }).collect_view()}
                        </div>
                    </div>
                })}
            </div>
        </div>

        // 新建/编辑对话框
        <Show when=move || dialog_open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing_id.get().is_some() { "编辑字段" } else { "新建字段" }}
                    </h3>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"中文字段名 *"</span></label>
                        <div class="join w-full">
                            <input type="text" class="input input-bordered input-sm join-item flex-1"
                                on:input=move |ev| set_field_cn.set(event_target_value(&ev))
                                prop:value=field_cn />
                            <button class="btn btn-sm join-item" on:click=run_suggest
                                disabled=move || is_suggesting.get()>
                                {move || if is_suggesting.get() { "建议中..." } else { "智能建议" }}
                            </button>
                        </div>
                    </div>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"英文字段名 *"</span></label>
                        <input type="text" class="input input-bordered input-sm font-mono"
                            on:input=move |ev| set_field_en.set(event_target_value(&ev))
                            prop:value=field_en />
                    </div>
                    <Show when=move || !missing.get().is_empty()>
                        <div role="alert" class="alert alert-warning text-sm py-2 mt-2">
                            <span>
                                {move || format!("以下分词没有匹配的词根：{}", missing.get().join("、"))}
                            </span>
                        </div>
                    </Show>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"数据类型"</span></label>
                        <select class="select select-bordered select-sm"
                            on:change=move |ev| set_data_type.set(event_target_value(&ev))
                            prop:value=data_type>
                            <option value="VARCHAR">"VARCHAR"</option>
                            <option value="INT">"INT"</option>
                            <option value="DECIMAL">"DECIMAL"</option>
                            <option value="DATE">"DATE"</option>
                            <option value="TIMESTAMP">"TIMESTAMP"</option>
                            <option value="BOOLEAN">"BOOLEAN"</option>
                        </select>
                    </div>
                    <p class="text-xs text-base-content/60 mt-2">
                        {move || format!("组成词根 ID：{:?}", composition.get())}
                    </p>
                    <div class="modal-action">
                        <button class="btn btn-sm" on:click=move |_| set_dialog_open.set(false)>"取消"</button>
                        <button class="btn btn-primary btn-sm" on:click=save>"保存"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
