//! 词根管理页
//!
//! 分页列表 + 新建/编辑对话框 + 批量导入 + 清空。

use crate::api::use_api;
use crate::store::use_messages;
use crate::types::{NewWordRoot, WordRoot};
use crate::web::confirm;
use leptos::prelude::*;
use leptos::task::spawn_local;

const PAGE_SIZE: u32 = 10;

/// 批量导入文本解析：每行 `中文名,英文缩写[,英文全称]`，
/// 兼容中文逗号，空行与残缺行跳过。
pub(crate) fn parse_batch_lines(input: &str) -> Vec<NewWordRoot> {
    input
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let mut parts = line.split([',', '，']).map(str::trim);
            let cn_name = parts.next()?.to_string();
            let en_abbr = parts.next()?.to_string();
            if cn_name.is_empty() || en_abbr.is_empty() {
                return None;
            }
            let en_full_name = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
            Some(NewWordRoot {
                cn_name,
                en_abbr,
                en_full_name,
                associated_terms: None,
                remark: None,
            })
        })
        .collect()
}

#[component]
pub fn RootListPage() -> impl IntoView {
    let api = use_api();
    let messages = use_messages();

    let (page, set_page) = signal(1u32);
    let (keyword, set_keyword) = signal(String::new());
    let (items, set_items) = signal(Vec::<WordRoot>::new());
    let (total, set_total) = signal(0i64);

    // 编辑对话框
    let (dialog_open, set_dialog_open) = signal(false);
    let (editing_id, set_editing_id) = signal(Option::<i32>::None);
    let (cn_name, set_cn_name) = signal(String::new());
    let (en_abbr, set_en_abbr) = signal(String::new());
    let (en_full, set_en_full) = signal(String::new());
    let (terms, set_terms) = signal(String::new());
    let (remark, set_remark) = signal(String::new());

    // 批量导入对话框
    let (batch_open, set_batch_open) = signal(false);
    let (batch_text, set_batch_text) = signal(String::new());

    let load = move || {
        let current_page = page.get_untracked();
        let q = keyword.get_untracked().trim().to_string();
        spawn_local(async move {
            if let Ok(result) = api.list_roots(current_page, PAGE_SIZE, &q).await {
                set_items.set(result.items);
                set_total.set(result.total);
            }
        });
    };

    Effect::new(move |_| load());

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_page.set(1);
        load();
    };

    let total_pages = move || {
        let total = total.get();
        ((total + PAGE_SIZE as i64 - 1) / PAGE_SIZE as i64).max(1)
    };

    let goto_page = move |target: i64| {
        if target >= 1 && target <= total_pages() {
            set_page.set(target as u32);
            load();
        }
    };

    let opt = |s: String| {
        let s = s.trim().to_string();
        if s.is_empty() { None } else { Some(s) }
    };

    let open_create = move |_| {
        set_editing_id.set(None);
        set_cn_name.set(String::new());
        set_en_abbr.set(String::new());
        set_en_full.set(String::new());
        set_terms.set(String::new());
        set_remark.set(String::new());
        set_dialog_open.set(true);
    };

    let open_edit = move |root: WordRoot| {
        set_editing_id.set(Some(root.id));
        set_cn_name.set(root.cn_name);
        set_en_abbr.set(root.en_abbr);
        set_en_full.set(root.en_full_name.unwrap_or_default());
        set_terms.set(root.associated_terms.unwrap_or_default());
        set_remark.set(root.remark.unwrap_or_default());
        set_dialog_open.set(true);
    };

    let save = move |_| {
        let payload = NewWordRoot {
            cn_name: cn_name.get_untracked().trim().to_string(),
            en_abbr: en_abbr.get_untracked().trim().to_string(),
            en_full_name: opt(en_full.get_untracked()),
            associated_terms: opt(terms.get_untracked()),
            remark: opt(remark.get_untracked()),
        };
        if payload.cn_name.is_empty() || payload.en_abbr.is_empty() {
            messages.warn("中文名与英文缩写不能为空");
            return;
        }
        let editing = editing_id.get_untracked();
        spawn_local(async move {
            let saved = match editing {
                Some(id) => api.update_root(id, &payload).await.is_ok(),
                None => api.create_root(&payload).await.is_ok(),
            };
            if saved {
                messages.success("保存成功");
                set_dialog_open.set(false);
                load();
            }
        });
    };

    let delete = move |id: i32| {
        if !confirm("确定删除该词根吗？") {
            return;
        }
        spawn_local(async move {
            if api.delete_root(id).await.is_ok() {
                messages.success("已删除");
                load();
            }
        });
    };

    let clear_all = move |_| {
        if !confirm("确定清空全部词根吗？此操作不可恢复！") {
            return;
        }
        spawn_local(async move {
            if api.clear_roots().await.is_ok() {
                messages.success("已清空全部词根");
                set_page.set(1);
                load();
            }
        });
    };

    let import_batch = move |_| {
        let roots = parse_batch_lines(&batch_text.get_untracked());
        if roots.is_empty() {
            messages.warn("没有可导入的行，格式：中文名,英文缩写[,英文全称]");
            return;
        }
        spawn_local(async move {
            if api.batch_create_roots(&roots).await.is_ok() {
                messages.success(&format!("已导入 {} 条词根", roots.len()));
                set_batch_open.set(false);
                set_batch_text.set(String::new());
                load();
            }
        });
    };

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body p-4">
                <div class="flex items-center justify-between gap-2 flex-wrap">
                    <form class="join" on:submit=on_search>
                        <input
                            type="text"
                            class="input input-bordered input-sm join-item"
                            placeholder="按中文名/缩写检索"
                            on:input=move |ev| set_keyword.set(event_target_value(&ev))
                            prop:value=keyword
                        />
                        <button class="btn btn-sm join-item">"检索"</button>
                    </form>
                    <div class="flex gap-2">
                        <button class="btn btn-primary btn-sm" on:click=open_create>"新建词根"</button>
                        <button class="btn btn-sm" on:click=move |_| set_batch_open.set(true)>"批量导入"</button>
                        <button class="btn btn-error btn-outline btn-sm" on:click=clear_all>"清空"</button>
                    </div>
                </div>

                <table class="table table-sm mt-4">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"中文名"</th>
                            <th>"英文缩写"</th>
                            <th>"英文全称"</th>
                            <th>"关联术语"</th>
                            <th>"备注"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items.get().into_iter().map(|root| {
                            let id = root.id;
                            let edit_target = root.clone();
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{root.cn_name.clone()}</td>
                                    <td><code>{root.en_abbr.clone()}</code></td>
                                    <td>{root.en_full_name.clone().unwrap_or_default()}</td>
                                    <td>{root.associated_terms.clone().unwrap_or_default()}</td>
                                    <td>{root.remark.clone().unwrap_or_default()}</td>
                                    <td class="text-right">
                                        <button class="btn btn-xs" on:click=move |_| open_edit(edit_target.clone())>
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

                <div class="flex items-center justify-between mt-2">
                    <span class="text-sm text-base-content/60">
                        {move || format!("共 {} 条", total.get())}
                    </span>
                    <div class="join">
                        <button class="join-item btn btn-sm"
                            on:click=move |_| goto_page(page.get_untracked() as i64 - 1)>"«"</button>
                        <button class="join-item btn btn-sm btn-disabled">
                            {move || format!("{} / {}", page.get(), total_pages())}
                        </button>
                        <button class="join-item btn btn-sm"
                            on:click=move |_| goto_page(page.get_untracked() as i64 + 1)>"»"</button>
                    </div>
                </div>
            </div>
        </div>

        // 新建/编辑对话框
        <Show when=move || dialog_open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">
                        {move || if editing_id.get().is_some() { "编辑词根" } else { "新建词根" }}
                    </h3>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"中文名 *"</span></label>
                        <input type="text" class="input input-bordered input-sm"
                            on:input=move |ev| set_cn_name.set(event_target_value(&ev))
                            prop:value=cn_name />
                    </div>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"英文缩写 *"</span></label>
                        <input type="text" class="input input-bordered input-sm"
                            on:input=move |ev| set_en_abbr.set(event_target_value(&ev))
                            prop:value=en_abbr />
                    </div>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"英文全称"</span></label>
                        <input type="text" class="input input-bordered input-sm"
                            on:input=move |ev| set_en_full.set(event_target_value(&ev))
                            prop:value=en_full />
                    </div>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"关联术语（逗号分隔）"</span></label>
                        <input type="text" class="input input-bordered input-sm"
                            on:input=move |ev| set_terms.set(event_target_value(&ev))
                            prop:value=terms />
                    </div>
                    <div class="form-control mt-2">
                        <label class="label"><span class="label-text">"备注"</span></label>
                        <input type="text" class="input input-bordered input-sm"
                            on:input=move |ev| set_remark.set(event_target_value(&ev))
                            prop:value=remark />
                    </div>
                    <div class="modal-action">
                        <button class="btn btn-sm" on:click=move |_| set_dialog_open.set(false)>"取消"</button>
                        <button class="btn btn-primary btn-sm" on:click=save>"保存"</button>
                    </div>
                </div>
            </div>
        </Show>

        // 批量导入对话框
        <Show when=move || batch_open.get()>
            <div class="modal modal-open">
                <div class="modal-box">
                    <h3 class="font-bold text-lg">"批量导入词根"</h3>
                    <p class="text-sm text-base-content/60 mt-1">
                        "每行一条：中文名,英文缩写[,英文全称]"
                    </p>
                    <textarea
                        class="textarea textarea-bordered w-full h-48 mt-2 font-mono"
                        placeholder="温度,TEMP,temperature\n客户,CUST,customer"
                        on:input=move |ev| set_batch_text.set(event_target_value(&ev))
                        prop:value=batch_text
                    ></textarea>
                    <div class="modal-action">
                        <button class="btn btn-sm" on:click=move |_| set_batch_open.set(false)>"取消"</button>
                        <button class="btn btn-primary btn-sm" on:click=import_batch>"导入"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_lines() {
        let roots = parse_batch_lines("温度,TEMP,temperature\n客户,CUST\n");
        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].cn_name, "温度");
        assert_eq!(roots[0].en_abbr, "TEMP");
        assert_eq!(roots[0].en_full_name.as_deref(), Some("temperature"));
        assert_eq!(roots[1].en_full_name, None);
    }

    #[test]
    fn accepts_full_width_comma() {
        let roots = parse_batch_lines("金额，AMT，amount");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].en_abbr, "AMT");
    }

    #[test]
    fn skips_blank_and_broken_lines() {
        let roots = parse_batch_lines("\n  \n只有中文名\n,ABBR\n温度,TEMP");
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].cn_name, "温度");
    }

    #[test]
    fn trims_whitespace() {
        let roots = parse_batch_lines("  温度 , TEMP , temperature ");
        assert_eq!(roots[0].cn_name, "温度");
        assert_eq!(roots[0].en_abbr, "TEMP");
        assert_eq!(roots[0].en_full_name.as_deref(), Some("temperature"));
    }
}
