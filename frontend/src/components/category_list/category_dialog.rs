use super::PageHandle;
use leptos::prelude::*;
use ordermate::Modal;

/// 让原生 `<dialog>` 的打开状态跟随控制器的弹窗状态
fn sync_dialog(dialog_ref: NodeRef<leptos::html::Dialog>, open: impl Fn() -> bool + 'static) {
    Effect::new(move |_| {
        let open = open();
        if let Some(dialog) = dialog_ref.get() {
            if open && !dialog.open() {
                let _ = dialog.show_modal();
            } else if !open && dialog.open() {
                dialog.close();
            }
        }
    });
}

/// 新增 / 修改共用的表单弹窗
#[component]
pub fn CategoryFormDialog(page: PageHandle) -> impl IntoView {
    let state = page.state();
    let (submitting, set_submitting) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let modal = Memo::new(move |_| state.with(|s| s.modal));

    sync_dialog(dialog_ref, move || modal.get().shows_form());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        page.spawn(move |c| async move {
            // 结果已通过提示消息与表单错误反馈
            let _ = c.submit_form().await;
            set_submitting.set(false);
        });
    };

    // Esc 或点击遮罩关闭时同步回控制器
    let on_close = move |_: leptos::ev::Event| {
        if modal.get_untracked().shows_form() {
            page.call(|c| c.close_modal());
        }
    };

    let error = move || state.with(|s| s.form.error.clone());

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=on_close>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{move || modal.get().title()}</h3>

                <form on:submit=on_submit class="space-y-4 pt-4" novalidate>
                    <div class="form-control">
                        <input
                            type="text"
                            placeholder="Category Name"
                            class=move || {
                                if error().is_some() {
                                    "input input-bordered input-error w-full"
                                } else {
                                    "input input-bordered w-full"
                                }
                            }
                            prop:value=move || state.with(|s| s.form.name.clone())
                            on:input=move |ev| {
                                let name = event_target_value(&ev);
                                page.call(|c| c.set_form_name(name));
                            }
                        />
                        {move || error().map(|e| view! {
                            <label class="label">
                                <span class="label-text-alt text-error">{e.to_string()}</span>
                            </label>
                        })}
                    </div>

                    <div class="modal-action">
                        <button
                            type="button"
                            class="btn btn-ghost"
                            on:click=move |_| page.call(|c| c.close_modal())
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            <Show when=move || submitting.get()>
                                <span class="loading loading-spinner loading-sm"></span>
                            </Show>
                            {move || modal.get().submit_label()}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}

/// 删除确认弹窗
#[component]
pub fn DeleteConfirmDialog(page: PageHandle) -> impl IntoView {
    let state = page.state();
    let (submitting, set_submitting) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let modal = Memo::new(move |_| state.with(|s| s.modal));

    sync_dialog(dialog_ref, move || modal.get().shows_delete_confirmation());

    let target_name = move || match modal.get() {
        Modal::Delete(id) => state.with(|s| s.find(id).map(|c| c.name.clone())),
        _ => None,
    };

    let on_confirm = move |_: leptos::ev::MouseEvent| {
        if submitting.get_untracked() {
            return;
        }
        set_submitting.set(true);
        page.spawn(move |c| async move {
            let _ = c.confirm_delete().await;
            set_submitting.set(false);
        });
    };

    let on_close = move |_: leptos::ev::Event| {
        if modal.get_untracked().shows_delete_confirmation() {
            page.call(|c| c.close_modal());
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=on_close>
            <div class="modal-box text-center">
                <h3 class="font-bold text-lg">"Delete This Category ?"</h3>
                <p class="py-4 text-base-content/70">
                    "Are you sure you want to delete "
                    <span class="font-semibold">{move || target_name().unwrap_or_else(|| "this item".to_string())}</span>
                    " ? if you are sure just click on delete it"
                </p>
                <div class="modal-action justify-center">
                    <button class="btn btn-ghost" on:click=move |_| page.call(|c| c.close_modal())>
                        "Cancel"
                    </button>
                    <button class="btn btn-error" disabled=move || submitting.get() on:click=on_confirm>
                        <Show when=move || submitting.get()>
                            <span class="loading loading-spinner loading-sm"></span>
                        </Show>
                        "Delete this item"
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
