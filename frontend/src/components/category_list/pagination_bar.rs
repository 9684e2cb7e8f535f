use super::PageHandle;
use leptos::prelude::*;
use ordermate::pagination::Pagination;

/// 分页条，只在列表以表格形式展示时渲染
#[component]
pub fn PaginationBar(page: PageHandle, pagination: Pagination) -> impl IntoView {
    let go_to = move |target: u32| {
        page.spawn(move |c| async move {
            c.change_page(target).await;
        });
    };

    let controls = pagination
        .controls()
        .into_iter()
        .map(|control| {
            view! {
                <button
                    class=if control.active { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" }
                    on:click=move |_| go_to(control.page)
                >
                    {control.page}
                </button>
            }
        })
        .collect_view();

    pagination.is_visible().then(|| {
        view! {
            <div class="flex justify-end p-4">
                <div class="join">
                    <button
                        class="join-item btn btn-sm"
                        disabled=pagination.prev_disabled()
                        on:click=move |_| go_to(pagination.current.saturating_sub(1))
                    >
                        "«"
                    </button>
                    {controls}
                    <button
                        class="join-item btn btn-sm"
                        disabled=pagination.next_disabled()
                        on:click=move |_| go_to(pagination.current + 1)
                    >
                        "»"
                    </button>
                </div>
            </div>
        }
    })
}
