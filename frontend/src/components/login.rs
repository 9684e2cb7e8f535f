use crate::auth::{sign_in, use_auth};
use crate::components::icons::{Eye, EyeOff, Tags};
use crate::toast::use_toasts;
use leptos::prelude::*;
use leptos::task::spawn_local;
use ordermate::{ConsoleConfig, Login, LoginForm};
use ordermate::shared::ValidationError;

fn field_error(error: Option<ValidationError>) -> impl IntoView {
    error.map(|e| {
        view! {
            <label class="label">
                <span class="label-text-alt text-error">{e.to_string()}</span>
            </label>
        }
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let toasts = use_toasts();
    let config = expect_context::<ConsoleConfig>();

    let form = RwSignal::new(LoginForm::default());
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        set_is_submitting.set(true);

        let login = Login::new(auth.api(&config), toasts);
        let mut current = form.get_untracked();
        spawn_local(async move {
            let result = login.submit_form(&mut current).await;
            form.update(|f| f.errors = current.errors);
            set_is_submitting.set(false);
            // 跳转由路由服务根据认证状态完成
            if let Ok(session) = result {
                sign_in(&auth, session);
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Tags attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"OrderMate"</h1>
                        <p class="text-base-content/70">"Welcome back! Please enter your details"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"E-mail"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="Enter your E-mail"
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                                prop:value=move || form.with(|f| f.email.clone())
                                class=move || {
                                    if form.with(|f| f.errors.email.is_some()) {
                                        "input input-bordered input-error"
                                    } else {
                                        "input input-bordered"
                                    }
                                }
                            />
                            {move || field_error(form.with(|f| f.errors.email.clone()))}
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || form.with(LoginForm::input_type)
                                    placeholder="Password"
                                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                                    prop:value=move || form.with(|f| f.password.clone())
                                    class="input input-bordered join-item w-full"
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                                >
                                    {move || if form.with(|f| f.show_password) {
                                        view! { <EyeOff attr:class="h-5 w-5" /> }.into_any()
                                    } else {
                                        view! { <Eye attr:class="h-5 w-5" /> }.into_any()
                                    }}
                                </button>
                            </div>
                            {move || field_error(form.with(|f| f.errors.password.clone()))}
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Login".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
