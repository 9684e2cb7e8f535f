use crate::auth::{logout, use_auth};
use crate::components::icons::{LogOut, Tags};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

/// 控制台顶栏，所有已登录页面共用
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let email = auth.email();

    let tab_class = move |route: AppRoute| {
        if router.current_route().get() == route {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <Tags attr:class="text-primary h-6 w-6" />
                <Link to=AppRoute::Dashboard class="btn btn-ghost text-xl">"OrderMate"</Link>
                <div role="tablist" class="tabs tabs-boxed hidden md:flex">
                    <span class=move || tab_class(AppRoute::Dashboard)>
                        <Link to=AppRoute::Dashboard>"Home"</Link>
                    </span>
                    <span class=move || tab_class(AppRoute::Categories)>
                        <Link to=AppRoute::Categories>"Categories"</Link>
                    </span>
                </div>
            </div>
            <div class="flex-none gap-2">
                <span class="badge badge-neutral hidden md:inline-flex">{email}</span>
                <button on:click=move |_| logout(&auth) class="btn btn-outline btn-error gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let email = use_auth().email();

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <NavBar />

                <div class="hero bg-base-100 rounded-box shadow-xl">
                    <div class="hero-content text-center py-12">
                        <div class="max-w-md space-y-4">
                            <h1 class="text-4xl font-bold">"Welcome "{email}</h1>
                            <p class="text-base-content/70">
                                "Manage the categories your recipes are grouped by."
                            </p>
                            <Link to=AppRoute::Categories class="btn btn-primary">
                                "Fill the categories"
                            </Link>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
