use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::campaign_reports::CampaignReports;
use crate::components::dashboard::Dashboard;
use crate::components::design_system::ToastContainer;
use crate::components::ivr_dashboard::IvrDashboard;
use crate::components::layout::sidebar::Sidebar;
use crate::components::login::LoginPage;
use crate::components::sms_dashboard::SmsDashboard;
use crate::components::whatsapp_dashboard::WhatsAppDashboard;
use crate::services::auth::{provide_auth_state, use_auth_state};
use crate::services::notification_service::provide_notification_state;
use crate::services::store::provide_campaign_stores;

/// Renders its children only for a live session; everything else bounces
/// back to the login route.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth_state();

    view! {
        <Show
            when=move || auth.logged_in.get()
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}

/// The login route itself: logged-in sessions land on the dashboard instead.
#[component]
fn LoginGate() -> impl IntoView {
    let auth = use_auth_state();

    view! {
        <Show
            when=move || !auth.logged_in.get()
            fallback=|| view! { <Redirect path="/dashboard" /> }
        >
            <LoginPage />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide global services
    provide_auth_state();
    provide_notification_state();
    provide_campaign_stores();

    let auth = use_auth_state();
    let logged_in = auth.logged_in;

    view! {
        <Router>
            <ToastContainer />

            <div class="min-h-screen flex bg-zinc-950 text-zinc-100 font-sans">
                <Show when=move || logged_in.get()>
                    <Sidebar />
                </Show>

                <main class="flex-1 overflow-y-auto">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=LoginGate />
                        <Route
                            path=path!("/dashboard")
                            view=|| view! { <RequireAuth><Dashboard /></RequireAuth> }
                        />
                        <Route
                            path=path!("/sms-analytics")
                            view=|| view! { <RequireAuth><SmsDashboard /></RequireAuth> }
                        />
                        <Route
                            path=path!("/ivr-analytics")
                            view=|| view! { <RequireAuth><IvrDashboard /></RequireAuth> }
                        />
                        <Route
                            path=path!("/whatsapp-analytics")
                            view=|| view! { <RequireAuth><WhatsAppDashboard /></RequireAuth> }
                        />
                        <Route
                            path=path!("/campaign-reports")
                            view=|| view! { <RequireAuth><CampaignReports /></RequireAuth> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Unknown paths: a logged-out session goes back to the login form, a
/// logged-in one gets a plain 404.
#[component]
fn NotFound() -> impl IntoView {
    let auth = use_auth_state();

    view! {
        <Show
            when=move || auth.logged_in.get()
            fallback=|| view! { <Redirect path="/" /> }
        >
            <div class="p-8 text-zinc-400">"404 - Page Not Found"</div>
        </Show>
    }
}
