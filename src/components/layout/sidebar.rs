//! Persistent Navigation Sidebar
//!
//! Rendered only inside the authenticated shell; one link per channel view.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
use phosphor_leptos::{Icon, CHART_BAR, CHAT_TEXT, LINK, PHONE, WHATSAPP_LOGO};

#[component]
fn NavLink(href: &'static str, label: &'static str, children: Children) -> impl IntoView {
    let location = use_location();
    let inner_class = move || {
        let active = location.pathname.get() == href;
        format!(
            "flex items-center gap-3 px-4 py-2.5 rounded-lg text-sm font-medium transition-colors {}",
            if active {
                "bg-zinc-800 text-white"
            } else {
                "text-zinc-400 hover:bg-zinc-800/50 hover:text-white"
            }
        )
    };

    view! {
        <li>
            <A href=href>
                <span class=inner_class>
                    {children()}
                    <span>{label}</span>
                </span>
            </A>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="w-64 shrink-0 min-h-screen bg-zinc-900 border-r border-zinc-800 p-4 flex flex-col gap-6">
            <div class="px-4 pt-2">
                <span class="text-xl font-bold text-white">"Campaign Console"</span>
            </div>
            <ul class="flex flex-col gap-1">
                <NavLink href="/dashboard" label="Dashboard">
                    <Icon icon=CHART_BAR size="18px" />
                </NavLink>
                <NavLink href="/sms-analytics" label="SMS Campaign">
                    <Icon icon=CHAT_TEXT size="18px" />
                </NavLink>
                <NavLink href="/ivr-analytics" label="IVR Campaign">
                    <Icon icon=PHONE size="18px" />
                </NavLink>
                <NavLink href="/whatsapp-analytics" label="WhatsApp Campaign">
                    <Icon icon=WHATSAPP_LOGO size="18px" />
                </NavLink>
                <NavLink href="/campaign-reports" label="Bulk Link Reports">
                    <Icon icon=LINK size="18px" />
                </NavLink>
            </ul>
        </aside>
    }
}
