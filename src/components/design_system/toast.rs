use leptos::prelude::*;

use crate::services::notification_service::{remove_notification, Notification, ToastType};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = crate::services::notification_service::use_notification_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            {move || state.notifications.get().into_iter().map(|notification| {
                view! {
                    <Toast notification=notification />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let (is_exiting, set_is_exiting) = signal(false);
    let id = notification.id;

    // Handle close
    let close = move || {
        set_is_exiting.set(true);
        // Wait for animation then remove
        set_timeout(
            move || {
                remove_notification(id);
            },
            std::time::Duration::from_millis(300),
        );
    };

    // Auto-close if duration is set
    if let Some(duration) = notification.duration_ms {
        let close = close.clone();
        set_timeout(
            move || {
                close();
            },
            std::time::Duration::from_millis(duration),
        );
    }

    let accent_class = match notification.toast_type {
        ToastType::Success => "border-l-4 border-green-500",
        ToastType::Error => "border-l-4 border-red-500",
        ToastType::Info => "border-l-4 border-blue-500",
    };

    let icon = match notification.toast_type {
        ToastType::Success => view! { <span class="text-green-400">"✓"</span> },
        ToastType::Error => view! { <span class="text-red-400">"⚠"</span> },
        ToastType::Info => view! { <span class="text-blue-400">"i"</span> },
    };

    view! {
        <div
            class=move || format!(
                "pointer-events-auto min-w-[300px] max-w-md p-4 rounded shadow-lg bg-zinc-900 border border-zinc-800 flex gap-3 transition-all duration-300 transform {} {}",
                accent_class,
                if is_exiting.get() { "translate-x-full opacity-0" } else { "translate-x-0 opacity-100" }
            )
            role="alert"
        >
            <div class="flex-shrink-0 text-lg">
                {icon}
            </div>
            <div class="flex-1 flex flex-col gap-1">
                <div class="font-medium text-white">
                    {notification.title}
                </div>
                {if let Some(msg) = notification.message {
                    view! { <div class="text-sm text-zinc-400 text-wrap break-words">{msg}</div> }.into_any()
                } else {
                    view! { }.into_any()
                }}
            </div>
            <button
                class="flex-shrink-0 text-zinc-500 hover:text-white self-start -mt-1 -mr-1"
                on:click=move |_| close()
                aria-label="Close"
            >
                "×"
            </button>
        </div>
    }
}
