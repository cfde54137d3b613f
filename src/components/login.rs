//! Login Page
//!
//! The form feeds the `Authenticator` seam; the shipped implementation
//! accepts everything, so submitting non-empty fields opens the session.

use leptos::ev;
use leptos::prelude::*;

use crate::components::design_system::{Button, Input};
use crate::services::auth::{use_auth_state, Credentials};

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_state();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let can_submit = Signal::derive(move || {
        !username.get().trim().is_empty() && !password.get().trim().is_empty()
    });

    let handle_login = move |_: ev::MouseEvent| {
        if !can_submit.get() {
            return;
        }
        auth.login(&Credentials {
            username: username.get(),
            password: password.get(),
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-zinc-950">
            <div class="w-full max-w-sm bg-zinc-900 border border-zinc-800 rounded-xl shadow-2xl p-8 space-y-6">
                <div class="text-center space-y-1">
                    <h1 class="text-2xl font-bold text-white">"Welcome Back"</h1>
                    <p class="text-sm text-zinc-400">"Sign in to the campaign console"</p>
                </div>

                <div class="space-y-4">
                    <Input
                        value=username
                        placeholder="Username"
                        required=true
                    />
                    <Input
                        value=password
                        placeholder="Password"
                        r#type="password"
                        required=true
                    />
                </div>

                <Button
                    class="w-full"
                    disabled=Signal::derive(move || !can_submit.get())
                    on_click=handle_login
                >
                    "Login"
                </Button>
            </div>
        </div>
    }
}
