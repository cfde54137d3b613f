use leptos::ev;
use leptos::prelude::*;

/// A styled text input component
#[component]
pub fn Input(
    /// The current value (two-way binding signal)
    #[prop(into)]
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(into, optional)]
    placeholder: Signal<String>,
    /// Input change handler (called with the new value)
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    /// Whether the input is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Whether the field is required for form submission
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, datetime-local, etc.)
    #[prop(into, optional)]
    r#type: Signal<String>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let input_type = Signal::derive(move || {
        let t = r#type.get();
        if t.is_empty() {
            "text".to_string()
        } else {
            t
        }
    });

    let base_class = "w-full p-2 rounded bg-zinc-950 text-white border border-zinc-700 focus:border-purple-500 focus:ring-1 focus:ring-purple-500 outline-none transition-colors placeholder-zinc-500 disabled:opacity-50 disabled:cursor-not-allowed";

    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        let new_value = event_target_value(&evt);
        value.set(new_value.clone());
        if let Some(ref callback) = on_input {
            callback.run(new_value);
        }
    };

    view! {
        <input
            class=full_class
            type=move || input_type.get()
            prop:value=move || value.get()
            placeholder=move || placeholder.get()
            disabled=move || disabled.get()
            required=required
            on:input=handle_input
        />
    }
}
