use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-purple-600 hover:bg-purple-500 text-white shadow-lg shadow-purple-900/50 border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-zinc-700 hover:bg-zinc-600 text-zinc-200 border border-zinc-600"
            }
            ButtonVariant::Danger => {
                "bg-red-600 hover:bg-red-500 text-white shadow-lg shadow-red-900/50 border border-transparent"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/10 text-zinc-400 hover:text-white border border-transparent"
            }
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Click handler - accepts any closure taking MouseEvent
    #[prop(optional)]
    on_click: Option<F>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::derive(|| false))]
    disabled: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    /// Button content
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-4 py-2 rounded transition-all duration-200 flex items-center justify-center gap-2 font-medium focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-zinc-900 focus:ring-purple-500";
    let variant_class = variant.class();

    let state_class = move || {
        if disabled.get() {
            "opacity-50 cursor-not-allowed transform-none"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !disabled.get() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button
            class=full_class
            on:click=handle_click
            disabled=move || disabled.get()
            title=title
        >
            {children()}
        </button>
    }
}
