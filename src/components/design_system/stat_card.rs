use leptos::prelude::*;

use super::card::{Card, CardBody};

/// Summary figure card: a label, a big number, and an optional detail line
/// (a percentage share or a trend note).
#[component]
pub fn StatCard(
    /// What the figure counts
    #[prop(into)]
    label: String,
    /// The figure itself, already formatted
    #[prop(into)]
    value: Signal<String>,
    /// Optional secondary line under the figure
    #[prop(into, optional)]
    detail: Signal<String>,
) -> impl IntoView {
    view! {
        <Card class="flex-1 min-w-[160px]">
            <CardBody>
                <div class="text-center">
                    <div class="text-sm text-zinc-400">{label}</div>
                    <div class="text-3xl font-bold text-white mt-1">
                        {move || value.get()}
                    </div>
                    <Show when=move || !detail.get().is_empty()>
                        <div class="text-xs text-zinc-500 mt-1">
                            {move || detail.get()}
                        </div>
                    </Show>
                </div>
            </CardBody>
        </Card>
    }
}
