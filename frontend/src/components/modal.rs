use leptos::ev::KeyboardEvent;
use leptos::*;

/// Overlay with a titled panel; closing is left to `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(optional, into)] wide: bool,
    children: Children,
) -> impl IntoView {
    let width = if wide { "max-w-3xl" } else { "max-w-lg" };
    view! {
        <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
            <button
                type="button"
                aria-label="Close"
                class="absolute inset-0 bg-overlay-backdrop"
                on:click=move |_| on_close.call(())
            ></button>
            <div
                class=format!(
                    "relative z-[61] w-full {} max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border",
                    width,
                )
                role="dialog"
                aria-modal="true"
                tabindex="-1"
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        on_close.call(());
                    }
                }
            >
                <div class="flex items-center justify-between px-6 py-4 border-b border-border">
                    <h2 class="text-lg font-semibold text-fg">{title}</h2>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>
                </div>
                <div class="px-6 py-4">{children()}</div>
            </div>
        </div>
    }
}
