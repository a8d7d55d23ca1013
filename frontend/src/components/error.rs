use crate::api::ApiError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div
                class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded my-2 text-sm"
                role="alert"
            >
                {move || error.get().map(|e| e.error).unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn inline_error_renders_message() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Failed to update")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Failed to update"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn inline_error_is_empty_without_error() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
