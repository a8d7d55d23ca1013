use leptos::*;

pub mod components;
pub mod filter;
pub mod form;
pub mod repository;
pub mod triage;
pub mod view_model;

mod panel;

pub use panel::BookingsPanel;

#[component]
pub fn BookingsPage() -> impl IntoView {
    view! { <BookingsPanel /> }
}
