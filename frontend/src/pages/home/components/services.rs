use crate::{api::Service, utils::money::format_rupees};
use leptos::*;

/// Lowest sub-service price, used as the "from" price of a service card.
pub fn starting_price(service: &Service) -> Option<i64> {
    service.sub_services.iter().map(|sub| sub.price).min()
}

#[component]
pub fn ServicesShowcase(#[prop(into)] services: Signal<Vec<Service>>) -> impl IntoView {
    view! {
        <section id="services" class="py-16 px-6 bg-surface-muted">
            <h2 class="text-3xl font-bold text-center text-fg mb-10">"Our Services"</h2>
            <div class="max-w-6xl mx-auto grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || services.get()
                    key=|service| service.id.clone()
                    children=move |service| {
                        let price = starting_price(&service)
                            .map(|p| format!("From {}", format_rupees(p)))
                            .unwrap_or_default();
                        view! {
                            <article class="rounded-lg bg-surface-elevated shadow p-6 space-y-2">
                                <h3 class="text-lg font-semibold text-fg">{service.name.clone()}</h3>
                                {service.description.clone().map(|d| view! { <p class="text-sm text-fg-muted">{d}</p> })}
                                <p class="text-sm font-medium text-fg">{price}</p>
                            </article>
                        }
                    }
                />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::catalog;

    #[test]
    fn starting_price_is_cheapest_option() {
        let services = catalog();
        assert_eq!(starting_price(&services[0]), Some(500));
        assert_eq!(starting_price(&services[1]), Some(400));
        let mut empty = services[0].clone();
        empty.sub_services.clear();
        assert_eq!(starting_price(&empty), None);
    }
}
