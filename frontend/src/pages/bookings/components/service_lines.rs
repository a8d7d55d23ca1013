use crate::{
    api::Service,
    components::common::{INPUT_CLASS, LABEL_CLASS},
    pages::bookings::form::{BookingForm, ServiceLine},
    utils::money::format_rupees,
};
use leptos::*;
use uuid::Uuid;

/// Editable list of service rows shared by the add tab and the edit modal.
#[component]
pub fn ServiceLinesEditor(
    form: RwSignal<BookingForm>,
    #[prop(into)] services: Signal<Vec<Service>>,
) -> impl IntoView {
    let keys = move || form.with(|f| f.lines.iter().map(|line| line.key).collect::<Vec<_>>());

    view! {
        <div class="space-y-3">
            <span class=LABEL_CLASS>"Services *"</span>
            <For
                each=keys
                key=|key| *key
                children=move |key| view! { <ServiceLineRow line_key=key form=form services=services/> }
            />
            <button
                type="button"
                class="text-sm font-medium text-link hover:underline"
                on:click=move |_| form.update(BookingForm::add_line)
            >
                "+ Add another service"
            </button>
        </div>
    }
}

#[component]
fn ServiceLineRow(
    line_key: Uuid,
    form: RwSignal<BookingForm>,
    services: Signal<Vec<Service>>,
) -> impl IntoView {
    let line = create_memo(move |_| {
        form.with(|f| {
            f.lines
                .iter()
                .find(|line| line.key == line_key)
                .cloned()
                .unwrap_or_default()
        })
    });

    let on_service = move |ev: ev::Event| {
        let id = event_target_value(&ev);
        let catalog = services.get_untracked();
        form.update(|f| f.select_service(line_key, catalog.iter().find(|s| s.id == id)));
    };
    let on_sub_service = move |ev: ev::Event| {
        let id = event_target_value(&ev);
        form.update(|f| f.select_sub_service(line_key, &id));
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-12 gap-2 items-end rounded-md border border-border p-3">
            <div class="md:col-span-4">
                <select class=INPUT_CLASS on:change=on_service>
                    <option value="" prop:selected=move || line.with(|l| l.service_id.is_none())>
                        "Select service"
                    </option>
                    <For
                        each=move || services.get()
                        key=|service| service.id.clone()
                        children=move |service| {
                            let id = service.id.clone();
                            view! {
                                <option
                                    value=service.id.clone()
                                    prop:selected=move || line.with(|l| l.service_id.as_deref() == Some(id.as_str()))
                                >
                                    {service.name}
                                </option>
                            }
                        }
                    />
                </select>
            </div>
            <div class="md:col-span-4">
                <select
                    class=INPUT_CLASS
                    on:change=on_sub_service
                    disabled=move || line.with(|l| l.options.is_empty())
                >
                    <option value="" prop:selected=move || line.with(|l| l.sub_service_id.is_none())>
                        "Select sub-service"
                    </option>
                    {move || {
                        line.get()
                            .options
                            .into_iter()
                            .map(|sub| {
                                let id = sub.id.clone();
                                view! {
                                    <option
                                        value=sub.id.clone()
                                        prop:selected=move || line.with(|l| l.sub_service_id.as_deref() == Some(id.as_str()))
                                    >
                                        {format!("{} ({})", sub.name, format_rupees(sub.price))}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>
            <div class="md:col-span-3 text-sm text-fg-muted">
                {move || line_summary(&line.get())}
            </div>
            <div class="md:col-span-1 text-right">
                <button
                    type="button"
                    class="text-sm text-action-danger-bg hover:underline"
                    aria-label="Remove service"
                    on:click=move |_| form.update(|f| f.remove_line(line_key))
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}

fn line_summary(line: &ServiceLine) -> String {
    match (line.price, line.duration.as_deref()) {
        (Some(price), Some(duration)) => format!("{} · {}", format_rupees(price), duration),
        (Some(price), None) => format_rupees(price),
        (None, _) => "-".to_string(),
    }
}
