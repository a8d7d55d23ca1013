use crate::{
    components::common::{Button, TextField, INPUT_CLASS, LABEL_CLASS},
    pages::home::view_model::HomeViewModel,
    utils::{
        money::format_rupees,
        time::{format_date, parse_date_input},
    },
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn AppointmentRequestForm(vm: HomeViewModel) -> impl IntoView {
    let form = vm.form;
    let (name, set_name) = create_slice(form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = create_slice(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let pending = vm.submit_action.pending();

    let sub_options = move || {
        let selected = form.with(|f| f.service_id.clone());
        vm.catalog()
            .into_iter()
            .find(|s| Some(&s.id) == selected.as_ref())
            .map(|s| s.sub_services)
            .unwrap_or_default()
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !pending.get_untracked() {
            vm.submit_action.dispatch(form.get_untracked());
        }
    };

    view! {
        <section id="book" class="py-16 px-6">
            <h2 class="text-3xl font-bold text-center text-fg mb-4">"Book Your Appointment"</h2>
            <p class="text-center text-fg-muted mb-10">"Choose a service and a date; we will confirm by phone."</p>
            <form class="max-w-3xl mx-auto bg-surface-elevated rounded-lg shadow p-8 space-y-4" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-4">
                    <TextField label="Full name" value=name on_input=move |v| set_name.set(v) required=true/>
                    <TextField
                        label="Phone number"
                        value=phone
                        on_input=move |v| set_phone.set(v)
                        input_type="tel"
                        required=true
                    />
                    <label class="block">
                        <span class=LABEL_CLASS>"Service *"</span>
                        <select
                            class=INPUT_CLASS
                            on:change=move |ev| form.update(|f| f.select_service(&event_target_value(&ev)))
                        >
                            <option value="" prop:selected=move || form.with(|f| f.service_id.is_none())>
                                "Choose a service"
                            </option>
                            {move || {
                                vm.catalog()
                                    .into_iter()
                                    .map(|service| {
                                        let id = service.id.clone();
                                        view! {
                                            <option
                                                value=service.id.clone()
                                                prop:selected=move || form.with(|f| f.service_id.as_deref() == Some(id.as_str()))
                                            >
                                                {service.name}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="block">
                        <span class=LABEL_CLASS>"Treatment *"</span>
                        <select
                            class=INPUT_CLASS
                            on:change=move |ev| form.update(|f| f.select_sub_service(&event_target_value(&ev)))
                        >
                            <option value="" prop:selected=move || form.with(|f| f.sub_service_id.is_none())>
                                "Choose a treatment"
                            </option>
                            {move || {
                                sub_options()
                                    .into_iter()
                                    .map(|sub| {
                                        let id = sub.id.clone();
                                        view! {
                                            <option
                                                value=sub.id.clone()
                                                prop:selected=move || form.with(|f| f.sub_service_id.as_deref() == Some(id.as_str()))
                                            >
                                                {format!("{} ({})", sub.name, format_rupees(sub.price))}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </label>
                    <label class="block">
                        <span class=LABEL_CLASS>"Date *"</span>
                        <input
                            type="date"
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.date.map(format_date).unwrap_or_default())
                            on:input=move |ev| form.update(|f| f.date = parse_date_input(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="block md:col-span-2">
                        <span class=LABEL_CLASS>"Note"</span>
                        <textarea
                            class=INPUT_CLASS
                            rows="3"
                            placeholder="Any special requests?"
                            prop:value=move || form.with(|f| f.note.clone())
                            on:input=move |ev| form.update(|f| f.note = event_target_value(&ev))
                        ></textarea>
                    </label>
                </div>
                <div class="text-center">
                    <Button loading=pending attr:type="submit">
                        {move || if pending.get() { "Sending..." } else { "Confirm Appointment" }}
                    </Button>
                </div>
            </form>
        </section>
    }
}
