use super::service_lines::ServiceLinesEditor;
use crate::{
    api::{Employee, Service},
    components::common::{TextField, INPUT_CLASS, LABEL_CLASS},
    pages::bookings::form::{BookingForm, GENDERS, PAYMENT_MODES},
    utils::time::{format_date, parse_date_input},
};
use leptos::*;

/// Every input of the staff booking form, bound to one `BookingForm` signal.
#[component]
pub fn BookingFields(
    form: RwSignal<BookingForm>,
    #[prop(into)] services: Signal<Vec<Service>>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
) -> impl IntoView {
    let (name, set_name) = create_slice(form, |f| f.name.clone(), |f, v| f.name = v);
    let (phone, set_phone) = create_slice(form, |f| f.phone.clone(), |f, v| f.phone = v);
    let (email, set_email) = create_slice(form, |f| f.email.clone(), |f, v| f.email = v);
    let (address, set_address) = create_slice(form, |f| f.address.clone(), |f, v| f.address = v);
    let (note, set_note) = create_slice(form, |f| f.note.clone(), |f, v| f.note = v);

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <TextField label="Customer name" value=name on_input=move |v| set_name.set(v) required=true/>
            <TextField
                label="Phone"
                value=phone
                on_input=move |v| set_phone.set(v)
                input_type="tel"
                required=true
            />
            <TextField label="Email" value=email on_input=move |v| set_email.set(v) input_type="email"/>
            <label class="block">
                <span class=LABEL_CLASS>"Gender"</span>
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| form.update(|f| f.gender = event_target_value(&ev))
                >
                    <option value="" prop:selected=move || form.with(|f| f.gender.is_empty())>"-"</option>
                    {GENDERS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=*value prop:selected=move || form.with(|f| f.gender == *value)>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <TextField label="Address" value=address on_input=move |v| set_address.set(v)/>
            <TextField label="Note" value=note on_input=move |v| set_note.set(v)/>
        </div>

        <ServiceLinesEditor form=form services=services/>

        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
            <label class="block">
                <span class=LABEL_CLASS>"Employee *"</span>
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        form.update(|f| f.employee_id = (!id.is_empty()).then_some(id));
                    }
                >
                    <option value="" prop:selected=move || form.with(|f| f.employee_id.is_none())>
                        "Select employee"
                    </option>
                    <For
                        each=move || employees.get()
                        key=|employee| employee.id.clone()
                        children=move |employee| {
                            let id = employee.id.clone();
                            view! {
                                <option
                                    value=employee.id.clone()
                                    prop:selected=move || form.with(|f| f.employee_id.as_deref() == Some(id.as_str()))
                                >
                                    {employee.name}
                                </option>
                            }
                        }
                    />
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
            <label class="block">
                <span class=LABEL_CLASS>"Amount"</span>
                <input
                    type="number"
                    min="0"
                    class=INPUT_CLASS
                    prop:value=move || form.with(BookingForm::amount_text)
                    on:input=move |ev| form.update(|f| f.set_amount_text(event_target_value(&ev)))
                />
                <span class="text-xs text-fg-muted">
                    {move || format!("Suggested: {}", form.with(BookingForm::suggested_amount))}
                </span>
            </label>
            <label class="block">
                <span class=LABEL_CLASS>"Payment mode"</span>
                <select
                    class=INPUT_CLASS
                    on:change=move |ev| form.update(|f| f.payment_mode = event_target_value(&ev))
                >
                    <option value="" prop:selected=move || form.with(|f| f.payment_mode.is_empty())>
                        "Not paid yet"
                    </option>
                    {PAYMENT_MODES
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option value=*value prop:selected=move || form.with(|f| f.payment_mode == *value)>
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
        </div>
    }
}
