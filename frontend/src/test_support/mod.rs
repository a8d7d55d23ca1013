#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Appointment, Employee, Service, SubService};
    use crate::state::{auth::AuthState, session::Session};
    use leptos::*;
    use serde_json::json;

    pub fn provide_auth(session: Option<Session>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            session,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn sub_service(id: &str, name: &str, price: i64, duration: Option<&str>) -> SubService {
        SubService {
            id: id.into(),
            name: name.into(),
            price,
            duration: duration.map(str::to_string),
        }
    }

    pub fn catalog() -> Vec<Service> {
        vec![
            Service {
                id: "s1".into(),
                name: "Hair".into(),
                description: Some("Cuts and styling".into()),
                sub_services: vec![
                    sub_service("ss1", "Haircut", 500, None),
                    sub_service("ss2", "Hair Spa", 1200, Some("45 min")),
                ],
            },
            Service {
                id: "s2".into(),
                name: "Nails".into(),
                description: None,
                sub_services: vec![sub_service("ss3", "Manicure", 400, Some("30 min"))],
            },
        ]
    }

    pub fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: id.into(),
            name: name.into(),
            email: format!("{}@salon.test", name.to_lowercase()),
            role: "employee".into(),
            address: None,
            status: true,
        }
    }

    pub fn appointment(id: &str, name: &str, phone: &str, service: &str, status: &str) -> Appointment {
        serde_json::from_value(json!({
            "_id": id,
            "customer_id": { "_id": format!("c-{}", id), "name": name, "phone": phone },
            "services": [
                { "service_id": { "_id": "s1", "name": service }, "sub_service_id": "ss1", "price": 500 }
            ],
            "employee_id": { "_id": "e1", "name": "Asha" },
            "date": "2025-01-10",
            "amount": 500,
            "payment_status": status,
            "confirmation_status": true,
            "source": "walk-in"
        }))
        .expect("fixture appointment")
    }
}
