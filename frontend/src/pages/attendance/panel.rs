use super::{
    components::{calendar::AttendanceCalendar, mark_form::MarkAttendanceForm},
    view_model::use_attendance_view_model,
};
use leptos::*;

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-fg">"Attendance"</h1>
            <MarkAttendanceForm vm=vm/>
            <AttendanceCalendar vm=vm/>
        </div>
    }
}
