use crate::api::Appointment;

/// Online bookings waiting for staff approval.
///
/// `unread` is recomputed from every poll rather than counted, so a poll
/// arriving after the tab was viewed raises it again if anything is still
/// unconfirmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageState {
    pub pending: Vec<Appointment>,
    pub unread: bool,
    pub loaded: bool,
}

impl TriageState {
    pub fn apply_poll(&mut self, fetched: Vec<Appointment>) {
        self.pending = fetched
            .into_iter()
            .filter(|appt| !appt.confirmation_status)
            .collect();
        self.unread = !self.pending.is_empty();
        self.loaded = true;
    }

    pub fn mark_viewed(&mut self) {
        self.unread = false;
    }

    pub fn approved(&mut self, id: &str) {
        self.pending.retain(|appt| appt.id != id);
    }

    pub fn unread_count(&self) -> usize {
        if self.unread {
            self.pending.len()
        } else {
            0
        }
    }
}
