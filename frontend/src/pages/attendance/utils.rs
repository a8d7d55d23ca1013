use chrono::{Datelike, Months, NaiveDate};
use std::collections::HashSet;

use crate::api::{AttendanceMark, AttendanceRecord, Employee};

/// One `POST /attendance` per roster employee; unchecked means on leave.
pub fn build_attendance_marks(
    roster: &[Employee],
    present: &HashSet<String>,
    date: NaiveDate,
) -> Vec<(String, AttendanceMark)> {
    roster
        .iter()
        .map(|employee| {
            (
                employee.name.clone(),
                AttendanceMark {
                    employee_id: employee.id.clone(),
                    date,
                    leave: !present.contains(&employee.id),
                },
            )
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkOutcome {
    pub attempted: usize,
    pub failed: Vec<String>,
}

impl MarkOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn message(&self) -> String {
        if self.is_success() {
            format!("Attendance saved for {} employees", self.attempted)
        } else {
            format!(
                "Attendance failed for {} of {} employees: {}",
                self.failed.len(),
                self.attempted,
                self.failed.join(", ")
            )
        }
    }
}

pub fn toggle_present(present: &mut HashSet<String>, employee_id: &str) {
    if !present.remove(employee_id) {
        present.insert(employee_id.to_string());
    }
}

/// Clicking the selected employee again closes the calendar.
pub fn next_selection(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(id) if id == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMonth {
    pub year: i32,
    pub month: u32,
}

impl DisplayMonth {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        self.first_day()
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(30)
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn label(&self) -> String {
        self.first_day()
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Present,
    Leave,
    Unmarked,
}

impl DayStatus {
    pub fn class(&self) -> &'static str {
        match self {
            DayStatus::Present => "bg-status-success-bg text-status-success-text",
            DayStatus::Leave => "bg-status-error-bg text-status-error-text",
            DayStatus::Unmarked => "bg-surface-muted text-fg-muted",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Present => "Present",
            DayStatus::Leave => "Leave",
            DayStatus::Unmarked => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub record: Option<AttendanceRecord>,
}

impl CalendarDay {
    pub fn status(&self) -> DayStatus {
        match &self.record {
            Some(record) if record.leave => DayStatus::Leave,
            Some(_) => DayStatus::Present,
            None => DayStatus::Unmarked,
        }
    }
}

/// Grid cells for `month`, Sunday first; `None` cells pad the first week.
pub fn calendar_cells(month: DisplayMonth, records: &[AttendanceRecord]) -> Vec<Option<CalendarDay>> {
    let Some(first) = month.first_day() else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as usize;
    let mut cells: Vec<Option<CalendarDay>> = vec![None; offset];
    cells.extend(
        first
            .iter_days()
            .take(month.days_in_month() as usize)
            .map(|date| {
                Some(CalendarDay {
                    date,
                    record: records.iter().find(|r| r.date == date).cloned(),
                })
            }),
    );
    cells
}
