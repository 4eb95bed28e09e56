//! Public booking form: visitor selection and contact details, validated before any request is made.

use thiserror::Error;

use crate::models::{BookingRequest, Slot};

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Пожалуйста, заполните все обязательные поля: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Заявка уже отправляется")]
    InFlight,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub teacher: String,
    pub subject: String,
    pub time: String,
    pub student_name: String,
    pub student_phone: String,
    pub student_email: String,
    submitting: bool,
}

impl BookingForm {
    pub fn validate(&self) -> Result<BookingRequest, BookingError> {
        let required = [
            ("преподаватель", &self.teacher),
            ("предмет", &self.subject),
            ("время", &self.time),
            ("имя ученика", &self.student_name),
            ("телефон", &self.student_phone),
        ];
        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect();
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing));
        }

        Ok(BookingRequest {
            student_name: self.student_name.trim().to_string(),
            student_phone: self.student_phone.trim().to_string(),
            student_email: self.student_email.trim().to_string(),
            selected_teacher: self.teacher.clone(),
            selected_subject: self.subject.clone(),
            selected_time: self.time.clone(),
        })
    }

    /// Validates and marks the form as submitting. Nothing changes when validation fails.
    pub fn begin_submit(&mut self) -> Result<BookingRequest, BookingError> {
        if self.submitting {
            return Err(BookingError::InFlight);
        }
        let request = self.validate()?;
        self.submitting = true;
        Ok(request)
    }

    /// Ends a submission: a success empties the form, a failure keeps what the visitor typed.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        *self = BookingForm::default();
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}

/// Times a visitor may pick: only slots marked available, in their original order.
pub fn available_times(slots: &[Slot]) -> Vec<String> {
    slots
        .iter()
        .filter(|slot| slot.available)
        .map(|slot| slot.time.clone())
        .collect()
}
