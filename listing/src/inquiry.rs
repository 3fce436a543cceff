//! Contact form draft.
//!
//! The form collects values but submitting is intentionally unwired: no
//! request is made, nothing is validated or stored.

use tracing::debug;

/// Values typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

/// Form inputs, in the order they appear on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InquiryField {
    LastName,
    FirstName,
    Email,
    Message,
}

impl InquiryField {
    pub const ALL: [InquiryField; 4] = [
        InquiryField::LastName,
        InquiryField::FirstName,
        InquiryField::Email,
        InquiryField::Message,
    ];

    /// Label shown above the input.
    pub const fn label(self) -> &'static str {
        match self {
            InquiryField::LastName => "姓氏",
            InquiryField::FirstName => "名字",
            InquiryField::Email => "電子郵件地址",
            InquiryField::Message => "訊息內容",
        }
    }

    /// `type` attribute for single-line inputs; `None` means textarea.
    pub const fn input_type(self) -> Option<&'static str> {
        match self {
            InquiryField::LastName | InquiryField::FirstName => Some("text"),
            InquiryField::Email => Some("email"),
            InquiryField::Message => None,
        }
    }
}

impl ContactInquiry {
    pub fn set(&mut self, field: InquiryField, value: String) {
        match field {
            InquiryField::FirstName => self.first_name = value,
            InquiryField::LastName => self.last_name = value,
            InquiryField::Email => self.email = value,
            InquiryField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::FirstName => &self.first_name,
            InquiryField::LastName => &self.last_name,
            InquiryField::Email => &self.email,
            InquiryField::Message => &self.message,
        }
    }

    /// Number of non-blank fields.
    pub fn filled_fields(&self) -> usize {
        InquiryField::ALL
            .iter()
            .filter(|f| !self.get(**f).trim().is_empty())
            .count()
    }
}

/// What happened to a submitted inquiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No delivery channel exists; the inquiry was dropped
    Unwired,
}

/// Submit the contact form.
///
/// Always returns [`SubmitOutcome::Unwired`]. The inquiry is only read.
pub fn submit(inquiry: &ContactInquiry) -> SubmitOutcome {
    debug!(
        "inquiry submitted with {} of {} fields filled; no delivery channel, discarding",
        inquiry.filled_fields(),
        InquiryField::ALL.len()
    );
    SubmitOutcome::Unwired
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactInquiry {
        let mut inquiry = ContactInquiry::default();
        inquiry.set(InquiryField::LastName, "林".into());
        inquiry.set(InquiryField::FirstName, "怡君".into());
        inquiry.set(InquiryField::Email, "yijun@example.com".into());
        inquiry.set(InquiryField::Message, "想預約週末參觀".into());
        inquiry
    }

    #[test]
    fn set_routes_to_the_right_field() {
        let inquiry = filled();
        assert_eq!(inquiry.last_name, "林");
        assert_eq!(inquiry.first_name, "怡君");
        assert_eq!(inquiry.get(InquiryField::Email), "yijun@example.com");
        assert_eq!(inquiry.filled_fields(), 4);
    }

    #[test]
    fn submit_has_no_side_effect() {
        for inquiry in [ContactInquiry::default(), filled()] {
            let before = inquiry.clone();
            assert_eq!(submit(&inquiry), SubmitOutcome::Unwired);
            assert_eq!(submit(&inquiry), SubmitOutcome::Unwired);
            assert_eq!(inquiry, before);
        }
    }

    #[test]
    fn blank_fields_are_not_counted() {
        let mut inquiry = ContactInquiry::default();
        inquiry.set(InquiryField::Message, "   ".into());
        assert_eq!(inquiry.filled_fields(), 0);
    }

    #[test]
    fn only_message_is_multiline() {
        let multiline: Vec<_> = InquiryField::ALL
            .into_iter()
            .filter(|f| f.input_type().is_none())
            .collect();
        assert_eq!(multiline, vec![InquiryField::Message]);
    }
}
