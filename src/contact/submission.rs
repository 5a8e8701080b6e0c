use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::contact::form::{ContactForm, Field};

/// A submitted contact request as kept under `contact-submissions`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn from_form(form: &ContactForm, id: i64, submitted_at: DateTime<Utc>) -> Self {
        let optional = |field: Field| {
            let value = form.value(field);
            (!value.trim().is_empty()).then(|| value.to_string())
        };

        Self {
            id,
            name: form.value(Field::Name).to_string(),
            email: form.value(Field::Email).to_string(),
            phone: optional(Field::Phone),
            company: optional(Field::Company),
            service: optional(Field::Service),
            message: optional(Field::Message),
            submitted_at,
        }
    }
}

/// Millisecond timestamp of the submission, bumped past the newest stored id
/// when the clock is behind or two submissions share a millisecond.
/// `None` when the stored ids leave no larger value.
pub fn next_id(existing: &[ContactSubmission], submitted_at: DateTime<Utc>) -> Option<i64> {
    let stamp = submitted_at.timestamp_millis();
    match existing.iter().map(|submission| submission.id).max() {
        Some(last) => last.checked_add(1).map(|after| stamp.max(after)),
        None => Some(stamp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::form::FormVariant;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).single().expect("valid timestamp")
    }

    fn quote() -> ContactForm {
        let mut form = ContactForm::new(FormVariant::Quote);
        form.update_field("nome", "Ana");
        form.update_field("email", "ana@x.com");
        form.update_field("mensagem", "Quero um orçamento");
        form
    }

    #[test]
    fn blank_optional_fields_are_left_out() {
        let mut form = quote();
        form.update_field("telefone", "  ");
        let submission = ContactSubmission::from_form(&form, 7, at(1_700_000_000_000));

        assert_eq!(submission.phone, None);
        assert_eq!(submission.company, None);
        assert_eq!(submission.service, None);
        assert_eq!(submission.message.as_deref(), Some("Quero um orçamento"));

        let json = serde_json::to_value(&submission).expect("serializes");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["submittedAt"], "2023-11-14T22:13:20Z");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn ids_follow_the_clock_when_it_is_ahead() {
        let first = ContactSubmission::from_form(&quote(), 1_000, at(1_000));
        assert_eq!(next_id(&[], at(5_000)), Some(5_000));
        assert_eq!(next_id(&[first], at(5_000)), Some(5_000));
    }

    #[test]
    fn ids_stay_increasing_when_the_clock_lags() {
        let stored = ContactSubmission::from_form(&quote(), 9_000, at(9_000));
        assert_eq!(next_id(&[stored.clone()], at(9_000)), Some(9_001));
        assert_eq!(next_id(&[stored], at(3_000)), Some(9_001));
    }

    #[test]
    fn no_id_left_after_the_largest_one() {
        let stored = ContactSubmission::from_form(&quote(), i64::MAX, at(1_000));
        assert_eq!(next_id(&[stored], at(1_000)), None);
    }

    #[test]
    fn reads_records_written_without_optional_fields() {
        let raw = r#"{"id":1,"name":"Ana","email":"ana@x.com","submittedAt":"2024-05-01T12:00:00Z"}"#;
        let submission: ContactSubmission = serde_json::from_str(raw).expect("parses");
        assert_eq!(submission.message, None);
        assert_eq!(submission.submitted_at, at(1_714_564_800_000));
    }
}
