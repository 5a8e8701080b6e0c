//! Submission flow for the contact form.
//!
//! Validation failures and storage failures both leave the form untouched so
//! the visitor can fix or resend it; only a successful submission clears it.
//! Persisting is a plain read-modify-write of the whole list: two tabs
//! submitting at the same moment can lose one of the entries.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{info, warn};
use thiserror::Error;

use crate::components::notification::Notifier;
use crate::contact::form::{ContactForm, Field};
use crate::contact::submission::{next_id, ContactSubmission};
use crate::storage::{KeyValueStore, StoreError};

pub const MISSING_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const SENT_MESSAGE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";
pub const SEND_FAILED_MESSAGE: &str = "Não foi possível enviar sua mensagem. Tente novamente.";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("missing required fields: {0:?}")]
    MissingFields(Vec<Field>),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stored submissions could not be encoded or decoded: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("stored submission ids leave no room for a new one")]
    IdsExhausted,
}

pub type Clock = fn() -> DateTime<Utc>;

#[derive(Clone)]
pub struct ContactController {
    notifier: Rc<dyn Notifier>,
    store: Option<Rc<dyn KeyValueStore>>,
    storage_key: String,
    clock: Clock,
}

impl ContactController {
    /// Notifies and clears the form without storing anything.
    pub fn simulated(notifier: Rc<dyn Notifier>) -> Self {
        Self {
            notifier,
            store: None,
            storage_key: String::new(),
            clock: Utc::now,
        }
    }

    pub fn persisted(notifier: Rc<dyn Notifier>, store: Rc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        Self {
            notifier,
            store: Some(store),
            storage_key: storage_key.into(),
            clock: Utc::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Validates, optionally stores and then resets `form`. Every call raises
    /// exactly one notification.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<ContactSubmission, ContactError> {
        let missing = form.missing_required();
        if !missing.is_empty() {
            info!("contact form rejected, missing {missing:?}");
            self.notifier.error(MISSING_FIELDS_MESSAGE);
            return Err(ContactError::MissingFields(missing));
        }

        let submitted_at = (self.clock)();
        let submission = match &self.store {
            None => ContactSubmission::from_form(form, submitted_at.timestamp_millis(), submitted_at),
            Some(store) => match self.append(store.as_ref(), form, submitted_at).await {
                Ok(submission) => submission,
                Err(err) => {
                    warn!("could not store contact submission: {err}");
                    self.notifier.error(SEND_FAILED_MESSAGE);
                    return Err(err);
                }
            },
        };

        info!("contact submission {} accepted", submission.id);
        self.notifier.success(SENT_MESSAGE);
        form.reset();
        Ok(submission)
    }

    async fn append(
        &self,
        store: &dyn KeyValueStore,
        form: &ContactForm,
        submitted_at: DateTime<Utc>,
    ) -> Result<ContactSubmission, ContactError> {
        let mut submissions: Vec<ContactSubmission> = match store.get(&self.storage_key).await? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        let id = next_id(&submissions, submitted_at).ok_or(ContactError::IdsExhausted)?;
        let submission = ContactSubmission::from_form(form, id, submitted_at);
        submissions.push(submission.clone());

        store.set(&self.storage_key, serde_json::to_string(&submissions)?).await?;
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::MockNotifier;
    use crate::contact::form::FormVariant;
    use crate::storage::{MemoryStore, StoreFuture};
    use chrono::TimeZone;
    use futures::executor::block_on;
    use futures::future;

    const KEY: &str = "contact-submissions";

    fn fixed_clock() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_717_243_200_000).single().expect("valid timestamp")
    }

    fn expect_error(message: &'static str) -> Rc<dyn Notifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().withf(move |m| m == message).times(1).return_const(());
        notifier.expect_success().never();
        Rc::new(notifier)
    }

    fn expect_success() -> Rc<dyn Notifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().withf(|m| m == SENT_MESSAGE).times(1).return_const(());
        notifier.expect_error().never();
        Rc::new(notifier)
    }

    fn filled(fields: &[(&str, &str)]) -> ContactForm {
        let mut form = ContactForm::new(FormVariant::Quote);
        for (name, value) in fields {
            form.update_field(name, *value);
        }
        form
    }

    /// Reads fine, refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get<'a>(&'a self, _key: &'a str) -> StoreFuture<'a, Option<String>> {
            Box::pin(future::ready(Ok(None)))
        }

        fn set<'a>(&'a self, key: &'a str, _value: String) -> StoreFuture<'a, ()> {
            Box::pin(future::ready(Err(StoreError::Write {
                key: key.to_string(),
                reason: "QuotaExceededError".to_string(),
            })))
        }
    }

    struct UnreachableStore;

    impl KeyValueStore for UnreachableStore {
        fn get<'a>(&'a self, key: &'a str) -> StoreFuture<'a, Option<String>> {
            Box::pin(future::ready(Err(StoreError::Read {
                key: key.to_string(),
                reason: "SecurityError".to_string(),
            })))
        }

        fn set<'a>(&'a self, _key: &'a str, _value: String) -> StoreFuture<'a, ()> {
            unreachable!("nothing is written after a failed read")
        }
    }

    #[test]
    fn missing_name_is_rejected_and_form_kept() {
        let controller = ContactController::simulated(expect_error(MISSING_FIELDS_MESSAGE));
        let mut form = filled(&[("nome", ""), ("email", "a@b.com"), ("mensagem", "hi")]);
        let before = form.clone();

        let result = block_on(controller.submit(&mut form));

        assert!(matches!(result, Err(ContactError::MissingFields(ref fields)) if fields == &[Field::Name]));
        assert_eq!(form, before);
    }

    #[test]
    fn rejected_submission_writes_nothing() {
        let store = Rc::new(MemoryStore::default());
        let controller = ContactController::persisted(expect_error(MISSING_FIELDS_MESSAGE), store.clone(), KEY);
        let mut form = filled(&[("nome", "Ana"), ("email", " "), ("mensagem", "oi")]);

        assert!(block_on(controller.submit(&mut form)).is_err());
        assert_eq!(store.snapshot(KEY), None);
        assert_eq!(form.value(Field::Name), "Ana");
    }

    #[test]
    fn simulated_submission_notifies_and_clears() {
        let controller = ContactController::simulated(expect_success()).with_clock(fixed_clock);
        let mut form = filled(&[("nome", "Ana"), ("email", "ana@x.com"), ("mensagem", "Quero um orçamento")]);

        let submission = block_on(controller.submit(&mut form)).expect("accepted");

        assert_eq!(submission.name, "Ana");
        assert_eq!(submission.submitted_at, fixed_clock());
        assert!(form.is_blank());
    }

    #[test]
    fn first_persisted_submission_starts_the_list() {
        let store = Rc::new(MemoryStore::default());
        let controller = ContactController::persisted(expect_success(), store.clone(), KEY).with_clock(fixed_clock);
        let mut form = filled(&[
            ("nome", "Ana"),
            ("email", "ana@x.com"),
            ("empresa", "Padaria Central"),
            ("mensagem", "Quero um orçamento"),
        ]);

        let submission = block_on(controller.submit(&mut form)).expect("accepted");

        let raw = store.snapshot(KEY).expect("list written");
        let stored: Vec<ContactSubmission> = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(stored, vec![submission.clone()]);
        assert_eq!(submission.id, fixed_clock().timestamp_millis());
        assert_eq!(submission.email, "ana@x.com");
        assert_eq!(submission.company.as_deref(), Some("Padaria Central"));
        assert_eq!(submission.message.as_deref(), Some("Quero um orçamento"));
        assert!(form.is_blank());
    }

    #[test]
    fn later_submissions_append_in_order() {
        let store = Rc::new(MemoryStore::default());
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(2).return_const(());
        notifier.expect_error().never();
        let controller = ContactController::persisted(Rc::new(notifier), store.clone(), KEY).with_clock(fixed_clock);

        for name in ["Ana", "Bruno"] {
            let mut form = filled(&[("nome", name), ("email", "x@y.com"), ("mensagem", "oi")]);
            block_on(controller.submit(&mut form)).expect("accepted");
        }

        let stored: Vec<ContactSubmission> =
            serde_json::from_str(&store.snapshot(KEY).expect("list written")).expect("valid json");
        let names: Vec<_> = stored.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Ana", "Bruno"]);
        // Same clock reading, ids still increase.
        assert!(stored[1].id > stored[0].id);
    }

    #[test]
    fn failed_write_keeps_the_visitors_input() {
        let controller = ContactController::persisted(expect_error(SEND_FAILED_MESSAGE), Rc::new(ReadOnlyStore), KEY);
        let mut form = filled(&[("nome", "Ana"), ("email", "ana@x.com"), ("mensagem", "oi")]);
        let before = form.clone();

        let result = block_on(controller.submit(&mut form));

        assert!(matches!(result, Err(ContactError::Store(StoreError::Write { .. }))));
        assert_eq!(form, before);
    }

    #[test]
    fn failed_read_is_reported_like_a_failed_write() {
        let controller = ContactController::persisted(expect_error(SEND_FAILED_MESSAGE), Rc::new(UnreachableStore), KEY);
        let mut form = filled(&[("nome", "Ana"), ("email", "ana@x.com"), ("mensagem", "oi")]);

        let result = block_on(controller.submit(&mut form));

        assert!(matches!(result, Err(ContactError::Store(StoreError::Read { .. }))));
        assert!(!form.is_blank());
    }

    #[test]
    fn unreadable_history_is_not_overwritten() {
        let store = Rc::new(MemoryStore::default());
        block_on(store.set(KEY, "not json".to_string())).expect("seeded");
        let controller = ContactController::persisted(expect_error(SEND_FAILED_MESSAGE), store.clone(), KEY);
        let mut form = filled(&[("nome", "Ana"), ("email", "ana@x.com"), ("mensagem", "oi")]);

        let result = block_on(controller.submit(&mut form));

        assert!(matches!(result, Err(ContactError::Codec(_))));
        assert_eq!(store.snapshot(KEY).as_deref(), Some("not json"));
    }

    #[test]
    fn exhausted_ids_fail_without_touching_the_store() {
        let store = Rc::new(MemoryStore::default());
        let history = format!(
            r#"[{{"id":{},"name":"Ana","email":"ana@x.com","submittedAt":"2024-05-01T12:00:00Z"}}]"#,
            i64::MAX
        );
        block_on(store.set(KEY, history.clone())).expect("seeded");
        let controller = ContactController::persisted(expect_error(SEND_FAILED_MESSAGE), store.clone(), KEY);
        let mut form = filled(&[("nome", "Bruno"), ("email", "b@x.com"), ("mensagem", "oi")]);
        let before = form.clone();

        let result = block_on(controller.submit(&mut form));

        assert!(matches!(result, Err(ContactError::IdsExhausted)));
        assert_eq!(store.snapshot(KEY), Some(history));
        assert_eq!(form, before);
    }

    #[test]
    fn service_request_variant_stores_the_chosen_service() {
        let store = Rc::new(MemoryStore::default());
        let controller = ContactController::persisted(expect_success(), store.clone(), KEY).with_clock(fixed_clock);
        let mut form = ContactForm::new(FormVariant::ServiceRequest);
        form.update_field("nome", "Ana");
        form.update_field("email", "ana@x.com");
        form.update_field("servico", "Sinalização");

        let submission = block_on(controller.submit(&mut form)).expect("accepted");

        assert_eq!(submission.service.as_deref(), Some("Sinalização"));
        assert_eq!(submission.message, None);
        assert_eq!(submission.company, None);
    }
}
