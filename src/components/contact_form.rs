use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::use_notifier;
use crate::config::{SiteConfig, SubmissionMode};
use crate::contact::controller::ContactController;
use crate::contact::form::{ContactForm, Field, SERVICE_OPTIONS};
use crate::storage;

pub enum FormAction {
    Update { name: String, value: String },
    Reset,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Update { name, value } => next.update_field(&name, value),
            FormAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

/// `(name, value)` of whichever form control fired the event.
fn control_value(e: &Event) -> Option<(String, String)> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.name(), select.value()))
}

#[function_component(ContactFormCard)]
pub fn contact_form_card() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let notifier = use_notifier();
    let form = use_reducer(|| ContactForm::new(config.form));
    let submitting = use_state(|| false);

    let controller = {
        let storage_key = config.submissions_key;
        use_memo(
            move |mode| match mode {
                SubmissionMode::Simulated => ContactController::simulated(notifier),
                SubmissionMode::Persisted => ContactController::persisted(notifier, storage::open_local(), storage_key),
            },
            config.submission,
        )
    };

    let on_edit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: Event| {
            if let Some((name, value)) = control_value(&e) {
                dispatcher.dispatch(FormAction::Update { name, value });
            }
        })
    };
    let oninput = {
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| on_edit.emit(e.into()))
    };

    let onsubmit = {
        let form = form.clone();
        let submitting = submitting.clone();
        let controller = Rc::clone(&controller);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);

            let mut draft = (*form).clone();
            let dispatcher = form.dispatcher();
            let submitting = submitting.clone();
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                if controller.submit(&mut draft).await.is_ok() {
                    dispatcher.dispatch(FormAction::Reset);
                }
                submitting.set(false);
            });
        })
    };

    let variant = form.variant();
    let control = |field: Field| -> Html {
        let id = field.key();
        let required = variant.is_required(field);
        let label = if required {
            format!("{} *", field.label())
        } else {
            field.label().to_string()
        };
        let value = form.value(field).to_string();

        let input = match field {
            Field::Message => html! {
                <textarea
                    {id}
                    name={id}
                    class="form-textarea"
                    placeholder={field.placeholder()}
                    {value}
                    {required}
                    oninput={oninput.clone()}
                />
            },
            Field::Service => html! {
                <select {id} name={id} class="form-select" {required} onchange={on_edit.clone()}>
                    <option value="" selected={value.is_empty()} disabled={true}>{ field.placeholder() }</option>
                    { for SERVICE_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={value == *option}>{ *option }</option>
                    }) }
                </select>
            },
            _ => html! {
                <input
                    {id}
                    name={id}
                    class="form-input"
                    type={if field == Field::Email { "email" } else { "text" }}
                    placeholder={field.placeholder()}
                    {value}
                    {required}
                    oninput={oninput.clone()}
                />
            },
        };

        html! {
            <div class="form-field">
                <label for={id}>{ label }</label>
                { input }
            </div>
        }
    };

    html! {
        <div class="contact-card form-card">
            <div class="card-header">
                <h3 class="card-title">{"Formulário de Contato"}</h3>
                <p class="card-description">
                    {"Preencha o formulário abaixo e entraremos em contato em até 24 horas"}
                </p>
            </div>
            <form class="contact-form" {onsubmit} novalidate={true}>
                <div class="form-row">
                    { control(Field::Name) }
                    { control(Field::Email) }
                </div>
                <div class="form-row">
                    { for variant.fields().iter()
                        .filter(|field| !matches!(field, Field::Name | Field::Email | Field::Message))
                        .map(|field| control(*field)) }
                </div>
                if variant.fields().contains(&Field::Message) {
                    { control(Field::Message) }
                }
                <button type="submit" class="submit-button" disabled={*submitting}>
                    { if *submitting { "Enviando..." } else { "Enviar Mensagem" } }
                </button>
            </form>
        </div>
    }
}
