use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use stylist::Style;
use yew::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4_000;

const TOASTER_CSS: &str = r#"
    position: fixed;
    right: 24px;
    bottom: 24px;
    z-index: 100;
    display: flex;
    flex-direction: column;
    gap: 12px;
    max-width: min(380px, calc(100vw - 48px));

    .toast {
        padding: 14px 18px;
        border-radius: 10px;
        font-size: 15px;
        line-height: 1.4;
        color: #fff;
        cursor: pointer;
        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.25);
        animation: toast-in 0.3s ease-out;
    }
    .toast.success {
        background: #15803d;
    }
    .toast.error {
        background: #b91c1c;
    }
"#;

/// Surfaces user-facing messages. Fire and forget.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Used when no toaster is mounted above the caller.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

pub enum ToastAction {
    Push(ToastKind, String),
    Dismiss(u32),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.push(kind, message);
            }
            ToastAction::Dismiss(id) => {
                if !next.dismiss(id) {
                    return self;
                }
            }
        }
        Rc::new(next)
    }
}

/// Context handle components use to raise toasts.
#[derive(Clone)]
pub struct ToastHandle {
    dispatcher: UseReducerDispatcher<ToastQueue>,
}

// The dispatcher is stable for the lifetime of the Toaster.
impl PartialEq for ToastHandle {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Notifier for ToastHandle {
    fn success(&self, message: &str) {
        self.dispatcher.dispatch(ToastAction::Push(ToastKind::Success, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.dispatcher.dispatch(ToastAction::Push(ToastKind::Error, message.to_string()));
    }
}

#[hook]
pub fn use_notifier() -> Rc<dyn Notifier> {
    match use_context::<ToastHandle>() {
        Some(handle) => Rc::new(handle),
        None => Rc::new(LogNotifier),
    }
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let queue = use_reducer(ToastQueue::default);
    let handle = ToastHandle {
        dispatcher: queue.dispatcher(),
    };

    let style = match Style::new(TOASTER_CSS) {
        Ok(style) => Some(style),
        Err(err) => {
            warn!("toaster styles rejected: {err}");
            None
        }
    };

    html! {
        <ContextProvider<ToastHandle> context={handle}>
            { for props.children.iter() }
            <div class={classes!("toaster", style)} aria-live="polite">
                { for queue.toasts().iter().map(|toast| {
                    let on_dismiss = {
                        let dispatcher = queue.dispatcher();
                        let id = toast.id;
                        Callback::from(move |_| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };
                    html! {
                        <ToastItem key={toast.id.to_string()} toast={toast.clone()} {on_dismiss} />
                    }
                }) }
            </div>
        </ContextProvider<ToastHandle>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<()>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(()));
                move || drop(timeout)
            },
            (),
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", props.toast.kind.class())} role="status" {onclick}>
            { props.toast.message.clone() }
        </div>
    }
}
