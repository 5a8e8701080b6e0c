//! One-shot, timed reveal of the software showcase cards.
//!
//! Once the card container becomes visible the revealer schedules one step per
//! card at strictly increasing delays. Step `n` swaps `card-hidden` on
//! `card-n` for `card-animate-n`. The trigger fires at most once and every
//! pending step is cancelled when the revealer is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use thiserror::Error;
use web_sys::Document;

use crate::visibility::{Observation, VisibilityEntry};

pub const CONTAINER_ID: &str = "software-cards";
pub const HIDDEN_CLASS: &str = "card-hidden";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTiming {
    Current,
    Legacy,
}

impl RevealTiming {
    pub fn delays_ms(self) -> [u32; 3] {
        match self {
            RevealTiming::Current => [300, 1500, 2700],
            RevealTiming::Legacy => [300, 500, 900],
        }
    }
}

/// Each card has its own animation; they are not interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealVariant {
    First,
    Second,
    Third,
}

impl RevealVariant {
    pub const ALL: [RevealVariant; 3] = [RevealVariant::First, RevealVariant::Second, RevealVariant::Third];

    pub fn target_id(self) -> &'static str {
        match self {
            RevealVariant::First => "card-1",
            RevealVariant::Second => "card-2",
            RevealVariant::Third => "card-3",
        }
    }

    pub fn animation_class(self) -> &'static str {
        match self {
            RevealVariant::First => "card-animate-1",
            RevealVariant::Second => "card-animate-2",
            RevealVariant::Third => "card-animate-3",
        }
    }

    fn index(self) -> usize {
        match self {
            RevealVariant::First => 0,
            RevealVariant::Second => 1,
            RevealVariant::Third => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Hidden,
    Revealed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("reveal delays must strictly increase, got {0:?}")]
    NotIncreasing([u32; 3]),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealStep {
    pub delay_ms: u32,
    pub variant: RevealVariant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    steps: [RevealStep; 3],
}

impl RevealPlan {
    pub fn new(delays_ms: [u32; 3]) -> Result<Self, PlanError> {
        if delays_ms.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(PlanError::NotIncreasing(delays_ms));
        }
        Ok(Self::from_delays(delays_ms))
    }

    pub fn for_timing(timing: RevealTiming) -> Self {
        Self::from_delays(timing.delays_ms())
    }

    fn from_delays(delays_ms: [u32; 3]) -> Self {
        let steps = RevealVariant::ALL.map(|variant| RevealStep {
            delay_ms: delays_ms[variant.index()],
            variant,
        });
        Self { steps }
    }

    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }
}

/// Where revealed cards live. `reveal` returns `false` if the card is gone.
pub trait RevealTargets {
    fn reveal(&self, variant: RevealVariant) -> bool;
}

impl RevealTargets for Document {
    fn reveal(&self, variant: RevealVariant) -> bool {
        let Some(card) = self.get_element_by_id(variant.target_id()) else {
            return false;
        };
        let classes = card.class_list();
        let _ = classes.remove_1(HIDDEN_CLASS);
        let _ = classes.add_1(variant.animation_class());
        true
    }
}

pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, task: Box<dyn FnOnce()>);
    fn cancel_all(&mut self);
}

/// Browser timers. Keeps every handle so the whole batch can be dropped.
#[derive(Default)]
pub struct TimeoutScheduler {
    pending: Vec<Timeout>,
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.pending.push(Timeout::new(delay_ms, task));
    }

    fn cancel_all(&mut self) {
        // Dropping a Timeout clears it; already fired ones are a no-op.
        self.pending.clear();
    }
}

pub struct SectionRevealer<S: Scheduler, T: RevealTargets + 'static> {
    plan: RevealPlan,
    container_id: String,
    scheduler: S,
    targets: Rc<T>,
    states: Rc<RefCell<[CardState; 3]>>,
    triggered: bool,
}

impl<S: Scheduler, T: RevealTargets + 'static> SectionRevealer<S, T> {
    pub fn new(plan: RevealPlan, scheduler: S, targets: Rc<T>) -> Self {
        Self {
            plan,
            container_id: CONTAINER_ID.to_string(),
            scheduler,
            targets,
            states: Rc::new(RefCell::new([CardState::Hidden; 3])),
            triggered: false,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn state(&self, variant: RevealVariant) -> CardState {
        self.states.borrow()[variant.index()]
    }

    /// Feeds a batch of visibility entries. Returns [`Observation::Stop`] once
    /// the sequence has been scheduled so the caller unsubscribes.
    pub fn handle(&mut self, entries: &[VisibilityEntry]) -> Observation {
        if self.triggered {
            return Observation::Stop;
        }
        let visible = entries
            .iter()
            .any(|entry| entry.is_intersecting && entry.target_id == self.container_id);
        if !visible {
            return Observation::Continue;
        }

        self.triggered = true;
        debug!("{} visible, scheduling card reveal", self.container_id);

        for step in self.plan.steps() {
            let targets = Rc::clone(&self.targets);
            let states = Rc::clone(&self.states);
            let variant = step.variant;
            self.scheduler.schedule(
                step.delay_ms,
                Box::new(move || {
                    let mut states = states.borrow_mut();
                    if states[variant.index()] == CardState::Revealed {
                        return;
                    }
                    if targets.reveal(variant) {
                        states[variant.index()] = CardState::Revealed;
                        debug!("revealed {}", variant.target_id());
                    } else {
                        debug!("{} not in the document, skipping", variant.target_id());
                    }
                }),
            );
        }

        Observation::Stop
    }

    pub fn teardown(&mut self) {
        self.scheduler.cancel_all();
    }
}

impl<S: Scheduler, T: RevealTargets + 'static> Drop for SectionRevealer<S, T> {
    fn drop(&mut self) {
        self.teardown();
    }
}
