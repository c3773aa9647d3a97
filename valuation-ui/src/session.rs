//! Session state driving one estimate at a time.
//!
//! The session owns the form, the stored result, and a two-state task:
//! `Idle` or `Pending` since some start instant. Submission is gated the way
//! the page disables its button — while a calculation is pending, or while
//! any field is empty, submit does nothing. Editing a field discards
//! whatever result is currently displayed.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};
use valuation_core::{
    PricingSchedule, PropertyAttributes, ValuationBreakdown, ValuationCalculator,
};

use crate::form::{Field, PropertyForm};

/// Fixed simulated calculation time.
pub const VALUATION_DELAY: Duration = Duration::from_millis(1500);

/// Whether a calculation is in flight.
///
/// There is deliberately no cancellation: a pending calculation always runs
/// to completion with the attribute snapshot taken at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Idle,
    Pending { started_at: Instant },
}

/// Reasons a submit attempt is ignored.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("required fields are empty: {}", list_fields(.0))]
    Incomplete(Vec<Field>),

    #[error("an estimate is already being calculated")]
    Busy,
}

fn list_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One user's valuation session: form, task state, and last result.
#[derive(Debug, Clone)]
pub struct ValuationSession {
    form: PropertyForm,
    schedule: PricingSchedule,
    state: TaskState,
    result: Option<ValuationBreakdown>,
}

impl ValuationSession {
    pub fn new(schedule: PricingSchedule) -> Self {
        Self {
            form: PropertyForm::new(),
            schedule,
            state: TaskState::Idle,
            result: None,
        }
    }

    pub fn form(&self) -> &PropertyForm {
        &self.form
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn is_calculating(&self) -> bool {
        matches!(self.state, TaskState::Pending { .. })
    }

    pub fn result(&self) -> Option<&ValuationBreakdown> {
        self.result.as_ref()
    }

    /// Updates one field and discards any displayed result.
    pub fn edit(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) {
        self.form.set(field, value);
        self.result = None;
    }

    /// Empties the form and discards any displayed result.
    pub fn reset(&mut self) {
        self.form.reset();
        self.result = None;
    }

    /// Drops the stored result without touching the task state.
    pub fn clear_result(&mut self) {
        self.result = None;
    }

    /// True when a submit would actually start a calculation.
    pub fn can_submit(&self) -> bool {
        !self.is_calculating() && self.form.completeness().valid
    }

    /// Starts a calculation: snapshots the attributes and moves to `Pending`.
    ///
    /// Returns the snapshot the calculation must use, or the reason the
    /// attempt was ignored. Calling this while `Pending` changes nothing.
    pub fn begin(&mut self) -> Result<PropertyAttributes, SubmitBlocked> {
        if self.is_calculating() {
            debug!("submit ignored; calculation already pending");
            return Err(SubmitBlocked::Busy);
        }

        let completeness = self.form.completeness();
        if !completeness.valid {
            debug!(missing = ?completeness.missing, "submit ignored; form incomplete");
            return Err(SubmitBlocked::Incomplete(completeness.missing));
        }

        self.state = TaskState::Pending {
            started_at: Instant::now(),
        };
        Ok(self.form.attributes().clone())
    }

    /// Delivers a finished calculation and returns to `Idle`.
    pub fn finish(&mut self, breakdown: ValuationBreakdown) {
        self.result = Some(breakdown);
        self.state = TaskState::Idle;
    }

    /// Full submit flow: gate, simulated delay, calculation, delivery.
    pub async fn submit<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<ValuationBreakdown, SubmitBlocked> {
        let snapshot = self.begin()?;
        info!("calculating estimate");

        sleep(VALUATION_DELAY).await;

        let calculator = ValuationCalculator::new(&self.schedule);
        let breakdown = calculator.estimate(&snapshot, rng);
        self.finish(breakdown.clone());
        Ok(breakdown)
    }
}

impl Default for ValuationSession {
    fn default() -> Self {
        Self::new(PricingSchedule::default())
    }
}
