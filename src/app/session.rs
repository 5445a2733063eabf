use crate::core::engine::NumerologyEngine;
use crate::domain::model::{NumerologyProfile, PersonInput};
use crate::utils::error::{NumerologyError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const DEFAULT_CALCULATION_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationState {
    Input,
    Calculating,
    Results(Box<NumerologyProfile>),
}

impl CalculationState {
    pub fn name(&self) -> &'static str {
        match self {
            CalculationState::Input => "input",
            CalculationState::Calculating => "calculating",
            CalculationState::Results(_) => "results",
        }
    }
}

/// `Input -> Calculating -> Results`, back to `Input` on reset.
///
/// The profile is computed synchronously on submit; the `Calculating`
/// phase is a timer task that can be aborted. Observers follow the
/// state through [`CalculationSession::subscribe`].
pub struct CalculationSession {
    engine: NumerologyEngine,
    delay: Duration,
    state: Arc<watch::Sender<CalculationState>>,
    pending: Option<JoinHandle<()>>,
}

impl CalculationSession {
    pub fn new(engine: NumerologyEngine, delay: Duration) -> Self {
        let (sender, _) = watch::channel(CalculationState::Input);
        Self {
            engine,
            delay,
            state: Arc::new(sender),
            pending: None,
        }
    }

    pub fn state(&self) -> CalculationState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CalculationState> {
        self.state.subscribe()
    }

    /// Starts a calculation, discarding any prior or pending one.
    ///
    /// A rejected input leaves the current state untouched.
    /// Must be called inside a tokio runtime.
    pub fn submit(&mut self, input: &PersonInput, reference_year: u32) -> Result<()> {
        let profile = self.engine.calculate(input, reference_year)?;
        self.cancel_pending();

        tracing::info!("🔢 Calculating numerology profile for {}", input.full_name());
        self.state.send_replace(CalculationState::Calculating);

        let state = Arc::clone(&self.state);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.send_replace(CalculationState::Results(Box::new(profile)));
            tracing::debug!("Calculation delay of {:?} elapsed, results ready", delay);
        }));
        Ok(())
    }

    /// Aborts a pending calculation and returns to `Input`.
    pub fn reset(&mut self) {
        if self.cancel_pending() {
            tracing::info!("⏹️ Pending calculation cancelled");
        }
        self.state.send_replace(CalculationState::Input);
    }

    fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    /// Resolves with the profile once `Results` is reached, or with
    /// `Cancelled` if the session goes back to `Input` first.
    pub async fn wait_for_results(&self) -> Result<NumerologyProfile> {
        let mut receiver = self.subscribe();
        let state = receiver
            .wait_for(|s| !matches!(s, CalculationState::Calculating))
            .await
            .map_err(|_| NumerologyError::Cancelled)?;

        match &*state {
            CalculationState::Results(profile) => Ok((**profile).clone()),
            _ => Err(NumerologyError::Cancelled),
        }
    }
}

impl Drop for CalculationSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
