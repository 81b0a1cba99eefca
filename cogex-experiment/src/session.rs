use crate::runner::{RunnerEvent, RunnerOutput, TrialRunner};
use crate::trial::{Completion, Feedback, Presentation};
use cogex_core::{StroopError, Variant};
use cogex_timing::{ManualTimer, Timer};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// Renders trials and feedback
pub trait Presenter {
    fn present(&mut self, presentation: &Presentation);
    fn show_feedback(&mut self, feedback: &Feedback);
}

/// What a response source delivers for one trial
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEvent {
    Response(String),
    Timeout,
    Abort,
}

/// Supplies exactly one response event per presented trial
pub trait ResponseSource {
    /// Waits for the participant. `timeout` is the time left in the response
    /// window when one is configured.
    fn await_response(
        &mut self,
        presentation: &Presentation,
        timeout: Option<Duration>,
    ) -> ResponseEvent;
}

/// Runs a whole session to completion or abort.
///
/// Returns `Ok(None)` when the source aborted back to selection.
pub fn run_session<T, R, P, S>(
    runner: &mut TrialRunner<T, R>,
    presenter: &mut P,
    source: &mut S,
    variant: Variant,
    trial_count: usize,
) -> Result<Option<Completion>, StroopError>
where
    T: Timer,
    R: Rng,
    P: Presenter,
    S: ResponseSource,
{
    let mut output = runner.handle_event(RunnerEvent::Start {
        variant,
        trial_count,
    })?;

    loop {
        output = match output {
            RunnerOutput::Present(presentation) => {
                presenter.present(&presentation);
                let event = match source.await_response(&presentation, runner.response_remaining())
                {
                    ResponseEvent::Response(label) => RunnerEvent::Response(label),
                    ResponseEvent::Timeout => RunnerEvent::Timeout,
                    ResponseEvent::Abort => RunnerEvent::Abort,
                };
                runner.handle_event(event)?
            }
            RunnerOutput::Feedback(feedback) => {
                presenter.show_feedback(&feedback);
                while let Some(rest) = runner.dwell_remaining() {
                    runner.timer.sleep(rest);
                }
                runner.handle_event(RunnerEvent::DwellElapsed)?
            }
            RunnerOutput::Complete(completion) => return Ok(Some(completion)),
            RunnerOutput::Aborted => return Ok(None),
            RunnerOutput::Ignored => {
                return Err(StroopError::InvalidTransition {
                    event: "session-step",
                    state: runner.state().name(),
                });
            }
        };
    }
}

/// One scripted participant action
#[derive(Debug, Clone, PartialEq)]
pub enum Scripted {
    /// Answer correctly after `rt_ms`
    Correct { rt_ms: f64 },
    /// Answer with some other offered option after `rt_ms`
    Incorrect { rt_ms: f64 },
    /// Answer with a fixed label after `rt_ms`
    Label { label: String, rt_ms: f64 },
    /// Let the response window run out; needs a configured timeout
    Timeout,
    Abort,
}

/// Synchronous response source replaying a script on a manual clock.
///
/// Aborts once the script is exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedResponses {
    timer: ManualTimer,
    script: VecDeque<Scripted>,
}

impl ScriptedResponses {
    pub fn new(timer: ManualTimer, script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            timer,
            script: script.into_iter().collect(),
        }
    }

    /// Every trial answered correctly with the given reaction times
    pub fn all_correct(timer: ManualTimer, rts_ms: &[f64]) -> Self {
        Self::new(
            timer,
            rts_ms.iter().map(|&rt_ms| Scripted::Correct { rt_ms }),
        )
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ResponseSource for ScriptedResponses {
    fn await_response(
        &mut self,
        presentation: &Presentation,
        timeout: Option<Duration>,
    ) -> ResponseEvent {
        let answer = presentation.payload.answer();
        let (label, rt_ms) = match self.script.pop_front() {
            None | Some(Scripted::Abort) => return ResponseEvent::Abort,
            Some(Scripted::Timeout) => {
                if let Some(rest) = timeout {
                    self.timer.advance(rest);
                }
                return ResponseEvent::Timeout;
            }
            Some(Scripted::Correct { rt_ms }) => (answer.to_string(), rt_ms),
            Some(Scripted::Incorrect { rt_ms }) => {
                let wrong = presentation
                    .options
                    .iter()
                    .find(|o| **o != answer)
                    .copied()
                    .unwrap_or("no-such-option");
                (wrong.to_string(), rt_ms)
            }
            Some(Scripted::Label { label, rt_ms }) => (label, rt_ms),
        };
        self.timer.advance_ms(rt_ms);
        ResponseEvent::Response(label)
    }
}
