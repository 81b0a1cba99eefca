use crate::config::ExperimentConfig;
use crate::generate::generate;
use crate::options::trial_options;
use crate::results::summarize;
use crate::trial::{ActiveTrial, Completion, Feedback, Presentation, SessionState, TrialTimestamps};
use cogex_core::{ResponseRecord, RunnerState, StroopError, Variant};
use cogex_timing::{Timer, ns_to_ms};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerEvent {
    Start { variant: Variant, trial_count: usize },
    Response(String),
    Timeout,
    DwellElapsed,
    Abort,
}

impl RunnerEvent {
    fn name(&self) -> &'static str {
        match self {
            RunnerEvent::Start { .. } => "start",
            RunnerEvent::Response(_) => "response",
            RunnerEvent::Timeout => "timeout",
            RunnerEvent::DwellElapsed => "dwell-elapsed",
            RunnerEvent::Abort => "abort",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunnerOutput {
    Present(Presentation),
    Feedback(Feedback),
    Complete(Completion),
    Aborted,
    /// Event arrived in a state that no longer accepts it
    Ignored,
}

/// Drives one session: present, await response, score, dwell, advance.
///
/// The runner never blocks. Pending deadlines (response timeout, feedback
/// dwell) are timestamps reported by [`TrialRunner::update`]; whoever owns the
/// runner decides how to wait for them.
pub struct TrialRunner<T, R>
where
    T: Timer,
    R: Rng,
{
    pub timer: T,
    pub rng: R,
    pub config: ExperimentConfig,
    state: RunnerState,
    session: Option<SessionState>,
}

impl<T, R> TrialRunner<T, R>
where
    T: Timer,
    R: Rng,
{
    pub fn new(config: ExperimentConfig, timer: T, rng: R) -> Self {
        Self {
            timer,
            rng,
            config,
            state: RunnerState::Idle,
            session: None,
        }
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn session(&self) -> Option<&SessionState> {
        self.session.as_ref()
    }

    /// Responses recorded so far in the running session
    pub fn log(&self) -> &[ResponseRecord] {
        self.session
            .as_ref()
            .map(|s| s.log.as_slice())
            .unwrap_or_default()
    }

    /// (1-based trial number, total) while a session runs
    pub fn trial_progress(&self) -> Option<(usize, usize)> {
        self.session
            .as_ref()
            .filter(|_| self.state.in_session())
            .map(|s| ((s.index + 1).min(s.total()), s.total()))
    }

    /// Time left before the response window closes, if a timeout is configured
    pub fn response_remaining(&self) -> Option<Duration> {
        if !self.state.accepts_response() {
            return None;
        }
        let timeout = self.config.response_timeout()?;
        let trial = self.session.as_ref()?.current.as_ref()?;
        Some(timeout.saturating_sub(self.timer.elapsed(trial.timestamps.presented)))
    }

    /// Time left in the feedback dwell; `None` once it has elapsed
    pub fn dwell_remaining(&self) -> Option<Duration> {
        if self.state != RunnerState::Feedback {
            return None;
        }
        let until = self.session.as_ref()?.current.as_ref()?.timestamps.feedback_until?;
        let now = self.timer.now();
        (now < until).then(|| Duration::from_nanos(until - now))
    }

    /// Checks pending deadlines and reports the events they produce
    pub fn update(&mut self) -> Vec<RunnerEvent> {
        let mut events = Vec::new();
        match self.state {
            RunnerState::AwaitingResponse => {
                if self.response_remaining() == Some(Duration::ZERO) {
                    events.push(RunnerEvent::Timeout);
                }
            }
            RunnerState::Feedback => {
                if self.dwell_remaining().is_none() {
                    events.push(RunnerEvent::DwellElapsed);
                }
            }
            _ => {}
        }
        events
    }

    pub fn handle_event(&mut self, event: RunnerEvent) -> Result<RunnerOutput, StroopError> {
        match (self.state, event) {
            (_, RunnerEvent::Abort) => Ok(self.abort()),

            (
                state,
                RunnerEvent::Start {
                    variant,
                    trial_count,
                },
            ) => {
                if state.in_session() {
                    return Err(StroopError::InvalidTransition {
                        event: "start",
                        state: state.name(),
                    });
                }
                self.start_session(variant, trial_count)
            }

            (RunnerState::AwaitingResponse, RunnerEvent::Response(label)) => {
                Ok(self.score(Some(label)))
            }

            (RunnerState::AwaitingResponse, RunnerEvent::Timeout) => {
                if self.response_remaining() != Some(Duration::ZERO) {
                    debug!("Timeout arrived before the response deadline; ignoring");
                    return Ok(RunnerOutput::Ignored);
                }
                Ok(self.score(None))
            }

            (RunnerState::Feedback, RunnerEvent::DwellElapsed) => {
                if self.dwell_remaining().is_some() {
                    debug!("Dwell-elapsed arrived before the feedback deadline; ignoring");
                    return Ok(RunnerOutput::Ignored);
                }
                self.advance()
            }

            (state, RunnerEvent::Response(label)) => {
                warn!(
                    "Ignoring late or duplicate response '{}' while runner is {}",
                    label,
                    state.name()
                );
                Ok(RunnerOutput::Ignored)
            }

            (state, event) => {
                debug!("Ignoring {} while runner is {}", event.name(), state.name());
                Ok(RunnerOutput::Ignored)
            }
        }
    }

    fn start_session(
        &mut self,
        variant: Variant,
        trial_count: usize,
    ) -> Result<RunnerOutput, StroopError> {
        self.config.validate()?;
        let stimuli = generate(variant, trial_count, &self.config, &mut self.rng)?;
        if stimuli.is_empty() {
            return Err(StroopError::EmptyStimuli {
                variant,
                requested: trial_count,
            });
        }

        info!("Starting {} session with {} trials", variant, stimuli.len());
        self.session = Some(SessionState::new(variant, stimuli));
        self.present()
    }

    fn present(&mut self) -> Result<RunnerOutput, StroopError> {
        self.state = RunnerState::Presenting;
        let Some(session) = self.session.as_mut() else {
            return Err(StroopError::InvalidTransition {
                event: "present",
                state: RunnerState::Presenting.name(),
            });
        };
        let Some(spec) = session.stimuli.get(session.index) else {
            return Err(StroopError::InvalidTransition {
                event: "present",
                state: RunnerState::Presenting.name(),
            });
        };

        let options = trial_options(spec, &mut self.rng);
        let now_ns = self.timer.now();
        let presentation = Presentation {
            index: session.index,
            total: session.stimuli.len(),
            variant: spec.variant,
            task_type: spec.task_type,
            payload: spec.payload.clone(),
            options,
        };
        session.current = Some(ActiveTrial {
            index: session.index,
            timestamps: TrialTimestamps {
                presented: now_ns,
                ..TrialTimestamps::default()
            },
        });

        debug!("Trial {} presented at {} ns", presentation.index, now_ns);
        self.state = RunnerState::AwaitingResponse;
        Ok(RunnerOutput::Present(presentation))
    }

    /// Scores the current trial; `None` is a timeout
    fn score(&mut self, response: Option<String>) -> RunnerOutput {
        self.state = RunnerState::Scoring;
        let now_ns = self.timer.now();
        let timeout = self.config.response_timeout();
        let dwell = self.config.feedback_dwell();

        let Some(session) = self.session.as_mut() else {
            self.state = RunnerState::Idle;
            return RunnerOutput::Ignored;
        };
        let (Some(spec), Some(trial)) = (session.stimuli.get(session.index), session.current.as_mut())
        else {
            self.state = RunnerState::Idle;
            return RunnerOutput::Ignored;
        };

        let rt_ns = now_ns.saturating_sub(trial.timestamps.presented);
        let late = timeout.is_some_and(|t| Duration::from_nanos(rt_ns) >= t);
        let response = response.filter(|_| !late);
        let timed_out = response.is_none();
        let correct = response.as_deref() == Some(spec.correct_answer);
        let rt_ms = ns_to_ms(rt_ns);

        if timed_out {
            info!("Trial {} timed out after {:.3} ms", trial.index, rt_ms);
        } else {
            info!("Response recorded at {}, RT = {:.3} ms", now_ns, rt_ms);
        }

        session.log.push(ResponseRecord {
            trial_index: trial.index,
            condition: spec.condition,
            task_type: spec.task_type,
            response,
            correct,
            rt_ms,
            correct_answer: spec.correct_answer.to_string(),
            timed_out,
        });

        let dwell_ns = u64::try_from(dwell.as_nanos()).unwrap_or(u64::MAX);
        trial.timestamps.feedback_until = Some(now_ns.saturating_add(dwell_ns));
        let feedback = Feedback {
            index: trial.index,
            correct,
            timed_out,
            rt_ms,
            correct_answer: spec.correct_answer,
        };

        self.state = RunnerState::Feedback;
        RunnerOutput::Feedback(feedback)
    }

    fn advance(&mut self) -> Result<RunnerOutput, StroopError> {
        let Some(session) = self.session.as_mut() else {
            self.state = RunnerState::Idle;
            return Ok(RunnerOutput::Ignored);
        };
        session.current = None;
        session.index += 1;

        if session.index < session.total() {
            return self.present();
        }

        self.state = RunnerState::Complete;
        let Some(session) = self.session.take() else {
            self.state = RunnerState::Idle;
            return Ok(RunnerOutput::Ignored);
        };
        let summary = summarize(&session.log, session.variant);
        info!(
            "Completed {} session: accuracy {:.1}%, mean RT {:.0} ms",
            session.variant, summary.accuracy, summary.mean_rt_ms
        );
        // Summarized; the runner can take the next Start
        self.state = RunnerState::Idle;
        Ok(RunnerOutput::Complete(Completion {
            variant: session.variant,
            title: session.variant.title(),
            summary,
        }))
    }

    /// Discards the running session, pending deadlines included
    fn abort(&mut self) -> RunnerOutput {
        if let Some(session) = self.session.take() {
            info!(
                "Aborting {} session at trial {}; discarding {} records",
                session.variant,
                session.index + 1,
                session.log.len()
            );
        }
        self.state = RunnerState::Idle;
        RunnerOutput::Aborted
    }
}
