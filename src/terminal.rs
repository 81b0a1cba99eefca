use cogex_core::{Digit, Direction, DisplayPayload, FontSize, InkColor, Stimulus, Variant};
use cogex_experiment::{Feedback, Presentation, Presenter, ResponseEvent, ResponseSource};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
/// Width of the box the spatial variant places its word in
const FIELD_WIDTH: usize = 36;

fn paint(ink: InkColor, text: &str) -> String {
    let [r, g, b, _] = ink.rgba();
    format!("\x1b[1;38;2;{r};{g};{b}m{text}{RESET}")
}

fn digit(d: Digit) -> String {
    match d.size {
        FontSize::Large => format!("{BOLD}[ {} ]{RESET}", d.value),
        FontSize::Small => format!("{DIM}{}{RESET}", d.value),
    }
}

/// Lines that draw one stimulus
pub fn render_payload(payload: &DisplayPayload) -> Vec<String> {
    match payload {
        DisplayPayload::ColorWord { .. } | DisplayPayload::AffectiveWord { .. } => {
            match (payload.text(), payload.ink()) {
                (Some(text), Some(ink)) => vec![format!("    {}", paint(ink, text))],
                _ => Vec::new(),
            }
        }
        DisplayPayload::CuedColorWord { cue, word, ink } => vec![
            format!("    Task: {BOLD}{}{RESET}", cue.cue()),
            format!("    {}", paint(*ink, word.word())),
        ],
        DisplayPayload::DigitPair { left, right } => {
            vec![format!("    {}        {}", digit(*left), digit(*right))]
        }
        DisplayPayload::PlacedWord { word, zone } => {
            let text = word.word();
            let pad = FIELD_WIDTH.saturating_sub(text.len());
            let placed = match zone {
                Direction::Left => format!("{text}{}", " ".repeat(pad)),
                Direction::Right => format!("{}{text}", " ".repeat(pad)),
                Direction::Up | Direction::Down => {
                    format!("{}{text}{}", " ".repeat(pad / 2), " ".repeat(pad - pad / 2))
                }
            };
            let blank = " ".repeat(FIELD_WIDTH);
            let rows = match zone {
                Direction::Up => [placed, blank.clone(), blank],
                Direction::Down => [blank.clone(), blank, placed],
                Direction::Left | Direction::Right => [blank.clone(), placed, blank],
            };
            let border = format!("    +{}+", "-".repeat(FIELD_WIDTH));
            let mut lines = vec![border.clone()];
            lines.extend(rows.into_iter().map(|row| format!("    |{row}|")));
            lines.push(border);
            lines
        }
    }
}

pub fn render_options(options: &[&str]) -> String {
    options
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}) {}", i + 1, label))
        .collect::<Vec<_>>()
        .join("   ")
}

/// Maps a typed line to a response: option number, option label, or `q`
pub fn parse_response(line: &str, options: &[&'static str]) -> Option<ResponseEvent> {
    let input = line.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }
    if input == "q" {
        return Some(ResponseEvent::Abort);
    }
    if let Ok(number) = input.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .map(|label| ResponseEvent::Response(label.to_string()));
    }
    options
        .iter()
        .find(|label| **label == input)
        .map(|label| ResponseEvent::Response(label.to_string()))
}

/// Maps a typed line on the selection menu to a variant
pub fn parse_variant(line: &str) -> Option<Variant> {
    let input = line.trim();
    if let Ok(number) = input.parse::<usize>() {
        return number.checked_sub(1).and_then(|i| Variant::ALL.get(i)).copied();
    }
    input.parse().ok()
}

/// Prints trials, feedback and menus to a terminal stream
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    pub fn show_menu(&mut self) {
        self.emit("Select a Stroop variant:");
        for (i, variant) in Variant::ALL.iter().enumerate() {
            self.emit(&format!("  {}) {:<10} {}", i + 1, variant.as_str(), variant.title()));
        }
        self.emit("Type a number or name, q to quit.");
    }

    pub fn show_instructions(&mut self, variant: Variant, trials: usize) {
        self.emit("");
        self.emit(&format!("{BOLD}{}{RESET}", variant.title()));
        self.emit(variant.instructions());
        self.emit(&format!(
            "{trials} trials. Answer with an option number or label; q returns to the menu."
        ));
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, presentation: &Presentation) {
        self.emit("");
        self.emit(&format!("Trial {}/{}", presentation.index + 1, presentation.total));
        for line in render_payload(&presentation.payload) {
            self.emit(&line);
        }
        self.emit(&render_options(&presentation.options));
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        let line = if feedback.timed_out {
            format!("Too slow. The answer was {}.", feedback.correct_answer)
        } else if feedback.correct {
            format!("Correct ({:.0} ms)", feedback.rt_ms)
        } else {
            format!(
                "Incorrect, the answer was {} ({:.0} ms)",
                feedback.correct_answer, feedback.rt_ms
            )
        };
        self.emit(&line);
    }
}

/// Line-based responses read from stdin on a background thread
pub struct StdinResponses {
    lines: Receiver<String>,
}

impl StdinResponses {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        warn!("Failed to read stdin: {}", e);
                        break;
                    }
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(lines: Receiver<String>) -> Self {
        Self { lines }
    }

    /// Blocks for the next line; `None` once input is closed
    pub fn next_line(&self) -> Option<String> {
        self.lines.recv().ok()
    }

    /// Drops input typed before the stimulus appeared
    fn discard_pending(&self) {
        while let Ok(line) = self.lines.try_recv() {
            debug!("Discarding input typed between trials: '{}'", line);
        }
    }
}

impl ResponseSource for StdinResponses {
    fn await_response(
        &mut self,
        presentation: &Presentation,
        timeout: Option<Duration>,
    ) -> ResponseEvent {
        self.discard_pending();
        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            let line = match deadline {
                None => match self.lines.recv() {
                    Ok(line) => line,
                    Err(_) => return ResponseEvent::Abort,
                },
                Some(deadline) => {
                    match self
                        .lines
                        .recv_timeout(deadline.saturating_duration_since(Instant::now()))
                    {
                        Ok(line) => line,
                        Err(RecvTimeoutError::Timeout) => return ResponseEvent::Timeout,
                        Err(RecvTimeoutError::Disconnected) => return ResponseEvent::Abort,
                    }
                }
            };
            match parse_response(&line, &presentation.options) {
                Some(event) => return event,
                None => eprintln!(
                    "Unknown option '{}'. Type a number, a label, or q.",
                    line.trim()
                ),
            }
        }
    }
}
