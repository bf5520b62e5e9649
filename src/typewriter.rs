//! Character-by-character text reveal.
//!
//! [`Typewriter`] is a small state machine that knows nothing about real
//! timers. It reports the timer it currently needs through
//! [`Typewriter::timer`] and moves forward one step each time the caller
//! reports that timer as fired via [`Typewriter::fire`]. The browser driver
//! maps that onto a single cancellable gloo timer; tests drive it with
//! [`Typewriter::advance`].
//!
//! ```text
//! Pending --delay--> Revealing(1) --tick--> ... Revealing(n) --tick--> Complete
//!    \__________ cancel() before completion __________/--> Cancelled
//! ```
//!
//! The tick that reveals the last character also completes the run, so
//! `is_complete` holds exactly when every character is visible.

use regex::Regex;
use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_SPEED_MS: i32 = 50;

/// Tick interval used when the configured speed is zero or negative: one
/// display frame.
pub const MIN_TICK_MS: u32 = 16;

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterConfig {
    pub text: String,
    pub delay_seconds: f64,
    pub speed_ms: i32,
    pub highlight: Option<String>,
}

impl TypewriterConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay_seconds: 0.0,
            speed_ms: DEFAULT_SPEED_MS,
            highlight: None,
        }
    }

    pub fn with_delay(mut self, seconds: f64) -> Self {
        self.delay_seconds = seconds;
        self
    }

    pub fn with_speed(mut self, millis_per_char: i32) -> Self {
        self.speed_ms = millis_per_char;
        self
    }

    pub fn with_highlight(mut self, name: impl Into<String>) -> Self {
        self.highlight = Some(name.into());
        self
    }

    pub fn delay_ms(&self) -> u32 {
        if !self.delay_seconds.is_finite() || self.delay_seconds <= 0.0 {
            return 0;
        }

        (self.delay_seconds * 1_000.0).round().min(f64::from(u32::MAX)) as u32
    }

    pub fn tick_ms(&self) -> u32 {
        u32::try_from(self.speed_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .unwrap_or(MIN_TICK_MS)
    }
}

/// Run of visible text, either plain or part of the highlighted name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }

    fn highlighted(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: true,
        }
    }
}

/// Case-sensitive matcher for a name whose words may be separated by any
/// amount of whitespace, including none.
#[derive(Clone, Debug)]
pub struct Highlight {
    pattern: Regex,
}

impl Highlight {
    /// Returns `Ok(None)` for a blank name.
    pub fn new(name: &str) -> Result<Option<Self>> {
        let words: Vec<String> = name.split_whitespace().map(regex::escape).collect();
        if words.is_empty() {
            return Ok(None);
        }

        let pattern = Regex::new(&words.join(r"\s*")).map_err(|source| Error::Highlight {
            name: name.to_string(),
            source,
        })?;

        Ok(Some(Self { pattern }))
    }

    pub fn segments(&self, text: &str) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = 0;

        for found in self.pattern.find_iter(text) {
            if found.start() > cursor {
                segments.push(Segment::plain(&text[cursor..found.start()]));
            }
            segments.push(Segment::highlighted(found.as_str()));
            cursor = found.end();
        }

        if cursor < text.len() {
            segments.push(Segment::plain(&text[cursor..]));
        }

        segments
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Revealing { next: usize },
    Complete,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    Once(u32),
    Every(u32),
}

impl Timer {
    pub fn period_ms(self) -> u32 {
        match self {
            Self::Once(ms) | Self::Every(ms) => ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// The start delay elapsed and reveal ticks begin.
    Started,
    /// A prefix of this many characters is now visible.
    Revealed(usize),
    /// The whole text is visible. For non-empty text this step revealed the
    /// last character.
    Completed,
}

/// Snapshot handed to the view layer after every step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypewriterState {
    pub revealed_count: usize,
    pub is_complete: bool,
    pub segments: Vec<Segment>,
}

impl TypewriterState {
    pub fn visible_text(&self) -> String {
        self.segments.iter().map(|segment| segment.text.as_str()).collect()
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    // boundaries[n] is the byte length of the n-character prefix.
    boundaries: Vec<usize>,
    highlight: Option<Highlight>,
    delay_ms: u32,
    tick_ms: u32,
    phase: Phase,
    revealed: usize,
    carry_ms: u64,
}

impl Typewriter {
    pub fn new(config: &TypewriterConfig) -> Result<Self> {
        let highlight = match config.highlight.as_deref() {
            Some(name) => Highlight::new(name)?,
            None => None,
        };

        let boundaries = std::iter::once(0)
            .chain(config.text.char_indices().map(|(at, ch)| at + ch.len_utf8()))
            .collect();

        Ok(Self {
            text: config.text.clone(),
            boundaries,
            highlight,
            delay_ms: config.delay_ms(),
            tick_ms: config.tick_ms(),
            phase: Phase::Pending,
            revealed: 0,
            carry_ms: 0,
        })
    }

    /// Length of the source text in characters.
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.boundaries[self.revealed]]
    }

    pub fn segments(&self) -> Vec<Segment> {
        let visible = self.visible();
        if visible.is_empty() {
            return Vec::new();
        }

        match &self.highlight {
            Some(highlight) => highlight.segments(visible),
            None => vec![Segment::plain(visible)],
        }
    }

    pub fn state(&self) -> TypewriterState {
        TypewriterState {
            revealed_count: self.revealed,
            is_complete: self.is_complete(),
            segments: self.segments(),
        }
    }

    /// Timer the driver must have armed right now, if any.
    pub fn timer(&self) -> Option<Timer> {
        match self.phase {
            Phase::Pending => Some(Timer::Once(self.delay_ms)),
            Phase::Revealing { .. } => Some(Timer::Every(self.tick_ms)),
            Phase::Complete | Phase::Cancelled => None,
        }
    }

    /// Handles one firing of the current timer.
    pub fn fire(&mut self) -> Option<Step> {
        let step = match self.phase {
            Phase::Pending if self.is_empty() => {
                self.phase = Phase::Complete;
                Step::Completed
            }
            Phase::Pending => {
                self.phase = Phase::Revealing { next: 1 };
                Step::Started
            }
            Phase::Revealing { next } => {
                self.revealed = next;
                if next == self.len() {
                    self.phase = Phase::Complete;
                    Step::Completed
                } else {
                    self.phase = Phase::Revealing { next: next + 1 };
                    Step::Revealed(next)
                }
            }
            Phase::Complete | Phase::Cancelled => return None,
        };

        if !matches!(step, Step::Revealed(_)) {
            debug!(?step, chars = self.len(), "typewriter transition");
        }

        Some(step)
    }

    /// Stops the machine for good. Later `fire`/`advance` calls are no-ops.
    /// A completed run stays complete.
    pub fn cancel(&mut self) {
        self.carry_ms = 0;
        if matches!(self.phase, Phase::Complete | Phase::Cancelled) {
            return;
        }
        debug!(revealed = self.revealed, chars = self.len(), "typewriter cancelled");
        self.phase = Phase::Cancelled;
    }

    /// Simulates `elapsed_ms` of wall time, firing every timer that falls due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<Step> {
        let mut budget = self.carry_ms + elapsed_ms;
        let mut steps = Vec::new();

        while let Some(timer) = self.timer() {
            let period = u64::from(timer.period_ms());
            if budget < period {
                break;
            }
            budget -= period;
            steps.extend(self.fire());
        }

        self.carry_ms = if self.timer().is_some() { budget } else { 0 };
        steps
    }
}
