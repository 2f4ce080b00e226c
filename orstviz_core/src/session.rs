//! The step scheduler.
//!
//! A [`Session`] owns the array being sorted and at most one live [`Engine`]. It never sleeps:
//! whoever drives it (a terminal loop, a GUI timer, a test) calls [`Session::tick`] and waits
//! [`Session::delay`] before calling it again. Pausing or cancelling between two ticks is
//! observed at the top of the next one.
//!
//! ```
//! use orstviz_core::{Algorithm, RunState, Session, Tick};
//!
//! let mut session = Session::default();
//! session.set_array([5, 3, 8, 1]).unwrap();
//!
//! let mut tick = session.start(Algorithm::BubbleSort).unwrap();
//! while let Tick::Step(_) = tick {
//!     tick = session.tick();
//! }
//!
//! assert_eq!(session.state(), RunState::Completed);
//! assert_eq!(session.array(), [1, 3, 5, 8]);
//! assert_eq!(session.stats().comparisons, 6);
//! assert_eq!(session.stats().swaps, 4);
//! ```

use std::fmt;
use std::time::Duration;

use rand::Rng;

use crate::error::Action;
use crate::orst::{Algorithm, Engine, Highlights, Stats, Step};
use crate::{array, Error, Result};

/// The lifecycle of a sorting run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Completed,
    Cancelled,
}

impl RunState {
    /// Running or paused: a continuation is held.
    pub fn is_live(&self) -> bool {
        matches!(self, RunState::Running | RunState::Paused)
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::Completed => "completed",
            RunState::Cancelled => "cancelled",
        };
        f.write_str(state)
    }
}

/// Limits for the arrays and speeds a [`Session`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Fastest allowed delay between ticks, in milliseconds.
    pub min_delay: u64,
    /// Slowest allowed delay between ticks, in milliseconds.
    pub max_delay: u64,
    pub default_delay: u64,
    pub max_len: usize,
    pub min_value: u32,
    pub max_value: u32,
    /// Length of arrays made by [`Session::generate_array`].
    pub random_len: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_delay: 10,
            max_delay: 200,
            default_delay: 50,
            max_len: 20,
            min_value: 10,
            max_value: 300,
            random_len: 20,
        }
    }
}

impl SessionConfig {
    /// Puts `min_value` and `max_value` back in order if they were given the wrong way round.
    fn normalized(mut self) -> Self {
        if self.min_value > self.max_value {
            std::mem::swap(&mut self.min_value, &mut self.max_value);
        }
        self
    }

    fn clamp_delay(&self, delay: u64) -> u64 {
        delay.clamp(self.min_delay, self.max_delay.max(self.min_delay))
    }
}

/// Everything a renderer needs to draw one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub array: Vec<u32>,
    pub highlights: Highlights,
    pub stats: Stats,
    /// Steps taken in the current run, this one included.
    pub tick: usize,
}

/// What a call to [`Session::tick`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// One step was performed. Tick again after [`Session::delay`].
    Step(Frame),
    /// The run is complete: every index is settled and the array is sorted.
    Finished(Frame),
    /// Nothing was done because the session is not running.
    Halted(RunState),
}

/// A sorting session: the array, its original snapshot, the counters and the run state.
pub struct Session {
    config: SessionConfig,
    array: Vec<u32>,
    original: Vec<u32>,
    state: RunState,
    stats: Stats,
    delay: u64,
    algorithm: Option<Algorithm>,
    engine: Option<Box<dyn Engine<u32>>>,
    ticks: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("array", &self.array)
            .field("original", &self.original)
            .field("state", &self.state)
            .field("stats", &self.stats)
            .field("delay", &self.delay)
            .field("algorithm", &self.algorithm)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// An idle session with no array.
    pub fn new(config: SessionConfig) -> Self {
        let config = config.normalized();
        let delay = config.clamp_delay(config.default_delay);
        Self {
            config,
            array: Vec::new(),
            original: Vec::new(),
            state: RunState::Idle,
            stats: Stats::default(),
            delay,
            algorithm: None,
            engine: None,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The working array, as of the last tick.
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// The array as it was when it was set or generated.
    pub fn original(&self) -> &[u32] {
        &self.original
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// The algorithm of the current or last run.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Steps performed in the current or last run.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    /// Current speed in delay units (milliseconds).
    pub fn speed(&self) -> u64 {
        self.delay
    }

    /// How long the driver should wait before the next [`tick`](Self::tick).
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    /// Sets the delay between ticks, clamped to the configured range, and returns the value that
    /// was applied. Takes effect from the next wait on.
    pub fn set_speed(&mut self, delay: u64) -> u64 {
        self.delay = self.config.clamp_delay(delay);
        self.delay
    }

    /// Replaces the working array and its snapshot.
    pub fn set_array<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<i64>,
    {
        if self.state.is_live() {
            return Err(Error::AlreadyRunning);
        }

        let values = array::check(values, &self.config)?;
        self.install(values);
        Ok(())
    }

    /// Replaces the working array with a random one.
    pub fn generate_array<R>(&mut self, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        if self.state.is_live() {
            return Err(Error::AlreadyRunning);
        }

        let values = array::random(rng, &self.config);
        self.install(values);
        Ok(())
    }

    /// Sets the array from comma-separated text.
    ///
    /// Text that does not parse as integers is replaced by a random array and still reported as
    /// [`Error::InvalidArray`]. Parsed values that are out of range are rejected without touching
    /// the session.
    pub fn set_custom_array<R>(&mut self, input: &str, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        if self.state.is_live() {
            return Err(Error::AlreadyRunning);
        }

        match array::parse(input) {
            Ok(values) => self.set_array(values),
            Err(e) => {
                self.generate_array(rng)?;
                Err(e)
            }
        }
    }

    fn install(&mut self, values: Vec<u32>) {
        self.original = values.clone();
        self.array = values;
        self.stats = Stats::default();
        self.state = RunState::Idle;
        self.algorithm = None;
        self.engine = None;
        self.ticks = 0;
    }

    /// Starts sorting the working array and performs the first step right away.
    pub fn start(&mut self, algorithm: Algorithm) -> Result<Tick> {
        if self.state.is_live() {
            return Err(Error::AlreadyRunning);
        }
        if self.array.is_empty() {
            return Err(Error::NoArray);
        }

        self.stats = Stats::default();
        self.ticks = 0;
        self.algorithm = Some(algorithm);
        self.engine = Some(algorithm.engine());
        self.state = RunState::Running;

        Ok(self.tick())
    }

    /// Freezes the run. The continuation is kept and nothing more happens until
    /// [`resume`](Self::resume).
    pub fn pause(&mut self) -> Result<()> {
        self.transition(Action::Pause, RunState::Running)?;
        self.state = RunState::Paused;
        Ok(())
    }

    /// Continues a paused run and performs the next step right away.
    pub fn resume(&mut self) -> Result<Tick> {
        self.transition(Action::Resume, RunState::Paused)?;
        self.state = RunState::Running;
        Ok(self.tick())
    }

    /// Drops the continuation. The array is left as it is, which is a permutation of the array
    /// the run started with but not necessarily sorted.
    pub fn cancel(&mut self) -> Result<Frame> {
        if !self.state.is_live() {
            return Err(Error::InvalidStateTransition {
                action: Action::Cancel,
                state: self.state,
            });
        }

        if let Some(mut engine) = self.engine.take() {
            engine.abandon(&mut self.array);
        }
        self.state = RunState::Cancelled;
        Ok(self.frame(Highlights::default()))
    }

    fn transition(&self, action: Action, from: RunState) -> Result<()> {
        if self.state == from {
            Ok(())
        } else {
            Err(Error::InvalidStateTransition {
                action,
                state: self.state,
            })
        }
    }

    /// Performs one step of the live run, if it is running.
    pub fn tick(&mut self) -> Tick {
        if self.state != RunState::Running {
            return Tick::Halted(self.state);
        }

        let Some(engine) = self.engine.as_mut() else {
            return Tick::Halted(self.state);
        };

        match engine.step(&mut self.array, &mut self.stats) {
            Step::Progress(highlights) => {
                self.ticks += 1;
                Tick::Step(self.frame(highlights))
            }
            Step::Done => {
                self.engine = None;
                self.state = RunState::Completed;
                let everything = Highlights::default().settle(0..self.array.len());
                Tick::Finished(self.frame(everything))
            }
        }
    }

    fn frame(&self, highlights: Highlights) -> Frame {
        Frame {
            array: self.array.clone(),
            highlights,
            stats: self.stats,
            tick: self.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(session: &mut Session, mut tick: Tick) -> Frame {
        loop {
            match tick {
                Tick::Step(_) => tick = session.tick(),
                Tick::Finished(frame) => return frame,
                Tick::Halted(state) => panic!("halted while {state}"),
            }
        }
    }

    #[test]
    fn bubble_scenario() {
        let mut session = Session::default();
        session.set_array([5, 3, 8, 1]).unwrap();
        let first = session.start(Algorithm::BubbleSort).unwrap();
        let last = run_to_end(&mut session, first);

        assert_eq!(last.array, [1, 3, 5, 8]);
        assert_eq!(last.stats, Stats { comparisons: 6, swaps: 4 });
        assert_eq!(last.highlights.settled, [0, 1, 2, 3]);
        assert_eq!(session.state(), RunState::Completed);
        assert_eq!(session.original(), [5, 3, 8, 1]);
    }

    #[test]
    fn start_rejections_keep_state() {
        let mut session = Session::default();
        assert_eq!(session.start(Algorithm::QuickSort), Err(Error::NoArray));
        assert_eq!(session.state(), RunState::Idle);

        session.set_array([40, 30, 20]).unwrap();
        session.start(Algorithm::QuickSort).unwrap();
        assert_eq!(session.start(Algorithm::MergeSort), Err(Error::AlreadyRunning));
        assert_eq!(session.algorithm(), Some(Algorithm::QuickSort));
        assert_eq!(session.state(), RunState::Running);

        session.pause().unwrap();
        assert_eq!(session.start(Algorithm::MergeSort), Err(Error::AlreadyRunning));
        assert_eq!(session.set_array([10]), Err(Error::AlreadyRunning));
        assert_eq!(session.array().len(), 3);
        assert_eq!(session.state(), RunState::Paused);
    }

    #[test]
    fn invalid_transitions() {
        let mut session = Session::default();
        session.set_array([20, 10]).unwrap();

        assert_eq!(
            session.pause(),
            Err(Error::InvalidStateTransition {
                action: Action::Pause,
                state: RunState::Idle
            })
        );
        assert!(session.resume().is_err());
        assert!(session.cancel().is_err());

        session.start(Algorithm::SelectionSort).unwrap();
        assert!(session.resume().is_err());
        assert_eq!(session.state(), RunState::Running);
    }

    #[test]
    fn paused_session_does_not_tick() {
        let mut session = Session::default();
        session.set_array([50, 40, 30, 20]).unwrap();
        session.start(Algorithm::InsertionSort).unwrap();
        session.pause().unwrap();

        let before = (session.array().to_vec(), session.stats());
        assert_eq!(session.tick(), Tick::Halted(RunState::Paused));
        assert_eq!(session.tick(), Tick::Halted(RunState::Paused));
        assert_eq!((session.array().to_vec(), session.stats()), before);
    }

    #[test]
    fn cancel_stops_mutation() {
        let mut session = Session::default();
        session.set_array([50, 40, 30, 20, 10]).unwrap();
        session.start(Algorithm::BubbleSort).unwrap();
        session.tick();

        let frame = session.cancel().unwrap();
        assert_eq!(session.state(), RunState::Cancelled);
        assert_eq!(session.tick(), Tick::Halted(RunState::Cancelled));
        assert_eq!(session.array(), frame.array);
        assert_eq!(session.stats(), frame.stats);
    }

    #[test]
    fn restart_after_completion_resets_counters() {
        let mut session = Session::default();
        session.set_array([30, 20, 10]).unwrap();
        let first = session.start(Algorithm::SelectionSort).unwrap();
        run_to_end(&mut session, first);
        assert!(session.stats().swaps > 0);

        let first = session.start(Algorithm::SelectionSort).unwrap();
        let last = run_to_end(&mut session, first);
        assert_eq!(last.stats.swaps, 0);
        assert_eq!(last.stats.comparisons, 3);
    }

    #[test]
    fn speed_is_clamped() {
        let mut session = Session::default();
        assert_eq!(session.speed(), 50);
        assert_eq!(session.set_speed(5), 10);
        assert_eq!(session.set_speed(1000), 200);
        assert_eq!(session.set_speed(120), 120);
        assert_eq!(session.delay(), Duration::from_millis(120));
    }

    #[test]
    fn reversed_value_bounds_are_reordered() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut session = Session::new(SessionConfig {
            min_value: 300,
            max_value: 10,
            ..SessionConfig::default()
        });
        assert_eq!(
            (session.config().min_value, session.config().max_value),
            (10, 300)
        );

        let mut rng = StdRng::seed_from_u64(11);
        session.generate_array(&mut rng).unwrap();
        assert_eq!(session.array().len(), 20);
        session.set_array([10, 300]).unwrap();
    }

    #[test]
    fn single_element_finishes_on_first_tick() {
        for algorithm in Algorithm::ALL {
            let mut session = Session::default();
            session.set_array([42]).unwrap();
            let tick = session.start(algorithm).unwrap();
            assert!(matches!(tick, Tick::Finished(_)), "{algorithm}");
            assert_eq!(session.state(), RunState::Completed);
        }
    }
}
