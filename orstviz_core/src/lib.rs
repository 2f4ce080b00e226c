//! # Introduction
//!
//! An interruptible, step-driven sorting engine for visualizing the classic sorting algorithms.
//!
//! - [`orst`] holds the algorithms, each both as a plain [`Sorter`](orst::Sorter) and as an
//!   [`Engine`](orst::Engine) that advances by one comparison or swap per step.
//! - [`Session`] is the scheduler: it owns the array, the counters and the live engine, and
//!   supports pause, resume and cancel between any two steps.
//! - [`RunArgs`] and [`BenchArgs`] are the command line front ends. Install the `orstviz` crate
//!   and run `orstviz --help` to see what options are available.

pub mod array;
mod error;
pub mod orst;
pub mod render;
mod session;

pub use error::{Action, Error, Result};
pub use orst::{Algorithm, Highlights, Stats};
pub use session::{Frame, RunState, Session, SessionConfig, Tick};

use std::thread::sleep;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::builder::RangedU64ValueParser;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;

use render::{join, print_info, print_warning, Renderer};

/// Animate one sorting run in the terminal.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// The algorithm to run.
    #[arg(short, long, value_enum, default_value_t = Algorithm::BubbleSort)]
    algorithm: Algorithm,

    /// Comma-separated values to sort (e.g. 50, 100, 30). A random array is used when omitted.
    #[arg(long)]
    array: Option<String>,

    /// Delay between steps in milliseconds. Clamped to 10..=200.
    #[arg(short, long, default_value_t = 50)]
    speed: u64,

    /// Cancel the run after this many steps (at least 1).
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    cancel_after: Option<usize>,

    /// Pause the run after this many steps (at least 1).
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pause_after: Option<usize>,

    /// How long a pause lasts, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pause_for: u64,

    /// Seed for the random array.
    #[arg(long)]
    seed: Option<u64>,
}

/// Count the comparisons and swaps of every algorithm on the same array.
#[derive(Debug, Args)]
pub struct BenchArgs {
    /// Comma-separated values to sort. A random array is used when omitted.
    #[arg(long)]
    array: Option<String>,

    /// Seed for the random array.
    #[arg(long)]
    seed: Option<u64>,
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fills `session` from the command line input, falling back to a random array the way the
/// custom input box does.
fn load(session: &mut Session, input: Option<&str>, rng: &mut StdRng) -> anyhow::Result<()> {
    match input {
        None => session
            .generate_array(rng)
            .context("Failed to generate an array")?,
        Some(text) => {
            if let Err(e) = session.set_custom_array(text, rng) {
                if session.array().is_empty() {
                    bail!(e);
                }
                print_warning("Using a random array instead", e);
            }
        }
    }

    Ok(())
}

impl RunArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let mut rng = rng(self.seed);
        let mut session = Session::default();
        load(&mut session, self.array.as_deref(), &mut rng)?;

        let speed = session.set_speed(self.speed);
        print_info("Algorithm", self.algorithm);
        print_info("Speed", format!("{speed} ms per step"));
        print_info("Original Arr", join(session.original()));

        let renderer = Renderer::new(self.algorithm, session.config().max_value)?;
        let mut tick = session
            .start(self.algorithm)
            .context("Failed to start sorting")?;

        loop {
            match tick {
                Tick::Step(frame) => {
                    renderer.draw(&frame);

                    if self.cancel_after == Some(frame.tick) {
                        sleep(session.delay());
                        let frame = session.cancel()?;
                        renderer.draw(&frame);
                        break;
                    }

                    if self.pause_after == Some(frame.tick) {
                        session.pause()?;
                        sleep(Duration::from_millis(self.pause_for));
                        tick = session.resume()?;
                        continue;
                    }

                    sleep(session.delay());
                    tick = session.tick();
                }
                Tick::Finished(frame) => {
                    renderer.draw(&frame);
                    break;
                }
                Tick::Halted(_) => break,
            }
        }
        renderer.finish();

        print_info("Current Arr", join(session.array()));
        print_info("Run", session.state());
        print_info("Steps", session.ticks());
        print_info("Comparisons", session.stats().comparisons);
        print_info("Swaps", session.stats().swaps);

        Ok(())
    }
}

impl BenchArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let mut rng = rng(self.seed);
        let mut session = Session::default();
        load(&mut session, self.array.as_deref(), &mut rng)?;

        let values = session.original().to_vec();
        print_info("Original Arr", join(&values));

        let rows = orst::benchmark::run_bench(&values);
        orst::benchmark::print_bench(&values, &rows);

        Ok(())
    }
}
