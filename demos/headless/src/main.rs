//! headless: run a flock in real time without a window.
//!
//! Assembles the world from command-line records, a TOML scenario file, and
//! seeded generation, then drives it with the real-time scheduler.  A
//! `DisplaySnapshot` receives every render hand-off, and `--output` adds a
//! CSV trajectory writer alongside it.
//!
//! ```text
//! headless --random-lights 4 --random-vehicles 40 --seconds 5 --output ./out
//! headless --add-light "0 0 3" --add-vehicle "0 5 0 1 master_ccw" --random-vehicles 20
//! ```

mod cli;

#[cfg(test)]
mod tests;

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use bv_core::SimTime;
use bv_display::DisplaySnapshot;
use bv_output::{CsvWriter, TrackObserver};
use bv_sim::{Flock, FlockObserver, Scheduler, SchedulerBuilder, StopToken, SystemClock};

use cli::Args;

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let run_length = args.run_length()?;

    // Any scenario error aborts here, before the scheduler exists.
    let scenario = args.scenario_builder()?.build().context("building scenario")?;
    let flock = Flock::from(scenario).with_search(args.search());
    let mut scheduler = SchedulerBuilder::realtime(flock).build()?;
    let mut display = DisplaySnapshot::capture(scheduler.flock());

    let wall_start = Instant::now();
    let time = match &args.output {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let mut track = TrackObserver::new(writer);
            let time = drive(&mut scheduler, &mut (&mut display, &mut track), &args, run_length);
            if let Some(e) = track.take_error() {
                return Err(e).context("writing trajectories");
            }
            info!(frames = track.frames(), dir = %dir.display(), "trajectories written");
            time
        }
        None => drive(&mut scheduler, &mut display, &args, run_length),
    };

    report(&time, &display, wall_start.elapsed());
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run for `--ticks` ticks or `--seconds` of wall-clock time.
fn drive<O: FlockObserver>(
    scheduler: &mut Scheduler<SystemClock>,
    observer:  &mut O,
    args:      &Args,
    run_for:   Duration,
) -> SimTime {
    if let Some(n) = args.ticks {
        let time = scheduler.run_ticks(n, observer);
        observer.on_stop(time);
        return time;
    }

    let stop = StopToken::new();
    let timer = {
        let stop = stop.clone();
        thread::spawn(move || {
            thread::sleep(run_for);
            stop.stop();
        })
    };
    let time = scheduler.run(observer, &stop);
    let _ = timer.join();
    time
}

fn report(time: &SimTime, display: &DisplaySnapshot, wall: Duration) {
    println!();
    println!("=== Run complete ===");
    println!("  Wall time      : {:.3} s", wall.as_secs_f64());
    println!("  Ticks          : {}", time.tick.0);
    println!("  Simulated time : {:.3} s", time.simulated_secs());
    println!("  Frames         : {}", display.frames);
    println!("  Lights         : {}", display.lights.len());
    println!("  Vehicles       : {}", display.vehicles.len());

    for v in display.vehicles.iter().take(5) {
        println!(
            "    {:<14} pos=({:>8.3}, {:>8.3})  heading={:>6.1}°",
            v.id.to_string(),
            v.position.x,
            v.position.y,
            v.display_heading_degrees(),
        );
    }
    if display.vehicles.len() > 5 {
        println!("    … {} more", display.vehicles.len() - 5);
    }
}
