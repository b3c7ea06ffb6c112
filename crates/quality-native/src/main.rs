use clap::Parser;
use quality_core::QualityTier;

mod profiles;
mod sim;

use profiles::Profile;
use sim::{simulate, SimOptions};

#[derive(Parser, Debug)]
#[command(name = "quality-sim")]
#[command(about = "Replay a synthetic frame-time trace through the adaptive quality controller")]
#[command(version)]
struct Args {
    /// Frame-rate shape to replay
    #[arg(short, long, value_enum, default_value_t = Profile::Degrade)]
    profile: Profile,

    /// Starting tier (low, medium, high)
    #[arg(short, long, default_value = "high")]
    initial: QualityTier,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    frames: u32,

    /// Seed for frame-time jitter
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Relative frame-time jitter (0.1 = ±10%)
    #[arg(long, default_value_t = 0.0)]
    jitter: f64,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    if !args.jitter.is_finite() || args.jitter < 0.0 {
        anyhow::bail!("--jitter must be a non-negative number, got {}", args.jitter);
    }
    log::info!(
        "simulating {} frames of {:?} from {} (seed {}, jitter {})",
        args.frames,
        args.profile,
        args.initial,
        args.seed,
        args.jitter
    );

    let report = simulate(&SimOptions {
        profile: args.profile,
        initial: args.initial,
        frames: args.frames,
        seed: args.seed,
        jitter: args.jitter,
    });

    for (frame, change) in &report.changes {
        println!(
            "frame {:>6}: {} -> {} (avg {:.1} fps)",
            frame, change.from, change.to, change.average_fps
        );
    }
    println!();
    println!(
        "{} frames, {:.1}s simulated, {} change(s), final tier {}",
        report.frames,
        report.simulated.as_secs_f64(),
        report.changes.len(),
        report.final_tier
    );
    for tier in QualityTier::ALL {
        let n = report.frames_per_tier.get(&tier).copied().unwrap_or(0);
        let share = if report.frames == 0 {
            0.0
        } else {
            100.0 * n as f64 / report.frames as f64
        };
        println!("  {:<6} {:>7} frames ({:>5.1}%)", tier, n, share);
    }
    Ok(())
}
