// main.rs
//
// Hyp{o,er}trochoid GIF animation generator: validates the command line,
// renders the sweep, and writes a looping GIF.

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use trochogen::animation::Animation;
use trochogen::canvas::CanvasConfig;
use trochogen::trochoid::{CurveMode, Trochoid};

const USAGE: &str = "\
trochogen: hyp{o,er}trochoid GIF animation generator

Usage: trochogen [OPTIONS] <OUTFILE>

Arguments:
  <OUTFILE>  Output GIF path (overwritten if it exists)

Options:
  -W, --width <PX>        Image width in pixels [default: 500]
  -H, --height <PX>       Image height in pixels [default: 500]
  -R, --fixradius <N>     Radius of the fixed circle [default: 150]
  -r, --rollradius <N>    Radius of the rolling circle [default: 40]
  -p, --pointradius <N>   Distance of the locus point from the centre of the
                          rolling circle [default: 40]
  -q, --pointangle <DEG>  Angle of the locus point from the contact point of
                          the two circles [default: 0]
  -s, --step <DEG>        Degrees of sweep between frames [default: 5]
  -o, --hypo              Roll inside the fixed circle (hypotrochoid) instead
                          of outside (epitrochoid)
  -h, --help              Print this help message";

struct Args {
    width: u32,
    height: u32,
    fixed_radius: u32,
    rolling_radius: u32,
    point_offset: u32,
    phase: i32,
    step: u32,
    hypo: bool,
    outfile: PathBuf,
}

fn value<T>(argv: &mut impl Iterator<Item = String>, flag: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = argv
        .next()
        .with_context(|| format!("option {flag} expects a value"))?;
    raw.parse()
        .map_err(|e| anyhow::anyhow!("invalid value {raw:?} for {flag}: {e}"))
}

/// Parses the command line. `Ok(None)` means help was requested.
fn parse_args() -> Result<Option<Args>> {
    let mut width = 500;
    let mut height = 500;
    let mut fixed_radius = 150;
    let mut rolling_radius = 40;
    let mut point_offset = 40;
    let mut phase = 0;
    let mut step = 5;
    let mut hypo = false;
    let mut outfile = None;

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "-o" | "--hypo" => hypo = true,
            "-W" | "--width" => width = value(&mut argv, &arg)?,
            "-H" | "--height" => height = value(&mut argv, &arg)?,
            "-R" | "--fixradius" => fixed_radius = value(&mut argv, &arg)?,
            "-r" | "--rollradius" => rolling_radius = value(&mut argv, &arg)?,
            "-p" | "--pointradius" => point_offset = value(&mut argv, &arg)?,
            "-q" | "--pointangle" => phase = value(&mut argv, &arg)?,
            "-s" | "--step" => step = value(&mut argv, &arg)?,
            _ if arg.starts_with('-') => bail!("unknown option {arg}\n\n{USAGE}"),
            _ if outfile.is_some() => bail!("unexpected argument {arg}\n\n{USAGE}"),
            _ => outfile = Some(PathBuf::from(arg)),
        }
    }

    let Some(outfile) = outfile else {
        bail!("missing output filename\n\n{USAGE}");
    };
    Ok(Some(Args {
        width,
        height,
        fixed_radius,
        rolling_radius,
        point_offset,
        phase,
        step,
        hypo,
        outfile,
    }))
}

fn run() -> Result<()> {
    let Some(args) = parse_args()? else {
        println!("{USAGE}");
        return Ok(());
    };

    let config = CanvasConfig::new(args.width, args.height)?;
    let mode = if args.hypo {
        CurveMode::Hypo
    } else {
        CurveMode::Epi
    };
    let curve = Trochoid::new(
        args.fixed_radius,
        args.rolling_radius,
        args.point_offset,
        args.phase,
        mode,
    )?;

    let sweep = curve.sweep_degrees();
    info!(sweep, step = args.step, ?mode, "rendering sweep");
    let animation = Animation::render(config, &curve, sweep, args.step)?;
    let frames = animation.frame_count();
    animation
        .write_gif(&args.outfile)
        .with_context(|| format!("writing {}", args.outfile.display()))?;

    eprintln!("Wrote {} frames to {}", frames, args.outfile.display());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
