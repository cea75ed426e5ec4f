//! Command dispatch and execution handlers.
//!
//! Each handler parses its color arguments, runs one `chroma_core` operation
//! and returns the resulting colors. Printing is done in one place so that
//! every command supports `--json`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chroma_core::{
    Brightness, Color, FrameBuffer, Point, ScreenSampler, blend_color, blend_color_with_alpha,
    color_from_hex, insert_color, known_color_names, opacity_mix, overlay_mix, random_color,
    random_color_with, soft_light_mix, step_color, tint_color, transition_color,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

use super::args::*;

/// Dispatch a CLI command to its handler and print the result to stdout.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_command(&cli.command, cli.json, &mut out)
}

/// Run a command, writing its output to `out`.
pub fn run_command<W: Write>(command: &Commands, json: bool, out: &mut W) -> Result<()> {
    match command {
        Commands::Parse(args) => write_color(out, handle_parse(args)?, json),
        Commands::Blend(args) => write_color(out, handle_blend(args)?, json),
        Commands::Insert(args) => write_color(out, handle_insert(args)?, json),
        Commands::Mix(args) => write_color(out, handle_mix(args)?, json),
        Commands::Step(args) => write_color(out, handle_step(args)?, json),
        Commands::Tint(args) => write_color(out, handle_tint(args)?, json),
        Commands::Transition(args) => write_color(out, handle_transition(args)?, json),
        Commands::Random(args) => write_colors(out, &handle_random(args), json),
        Commands::Names => write_names(out, json),
        Commands::Sample(args) => write_color(out, handle_sample(args)?, json),
    }
}

/// Parse a color argument, naming the offending input on failure.
fn parse_color(input: &str) -> Result<Color> {
    color_from_hex(None, input).with_context(|| format!("Invalid color '{input}'"))
}

fn handle_parse(args: &ParseArgs) -> Result<Color> {
    color_from_hex(args.alpha, &args.color)
        .with_context(|| format!("Invalid color '{}'", args.color))
}

fn handle_blend(args: &BlendArgs) -> Result<Color> {
    let back = parse_color(&args.back)?;
    let fore = parse_color(&args.fore)?;
    Ok(match args.alpha {
        Some(alpha) => blend_color(back, fore, alpha),
        None => blend_color_with_alpha(back, fore),
    })
}

fn handle_insert(args: &InsertArgs) -> Result<Color> {
    Ok(insert_color(parse_color(&args.base)?, parse_color(&args.insert)?))
}

fn handle_mix(args: &MixArgs) -> Result<Color> {
    let base = parse_color(&args.base)?;
    let blend = parse_color(&args.blend)?;
    let mix = match args.mode {
        MixMode::Opacity => opacity_mix,
        MixMode::Overlay => overlay_mix,
        MixMode::SoftLight => soft_light_mix,
    };
    Ok(mix(base, blend, args.opacity))
}

fn handle_step(args: &StepArgs) -> Result<Color> {
    Ok(step_color(parse_color(&args.color)?, args.percent))
}

fn handle_tint(args: &TintArgs) -> Result<Color> {
    let direction: Brightness = args
        .direction
        .parse()
        .with_context(|| format!("Invalid tint direction '{}'", args.direction))?;
    Ok(tint_color(direction, parse_color(&args.color)?, args.amount))
}

fn handle_transition(args: &TransitionArgs) -> Result<Color> {
    let begin = parse_color(&args.begin)?;
    let end = parse_color(&args.end)?;
    Ok(transition_color(args.progress, begin, end))
}

fn handle_random(args: &RandomArgs) -> Vec<Color> {
    match args.seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..args.count).map(|_| random_color_with(&mut rng)).collect()
        }
        None => (0..args.count).map(|_| random_color()).collect(),
    }
}

fn handle_sample(args: &SampleArgs) -> Result<Color> {
    let mut surface = gradient_surface(args.width, args.height);
    let at = Point::new(args.x, args.y);
    tracing::debug!(%at, width = args.width, height = args.height, "sampling gradient surface");

    let color = if args.cursor {
        surface.set_pointer(Some(at));
        ScreenSampler::new(surface).sample_cursor()
    } else {
        ScreenSampler::new(surface).sample(at)
    };
    color.with_context(|| format!("Failed to sample pixel at {at}"))
}

/// Builds a surface running red along X and green along Y over a mid blue.
pub fn gradient_surface(width: u32, height: u32) -> FrameBuffer {
    let ramp = |pos: i32, len: u32| {
        let span = u64::from(len.saturating_sub(1).max(1));
        (pos as u64 * 255 / span) as u8
    };
    FrameBuffer::from_fn(width, height, |p| {
        Color::rgb(ramp(p.x, width), ramp(p.y, height), 128)
    })
}

// ============================================================================
// Output
// ============================================================================

/// Text form of a color: hex followed by its ARGB components.
pub fn format_color(color: Color) -> String {
    format!(
        "{}  argb({}, {}, {}, {})",
        color.to_hex(),
        color.a,
        color.r,
        color.g,
        color.b
    )
}

/// JSON form of a color.
pub fn color_json(color: Color) -> Value {
    json!({
        "hex": color.to_hex(),
        "html": color.to_html(),
        "a": color.a,
        "r": color.r,
        "g": color.g,
        "b": color.b,
    })
}

fn write_color<W: Write>(out: &mut W, color: Color, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&color_json(color))?)?;
    } else {
        writeln!(out, "{}", format_color(color))?;
    }
    Ok(())
}

fn write_colors<W: Write>(out: &mut W, colors: &[Color], json: bool) -> Result<()> {
    if json {
        let list: Vec<Value> = colors.iter().copied().map(color_json).collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&list)?)?;
    } else {
        for &color in colors {
            writeln!(out, "{}", format_color(color))?;
        }
    }
    Ok(())
}

fn write_names<W: Write>(out: &mut W, json: bool) -> Result<()> {
    let names = known_color_names();
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?;
    } else {
        for name in names {
            writeln!(out, "{name}")?;
        }
    }
    Ok(())
}
