use clap::Parser;
use room_layout_generator::{generate_layout, LayoutConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;

/// Generates a room layout and prints what a renderer would draw.
#[derive(Parser, Debug)]
struct Args {
    /// RON file with a layout config; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    /// Number of connected-room attempts
    #[arg(long)]
    rooms: Option<u32>,
    /// Dump the rooms as RON instead of a summary
    #[arg(long)]
    ron: bool,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    TermLogger::init(
        if args.verbose {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        },
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let mut config = match &args.config {
        Some(path) => LayoutConfig::from_ron_str(&std::fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(rooms) = args.rooms {
        config.connected_room_count = rooms;
    }

    let manager = generate_layout(config)?;
    if args.ron {
        let pretty = ron::ser::PrettyConfig::new();
        println!("{}", ron::ser::to_string_pretty(manager.rooms(), pretty)?);
        return Ok(());
    }

    println!("{}", manager.stats());
    for room in manager.rooms() {
        let position = room.position();
        let status = manager
            .room_status(room.id)
            .map(|status| format!("{:?}", status))
            .unwrap_or_default();
        println!(
            "{:>3} {:<10} depth {} at ({:.1}, {:.1}) size {:.1}x{:.1} doors {:?}",
            room.id.index(),
            status,
            room.depth(),
            position.x,
            position.z,
            room.length() * 2.0,
            room.width() * 2.0,
            room.doors().iter().map(|door| door.direction).collect::<Vec<_>>(),
        );
    }

    let boss = manager.rooms().iter().find(|room| room.is_boss_room());
    if let (Some(start), Some(boss)) = (manager.start_room(), boss) {
        if let Some(route) = manager.route(start.id, boss.id) {
            let route = route
                .iter()
                .map(|id| id.index().to_string())
                .collect::<Vec<_>>();
            println!("route to boss: {}", route.join(" -> "));
        }
    }
    Ok(())
}
