use albers_area::point::WGS84Point;
use albers_area::polygon::Polygon;
use albers_area::{albers, reference};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser)]
#[command(about = "Albers equal-area projection of the whole world (Adams 1945)")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project points given as lat,lon (degrees) to meters.
    Project {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<WGS84Point>,
    },
    /// Area of the polygon with the given lat,lon vertices, in m².
    Area {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<WGS84Point>,
    },
}

fn run(command: Command) -> albers_area::Result<()> {
    match command {
        Command::Project { points } => {
            for w in &points {
                let a = albers::project(w);
                log::trace!("{} -> {}", w, a);
                println!("{:.3} {:.3}", a.x, a.y);
            }
        }
        Command::Area { points } => {
            let polygon = Polygon::new(points);
            polygon.info();
            let area = polygon.area()?;
            println!("  albers: {:.1}", area);
            println!(
                "geodesic: {:.1} (geo crate)",
                reference::geodesic_area(&polygon.wgs)
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Cli::parse();
    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
