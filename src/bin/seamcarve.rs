// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use failure::{err_msg, Error};
use log::{info, LevelFilter};
use seamcarve::{render_energy, EnergyField, PixelGrid, SeamCarver, SEAM_RED};
use std::path::{Path, PathBuf};
use std::process;

fn io_args() -> [Arg; 2] {
    [
        Arg::new("input")
            .help("The image to read")
            .required(true)
            .value_parser(value_parser!(PathBuf)),
        Arg::new("output")
            .help("Where to write the result; the format follows the extension")
            .required(true)
            .value_parser(value_parser!(PathBuf)),
    ]
}

fn cli() -> Command {
    Command::new("seamcarve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Content-aware image reduction by seam carving")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log progress; repeat for per-seam detail"),
        )
        .subcommand(
            Command::new("reduce")
                .about("Remove columns and rows of least energy")
                .args(io_args())
                .arg(
                    Arg::new("width")
                        .long("width")
                        .default_value("0")
                        .value_parser(value_parser!(u32))
                        .help("Number of columns to remove"),
                )
                .arg(
                    Arg::new("height")
                        .long("height")
                        .default_value("0")
                        .value_parser(value_parser!(u32))
                        .help("Number of rows to remove"),
                ),
        )
        .subcommand(
            Command::new("energy")
                .about("Render the energy of every pixel as a grayscale image")
                .args(io_args()),
        )
        .subcommand(
            Command::new("seam")
                .about("Paint the cheapest seam red")
                .args(io_args())
                .arg(
                    Arg::new("horizontal")
                        .long("horizontal")
                        .action(ArgAction::SetTrue)
                        .help("Paint the cheapest left-to-right seam instead"),
                ),
        )
        .subcommand(
            Command::new("negative")
                .about("Invert the colors of an image")
                .args(io_args()),
        )
}

// RUST_LOG wins over -v when both are given.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn paths(matches: &ArgMatches) -> (PathBuf, PathBuf) {
    // Both are required, so clap has already refused to get this far
    // without them.
    let get = |name: &str| {
        matches
            .get_one::<PathBuf>(name)
            .cloned()
            .unwrap_or_default()
    };
    (get("input"), get("output"))
}

fn load(path: &Path) -> Result<PixelGrid, Error> {
    let image = image::open(path)?.to_rgba8();
    info!(
        "read {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(PixelGrid::from(&image))
}

fn save(grid: &PixelGrid, path: &Path) -> Result<(), Error> {
    image::RgbaImage::from(grid).save(path)?;
    info!(
        "wrote {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(())
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let (name, sub) = match matches.subcommand() {
        Some(found) => found,
        None => return Ok(()),
    };
    let (input, output) = paths(sub);
    let grid = load(&input)?;

    let result = match name {
        "reduce" => {
            let width = sub.get_one::<u32>("width").copied().unwrap_or(0);
            let height = sub.get_one::<u32>("height").copied().unwrap_or(0);
            seamcarve::reduce(&grid, width, height)?
        }
        "energy" => render_energy(&EnergyField::compute(&grid)),
        "seam" => {
            let carver = SeamCarver::new(grid);
            let seam = if sub.get_flag("horizontal") {
                carver.horizontal_seam()?
            } else {
                carver.vertical_seam()?
            };
            let mut painted = carver.into_grid();
            painted.paint_seam(&seam, SEAM_RED)?;
            painted
        }
        "negative" => grid.negative(),
        other => return Err(err_msg(format!("unknown command {}", other))),
    };

    save(&result, &output)
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    if let Err(e) = run(&matches) {
        eprintln!("seamcarve: {}", e);
        process::exit(1);
    }
}
