use anyhow::{bail, Context, Result};
use clap::{App, Arg, ArgMatches};
use seamcarver::{energy_to_image, SeamCarver};
use std::process;
use tracing::info;

fn count(matches: &ArgMatches, name: &str) -> Result<u32> {
    match matches.value_of(name) {
        None => Ok(0),
        Some(v) => v
            .parse()
            .with_context(|| format!("--{} expects a whole number, got '{}'", name, v)),
    }
}

fn run() -> Result<()> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("columns")
                .long("columns")
                .short("c")
                .takes_value(true)
                .help("Number of vertical seams to remove"),
        )
        .arg(
            Arg::with_name("rows")
                .long("rows")
                .short("r")
                .takes_value(true)
                .help("Number of horizontal seams to remove"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .short("e")
                .help("Write the energy map of the input instead of carving"),
        )
        .get_matches();

    let input = matches.value_of("input").context("no input given")?;
    let output = matches.value_of("output").context("no output given")?;
    let (columns, rows) = (count(&matches, "columns")?, count(&matches, "rows")?);

    let picture = image::open(input)
        .with_context(|| format!("could not read {}", input))?
        .to_rgb8();
    let mut carver = SeamCarver::new(&picture)?;

    if matches.is_present("energy") {
        energy_to_image(carver.energy_field())
            .save(output)
            .with_context(|| format!("could not write {}", output))?;
        return Ok(());
    }

    let (width, height) = (carver.width(), carver.height());
    if columns >= width || rows >= height {
        bail!(
            "cannot remove {} columns and {} rows from a {}x{} picture",
            columns,
            rows,
            width,
            height
        );
    }

    info!(input, width, height, columns, rows, "carving");
    carver.carve(width - columns, height - rows)?;

    carver
        .into_picture()
        .save(output)
        .with_context(|| format!("could not write {}", output))?;
    info!(output, "done");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("seamcarve: {:#}", e);
        process::exit(1);
    }
}
