// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use pngseam::imageio::{load_rgb, save_gray, save_rgb};
use pngseam::{calculate_energy, energy_to_image, mark_seam, Direction, SeamCarver, SeamError};
use std::path::PathBuf;
use std::process;

extern crate clap;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use tracing::{error, info};

/// How much to take off the image.
#[derive(Debug, PartialEq)]
enum Plan {
    Seams { vertical: u32, horizontal: u32 },
    Target { width: Option<u32>, height: Option<u32> },
}

/// One fully-parsed invocation.
#[derive(Debug, PartialEq)]
enum Invocation {
    Carve { input: PathBuf, output: PathBuf, plan: Plan },
    Seam { input: PathBuf, output: PathBuf, direction: Direction },
    Energy { input: PathBuf, output: PathBuf },
}

fn paths(matches: &ArgMatches) -> Result<(PathBuf, PathBuf), SeamError> {
    let path = |name: &str| {
        matches
            .value_of_os(name)
            .map(PathBuf::from)
            .ok_or_else(|| SeamError::Configuration(format!("missing {} path", name)))
    };
    Ok((path("input")?, path("output")?))
}

fn count(matches: &ArgMatches, name: &str) -> Result<Option<u32>, SeamError> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            SeamError::Configuration(format!(
                "--{} expects a non-negative whole number, got '{}'",
                name, value
            ))
        }),
    }
}

fn parse(matches: &ArgMatches) -> Result<Invocation, SeamError> {
    match matches.subcommand() {
        ("carve", Some(sub)) => {
            let (input, output) = paths(sub)?;
            let (width, height) = (count(sub, "width")?, count(sub, "height")?);
            let plan = if width.is_some() || height.is_some() {
                Plan::Target { width, height }
            } else {
                Plan::Seams {
                    vertical: count(sub, "vertical")?.unwrap_or(0),
                    horizontal: count(sub, "horizontal")?.unwrap_or(0),
                }
            };
            Ok(Invocation::Carve {
                input,
                output,
                plan,
            })
        }
        ("seam", Some(sub)) => {
            let (input, output) = paths(sub)?;
            let direction = match sub.value_of("direction") {
                Some("horizontal") => Direction::Horizontal,
                Some("vertical") | None => Direction::Vertical,
                Some(other) => {
                    return Err(SeamError::Configuration(format!(
                        "unknown seam direction '{}'",
                        other
                    )))
                }
            };
            Ok(Invocation::Seam {
                input,
                output,
                direction,
            })
        }
        ("energy", Some(sub)) => {
            let (input, output) = paths(sub)?;
            Ok(Invocation::Energy { input, output })
        }
        _ => Err(SeamError::Configuration("no command given".to_string())),
    }
}

fn run(invocation: Invocation) -> Result<(), SeamError> {
    match invocation {
        Invocation::Carve {
            input,
            output,
            plan,
        } => {
            let image = load_rgb(&input)?;
            let carver = SeamCarver::new(&image);
            let carved = match plan {
                Plan::Seams {
                    vertical,
                    horizontal,
                } => carver.carve(vertical, horizontal)?,
                Plan::Target { width, height } => carver.resize_to(
                    width.unwrap_or_else(|| image.width()),
                    height.unwrap_or_else(|| image.height()),
                )?,
            };
            save_rgb(&carved, &output)?;
            info!(
                output = %output.display(),
                width = carved.width(),
                height = carved.height(),
                "carved image written"
            );
        }
        Invocation::Seam {
            input,
            output,
            direction,
        } => {
            let image = load_rgb(&input)?;
            save_rgb(&mark_seam(&image, direction)?, &output)?;
            info!(output = %output.display(), %direction, "seam image written");
        }
        Invocation::Energy { input, output } => {
            let image = load_rgb(&input)?;
            save_gray(&energy_to_image(&calculate_energy(&image)?), &output)?;
            info!(output = %output.display(), "energy image written");
        }
    }
    Ok(())
}

fn app() -> App<'static, 'static> {
    let input = Arg::with_name("input")
        .help("The image to read")
        .required(true)
        .index(1);
    let output = Arg::with_name("output")
        .help("Where to write the result; the extension picks the format")
        .required(true)
        .index(2);

    App::new("pngseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("carve")
                .about("Remove seams until the image reaches the requested size")
                .arg(input.clone())
                .arg(output.clone())
                .arg(
                    Arg::with_name("vertical")
                        .long("vertical")
                        .value_name("N")
                        .help("Number of top-to-bottom seams to remove (narrows the image)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("horizontal")
                        .long("horizontal")
                        .value_name("N")
                        .help("Number of left-to-right seams to remove (shortens the image)")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("width")
                        .long("width")
                        .value_name("PIXELS")
                        .help("Target width")
                        .takes_value(true)
                        .conflicts_with_all(&["vertical", "horizontal"]),
                )
                .arg(
                    Arg::with_name("height")
                        .long("height")
                        .value_name("PIXELS")
                        .help("Target height")
                        .takes_value(true)
                        .conflicts_with_all(&["vertical", "horizontal"]),
                ),
        )
        .subcommand(
            SubCommand::with_name("seam")
                .about("Paint the cheapest seam in red")
                .arg(input.clone())
                .arg(output.clone())
                .arg(
                    Arg::with_name("direction")
                        .long("direction")
                        .short("d")
                        .takes_value(true)
                        .possible_values(&["vertical", "horizontal"])
                        .default_value("vertical"),
                ),
        )
        .subcommand(
            SubCommand::with_name("energy")
                .about("Write the energy map as a greyscale image")
                .arg(input)
                .arg(output),
        )
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let matches = app().get_matches();
    if let Err(err) = parse(&matches).and_then(run) {
        error!("{}", err);
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(args: &[&str]) -> Result<Invocation, SeamError> {
        let mut argv = vec!["pngseam"];
        argv.extend_from_slice(args);
        parse(&app().get_matches_from_safe(argv).unwrap())
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(
            parsed(&["carve", "in.png", "out.png", "--vertical", "3"]).unwrap(),
            Invocation::Carve {
                input: PathBuf::from("in.png"),
                output: PathBuf::from("out.png"),
                plan: Plan::Seams {
                    vertical: 3,
                    horizontal: 0
                },
            }
        );
    }

    #[test]
    fn targets_replace_counts() {
        match parsed(&["carve", "in.png", "out.png", "--height", "20"]).unwrap() {
            Invocation::Carve { plan, .. } => assert_eq!(
                plan,
                Plan::Target {
                    width: None,
                    height: Some(20)
                }
            ),
            other => panic!("unexpected {:?}", other),
        }
        assert!(app()
            .get_matches_from_safe(vec!["pngseam", "carve", "a", "b", "--width", "3", "--vertical", "1"])
            .is_err());
    }

    #[test]
    fn malformed_counts_are_configuration_errors() {
        match parsed(&["carve", "in.png", "out.png", "--vertical", "many"]) {
            Err(SeamError::Configuration(_)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn seam_direction_defaults_to_vertical() {
        assert_eq!(
            parsed(&["seam", "a.png", "b.png"]).unwrap(),
            Invocation::Seam {
                input: PathBuf::from("a.png"),
                output: PathBuf::from("b.png"),
                direction: Direction::Vertical,
            }
        );
        match parsed(&["seam", "a.png", "b.png", "-d", "horizontal"]).unwrap() {
            Invocation::Seam { direction, .. } => assert_eq!(direction, Direction::Horizontal),
            other => panic!("unexpected {:?}", other),
        }
    }
}
