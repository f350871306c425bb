use recarve::{load_image, mark_seam, save_image, Orientation, SeamCarver};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use image::RgbImage;
use log::{info, warn};

fn main() {
    env_logger::init();

    let matches = App::new("recarve")
        .version("0.1.0")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width in pixels")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height in pixels")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .takes_value(true)
                .help("Where to write the carved image; defaults to carved_image.jpeg beside the input"),
        )
        .arg(
            Arg::with_name("dump-seams")
                .long("dump-seams")
                .value_name("DIR")
                .takes_value(true)
                .help("Write each intermediate image into DIR with its seam marked"),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}

fn parse_dimension(matches: &ArgMatches, name: &str) -> Result<u32, Box<dyn Error>> {
    let raw = matches.value_of(name).unwrap();
    let value: u32 = raw
        .parse()
        .map_err(|_| format!("{} must be a positive integer, got {:?}", name, raw))?;
    if value == 0 {
        return Err(format!("{} must be a positive integer, got 0", name).into());
    }
    Ok(value)
}

// The original tool drops its result next to the input under a fixed
// name; -o overrides.
fn derive_output_path(input: &Path) -> PathBuf {
    input.with_file_name("carved_image.jpeg")
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input = Path::new(matches.value_of("image").unwrap());
    let target_width = parse_dimension(matches, "width")?;
    let target_height = parse_dimension(matches, "height")?;

    let image = load_image(input)?;
    let (source_width, source_height) = image.dimensions();
    if target_width > source_width || target_height > source_height {
        return Err(format!(
            "target {}x{} exceeds the {}x{} source; seam carving cannot enlarge",
            target_width, target_height, source_width, source_height
        )
        .into());
    }

    let seam_dir = matches.value_of("dump-seams").map(PathBuf::from);
    if let Some(dir) = &seam_dir {
        fs::create_dir_all(dir)?;
    }

    let mut frame = 0usize;
    let mut on_seam = |current: &RgbImage, seam: &[u32], orientation: Orientation| {
        info!(
            "seam {} ({:?}) at {}x{}",
            frame,
            orientation,
            current.width(),
            current.height()
        );
        if let Some(dir) = &seam_dir {
            let mut marked = current.clone();
            mark_seam(&mut marked, seam, orientation);
            let path = dir.join(format!("seam-{:04}.png", frame));
            if let Err(err) = marked.save(&path) {
                warn!("could not write {}: {}", path.display(), err);
            }
        }
        frame += 1;
    };

    let carved = SeamCarver::new(&image).carve_with(target_width, target_height, &mut on_seam)?;

    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| derive_output_path(input));
    save_image(&carved, &output)?;
    info!(
        "wrote {}x{} image to {}",
        carved.width(),
        carved.height(),
        output.display()
    );
    Ok(())
}
