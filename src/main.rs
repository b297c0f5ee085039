use std::path::PathBuf;

use clap::Parser;

use monodither::app;
use monodither::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Dither an image to black and white, keeping its container format")]
struct Args {
    /// Image file to dither (GIF, JPEG, or PNG)
    image: Option<PathBuf>,

    /// Output image file; a bare name inherits the input extension
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    /// Swap the two output levels (white-on-black)
    #[arg(short, long, default_value_t = false)]
    invert: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp_micros()
        .init();

    let args = Args::parse();
    let config = Config::new(args.image, args.output, args.invert)?;
    app::run(&config)
}
