use std::error::Error;

use clap::{Arg, ArgAction, Command, value_parser};
use stonyman_bridge::transport::SerialTransport;
use stonyman_bridge::{ascii, display, stonyman};

const DEFAULT_PORT: &str = "/dev/ttyACM0";
const DEFAULT_BAUD: &str = "115200";

const NOISE_PROMPT: &str = "Cover the lens and hit Enter to acquire pattern noise ... ";
const SNAPSHOT_PROMPT: &str = "Uncover the lens and hit Enter to take a snapshot ... ";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("stonyman-snapshot")
        .about("Acquire a noise-corrected snapshot from a Stonyman sensor")
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .default_value(DEFAULT_PORT)
                .help("Serial port of the sensor board"),
        )
        .arg(
            Arg::new("baud")
                .short('b')
                .long("baud")
                .value_parser(value_parser!(u32))
                .default_value(DEFAULT_BAUD)
                .help("Baud rate"),
        )
        .arg(
            Arg::new("ascii")
                .long("ascii")
                .action(ArgAction::SetTrue)
                .help("Dump the result as ASCII art instead of opening a window"),
        )
        .get_matches();

    let port = matches.get_one::<String>("port").unwrap();
    let baud = *matches.get_one::<u32>("baud").unwrap();

    let mut transport = SerialTransport::open(port, baud)?;

    // Prompt order is load-bearing: the lens must be covered for the
    // pattern-noise reference before the live snapshot is taken.
    let noise = stonyman::acquire(&mut transport, NOISE_PROMPT)?;
    let snapshot = stonyman::acquire(&mut transport, SNAPSHOT_PROMPT)?;

    let image = noise.subtract(&snapshot)?;

    if matches.get_flag("ascii") {
        ascii::dump(&mut std::io::stdout(), &image.flipud())?;
    } else {
        display::show(&image.flipud(), "Stonyman snapshot")?;
    }

    Ok(())
}
