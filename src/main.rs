use clap::Parser;

use crudgen::cli::Args;
use crudgen::config::Settings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let settings = Settings::load(&args.env_file)?;
    let output = args.command.run(&settings, args.format)?;
    println!("{}", output);
    Ok(())
}
