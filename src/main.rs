use structopt::StructOpt;

use fractal_kernel::{run_cli, CliOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = CliOptions::from_args();
    let output = run_cli(&options)?;
    println!("{}", output.display());

    Ok(())
}
