use anyhow::Result;
use chores::libs::{config::LogoArgs, logo, utils};
use clap::Parser;

fn main() -> Result<()> {
    utils::init_logging();
    let args = LogoArgs::parse();

    logo::convert_to_png(&args.input, &args.png)?;
    utils::print_success(&format!(
        "Converted {} to {}",
        args.input.display(),
        args.png.display()
    ));

    logo::convert_to_ico(&args.png, &args.ico)?;
    utils::print_success(&format!(
        "Created {} with sizes {:?}",
        args.ico.display(),
        logo::ICON_SIZES
    ));
    Ok(())
}
