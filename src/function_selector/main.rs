use std::io;

use erc1155_selectors::{driver::write_selectors, ERC1155_SIGNATURES};
use log::{info, LevelFilter};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .init();

    let mut stdout = io::stdout().lock();
    let written = write_selectors(&mut stdout, &ERC1155_SIGNATURES)?;
    info!("wrote {written} selectors");

    Ok(())
}
