//! Renders the `frame_filter(1)` manual page from the clap definition in
//! `src/cli.rs`.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_mangen::Man;

#[path = "src/cli.rs"]
mod cli;

const MAN_DIR: &str = "target/generated-man";

fn write_man_page(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let mut page = Vec::new();
    Man::new(cli::Cli::command()).render(&mut page)?;

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}.1"));
    fs::write(&path, page)?;
    Ok(path)
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let name = std::env::var("CARGO_PKG_NAME").unwrap_or_else(|_| "frame_filter".to_owned());
    write_man_page(Path::new(MAN_DIR), &name)?;
    Ok(())
}
