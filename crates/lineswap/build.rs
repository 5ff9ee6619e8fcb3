//! Renders `lineswap.1` so release archives can ship a manual page.
//!
//! The page lands in `target/generated-man/<target>/<profile>` and is also
//! copied into `OUT_DIR`.

use std::env;
use std::error::Error;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_mangen::Man;
use lineswap_build_util::{manual_date_from_env, out_dir_for_target_profile, write_man_page};

#[path = "src/cli.rs"]
mod cli;

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let page = render_page()?;
    let file_name = "lineswap.1";

    let out_dir = env::var_os("OUT_DIR").map(PathBuf::from);
    let release_dir = out_dir_for_target_profile(
        &env_or("TARGET", "unknown-target"),
        &env_or("PROFILE", "unknown-profile"),
        out_dir.as_deref(),
    );
    write_man_page(&page, &release_dir, file_name)?;

    if let Some(dir) = out_dir {
        if let Err(error) = write_man_page(&page, &dir, file_name) {
            println!("cargo:warning=manual page not copied to {}: {error}", dir.display());
        }
    }
    Ok(())
}

fn render_page() -> Result<Vec<u8>, Box<dyn Error>> {
    let version = env::var("CARGO_PKG_VERSION")
        .map_err(|_| "CARGO_PKG_VERSION is unset; run this script through cargo")?;

    let mut warnings = Vec::new();
    let date = manual_date_from_env(&mut warnings);
    for warning in warnings {
        println!("cargo:warning={warning}");
    }

    let mut page = Vec::new();
    Man::new(cli::Cli::command())
        .section("1")
        .source(format!("lineswap {version}"))
        .date(date)
        .render(&mut page)?;
    Ok(page)
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_owned())
}
