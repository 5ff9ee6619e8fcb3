//! Build-time helpers for rendering the `lineswap` manual page.
//!
//! Every function takes its inputs explicitly so build scripts can pass the
//! Cargo-provided environment and tests can pass fixed values.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use time::{OffsetDateTime, format_description::well_known::Iso8601};

const FALLBACK_DATE: &str = "1970-01-01";

/// Manual page date derived from a `SOURCE_DATE_EPOCH` value.
///
/// Missing values fall back silently to the Unix epoch. Malformed values
/// fall back too, and a warning (without the `cargo:warning=` prefix) is
/// pushed so the caller can decide how to surface it.
pub fn manual_date(source_date_epoch: Option<&str>, warnings: &mut Vec<String>) -> String {
    let Some(raw) = source_date_epoch else {
        return FALLBACK_DATE.into();
    };

    let Ok(timestamp) = raw.trim().parse::<i64>() else {
        warnings.push(format!(
            "Invalid SOURCE_DATE_EPOCH '{raw}'; expected integer seconds since Unix epoch; \
             falling back to {FALLBACK_DATE}"
        ));
        return FALLBACK_DATE.into();
    };

    let Ok(value) = OffsetDateTime::from_unix_timestamp(timestamp) else {
        warnings.push(format!(
            "Invalid SOURCE_DATE_EPOCH '{raw}'; not a valid Unix timestamp; falling back to \
             {FALLBACK_DATE}"
        ));
        return FALLBACK_DATE.into();
    };

    value.format(&Iso8601::DATE).unwrap_or_else(|_| {
        warnings.push(format!(
            "Invalid SOURCE_DATE_EPOCH '{raw}'; formatting failed; falling back to \
             {FALLBACK_DATE}"
        ));
        FALLBACK_DATE.into()
    })
}

/// [`manual_date`] fed from the process environment.
pub fn manual_date_from_env(warnings: &mut Vec<String>) -> String {
    let raw = env::var("SOURCE_DATE_EPOCH").ok();
    manual_date(raw.as_deref(), warnings)
}

/// Nearest ancestor of `out_dir` named `target`.
///
/// `OUT_DIR` is `{workspace}/target/{profile}/build/{crate}-{hash}/out` for
/// native builds and gains a `{target}` component when cross-compiling.
#[must_use]
pub fn workspace_target_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|ancestor| ancestor.file_name().and_then(|name| name.to_str()) == Some("target"))
        .map(Path::to_path_buf)
}

/// Directory that receives generated manual pages for one target/profile.
///
/// Falls back to a relative `target` directory when `out_dir` is unknown or
/// does not sit inside one.
#[must_use]
pub fn out_dir_for_target_profile(target: &str, profile: &str, out_dir: Option<&Path>) -> PathBuf {
    let base = out_dir
        .and_then(workspace_target_dir)
        .unwrap_or_else(|| PathBuf::from("target"));
    base.join("generated-man").join(target).join(profile)
}

/// Writes `data` to `dir/page_name` through a sibling temporary file.
///
/// # Errors
///
/// Returns any I/O error from creating `dir`, writing, or renaming.
pub fn write_man_page(data: &[u8], dir: &Path, page_name: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let destination = dir.join(page_name);
    let staging = dir.join(format!("{page_name}.tmp"));
    fs::write(&staging, data)?;
    fs::rename(&staging, &destination)?;
    Ok(destination)
}
