#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_karatsuba_threshold(&outdir_path, "default_karatsuba_threshold.rs")?;
    Ok(())
}

/// Create default_karatsuba_threshold.rs, containing definition of constant DEFAULT_KARATSUBA_THRESHOLD
fn write_default_karatsuba_threshold(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let default_threshold = env::var("RUST_DECMUL_KARATSUBA_THRESHOLD")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_DECMUL_KARATSUBA_THRESHOLD must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(32usize);

    let threshold_rs_path = outdir_path.join(filename);

    let threshold_src = format!(
        "/// Operand length at or below which Karatsuba falls back to schoolbook\npub const DEFAULT_KARATSUBA_THRESHOLD: usize = {default_threshold};"
    );

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&threshold_rs_path) {
        Ok(existing_contents) if existing_contents == threshold_src => {},
        _ => {
            let mut threshold_rs = File::create(&threshold_rs_path)
                .expect("Could not create default_karatsuba_threshold.rs");
            write!(threshold_rs, "{threshold_src}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", threshold_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_DECMUL_KARATSUBA_THRESHOLD");

    Ok(())
}
