use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Кладёт config.toml из корня workspace рядом с бинарником (target/<profile>)
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../../config.toml");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let profile = env::var("PROFILE")?;

    // OUT_DIR имеет вид target/<profile>/build/backend-xxx/out
    let Some(target_dir) = out_dir.ancestors().find(|p| p.ends_with(&profile)) else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return Ok(());
    };

    let source_config = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source_config.exists() {
        println!(
            "cargo:warning=config.toml not found at {:?}, the embedded default will be used",
            source_config
        );
        return Ok(());
    }

    let dest_config = target_dir.join("config.toml");
    fs::copy(&source_config, &dest_config)?;
    println!("cargo:warning=Copied config.toml to {:?}", dest_config);
    Ok(())
}
