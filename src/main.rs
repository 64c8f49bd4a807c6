//! wuerfel: emits the surface of a subdivided cube as a Wavefront OBJ file.
#![forbid(unsafe_code)]

mod config;

use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use crate::config::GenConfig;
use wuerfel_mesh::BlockMesh;
use wuerfel_obj::write_obj;

#[derive(Parser, Debug)]
#[command(name = "wuerfel", about = "Generate a subdivided cube surface mesh as Wavefront OBJ")]
struct Cli {
    /// Lattice points per cube edge, both corners included (>= 2)
    #[arg(short = 'n', long)]
    subdivisions: Option<u32>,
    /// Output path; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Object name placed on the `g` line
    #[arg(long)]
    object: Option<String>,
    /// TOML config file; flags given here override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Skip the index-density validation pass
    #[arg(long)]
    no_validate: bool,
}

impl Cli {
    /// Layers the flags given on the command line over the file settings.
    fn resolve(self, mut cfg: GenConfig) -> GenConfig {
        if let Some(n) = self.subdivisions {
            cfg.subdivisions = n;
        }
        if let Some(object) = self.object {
            cfg.object = object;
        }
        if let Some(output) = self.output {
            cfg.output = Some(output);
        }
        cfg
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let base = match &cli.config {
        Some(path) => GenConfig::load_from_path(path)?,
        None => GenConfig::default(),
    };
    let validate = !cli.no_validate;
    let cfg = cli.resolve(base);
    if cfg.subdivisions < 2 {
        return Err(format!("subdivisions must be at least 2, got {}", cfg.subdivisions).into());
    }

    let mesh = BlockMesh::build(cfg.subdivisions)?;
    if validate {
        mesh.validate()?;
    }
    info!(
        "block mesh n={}: {} vertices, {} triangles",
        cfg.subdivisions,
        mesh.vertices().len(),
        mesh.triangles().len()
    );

    match &cfg.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            write_obj(&mut out, &mesh, &cfg.object)?;
            out.flush()?;
            info!("wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_obj(&mut out, &mesh, &cfg.object)?;
            out.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn cli_parses_all_flags() {
        let cli = Cli::try_parse_from([
            "wuerfel",
            "-n",
            "4",
            "-o",
            "out.obj",
            "--object",
            "cube",
            "--config",
            "gen.toml",
            "--no-validate",
        ])
        .unwrap();
        assert_eq!(cli.subdivisions, Some(4));
        assert_eq!(cli.output.as_deref(), Some(Path::new("out.obj")));
        assert_eq!(cli.object.as_deref(), Some("cube"));
        assert_eq!(cli.config.as_deref(), Some(Path::new("gen.toml")));
        assert!(cli.no_validate);
    }

    #[test]
    fn cli_rejects_non_numeric_subdivisions() {
        assert!(Cli::try_parse_from(["wuerfel", "-n", "many"]).is_err());
    }

    #[test]
    fn flags_override_the_config_file() {
        let base: GenConfig = toml::from_str("subdivisions = 3\nobject = \"slab\"\n").unwrap();
        let cli = Cli::try_parse_from(["wuerfel", "-n", "5"]).unwrap();
        let cfg = cli.resolve(base);
        assert_eq!(cfg.subdivisions, 5);
        // flags left unset keep the file's values
        assert_eq!(cfg.object, "slab");
        assert!(cfg.output.is_none());
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["wuerfel"]).unwrap();
        assert!(!cli.no_validate);
        let cfg = cli.resolve(GenConfig::default());
        assert_eq!(cfg.subdivisions, 16);
        assert_eq!(cfg.object, "block");
        assert!(cfg.output.is_none());
    }
}
