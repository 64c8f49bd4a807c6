use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Generation settings, loadable from a TOML file. CLI flags override any
/// value set here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Lattice points per cube edge, both corners included.
    pub subdivisions: u32,
    /// Name placed on the OBJ `g` line.
    pub object: String,
    /// Output path; stdout when absent.
    pub output: Option<PathBuf>,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            subdivisions: 16,
            object: "block".to_string(),
            output: None,
        }
    }
}

impl GenConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let cfg: GenConfig = toml::from_str(&text)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_reference_run() {
        let cfg = GenConfig::default();
        assert_eq!(cfg.subdivisions, 16);
        assert_eq!(cfg.object, "block");
        assert!(cfg.output.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: GenConfig = toml::from_str("subdivisions = 3\n").unwrap();
        assert_eq!(cfg.subdivisions, 3);
        assert_eq!(cfg.object, "block");
    }

    #[test]
    fn full_toml_parses() {
        let cfg: GenConfig =
            toml::from_str("subdivisions = 4\nobject = \"cube\"\noutput = \"cube.obj\"\n").unwrap();
        assert_eq!(cfg.subdivisions, 4);
        assert_eq!(cfg.object, "cube");
        assert_eq!(cfg.output.as_deref(), Some(Path::new("cube.obj")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<GenConfig>("subfaces = 16\n").is_err());
    }
}
