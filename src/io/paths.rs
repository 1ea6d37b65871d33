use directories::ProjectDirs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Per-user location of the client config, e.g. `~/.config/model-registry/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("dev", "ModelRegistry", "model-registry")?;
    Some(proj.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_ends_with_file_name() {
        if let Some(p) = default_config_path() {
            assert_eq!(p.file_name().and_then(|n| n.to_str()), Some(CONFIG_FILE_NAME));
        }
    }
}
