use std::env;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::catalog::CertificationRecord;

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct ConfigFile {
    pub data: Option<String>,
    pub certifications: Option<Vec<CertificationRecord>>,
    pub output: Option<String>,
    pub output_format: Option<String>,
    pub tick_rate: Option<u64>,
    pub no_motion: Option<bool>,
    pub no_color: Option<bool>,
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("USERPROFILE").map(PathBuf::from))
        .or_else(|| {
            let drive = env::var_os("HOMEDRIVE")?;
            let path = env::var_os("HOMEPATH")?;
            Some(PathBuf::from(drive).join(path))
        })
}

pub fn default_config_path() -> Option<PathBuf> {
    Some(home_dir()?.join(".certfolio").join("config.yml"))
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

pub fn expand_tilde_string(path: &str) -> String {
    expand_tilde(path).to_string_lossy().to_string()
}

pub fn load_config(path: &PathBuf, allow_missing: bool) -> Result<ConfigFile, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_yaml::from_str::<ConfigFile>(&contents)
            .map_err(|e| format!("failed to parse config '{}': {e}", path.display())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
            Ok(ConfigFile::default())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(format!("config file not found '{}'", path.display()))
        }
        Err(e) => Err(format!("failed to read config '{}': {e}", path.display())),
    }
}

fn default_config_yaml() -> String {
    r#"# Certfolio config
#
# Location (default):
#   ~/.certfolio/config.yml

# Catalog (optional)
# Load records from a YAML file instead of the built-ins:
# data: ./certifications.yml
#
# Or author them inline:
# certifications:
#   - title: CompTIA Security+
#     issuer: CompTIA
#     date: "2022"
#     description: Foundational cybersecurity certification.
#     icon: award            # shield | certificate | award
#     status: Completed
#     badge: blue            # green | yellow | blue
#     details:
#       - Network security
#     verification_link: https://www.comptia.org/verify

# Export (optional)
# output: ./certifications.html
# output_format: html       # text | json | xml | html

# Interface
tick_rate: 60
no_motion: false

# Output styling
no_color: false
"#
    .to_string()
}

pub fn ensure_default_config_file(path: &PathBuf) -> Result<(), String> {
    if path.exists() {
        return Ok(());
    }
    let parent = path
        .parent()
        .ok_or_else(|| format!("invalid config path '{}'", path.display()))?;
    std::fs::create_dir_all(parent).map_err(|e| {
        format!(
            "failed to create config directory '{}': {e}",
            parent.display()
        )
    })?;
    let contents = default_config_yaml();
    std::fs::write(path, contents)
        .map_err(|e| format!("failed to write config file '{}': {e}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_config_parses_back() {
        let cfg: ConfigFile = serde_yaml::from_str(&default_config_yaml()).unwrap();
        assert_eq!(cfg.tick_rate, Some(60));
        assert_eq!(cfg.no_motion, Some(false));
        assert!(cfg.certifications.is_none());
    }

    #[test]
    fn inline_certifications_deserialize() {
        let yaml = r#"
certifications:
  - title: GIAC Security Essentials (GSEC)
    issuer: GIAC
    date: "2021"
    description: Broad security essentials.
    icon: certificate
    status: Completed
    badge: green
    details: [Defense in depth]
    verification_link: https://www.giac.org/verify
"#;
        let cfg: ConfigFile = serde_yaml::from_str(yaml).unwrap();
        let records = cfg.certifications.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].issuer, "GIAC");
    }

    #[test]
    fn tilde_expansion_leaves_plain_paths_alone() {
        assert_eq!(expand_tilde("./data.yml"), PathBuf::from("./data.yml"));
    }

    #[test]
    fn missing_config_is_tolerated_only_when_allowed() {
        let path = std::env::temp_dir().join("certfolio-no-such-config.yml");
        let _ = std::fs::remove_file(&path);
        assert!(load_config(&path, true).is_ok());
        assert!(load_config(&path, false).is_err());
    }

    #[test]
    fn bootstrap_seeds_the_template_and_keeps_existing_files() {
        let dir = std::env::temp_dir().join("certfolio-bootstrap-test");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("config.yml");

        ensure_default_config_file(&path).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            default_config_yaml()
        );

        std::fs::write(&path, "tick_rate: 30\n").unwrap();
        ensure_default_config_file(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "tick_rate: 30\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
