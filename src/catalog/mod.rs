use std::path::Path;

use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Opaque glyph token attached to a certification category. Rendering
/// resolves tokens to terminal symbols in one place so the symbol set can
/// be swapped without touching any logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconGlyph {
    Shield,
    Certificate,
    Award,
}

impl IconGlyph {
    pub fn symbol(self) -> &'static str {
        match self {
            IconGlyph::Shield => "\u{1f6e1}",
            IconGlyph::Certificate => "\u{1f4dc}",
            IconGlyph::Award => "\u{1f3c5}",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "shield" => Some(Self::Shield),
            "certificate" => Some(Self::Certificate),
            "award" => Some(Self::Award),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            IconGlyph::Shield => "shield",
            IconGlyph::Certificate => "certificate",
            IconGlyph::Award => "award",
        }
    }
}

pub const LINK_GLYPH: &str = "\u{1f517}";
pub const CHECK_GLYPH: &str = "\u{2714}";
pub const CLOSE_GLYPH: &str = "\u{2715}";

/// Categorical color token for the completion badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    Green,
    Yellow,
    Blue,
}

impl BadgeStyle {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "green" => Some(Self::Green),
            "yellow" => Some(Self::Yellow),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BadgeStyle::Green => "green",
            BadgeStyle::Yellow => "yellow",
            BadgeStyle::Blue => "blue",
        }
    }
}

/// One static entry describing a professional credential. Records are
/// authored at build/config time and never mutated afterwards; `title` is
/// the de facto unique key across the catalog.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub description: String,
    pub icon: IconGlyph,
    pub status: String,
    pub badge: BadgeStyle,
    #[serde(default)]
    pub details: Vec<String>,
    pub verification_link: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate certification title '{title}'")]
    DuplicateTitle { title: String },

    #[error("invalid verification link for '{title}': {source}")]
    InvalidLink {
        title: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read catalog file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file '{path}': {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Clone, Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default, alias = "catalog")]
    certifications: Vec<CertificationRecord>,
}

pub fn built_in_certifications() -> Vec<CertificationRecord> {
    vec![
        CertificationRecord {
            title: "Offensive Security Certified Professional (OSCP)".to_string(),
            issuer: "Offensive Security".to_string(),
            date: "In Progress".to_string(),
            description: "Advanced penetration testing certification focusing on hands-on \
                          offensive security skills and real-world vulnerability exploitation."
                .to_string(),
            icon: IconGlyph::Shield,
            status: "Pursuing".to_string(),
            badge: BadgeStyle::Yellow,
            details: vec![
                "Comprehensive penetration testing methodology".to_string(),
                "Hands-on exploit development".to_string(),
                "Advanced network and web application security".to_string(),
            ],
            verification_link: "https://www.offensive-security.com/verify".to_string(),
        },
        CertificationRecord {
            title: "Certified Ethical Hacker (CEH)".to_string(),
            issuer: "EC-Council".to_string(),
            date: "2023".to_string(),
            description: "Comprehensive certification in ethical hacking techniques and \
                          cybersecurity principles."
                .to_string(),
            icon: IconGlyph::Certificate,
            status: "Completed".to_string(),
            badge: BadgeStyle::Green,
            details: vec![
                "Ethical hacking methodologies".to_string(),
                "Vulnerability assessment".to_string(),
                "Penetration testing techniques".to_string(),
            ],
            verification_link: "https://www.eccouncil.org/verify".to_string(),
        },
        CertificationRecord {
            title: "CompTIA Security+".to_string(),
            issuer: "CompTIA".to_string(),
            date: "2022".to_string(),
            description: "Foundational cybersecurity certification covering core security \
                          functions."
                .to_string(),
            icon: IconGlyph::Award,
            status: "Completed".to_string(),
            badge: BadgeStyle::Blue,
            details: vec![
                "Network security".to_string(),
                "Compliance and operational security".to_string(),
                "Threats and vulnerabilities".to_string(),
            ],
            verification_link: "https://www.comptia.org/verify".to_string(),
        },
    ]
}

/// Rejects data-authoring defects before any record reaches the view:
/// duplicate titles would make tile-highlight matching ambiguous, and a
/// malformed link would surface as broken navigation at click time.
pub fn validate_catalog(records: &[CertificationRecord]) -> Result<(), CatalogError> {
    if let Some(title) = records
        .iter()
        .map(|r| r.title.as_str())
        .duplicates()
        .next()
    {
        return Err(CatalogError::DuplicateTitle {
            title: title.to_string(),
        });
    }
    for record in records.iter() {
        url::Url::parse(&record.verification_link).map_err(|source| CatalogError::InvalidLink {
            title: record.title.clone(),
            source,
        })?;
    }
    Ok(())
}

pub fn load_catalog_file(path: &Path) -> Result<Vec<CertificationRecord>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::FileRead {
        path: path.display().to_string(),
        source,
    })?;
    let parsed: CatalogFile =
        serde_yaml::from_str(&contents).map_err(|source| CatalogError::FileParse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(parsed.certifications)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_tokens_round_trip_through_names() {
        for badge in [BadgeStyle::Green, BadgeStyle::Yellow, BadgeStyle::Blue] {
            assert_eq!(BadgeStyle::parse(badge.name()), Some(badge));
        }
        assert_eq!(BadgeStyle::parse("purple"), None);
    }

    #[test]
    fn icon_tokens_parse_case_insensitively() {
        assert_eq!(IconGlyph::parse(" Shield "), Some(IconGlyph::Shield));
        assert_eq!(IconGlyph::parse("AWARD"), Some(IconGlyph::Award));
        assert_eq!(IconGlyph::parse("ribbon"), None);
    }

    #[test]
    fn catalog_file_accepts_catalog_alias() {
        let yaml = r#"
catalog:
  - title: GIAC Penetration Tester (GPEN)
    issuer: GIAC
    date: "2024"
    description: Network penetration testing.
    icon: shield
    status: Completed
    badge: green
    verification_link: https://www.giac.org/verify
"#;
        let parsed: CatalogFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.certifications.len(), 1);
        assert!(parsed.certifications[0].details.is_empty());
    }
}
