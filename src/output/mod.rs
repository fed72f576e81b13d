pub mod report;

use colored::Colorize;
use serde::Serialize;

use crate::catalog::{BadgeStyle, CertificationRecord, CHECK_GLYPH, LINK_GLYPH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Xml,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            "xml" => Some(Self::Xml),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".xml") {
        return Some(OutputFormat::Xml);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Text);
    }
    None
}

#[derive(Clone, Debug, Serialize)]
pub struct OutputRecord {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub status: String,
    pub badge: String,
    pub icon: String,
    pub description: String,
    pub details: Vec<String>,
    pub verification_link: String,
}

pub fn build_records(records: &[CertificationRecord]) -> Vec<OutputRecord> {
    records
        .iter()
        .map(|r| OutputRecord {
            title: r.title.clone(),
            issuer: r.issuer.clone(),
            date: r.date.clone(),
            status: r.status.clone(),
            badge: r.badge.name().to_string(),
            icon: r.icon.name().to_string(),
            description: r.description.clone(),
            details: r.details.clone(),
            verification_link: r.verification_link.clone(),
        })
        .collect()
}

pub fn render_text(records: &[OutputRecord]) -> Vec<u8> {
    let mut out = String::new();
    for r in records {
        out.push_str(&format!("{} ({}) [{}]\n", r.title, r.issuer, r.status));
        out.push_str(&format!("  date: {}\n", r.date));
        out.push_str(&format!("  {}\n", r.description));
        for detail in &r.details {
            out.push_str(&format!("  - {}\n", detail));
        }
        out.push_str(&format!("  verify: {}\n\n", r.verification_link));
    }
    out.into_bytes()
}

pub fn render_json(records: &[OutputRecord]) -> Vec<u8> {
    serde_json::to_vec_pretty(records).unwrap_or_else(|_| b"[]\n".to_vec())
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn render_xml(records: &[OutputRecord]) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    out.push('\n');
    out.push_str("<certifications>\n");
    for r in records {
        out.push_str("  <certification>\n");
        out.push_str(&format!("    <title>{}</title>\n", escape_xml(&r.title)));
        out.push_str(&format!("    <issuer>{}</issuer>\n", escape_xml(&r.issuer)));
        out.push_str(&format!("    <date>{}</date>\n", escape_xml(&r.date)));
        out.push_str(&format!("    <status>{}</status>\n", escape_xml(&r.status)));
        out.push_str(&format!("    <badge>{}</badge>\n", escape_xml(&r.badge)));
        out.push_str(&format!("    <icon>{}</icon>\n", escape_xml(&r.icon)));
        out.push_str(&format!(
            "    <description>{}</description>\n",
            escape_xml(&r.description)
        ));
        out.push_str("    <details>\n");
        for detail in &r.details {
            out.push_str(&format!("      <detail>{}</detail>\n", escape_xml(detail)));
        }
        out.push_str("    </details>\n");
        out.push_str(&format!(
            "    <verification_link>{}</verification_link>\n",
            escape_xml(&r.verification_link)
        ));
        out.push_str("  </certification>\n");
    }
    out.push_str("</certifications>\n");
    out.into_bytes()
}

pub fn render_html(records: &[OutputRecord]) -> Vec<u8> {
    report::render_html(records)
}

fn paint_status(status: &str, badge: BadgeStyle) -> colored::ColoredString {
    let label = format!(" {} ", status);
    match badge {
        BadgeStyle::Green => label.black().on_green().bold(),
        BadgeStyle::Yellow => label.black().on_yellow().bold(),
        BadgeStyle::Blue => label.white().on_blue().bold(),
    }
}

/// Console analogue of the tile grid: one compact entry per record, in
/// catalog order.
pub fn print_list(records: &[CertificationRecord]) {
    for record in records {
        println!(
            "{} {}  {}",
            record.icon.symbol(),
            record.title.green().bold(),
            paint_status(&record.status, record.badge),
        );
        println!("  {}", record.issuer.bright_black());
        println!("  {}", record.description.white());
        println!();
    }
}

/// Console analogue of the detail overlay: the full record, bullets
/// prefixed with a check glyph.
pub fn print_detail(record: &CertificationRecord) {
    println!(
        "{} {}  {}",
        record.icon.symbol(),
        record.title.green().bold(),
        paint_status(&record.status, record.badge),
    );
    println!(
        "  {} {} {}",
        record.issuer.bright_black(),
        "|".bright_black(),
        record.date.bright_black()
    );
    println!();
    println!("  {}", record.description.white());
    println!();
    println!("  {}", "Key Highlights".green().bold());
    for detail in record.details.iter() {
        println!("  {} {}", CHECK_GLYPH.green(), detail.white());
    }
    println!();
    println!(
        "  {} {}",
        LINK_GLYPH.green(),
        record.verification_link.green().underline()
    );
}

pub fn find_by_title<'a>(
    records: &'a [CertificationRecord],
    title: &str,
) -> Option<&'a CertificationRecord> {
    let query = title.trim().to_lowercase();
    records
        .iter()
        .find(|r| r.title.to_lowercase() == query)
        .or_else(|| records.iter().find(|r| r.title.to_lowercase().contains(&query)))
}
