// Build a session from an inline catalog and print it as console tiles.
// Run with: cargo run --example library_catalog

use certfolio::catalog::{BadgeStyle, CertificationRecord, IconGlyph};
use certfolio::output;
use certfolio::session::{CatalogSource, Options, Session};

fn main() -> Result<(), String> {
    let records = vec![CertificationRecord {
        title: "GIAC Penetration Tester (GPEN)".to_string(),
        issuer: "GIAC".to_string(),
        date: "2024".to_string(),
        description: "Hands-on network penetration testing and exploitation.".to_string(),
        icon: IconGlyph::Shield,
        status: "Completed".to_string(),
        badge: BadgeStyle::Green,
        details: vec![
            "Password attacks and hash harvesting".to_string(),
            "Exploitation fundamentals".to_string(),
        ],
        verification_link: "https://www.giac.org/verify".to_string(),
    }];

    let session = Session::new(Options {
        catalog: CatalogSource::Inline(records),
        ..Default::default()
    })
    .map_err(|e| e.to_string())?;

    output::print_list(session.records());
    Ok(())
}
