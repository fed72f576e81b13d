use ratatui::layout::Rect;

use crate::catalog::{self, BadgeStyle, CatalogError, IconGlyph};
use crate::session::{apply_event, Selection, Transition, ViewEvent};
use crate::view::fx::NoMotion;
use crate::view::layout::{self, HitRegion};
use crate::view::ViewState;

fn screen() -> Rect {
    Rect::new(0, 0, 120, 40)
}

#[test]
fn built_in_catalog_has_three_records_in_order() {
    let records = catalog::built_in_certifications();
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Offensive Security Certified Professional (OSCP)",
            "Certified Ethical Hacker (CEH)",
            "CompTIA Security+",
        ]
    );
    assert!(catalog::validate_catalog(&records).is_ok());
}

#[test]
fn initial_render_shows_all_tiles_and_no_detail_view() {
    let mut view = ViewState::new(catalog::built_in_certifications(), Box::new(NoMotion));
    view.relayout(screen());
    let grid = layout::grid_layout(screen(), view.records().len());
    assert_eq!(grid.tiles.len(), 3);
    assert!(view.selected_record().is_none());
}

#[test]
fn catalog_rejects_duplicate_titles() {
    let mut records = catalog::built_in_certifications();
    records[2].title = records[0].title.clone();
    let err = catalog::validate_catalog(&records).unwrap_err();
    match err {
        CatalogError::DuplicateTitle { title } => {
            assert_eq!(title, "Offensive Security Certified Professional (OSCP)")
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn catalog_rejects_malformed_links() {
    let mut records = catalog::built_in_certifications();
    records[1].verification_link = "not a url".to_string();
    let err = catalog::validate_catalog(&records).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidLink { .. }));
}

#[test]
fn placeholder_links_pass_as_long_as_they_are_well_formed() {
    let mut records = catalog::built_in_certifications();
    records[0].verification_link = "https://example.invalid/verify-me-later".to_string();
    assert!(catalog::validate_catalog(&records).is_ok());
}

#[test]
fn clicking_the_comptia_tile_opens_its_full_detail() {
    let mut view = ViewState::new(catalog::built_in_certifications(), Box::new(NoMotion));
    view.relayout(screen());

    let tile = layout::grid_layout(screen(), 3).tiles[2];
    view.handle_click(tile.x + 2, tile.y + 2);

    let record = view.selected_record().expect("detail view should be open");
    assert_eq!(record.title, "CompTIA Security+");
    assert_eq!(record.issuer, "CompTIA");
    assert_eq!(record.status, "Completed");
    assert_eq!(record.details.len(), 3);
    assert!(record.verification_link.contains("comptia.org"));
}

#[test]
fn backdrop_click_returns_to_an_unhighlighted_grid() {
    let mut view = ViewState::new(catalog::built_in_certifications(), Box::new(NoMotion));
    view.relayout(screen());

    let tile = layout::grid_layout(screen(), 3).tiles[1];
    view.handle_click(tile.x + 1, tile.y + 1);
    assert_eq!(
        view.selected_record().map(|r| r.issuer.as_str()),
        Some("EC-Council")
    );

    view.handle_click(1, 1);
    assert!(view.selected_record().is_none());
    assert_eq!(layout::grid_layout(screen(), view.records().len()).tiles.len(), 3);
}

#[test]
fn switching_selection_shows_the_new_record_only() {
    let mut selection = Selection::default();
    assert_eq!(
        apply_event(&mut selection, ViewEvent::TileClicked(0)),
        Transition::Opened
    );
    assert_eq!(
        apply_event(&mut selection, ViewEvent::TileClicked(2)),
        Transition::Replaced
    );
    assert_eq!(selection.selected(), Some(2));
}

#[test]
fn reselecting_the_open_record_is_idempotent() {
    let mut selection = Selection::default();
    apply_event(&mut selection, ViewEvent::TileClicked(1));
    let before = selection;
    assert_eq!(
        apply_event(&mut selection, ViewEvent::TileClicked(1)),
        Transition::Unchanged
    );
    assert_eq!(selection, before);
    assert!(selection.is_open());
}

#[test]
fn modal_content_region_never_carries_the_close_action() {
    let records = catalog::built_in_certifications();
    let grid = layout::grid_layout(screen(), records.len());
    let modal = layout::modal_layout(screen(), &records[0], 1.0);

    let mut content_hits = 0;
    for column in modal.content.x..modal.content.x + modal.content.width {
        for row in modal.content.y..modal.content.y + modal.content.height {
            match layout::hit_test(column, row, &grid, Some(&modal)) {
                HitRegion::Backdrop => panic!("close action leaked into the content box"),
                HitRegion::ModalContent => content_hits += 1,
                HitRegion::ModalClose | HitRegion::ModalLink => {}
                other => panic!("unexpected region inside the box: {other:?}"),
            }
        }
    }
    assert!(content_hits > 0);
}

#[test]
fn records_without_details_render_an_empty_highlights_section() {
    let record = crate::catalog::CertificationRecord {
        title: "GIAC Penetration Tester (GPEN)".to_string(),
        issuer: "GIAC".to_string(),
        date: "2024".to_string(),
        description: "Network penetration testing.".to_string(),
        icon: IconGlyph::Shield,
        status: "Completed".to_string(),
        badge: BadgeStyle::Green,
        details: Vec::new(),
        verification_link: "https://www.giac.org/verify".to_string(),
    };
    assert!(catalog::validate_catalog(std::slice::from_ref(&record)).is_ok());

    let layout = layout::modal_layout(screen(), &record, 1.0);
    assert!(layout.content.height >= 7);

    let rendered = crate::output::render_text(&crate::output::build_records(
        std::slice::from_ref(&record),
    ));
    let text = String::from_utf8(rendered).unwrap();
    assert!(text.contains("GPEN"));
    assert!(!text.contains("\n  - "));
}
