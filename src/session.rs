use std::path::Path;

use thiserror::Error;

use crate::catalog::{self, CatalogError, CertificationRecord};

/// Where the session's catalog comes from. All variants resolve once at
/// startup; there is no reload path.
#[derive(Clone, Debug)]
pub enum CatalogSource {
    BuiltIn,
    FilePath(String),
    Inline(Vec<CertificationRecord>),
}

#[derive(Clone, Debug)]
pub struct Options {
    pub catalog: CatalogSource,
    pub tick_rate_ms: u64,
    pub motion: bool,
    pub no_color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            catalog: CatalogSource::BuiltIn,
            tick_rate_ms: 60,
            motion: true,
            no_color: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid tick_rate_ms {value}, expected 0-1000")]
    InvalidTickRate { value: u64 },
}

/// An immutable catalog plus the options a view session runs with. The
/// catalog is validated here, once, so the view never has to handle
/// duplicate titles or malformed links.
#[derive(Clone, Debug)]
pub struct Session {
    options: Options,
    records: Vec<CertificationRecord>,
}

impl Session {
    pub fn new(options: Options) -> Result<Self, SessionError> {
        if options.tick_rate_ms > 1000 {
            return Err(SessionError::InvalidTickRate {
                value: options.tick_rate_ms,
            });
        }
        let records = match &options.catalog {
            CatalogSource::BuiltIn => catalog::built_in_certifications(),
            CatalogSource::FilePath(path) => catalog::load_catalog_file(Path::new(path))?,
            CatalogSource::Inline(records) => records.clone(),
        };
        catalog::validate_catalog(&records)?;
        Ok(Self { options, records })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn records(&self) -> &[CertificationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<CertificationRecord> {
        self.records
    }
}

/// The transient reference determining which record's detail view is
/// shown. Holds an index into the catalog rather than a copy of the
/// record, so the view can never diverge from the source list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<usize>,
}

/// What a state change did, reported so motion collaborators receive
/// their mount/unmount triggers. Replacing the shown record keeps the
/// detail view mounted and therefore is not an open or close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Replaced,
    Closed,
    Unchanged,
}

impl Selection {
    pub fn selected(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn select(&mut self, index: usize) -> Transition {
        match self.current {
            Some(current) if current == index => Transition::Unchanged,
            Some(_) => {
                self.current = Some(index);
                Transition::Replaced
            }
            None => {
                self.current = Some(index);
                Transition::Opened
            }
        }
    }

    pub fn clear(&mut self) -> Transition {
        if self.current.take().is_some() {
            Transition::Closed
        } else {
            Transition::Unchanged
        }
    }
}

/// Interaction events after hit-region resolution. The backdrop and the
/// close control are the only regions carrying the close action; content
/// clicks deliberately map to a no-op so they can never bubble into a
/// close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    TileClicked(usize),
    BackdropClicked,
    CloseClicked,
    ContentClicked,
    LinkClicked,
}

pub fn apply_event(selection: &mut Selection, event: ViewEvent) -> Transition {
    match event {
        ViewEvent::TileClicked(index) => selection.select(index),
        ViewEvent::BackdropClicked | ViewEvent::CloseClicked => selection.clear(),
        ViewEvent::ContentClicked | ViewEvent::LinkClicked => Transition::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_clear_walks_open_and_closed() {
        let mut selection = Selection::default();
        assert!(!selection.is_open());
        assert_eq!(selection.select(1), Transition::Opened);
        assert_eq!(selection.selected(), Some(1));
        assert_eq!(selection.clear(), Transition::Closed);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn selecting_another_record_replaces_without_closing() {
        let mut selection = Selection::default();
        selection.select(0);
        assert_eq!(selection.select(2), Transition::Replaced);
        assert_eq!(selection.selected(), Some(2));
    }

    #[test]
    fn reselecting_the_open_record_changes_nothing() {
        let mut selection = Selection::default();
        selection.select(1);
        assert_eq!(selection.select(1), Transition::Unchanged);
        assert_eq!(selection.selected(), Some(1));
    }

    #[test]
    fn clearing_a_closed_selection_is_a_no_op() {
        let mut selection = Selection::default();
        assert_eq!(selection.clear(), Transition::Unchanged);
    }

    #[test]
    fn content_clicks_never_reach_the_close_action() {
        let mut selection = Selection::default();
        selection.select(0);
        assert_eq!(
            apply_event(&mut selection, ViewEvent::ContentClicked),
            Transition::Unchanged
        );
        assert_eq!(
            apply_event(&mut selection, ViewEvent::LinkClicked),
            Transition::Unchanged
        );
        assert_eq!(selection.selected(), Some(0));
    }

    #[test]
    fn close_control_matches_backdrop_behavior() {
        let mut a = Selection::default();
        let mut b = Selection::default();
        a.select(2);
        b.select(2);
        assert_eq!(
            apply_event(&mut a, ViewEvent::BackdropClicked),
            apply_event(&mut b, ViewEvent::CloseClicked),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn session_rejects_out_of_range_tick_rate() {
        let err = Session::new(Options {
            tick_rate_ms: 5000,
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(err, SessionError::InvalidTickRate { value: 5000 }));
    }

    #[test]
    fn session_validates_inline_catalogs() {
        let mut records = crate::catalog::built_in_certifications();
        records[1].title = records[0].title.clone();
        let err = Session::new(Options {
            catalog: CatalogSource::Inline(records),
            ..Default::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SessionError::Catalog(CatalogError::DuplicateTitle { .. })
        ));
    }
}
