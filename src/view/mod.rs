pub mod fx;
pub mod grid;
pub mod layout;
pub mod modal;

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use ratatui::Frame;

use crate::catalog::CertificationRecord;
use crate::session::{apply_event, Selection, Transition, ViewEvent};
use self::fx::Motion;
use self::layout::{GridLayout, HitRegion, ModalLayout};

/// The interactive view: an immutable record list, the transient
/// selection, the keyboard cursor, and the last computed layout (kept so
/// clicks between draws resolve against what is actually on screen).
pub struct ViewState {
    records: Vec<CertificationRecord>,
    selection: Selection,
    cursor: usize,
    motion: Box<dyn Motion>,
    open_link: Box<dyn FnMut(&str)>,
    grid: GridLayout,
    modal: Option<ModalLayout>,
    area: Rect,
    should_quit: bool,
}

impl ViewState {
    pub fn new(records: Vec<CertificationRecord>, mut motion: Box<dyn Motion>) -> Self {
        motion.view_mounted(records.len());
        Self {
            records,
            selection: Selection::default(),
            cursor: 0,
            motion,
            open_link: Box::new(|url| crate::utils::open_in_browser(url)),
            grid: GridLayout::default(),
            modal: None,
            area: Rect::default(),
            should_quit: false,
        }
    }

    /// Swap the navigation delegate. Used by tests to observe link
    /// activations without spawning a browser.
    pub fn with_link_opener(mut self, opener: Box<dyn FnMut(&str)>) -> Self {
        self.open_link = opener;
        self
    }

    pub fn records(&self) -> &[CertificationRecord] {
        &self.records
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_record(&self) -> Option<&CertificationRecord> {
        self.selection
            .selected()
            .and_then(|index| self.records.get(index))
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn relayout(&mut self, area: Rect) {
        self.area = area;
        self.grid = layout::grid_layout(area, self.records.len());
        self.modal = self
            .selected_record()
            .map(|record| layout::modal_layout(area, record, self.motion.modal_progress()));
    }

    pub fn render(&mut self, f: &mut Frame) {
        self.relayout(f.area());
        grid::render_header(f, self.grid.header);

        let selected_title = self.selected_record().map(|r| r.title.clone());
        let modal_open = self.selection.is_open();
        for (index, (record, tile)) in self
            .records
            .iter()
            .zip(self.grid.tiles.iter())
            .enumerate()
        {
            // Highlight matching is by title, the catalog's unique key.
            let selected = selected_title.as_deref() == Some(record.title.as_str());
            grid::render_tile(
                f,
                *tile,
                record,
                selected,
                index == self.cursor && !modal_open,
                self.motion.tile_progress(index),
            );
        }

        if self.area.height > 0 {
            let footer = Rect {
                x: self.area.x,
                y: self.area.y + self.area.height - 1,
                width: self.area.width,
                height: 1,
            };
            grid::render_footer(f, footer);
        }

        if let (Some(record), Some(modal)) = (self.selected_record(), self.modal.as_ref()) {
            modal::render(f, record, modal);
        }
    }

    pub fn on_tick(&mut self) {
        self.motion.tick();
    }

    pub fn handle_click(&mut self, column: u16, row: u16) {
        let event = match layout::hit_test(column, row, &self.grid, self.modal.as_ref()) {
            HitRegion::Tile(index) => {
                self.cursor = index;
                ViewEvent::TileClicked(index)
            }
            HitRegion::ModalClose => ViewEvent::CloseClicked,
            HitRegion::ModalLink => ViewEvent::LinkClicked,
            HitRegion::ModalContent => ViewEvent::ContentClicked,
            HitRegion::Backdrop => ViewEvent::BackdropClicked,
            HitRegion::Outside => return,
        };
        self.dispatch(event);
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.selection.is_open() {
                    self.dispatch(ViewEvent::CloseClicked);
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if !self.records.is_empty() {
                    self.dispatch(ViewEvent::TileClicked(self.cursor));
                }
            }
            KeyCode::Char('v') => {
                if self.selection.is_open() {
                    self.dispatch(ViewEvent::LinkClicked);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-self.columns()),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(self.columns()),
            _ => {}
        }
    }

    pub fn dispatch(&mut self, event: ViewEvent) {
        if event == ViewEvent::LinkClicked {
            if let Some(record) = self.selected_record() {
                let url = record.verification_link.clone();
                (self.open_link)(&url);
            }
            return;
        }
        match apply_event(&mut self.selection, event) {
            Transition::Opened => self.motion.modal_mounted(),
            Transition::Closed => self.motion.modal_unmounted(),
            Transition::Replaced | Transition::Unchanged => {}
        }
        if self.area.width > 0 {
            self.relayout(self.area);
        }
    }

    fn columns(&self) -> isize {
        layout::column_count(self.area.width).max(1) as isize
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.records.is_empty() {
            return;
        }
        let len = self.records.len() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, len - 1) as usize;
    }
}
