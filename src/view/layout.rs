use ratatui::layout::Rect;

use crate::catalog::CertificationRecord;
use crate::utils;

pub const HEADER_HEIGHT: u16 = 4;
pub const TILE_HEIGHT: u16 = 8;
pub const TILE_GAP: u16 = 2;
pub const ROW_GAP: u16 = 1;
pub const MODAL_MAX_WIDTH: u16 = 72;

/// Column count for the tile grid: single column on narrow terminals,
/// two on medium, three on wide.
pub fn column_count(width: u16) -> usize {
    if width < 72 {
        1
    } else if width < 110 {
        2
    } else {
        3
    }
}

#[derive(Clone, Debug, Default)]
pub struct GridLayout {
    pub header: Rect,
    pub tiles: Vec<Rect>,
}

/// One rect per record, in catalog order. Tiles that fall below the
/// viewport are clipped to zero height, which also removes them from
/// hit-testing.
pub fn grid_layout(area: Rect, record_count: usize) -> GridLayout {
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: HEADER_HEIGHT.min(area.height),
    };

    let columns = column_count(area.width) as u16;
    let usable = area
        .width
        .saturating_sub(TILE_GAP * columns.saturating_sub(1));
    let tile_width = (usable / columns.max(1)).max(1);

    let mut tiles = Vec::with_capacity(record_count);
    for index in 0..record_count {
        let column = (index as u16) % columns.max(1);
        let row = (index as u16) / columns.max(1);
        let tile = Rect {
            x: area.x + column * (tile_width + TILE_GAP),
            y: header.y + header.height + row * (TILE_HEIGHT + ROW_GAP),
            width: tile_width,
            height: TILE_HEIGHT,
        };
        tiles.push(tile.intersection(area));
    }

    GridLayout { header, tiles }
}

#[derive(Clone, Debug)]
pub struct ModalLayout {
    /// The full-screen overlay behind the content; carries the close
    /// action.
    pub overlay: Rect,
    pub content: Rect,
    pub close: Rect,
    pub link: Rect,
}

/// Center the detail box over the grid, sized to the record it shows.
/// `progress` in 0..=1 scales the box while the enter motion runs; at 1.0
/// the box is settled at its final size.
pub fn modal_layout(area: Rect, record: &CertificationRecord, progress: f32) -> ModalLayout {
    let full_width = MODAL_MAX_WIDTH.min(area.width.saturating_sub(4)).max(20);
    let text_width = usize::from(full_width.saturating_sub(4));
    let description_lines = utils::wrapped_line_count(&record.description, text_width) as u16;
    let bullet_lines = record.details.len() as u16;

    // borders + header block + description + highlights section + link row
    let full_height = (2 + 3 + description_lines + 2 + bullet_lines + 2)
        .min(area.height.saturating_sub(2))
        .max(7);

    let progress = progress.clamp(0.0, 1.0);
    let width = scaled(full_width, progress).max(10);
    let height = scaled(full_height, progress).max(3);

    let content = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let close = Rect {
        x: content.x + content.width.saturating_sub(6),
        y: content.y,
        width: 5,
        height: 1,
    };

    let link = Rect {
        x: content.x + 2,
        y: content.y + content.height.saturating_sub(2),
        width: content.width.saturating_sub(4).min(26),
        height: 1,
    };

    ModalLayout {
        overlay: area,
        content,
        close,
        link,
    }
}

fn scaled(value: u16, progress: f32) -> u16 {
    let min = f32::from(value) * 0.4;
    let max = f32::from(value);
    (min + (max - min) * progress).round() as u16
}

/// The named screen area a click resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitRegion {
    Tile(usize),
    ModalClose,
    ModalLink,
    ModalContent,
    Backdrop,
    Outside,
}

/// Resolve a click to a region. While the detail view is open the close
/// action is attached only to the overlay outside the content box; the
/// content box itself resolves to regions that never close, so clicks
/// inside it cannot reach the backdrop handler.
pub fn hit_test(column: u16, row: u16, grid: &GridLayout, modal: Option<&ModalLayout>) -> HitRegion {
    if let Some(modal) = modal {
        if contains(modal.close, column, row) {
            return HitRegion::ModalClose;
        }
        if contains(modal.link, column, row) {
            return HitRegion::ModalLink;
        }
        if contains(modal.content, column, row) {
            return HitRegion::ModalContent;
        }
        return HitRegion::Backdrop;
    }
    for (index, tile) in grid.tiles.iter().enumerate() {
        if contains(*tile, column, row) {
            return HitRegion::Tile(index);
        }
    }
    HitRegion::Outside
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn wide() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn column_count_follows_breakpoints() {
        assert_eq!(column_count(60), 1);
        assert_eq!(column_count(80), 2);
        assert_eq!(column_count(120), 3);
    }

    #[test]
    fn grid_produces_one_tile_per_record() {
        let grid = grid_layout(wide(), 3);
        assert_eq!(grid.tiles.len(), 3);
        // Three columns on a wide terminal: all tiles share a row.
        assert!(grid.tiles.iter().all(|t| t.y == grid.tiles[0].y));
    }

    #[test]
    fn narrow_grid_stacks_tiles_vertically() {
        let grid = grid_layout(Rect::new(0, 0, 60, 60), 3);
        assert_eq!(grid.tiles.len(), 3);
        assert!(grid.tiles[1].y > grid.tiles[0].y);
        assert!(grid.tiles[2].y > grid.tiles[1].y);
    }

    #[test]
    fn offscreen_tiles_clip_to_nothing() {
        let grid = grid_layout(Rect::new(0, 0, 60, 12), 3);
        assert_eq!(grid.tiles[2].height, 0);
        let hit = hit_test(5, 30, &grid, None);
        assert_eq!(hit, HitRegion::Outside);
    }

    #[test]
    fn clicks_resolve_to_tiles_by_index() {
        let grid = grid_layout(wide(), 3);
        for (index, tile) in grid.tiles.iter().enumerate() {
            let hit = hit_test(tile.x + 1, tile.y + 1, &grid, None);
            assert_eq!(hit, HitRegion::Tile(index));
        }
    }

    #[test]
    fn open_modal_scopes_the_close_action_to_the_backdrop() {
        let records = catalog::built_in_certifications();
        let grid = grid_layout(wide(), records.len());
        let modal = modal_layout(wide(), &records[0], 1.0);

        // Corner of the screen is backdrop, not a tile.
        assert_eq!(hit_test(0, 0, &grid, Some(&modal)), HitRegion::Backdrop);
        // Inside the box is content.
        assert_eq!(
            hit_test(modal.content.x + 8, modal.content.y + 3, &grid, Some(&modal)),
            HitRegion::ModalContent
        );
        // The close control and link rows resolve to their own regions.
        assert_eq!(
            hit_test(modal.close.x + 1, modal.close.y, &grid, Some(&modal)),
            HitRegion::ModalClose
        );
        assert_eq!(
            hit_test(modal.link.x + 1, modal.link.y, &grid, Some(&modal)),
            HitRegion::ModalLink
        );
    }

    #[test]
    fn modal_enter_motion_grows_toward_final_size() {
        let records = catalog::built_in_certifications();
        let small = modal_layout(wide(), &records[0], 0.0);
        let full = modal_layout(wide(), &records[0], 1.0);
        assert!(small.content.width < full.content.width);
        assert!(small.content.height < full.content.height);
        assert!(full.content.width <= MODAL_MAX_WIDTH);
    }
}
