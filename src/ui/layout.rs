//! Screen regions and mouse hit-testing.
//!
//! Regions are pure functions of the terminal area, so the renderer and the
//! mouse handler always agree on where each element is.

use ratatui::layout::Rect;

use crate::ui::generate::FormField;

pub const DIALOG_WIDTH: u16 = 64;
pub const DIALOG_HEIGHT: u16 = 20;
/// Inner height the roomy generate layout needs; below it rows are packed.
const DIALOG_FULL_INNER_HEIGHT: u16 = DIALOG_HEIGHT - 2;
pub const ACTION_DIALOG_HEIGHT: u16 = 14;
const ACTION_FULL_INNER_HEIGHT: u16 = ACTION_DIALOG_HEIGHT - 2;
pub const LOG_FILTER_HEIGHT: u16 = 4;
pub const TRIGGER_LABEL: &str = "[ Generate certificate ]";
pub const CLOSE_LABEL: &str = "[x]";
pub const RELOAD_LABEL: &str = "[ Reload preview ]";
pub const SUBMIT_LABEL: &str = "[ Generate ]";
pub const RUN_LABEL: &str = "[ Run ]";

/// What a mouse press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// Dashboard button that opens the dialog.
    OpenTrigger,
    /// The dimmed layer around the dialog content.
    Overlay,
    /// Any part of the dialog content without its own action.
    Content,
    CloseButton,
    ReloadButton,
    SubmitButton,
    Field(FormField),
    /// Visible row of the certificate table, counted from the first shown row.
    TableRow(usize),
    /// Dashboard area without an action.
    Nothing,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Center a `width` x `height` rect in `area`, shrinking it to fit.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && row >= rect.y
        && col < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardRegions {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub trigger: Rect,
    pub table: Rect,
}

impl DashboardRegions {
    pub fn compute(area: Rect) -> Self {
        let (header, body, footer) = layout_regions(area);
        let trigger = Rect {
            x: body.x + 2,
            y: body.y + 1,
            width: TRIGGER_LABEL.chars().count() as u16,
            height: 1,
        }
        .intersection(body);
        let table = Rect {
            x: body.x + 1,
            y: body.y + 3,
            width: body.width.saturating_sub(2),
            height: body.height.saturating_sub(3),
        }
        .intersection(body);
        Self {
            header,
            body,
            footer,
            trigger,
            table,
        }
    }

    /// Data rows inside the table's border and header.
    pub fn table_rows(&self) -> Rect {
        Rect {
            x: self.table.x + 1,
            y: self.table.y + 2,
            width: self.table.width.saturating_sub(2),
            height: self.table.height.saturating_sub(3),
        }
        .intersection(self.table)
    }

    pub fn hit_test(&self, col: u16, row: u16) -> ClickTarget {
        if contains(self.trigger, col, row) {
            return ClickTarget::OpenTrigger;
        }
        let rows = self.table_rows();
        if contains(rows, col, row) {
            return ClickTarget::TableRow((row - rows.y) as usize);
        }
        ClickTarget::Nothing
    }
}

/// First table row to show so that `selected` stays on screen.
pub fn table_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return selected;
    }
    selected.saturating_sub(visible_rows - 1)
}

/// Logs screen: filter panel above the entry table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogsRegions {
    pub filters: Rect,
    pub table: Rect,
}

impl LogsRegions {
    pub fn compute(area: Rect) -> Self {
        let (_, body, _) = layout_regions(area);
        let filter_height = LOG_FILTER_HEIGHT.min(body.height);
        let filters = Rect {
            x: body.x + 1,
            y: body.y,
            width: body.width.saturating_sub(2),
            height: filter_height,
        }
        .intersection(body);
        let table = Rect {
            x: body.x + 1,
            y: body.y + filter_height,
            width: body.width.saturating_sub(2),
            height: body.height.saturating_sub(filter_height),
        }
        .intersection(body);
        Self { filters, table }
    }
}

/// Row offsets inside the generate dialog border.
struct DialogPlan {
    first_field: u16,
    preview_label: u16,
    preview: u16,
    preview_rows: u16,
    buttons: u16,
    status_label: u16,
    status_log: u16,
}

impl DialogPlan {
    const FULL: DialogPlan = DialogPlan {
        first_field: 1,
        preview_label: 6,
        preview: 7,
        preview_rows: 2,
        buttons: 10,
        status_label: 12,
        status_log: 13,
    };

    /// No blank rows, one-line preview. Keeps the buttons and the start of
    /// the status log on short terminals.
    const COMPACT: DialogPlan = DialogPlan {
        first_field: 0,
        preview_label: 4,
        preview: 5,
        preview_rows: 1,
        buttons: 6,
        status_label: 7,
        status_log: 8,
    };
}

fn inner_rect(content: Rect) -> Rect {
    Rect {
        x: content.x + 1,
        y: content.y + 1,
        width: content.width.saturating_sub(2),
        height: content.height.saturating_sub(2),
    }
}

fn close_button_rect(content: Rect) -> Rect {
    let close_width = CLOSE_LABEL.chars().count() as u16;
    Rect {
        x: content.x + content.width.saturating_sub(close_width + 2),
        y: content.y,
        width: close_width,
        height: 1,
    }
    .intersection(content)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DialogRegions {
    pub overlay: Rect,
    pub content: Rect,
    pub close_button: Rect,
    pub fields: [Rect; 4],
    pub preview_label: Rect,
    pub preview: Rect,
    pub reload_button: Rect,
    pub submit_button: Rect,
    pub status_label: Rect,
    pub status_log: Rect,
}

impl DialogRegions {
    pub fn compute(area: Rect) -> Self {
        let content = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let inner = inner_rect(content);
        let plan = if inner.height >= DIALOG_FULL_INNER_HEIGHT {
            DialogPlan::FULL
        } else {
            DialogPlan::COMPACT
        };
        let row = |offset: u16, height: u16| {
            Rect {
                x: inner.x,
                y: inner.y + offset,
                width: inner.width,
                height,
            }
            .intersection(inner)
        };
        let button = |offset_x: u16, label: &str| {
            Rect {
                x: inner.x + offset_x,
                y: inner.y + plan.buttons,
                width: label.chars().count() as u16,
                height: 1,
            }
            .intersection(inner)
        };
        let first = plan.first_field;

        Self {
            overlay: area,
            content,
            close_button: close_button_rect(content),
            fields: [
                row(first, 1),
                row(first + 1, 1),
                row(first + 2, 1),
                row(first + 3, 1),
            ],
            preview_label: row(plan.preview_label, 1),
            preview: row(plan.preview, plan.preview_rows),
            reload_button: button(2, RELOAD_LABEL),
            submit_button: button(2 + RELOAD_LABEL.chars().count() as u16 + 2, SUBMIT_LABEL),
            status_label: row(plan.status_label, 1),
            status_log: row(
                plan.status_log,
                inner.height.saturating_sub(plan.status_log),
            ),
        }
    }

    pub fn field(&self, field: FormField) -> Rect {
        let index = FormField::ALL.iter().position(|f| *f == field).unwrap_or(0);
        self.fields[index]
    }

    /// Resolve a mouse press. Anything outside the content is the overlay.
    pub fn hit_test(&self, col: u16, row: u16) -> ClickTarget {
        if contains(self.close_button, col, row) {
            return ClickTarget::CloseButton;
        }
        if contains(self.reload_button, col, row) {
            return ClickTarget::ReloadButton;
        }
        if contains(self.submit_button, col, row) {
            return ClickTarget::SubmitButton;
        }
        for (field, rect) in FormField::ALL.iter().zip(self.fields.iter()) {
            if contains(*rect, col, row) {
                return ClickTarget::Field(*field);
            }
        }
        if contains(self.content, col, row) {
            return ClickTarget::Content;
        }
        ClickTarget::Overlay
    }
}

/// Certificate action dialog: details, command preview, run button, status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionRegions {
    pub overlay: Rect,
    pub content: Rect,
    pub close_button: Rect,
    pub details: Rect,
    pub preview: Rect,
    pub run_button: Rect,
    pub status_log: Rect,
}

impl ActionRegions {
    pub fn compute(area: Rect) -> Self {
        let content = centered_rect_by_size(area, DIALOG_WIDTH, ACTION_DIALOG_HEIGHT);
        let inner = inner_rect(content);
        let gap = u16::from(inner.height >= ACTION_FULL_INNER_HEIGHT);
        let row = |offset: u16, height: u16| {
            Rect {
                x: inner.x,
                y: inner.y + offset,
                width: inner.width,
                height,
            }
            .intersection(inner)
        };

        let preview_y = 4 + gap;
        let preview_rows = 1 + gap;
        let run_y = preview_y + preview_rows + gap;
        let log_y = run_y + 1;
        let run_button = Rect {
            x: inner.x + 2,
            y: inner.y + run_y,
            width: RUN_LABEL.chars().count() as u16,
            height: 1,
        }
        .intersection(inner);

        Self {
            overlay: area,
            content,
            close_button: close_button_rect(content),
            details: row(0, 4),
            preview: row(preview_y, preview_rows),
            run_button,
            status_log: row(log_y, inner.height.saturating_sub(log_y)),
        }
    }

    /// Resolve a mouse press. Anything outside the content is the overlay.
    pub fn hit_test(&self, col: u16, row: u16) -> ClickTarget {
        if contains(self.close_button, col, row) {
            ClickTarget::CloseButton
        } else if contains(self.run_button, col, row) {
            ClickTarget::SubmitButton
        } else if contains(self.content, col, row) {
            ClickTarget::Content
        } else {
            ClickTarget::Overlay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 100, 40)
    }

    #[test]
    fn dialog_is_centered() {
        let regions = DialogRegions::compute(screen());
        assert_eq!(regions.content, Rect::new(18, 10, 64, 20));
    }

    #[test]
    fn corners_outside_content_hit_overlay() {
        let regions = DialogRegions::compute(screen());
        assert_eq!(regions.hit_test(0, 0), ClickTarget::Overlay);
        assert_eq!(regions.hit_test(99, 39), ClickTarget::Overlay);
        assert_eq!(regions.hit_test(17, 15), ClickTarget::Overlay);
    }

    #[test]
    fn content_border_is_not_overlay() {
        let regions = DialogRegions::compute(screen());
        assert_eq!(regions.hit_test(18, 10), ClickTarget::Content);
        assert_eq!(regions.hit_test(81, 29), ClickTarget::Content);
    }

    #[test]
    fn buttons_and_fields_resolve() {
        let regions = DialogRegions::compute(screen());
        let r = regions.reload_button;
        assert_eq!(regions.hit_test(r.x, r.y), ClickTarget::ReloadButton);
        let s = regions.submit_button;
        assert_eq!(regions.hit_test(s.x + s.width - 1, s.y), ClickTarget::SubmitButton);
        let c = regions.close_button;
        assert_eq!(regions.hit_test(c.x + 1, c.y), ClickTarget::CloseButton);
        let f = regions.field(FormField::Duration);
        assert_eq!(
            regions.hit_test(f.x + 5, f.y),
            ClickTarget::Field(FormField::Duration)
        );
    }

    #[test]
    fn full_layout_status_log_fills_dialog() {
        let regions = DialogRegions::compute(screen());
        assert_eq!(regions.submit_button.y, 21);
        assert_eq!(regions.status_log, Rect::new(19, 24, 62, 5));
    }

    #[test]
    fn short_terminal_packs_rows_and_keeps_buttons() {
        let regions = DialogRegions::compute(Rect::new(0, 0, 80, 16));
        assert_eq!(regions.content, Rect::new(8, 0, 64, 16));
        assert_eq!(regions.fields[0].y, 1);
        assert_eq!(regions.submit_button.height, 1);
        assert_eq!(regions.submit_button.y, 7);
        assert_eq!(regions.status_log.y, 9);
        assert_eq!(regions.status_log.height, 6);

        let s = regions.submit_button;
        assert_eq!(regions.hit_test(s.x, s.y), ClickTarget::SubmitButton);
    }

    #[test]
    fn buttons_survive_twelve_rows() {
        let regions = DialogRegions::compute(Rect::new(0, 0, 80, 12));
        let r = regions.reload_button;
        assert_eq!(r.height, 1);
        assert_eq!(regions.hit_test(r.x, r.y), ClickTarget::ReloadButton);
        assert_eq!(regions.status_log.height, 2);
    }

    #[test]
    fn small_screen_shrinks_dialog() {
        let regions = DialogRegions::compute(Rect::new(0, 0, 30, 10));
        assert_eq!(regions.content, Rect::new(0, 0, 30, 10));
        assert_eq!(regions.hit_test(29, 9), ClickTarget::Content);
    }

    #[test]
    fn dashboard_trigger_hit() {
        let regions = DashboardRegions::compute(screen());
        assert_eq!(regions.trigger, Rect::new(2, 4, 24, 1));
        assert_eq!(regions.hit_test(2, 4), ClickTarget::OpenTrigger);
        assert_eq!(regions.hit_test(26, 4), ClickTarget::Nothing);
    }

    #[test]
    fn table_rows_start_below_header() {
        let regions = DashboardRegions::compute(screen());
        // table at y=6: border, header, then data
        assert_eq!(regions.hit_test(10, 8), ClickTarget::TableRow(0));
        assert_eq!(regions.hit_test(10, 10), ClickTarget::TableRow(2));
        assert_eq!(regions.hit_test(10, 7), ClickTarget::Nothing);
    }

    #[test]
    fn table_offset_follows_selection() {
        assert_eq!(table_offset(0, 5), 0);
        assert_eq!(table_offset(4, 5), 0);
        assert_eq!(table_offset(7, 5), 3);
    }

    #[test]
    fn action_dialog_hits() {
        let regions = ActionRegions::compute(screen());
        assert_eq!(regions.content, Rect::new(18, 13, 64, 14));
        let run = regions.run_button;
        assert_eq!(run.y, 14 + 8);
        assert_eq!(regions.hit_test(run.x, run.y), ClickTarget::SubmitButton);
        assert_eq!(regions.hit_test(0, 0), ClickTarget::Overlay);
        assert_eq!(regions.hit_test(20, 15), ClickTarget::Content);
    }

    #[test]
    fn logs_table_sits_under_filters() {
        let regions = LogsRegions::compute(screen());
        assert_eq!(regions.filters, Rect::new(1, 3, 98, 4));
        assert_eq!(regions.table, Rect::new(1, 7, 98, 30));
    }
}
