//! Daily load report rendering.
//!
//! Takes a point-in-time snapshot of all doors (with their detail
//! fields) and renders a landscape-letter PDF: a status summary table
//! followed by one color-coded row per door. Pure read -- no mutation,
//! no broadcast; the caller is responsible for fetching the snapshot.

use chrono::{DateTime, Utc};
use printpdf::path::PaintMode;
use printpdf::*;

use dockboard_core::status::DoorStatus;
use dockboard_db::models::door_detail::DoorWithDetail;

/// Notes longer than this many characters are truncated with `...`.
const NOTES_BUDGET: usize = 50;

/// Landscape letter page, in millimeters.
const PAGE_WIDTH: f32 = 279.4;
const PAGE_HEIGHT: f32 = 215.9;

const MARGIN: f32 = 10.0;
const ROW_HEIGHT: f32 = 7.0;
/// Rows below this y coordinate start a new page.
const BOTTOM_LIMIT: f32 = 15.0;

/// Column x positions for the per-door table.
const COLS: [(f32, &str); 7] = [
    (12.0, "Run"),
    (47.0, "Status"),
    (82.0, "Run #"),
    (117.0, "Loader"),
    (152.0, "Trailer"),
    (187.0, "Stores"),
    (222.0, "Notes"),
];

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Render the door report as PDF bytes.
///
/// `generated_at` appears in the title; pass the current time. The
/// row order follows the input slice (callers pass doors id-ascending).
pub fn render_door_report(
    rows: &[DoorWithDetail],
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ReportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Daily Load Report",
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - 18.0;

    // Title.
    let title = format!(
        "Daily Load Report - {}",
        generated_at.format("%Y-%m-%d %H:%M")
    );
    layer.use_text(title, 20.0, Mm(MARGIN), Mm(y), &font_bold);
    y -= 12.0;

    // Status summary.
    layer.use_text("Status Summary", 13.0, Mm(MARGIN), Mm(y), &font_bold);
    y -= 8.0;

    for (label, count) in summary_counts(rows) {
        layer.use_text(
            format!("{label}: {count}"),
            11.0,
            Mm(MARGIN + 4.0),
            Mm(y),
            &font,
        );
        y -= 6.0;
    }
    y -= 6.0;

    // Table header.
    draw_header(&layer, &font_bold, y);
    y -= ROW_HEIGHT;

    for row in rows {
        if y < BOTTOM_LIMIT {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - 18.0;
            draw_header(&layer, &font_bold, y);
            y -= ROW_HEIGHT;
        }
        draw_row(&layer, &font, y, row);
        y -= ROW_HEIGHT;
    }

    Ok(doc.save_to_bytes()?)
}

/// The fixed summary rows: the four conventional statuses plus total.
fn summary_counts(rows: &[DoorWithDetail]) -> Vec<(String, usize)> {
    let mut summary: Vec<(String, usize)> = ["Empty", "Loading", "Loaded", "Backhaul"]
        .iter()
        .map(|status| {
            let count = rows.iter().filter(|r| r.status == *status).count();
            ((*status).to_string(), count)
        })
        .collect();
    summary.push(("Total Doors".to_string(), rows.len()));
    summary
}

fn draw_header(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32) {
    layer.set_fill_color(Color::Rgb(Rgb::new(0.17, 0.24, 0.31, None)));
    layer.add_rect(
        Rect::new(
            Mm(MARGIN),
            Mm(y - 2.0),
            Mm(PAGE_WIDTH - MARGIN),
            Mm(y + ROW_HEIGHT - 2.0),
        )
        .with_mode(PaintMode::Fill),
    );
    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    for (x, label) in COLS {
        layer.use_text(label, 11.0, Mm(x), Mm(y), font);
    }
    // Restore black for whatever draws next.
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
}

fn draw_row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, row: &DoorWithDetail) {
    layer.set_fill_color(status_color(&row.status));
    layer.add_rect(
        Rect::new(
            Mm(MARGIN),
            Mm(y - 2.0),
            Mm(PAGE_WIDTH - MARGIN),
            Mm(y + ROW_HEIGHT - 2.0),
        )
        .with_mode(PaintMode::Fill),
    );

    // Black text reads acceptably on all four status colors.
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));

    let notes = row.notes.as_deref().map(truncate_notes).unwrap_or_default();
    let cells: [&str; 7] = [
        &row.name,
        &row.status,
        row.run_number.as_deref().unwrap_or(""),
        row.loader.as_deref().unwrap_or(""),
        row.trailer.as_deref().unwrap_or(""),
        row.stores.as_deref().unwrap_or(""),
        &notes,
    ];
    for ((x, _), cell) in COLS.iter().zip(cells) {
        layer.use_text(cell, 10.0, Mm(*x), Mm(y), font);
    }
}

/// Background color for a status row. Unknown statuses render on white
/// rather than failing.
fn status_color(status: &str) -> Color {
    let (r, g, b): (u8, u8, u8) = match DoorStatus::parse(status) {
        DoorStatus::Empty => (0x95, 0x2b, 0x16),
        DoorStatus::Loading => (0xec, 0xc9, 0x4b),
        DoorStatus::Loaded => (0x64, 0x95, 0x3b),
        DoorStatus::Backhaul => (0x19, 0x32, 0x44),
        DoorStatus::Other(_) => (0xff, 0xff, 0xff),
    };
    Color::Rgb(Rgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        None,
    ))
}

/// Truncate notes to the fixed character budget, appending `...` when
/// anything was cut. Counts characters, not bytes, so multi-byte input
/// never panics.
fn truncate_notes(notes: &str) -> String {
    if notes.chars().count() <= NOTES_BUDGET {
        return notes.to_string();
    }
    let truncated: String = notes.chars().take(NOTES_BUDGET).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, status: &str, notes: Option<&str>) -> DoorWithDetail {
        DoorWithDetail {
            id,
            name: format!("Run {id}"),
            status: status.to_string(),
            run_number: None,
            loader: None,
            trailer: None,
            stores: None,
            notes: notes.map(String::from),
        }
    }

    #[test]
    fn short_notes_pass_through() {
        assert_eq!(truncate_notes("hold for driver"), "hold for driver");
    }

    #[test]
    fn long_notes_are_truncated_with_ellipsis() {
        let long = "x".repeat(80);
        let out = truncate_notes(&long);
        assert_eq!(out.chars().count(), NOTES_BUDGET + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn multibyte_notes_do_not_panic() {
        let long = "ß".repeat(60);
        let out = truncate_notes(&long);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn summary_covers_fixed_statuses_and_total() {
        let rows = vec![
            row(1, "Backhaul", None),
            row(2, "Backhaul", None),
            row(3, "Loading", None),
            row(4, "Out of Service", None),
        ];
        let summary = summary_counts(&rows);
        assert_eq!(summary[0], ("Empty".to_string(), 0));
        assert_eq!(summary[1], ("Loading".to_string(), 1));
        assert_eq!(summary[3], ("Backhaul".to_string(), 2));
        assert_eq!(summary[4], ("Total Doors".to_string(), 4));
    }

    #[test]
    fn render_produces_pdf_bytes() {
        let rows: Vec<DoorWithDetail> = (1..=5)
            .map(|i| row(i, "Backhaul", Some("hold")))
            .collect();
        let bytes = render_door_report(&rows, chrono::Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn render_paginates_large_door_sets() {
        // Enough rows to overflow the first page several times.
        let rows: Vec<DoorWithDetail> =
            (1..=120).map(|i| row(i, "Loaded", None)).collect();
        let bytes = render_door_report(&rows, chrono::Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        // A paginated document is necessarily larger than a single page.
        assert!(bytes.len() > 4_000);
    }

    #[test]
    fn render_handles_empty_store() {
        let bytes = render_door_report(&[], chrono::Utc::now()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
