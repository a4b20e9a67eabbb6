//! Handler for the PDF export.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use dockboard_db::repositories::DoorRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/export_pdf
///
/// Render all doors (with details) into the daily load report and
/// return it as an attachment. Pure read: a single snapshot query, no
/// mutation, no broadcast.
pub async fn export_pdf(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = DoorRepo::list_with_details(&state.pool).await?;

    let generated_at = chrono::Utc::now();
    let bytes = dockboard_report::render_door_report(&rows, generated_at)
        .map_err(|e| AppError::Internal(format!("report rendering failed: {e}")))?;

    let filename = format!(
        "door_management_report_{}.pdf",
        generated_at.format("%m%d%Y_%H%M%S")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}
