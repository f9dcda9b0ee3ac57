use salvo::http::header::CONTENT_TYPE;
use salvo::{Depot, Request, Response, handler};

use super::body::read_text_body;
use super::response::write_error;
use crate::config::get_config_from_depot;
use crate::error::{AppError, AppResult};
use crate::render::{RenderFormat, render_png, render_svg};

/// ## Summary
/// Renders the raw body as a QR code image.
///
/// Query parameters: `format` (`png` by default, or `svg`) and `size`, the
/// minimum edge length in pixels (`render.default_size` when absent).
///
/// ## Errors
/// Returns 400 for a bad `format` or `size`, 413 above the payload limit,
/// and 422 if the text does not fit in a QR code.
#[handler]
#[tracing::instrument(skip_all, fields(
    format = tracing::field::Empty,
    size = tracing::field::Empty
))]
pub async fn render(req: &mut Request, depot: &Depot, res: &mut Response) {
    let (format, image) = match render_body(req, depot).await {
        Ok(rendered) => rendered,
        Err(e) => {
            write_error(res, &e);
            return;
        }
    };

    if let Err(e) = res.add_header(CONTENT_TYPE, format.content_type(), true) {
        tracing::warn!(error = %e, "Failed to set Content-Type header");
    }
    if let Err(e) = res.write_body(image) {
        tracing::error!(error = %e, "Failed to write rendered image");
    }
}

async fn render_body(req: &mut Request, depot: &Depot) -> AppResult<(RenderFormat, Vec<u8>)> {
    let settings = get_config_from_depot(depot)?;

    let format = match req.query::<String>("format") {
        Some(raw) => RenderFormat::from_query(&raw)?,
        None => RenderFormat::default(),
    };
    let requested = req
        .queries()
        .get("size")
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|e| AppError::BadRequest(format!("size {raw:?}: {e}")))
        })
        .transpose()?;
    let size = settings.render.resolve_size(requested)?;

    tracing::Span::current()
        .record("format", tracing::field::debug(format))
        .record("size", size);

    let text = read_text_body(req, depot).await?;
    let image = match format {
        RenderFormat::Png => render_png(&text, size)?,
        RenderFormat::Svg => render_svg(&text, size)?.into_bytes(),
    };
    Ok((format, image))
}
