//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind as IoErrorKind};

use csv::Error as CsvError;
use papersync_domain::PaperSyncError;
use reqwest::Error as HttpError;
use serenity::Error as SerenityError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PaperSyncError);

impl From<InfraError> for PaperSyncError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PaperSyncError> for InfraError {
    fn from(value: PaperSyncError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPaperSyncError {
    fn into_papersync(self) -> PaperSyncError;
}

/// Shared mapping for HTTP status codes from any client.
pub(crate) fn status_error(code: u16, message: String) -> PaperSyncError {
    match code {
        401 | 403 => PaperSyncError::Auth(message),
        404 => PaperSyncError::NotFound(message),
        429 => PaperSyncError::Network(message),
        400..=499 => PaperSyncError::InvalidInput(message),
        _ => PaperSyncError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PaperSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPaperSyncError for HttpError {
    fn into_papersync(self) -> PaperSyncError {
        if self.is_timeout() {
            return PaperSyncError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PaperSyncError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            return status_error(code, message);
        }

        PaperSyncError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_papersync())
    }
}

/* -------------------------------------------------------------------------- */
/* serenity::Error → PaperSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPaperSyncError for SerenityError {
    fn into_papersync(self) -> PaperSyncError {
        use serenity::http::HttpError as DiscordHttpError;

        match self {
            SerenityError::Http(DiscordHttpError::UnsuccessfulRequest(response)) => {
                let code = response.status_code.as_u16();
                let message = format!("Discord API {}: {}", code, response.error.message);
                status_error(code, message)
            }
            SerenityError::Http(other) => PaperSyncError::Network(format!("Discord HTTP: {other}")),
            SerenityError::Io(err) => PaperSyncError::Network(format!("Discord I/O: {err}")),
            SerenityError::Model(err) => PaperSyncError::Platform(err.to_string()),
            other => PaperSyncError::Platform(other.to_string()),
        }
    }
}

impl From<SerenityError> for InfraError {
    fn from(value: SerenityError) -> Self {
        InfraError(value.into_papersync())
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → PaperSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPaperSyncError for CsvError {
    fn into_papersync(self) -> PaperSyncError {
        let line = self.position().map(|pos| pos.line());
        let description = self.to_string();

        match self.into_kind() {
            csv::ErrorKind::Io(err) => err.into_papersync(),
            _ => match line {
                Some(line) => {
                    PaperSyncError::InvalidInput(format!("CSV line {line}: {description}"))
                }
                None => PaperSyncError::InvalidInput(format!("CSV: {description}")),
            },
        }
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        InfraError(value.into_papersync())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → PaperSyncError */
/* -------------------------------------------------------------------------- */

impl IntoPaperSyncError for IoError {
    fn into_papersync(self) -> PaperSyncError {
        match self.kind() {
            IoErrorKind::NotFound => PaperSyncError::NotFound(self.to_string()),
            _ => PaperSyncError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_papersync())
    }
}

/* -------------------------------------------------------------------------- */
/* Rendering errors → PaperSyncError */
/* -------------------------------------------------------------------------- */

#[cfg(feature = "thumbnails")]
impl From<image::ImageError> for InfraError {
    fn from(value: image::ImageError) -> Self {
        InfraError(PaperSyncError::Render(format!("image: {value}")))
    }
}

#[cfg(feature = "thumbnails")]
impl From<pdfium_render::prelude::PdfiumError> for InfraError {
    fn from(value: pdfium_render::prelude::PdfiumError) -> Self {
        InfraError(PaperSyncError::Render(format!("pdfium: {value:?}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
