use crate::cursor::CursorError;
use crate::geometry::ColorParseError;
use crate::settings::SettingsError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Cursor(#[from] CursorError),
    #[error(transparent)]
    Color(#[from] ColorParseError),
}
