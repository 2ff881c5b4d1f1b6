use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to create PDF: {0}")]
    PdfError(String),
    #[error("Invalid date format: {0}")]
    DateError(String),
    #[error("Failed to read form data: {0}")]
    InputError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
