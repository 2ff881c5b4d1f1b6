//! Print-accurate PDF renditions of Louisiana Uniform Abuse Prevention Order
//! forms.
//!
//! Two templates are supported: LPOR 14 (order to modify or dissolve a prior
//! order) and LPOR F (confidential address form). Each is a fixed, hand
//! measured page: labels, rules and checkboxes are always drawn, and values
//! from the form data are written onto them when present.
//!
//! ```no_run
//! use lpor_pdf::{generate, FormData, FormKind};
//!
//! let json = std::fs::read_to_string("order.json")?;
//! let form = FormData::from_json(FormKind::Lpor14, &json)?;
//! let pdf = generate(&form)?;
//! pdf.save(form.default_file_name())?;
//! # Ok::<(), lpor_pdf::AppError>(())
//! ```
//!
//! To check what a form draws without producing a PDF, paint it onto a
//! [`surface::RecordingSurface`]:
//!
//! ```
//! use lpor_pdf::surface::RecordingSurface;
//! use lpor_pdf::{render_page, FormData, FormKind};
//!
//! let form = FormData::from_json(FormKind::LporF, r#"{"courtName":"19th JDC"}"#)?;
//! let mut surface = RecordingSurface::default();
//! render_page(&mut surface, &form)?;
//! assert!(surface.has_text("19th JDC"));
//! # Ok::<(), lpor_pdf::AppError>(())
//! ```

pub mod canvas;
pub mod date;
pub mod encoding;
pub mod error;
pub mod form;
pub mod metrics;
pub mod pdf;
pub mod prefill;
pub mod section;
pub mod style;
pub mod surface;

pub use error::AppError;
pub use form::{render_page, FormData, FormKind};
pub use pdf::{generate, RenderedDocument};
pub use prefill::CourtPrefill;
