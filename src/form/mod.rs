//! Form data records and variant dispatch.
//!
//! Every field is optional at render time. Records deserialize from the
//! camelCase JSON produced by the intake UI; missing keys become `None` or
//! empty lists, and unknown enumeration values become `Unrecognized` so they
//! render as "nothing selected".

mod common;
pub mod lpor14;
pub mod lpor_f;

use serde::Deserialize;

use crate::canvas::{present, Canvas};
use crate::error::AppError;
use crate::section::paint;
use crate::surface::Surface;

pub use lpor14::ModifyDissolveOrder;
pub use lpor_f::ConfidentialAddressPetition;

/// Court caption shared by both templates. LPOR 14 has no parish/city slot
/// of its own and ignores that field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourtInfo {
    pub court_name: Option<String>,
    pub docket_number: Option<String>,
    pub division: Option<String>,
    pub filed_date: Option<String>,
    pub clerk: Option<String>,
    pub parish_city: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub apt_number: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriversLicense {
    pub number: Option<String>,
    pub state: Option<String>,
    pub expiration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Sex {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
    #[serde(other)]
    Unrecognized,
}

/// One row of a dynamic person list (minor children, alleged incompetents).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonEntry {
    /// Client-side row key; never printed.
    pub id: Option<String>,
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub relationship_to_petitioner: Option<String>,
}

/// A physical form template: name plus the revision its coordinate table
/// was measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub form_name: &'static str,
    pub version: &'static str,
    /// Document title written into the PDF info dictionary
    pub title: &'static str,
    /// Default download name, without extension
    pub file_stem: &'static str,
}

impl Template {
    /// Stable identifier used as the PDF document id.
    pub fn document_id(&self) -> String {
        format!("{} {}", self.form_name, self.version)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// LPOR 14, order to modify or dissolve a prior order
    Lpor14,
    /// LPOR F, confidential address petition
    LporF,
}

impl FormKind {
    pub fn template(self) -> &'static Template {
        match self {
            FormKind::Lpor14 => &lpor14::TEMPLATE,
            FormKind::LporF => &lpor_f::TEMPLATE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormData {
    Lpor14(ModifyDissolveOrder),
    LporF(ConfidentialAddressPetition),
}

impl FormData {
    /// Parses intake JSON for the given variant.
    pub fn from_json(kind: FormKind, json: &str) -> Result<Self, AppError> {
        let parsed = match kind {
            FormKind::Lpor14 => serde_json::from_str(json).map(FormData::Lpor14),
            FormKind::LporF => serde_json::from_str(json).map(FormData::LporF),
        };
        parsed.map_err(|e| AppError::InputError(format!("Invalid JSON: {}", e)))
    }

    pub fn kind(&self) -> FormKind {
        match self {
            FormData::Lpor14(_) => FormKind::Lpor14,
            FormData::LporF(_) => FormKind::LporF,
        }
    }

    pub fn template(&self) -> &'static Template {
        self.kind().template()
    }

    pub fn court(&self) -> &CourtInfo {
        match self {
            FormData::Lpor14(form) => &form.court,
            FormData::LporF(form) => &form.court,
        }
    }

    pub fn court_mut(&mut self) -> &mut CourtInfo {
        match self {
            FormData::Lpor14(form) => &mut form.court,
            FormData::LporF(form) => &mut form.court,
        }
    }

    /// Download name: the template's file stem, suffixed with the docket
    /// number when there is one.
    pub fn default_file_name(&self) -> String {
        let stem = self.template().file_stem;
        let docket = present(&self.court().docket_number)
            .map(|docket| {
                docket
                    .to_lowercase()
                    .replace(' ', "-")
                    .chars()
                    .filter(|c| c.is_alphanumeric() || *c == '-')
                    .collect::<String>()
            })
            .filter(|docket| !docket.is_empty());
        match docket {
            Some(docket) => format!("{}-{}.pdf", stem, docket),
            None => format!("{}.pdf", stem),
        }
    }
}

/// Paints the full page for `form` onto `surface`, section by section in the
/// variant's paint order.
pub fn render_page(surface: &mut dyn Surface, form: &FormData) -> Result<(), AppError> {
    let mut canvas = Canvas::new(surface);
    match form {
        FormData::Lpor14(order) => paint(&mut canvas, lpor14::SECTIONS, order),
        FormData::LporF(petition) => paint(&mut canvas, lpor_f::SECTIONS, petition),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sex_deserializes_as_unrecognized() {
        let sex: Sex = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(sex, Sex::Unrecognized);
        let sex: Sex = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(sex, Sex::Male);
    }

    #[test]
    fn empty_object_is_a_valid_form() {
        let form = FormData::from_json(FormKind::Lpor14, "{}").unwrap();
        assert_eq!(form.kind(), FormKind::Lpor14);
        assert_eq!(form.court(), &CourtInfo::default());

        let form = FormData::from_json(FormKind::LporF, "{}").unwrap();
        assert_eq!(form.kind(), FormKind::LporF);
    }

    #[test]
    fn court_fields_are_read_from_top_level() {
        let json = r#"{"courtName":"19th JDC","docketNumber":"C-123","filedDate":"2024-10-14"}"#;
        let form = FormData::from_json(FormKind::LporF, json).unwrap();
        assert_eq!(form.court().court_name.as_deref(), Some("19th JDC"));
        assert_eq!(form.court().docket_number.as_deref(), Some("C-123"));
        assert_eq!(form.court().filed_date.as_deref(), Some("2024-10-14"));
    }

    #[test]
    fn malformed_json_is_an_input_error() {
        let err = FormData::from_json(FormKind::Lpor14, "{not json").unwrap_err();
        assert!(matches!(err, AppError::InputError(_)));
    }

    #[test]
    fn file_name_carries_sanitized_docket() {
        let form = FormData::from_json(FormKind::Lpor14, r#"{"docketNumber":"C-2024 / 123"}"#).unwrap();
        assert_eq!(form.default_file_name(), "lpor14_modify_dissolve_order-c-2024--123.pdf");

        let form = FormData::from_json(FormKind::LporF, "{}").unwrap();
        assert_eq!(form.default_file_name(), "lpor_f_confidential_address_form.pdf");
    }

    #[test]
    fn templates_are_distinct() {
        let a = FormKind::Lpor14.template();
        let b = FormKind::LporF.template();
        assert_ne!(a.document_id(), b.document_id());
        assert_eq!(a.document_id(), "LPOR 14 v.8");
    }
}
