// Court details supplied out of band (link parameters, CLI flags) that seed a
// form's court caption.

use crate::canvas::present;
use crate::form::CourtInfo;

/// Pre-filled court caption. Each value only lands in a field the form
/// itself left blank; whatever the filer typed wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourtPrefill {
    pub court_name: Option<String>,
    pub docket_number: Option<String>,
    pub division: Option<String>,
    pub filed_date: Option<String>,
    pub parish_city: Option<String>,
}

impl CourtPrefill {
    pub fn is_empty(&self) -> bool {
        [
            &self.court_name,
            &self.docket_number,
            &self.division,
            &self.filed_date,
            &self.parish_city,
        ]
        .iter()
        .all(|value| present(value).is_none())
    }

    pub fn apply(&self, court: &mut CourtInfo) {
        fill_blank(&mut court.court_name, &self.court_name);
        fill_blank(&mut court.docket_number, &self.docket_number);
        fill_blank(&mut court.division, &self.division);
        fill_blank(&mut court.filed_date, &self.filed_date);
        fill_blank(&mut court.parish_city, &self.parish_city);
    }
}

fn fill_blank(field: &mut Option<String>, prefill: &Option<String>) {
    if present(field).is_none() {
        if let Some(value) = present(prefill) {
            *field = Some(value.to_string());
        }
    }
}
