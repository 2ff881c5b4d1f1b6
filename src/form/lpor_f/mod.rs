//! LPOR F: petition to keep the addresses of the petitioner, minor children
//! or alleged incompetents confidential (La. R.S. 46:2136.2).

pub mod layout;
pub mod sections;

use serde::Deserialize;

use crate::canvas::present;
use crate::form::{Address, CourtInfo, DriversLicense, PersonEntry, Template};

pub use sections::SECTIONS;

pub const TEMPLATE: Template = Template {
    form_name: "LPOR F",
    version: "v.1",
    title: "Louisiana Uniform Abuse Prevention Order - Confidential Address Form (LPOR F)",
    file_stem: "lpor_f_confidential_address_form",
};

/// Rows printed for minor children; further entries are dropped.
pub const MINOR_CHILD_SLOTS: usize = 6;
/// Rows printed for alleged incompetents; further entries are dropped.
pub const INCOMPETENT_SLOTS: usize = 2;

/// On whose behalf the form is filed. Each flag also gates whether the
/// matching person list is printed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilingPurpose {
    pub for_petitioner: bool,
    pub for_minor_children: bool,
    pub for_alleged_incompetent: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Petitioner {
    pub first_name: Option<String>,
    pub maiden_middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub race: Option<String>,
    pub address: Address,
    pub social_security_number: Option<String>,
    pub drivers_license: Option<DriversLicense>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

impl Petitioner {
    /// First, middle and last name joined, skipping blank parts.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.first_name, &self.maiden_middle_name, &self.last_name]
            .into_iter()
            .filter_map(present)
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Defendant {
    pub full_name: Option<String>,
    /// Only when the defendant is a minor
    pub parent_guardian_name: Option<String>,
    pub alias: Option<String>,
    pub race: Option<String>,
    pub address: Address,
    pub social_security_number: Option<String>,
    pub drivers_license: Option<DriversLicense>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfidentialAddressPetition {
    #[serde(flatten)]
    pub court: CourtInfo,
    pub filing_purpose: FilingPurpose,
    pub petitioner: Petitioner,
    pub minor_children: Vec<PersonEntry>,
    pub alleged_incompetent: Vec<PersonEntry>,
    /// Minor children live at the petitioner's address
    pub same_address_for_all: bool,
    /// Used only when `same_address_for_all` is false
    pub minor_children_address: Address,
    pub defendant: Defendant,
}
