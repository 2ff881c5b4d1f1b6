//! LPOR 14: order to modify or dissolve a prior Louisiana Uniform Abuse
//! Prevention Order.

pub mod layout;
pub mod sections;

use serde::Deserialize;

use crate::form::{Address, CourtInfo, DriversLicense, Sex, Template};

pub use sections::SECTIONS;

pub const TEMPLATE: Template = Template {
    form_name: "LPOR 14",
    version: "v.8",
    title: "Louisiana Uniform Abuse Prevention Order - Modify/Dissolve (LPOR 14)",
    file_stem: "lpor14_modify_dissolve_order",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Modify,
    Dissolve,
    #[serde(other)]
    Unrecognized,
}

/// Who the prior order protects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtectedPerson {
    Petitioner,
    Others,
    #[serde(other)]
    Unrecognized,
}

/// Form of the prior order being modified or dissolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OriginalOrderType {
    Tro,
    Preliminary,
    Permanent,
    #[serde(other)]
    Unrecognized,
}

/// Statute the prior order was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegalBasis {
    Rs372,
    Rs361,
    Ccp3601,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Petitioner {
    pub first_name: Option<String>,
    pub maiden_middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub sex: Option<Sex>,
    pub race: Option<String>,
    pub protected_person_type: Option<ProtectedPerson>,
    pub other_protected_persons: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Defendant {
    pub full_name: Option<String>,
    pub alias: Option<String>,
    pub date_of_birth: Option<String>,
    pub sex: Option<Sex>,
    pub race: Option<String>,
    pub address: Address,
    pub social_security_number: Option<String>,
    pub drivers_license: Option<DriversLicense>,
}

/// Paragraph 1 (modify) or 2 (dissolve): which prior order it refers to.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorOrderParagraph {
    pub is_selected: bool,
    pub original_order_type: Vec<OriginalOrderType>,
    pub original_order_date: Option<String>,
    pub original_order_legal_basis: Vec<LegalBasis>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourtCostsParagraph {
    pub is_selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderDetails {
    pub section1: Option<PriorOrderParagraph>,
    pub section2: Option<PriorOrderParagraph>,
    pub section3: Option<CourtCostsParagraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModifyDissolveOrder {
    #[serde(flatten)]
    pub court: CourtInfo,
    pub order_type: Option<OrderType>,
    pub petitioner: Petitioner,
    pub defendant: Defendant,
    pub order_details: OrderDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_intake_json() {
        let json = r#"{
            "courtName": "Caddo Parish Court",
            "docketNumber": "2024-12345",
            "orderType": "dissolve",
            "petitioner": { "firstName": "Jane", "sex": "F", "protectedPersonType": "others" },
            "defendant": {
                "fullName": "John Smith",
                "address": { "zipCode": "71101" },
                "driversLicense": { "number": "D123" }
            },
            "orderDetails": {
                "section2": {
                    "isSelected": true,
                    "originalOrderType": ["tro", "bogus"],
                    "originalOrderLegalBasis": ["ccp3601"]
                }
            },
            "signatures": { "judgeName": "ignored" }
        }"#;
        let order: ModifyDissolveOrder = serde_json::from_str(json).unwrap();

        assert_eq!(order.court.court_name.as_deref(), Some("Caddo Parish Court"));
        assert_eq!(order.order_type, Some(OrderType::Dissolve));
        assert_eq!(order.petitioner.sex, Some(Sex::Female));
        assert_eq!(order.petitioner.protected_person_type, Some(ProtectedPerson::Others));
        assert_eq!(order.defendant.address.zip_code.as_deref(), Some("71101"));
        let dissolve = order.order_details.section2.unwrap();
        assert!(dissolve.is_selected);
        assert_eq!(
            dissolve.original_order_type,
            vec![OriginalOrderType::Tro, OriginalOrderType::Unrecognized]
        );
        assert_eq!(dissolve.original_order_legal_basis, vec![LegalBasis::Ccp3601]);
        assert!(order.order_details.section1.is_none());
    }
}
