// LPOR F section renderers and paint order.

use log::warn;

use super::layout::{
    admin_box, children_address, children_information, court, defendant, filing_purpose,
    footer, incompetents, minor_children, petitioner, request, signatures, title, AddressRow,
    IdentityRow, PersonTable,
};
use super::{ConfidentialAddressPetition, Defendant, FilingPurpose, Petitioner, TEMPLATE};
use crate::canvas::Canvas;
use crate::error::AppError;
use crate::form::common::{administrative_box, distribution_footer, title_banner};
use crate::form::{Address, CourtInfo, DriversLicense, PersonEntry};
use crate::section::Section;
use crate::style::{Anchor, FontSize, Rule, Weight, BORDER_WIDTH};

type Petition = ConfidentialAddressPetition;

/// Paint order for the whole page.
pub const SECTIONS: &[Section<Petition>] = &[
    Section {
        name: "administrative_box",
        render: |canvas, _| {
            administrative_box(canvas, admin_box::BOX);
            Ok(())
        },
    },
    Section {
        name: "title_banner",
        render: |canvas, _| {
            title_block(canvas);
            Ok(())
        },
    },
    Section {
        name: "court_information",
        render: |canvas, form: &Petition| court_information(canvas, &form.court),
    },
    Section {
        name: "filing_purpose",
        render: |canvas, form: &Petition| {
            filing_purpose_selection(canvas, &form.filing_purpose);
            Ok(())
        },
    },
    Section {
        name: "confidentiality_request",
        render: |canvas, _| {
            confidentiality_request(canvas);
            Ok(())
        },
    },
    Section {
        name: "petitioner",
        render: |canvas, form: &Petition| petitioner_section(canvas, &form.petitioner),
    },
    Section {
        name: "minor_children",
        render: |canvas, form: &Petition| {
            person_table(
                canvas,
                "MINOR CHILD(REN) (if applicable):",
                &minor_children::TABLE,
                listed(form.filing_purpose.for_minor_children, &form.minor_children),
            )
        },
    },
    Section {
        name: "alleged_incompetents",
        render: |canvas, form: &Petition| {
            person_table(
                canvas,
                "ALLEGED INCOMPETENT(S) (if applicable):",
                &incompetents::TABLE,
                listed(form.filing_purpose.for_alleged_incompetent, &form.alleged_incompetent),
            )
        },
    },
    Section {
        name: "children_address",
        render: |canvas, form: &Petition| {
            children_address_section(
                canvas,
                form.filing_purpose.for_minor_children,
                form.same_address_for_all,
                &form.minor_children_address,
            )
        },
    },
    Section {
        name: "children_information",
        render: |canvas, _| children_information_block(canvas),
    },
    Section {
        name: "defendant",
        render: |canvas, form: &Petition| defendant_section(canvas, &form.defendant),
    },
    Section {
        name: "signatures",
        render: |canvas, form: &Petition| signature_block(canvas, &form.petitioner),
    },
    Section {
        name: "distribution_footer",
        render: |canvas, _| {
            distribution_footer(
                canvas,
                &[(
                    "Copies to:   1) Court file (under seal)   2) Louisiana Protective Order Registry",
                    footer::LINE,
                )],
                TEMPLATE.version,
                footer::VERSION,
            );
            Ok(())
        },
    },
];

/// Entries of a person list, or none when the list was not part of the filing.
fn listed(enabled: bool, entries: &[PersonEntry]) -> &[PersonEntry] {
    if enabled {
        entries
    } else {
        &[]
    }
}

fn title_block(canvas: &mut Canvas<'_>) {
    title_banner(
        canvas,
        title::BANNER,
        "CONFIDENTIAL ADDRESS FORM",
        title::BASELINE_Y,
        FontSize::HeaderTitle,
    );
    canvas.centered_text(
        "LOUISIANA UNIFORM ABUSE PREVENTION ORDER (LPOR F)",
        title::SUBTITLE_Y,
        FontSize::SectionHeader,
        Weight::Bold,
    );
    canvas.centered_text(
        "Pursuant to La. R.S. 46:2136.2",
        title::STATUTE_Y,
        FontSize::SmallText,
        Weight::Regular,
    );
}

fn court_information(canvas: &mut Canvas<'_>, info: &CourtInfo) -> Result<(), AppError> {
    use court::*;

    canvas.label("COURT NAME:", NAME_LABEL, FontSize::FormLabel);
    canvas.rule(NAME_RULE);
    canvas.label("DOCKET No.:", DOCKET_LABEL, FontSize::FormLabel);
    canvas.rule(DOCKET_RULE);
    canvas.label("DIV.:", DIVISION_LABEL, FontSize::FormLabel);
    canvas.rule(DIVISION_RULE);
    canvas.label("PARISH/CITY:", PARISH_LABEL, FontSize::FormLabel);
    canvas.rule(PARISH_RULE);
    canvas.label("FILED:", FILED_LABEL, FontSize::FormLabel);
    canvas.rule(FILED_RULE);
    canvas.label("CLERK:", CLERK_LABEL, FontSize::FormLabel);
    canvas.rule(CLERK_RULE);

    canvas.value_on(&info.court_name, NAME_RULE)?;
    canvas.value_on(&info.docket_number, DOCKET_RULE)?;
    canvas.value_on(&info.division, DIVISION_RULE)?;
    canvas.value_on(&info.parish_city, PARISH_RULE)?;
    canvas.date_value_on(&info.filed_date, FILED_RULE)?;
    canvas.value_on(&info.clerk, CLERK_RULE)?;
    Ok(())
}

fn filing_purpose_selection(canvas: &mut Canvas<'_>, purpose: &FilingPurpose) {
    use filing_purpose::*;

    canvas.bold_label(
        "THIS CONFIDENTIAL ADDRESS FORM IS FILED ON BEHALF OF:",
        HEADING,
        FontSize::SectionHeader,
    );
    let options = [
        (PETITIONER_BOX, purpose.for_petitioner, "Petitioner"),
        (MINOR_CHILDREN_BOX, purpose.for_minor_children, "Minor child(ren) listed below"),
        (INCOMPETENT_BOX, purpose.for_alleged_incompetent, "Alleged incompetent(s) listed below"),
    ];
    for (at, checked, text) in options {
        canvas.option(at, checked);
        canvas.label(text, Anchor::new(at.x + LABEL_GAP, OPTION_Y), FontSize::CheckboxLabel);
    }
    canvas.label(
        "The addresses and contact information on this form shall not be disclosed to the defendant and shall be kept under seal.",
        NOTICE,
        FontSize::SmallText,
    );
}

fn petitioner_section(canvas: &mut Canvas<'_>, party: &Petitioner) -> Result<(), AppError> {
    use petitioner::*;

    canvas.bordered_rect(BOX, BORDER_WIDTH, None);

    canvas.bold_label("PETITIONER'S NAME:", NAME_LABEL, FontSize::FormLabel);
    canvas.rule(NAME_RULE);
    canvas.label("First", FIRST_CAPTION, FontSize::TinyText);
    canvas.label("Maiden/Middle", MIDDLE_CAPTION, FontSize::TinyText);
    canvas.label("Last", LAST_CAPTION, FontSize::TinyText);

    canvas.label("Date of Birth:", DOB_LABEL, FontSize::FormLabel);
    canvas.rule(DOB_RULE);
    canvas.caption("month/day/year", DOB_RULE, DOB_CAPTION_Y);
    canvas.label("Race:", RACE_LABEL, FontSize::FormLabel);
    canvas.rule(RACE_RULE);
    canvas.label("Telephone:", PHONE_LABEL, FontSize::FormLabel);
    canvas.rule(PHONE_RULE);
    canvas.label("E-mail:", EMAIL_LABEL, FontSize::FormLabel);
    canvas.rule(EMAIL_RULE);

    canvas.value(&party.first_name, FIRST_VALUE)?;
    canvas.value(&party.maiden_middle_name, MIDDLE_VALUE)?;
    canvas.value(&party.last_name, LAST_VALUE)?;
    canvas.date_value_on(&party.date_of_birth, DOB_RULE)?;
    canvas.value_on(&party.race, RACE_RULE)?;
    canvas.value_on(&party.phone_number, PHONE_RULE)?;
    canvas.value_on(&party.email, EMAIL_RULE)?;

    address_row(canvas, &ADDRESS, &party.address)?;
    identity_row(
        canvas,
        &IDENTITY,
        &party.social_security_number,
        party.drivers_license.as_ref(),
    )?;

    canvas.label("Work Address:", WORK_ADDRESS.label, FontSize::FormLabel);
    address_columns(canvas, &WORK_ADDRESS, &Address::default())?;
    canvas.label("Work Telephone:", WORK_PHONE_LABEL, FontSize::FormLabel);
    canvas.rule(WORK_PHONE_RULE);
    Ok(())
}

fn address_row(
    canvas: &mut Canvas<'_>,
    row: &AddressRow,
    address: &Address,
) -> Result<(), AppError> {
    canvas.label("Address:", row.label, FontSize::FormLabel);
    address_columns(canvas, row, address)
}

fn identity_row(
    canvas: &mut Canvas<'_>,
    row: &IdentityRow,
    ssn: &Option<String>,
    license: Option<&DriversLicense>,
) -> Result<(), AppError> {
    canvas.label("Social Security #:", row.ssn_label, FontSize::FormLabel);
    canvas.rule(row.ssn);
    canvas.label("Dr. Lic. #", row.license_label, FontSize::FormLabel);
    canvas.rule(row.license);
    canvas.label("State", row.state_label, FontSize::FormLabel);
    canvas.rule(row.state);
    canvas.label("Exp.", row.expiration_label, FontSize::FormLabel);
    canvas.rule(row.expiration);
    canvas.caption("(date)", row.expiration, row.caption_y);

    canvas.value_on(ssn, row.ssn)?;
    if let Some(license) = license {
        canvas.value_on(&license.number, row.license)?;
        canvas.value_on(&license.state, row.state)?;
        canvas.date_value_on(&license.expiration, row.expiration)?;
    }
    Ok(())
}

/// Numbered rows, one per slot. Entries beyond the slot count are dropped.
fn person_table(
    canvas: &mut Canvas<'_>,
    heading: &str,
    table: &PersonTable,
    entries: &[PersonEntry],
) -> Result<(), AppError> {
    canvas.bold_label(heading, table.heading, FontSize::FormLabel);
    canvas.caption("Name", table.name, table.header_y);
    canvas.caption("Date of Birth (month/day/year)", table.date_of_birth, table.header_y);
    canvas.caption("Relationship to Petitioner", table.relationship, table.header_y);

    let slots = table.rows.len();
    if entries.len() > slots {
        warn!(
            "{} entries for \"{}\" but the form has {} rows, dropping {}",
            entries.len(),
            heading,
            slots,
            entries.len() - slots
        );
    }

    for (index, &y) in table.rows.iter().enumerate() {
        let name = Rule::new(table.name.x, y, table.name.width);
        let born = Rule::new(table.date_of_birth.x, y, table.date_of_birth.width);
        let relationship = Rule::new(table.relationship.x, y, table.relationship.width);

        canvas.label(
            &format!("{}.", index + 1),
            Anchor::new(table.number_x, y + PersonTable::NUMBER_LIFT),
            FontSize::FormLabel,
        );
        canvas.rule(name);
        canvas.rule(born);
        canvas.rule(relationship);

        if let Some(entry) = entries.get(index) {
            canvas.value_on(&entry.name, name)?;
            canvas.date_value_on(&entry.date_of_birth, born)?;
            canvas.value_on(&entry.relationship_to_petitioner, relationship)?;
        }
    }
    Ok(())
}

/// Where the minor children live. Left blank unless the filing covers them.
fn children_address_section(
    canvas: &mut Canvas<'_>,
    for_minor_children: bool,
    same_address_for_all: bool,
    address: &Address,
) -> Result<(), AppError> {
    use children_address::*;

    canvas.option(SAME_ADDRESS_BOX, for_minor_children && same_address_for_all);
    canvas.label(
        "Minor child(ren) reside at the petitioner's address above",
        SAME_ADDRESS_LABEL,
        FontSize::CheckboxLabel,
    );

    let separate = for_minor_children && !same_address_for_all;
    let blank = Address::default();
    let shown = if separate { address } else { &blank };
    canvas.label(
        "Child(ren)'s address, if different:",
        ADDRESS.label,
        FontSize::FormLabel,
    );
    address_columns(canvas, &ADDRESS, shown)
}

fn children_information_block(canvas: &mut Canvas<'_>) -> Result<(), AppError> {
    use children_information::*;

    canvas.bold_label("CHILDREN'S INFORMATION (if applicable):", HEADING, FontSize::FormLabel);
    canvas.label("School/Daycare:", SCHOOL_LABEL, FontSize::FormLabel);
    canvas.rule(SCHOOL_RULE);
    canvas.label("Address:", ADDRESS.label, FontSize::FormLabel);
    address_columns(canvas, &ADDRESS, &Address::default())
}

/// Address rules and values without the leading "Address:" label.
fn address_columns(
    canvas: &mut Canvas<'_>,
    row: &AddressRow,
    address: &Address,
) -> Result<(), AppError> {
    let columns = [
        (row.street, "No. & Street", &address.street),
        (row.apt, "Apt. No.", &address.apt_number),
        (row.city, "City", &address.city),
        (row.state, "State", &address.state),
        (row.zip, "Zip Code", &address.zip_code),
    ];
    for (rule, caption, _) in &columns {
        canvas.rule(*rule);
        canvas.caption(caption, *rule, row.caption_y);
    }
    for (rule, _, value) in &columns {
        canvas.value_on(value, *rule)?;
    }
    Ok(())
}

fn defendant_section(canvas: &mut Canvas<'_>, party: &Defendant) -> Result<(), AppError> {
    use defendant::*;

    canvas.centered_text("V.", VERSUS_Y, FontSize::SectionHeader, Weight::Bold);
    canvas.bordered_rect(BOX, BORDER_WIDTH, None);

    canvas.bold_label("DEFENDANT'S NAME:", NAME_LABEL, FontSize::FormLabel);
    canvas.rule(NAME_RULE);
    canvas.label("Parent/Guardian (if minor):", GUARDIAN_LABEL, FontSize::FormLabel);
    canvas.rule(GUARDIAN_RULE);
    canvas.label("Alias:", ALIAS_LABEL, FontSize::FormLabel);
    canvas.rule(ALIAS_RULE);
    canvas.label("Race:", RACE_LABEL, FontSize::FormLabel);
    canvas.rule(RACE_RULE);
    canvas.label("Telephone:", PHONE_LABEL, FontSize::FormLabel);
    canvas.rule(PHONE_RULE);
    canvas.label("E-mail:", EMAIL_LABEL, FontSize::FormLabel);
    canvas.rule(EMAIL_RULE);

    canvas.value_on(&party.full_name, NAME_RULE)?;
    canvas.value_on(&party.parent_guardian_name, GUARDIAN_RULE)?;
    canvas.value_on(&party.alias, ALIAS_RULE)?;
    canvas.value_on(&party.race, RACE_RULE)?;
    canvas.value_on(&party.phone_number, PHONE_RULE)?;
    canvas.value_on(&party.email, EMAIL_RULE)?;

    address_row(canvas, &ADDRESS, &party.address)?;
    identity_row(
        canvas,
        &IDENTITY,
        &party.social_security_number,
        party.drivers_license.as_ref(),
    )
}

fn confidentiality_request(canvas: &mut Canvas<'_>) {
    let body = [
        "TO THE COURT: The petitioner requests that the following address information be kept",
        "confidential pursuant to R.S. 46:2136.2.",
    ];
    for (text, at) in body.iter().zip(request::LINES) {
        canvas.label(text, at, FontSize::FormLabel);
    }
}

fn signature_block(canvas: &mut Canvas<'_>, party: &Petitioner) -> Result<(), AppError> {
    use signatures::*;

    canvas.rule(PETITIONER_RULE);
    canvas.caption("SIGNATURE OF PETITIONER", PETITIONER_RULE, CAPTION_Y);
    canvas.rule(DATE_RULE);
    canvas.caption("DATE", DATE_RULE, CAPTION_Y);

    canvas.label("PRINT NAME:", PRINT_NAME_LABEL, FontSize::FormLabel);
    canvas.rule(PRINT_NAME_RULE);
    canvas.value_on(&party.full_name(), PRINT_NAME_RULE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::paint;
    use crate::surface::RecordingSurface;
    use pretty_assertions::assert_eq;

    fn render(petition: &Petition) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        paint(&mut Canvas::new(&mut surface), SECTIONS, petition).unwrap();
        surface
    }

    fn child(name: &str, born: &str) -> PersonEntry {
        PersonEntry {
            id: Some(format!("id-{name}")),
            name: Some(name.to_string()),
            date_of_birth: Some(born.to_string()),
            relationship_to_petitioner: Some("Child".to_string()),
        }
    }

    fn name_value(table: &PersonTable, row: usize) -> Anchor {
        crate::canvas::on_rule(Rule::new(table.name.x, table.rows[row], table.name.width))
    }

    fn two_children() -> Petition {
        Petition {
            court: CourtInfo {
                court_name: Some("19th JDC".into()),
                parish_city: Some("East Baton Rouge".into()),
                ..Default::default()
            },
            filing_purpose: FilingPurpose {
                for_petitioner: true,
                for_minor_children: true,
                for_alleged_incompetent: false,
            },
            petitioner: Petitioner {
                first_name: Some("Ana".into()),
                last_name: Some("Roe".into()),
                ..Default::default()
            },
            minor_children: vec![child("Leo Roe", "2015-04-02"), child("Mia Roe", "2018-11-20")],
            same_address_for_all: true,
            ..Default::default()
        }
    }

    #[test]
    fn paint_order_is_fixed() {
        let names: Vec<_> = SECTIONS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "administrative_box",
                "title_banner",
                "court_information",
                "filing_purpose",
                "confidentiality_request",
                "petitioner",
                "minor_children",
                "alleged_incompetents",
                "children_address",
                "children_information",
                "defendant",
                "signatures",
                "distribution_footer",
            ]
        );
    }

    #[test]
    fn petition_with_two_children() {
        let surface = render(&two_children());
        let table = &minor_children::TABLE;

        assert_eq!(surface.text_at(name_value(table, 0).x, name_value(table, 0).y), Some("Leo Roe"));
        assert_eq!(surface.text_at(name_value(table, 1).x, name_value(table, 1).y), Some("Mia Roe"));
        assert_eq!(surface.text_at(name_value(table, 2).x, name_value(table, 2).y), None);
        assert!(surface.has_text("11/20/2018"));
        // All six rows are numbered and ruled whether filled or not.
        assert!(surface.has_text("6."));
        let last = table.rows[5];
        assert!(surface.has_underline(table.name.x, last, table.name.width));

        assert!(surface.is_checked(filing_purpose::PETITIONER_BOX.x, filing_purpose::PETITIONER_BOX.y));
        assert!(surface.is_checked(
            filing_purpose::MINOR_CHILDREN_BOX.x,
            filing_purpose::MINOR_CHILDREN_BOX.y
        ));
        assert!(!surface.is_checked(filing_purpose::INCOMPETENT_BOX.x, filing_purpose::INCOMPETENT_BOX.y));
        assert!(surface.is_checked(
            children_address::SAME_ADDRESS_BOX.x,
            children_address::SAME_ADDRESS_BOX.y
        ));
        assert_eq!(surface.checked_count(), 3);

        let parish = crate::canvas::on_rule(court::PARISH_RULE);
        assert_eq!(surface.text_at(parish.x, parish.y), Some("East Baton Rouge"));
        // The id is a client-side key and never printed.
        assert!(!surface.has_text("id-Leo Roe"));
    }

    #[test]
    fn eight_children_fill_six_rows() {
        let mut petition = two_children();
        petition.minor_children = (1..=8)
            .map(|n| child(&format!("Child {n}"), "2016-01-01"))
            .collect();
        let surface = render(&petition);

        for n in 1..=6 {
            assert!(surface.has_text(&format!("Child {n}")));
        }
        assert!(!surface.has_text("Child 7"));
        assert!(!surface.has_text("Child 8"));
    }

    #[test]
    fn lists_print_only_for_selected_purposes() {
        let mut petition = two_children();
        petition.filing_purpose.for_minor_children = false;
        petition.alleged_incompetent = vec![child("Uncle Bo", "1950-07-07")];
        let surface = render(&petition);

        assert!(!surface.has_text("Leo Roe"));
        assert!(!surface.has_text("Uncle Bo"));
        assert!(!surface.is_checked(
            children_address::SAME_ADDRESS_BOX.x,
            children_address::SAME_ADDRESS_BOX.y
        ));

        petition.filing_purpose.for_alleged_incompetent = true;
        let surface = render(&petition);
        let first = name_value(&incompetents::TABLE, 0);
        assert_eq!(surface.text_at(first.x, first.y), Some("Uncle Bo"));
    }

    #[test]
    fn separate_children_address_is_printed() {
        let mut petition = two_children();
        petition.same_address_for_all = false;
        petition.minor_children_address = Address {
            street: Some("9 Oak Ln".into()),
            city: Some("Zachary".into()),
            ..Default::default()
        };
        let surface = render(&petition);

        let street = crate::canvas::on_rule(children_address::ADDRESS.street);
        assert_eq!(surface.text_at(street.x, street.y), Some("9 Oak Ln"));
        assert!(!surface.is_checked(
            children_address::SAME_ADDRESS_BOX.x,
            children_address::SAME_ADDRESS_BOX.y
        ));

        petition.same_address_for_all = true;
        assert!(!render(&petition).has_text("9 Oak Ln"));
    }

    #[test]
    fn blank_petition_draws_skeleton_only() {
        let surface = render(&Petition::default());
        assert_eq!(surface.checked_count(), 0);
        for label in [
            "CONFIDENTIAL ADDRESS FORM",
            "PARISH/CITY:",
            "PETITIONER'S NAME:",
            "MINOR CHILD(REN) (if applicable):",
            "ALLEGED INCOMPETENT(S) (if applicable):",
            "DEFENDANT'S NAME:",
            "Work Address:",
            "Work Telephone:",
            "CHILDREN'S INFORMATION (if applicable):",
            "School/Daycare:",
            "PRINT NAME:",
            "v.1",
        ] {
            assert!(surface.has_text(label), "{label}");
        }
        assert!(!surface.has_text("NOTICE TO CLERK OF COURT:"));
        let banner = surface.position_of_rect(title::BANNER.x, title::BANNER.y).unwrap();
        let heading = surface.position_of_text("CONFIDENTIAL ADDRESS FORM").unwrap();
        assert!(banner < heading);
    }

    #[test]
    fn malformed_child_birth_date_fails() {
        let mut petition = two_children();
        petition.minor_children[1].date_of_birth = Some("20/11/2018".into());
        let mut surface = RecordingSurface::new();
        let err = paint(&mut Canvas::new(&mut surface), SECTIONS, &petition).unwrap_err();
        assert!(matches!(err, AppError::DateError(_)));
    }

    #[test]
    fn defendant_values_sit_on_their_rules() {
        let petition = Petition {
            defendant: Defendant {
                full_name: Some("Sam Roe".into()),
                parent_guardian_name: Some("Pat Roe".into()),
                email: Some("sam@example.com".into()),
                drivers_license: Some(DriversLicense {
                    number: Some("D7".into()),
                    state: Some("MS".into()),
                    expiration: Some("2026-02-28".into()),
                }),
                ..Default::default()
            },
            ..Default::default()
        };
        let surface = render(&petition);
        for (rule, expected) in [
            (defendant::NAME_RULE, "Sam Roe"),
            (defendant::GUARDIAN_RULE, "Pat Roe"),
            (defendant::EMAIL_RULE, "sam@example.com"),
            (defendant::IDENTITY.license, "D7"),
            (defendant::IDENTITY.state, "MS"),
            (defendant::IDENTITY.expiration, "02/28/2026"),
        ] {
            let at = crate::canvas::on_rule(rule);
            assert_eq!(surface.text_at(at.x, at.y), Some(expected));
        }
    }

    #[test]
    fn request_and_workplace_blocks_are_static() {
        let surface = render(&two_children());

        let first = surface.position_of_text(
            "TO THE COURT: The petitioner requests that the following address information be kept",
        );
        let second = surface.position_of_text("confidential pursuant to R.S. 46:2136.2.");
        assert!(first.unwrap() < second.unwrap());
        assert_eq!(
            surface.text_at(request::LINES[1].x, request::LINES[1].y),
            Some("confidential pursuant to R.S. 46:2136.2.")
        );

        let work = &petitioner::WORK_ADDRESS;
        assert_eq!(surface.text_at(work.label.x, work.label.y), Some("Work Address:"));
        assert!(surface.has_underline(work.street.x, work.street.y, work.street.width));
        assert!(surface.has_underline(work.zip.x, work.zip.y, work.zip.width));
        let phone = petitioner::WORK_PHONE_RULE;
        assert!(surface.has_underline(phone.x, phone.y, phone.width));

        let school = children_information::SCHOOL_RULE;
        assert!(surface.has_underline(school.x, school.y, school.width));
        let school_street = crate::canvas::on_rule(children_information::ADDRESS.street);
        assert_eq!(surface.text_at(school_street.x, school_street.y), None);

        // The petitioner's home address never leaks into the workplace row.
        let work_street = crate::canvas::on_rule(work.street);
        assert_eq!(surface.text_at(work_street.x, work_street.y), None);
    }

    #[test]
    fn work_rows_stay_inside_the_petitioner_box() {
        let frame = petitioner::BOX;
        let work = &petitioner::WORK_ADDRESS;
        assert!(work.caption_y > frame.y);
        assert!(petitioner::WORK_PHONE_RULE.y > frame.y);
        assert!(petitioner::NAME_Y < frame.top());
        assert!(request::LINES[1].y > frame.top());
    }

    #[test]
    fn print_name_carries_the_petitioner() {
        let surface = render(&two_children());
        let at = crate::canvas::on_rule(signatures::PRINT_NAME_RULE);
        assert_eq!(surface.text_at(at.x, at.y), Some("Ana Roe"));

        let blank = render(&Petition::default());
        assert_eq!(blank.text_at(at.x, at.y), None);
    }

    #[test]
    fn three_incompetents_fill_two_rows() {
        let mut petition = two_children();
        petition.filing_purpose.for_alleged_incompetent = true;
        petition.alleged_incompetent = vec![
            child("Uncle Bo", "1950-07-07"),
            child("Aunt Jo", "1948-03-15"),
            child("Cousin Al", "1961-12-30"),
        ];
        let mut surface = RecordingSurface::new();
        paint(&mut Canvas::new(&mut surface), SECTIONS, &petition)
            .expect("an overflowing list is not an error");

        let table = &incompetents::TABLE;
        assert_eq!(table.rows.len(), 2);
        let first = name_value(table, 0);
        let second = name_value(table, 1);
        assert_eq!(surface.text_at(first.x, first.y), Some("Uncle Bo"));
        assert_eq!(surface.text_at(second.x, second.y), Some("Aunt Jo"));
        assert!(!surface.has_text("Cousin Al"));
        assert!(!surface.has_text("12/30/1961"));
    }

    #[test]
    fn unprintable_name_fails_the_petition() {
        let mut petition = two_children();
        petition.minor_children[0].name = Some("Nguyễn Roe".into());
        let mut surface = RecordingSurface::new();
        let err = paint(&mut Canvas::new(&mut surface), SECTIONS, &petition).unwrap_err();
        match err {
            AppError::InputError(message) => assert!(message.contains("Nguyễn Roe"), "{message}"),
            other => panic!("expected an input error, got {other:?}"),
        }
    }
}
