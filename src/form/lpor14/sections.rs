// LPOR 14 section renderers and paint order.

use super::layout::{
    admin_box, court, defendant, footer, order, order_type, petitioner, service, signatures, title,
};
use super::{
    CourtCostsParagraph, Defendant, LegalBasis, ModifyDissolveOrder, OrderDetails, OrderType,
    OriginalOrderType, Petitioner, PriorOrderParagraph, ProtectedPerson, TEMPLATE,
};
use crate::canvas::Canvas;
use crate::error::AppError;
use crate::form::common::{administrative_box, distribution_footer, sex_choice, title_banner};
use crate::form::CourtInfo;
use crate::section::Section;
use crate::style::{Anchor, FontSize, Weight, BORDER_WIDTH, HEAVY_BORDER_WIDTH, LINE_HEIGHT};

type Order = ModifyDissolveOrder;

/// Paint order for the whole page.
pub const SECTIONS: &[Section<Order>] = &[
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
            title_banner(
                canvas,
                title::BANNER,
                "LOUISIANA UNIFORM ABUSE PREVENTION ORDER",
                title::BASELINE_Y,
                FontSize::HeaderTitle,
            );
            Ok(())
        },
    },
    Section {
        name: "court_information",
        render: |canvas, form: &Order| court_information(canvas, &form.court),
    },
    Section {
        name: "order_type",
        render: |canvas, form: &Order| {
            order_type_selection(canvas, form.order_type);
            Ok(())
        },
    },
    Section {
        name: "petitioner",
        render: |canvas, form: &Order| petitioner_section(canvas, &form.petitioner),
    },
    Section {
        name: "defendant",
        render: |canvas, form: &Order| defendant_section(canvas, &form.defendant),
    },
    Section {
        name: "order_paragraphs",
        render: |canvas, form: &Order| order_paragraphs(canvas, &form.order_details),
    },
    Section {
        name: "signatures",
        render: |canvas, _| {
            signature_block(canvas);
            Ok(())
        },
    },
    Section {
        name: "service",
        render: |canvas, _| {
            service_block(canvas);
            Ok(())
        },
    },
    Section {
        name: "distribution_footer",
        render: |canvas, _| {
            distribution_footer(
                canvas,
                &[
                    (
                        "Copies to:   1) Court file   2) Petitioner/protected person(s)   3) Defendant   4) Chief Law Enforcement Official of the",
                        footer::LINES[0],
                    ),
                    (
                        "parish where the protected person(s) resides   5) Louisiana Protective Order Registry.",
                        footer::LINES[1],
                    ),
                ],
                TEMPLATE.version,
                footer::VERSION,
            );
            Ok(())
        },
    },
];

fn court_information(canvas: &mut Canvas<'_>, info: &CourtInfo) -> Result<(), AppError> {
    canvas.label("COURT NAME AND PARISH/CITY:", court::NAME_LABEL, FontSize::FormLabel);
    canvas.rule(court::NAME_RULE);
    canvas.label("DOCKET No. :", court::DOCKET_LABEL, FontSize::FormLabel);
    canvas.rule(court::DOCKET_RULE);
    canvas.label("DIV.:", court::DIVISION_LABEL, FontSize::FormLabel);
    canvas.rule(court::DIVISION_RULE);
    canvas.label("FILED:", court::FILED_LABEL, FontSize::FormLabel);
    canvas.rule(court::FILED_RULE);
    canvas.label("CLERK:", court::CLERK_LABEL, FontSize::FormLabel);
    canvas.rule(court::CLERK_RULE);

    canvas.value(&info.court_name, court::NAME_VALUE)?;
    canvas.value(&info.docket_number, court::DOCKET_VALUE)?;
    canvas.value(&info.division, court::DIVISION_VALUE)?;
    canvas.date_value(&info.filed_date, court::FILED_VALUE)?;
    canvas.value(&info.clerk, court::CLERK_VALUE)?;
    Ok(())
}

fn order_type_selection(canvas: &mut Canvas<'_>, selected: Option<OrderType>) {
    canvas.bold_label("ORDER TO", order_type::HEADING, FontSize::SectionHeader);
    canvas.option(order_type::MODIFY_BOX, selected == Some(OrderType::Modify));
    canvas.bold_label("MODIFY", order_type::MODIFY_LABEL, FontSize::SectionHeader);
    canvas.option(order_type::DISSOLVE_BOX, selected == Some(OrderType::Dissolve));
    canvas.bold_label("DISSOLVE", order_type::DISSOLVE_LABEL, FontSize::SectionHeader);

    canvas.centered_text(
        "A PRIOR LOUISIANA UNIFORM ABUSE PREVENTION ORDER",
        order_type::SUBTITLE_Y,
        FontSize::SectionHeader,
        Weight::Bold,
    );
    canvas.centered_text(
        "Pursuant to La. R.S. 9:372, La. R.S. 9:361 et seq. or La. C.C.P. Art. 3601 et seq.",
        order_type::STATUTES_Y,
        FontSize::SmallText,
        Weight::Regular,
    );
    canvas.centered_text(
        "Court Approved Consent Agreement",
        order_type::CONSENT_Y,
        FontSize::SmallText,
        Weight::Regular,
    );
}

fn petitioner_section(canvas: &mut Canvas<'_>, party: &Petitioner) -> Result<(), AppError> {
    use petitioner::*;

    canvas.bordered_rect(BOX, BORDER_WIDTH, None);

    canvas.bold_label("PETITIONER'S NAME :", NAME_LABEL, FontSize::FormLabel);
    canvas.rule(NAME_RULE);
    canvas.label("First", FIRST_CAPTION, FontSize::TinyText);
    canvas.label("Maiden/Middle", MIDDLE_CAPTION, FontSize::TinyText);
    canvas.label("Last", LAST_CAPTION, FontSize::TinyText);

    canvas.label("Date of Birth", DOB_LABEL, FontSize::FormLabel);
    canvas.rule(DOB_RULE);
    canvas.label("month/day/year", DOB_CAPTION, FontSize::TinyText);
    sex_choice(canvas, party.sex, SEX_LABEL, FEMALE_BOX, MALE_BOX);
    canvas.label("Race:", RACE_LABEL, FontSize::FormLabel);
    canvas.rule(RACE_RULE);

    let protected = party.protected_person_type;
    canvas.label("Protected person is:", PROTECTED_LABEL, FontSize::FormLabel);
    canvas.option(PETITIONER_BOX, protected == Some(ProtectedPerson::Petitioner));
    canvas.label("Petitioner", PETITIONER_LABEL, FontSize::FormLabel);
    canvas.option(OTHERS_BOX, protected == Some(ProtectedPerson::Others));
    canvas.label("other(s)", OTHERS_LABEL, FontSize::FormLabel);
    canvas.label("List other(s) name & date of birth:", OTHERS_PROMPT, FontSize::FormLabel);
    for rule in OTHERS_RULES {
        canvas.rule(rule);
    }

    canvas.value(&party.first_name, FIRST_VALUE)?;
    canvas.value(&party.maiden_middle_name, MIDDLE_VALUE)?;
    canvas.value(&party.last_name, LAST_VALUE)?;
    canvas.date_value(&party.date_of_birth, DOB_VALUE)?;
    canvas.value(&party.race, RACE_VALUE)?;
    canvas.value_lines(&party.other_protected_persons, &OTHERS_LINES)?;
    Ok(())
}

fn defendant_section(canvas: &mut Canvas<'_>, party: &Defendant) -> Result<(), AppError> {
    use defendant::*;

    canvas.centered_text("V.", VERSUS_Y, FontSize::SectionHeader, Weight::Bold);
    canvas.bordered_rect(BOX, BORDER_WIDTH, None);

    canvas.bold_label("DEFENDANT'S NAME:", NAME_LABEL, FontSize::FormLabel);
    canvas.rule(NAME_RULE);

    canvas.label("Alias:", ALIAS_LABEL, FontSize::FormLabel);
    canvas.rule(ALIAS_RULE);
    canvas.label("Date of Birth:", DOB_LABEL, FontSize::FormLabel);
    canvas.rule(DOB_RULE);
    canvas.label("month/day/year", DOB_CAPTION, FontSize::TinyText);
    sex_choice(canvas, party.sex, SEX_LABEL, FEMALE_BOX, MALE_BOX);
    canvas.label("Race:", RACE_LABEL, FontSize::FormLabel);
    canvas.rule(RACE_RULE);

    canvas.label("Address:", ADDRESS_LABEL, FontSize::FormLabel);
    canvas.rule(STREET_RULE);
    canvas.rule(APT_RULE);
    canvas.rule(CITY_RULE);
    canvas.label("No. & Street", STREET_CAPTION, FontSize::TinyText);
    canvas.label("Apt. No.", APT_CAPTION, FontSize::TinyText);
    canvas.label("City", CITY_CAPTION, FontSize::TinyText);
    canvas.rule(STATE_RULE);
    canvas.rule(ZIP_RULE);
    canvas.label("State", STATE_CAPTION, FontSize::TinyText);
    canvas.label("Zip Code", ZIP_CAPTION, FontSize::TinyText);

    canvas.label("Social Security #:", SSN_LABEL, FontSize::FormLabel);
    canvas.rule(SSN_RULE);
    canvas.label("Dr. Lic. #", LICENSE_LABEL, FontSize::FormLabel);
    canvas.rule(LICENSE_RULE);
    canvas.label("State", LICENSE_STATE_LABEL, FontSize::FormLabel);
    canvas.rule(LICENSE_STATE_RULE);
    canvas.label("Exp.", EXPIRATION_LABEL, FontSize::FormLabel);
    canvas.rule(EXPIRATION_RULE);
    canvas.label("(date)", EXPIRATION_CAPTION, FontSize::TinyText);

    canvas.value(&party.full_name, NAME_VALUE)?;
    canvas.value(&party.alias, ALIAS_VALUE)?;
    canvas.date_value(&party.date_of_birth, DOB_VALUE)?;
    canvas.value(&party.race, RACE_VALUE)?;
    let address = &party.address;
    canvas.value(&address.street, STREET_VALUE)?;
    canvas.value(&address.apt_number, APT_VALUE)?;
    canvas.value(&address.city, CITY_VALUE)?;
    canvas.value(&address.state, STATE_VALUE)?;
    canvas.value(&address.zip_code, ZIP_VALUE)?;
    canvas.value(&party.social_security_number, SSN_VALUE)?;
    if let Some(license) = &party.drivers_license {
        canvas.value(&license.number, LICENSE_VALUE)?;
        canvas.value(&license.state, LICENSE_STATE_VALUE)?;
        canvas.date_value(&license.expiration, EXPIRATION_VALUE)?;
    }
    Ok(())
}

const ORDER_FORMS: [(OriginalOrderType, &str); 3] = [
    (OriginalOrderType::Tro, "Temporary Restraining Order"),
    (OriginalOrderType::Preliminary, "Preliminary Injunction"),
    (OriginalOrderType::Permanent, "Permanent Injunction"),
];

const STATUTES: [(LegalBasis, &str); 3] = [
    (LegalBasis::Rs372, "La. R.S. 9:372"),
    (LegalBasis::Rs361, "La. R.S. 9:361 et seq."),
    (LegalBasis::Ccp3601, "La. C.C.P. Art. 3601 et seq."),
];

/// Fixed wording of paragraphs 1 and 2, which differ only in their text.
struct PriorOrderWording {
    number: &'static str,
    opening: &'static str,
    continuation: &'static str,
    closing: &'static [(&'static str, Weight)],
}

const MODIFY_WORDING: PriorOrderWording = PriorOrderWording {
    number: "1.",
    opening: "IT IS HEREBY ORDERED, ADJUDGED, and DECREED that the Louisiana Uniform Abuse Prevention",
    continuation: "Order issued in the above-captioned and numbered matter in the form of a",
    closing: &[
        (
            "is hereby modified on this date as indicated on the attached Louisiana Uniform Abuse",
            Weight::Bold,
        ),
        (
            "Prevention Order form LPOR 9 (if La. R.S. 9:372), LPOR 11 (if La. R.S. 9:361) or LPOR 13 (if La. C.C.P. Art. 3601).",
            Weight::Regular,
        ),
    ],
};

const DISSOLVE_WORDING: PriorOrderWording = PriorOrderWording {
    number: "2.",
    opening: "IT IS HEREBY ORDERED, ADJUDGED, AND DECREED that the Louisiana Uniform Abuse",
    continuation: "Prevention Order issued in the above-captioned and numbered matter in the form of a",
    closing: &[("be and the same is hereby dissolved.", Weight::Bold)],
};

fn order_paragraphs(canvas: &mut Canvas<'_>, details: &OrderDetails) -> Result<(), AppError> {
    canvas.bold_label(
        "IT IS ORDERED THAT THE DEFENDANT BE SERVED WITH A COPY OF THIS ORDER.",
        Anchor::new(order::MARGIN, order::SERVICE_NOTICE_Y),
        FontSize::FormLabel,
    );

    let after_modify = prior_order_paragraph(
        canvas,
        order::MODIFY_Y,
        &MODIFY_WORDING,
        details.section1.as_ref(),
    )?;
    canvas.centered_text("OR", after_modify, FontSize::FormLabel, Weight::Bold);

    prior_order_paragraph(
        canvas,
        order::DISSOLVE_Y,
        &DISSOLVE_WORDING,
        details.section2.as_ref(),
    )?;

    court_costs_paragraph(canvas, details.section3.as_ref());
    Ok(())
}

/// Draws one prior-order paragraph starting at `top` and returns the baseline
/// of the row following it. Options are marked only when the paragraph
/// itself is selected.
fn prior_order_paragraph(
    canvas: &mut Canvas<'_>,
    top: f32,
    wording: &PriorOrderWording,
    details: Option<&PriorOrderParagraph>,
) -> Result<f32, AppError> {
    let details = details.filter(|d| d.is_selected);
    let mut y = top;

    canvas.option(Anchor::new(order::MARGIN, y), details.is_some());
    canvas.bold_label(
        &format!("{}   {}", wording.number, wording.opening),
        Anchor::new(order::TEXT_X, y),
        FontSize::FormLabel,
    );

    y -= LINE_HEIGHT;
    canvas.label(wording.continuation, Anchor::new(order::TEXT_X, y), FontSize::FormLabel);

    y -= LINE_HEIGHT;
    for ((kind, text), x) in ORDER_FORMS.iter().zip(order::ORDER_FORM_BOX_X) {
        let checked = details.map_or(false, |d| d.original_order_type.contains(kind));
        canvas.option(Anchor::new(x, y), checked);
        canvas.label(text, Anchor::new(x + order::OPTION_LABEL_GAP, y), FontSize::FormLabel);
    }

    y -= LINE_HEIGHT;
    canvas.label("on", Anchor::new(order::ON_LABEL_X, y), FontSize::FormLabel);
    canvas.underline(order::DATE_RULE_X, y - order::DATE_RULE_DROP, order::DATE_RULE_WIDTH);
    canvas.label(
        "(month/day/year) , pursuant to:",
        Anchor::new(order::DATE_CAPTION_X, y),
        FontSize::FormLabel,
    );
    if let Some(d) = details {
        canvas.date_value(&d.original_order_date, Anchor::new(order::DATE_VALUE_X, y))?;
    }

    y -= LINE_HEIGHT;
    for ((basis, text), x) in STATUTES.iter().zip(order::STATUTE_BOX_X) {
        let checked = details.map_or(false, |d| d.original_order_legal_basis.contains(basis));
        canvas.option(Anchor::new(x, y), checked);
        canvas.label(text, Anchor::new(x + order::OPTION_LABEL_GAP, y), FontSize::FormLabel);
    }

    for (text, weight) in wording.closing {
        y -= LINE_HEIGHT;
        canvas.text(text, order::TEXT_X, y, FontSize::FormLabel, *weight);
    }

    Ok(y - LINE_HEIGHT)
}

fn court_costs_paragraph(canvas: &mut Canvas<'_>, details: Option<&CourtCostsParagraph>) {
    let y = order::COURT_COSTS_Y;
    canvas.option(Anchor::new(order::MARGIN, y), details.map_or(false, |d| d.is_selected));
    canvas.bold_label(
        "3.    THE COURT ORDERS THE DEFENDANT to pay all court costs.",
        Anchor::new(order::TEXT_X, y),
        FontSize::FormLabel,
    );
}

fn signature_block(canvas: &mut Canvas<'_>) {
    use signatures::*;

    canvas.label("Date of Order", DATE_LABEL, FontSize::FormLabel);
    canvas.rule(DATE_RULE);
    canvas.label("month/day/year", DATE_CAPTION, FontSize::TinyText);

    canvas.bordered_rect(JUDGE_BOX, HEAVY_BORDER_WIDTH, None);
    canvas.rule(JUDGE_SIGNATURE_RULE);
    canvas.label("SIGNATURE OF JUDGE", JUDGE_SIGNATURE_LABEL, FontSize::FormLabel);
    canvas.rule(JUDGE_NAME_RULE);
    canvas.label("PRINT OR STAMP JUDGE'S NAME", JUDGE_NAME_LABEL, FontSize::FormLabel);

    canvas.rule(PETITIONER_RULE);
    canvas.rule(DEFENDANT_RULE);
    canvas.label("PETITIONER", PETITIONER_LABEL, FontSize::FormLabel);
    canvas.label("DEFENDANT", DEFENDANT_LABEL, FontSize::FormLabel);
}

fn service_block(canvas: &mut Canvas<'_>) {
    use service::*;

    let rows = [
        (SERVED_Y, "DEFENDANT WAS SERVED AT CLOSE OF HEARING."),
        (
            REGISTRY_Y,
            "FAXED OR ELECTRONICALLY TRANSMITTED TO LOUISIANA PROTECTIVE ORDER REGISTRY",
        ),
    ];
    for (y, heading) in rows {
        canvas.checkbox(MARGIN, y);
        canvas.bold_label(heading, Anchor::new(HEADING_X, y), FontSize::FormLabel);

        let detail_y = y - DETAIL_DROP;
        let rule_y = detail_y - RULE_DROP;
        canvas.label("Date", Anchor::new(MARGIN, detail_y), FontSize::FormLabel);
        canvas.underline(DATE_RULE.x, rule_y, DATE_RULE.width);
        canvas.label("Clerk", Anchor::new(CLERK_LABEL_X, detail_y), FontSize::FormLabel);
        canvas.underline(CLERK_RULE.x, rule_y, CLERK_RULE.width);
    }
}
