// LPOR 14 v.8 coordinate table.
//
// Measured from the printed v.8 form. Row positions below the title banner
// and in the lower third are re-spaced so that no two rows overlap; every x
// position and rule length is the printed one.

use crate::style::{Anchor, Rect, Rule};

pub mod admin_box {
    use super::*;

    pub const BOX: Rect = Rect::new(455.0, 730.0, 135.0, 50.0);
}

pub mod title {
    use super::*;

    pub const BASELINE_Y: f32 = 705.0;
    pub const BANNER: Rect = Rect::new(24.0, 699.0, 564.0, 24.0);
}

pub mod court {
    use super::*;

    pub const ROW_Y: f32 = 686.0;
    pub const NAME_LABEL: Anchor = Anchor::new(50.0, ROW_Y);
    pub const NAME_RULE: Rule = Rule::new(155.0, ROW_Y - 2.0, 195.0);
    pub const NAME_VALUE: Anchor = Anchor::new(160.0, ROW_Y);
    pub const DOCKET_LABEL: Anchor = Anchor::new(365.0, ROW_Y);
    pub const DOCKET_RULE: Rule = Rule::new(415.0, ROW_Y - 2.0, 85.0);
    pub const DOCKET_VALUE: Anchor = Anchor::new(420.0, ROW_Y);
    pub const DIVISION_LABEL: Anchor = Anchor::new(505.0, ROW_Y);
    pub const DIVISION_RULE: Rule = Rule::new(525.0, ROW_Y - 2.0, 45.0);
    pub const DIVISION_VALUE: Anchor = Anchor::new(530.0, ROW_Y);

    pub const FILED_Y: f32 = 672.0;
    pub const FILED_LABEL: Anchor = Anchor::new(50.0, FILED_Y);
    pub const FILED_RULE: Rule = Rule::new(70.0, FILED_Y - 3.0, 100.0);
    pub const FILED_VALUE: Anchor = Anchor::new(75.0, FILED_Y);
    pub const CLERK_LABEL: Anchor = Anchor::new(220.0, FILED_Y);
    pub const CLERK_RULE: Rule = Rule::new(265.0, FILED_Y - 3.0, 120.0);
    pub const CLERK_VALUE: Anchor = Anchor::new(270.0, FILED_Y);
}

pub mod order_type {
    use super::*;

    pub const ROW_Y: f32 = 655.0;
    pub const HEADING: Anchor = Anchor::new(50.0, ROW_Y);
    pub const MODIFY_BOX: Anchor = Anchor::new(120.0, ROW_Y - 2.0);
    pub const MODIFY_LABEL: Anchor = Anchor::new(135.0, ROW_Y);
    pub const DISSOLVE_BOX: Anchor = Anchor::new(200.0, ROW_Y - 2.0);
    pub const DISSOLVE_LABEL: Anchor = Anchor::new(215.0, ROW_Y);

    pub const SUBTITLE_Y: f32 = 641.0;
    pub const STATUTES_Y: f32 = 629.0;
    pub const CONSENT_Y: f32 = 619.0;
}

pub mod petitioner {
    use super::*;

    pub const BOX: Rect = Rect::new(30.0, 500.0, 546.0, 110.0);

    pub const NAME_Y: f32 = 590.0;
    pub const NAME_LABEL: Anchor = Anchor::new(36.0, NAME_Y);
    pub const NAME_RULE: Rule = Rule::new(156.0, NAME_Y - 3.0, 400.0);
    pub const FIRST_VALUE: Anchor = Anchor::new(161.0, NAME_Y);
    pub const MIDDLE_VALUE: Anchor = Anchor::new(296.0, NAME_Y);
    pub const LAST_VALUE: Anchor = Anchor::new(436.0, NAME_Y);
    pub const CAPTION_Y: f32 = 577.0;
    pub const FIRST_CAPTION: Anchor = Anchor::new(216.0, CAPTION_Y);
    pub const MIDDLE_CAPTION: Anchor = Anchor::new(316.0, CAPTION_Y);
    pub const LAST_CAPTION: Anchor = Anchor::new(456.0, CAPTION_Y);

    pub const DOB_Y: f32 = 560.0;
    pub const DOB_LABEL: Anchor = Anchor::new(36.0, DOB_Y);
    pub const DOB_RULE: Rule = Rule::new(106.0, DOB_Y - 3.0, 70.0);
    pub const DOB_VALUE: Anchor = Anchor::new(111.0, DOB_Y);
    pub const DOB_CAPTION: Anchor = Anchor::new(111.0, DOB_Y - 10.0);
    pub const SEX_LABEL: Anchor = Anchor::new(196.0, DOB_Y);
    pub const FEMALE_BOX: Anchor = Anchor::new(226.0, DOB_Y - 2.0);
    pub const MALE_BOX: Anchor = Anchor::new(256.0, DOB_Y - 2.0);
    pub const RACE_LABEL: Anchor = Anchor::new(316.0, DOB_Y);
    pub const RACE_RULE: Rule = Rule::new(346.0, DOB_Y - 3.0, 80.0);
    pub const RACE_VALUE: Anchor = Anchor::new(351.0, DOB_Y);

    pub const PROTECTED_Y: f32 = 540.0;
    pub const PROTECTED_LABEL: Anchor = Anchor::new(36.0, PROTECTED_Y);
    pub const PETITIONER_BOX: Anchor = Anchor::new(136.0, PROTECTED_Y - 2.0);
    pub const PETITIONER_LABEL: Anchor = Anchor::new(151.0, PROTECTED_Y);
    pub const OTHERS_BOX: Anchor = Anchor::new(216.0, PROTECTED_Y - 2.0);
    pub const OTHERS_LABEL: Anchor = Anchor::new(231.0, PROTECTED_Y);
    pub const OTHERS_PROMPT: Anchor = Anchor::new(296.0, PROTECTED_Y);

    pub const OTHERS_RULES: [Rule; 2] = [Rule::new(36.0, 520.0, 540.0), Rule::new(36.0, 512.0, 540.0)];
    /// One line of the others list per rule
    pub const OTHERS_LINES: [Anchor; 2] = [Anchor::new(41.0, 522.0), Anchor::new(41.0, 514.0)];
}

pub mod defendant {
    use super::*;

    pub const VERSUS_Y: f32 = 485.0;
    pub const BOX: Rect = Rect::new(45.0, 365.0, 522.0, 105.0);

    pub const NAME_Y: f32 = 455.0;
    pub const NAME_LABEL: Anchor = Anchor::new(48.0, NAME_Y);
    pub const NAME_RULE: Rule = Rule::new(168.0, NAME_Y - 3.0, 400.0);
    pub const NAME_VALUE: Anchor = Anchor::new(173.0, NAME_Y);

    pub const ALIAS_Y: f32 = 440.0;
    pub const ALIAS_LABEL: Anchor = Anchor::new(48.0, ALIAS_Y);
    pub const ALIAS_RULE: Rule = Rule::new(78.0, ALIAS_Y - 3.0, 70.0);
    pub const ALIAS_VALUE: Anchor = Anchor::new(83.0, ALIAS_Y);
    pub const DOB_LABEL: Anchor = Anchor::new(168.0, ALIAS_Y);
    pub const DOB_RULE: Rule = Rule::new(223.0, ALIAS_Y - 3.0, 70.0);
    pub const DOB_VALUE: Anchor = Anchor::new(228.0, ALIAS_Y);
    pub const DOB_CAPTION: Anchor = Anchor::new(228.0, ALIAS_Y - 10.0);
    pub const SEX_LABEL: Anchor = Anchor::new(318.0, ALIAS_Y);
    pub const FEMALE_BOX: Anchor = Anchor::new(343.0, ALIAS_Y - 2.0);
    pub const MALE_BOX: Anchor = Anchor::new(373.0, ALIAS_Y - 2.0);
    pub const RACE_LABEL: Anchor = Anchor::new(418.0, ALIAS_Y);
    pub const RACE_RULE: Rule = Rule::new(443.0, ALIAS_Y - 3.0, 80.0);
    pub const RACE_VALUE: Anchor = Anchor::new(448.0, ALIAS_Y);

    pub const ADDRESS_Y: f32 = 425.0;
    pub const ADDRESS_LABEL: Anchor = Anchor::new(48.0, ADDRESS_Y);
    pub const STREET_RULE: Rule = Rule::new(98.0, ADDRESS_Y - 3.0, 180.0);
    pub const STREET_VALUE: Anchor = Anchor::new(103.0, ADDRESS_Y);
    pub const STREET_CAPTION: Anchor = Anchor::new(148.0, ADDRESS_Y - 15.0);
    pub const APT_RULE: Rule = Rule::new(288.0, ADDRESS_Y - 3.0, 50.0);
    pub const APT_VALUE: Anchor = Anchor::new(293.0, ADDRESS_Y);
    pub const APT_CAPTION: Anchor = Anchor::new(298.0, ADDRESS_Y - 15.0);
    pub const CITY_RULE: Rule = Rule::new(348.0, ADDRESS_Y - 3.0, 120.0);
    pub const CITY_VALUE: Anchor = Anchor::new(353.0, ADDRESS_Y);
    pub const CITY_CAPTION: Anchor = Anchor::new(388.0, ADDRESS_Y - 15.0);

    pub const STATE_Y: f32 = 410.0;
    pub const STATE_RULE: Rule = Rule::new(48.0, STATE_Y - 3.0, 100.0);
    pub const STATE_VALUE: Anchor = Anchor::new(53.0, STATE_Y);
    pub const STATE_CAPTION: Anchor = Anchor::new(78.0, STATE_Y - 15.0);
    pub const ZIP_RULE: Rule = Rule::new(158.0, STATE_Y - 3.0, 80.0);
    pub const ZIP_VALUE: Anchor = Anchor::new(163.0, STATE_Y);
    pub const ZIP_CAPTION: Anchor = Anchor::new(178.0, STATE_Y - 15.0);

    pub const SSN_Y: f32 = 390.0;
    pub const SSN_LABEL: Anchor = Anchor::new(48.0, SSN_Y);
    pub const SSN_RULE: Rule = Rule::new(133.0, SSN_Y - 3.0, 90.0);
    pub const SSN_VALUE: Anchor = Anchor::new(138.0, SSN_Y);
    pub const LICENSE_LABEL: Anchor = Anchor::new(248.0, SSN_Y);
    pub const LICENSE_RULE: Rule = Rule::new(293.0, SSN_Y - 3.0, 70.0);
    pub const LICENSE_VALUE: Anchor = Anchor::new(298.0, SSN_Y);
    pub const LICENSE_STATE_LABEL: Anchor = Anchor::new(378.0, SSN_Y);
    pub const LICENSE_STATE_RULE: Rule = Rule::new(403.0, SSN_Y - 3.0, 35.0);
    pub const LICENSE_STATE_VALUE: Anchor = Anchor::new(408.0, SSN_Y);
    pub const EXPIRATION_LABEL: Anchor = Anchor::new(458.0, SSN_Y);
    pub const EXPIRATION_RULE: Rule = Rule::new(478.0, SSN_Y - 3.0, 60.0);
    pub const EXPIRATION_VALUE: Anchor = Anchor::new(483.0, SSN_Y);
    pub const EXPIRATION_CAPTION: Anchor = Anchor::new(488.0, SSN_Y - 10.0);
}

/// Order paragraphs. Paragraph rows step down by `LINE_HEIGHT` from each
/// paragraph's first line; x positions are shared by paragraphs 1 and 2.
pub mod order {
    pub const MARGIN: f32 = 50.0;
    pub const TEXT_X: f32 = 65.0;

    pub const SERVICE_NOTICE_Y: f32 = 360.0;
    pub const MODIFY_Y: f32 = 340.0;
    pub const DISSOLVE_Y: f32 = 250.0;
    pub const COURT_COSTS_Y: f32 = 181.0;

    /// TRO, preliminary, permanent
    pub const ORDER_FORM_BOX_X: [f32; 3] = [70.0, 240.0, 390.0];
    /// R.S. 9:372, R.S. 9:361, C.C.P. 3601
    pub const STATUTE_BOX_X: [f32; 3] = [90.0, 190.0, 330.0];
    /// Option labels sit this far right of their checkbox
    pub const OPTION_LABEL_GAP: f32 = 15.0;

    pub const ON_LABEL_X: f32 = 70.0;
    pub const DATE_RULE_X: f32 = 85.0;
    pub const DATE_RULE_WIDTH: f32 = 80.0;
    /// The "on ____" rule sits this far below its row's baseline
    pub const DATE_RULE_DROP: f32 = 3.0;
    pub const DATE_VALUE_X: f32 = 90.0;
    pub const DATE_CAPTION_X: f32 = 170.0;
}

pub mod signatures {
    use super::*;

    pub const DATE_Y: f32 = 160.0;
    pub const DATE_LABEL: Anchor = Anchor::new(50.0, DATE_Y);
    pub const DATE_RULE: Rule = Rule::new(120.0, DATE_Y - 3.0, 100.0);
    pub const DATE_CAPTION: Anchor = Anchor::new(125.0, DATE_Y - 12.0);

    pub const JUDGE_BOX: Rect = Rect::new(45.0, 101.0, 280.0, 30.0);
    pub const JUDGE_SIGNATURE_RULE: Rule = Rule::new(50.0, 126.0, 180.0);
    pub const JUDGE_SIGNATURE_LABEL: Anchor = Anchor::new(240.0, 126.0);
    pub const JUDGE_NAME_RULE: Rule = Rule::new(50.0, 114.0, 180.0);
    pub const JUDGE_NAME_LABEL: Anchor = Anchor::new(240.0, 114.0);

    pub const PETITIONER_RULE: Rule = Rule::new(50.0, 86.0, 140.0);
    pub const PETITIONER_LABEL: Anchor = Anchor::new(90.0, 74.0);
    pub const DEFENDANT_RULE: Rule = Rule::new(250.0, 86.0, 140.0);
    pub const DEFENDANT_LABEL: Anchor = Anchor::new(290.0, 74.0);
}

pub mod service {
    use super::*;

    pub const MARGIN: f32 = 50.0;
    pub const HEADING_X: f32 = 65.0;
    pub const SERVED_Y: f32 = 60.0;
    pub const REGISTRY_Y: f32 = 36.0;
    /// Date/clerk row sits this far below its checkbox row
    pub const DETAIL_DROP: f32 = 10.0;
    /// Rules sit this far below the date/clerk labels; their y is taken per row
    pub const RULE_DROP: f32 = 3.0;
    pub const DATE_RULE: Rule = Rule::new(75.0, 0.0, 80.0);
    pub const CLERK_LABEL_X: f32 = 170.0;
    pub const CLERK_RULE: Rule = Rule::new(195.0, 0.0, 100.0);
}

pub mod footer {
    use super::*;

    pub const LINES: [Anchor; 2] = [Anchor::new(50.0, 16.0), Anchor::new(50.0, 9.0)];
    pub const VERSION: Anchor = Anchor::new(562.0, 16.0);
}
