// LPOR F v.1 coordinate table.

use super::{INCOMPETENT_SLOTS, MINOR_CHILD_SLOTS};
use crate::style::{Anchor, Rect, Rule, VALUE_LIFT};

/// Street / apt / city / state / zip rules on one row, captioned underneath.
pub struct AddressRow {
    pub label: Anchor,
    pub street: Rule,
    pub apt: Rule,
    pub city: Rule,
    pub state: Rule,
    pub zip: Rule,
    pub caption_y: f32,
}

/// Social security number and driver's licence row.
pub struct IdentityRow {
    pub ssn_label: Anchor,
    pub ssn: Rule,
    pub license_label: Anchor,
    pub license: Rule,
    pub state_label: Anchor,
    pub state: Rule,
    pub expiration_label: Anchor,
    pub expiration: Rule,
    pub caption_y: f32,
}

/// A numbered person list with one rule per column and row.
pub struct PersonTable {
    pub heading: Anchor,
    pub header_y: f32,
    pub number_x: f32,
    pub name: Rule,
    pub date_of_birth: Rule,
    pub relationship: Rule,
    /// Rule heights of the rows; the x/width of each column rule is reused
    pub rows: &'static [f32],
}

impl PersonTable {
    /// Row numbers sit this far above their row's rules
    pub const NUMBER_LIFT: f32 = VALUE_LIFT;
}

pub mod admin_box {
    use super::*;

    pub const BOX: Rect = Rect::new(455.0, 738.0, 135.0, 44.0);
}

pub mod title {
    use super::*;

    pub const BASELINE_Y: f32 = 712.0;
    pub const BANNER: Rect = Rect::new(24.0, 706.0, 564.0, 24.0);
    pub const SUBTITLE_Y: f32 = 696.0;
    pub const STATUTE_Y: f32 = 686.0;
}

pub mod court {
    use super::*;

    pub const ROW_Y: f32 = 668.0;
    pub const NAME_LABEL: Anchor = Anchor::new(50.0, ROW_Y);
    pub const NAME_RULE: Rule = Rule::new(108.0, ROW_Y - 2.0, 200.0);
    pub const DOCKET_LABEL: Anchor = Anchor::new(318.0, ROW_Y);
    pub const DOCKET_RULE: Rule = Rule::new(368.0, ROW_Y - 2.0, 110.0);
    pub const DIVISION_LABEL: Anchor = Anchor::new(488.0, ROW_Y);
    pub const DIVISION_RULE: Rule = Rule::new(508.0, ROW_Y - 2.0, 54.0);

    pub const SECOND_ROW_Y: f32 = 654.0;
    pub const PARISH_LABEL: Anchor = Anchor::new(50.0, SECOND_ROW_Y);
    pub const PARISH_RULE: Rule = Rule::new(108.0, SECOND_ROW_Y - 2.0, 130.0);
    pub const FILED_LABEL: Anchor = Anchor::new(250.0, SECOND_ROW_Y);
    pub const FILED_RULE: Rule = Rule::new(278.0, SECOND_ROW_Y - 2.0, 90.0);
    pub const CLERK_LABEL: Anchor = Anchor::new(380.0, SECOND_ROW_Y);
    pub const CLERK_RULE: Rule = Rule::new(410.0, SECOND_ROW_Y - 2.0, 152.0);
}

pub mod filing_purpose {
    use super::*;

    pub const HEADING: Anchor = Anchor::new(50.0, 634.0);
    pub const OPTION_Y: f32 = 620.0;
    pub const PETITIONER_BOX: Anchor = Anchor::new(60.0, OPTION_Y - 2.0);
    pub const MINOR_CHILDREN_BOX: Anchor = Anchor::new(170.0, OPTION_Y - 2.0);
    pub const INCOMPETENT_BOX: Anchor = Anchor::new(340.0, OPTION_Y - 2.0);
    /// Option labels sit this far right of their checkbox
    pub const LABEL_GAP: f32 = 12.0;
    pub const NOTICE: Anchor = Anchor::new(50.0, 606.0);
}

pub mod request {
    use super::*;

    pub const LINES: [Anchor; 2] = [Anchor::new(50.0, 592.0), Anchor::new(50.0, 582.0)];
}

pub mod petitioner {
    use super::*;

    pub const BOX: Rect = Rect::new(30.0, 434.0, 552.0, 138.0);

    pub const NAME_Y: f32 = 558.0;
    pub const NAME_LABEL: Anchor = Anchor::new(36.0, NAME_Y);
    pub const NAME_RULE: Rule = Rule::new(156.0, NAME_Y - 3.0, 400.0);
    pub const FIRST_VALUE: Anchor = Anchor::new(161.0, NAME_Y);
    pub const MIDDLE_VALUE: Anchor = Anchor::new(296.0, NAME_Y);
    pub const LAST_VALUE: Anchor = Anchor::new(436.0, NAME_Y);
    pub const CAPTION_Y: f32 = 547.0;
    pub const FIRST_CAPTION: Anchor = Anchor::new(216.0, CAPTION_Y);
    pub const MIDDLE_CAPTION: Anchor = Anchor::new(316.0, CAPTION_Y);
    pub const LAST_CAPTION: Anchor = Anchor::new(456.0, CAPTION_Y);

    pub const CONTACT_Y: f32 = 532.0;
    pub const DOB_LABEL: Anchor = Anchor::new(36.0, CONTACT_Y);
    pub const DOB_RULE: Rule = Rule::new(91.0, CONTACT_Y - 3.0, 70.0);
    pub const DOB_CAPTION_Y: f32 = CONTACT_Y - 10.0;
    pub const RACE_LABEL: Anchor = Anchor::new(176.0, CONTACT_Y);
    pub const RACE_RULE: Rule = Rule::new(201.0, CONTACT_Y - 3.0, 60.0);
    pub const PHONE_LABEL: Anchor = Anchor::new(276.0, CONTACT_Y);
    pub const PHONE_RULE: Rule = Rule::new(316.0, CONTACT_Y - 3.0, 90.0);
    pub const EMAIL_LABEL: Anchor = Anchor::new(416.0, CONTACT_Y);
    pub const EMAIL_RULE: Rule = Rule::new(446.0, CONTACT_Y - 3.0, 130.0);

    pub const ADDRESS: AddressRow = AddressRow {
        label: Anchor::new(36.0, 512.0),
        street: Rule::new(76.0, 509.0, 180.0),
        apt: Rule::new(266.0, 509.0, 40.0),
        city: Rule::new(316.0, 509.0, 100.0),
        state: Rule::new(426.0, 509.0, 40.0),
        zip: Rule::new(476.0, 509.0, 90.0),
        caption_y: 502.0,
    };

    pub const IDENTITY: IdentityRow = IdentityRow {
        ssn_label: Anchor::new(36.0, 488.0),
        ssn: Rule::new(106.0, 485.0, 90.0),
        license_label: Anchor::new(216.0, 488.0),
        license: Rule::new(256.0, 485.0, 80.0),
        state_label: Anchor::new(356.0, 488.0),
        state: Rule::new(378.0, 485.0, 35.0),
        expiration_label: Anchor::new(433.0, 488.0),
        expiration: Rule::new(453.0, 485.0, 60.0),
        caption_y: 479.0,
    };

    /// Printed blank; the intake form does not collect the workplace.
    pub const WORK_ADDRESS: AddressRow = AddressRow {
        label: Anchor::new(36.0, 466.0),
        street: Rule::new(101.0, 463.0, 155.0),
        apt: Rule::new(266.0, 463.0, 40.0),
        city: Rule::new(316.0, 463.0, 100.0),
        state: Rule::new(426.0, 463.0, 40.0),
        zip: Rule::new(476.0, 463.0, 90.0),
        caption_y: 456.0,
    };
    pub const WORK_PHONE_LABEL: Anchor = Anchor::new(36.0, 442.0);
    pub const WORK_PHONE_RULE: Rule = Rule::new(111.0, 439.0, 120.0);
}

pub mod minor_children {
    use super::*;

    pub const TABLE: PersonTable = PersonTable {
        heading: Anchor::new(36.0, 420.0),
        header_y: 408.0,
        number_x: 40.0,
        name: Rule::new(56.0, 0.0, 220.0),
        date_of_birth: Rule::new(296.0, 0.0, 80.0),
        relationship: Rule::new(396.0, 0.0, 150.0),
        rows: &ROWS,
    };

    const ROWS: [f32; MINOR_CHILD_SLOTS] = [395.0, 382.0, 369.0, 356.0, 343.0, 330.0];
}

pub mod incompetents {
    use super::*;

    pub const TABLE: PersonTable = PersonTable {
        heading: Anchor::new(36.0, 316.0),
        header_y: 304.0,
        number_x: 40.0,
        name: Rule::new(56.0, 0.0, 220.0),
        date_of_birth: Rule::new(296.0, 0.0, 80.0),
        relationship: Rule::new(396.0, 0.0, 150.0),
        rows: &ROWS,
    };

    const ROWS: [f32; INCOMPETENT_SLOTS] = [291.0, 278.0];
}

pub mod children_address {
    use super::*;

    pub const SAME_ADDRESS_BOX: Anchor = Anchor::new(36.0, 262.0);
    pub const SAME_ADDRESS_LABEL: Anchor = Anchor::new(48.0, 264.0);

    pub const ADDRESS: AddressRow = AddressRow {
        label: Anchor::new(36.0, 248.0),
        street: Rule::new(176.0, 245.0, 150.0),
        apt: Rule::new(336.0, 245.0, 40.0),
        city: Rule::new(386.0, 245.0, 90.0),
        state: Rule::new(486.0, 245.0, 30.0),
        zip: Rule::new(526.0, 245.0, 50.0),
        caption_y: 238.0,
    };
}

/// School or daycare of the minor children. Printed blank.
pub mod children_information {
    use super::*;

    pub const HEADING: Anchor = Anchor::new(36.0, 224.0);
    pub const SCHOOL_LABEL: Anchor = Anchor::new(236.0, 224.0);
    pub const SCHOOL_RULE: Rule = Rule::new(316.0, 221.0, 260.0);

    pub const ADDRESS: AddressRow = AddressRow {
        label: Anchor::new(36.0, 210.0),
        street: Rule::new(106.0, 207.0, 150.0),
        apt: Rule::new(266.0, 207.0, 40.0),
        city: Rule::new(316.0, 207.0, 100.0),
        state: Rule::new(426.0, 207.0, 40.0),
        zip: Rule::new(476.0, 207.0, 90.0),
        caption_y: 200.0,
    };
}

pub mod defendant {
    use super::*;

    pub const VERSUS_Y: f32 = 186.0;
    pub const BOX: Rect = Rect::new(42.0, 80.0, 528.0, 98.0);

    pub const NAME_LABEL: Anchor = Anchor::new(48.0, 164.0);
    pub const NAME_RULE: Rule = Rule::new(168.0, 161.0, 396.0);

    pub const GUARDIAN_LABEL: Anchor = Anchor::new(48.0, 148.0);
    pub const GUARDIAN_RULE: Rule = Rule::new(158.0, 145.0, 150.0);
    pub const ALIAS_LABEL: Anchor = Anchor::new(328.0, 148.0);
    pub const ALIAS_RULE: Rule = Rule::new(358.0, 145.0, 206.0);

    pub const RACE_LABEL: Anchor = Anchor::new(48.0, 132.0);
    pub const RACE_RULE: Rule = Rule::new(73.0, 129.0, 60.0);
    pub const PHONE_LABEL: Anchor = Anchor::new(148.0, 132.0);
    pub const PHONE_RULE: Rule = Rule::new(188.0, 129.0, 100.0);
    pub const EMAIL_LABEL: Anchor = Anchor::new(308.0, 132.0);
    pub const EMAIL_RULE: Rule = Rule::new(338.0, 129.0, 226.0);

    pub const ADDRESS: AddressRow = AddressRow {
        label: Anchor::new(48.0, 116.0),
        street: Rule::new(88.0, 113.0, 170.0),
        apt: Rule::new(268.0, 113.0, 40.0),
        city: Rule::new(318.0, 113.0, 100.0),
        state: Rule::new(428.0, 113.0, 40.0),
        zip: Rule::new(478.0, 113.0, 86.0),
        caption_y: 106.0,
    };

    pub const IDENTITY: IdentityRow = IdentityRow {
        ssn_label: Anchor::new(48.0, 94.0),
        ssn: Rule::new(118.0, 91.0, 90.0),
        license_label: Anchor::new(228.0, 94.0),
        license: Rule::new(268.0, 91.0, 80.0),
        state_label: Anchor::new(368.0, 94.0),
        state: Rule::new(390.0, 91.0, 35.0),
        expiration_label: Anchor::new(445.0, 94.0),
        expiration: Rule::new(465.0, 91.0, 60.0),
        caption_y: 84.0,
    };
}

pub mod signatures {
    use super::*;

    pub const PETITIONER_RULE: Rule = Rule::new(50.0, 62.0, 220.0);
    pub const DATE_RULE: Rule = Rule::new(330.0, 62.0, 100.0);
    pub const CAPTION_Y: f32 = 53.0;

    pub const PRINT_NAME_LABEL: Anchor = Anchor::new(50.0, 38.0);
    pub const PRINT_NAME_RULE: Rule = Rule::new(110.0, 35.0, 220.0);
}

pub mod footer {
    use super::*;

    pub const LINE: Anchor = Anchor::new(50.0, 24.0);
    pub const VERSION: Anchor = Anchor::new(562.0, 24.0);
}
