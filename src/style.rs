// Page geometry, type scale and stroke constants shared by every form template.
//
// All coordinates in this crate are PDF points with the origin at the
// bottom-left corner of a US Letter page.

/// US Letter dimensions in points
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

/// Points to millimetres, printpdf positions everything in `Mm`
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// Stroke widths
pub const BORDER_WIDTH: f32 = 0.8;
pub const UNDERLINE_WIDTH: f32 = 0.6;
pub const HEAVY_BORDER_WIDTH: f32 = 2.0;

/// Checkbox geometry
pub const CHECKBOX_SIZE: f32 = 6.5;
pub const CHECK_MARK_INSET: f32 = 0.8;
pub const CHECK_MARK_WIDTH: f32 = UNDERLINE_WIDTH + 0.2;

/// Vertical advance between lines of boilerplate
pub const LINE_HEIGHT: f32 = 11.0;

/// A value written onto a rule starts this far in from the rule's left end
/// and sits this far above it.
pub const VALUE_INSET: f32 = 5.0;
pub const VALUE_LIFT: f32 = 3.0;

/// Named font sizes. Section renderers never pass a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Title,
    HeaderTitle,
    SectionHeader,
    FormLabel,
    CheckboxLabel,
    FieldText,
    SmallText,
    TinyText,
}

impl FontSize {
    pub fn points(self) -> f32 {
        match self {
            FontSize::Title => 14.0,
            FontSize::HeaderTitle => 12.0,
            FontSize::SectionHeader => 8.5,
            FontSize::FormLabel => 7.5,
            FontSize::CheckboxLabel => 7.5,
            FontSize::FieldText => 7.0,
            FontSize::SmallText => 6.5,
            FontSize::TinyText => 5.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Device RGB colour, components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

/// Fill behind the title banner
pub const BANNER_GRAY: Rgb = Rgb::new(0.88, 0.88, 0.88);

/// A point on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A horizontal rule: start point and length
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

impl Rule {
    pub const fn new(x: f32, y: f32, width: f32) -> Self {
        Self { x, y, width }
    }
}

/// Axis-aligned rectangle anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}
