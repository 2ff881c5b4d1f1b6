// A form template is an ordered list of sections; list order is paint order.

use crate::canvas::Canvas;
use crate::error::AppError;

/// Renders one visual region of a form. Receives the whole form record but
/// each entry in a template's list forwards only the fields its region owns.
pub type RenderFn<T> = fn(&mut Canvas<'_>, &T) -> Result<(), AppError>;

pub struct Section<T> {
    pub name: &'static str,
    pub render: RenderFn<T>,
}

/// Paints `sections` in order. Stops at the first failure; the caller must
/// then discard the page.
pub fn paint<T>(canvas: &mut Canvas<'_>, sections: &[Section<T>], form: &T) -> Result<(), AppError> {
    for section in sections {
        log::debug!("painting section {}", section.name);
        (section.render)(canvas, form)?;
    }
    Ok(())
}
