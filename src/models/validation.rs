//! Field validators shared by the request types

use std::borrow::Cow;

use validator::ValidationError;

/// Required text must carry something besides whitespace
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    Ok(())
}
