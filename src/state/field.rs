//! Valid/invalid feedback for required form fields.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

pub const REQUIRED_FIELD_SELECTOR: &str = "input[required], textarea[required], select[required]";
pub const VALID_CLASS: &str = "valid";
pub const INVALID_CLASS: &str = "invalid";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldMark {
    #[default]
    Unchecked,
    Valid,
    Invalid,
}

impl FieldMark {
    /// Leaving the field always re-checks it.
    #[must_use]
    pub fn on_blur(self, valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    /// Typing only re-checks a field that is currently marked invalid, so
    /// the user is not nagged before they finish.
    #[must_use]
    pub fn on_input(self, valid: bool) -> Self {
        match self {
            Self::Invalid => self.on_blur(valid),
            other => other,
        }
    }

    /// `(class to add, class to remove)`, or `None` before the first check.
    pub fn classes(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Unchecked => None,
            Self::Valid => Some((VALID_CLASS, INVALID_CLASS)),
            Self::Invalid => Some((INVALID_CLASS, VALID_CLASS)),
        }
    }
}
