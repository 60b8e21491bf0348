use serde::Deserialize;
use validator::Validate;

use crate::domain::tag::{NewTag, UpdateTag};
use crate::forms::{FormResult, sanitize_inline_text, validate_not_blank};

/// Maximum allowed length for a tag name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Body of `POST /tags`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddTagForm {
    /// Name entered by the user.
    #[validate(
        required,
        length(min = 1, max = NAME_MAX_LEN_VALIDATOR),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> FormResult<NewTag> {
        self.validate()?;

        let name = self.name.unwrap_or_default();
        Ok(NewTag::new(sanitize_inline_text(&name)))
    }
}

/// Body of `PUT /tags/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditTagForm {
    /// Updated name supplied by the user.
    #[validate(
        length(min = 1, max = NAME_MAX_LEN_VALIDATOR),
        custom(function = "validate_not_blank")
    )]
    pub name: Option<String>,
}

impl EditTagForm {
    /// Validates and sanitizes the payload into a domain `UpdateTag`.
    pub fn into_update_tag(self) -> FormResult<UpdateTag> {
        self.validate()?;

        let mut update = UpdateTag::new();
        if let Some(name) = self.name {
            update = update.name(sanitize_inline_text(&name));
        }

        Ok(update)
    }
}
