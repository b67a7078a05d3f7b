use std::{borrow::Cow, collections::BTreeMap};

use validator::{ValidationError, ValidationErrors};

use crate::{Difficulty, RecipeInput};

/// Collects failed checks by field. Only the first message recorded for a
/// field is kept.
#[derive(Debug, Default, Clone)]
pub struct Validator(ValidationErrors);

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(
        &mut self,
        ok: bool,
        field: &'static str,
        message: impl Into<Cow<'static, str>>,
    ) {
        if ok || self.0.errors().contains_key(field) {
            return;
        }

        let mut error = ValidationError::new("invalid");
        error.message = Some(message.into());
        self.0.add(field, error);
    }

    /// A validation error carrying one failed field.
    pub fn rejected(field: &'static str, message: impl Into<Cow<'static, str>>) -> crate::Error {
        let mut v = Self::new();
        v.check(false, field, message);
        crate::Error::Validate(v.0)
    }

    pub fn valid(&self) -> bool {
        self.0.errors().is_empty()
    }

    /// Field to message view, ordered by field name.
    pub fn messages(&self) -> BTreeMap<String, String> {
        messages(&self.0)
    }

    pub fn finish(self) -> crate::Result<()> {
        if self.valid() {
            Ok(())
        } else {
            Err(self.0.into())
        }
    }
}

pub fn messages(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_owned());
            (field.to_string(), message)
        })
        .collect()
}

pub fn validate_recipe(v: &mut Validator, input: &RecipeInput) {
    v.check(!input.title.is_empty(), "title", "must be provided");
    v.check(
        input.title.len() <= 500,
        "title",
        "must not be more than 500 bytes long",
    );
    v.check(
        !input.instructions.is_empty(),
        "instructions",
        "must be provided",
    );
    v.check(
        input.preparation_time.0 != 0,
        "preparation_time",
        "must be provided",
    );
    v.check(
        input.cooking_time.0 != 0,
        "cooking_time",
        "must be provided",
    );
    v.check(
        !input.cuisine_name.is_empty(),
        "cuisine_name",
        "must be provided",
    );
    v.check(!input.difficulty.is_empty(), "difficulty", "must be provided");
    v.check(
        input.difficulty.parse::<Difficulty>().is_ok(),
        "difficulty",
        "must be one of Easy, Medium, Advanced",
    );

    if let Some(link) = &input.image_link {
        v.check(!link.trim().is_empty(), "image_link", "must not be blank");
        v.check(
            link.len() <= 2048,
            "image_link",
            "must not be more than 2048 bytes long",
        );
    }

    if let Some(ingredients) = &input.ingredients {
        v.check(
            ingredients.iter().all(|i| !i.name.trim().is_empty()),
            "ingredients",
            "every ingredient must have a name",
        );
        v.check(
            ingredients
                .iter()
                .all(|i| i.quantity.is_finite() && i.quantity >= 0.0),
            "ingredients",
            "quantities must be non-negative numbers",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ingredient, Minutes};

    fn pancakes() -> RecipeInput {
        RecipeInput {
            title: "Pancakes".to_owned(),
            instructions: "Whisk, rest, fry".to_owned(),
            preparation_time: Minutes(10),
            cooking_time: Minutes(15),
            difficulty: "Easy".to_owned(),
            cuisine_name: "American".to_owned(),
            ingredients: None,
            image_link: None,
        }
    }

    #[test]
    fn passing_checks_record_nothing() {
        let mut v = Validator::new();
        v.check(true, "title", "must be provided");
        assert!(v.valid());
        assert!(v.messages().is_empty());
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut v = Validator::new();
        v.check(false, "title", "must be provided");
        v.check(false, "title", "must not be more than 500 bytes long");
        v.check(false, "page", "must be greater than zero");

        assert!(!v.valid());
        let messages = v.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages["title"], "must be provided");
        assert_eq!(messages["page"], "must be greater than zero");
    }

    #[test]
    fn finish_turns_failures_into_validate_error() {
        let mut v = Validator::new();
        v.check(false, "sort", "invalid sort value");

        let err = v.finish().unwrap_err();
        let crate::Error::Validate(errors) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(messages(&errors)["sort"], "invalid sort value");
    }

    #[test]
    fn rejected_carries_one_field() {
        let crate::Error::Validate(errors) = Validator::rejected("cuisine_name", "unknown cuisine")
        else {
            panic!("expected a validation error");
        };
        assert_eq!(messages(&errors).len(), 1);
        assert_eq!(messages(&errors)["cuisine_name"], "unknown cuisine");
    }

    #[test]
    fn blank_image_link_is_rejected() {
        let mut input = pancakes();
        input.image_link = Some("  ".to_owned());

        let mut v = Validator::new();
        validate_recipe(&mut v, &input);
        assert_eq!(v.messages()["image_link"], "must not be blank");

        input.image_link = Some("https://img.example/pancakes.jpg".to_owned());
        let mut v = Validator::new();
        validate_recipe(&mut v, &input);
        assert!(v.valid(), "{:?}", v.messages());
    }

    #[test]
    fn valid_recipe_passes() {
        let mut v = Validator::new();
        validate_recipe(&mut v, &pancakes());
        assert!(v.valid(), "{:?}", v.messages());
    }

    #[test]
    fn empty_recipe_reports_every_field() {
        let mut v = Validator::new();
        validate_recipe(&mut v, &RecipeInput::default());

        let messages = v.messages();
        for field in [
            "title",
            "instructions",
            "preparation_time",
            "cooking_time",
            "cuisine_name",
            "difficulty",
        ] {
            assert_eq!(messages[field], "must be provided", "{field}");
        }
    }

    #[test]
    fn long_title_and_unknown_difficulty_are_rejected() {
        let mut input = pancakes();
        input.title = "x".repeat(501);
        input.difficulty = "Expert".to_owned();

        let mut v = Validator::new();
        validate_recipe(&mut v, &input);

        let messages = v.messages();
        assert_eq!(messages["title"], "must not be more than 500 bytes long");
        assert_eq!(
            messages["difficulty"],
            "must be one of Easy, Medium, Advanced"
        );
    }

    #[test]
    fn ingredients_need_names_and_sane_quantities() {
        let mut input = pancakes();
        input.ingredients = Some(vec![Ingredient {
            name: "  ".to_owned(),
            quantity: -1.0,
            unit: "g".to_owned(),
        }]);

        let mut v = Validator::new();
        validate_recipe(&mut v, &input);
        assert_eq!(v.messages()["ingredients"], "every ingredient must have a name");
    }
}
