//! Submitted form payloads and their validation.

use serde::Deserialize;

use crate::models::RatingUpdate;

pub const MAX_RATING: f64 = 10.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Enter a number, e.g. 7.5.")]
    NotANumber,
    #[error("Rating must be between 0 and 10.")]
    OutOfRange,
}

/// Field name to error, in field order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors(Vec<(&'static str, FieldError)>);

impl FormErrors {
    fn push(&mut self, field: &'static str, error: FieldError) {
        self.0.push((field, error));
    }

    pub fn get(&self, field: &str) -> Option<FieldError> {
        self.0.iter().find(|(name, _)| *name == field).map(|(_, err)| *err)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RatingForm {
    #[serde(default)]
    pub new_rating: String,
    #[serde(default)]
    pub new_review: String,
}

impl RatingForm {
    pub fn validate(&self) -> Result<RatingUpdate, FormErrors> {
        let mut errors = FormErrors::default();

        let rating = match parse_rating(&self.new_rating) {
            Ok(rating) => Some(rating),
            Err(err) => {
                errors.push("new_rating", err);
                None
            },
        };

        let review = self.new_review.trim();
        if review.is_empty() {
            errors.push("new_review", FieldError::Required);
        }

        match rating {
            Some(rating) if errors.is_empty() => {
                Ok(RatingUpdate { rating, review: review.to_string() })
            },
            _ => Err(errors),
        }
    }
}

fn parse_rating(raw: &str) -> Result<f64, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Required);
    }
    let rating: f64 = raw.parse().map_err(|_| FieldError::NotANumber)?;
    if !rating.is_finite() {
        return Err(FieldError::NotANumber);
    }
    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(FieldError::OutOfRange);
    }
    Ok(rating)
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TitleForm {
    #[serde(default)]
    pub new_title: String,
}

impl TitleForm {
    pub fn validate(&self) -> Result<String, FormErrors> {
        let title = self.new_title.trim();
        if title.is_empty() {
            let mut errors = FormErrors::default();
            errors.push("new_title", FieldError::Required);
            return Err(errors);
        }
        Ok(title.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating_form(rating: &str, review: &str) -> RatingForm {
        RatingForm { new_rating: rating.to_string(), new_review: review.to_string() }
    }

    #[test]
    fn valid_rating_and_review() {
        let update = rating_form(" 7.5 ", "Great film").validate().unwrap();
        assert_eq!(update, RatingUpdate { rating: 7.5, review: "Great film".to_string() });
    }

    #[test]
    fn rating_must_be_numeric() {
        let errors = rating_form("seven", "ok").validate().unwrap_err();
        assert_eq!(errors.get("new_rating"), Some(FieldError::NotANumber));
        assert_eq!(errors.get("new_review"), None);

        let errors = rating_form("NaN", "ok").validate().unwrap_err();
        assert_eq!(errors.get("new_rating"), Some(FieldError::NotANumber));
    }

    #[test]
    fn rating_must_be_in_range() {
        let errors = rating_form("10.5", "ok").validate().unwrap_err();
        assert_eq!(errors.get("new_rating"), Some(FieldError::OutOfRange));
        assert!(rating_form("0", "ok").validate().is_ok());
        assert!(rating_form("10", "ok").validate().is_ok());
    }

    #[test]
    fn both_fields_are_required() {
        let errors = rating_form("", "   ").validate().unwrap_err();
        assert_eq!(errors.get("new_rating"), Some(FieldError::Required));
        assert_eq!(errors.get("new_review"), Some(FieldError::Required));
    }

    #[test]
    fn title_is_trimmed_and_required() {
        let form = TitleForm { new_title: "  The Matrix ".to_string() };
        assert_eq!(form.validate().unwrap(), "The Matrix");

        let errors = TitleForm::default().validate().unwrap_err();
        assert_eq!(errors.get("new_title"), Some(FieldError::Required));
    }
}
