use regex::Regex;
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

pub fn trim_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

pub fn validate_username(u: &String) -> Result<(), ValidationError> {
    let regex = Regex::new(r"^[A-Za-z0-9_.]{1,30}$")
        .map_err(|_| ValidationError::new("invalid_username_pattern"))?;

    if !regex.is_match(u) {
        return Err(ValidationError::new("invalid_username")
            .with_message("Letters, numbers, '_' and '.'. 1 to 30 characters".into()));
    }
    Ok(())
}

pub fn validate_not_blank(value: &String) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("Cannot be blank".into()));
    }
    Ok(())
}
