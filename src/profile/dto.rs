use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use super::repo_types::{MeasurementSystem, Profile};
use crate::error::ApiError;

pub const MAX_NAME_CHARS: usize = 100;

pub(crate) fn is_valid_name(name: &str) -> bool {
    lazy_static! {
        static ref NAME_RE: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();
    }
    name.len() <= MAX_NAME_CHARS && NAME_RE.is_match(name)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub measurement_system: MeasurementSystem,
}

impl CreateProfileRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_name(&self.name)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchProfileRequest {
    pub name: Option<String>,
    pub measurement_system: Option<MeasurementSystem>,
}

impl PatchProfileRequest {
    pub fn apply(self, current: Profile) -> Result<Profile, ApiError> {
        let merged = Profile {
            name: self.name.unwrap_or(current.name),
            measurement_system: self.measurement_system.unwrap_or(current.measurement_system),
        };
        validate_name(&merged.name)?;
        Ok(merged)
    }
}

fn validate_name(name: &str) -> Result<(), ApiError> {
    if !is_valid_name(name) {
        return Err(ApiError::validation(
            "name",
            format!("name must be 1 to {MAX_NAME_CHARS} alphabetic characters"),
        ));
    }
    Ok(())
}
