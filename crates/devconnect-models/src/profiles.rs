//! Developer profile models and DTOs.
//!
//! A profile belongs to exactly one user. Clients submit skills as a
//! comma-separated string; the stored form is an ordered list.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, Utc};
use devconnect_core::serde::{deserialize_optional_string, deserialize_trimmed_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Owner fields embedded in a profile response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileOwner {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SocialLinks {
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl SocialLinks {
    /// Fields set in `update` replace ours; unset fields keep ours.
    pub fn merged(&self, update: &SocialLinks) -> SocialLinks {
        SocialLinks {
            youtube: update.youtube.clone().or_else(|| self.youtube.clone()),
            twitter: update.twitter.clone().or_else(|| self.twitter.clone()),
            facebook: update.facebook.clone().or_else(|| self.facebook.clone()),
            linkedin: update.linkedin.clone().or_else(|| self.linkedin.clone()),
            instagram: update.instagram.clone().or_else(|| self.instagram.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub user: ProfileOwner,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
    /// Newest entry first.
    pub education: Vec<Education>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create-or-update request for the caller's own profile.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpsertProfileDto {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "Developer")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub github_username: Option<String>,
    /// Comma-separated, e.g. `"rust, sql, docker"`.
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(custom(function = "validate_skills"))]
    #[schema(example = "rust, sql, docker")]
    pub skills: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub youtube: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub facebook: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub instagram: Option<String>,
}

/// Normalized profile fields handed to the store.
///
/// `None` means "not provided": an existing stored value is kept.
/// `status` and `skills` are always replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: SocialLinks,
}

impl ProfileFields {
    /// Applies `self` on top of previously stored fields.
    pub fn merged_onto(self, stored: &ProfileFields) -> ProfileFields {
        ProfileFields {
            company: self.company.or_else(|| stored.company.clone()),
            website: self.website.or_else(|| stored.website.clone()),
            location: self.location.or_else(|| stored.location.clone()),
            bio: self.bio.or_else(|| stored.bio.clone()),
            status: self.status,
            github_username: self
                .github_username
                .or_else(|| stored.github_username.clone()),
            skills: self.skills,
            social: stored.social.merged(&self.social),
        }
    }
}

impl From<UpsertProfileDto> for ProfileFields {
    fn from(dto: UpsertProfileDto) -> Self {
        Self {
            company: dto.company,
            website: dto.website,
            location: dto.location,
            bio: dto.bio,
            status: dto.status,
            github_username: dto.github_username,
            skills: parse_skills(&dto.skills),
            social: SocialLinks {
                youtube: dto.youtube,
                twitter: dto.twitter,
                facebook: dto.facebook,
                linkedin: dto.linkedin,
                instagram: dto.instagram,
            },
        }
    }
}

/// At least one non-blank entry, so `" , ,"` is rejected like an empty string.
fn validate_skills(skills: &str) -> Result<(), ValidationError> {
    if parse_skills(skills).is_empty() {
        return Err(ValidationError::new("skills").with_message(Cow::from("Skills is required")));
    }
    Ok(())
}

/// Splits a comma-separated skill list, trimming entries and dropping blanks.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct AddEducationDto {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "School is required"))]
    pub school: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Field of study is required"))]
    pub field_of_study: String,
    #[serde(default)]
    #[validate(required(message = "From date is required"))]
    #[schema(example = "2015-09-01")]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
}

/// Validated education entry ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEducation {
    pub school: String,
    pub degree: String,
    pub field_of_study: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl NewEducation {
    /// Returns `None` when the required `from` date is missing; callers
    /// run validation first so that case is already reported.
    pub fn from_dto(dto: AddEducationDto) -> Option<Self> {
        let from = dto.from?;
        // a current entry has no end date
        let to = if dto.current { None } else { dto.to };

        Some(Self {
            school: dto.school,
            degree: dto.degree,
            field_of_study: dto.field_of_study,
            from,
            to,
            current: dto.current,
            description: dto.description,
        })
    }

    pub fn into_education(self, id: Uuid) -> Education {
        Education {
            id,
            school: self.school,
            degree: self.degree,
            field_of_study: self.field_of_study,
            from: self.from,
            to: self.to,
            current: self.current,
            description: self.description,
        }
    }
}
