/// Required-field validation for editor dialog submissions.
///
/// These checks run at the editor layer before any store mutator is
/// invoked; a failure means no state change anywhere.
use thiserror::Error;

use crate::mutation::types::*;

use super::model::HeroContent;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{record} is missing required field `{field}`")]
pub struct ValidationError {
    pub record: &'static str,
    pub field: &'static str,
}

fn require(record: &'static str, field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError { record, field })
    } else {
        Ok(())
    }
}

pub fn validate_hero(hero: &HeroContent) -> Result<(), ValidationError> {
    require("hero", "title", &hero.title)
}

pub fn validate_event(input: &EventInput) -> Result<(), ValidationError> {
    require("event", "title", &input.title)?;
    require("event", "date", &input.date)
}

pub fn validate_category(input: &CategoryInput) -> Result<(), ValidationError> {
    require("category", "name", &input.name)?;
    require("category", "slug", &input.slug)
}

pub fn validate_gallery_image(input: &GalleryImageInput) -> Result<(), ValidationError> {
    require("gallery image", "image", &input.image)
}

pub fn validate_team_member(input: &TeamMemberInput) -> Result<(), ValidationError> {
    require("team member", "name", &input.name)?;
    require("team member", "role", &input.role)
}

pub fn validate_bottle_package(input: &BottlePackageInput) -> Result<(), ValidationError> {
    require("bottle package", "name", &input.name)?;
    require("bottle package", "price", &input.price)
}

pub fn validate_link(input: &LinkInput) -> Result<(), ValidationError> {
    require("link", "name", &input.name)?;
    require("link", "path", &input.path)
}

pub fn validate_social_link(input: &SocialLinkInput) -> Result<(), ValidationError> {
    require("social link", "platform", &input.platform)?;
    require("social link", "url", &input.url)
}
