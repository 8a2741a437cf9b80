//! Normalized content shapes handed to pages.
//!
//! Every value here has already been through [`crate::normalize`]:
//! categories are display labels, tags are ordered string lists, dates are
//! `YYYY-MM-DD` strings and image fields are fetchable URLs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::ItemId;

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// Publication state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Published,
    Draft,
    Archived,
}

impl ProjectStatus {
    /// Parse a status value as stored by the content service.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "Published" => Ok(Self::Published),
            "Draft" => Ok(Self::Draft),
            "Archived" => Ok(Self::Archived),
            other => Err(CoreError::Validation(format!(
                "Invalid project status '{other}'. Must be one of: Published, Draft, Archived"
            ))),
        }
    }

    /// Value stored by the content service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ItemId,
    pub slug: String,
    pub title: String,
    pub status: ProjectStatus,
    pub cover_image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content: String,
    /// `YYYY-MM-DD`, or empty when the record carries no date.
    pub publish_date: String,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

// ---------------------------------------------------------------------------
// Article
// ---------------------------------------------------------------------------

/// Journal article category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArticleType {
    Design,
    Tech,
    News,
}

impl ArticleType {
    /// Parse an article type value as stored by the content service.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "Design" => Ok(Self::Design),
            "Tech" => Ok(Self::Tech),
            "News" => Ok(Self::News),
            other => Err(CoreError::Validation(format!(
                "Invalid article type '{other}'. Must be one of: Design, Tech, News"
            ))),
        }
    }
}

/// A journal article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ItemId,
    pub slug: String,
    pub title: String,
    pub cover_image: String,
    pub content: String,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub author: String,
    pub publish_date: String,
}

// ---------------------------------------------------------------------------
// Inquiry
// ---------------------------------------------------------------------------

/// What a contact-form inquiry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InquiryType {
    Business,
    Career,
    Other,
}

/// Contact-form submission. Write-only: created remotely, never read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct InquiryForm {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 320,
        message = "contact_info must be 1-320 characters"
    ))]
    pub contact_info: String,
    #[serde(rename = "type")]
    pub inquiry_type: InquiryType,
    #[validate(length(min = 1, max = 5000, message = "message must be 1-5000 characters"))]
    pub message: String,
}

impl InquiryForm {
    /// Check field bounds before the form is sent anywhere.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        if self.name.trim().is_empty() || self.message.trim().is_empty() {
            return Err(CoreError::Validation(
                "name and message must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Site config
// ---------------------------------------------------------------------------

/// Site-wide display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site_name: String,
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "MSRU Studio".to_string(),
            contact_email: "hello@msru.cn".to_string(),
        }
    }
}
