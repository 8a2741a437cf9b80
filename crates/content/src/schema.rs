//! The collections and fields the site expects on the content service.

use msru_directus::{CollectionDefinition, FieldDefinition, FieldType};

pub const PROJECTS: &str = "projects";
pub const ARTICLES: &str = "articles";
pub const INQUIRIES: &str = "inquiries";

/// Definitions for every required collection, in creation order.
pub fn site_collections() -> Vec<CollectionDefinition> {
    vec![projects(), articles(), inquiries()]
}

fn projects() -> CollectionDefinition {
    CollectionDefinition::new(PROJECTS)
        .sort_field("sort")
        .field(FieldDefinition::new("slug", FieldType::String, "input").required())
        .field(FieldDefinition::new("title", FieldType::String, "input").required())
        .field(
            FieldDefinition::new("status", FieldType::String, "select-dropdown")
                .choices(&["Published", "Draft"]),
        )
        .field(
            FieldDefinition::new("cover_image", FieldType::String, "image")
                .note("Stores URL for seeded data, or File ID"),
        )
        .field(FieldDefinition::new("category", FieldType::String, "input"))
        .field(FieldDefinition::new("tags", FieldType::Json, "tags"))
        .field(FieldDefinition::new(
            "content",
            FieldType::Text,
            "input-rich-text-html",
        ))
        .field(FieldDefinition::new(
            "publish_date",
            FieldType::DateTime,
            "datetime",
        ))
        .field(FieldDefinition::new(
            "is_featured",
            FieldType::Boolean,
            "boolean",
        ))
        .field(FieldDefinition::new("client", FieldType::String, "input"))
        .field(FieldDefinition::new("role", FieldType::String, "input"))
        .field(FieldDefinition::new("sort", FieldType::Integer, "input").hidden())
}

fn articles() -> CollectionDefinition {
    CollectionDefinition::new(ARTICLES)
        .field(FieldDefinition::new("slug", FieldType::String, "input").required())
        .field(FieldDefinition::new("title", FieldType::String, "input").required())
        .field(FieldDefinition::new("cover_image", FieldType::String, "image"))
        .field(FieldDefinition::new(
            "content",
            FieldType::Text,
            "input-rich-text-html",
        ))
        .field(
            FieldDefinition::new("type", FieldType::String, "select-dropdown")
                .choices(&["Design", "Tech"]),
        )
        .field(FieldDefinition::new("author", FieldType::String, "input"))
        // Journal listing sorts on this.
        .field(
            FieldDefinition::new("date_created", FieldType::Timestamp, "datetime")
                .special(&["date-created"])
                .readonly()
                .hidden(),
        )
}

fn inquiries() -> CollectionDefinition {
    CollectionDefinition::new(INQUIRIES)
        .field(FieldDefinition::new("name", FieldType::String, "input"))
        .field(FieldDefinition::new("contact_info", FieldType::String, "input"))
        .field(FieldDefinition::new(
            "type",
            FieldType::String,
            "select-dropdown",
        ))
        .field(FieldDefinition::new("message", FieldType::Text, "textarea"))
}
