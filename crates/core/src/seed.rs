//! Baseline content inserted into empty collections.
//!
//! Seed records carry no identifier; the content service assigns one on
//! insert. Cover images are absolute URLs, which the asset resolver passes
//! through unchanged.

use serde::Serialize;

use crate::models::{ArticleType, ProjectStatus};

/// A project row to insert into an empty `projects` collection.
#[derive(Debug, Clone, Serialize)]
pub struct SeedProject {
    pub title: &'static str,
    pub slug: &'static str,
    pub status: ProjectStatus,
    pub cover_image: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub content: &'static str,
    pub publish_date: &'static str,
    pub is_featured: bool,
    pub client: &'static str,
    pub role: &'static str,
}

/// An article row to insert into an empty `articles` collection.
#[derive(Debug, Clone, Serialize)]
pub struct SeedArticle {
    pub slug: &'static str,
    pub title: &'static str,
    pub cover_image: &'static str,
    pub content: &'static str,
    #[serde(rename = "type")]
    pub article_type: ArticleType,
    pub author: &'static str,
}

/// The four showcase projects.
pub fn baseline_projects() -> Vec<SeedProject> {
    vec![
        SeedProject {
            title: "Kintsugi Digital",
            slug: "kintsugi-digital",
            status: ProjectStatus::Published,
            cover_image: "https://picsum.photos/800/600?random=1",
            category: "Brand Identity",
            tags: &["WebGL", "Branding", "Oriental"],
            content: "An exploration of digital repair and golden joinery in web design.",
            publish_date: "2023-10-15",
            is_featured: true,
            client: "Kyoto Crafts",
            role: "Lead Designer",
        },
        SeedProject {
            title: "Neon Dynasty",
            slug: "neon-dynasty",
            status: ProjectStatus::Published,
            cover_image: "https://picsum.photos/800/600?random=2",
            category: "UI/UX Design",
            tags: &["Cyberpunk", "Dashboard", "React"],
            content: "A futuristic dashboard for a smart city management system.",
            publish_date: "2023-11-20",
            is_featured: true,
            client: "Neo-Tokyo Gov",
            role: "Frontend Dev",
        },
        SeedProject {
            title: "Silk Road Commerce",
            slug: "silk-road",
            status: ProjectStatus::Published,
            cover_image: "https://picsum.photos/800/600?random=3",
            category: "Development",
            tags: &["E-commerce", "Next.js", "Headless"],
            content: "High-performance headless commerce solution.",
            publish_date: "2023-09-01",
            is_featured: false,
            client: "Silk Co.",
            role: "Full Stack",
        },
        SeedProject {
            title: "Zen Garden VR",
            slug: "zen-garden",
            status: ProjectStatus::Published,
            cover_image: "https://picsum.photos/800/600?random=4",
            category: "Interaction",
            tags: &["Three.js", "VR", "Meditation"],
            content: "Immersive meditation experience in the browser.",
            publish_date: "2024-01-10",
            is_featured: true,
            client: "Mindful Tech",
            role: "Creative Developer",
        },
    ]
}

/// The two launch journal articles.
pub fn baseline_articles() -> Vec<SeedArticle> {
    vec![
        SeedArticle {
            slug: "philosophy-of-void",
            title: "The Philosophy of Void in UI Design",
            cover_image: "https://picsum.photos/800/400?random=5",
            content: "How empty space creates meaning in digital interfaces...",
            article_type: ArticleType::Design,
            author: "Alex Chen",
        },
        SeedArticle {
            slug: "server-components-deep-dive",
            title: "Optimizing ISR with Next.js",
            cover_image: "https://picsum.photos/800/400?random=6",
            content: "Technical deep dive into Incremental Static Regeneration...",
            article_type: ArticleType::Tech,
            author: "Sarah Wu",
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_slugs_are_unique() {
        let slugs: HashSet<_> = baseline_projects().iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), baseline_projects().len());
    }

    #[test]
    fn seed_payload_has_no_id_and_keeps_tag_list() {
        let json = serde_json::to_value(&baseline_projects()[0]).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(
            json["tags"],
            serde_json::json!(["WebGL", "Branding", "Oriental"])
        );
        assert_eq!(json["status"], "Published");
    }

    #[test]
    fn three_projects_are_featured() {
        let featured = baseline_projects()
            .into_iter()
            .filter(|p| p.is_featured)
            .count();
        assert_eq!(featured, 3);
    }

    #[test]
    fn article_seed_uses_type_key() {
        let json = serde_json::to_value(&baseline_articles()[1]).unwrap();
        assert_eq!(json["type"], "Tech");
        assert!(json.get("article_type").is_none());
    }
}
