//! Static resume template catalog. No persistence; the catalog ships with
//! the binary.

use axum::Json;
use serde::Serialize;

const PREVIEW_DOCUMENT: &str =
    "https://images.unsplash.com/photo-1586281380349-632531db7ed4?w=400";
const PREVIEW_DESK: &str = "https://images.unsplash.com/photo-1586281380117-5a60ae2050cc?w=400";
const PREVIEW_FOLDER: &str = "https://images.unsplash.com/photo-1586281380923-93a9c3e0a043?w=400";

/// A resume template the frontend can render a preview for.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub preview_url: String,
    pub category: String,
}

/// The fixed catalog offered to every account.
pub fn catalog() -> Vec<ResumeTemplate> {
    vec![
        template(
            "1",
            "Modern Professional",
            "Clean and modern design perfect for tech roles",
            PREVIEW_DOCUMENT,
            "professional",
        ),
        template(
            "2",
            "Creative Designer",
            "Eye-catching template for creative professionals",
            PREVIEW_DESK,
            "creative",
        ),
        template(
            "3",
            "Executive",
            "Elegant template for senior positions",
            PREVIEW_FOLDER,
            "executive",
        ),
        template(
            "4",
            "Minimalist",
            "Simple and clean for any industry",
            PREVIEW_DOCUMENT,
            "minimal",
        ),
        template(
            "5",
            "Student Friendly",
            "Perfect for students and fresh graduates",
            PREVIEW_DESK,
            "student",
        ),
        template(
            "6",
            "Tech Specialist",
            "Optimized for software engineers",
            PREVIEW_FOLDER,
            "tech",
        ),
        template(
            "7",
            "Corporate",
            "Traditional format for corporate roles",
            PREVIEW_DOCUMENT,
            "corporate",
        ),
        template(
            "8",
            "Startup Ready",
            "Dynamic template for startup culture",
            PREVIEW_DESK,
            "startup",
        ),
    ]
}

fn template(id: &str, name: &str, description: &str, preview_url: &str, category: &str) -> ResumeTemplate {
    ResumeTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        preview_url: preview_url.to_string(),
        category: category.to_string(),
    }
}

/// GET /api/templates
pub async fn handle_list_templates() -> Json<Vec<ResumeTemplate>> {
    Json(catalog())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_eight_templates() {
        assert_eq!(catalog().len(), 8);
    }

    #[test]
    fn test_template_ids_are_unique() {
        let templates = catalog();
        let ids: HashSet<_> = templates.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), templates.len());
    }

    #[test]
    fn test_templates_are_fully_populated() {
        for t in catalog() {
            assert!(!t.name.is_empty());
            assert!(!t.description.is_empty());
            assert!(t.preview_url.starts_with("https://"));
            assert!(!t.category.is_empty());
        }
    }
}
