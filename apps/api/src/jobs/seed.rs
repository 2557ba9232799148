//! Sample job listings inserted on first startup.

use anyhow::Result;
use mongodb::bson;
use tracing::info;
use uuid::Uuid;

use crate::db::Store;
use crate::models::job::JobDoc;

/// Seeds the jobs collection when it is empty. Runs once at startup so a
/// fresh deployment has something to browse.
pub async fn seed_if_empty(store: &Store) -> Result<()> {
    if store.count_jobs().await? > 0 {
        return Ok(());
    }

    let jobs = sample_jobs();
    store.insert_jobs(&jobs).await?;
    info!("Seeded {} job listings", jobs.len());
    Ok(())
}

/// The initial catalog shown before any real listings exist.
pub fn sample_jobs() -> Vec<JobDoc> {
    vec![
        listing(
            "Frontend Developer Intern",
            "TechCorp",
            "Bangalore, India",
            "Remote",
            "Build responsive web applications using React",
            &["React", "JavaScript", "HTML/CSS"],
            None,
            Some("₹15,000/month"),
            "internship",
        ),
        listing(
            "Data Science Intern",
            "DataMinds",
            "Mumbai, India",
            "Hybrid",
            "Work on machine learning models",
            &["Python", "ML", "Statistics"],
            None,
            Some("₹20,000/month"),
            "internship",
        ),
        listing(
            "UI/UX Designer",
            "DesignHub",
            "Delhi, India",
            "Full-time",
            "Design user interfaces for mobile and web",
            &["Figma", "Adobe XD", "User Research"],
            Some("₹6-8 LPA"),
            None,
            "job",
        ),
        listing(
            "Full Stack Developer",
            "StartupXYZ",
            "Pune, India",
            "Full-time",
            "Build scalable web applications",
            &["React", "Node.js", "MongoDB"],
            Some("₹8-12 LPA"),
            None,
            "job",
        ),
        listing(
            "Content Writing Intern",
            "MediaCo",
            "Remote",
            "Remote",
            "Create engaging content for blogs and social media",
            &["Writing", "SEO", "Research"],
            None,
            Some("₹10,000/month"),
            "internship",
        ),
        listing(
            "Marketing Intern",
            "GrowthLabs",
            "Hyderabad, India",
            "On-site",
            "Assist in digital marketing campaigns",
            &["Social Media", "Analytics", "Communication"],
            None,
            Some("₹12,000/month"),
            "internship",
        ),
        listing(
            "Product Manager",
            "InnovateTech",
            "Bangalore, India",
            "Full-time",
            "Drive product strategy and roadmap",
            &["Product Management", "Analytics", "Leadership"],
            Some("₹15-20 LPA"),
            None,
            "job",
        ),
        listing(
            "Mobile App Developer Intern",
            "AppBuilders",
            "Chennai, India",
            "Hybrid",
            "Develop iOS and Android applications",
            &["React Native", "Flutter", "Mobile Development"],
            None,
            Some("₹18,000/month"),
            "internship",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn listing(
    title: &str,
    company: &str,
    location: &str,
    job_type: &str,
    description: &str,
    requirements: &[&str],
    salary: Option<&str>,
    stipend: Option<&str>,
    category: &str,
) -> JobDoc {
    JobDoc {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type: job_type.to_string(),
        description: description.to_string(),
        requirements: requirements.iter().map(|r| r.to_string()).collect(),
        posted_date: bson::DateTime::now(),
        deadline: None,
        salary: salary.map(str::to_string),
        stipend: stipend.map(str::to_string),
        category: category.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_sample_catalog_has_eight_listings() {
        assert_eq!(sample_jobs().len(), 8);
    }

    #[test]
    fn test_sample_ids_are_unique() {
        let jobs = sample_jobs();
        let ids: HashSet<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_sample_categories_are_valid() {
        for job in sample_jobs() {
            assert!(
                job.category == "internship" || job.category == "job",
                "unexpected category {}",
                job.category
            );
        }
    }

    #[test]
    fn test_catalog_covers_both_categories() {
        let jobs = sample_jobs();
        assert!(jobs.iter().any(|j| j.category == "internship"));
        assert!(jobs.iter().any(|j| j.category == "job"));
    }

    #[test]
    fn test_internships_carry_stipend_jobs_carry_salary() {
        for job in sample_jobs() {
            if job.category == "internship" {
                assert!(job.stipend.is_some(), "{} missing stipend", job.title);
            } else {
                assert!(job.salary.is_some(), "{} missing salary", job.title);
            }
        }
    }

    #[test]
    fn test_every_listing_has_requirements() {
        for job in sample_jobs() {
            assert!(!job.requirements.is_empty(), "{} has no requirements", job.title);
        }
    }
}
