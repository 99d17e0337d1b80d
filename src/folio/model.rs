use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt;

/// The four well-known documents managed by the backend.
///
/// Each variant maps to one JSON file in the data directory. Documents are
/// opaque `serde_json::Value`s; the only schema the store knows about is the
/// per-document default returned when a file is missing or corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocName {
    Profile,
    Skills,
    Projects,
    Settings,
}

impl DocName {
    pub fn filename(&self) -> &'static str {
        match self {
            DocName::Profile => "profile.json",
            DocName::Skills => "skills.json",
            DocName::Projects => "projects.json",
            DocName::Settings => "settings.json",
        }
    }

    /// Default document substituted when the backing file is missing or
    /// unparseable. Lists default to empty; profile and settings carry a
    /// full seed object so a fresh install renders a complete site.
    pub fn default_value(&self) -> Value {
        match self {
            DocName::Skills | DocName::Projects => Value::Array(Vec::new()),
            DocName::Profile => DEFAULT_PROFILE.clone(),
            DocName::Settings => DEFAULT_SETTINGS.clone(),
        }
    }
}

impl fmt::Display for DocName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename())
    }
}

static DEFAULT_PROFILE: Lazy<Value> = Lazy::new(|| {
    json!({
        "personalInfo": {
            "fullName": "Md Tanvir Ahmmed Rasel",
            "title": "AI, ML and IoT Specialist",
            "tagline": "AI, ML and IoT Specialist",
            "bio": "I am an experienced AI and IoT expert with a strong background in software development, machine learning, and embedded systems. With a passion for automation, computer vision, and large language models, I specialize in developing cutting-edge solutions that bridge artificial intelligence with real-world applications. Currently working as an Associate Developer (AI) at iBOS Limited, a concern of Akij Group, I focus on AI-driven software development, automation, and SaaS-based solutions.",
            "bioParagraph2": "My interest in research extends to RPA (Robotic Process Automation), Large Language Models (LLM), and Forecasting.",
            "profileImage": "assets/images/profile.png"
        },
        "contactInfo": {
            "location": "Dhaka, Bangladesh",
            "email": "tanvirrcse@gmail.com",
            "website": "http://www.website.com",
            "phone": ""
        },
        "socialLinks": {
            "github": "https://github.com/yourusername",
            "linkedin": "https://linkedin.com/in/yourusername",
            "googleplus": "",
            "twitter": "",
            "hackerNews": ""
        },
        "siteInfo": {
            "pageTitle": "Tanvir's Portfolio | ML | AI | IoT",
            "metaDescription": "Responsive HTML5 Website landing Page for Developers",
            "metaAuthor": "Tanvir",
            "copyrightText": "Designed with <i class=\"fa fa-heart\"></i> by <a href=\"#\">Tanvir</a>",
            "ctaButtonText": "Contact Me",
            "ctaButtonLink": "#"
        },
        "sections": {
            "aboutTitle": "About Me",
            "projectsTitle": "Latest Projects",
            "githubTitle": "My GitHub",
            "skillsTitle": "Skills",
            "showMoreButtonText": "Show More",
            "showLessButtonText": "Show Less"
        }
    })
});

static DEFAULT_SETTINGS: Lazy<Value> = Lazy::new(|| {
    json!({
        "site_title": "My Portfolio",
        "site_description": "Professional Portfolio Website",
        "author_name": "Your Name",
        "contact_email": "your.email@example.com",
        "social_links": {
            "github": "",
            "linkedin": "",
            "twitter": "",
            "facebook": ""
        },
        "analytics": {
            "google_analytics_id": "",
            "enable_analytics": false
        },
        "seo": {
            "meta_keywords": "portfolio, developer, web development",
            "meta_description": "Professional portfolio showcasing my work and skills"
        }
    })
});

/// Aggregate numbers shown on the admin dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_skills: usize,
    pub last_updated: String,
    pub project_types: BTreeMap<String, usize>,
}
