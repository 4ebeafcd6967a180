//! Portfolio content model.
//!
//! All text shown on the page lives in one [`Portfolio`] value, loaded from
//! `portfolio.toml` next to the `.folio/` directory or taken from the
//! built-in sample.

use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::contact::is_valid_email;
use crate::error::{Error, Result};

/// Content file name, resolved relative to the portfolio directory
pub const PORTFOLIO_FILENAME: &str = "portfolio.toml";

/// Achievements shown per experience entry
pub const MAX_ACHIEVEMENTS_SHOWN: usize = 3;

/// Complete page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Call-to-action line under the Contact heading
    #[serde(default)]
    pub cta: String,

    pub personal: Personal,

    #[serde(default)]
    pub about: About,

    #[serde(default)]
    pub experience: Vec<Experience>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub skills: Skills,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    /// Short logo text, e.g. "AK"
    pub initials: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Experience {
    /// Achievements that make it onto the page
    pub fn shown_achievements(&self) -> &[String] {
        let end = self.achievements.len().min(MAX_ACHIEVEMENTS_SHOWN);
        &self.achievements[..end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default)]
    pub impact: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Project {
    /// Placeholder glyph for the project card (first letter of the title)
    pub fn monogram(&self) -> char {
        self.title.chars().next().unwrap_or('?')
    }
}

/// Skill category, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    Core,
    Frontend,
    Backend,
    Erp,
    Database,
    Tools,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Core,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Erp,
        SkillCategory::Database,
        SkillCategory::Tools,
        SkillCategory::Soft,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Core => "Core Languages",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Erp => "ERP & Automation",
            SkillCategory::Database => "Database",
            SkillCategory::Tools => "Tools",
            SkillCategory::Soft => "Soft Skills",
        }
    }
}

/// Skill tags per category. Missing categories render as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    #[serde(default)]
    pub core: Vec<String>,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub backend: Vec<String>,
    #[serde(default)]
    pub erp: Vec<String>,
    #[serde(default)]
    pub database: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

impl Skills {
    pub fn tags(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Core => &self.core,
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::Erp => &self.erp,
            SkillCategory::Database => &self.database,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Soft => &self.soft,
        }
    }
}

/// One of the three fixed "what I bring" highlights under the skills grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const SKILL_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Clean Code",
        desc: "Writing maintainable, readable, and efficient code",
    },
    Highlight {
        title: "User-Centric Design",
        desc: "Building interfaces that are intuitive and accessible",
    },
    Highlight {
        title: "Scalable Solutions",
        desc: "Architecting systems that grow with your needs",
    },
];

impl Portfolio {
    /// Parse and validate TOML content
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Serialize to the on-disk TOML format
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject content the page cannot render sensibly
    pub fn validate(&self) -> Result<()> {
        if self.personal.name.trim().is_empty() {
            return Err(Error::content("personal.name must not be empty"));
        }
        if self.personal.initials.trim().is_empty() {
            return Err(Error::content("personal.initials must not be empty"));
        }
        if !is_valid_email(&self.personal.email) {
            return Err(Error::content(format!(
                "personal.email is not a valid address: {:?}",
                self.personal.email
            )));
        }
        if let Some(project) = self.projects.iter().find(|p| p.title.trim().is_empty()) {
            return Err(Error::content(format!(
                "project with description {:?} has an empty title",
                project.description
            )));
        }
        Ok(())
    }

    /// Footer copyright line for `year`
    pub fn copyright(&self, year: i32) -> String {
        format!("\u{00A9} {} Made with \u{2665} by {}", year, self.personal.name)
    }

    /// Built-in content used when no `portfolio.toml` is present
    pub fn sample() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Portfolio {
            cta: "Have a project in mind or just want to say hi? My inbox is always open."
                .into(),
            personal: Personal {
                name: "Anamika K".into(),
                initials: "AK".into(),
                title: "Software Developer".into(),
                tagline: "Building reliable software for real business workflows".into(),
                email: "anamika@example.com".into(),
                location: "Bengaluru, India".into(),
                linkedin: "https://www.linkedin.com/in/anamika-k".into(),
                github: "https://github.com/anamika-k".into(),
            },
            about: About {
                bio: "I am a developer who enjoys turning messy business processes into \
                      dependable software. I work across the stack, from ERP automation to \
                      web front-ends, and care about code that the next person can read."
                    .into(),
                stats: vec![
                    Stat {
                        value: "3+".into(),
                        label: "Years Experience".into(),
                    },
                    Stat {
                        value: "15+".into(),
                        label: "Projects Delivered".into(),
                    },
                    Stat {
                        value: "5".into(),
                        label: "ERP Modules".into(),
                    },
                ],
                strengths: strings(&[
                    "Problem solving with a product mindset",
                    "Fast learner across new stacks",
                    "Automation of repetitive workflows",
                    "Clear communication with stakeholders",
                    "Ownership from design to deployment",
                ]),
            },
            experience: vec![
                Experience {
                    role: "Software Developer".into(),
                    company: "Northwind Systems".into(),
                    duration: "2023 - Present".into(),
                    description: "Building ERP customizations and internal web tools.".into(),
                    achievements: strings(&[
                        "Automated invoice reconciliation, saving 20 hours per month",
                        "Led migration of reporting to a single dashboard",
                        "Mentored two junior developers",
                        "Introduced code review guidelines",
                    ]),
                },
                Experience {
                    role: "Junior Developer".into(),
                    company: "Brightpath Labs".into(),
                    duration: "2021 - 2023".into(),
                    description: "Full-stack work on customer-facing web applications.".into(),
                    achievements: strings(&[
                        "Shipped a booking flow used by 10k monthly users",
                        "Cut page load time by 40%",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    title: "Inventory Tracker".into(),
                    description: "Real-time stock tracking with low-stock alerts.".into(),
                    stack: strings(&["Python", "PostgreSQL", "React"]),
                    impact: strings(&["Reduced stockouts by 30%"]),
                    highlights: strings(&["Barcode scanning", "Role-based access"]),
                },
                Project {
                    title: "Expense Workflow".into(),
                    description: "Approval workflow for employee expense claims.".into(),
                    stack: strings(&["Frappe", "JavaScript"]),
                    impact: strings(&["Approval time down from days to hours"]),
                    highlights: strings(&["Multi-level approvals", "Email notifications"]),
                },
                Project {
                    title: "Portfolio".into(),
                    description: "This site, for the browser and the terminal.".into(),
                    stack: strings(&["Rust", "Leptos", "Ratatui"]),
                    impact: Vec::new(),
                    highlights: strings(&["Scroll-aware navigation", "Animated sections"]),
                },
            ],
            skills: Skills {
                core: strings(&["Python", "JavaScript", "Rust", "SQL"]),
                frontend: strings(&["React", "Leptos", "Tailwind CSS"]),
                backend: strings(&["Node.js", "Django", "REST APIs"]),
                erp: strings(&["ERPNext", "Frappe", "Workflow automation"]),
                database: strings(&["PostgreSQL", "MariaDB", "Redis"]),
                tools: strings(&["Git", "Docker", "Linux"]),
                soft: strings(&["Communication", "Teamwork", "Ownership"]),
            },
        }
    }
}

/// Current calendar year from the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Load `portfolio.toml` from `dir`
pub fn load_portfolio(dir: &Path) -> Result<Portfolio> {
    let path = dir.join(PORTFOLIO_FILENAME);
    if !path.exists() {
        return Err(Error::content_not_found(path));
    }
    let content = std::fs::read_to_string(&path)?;
    Portfolio::from_toml_str(&content)
}

/// Load `portfolio.toml`, falling back to [`Portfolio::sample`] when the file
/// is missing or unreadable.
///
/// Content that parses but fails validation is still an error: rendering a
/// half-filled page silently would hide the mistake.
pub fn load_portfolio_or_sample(dir: &Path) -> Result<Portfolio> {
    match load_portfolio(dir) {
        Ok(portfolio) => {
            tracing::debug!("Loaded portfolio from {:?}", dir.join(PORTFOLIO_FILENAME));
            Ok(portfolio)
        }
        Err(Error::ContentNotFound { path }) => {
            tracing::debug!("No portfolio at {:?}, using sample content", path);
            Ok(Portfolio::sample())
        }
        Err(e @ (Error::Toml(_) | Error::Io(_))) => {
            tracing::warn!("Failed to read portfolio in {:?}: {}", dir, e);
            Ok(Portfolio::sample())
        }
        Err(e) => Err(e),
    }
}

/// Write the sample content to `dir/portfolio.toml` unless it already exists.
///
/// Returns `true` when a file was written.
pub fn init_portfolio_file(dir: &Path) -> Result<bool> {
    let path = dir.join(PORTFOLIO_FILENAME);
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(&path, Portfolio::sample().to_toml_string()?)?;
    tracing::info!("Wrote sample portfolio to {:?}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
        [personal]
        name = "Sam Lee"
        initials = "SL"
        email = "sam@example.com"
    "#;

    #[test]
    fn test_sample_is_valid() {
        assert!(Portfolio::sample().validate().is_ok());
    }

    #[test]
    fn test_minimal_content_uses_defaults() {
        let portfolio = Portfolio::from_toml_str(MINIMAL).unwrap();
        assert_eq!(portfolio.personal.name, "Sam Lee");
        assert!(portfolio.experience.is_empty());
        assert!(portfolio.skills.tags(SkillCategory::Erp).is_empty());
    }

    #[test]
    fn test_sample_survives_toml_round_trip() {
        let sample = Portfolio::sample();
        let text = sample.to_toml_string().unwrap();
        assert_eq!(Portfolio::from_toml_str(&text).unwrap(), sample);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let content = MINIMAL.replace("sam@example.com", "not-an-email");
        let err = Portfolio::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, Error::Content { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let content = MINIMAL.replace("Sam Lee", "  ");
        assert!(Portfolio::from_toml_str(&content).is_err());
    }

    #[test]
    fn test_shown_achievements_capped_at_three() {
        let sample = Portfolio::sample();
        assert_eq!(sample.experience[0].achievements.len(), 4);
        assert_eq!(sample.experience[0].shown_achievements().len(), 3);
        assert_eq!(sample.experience[1].shown_achievements().len(), 2);
    }

    #[test]
    fn test_skill_categories_in_display_order() {
        let labels: Vec<_> = SkillCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels[0], "Core Languages");
        assert_eq!(labels[3], "ERP & Automation");
        assert_eq!(labels[6], "Soft Skills");
    }

    #[test]
    fn test_copyright_line() {
        let line = Portfolio::sample().copyright(2026);
        assert_eq!(line, "\u{00A9} 2026 Made with \u{2665} by Anamika K");
        assert!(current_year() >= 2024);
    }

    #[test]
    fn test_project_monogram() {
        assert_eq!(Portfolio::sample().projects[0].monogram(), 'I');
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_portfolio(dir.path()).unwrap_err();
        assert!(matches!(err, Error::ContentNotFound { .. }));
    }

    #[test]
    fn test_load_or_sample_falls_back() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            load_portfolio_or_sample(dir.path()).unwrap(),
            Portfolio::sample()
        );

        std::fs::write(dir.path().join(PORTFOLIO_FILENAME), "[[broken").unwrap();
        assert_eq!(
            load_portfolio_or_sample(dir.path()).unwrap(),
            Portfolio::sample()
        );
    }

    #[test]
    fn test_load_or_sample_surfaces_invalid_content() {
        let dir = TempDir::new().unwrap();
        let content = MINIMAL.replace("sam@example.com", "nope");
        std::fs::write(dir.path().join(PORTFOLIO_FILENAME), content).unwrap();
        assert!(load_portfolio_or_sample(dir.path()).is_err());
    }

    #[test]
    fn test_init_portfolio_file_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        assert!(init_portfolio_file(dir.path()).unwrap());
        let loaded = load_portfolio(dir.path()).unwrap();
        assert_eq!(loaded, Portfolio::sample());

        std::fs::write(dir.path().join(PORTFOLIO_FILENAME), MINIMAL).unwrap();
        assert!(!init_portfolio_file(dir.path()).unwrap());
        assert_eq!(load_portfolio(dir.path()).unwrap().personal.initials, "SL");
    }
}
