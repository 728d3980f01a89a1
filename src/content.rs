use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const OWNER: &str = "Lovi Adiva Alexandria";
pub const TAGLINE: &str =
    "Passionate creator turning ideas into intelligent, user‑centered digital experiences.";

pub const FALLBACK_IMAGE: &str = "/favicon.svg";
pub const DEFAULT_PROJECT_IMAGE: Option<&str> = Some("/images/projects/project-hero.png");
const CERTIFICATE_DIR: &str = "/images/certificates";
const SCREENSHOT_SERVICE: &str = "https://screenshot.rocks/api";
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "webp", "gif", "svg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "achievements", label: "Achievements" },
    NavItem { id: "contact", label: "Contact" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const ACHIEVEMENT_STATS: [Stat; 4] = [
    Stat { label: "Total Awards", value: "5+" },
    Stat { label: "Years Learning", value: "5+" },
    Stat { label: "Competitions Joined", value: "10+" },
    Stat { label: "Certifications", value: "12+" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatIcon {
    Trophy,
    Calendar,
    Building,
    Medal,
    Award,
}

impl Stat {
    pub fn icon(&self) -> StatIcon {
        let label = self.label.to_lowercase();
        if label.contains("award") {
            StatIcon::Trophy
        } else if label.contains("year") {
            StatIcon::Calendar
        } else if label.contains("industry") || label.contains("company") {
            StatIcon::Building
        } else if label.contains("cert") {
            StatIcon::Medal
        } else {
            StatIcon::Award
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Award,
    Experience,
}

impl AchievementCategory {
    pub const ALL: [Self; 2] = [Self::Award, Self::Experience];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Award => "Honor & Awards",
            Self::Experience => "Experience",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub org: &'static str,
    pub year: &'static str,
    pub badge: Option<&'static str>,
    pub category: AchievementCategory,
    pub description: Option<&'static str>,
    /// Certificate image file name, resolved with [`certificate_path`].
    pub certificate: Option<&'static str>,
}

pub const ACHIEVEMENTS: [Achievement; 8] = [
    Achievement {
        id: "award-1",
        title: "SATRIA: Smart AI & Tech Competition for a Rising",
        org: "BINUS University",
        year: "2025",
        badge: Some("Silver"),
        category: AchievementCategory::Award,
        description: None,
        certificate: None,
    },
    Achievement {
        id: "award-2",
        title: "LKS Dikmen Tingkat Jawa Timur Bidang Artificial Inteligence",
        org: "Kementrian Pendidikan Dasar dan Menengah",
        year: "2025",
        badge: Some("Bronze"),
        category: AchievementCategory::Award,
        description: None,
        certificate: None,
    },
    Achievement {
        id: "award-3",
        title: "Airlangga Youth Olympiad Bidang Bahasa Inggris",
        org: "BEM FKP Universitas Airlangga",
        year: "2025",
        badge: Some("Gold"),
        category: AchievementCategory::Award,
        description: None,
        certificate: None,
    },
    Achievement {
        id: "award-4",
        title: "Kompetisi Festival Olimpiade",
        org: "University ID Educational Platform",
        year: "2026",
        badge: Some("Gold"),
        category: AchievementCategory::Award,
        description: None,
        certificate: None,
    },
    Achievement {
        id: "award-5",
        title: "Kompetisi Festival Olimpiade",
        org: "University ID Educational Platform",
        year: "2025",
        badge: Some("Gold"),
        category: AchievementCategory::Award,
        description: None,
        certificate: None,
    },
    Achievement {
        id: "cert-1",
        title: "Bootcamp LKS Artificial Intelligence",
        org: "PT Universal Big Data",
        year: "2025",
        badge: Some("Certified"),
        category: AchievementCategory::Experience,
        description: None,
        certificate: None,
    },
    Achievement {
        id: "cert-2",
        title: "Data Analyst Intern",
        org: "Universitas Islam Negeri Maulana Malik Ibrahim Malang",
        year: "2025",
        badge: Some("Internship"),
        category: AchievementCategory::Experience,
        description: None,
        certificate: None,
    },
    Achievement {
        id: "cert-3",
        title: "Java Programming",
        org: "Dicoding Academy",
        year: "2024",
        badge: Some("Certified"),
        category: AchievementCategory::Experience,
        description: None,
        certificate: None,
    },
];

/// Certificate images shipped under [`CERTIFICATE_DIR`].
const CERTIFICATE_FILES: &[&str] = &[];

pub fn achievements_in(category: AchievementCategory) -> impl Iterator<Item = &'static Achievement> {
    ACHIEVEMENTS.iter().filter(move |a| a.category == category)
}

fn strip_image_extension(file: &str) -> &str {
    match file.rsplit_once('.') {
        Some((base, ext)) if IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => base,
        _ => file,
    }
}

/// Looks up a certificate image among the shipped files.
pub fn certificate_path(file: &str) -> Option<String> {
    find_certificate(CERTIFICATE_FILES, file)
}

/// Matches `file` against `known` names, ignoring case and the image
/// extension.
fn find_certificate(known: &[&str], file: &str) -> Option<String> {
    let wanted = file.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    let wanted_base = strip_image_extension(&wanted);
    known
        .iter()
        .find(|name| **name == wanted || strip_image_extension(name) == wanted_base)
        .map(|name| format!("{CERTIFICATE_DIR}/{name}"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
    ComingSoon,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Web,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub status: ProjectStatus,
    pub techs: &'static [&'static str],
    pub categories: &'static [ProjectCategory],
    pub demo: &'static str,
    pub repo: &'static str,
    pub image: Option<&'static str>,
    pub image_alt: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        id: "face-recognition",
        title: "AURA (Automated Unfound Recognition & Alert)",
        description: "An AI-powered face recognition program that utilizes pre-trained models to generate and compare face embeddings from input images and CCTV footage, assisting in identifying and locating missing persons in public areas.",
        status: ProjectStatus::Completed,
        techs: &["Python", "InsightFace", "MiniFASNet", "FFmpeg"],
        categories: &[ProjectCategory::Web],
        demo: "",
        repo: "",
        image: Some("/images/projects/project-1.png"),
        image_alt: "AURA Project",
    },
    Project {
        id: "attendence-app",
        title: "UIN Attendence App",
        description: "A web application for managing attendance of TAs, featuring meeting material uploads, documentation tracking, and responsive design for ease of use.",
        status: ProjectStatus::InProgress,
        techs: &["React", "Tailwind CSS", "JavaScript", "Next.js"],
        categories: &[ProjectCategory::Web],
        demo: "",
        repo: "",
        image: Some("/images/projects/project-2.jpg"),
        image_alt: "UIN Attendance App",
    },
    Project {
        id: "classifier-model",
        title: "Hate Speech Detector",
        description: "A web application for hate speech detection using a multinomial naive bayes classifier implemented from scratch in python.",
        status: ProjectStatus::Completed,
        techs: &["Python", "React", "Tailwind CSS"],
        categories: &[ProjectCategory::Web],
        demo: "nb-hate-speech-detector.vercel.app",
        repo: "",
        image: Some("/images/projects/project-3.png"),
        image_alt: "Hate Speech Detector",
    },
    Project {
        id: "portfolio",
        title: "Portfolio Website",
        description: "A personal portfolio website showcasing creative work with smooth animations and responsive design.",
        status: ProjectStatus::ComingSoon,
        techs: &["React", "Motion", "Tailwind CSS", "Vite"],
        categories: &[ProjectCategory::Web],
        demo: "laufie.vercel.app",
        repo: "",
        image: Some("/images/projects/project-4.png"),
        image_alt: "Portfolio Website",
    },
];

impl Project {
    pub fn demo_url(&self) -> Option<String> {
        Some(normalize_url(self.demo)).filter(|u| !u.is_empty())
    }

    pub fn repo_url(&self) -> Option<String> {
        Some(normalize_url(self.repo)).filter(|u| !u.is_empty())
    }

    /// Manual image, then a screenshot of the demo, then the shared default.
    pub fn cover_image(&self) -> Option<String> {
        let manual = self.image.map(str::trim).filter(|src| {
            !src.is_empty() && !src.contains("undefined") && !src.starts_with("data:") && *src != FALLBACK_IMAGE
        });
        manual
            .map(str::to_string)
            .or_else(|| self.demo_url().map(|demo| screenshot_url(&demo)))
            .or_else(|| DEFAULT_PROJECT_IMAGE.map(str::to_string))
    }

    fn looks_mobile(&self) -> bool {
        let haystack = format!("{} {}", self.title, self.techs.join(" ")).to_lowercase();
        haystack.contains("mobile") || haystack.contains("react native")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTab {
    #[default]
    All,
    Web,
    Mobile,
}

impl ProjectTab {
    pub const ALL: [Self; 3] = [Self::All, Self::Web, Self::Mobile];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Web => "Web Apps",
            Self::Mobile => "Mobile",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        let category = match self {
            Self::All => return true,
            Self::Web => ProjectCategory::Web,
            Self::Mobile => ProjectCategory::Mobile,
        };
        if !project.categories.is_empty() {
            return project.categories.contains(&category);
        }
        (category == ProjectCategory::Mobile) == project.looks_mobile()
    }

    pub fn filter(self) -> impl Iterator<Item = &'static Project> {
        PROJECTS.iter().filter(move |p| self.matches(p))
    }
}

pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    let bare = trimmed.strip_prefix("//").unwrap_or(trimmed);
    format!("https://{bare}")
}

/// Screenshot of a live demo, used when a project has no image of its own.
pub fn screenshot_url(demo: &str) -> String {
    let url = normalize_url(demo);
    if url.is_empty() {
        return url;
    }
    let encoded = form_urlencoded::byte_serialize(url.as_bytes()).collect::<String>();
    format!("{SCREENSHOT_SERVICE}?url={encoded}&width=1200&height=675")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [Skill],
}

pub const SKILL_GROUPS: [SkillGroup; 4] = [
    SkillGroup {
        title: "Data Science",
        icon: "backend",
        items: &[
            Skill { name: "Python", level: 90 },
            Skill { name: "Data Manipulation", level: 95 },
            Skill { name: "Data Visualization", level: 90 },
            Skill { name: "Machine Learning", level: 95 },
        ],
    },
    SkillGroup {
        title: "Frontend Development",
        icon: "frontend",
        items: &[
            Skill { name: "Core Web Fundamental", level: 90 },
            Skill { name: "React.js", level: 80 },
            Skill { name: "Tailwind CSS", level: 80 },
            Skill { name: "Responsive Web Design", level: 85 },
        ],
    },
    SkillGroup {
        title: "Graphic Design & UI/UX",
        icon: "design",
        items: &[
            Skill { name: "Canva", level: 98 },
            Skill { name: "Figma", level: 85 },
            Skill { name: "Picsart", level: 90 },
            Skill { name: "Creative Layout Design", level: 90 },
        ],
    },
    SkillGroup {
        title: "Core Soft Skills",
        icon: "cloud",
        items: &[
            Skill { name: "Critical Thinking", level: 93 },
            Skill { name: "Problem Solving", level: 90 },
            Skill { name: "Adaptability & Quick Learning", level: 98 },
            Skill { name: "Curiosity & Continuous Learning", level: 100 },
        ],
    },
];

pub const TECH_STACK: [&str; 10] = [
    "Microsoft Word",
    "Machine Learning",
    "Python",
    "Canva",
    "Figma",
    "HTML",
    "CSS",
    "JavaScript",
    "UI/UX",
    "Creativity",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub label: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIALS: [Social; 3] = [
    Social {
        label: "GitHub",
        url: "https://github.com/laufie",
        icon: "devicon-github-plain",
    },
    Social {
        label: "LinkedIn",
        url: "https://linkedin.com/in/loviadiva",
        icon: "devicon-linkedin-plain",
    },
    Social {
        label: "Instagram",
        url: "https://instagram.com/laufie",
        icon: "extra-instagram",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const CONTACT: Contact = Contact {
    location: "Malang, East Java, Indonesia",
    email: "hello@laufie.dev",
    phone: "+62 812 0000 0000",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
        assert_eq!(normalize_url(" http://a.dev "), "http://a.dev");
        assert_eq!(normalize_url("https://a.dev/x"), "https://a.dev/x");
        assert_eq!(normalize_url("//cdn.a.dev"), "https://cdn.a.dev");
        assert_eq!(normalize_url("laufie.vercel.app"), "https://laufie.vercel.app");
    }

    #[test]
    fn test_screenshot_url() {
        assert_eq!(screenshot_url(""), "");
        assert_eq!(
            screenshot_url("laufie.vercel.app"),
            "https://screenshot.rocks/api?url=https%3A%2F%2Flaufie.vercel.app&width=1200&height=675"
        );
    }

    #[test]
    fn test_cover_image_priority() {
        let by_id = |id: &str| PROJECTS.iter().find(|p| p.id == id).expect("project exists");
        assert_eq!(
            by_id("face-recognition").cover_image().as_deref(),
            Some("/images/projects/project-1.png")
        );
        let classifier = by_id("classifier-model");
        assert_eq!(classifier.cover_image().as_deref(), Some("/images/projects/project-3.png"));

        // no image, but a demo to screenshot
        let unpictured = Project {
            image: None,
            ..*classifier
        };
        assert_eq!(
            unpictured.cover_image(),
            Some(screenshot_url("nb-hate-speech-detector.vercel.app"))
        );
        // neither: shared default
        let bare = Project {
            image: Some("  "),
            ..*by_id("attendence-app")
        };
        assert_eq!(bare.cover_image().as_deref(), DEFAULT_PROJECT_IMAGE);

        let broken = Project {
            image: Some(FALLBACK_IMAGE),
            demo: "",
            ..*by_id("portfolio")
        };
        assert_eq!(broken.cover_image().as_deref(), DEFAULT_PROJECT_IMAGE);
    }

    #[test]
    fn test_project_tabs() {
        assert_eq!(ProjectTab::All.filter().count(), PROJECTS.len());
        assert_eq!(ProjectTab::Web.filter().count(), 4);
        assert_eq!(ProjectTab::Mobile.filter().count(), 0);

        let uncategorized = Project {
            categories: &[],
            techs: &["React Native", "Expo"],
            ..PROJECTS[0]
        };
        assert!(ProjectTab::Mobile.matches(&uncategorized));
        assert!(!ProjectTab::Web.matches(&uncategorized));
        let plain = Project {
            categories: &[],
            ..PROJECTS[0]
        };
        assert!(ProjectTab::Web.matches(&plain));
    }

    #[test]
    fn test_certificate_lookup() {
        let known = ["award.png", "bootcamp.jpg", "internship.webp"];
        let find = |file| find_certificate(&known, file);
        assert_eq!(find("award.png").as_deref(), Some("/images/certificates/award.png"));
        assert_eq!(find("AWARD").as_deref(), Some("/images/certificates/award.png"));
        assert_eq!(find(" Bootcamp.JPG ").as_deref(), Some("/images/certificates/bootcamp.jpg"));
        assert_eq!(find("internship.jpeg").as_deref(), Some("/images/certificates/internship.webp"));
        assert_eq!(find("internship.pdf"), None);
        assert_eq!(find("missing.png"), None);
        assert_eq!(find(""), None);

        // nothing is shipped, so every modal shows the placeholder
        for a in ACHIEVEMENTS.iter() {
            assert_eq!(certificate_path(a.certificate.unwrap_or_default()), None, "{}", a.id);
        }
    }

    #[test]
    fn test_achievement_tabs_and_stats() {
        assert_eq!(achievements_in(AchievementCategory::Award).count(), 5);
        assert_eq!(achievements_in(AchievementCategory::Experience).count(), 3);
        let icons = ACHIEVEMENT_STATS.iter().map(|s| s.icon()).collect::<Vec<_>>();
        assert_eq!(
            icons,
            vec![StatIcon::Trophy, StatIcon::Calendar, StatIcon::Award, StatIcon::Medal]
        );
    }

    #[test]
    fn test_tab_storage_format() {
        assert_eq!(serde_json::to_string(&ProjectTab::Mobile).unwrap(), "\"mobile\"");
        let tab: ProjectTab = serde_json::from_str("\"web\"").unwrap();
        assert_eq!(tab, ProjectTab::Web);
        assert_eq!(ProjectTab::default(), ProjectTab::All);
    }

    #[test]
    fn test_nav_ids_unique() {
        let mut ids = NAV_ITEMS.iter().map(|n| n.id).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), NAV_ITEMS.len());
        assert_eq!(NAV_ITEMS[0].href(), "#home");
    }
}
