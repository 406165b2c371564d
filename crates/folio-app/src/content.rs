#![forbid(unsafe_code)]

//! Resume content. Everything the viewer shows lives here as typed
//! constants, so the presentation layers stay free of copy.

use folio_render::cell::PackedRgba;

use crate::theme;

/// Identity and summary shown in the hero and contact sections.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub summary: &'static str,
    pub strengths: &'static [&'static str],
}

pub const PROFILE: Profile = Profile {
    name: "Prajapati Jayesh R.",
    role: "Engineering Student & Aspiring Data Analyst",
    location: "Vadodara, India",
    email: "jayeshprajapati2701@gmail.com",
    phone: "+91 9104058002",
    github: "https://github.com/jayeshprajapati2701-coder",
    linkedin: "https://www.linkedin.com/in/jayesh-prajapati-6185653a7",
    summary: "Engineering student with strong foundations in data analytics and \
        software development. Skilled in Python, Pandas, NumPy, SQL, and data \
        visualization, with hands-on experience building analytical pipelines and \
        working on real-world time-series forecasting projects. Seeking a Data \
        Analytics Intern role to apply quantitative, technical, and problem-solving \
        skills to meaningful business challenges.",
    strengths: &[
        "Strong analytical reasoning and ability to break down complex datasets.",
        "Solid understanding of Python libraries such as Pandas, NumPy, and Matplotlib.",
        "Hands-on experience with data cleaning, EDA, and time-series trend analysis.",
        "Ability to document workflows and interpret insights clearly.",
    ],
};

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        category: "Data Analytics",
        skills: &["Python", "Pandas", "NumPy", "Matplotlib", "Seaborn", "Excel"],
    },
    SkillCategory {
        category: "Databases",
        skills: &["SQL", "MySQL"],
    },
    SkillCategory {
        category: "Software Dev",
        skills: &["Python", "Java", "C/C++"],
    },
    SkillCategory {
        category: "Tools",
        skills: &["Jupyter Notebook", "Git", "VS Code", "Android Studio"],
    },
];

/// Self-rated proficiency series for the about-section chart.
#[derive(Debug, Clone, Copy)]
pub struct SkillLevel {
    pub name: &'static str,
    pub level: u8,
    pub color: PackedRgba,
}

pub const SKILL_LEVELS: [SkillLevel; 5] = [
    SkillLevel {
        name: "Python",
        level: 95,
        color: theme::SKY_500,
    },
    SkillLevel {
        name: "SQL",
        level: 85,
        color: theme::SKY_600,
    },
    SkillLevel {
        name: "Pandas/NumPy",
        level: 90,
        color: theme::SKY_700,
    },
    SkillLevel {
        name: "Matplotlib",
        level: 88,
        color: theme::SKY_900,
    },
    SkillLevel {
        name: "Java/C++",
        level: 80,
        color: theme::SKY_500,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tech: &'static [&'static str],
    pub points: &'static [&'static str],
}

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "TSLA Stock Time-Series Forecasting",
        subtitle: "Data Analytics Project Experience",
        tech: &["Python", "Pandas", "NumPy", "Matplotlib"],
        points: &[
            "Performed full data preprocessing, cleaning, and feature extraction on real TSLA stock datasets.",
            "Conducted exploratory data analysis (EDA) to identify patterns, seasonality, and anomaly behaviors.",
            "Built forecasting models and evaluated performance metrics to understand market trend movement.",
            "Designed visual reporting outputs to communicate insights clearly.",
        ],
    },
    Project {
        title: "Local Network Chat Application",
        subtitle: "Prototype for Cross-Platform",
        tech: &["Python", "Sockets", "Local Database"],
        points: &[
            "Built a LAN/Wi-Fi chat system using socket programming for fast device-to-device messaging.",
            "Implemented message storage using a lightweight local database for offline persistence.",
            "Designed modular architecture for extending future features such as background services and secure communication.",
        ],
    },
    Project {
        title: "Modular App Development Prototype",
        subtitle: "Cluster Ecosystem Concept",
        tech: &["Python", "Java", "Local Storage"],
        points: &[
            "Designed early modular structures for multi-component applications.",
            "Focused on local-device storage, interoperability, and system-level efficiency.",
            "Configured clean UI interactions and ensured cross-module compatibility during testing.",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub field: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub years: &'static str,
    pub graduation: &'static str,
}

pub const EDUCATION: Education = Education {
    degree: "Bachelor of Technology (B.Tech)",
    field: "Computer Engineering",
    institution: "Sigma Institute of Technology",
    location: "Vadodara",
    years: "2022 - 2026",
    graduation: "Expected Graduation: 2026",
};

pub const COURSEWORK: [&str; 8] = [
    "Data Structures & Algorithms",
    "Database Management Systems",
    "Operating Systems",
    "Computer Networks",
    "Statistics for Data Science",
    "Python Programming",
    "Machine Learning Basics",
    "Data Visualization",
];

pub const SELF_LEARNING: [&str; 3] = [
    "Independently studied Python for data analytics through online platforms and documentation.",
    "Regularly practice EDA, data cleaning, and visualization on real datasets.",
    "Continuously improving software development and data analysis skills through personal projects.",
];

pub const INTERESTS: [&str; 4] = [
    "Data Analytics",
    "System Architecture",
    "Machine Learning",
    "Product Design",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_fit_the_chart_scale() {
        for skill in SKILL_LEVELS {
            assert!(skill.level <= 100, "{} over scale", skill.name);
        }
    }

    #[test]
    fn every_project_has_substance() {
        for project in PROJECTS {
            assert!(!project.points.is_empty());
            assert!(!project.tech.is_empty());
        }
    }

    #[test]
    fn email_looks_like_an_email() {
        assert!(PROFILE.email.contains('@'));
    }
}
