//! Team page data

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    /// Initial shown in the avatar circle
    pub avatar: &'static str,
    /// Stylesheet class for the card header gradient
    pub accent: &'static str,
    pub skills: [&'static str; 4],
    pub contributions: [&'static str; 4],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProjectFact {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SUBTITLE: &str =
    "The people behind RefRank — combining expertise in machine learning and data engineering";

pub static TEAM: [TeamMember; 2] = [
    TeamMember {
        name: "Mustafa",
        role: "Machine Learning Lead",
        bio: "Passionate about applying machine learning to real-world academic challenges. Focused on \
              model development, feature engineering, and optimization for the RefRank scoring system.",
        avatar: "M",
        accent: "accent-teal",
        skills: ["Machine Learning", "Python", "Data Analysis", "XGBoost"],
        contributions: [
            "Designed and implemented the ML pipeline",
            "Feature engineering and selection",
            "Model training and hyperparameter tuning",
            "Performance evaluation and validation",
        ],
    },
    TeamMember {
        name: "Salim",
        role: "Data & Systems Lead",
        bio: "Dedicated to building robust data systems and ensuring reliable data quality. Responsible \
              for data collection, preprocessing, and system architecture for RefRank.",
        avatar: "S",
        accent: "accent-blue",
        skills: ["Data Engineering", "API Development", "Database Design", "Python"],
        contributions: [
            "Data collection and preprocessing pipeline",
            "Database architecture and management",
            "API integration with academic databases",
            "Documentation and testing",
        ],
    },
];

pub const PROJECT_SUMMARY: &str = "RefRank was developed as part of our university capstone project. \
This project represents the culmination of our studies in computer science and machine learning, \
applying theoretical knowledge to solve a practical problem in academic research.";

pub static PROJECT_FACTS: [ProjectFact; 2] = [
    ProjectFact { value: "2024-2025", label: "Academic Year" },
    ProjectFact { value: "Computer Science", label: "Department" },
];

pub const ACKNOWLEDGMENTS: &str = "We would like to thank our academic advisors and professors for \
their guidance throughout this project. Special thanks to the open-source community for providing the \
tools and libraries that made RefRank possible, including scikit-learn, XGBoost, and the academic \
metadata providers whose APIs we utilized.";
