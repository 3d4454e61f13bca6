//! Home page data

use serde::Serialize;

use crate::icon::Icon;

/// Feature card in the "How RefRank Works" grid
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TAGLINE: &str = "Academic Reference Quality Scoring System";

pub const INTRO: &str = "Using machine learning to estimate the quality of academic references \
based on publication metadata — helping researchers select more reliable sources.";

pub static HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: Icon::BookOpen,
        title: "Metadata Analysis",
        description: "Analyzes publication year, citation count, publisher reputation, and document type",
    },
    Highlight {
        icon: Icon::BarChart,
        title: "Quality Scoring",
        description: "Generates a normalized quality score from 0-100 for each reference",
    },
    Highlight {
        icon: Icon::Sparkles,
        title: "ML-Powered",
        description: "Uses trained machine learning models for accurate quality estimation",
    },
];

pub static METADATA_FEATURES: [&str; 6] = [
    "Publication Year",
    "Citation Count",
    "Publisher Reputation",
    "Number of Authors",
    "Document Type",
    "Journal Impact Factor",
];

/// Example output shown in the code panel
pub const SAMPLE_OUTPUT: &str = r#"{
  "reference": {
    "title": "Deep Learning Methods...",
    "year": 2023,
    "citations": 142,
    "authors": 4,
    "type": "journal_article",
    "publisher": "IEEE"
  },
  "quality_score": 87.4,
  "confidence": 0.92
}"#;
