//! About page data

use serde::Serialize;

use crate::icon::Icon;

/// One stage of the described pipeline
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MethodologyStep {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Author-asserted share of a metadata feature in the final score
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureWeight {
    pub name: &'static str,
    pub description: &'static str,
    pub percentage: u8,
}

impl FeatureWeight {
    pub fn label(&self) -> String {
        format!("{}%", self.percentage)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechnicalSpec {
    pub title: &'static str,
    pub body: &'static str,
    pub tags: &'static [&'static str],
}

pub const SUBTITLE: &str =
    "Understanding our machine learning approach to academic reference quality scoring";

pub static OVERVIEW: [&str; 3] = [
    "RefRank is a university final project that addresses a common challenge in academic research: \
     evaluating the quality and reliability of references. While citation counts provide some signal, \
     they don't capture the full picture of a source's credibility.",
    "Our system uses machine learning to analyze multiple metadata features simultaneously, \
     producing a holistic quality score that helps researchers and students make more informed \
     decisions when selecting sources for their academic writing.",
    "The goal is not to replace human judgment, but to provide an additional data-driven \
     perspective that can surface potentially high-quality references that might otherwise be overlooked.",
];

pub static METHODOLOGY_STEPS: [MethodologyStep; 4] = [
    MethodologyStep {
        icon: Icon::Database,
        title: "Data Collection",
        description: "We gather publication metadata from academic databases including Crossref, \
                      Semantic Scholar, and institutional repositories. Each reference is enriched with \
                      citation counts, publication dates, author information, and publisher details.",
    },
    MethodologyStep {
        icon: Icon::Layers,
        title: "Feature Engineering",
        description: "Raw metadata is transformed into meaningful features: normalized citation rates, \
                      author h-index aggregations, publisher reputation scores, document type encodings, \
                      and temporal relevance weights.",
    },
    MethodologyStep {
        icon: Icon::Cpu,
        title: "Model Training",
        description: "We employ a gradient boosting ensemble (XGBoost) trained on expert-labeled reference \
                      quality data. The model learns complex relationships between metadata features and \
                      perceived quality.",
    },
    MethodologyStep {
        icon: Icon::Target,
        title: "Quality Scoring",
        description: "The trained model outputs a quality score (0-100) along with confidence intervals. \
                      Higher scores indicate references with stronger academic credibility and relevance.",
    },
];

pub static FEATURE_WEIGHTS: [FeatureWeight; 6] = [
    FeatureWeight {
        name: "Publication Year",
        description: "Recency weighting based on field-specific decay rates. More recent publications \
                      may score higher in fast-moving fields.",
        percentage: 15,
    },
    FeatureWeight {
        name: "Citation Count",
        description: "Normalized by publication age and field average. Highly-cited works indicate \
                      community validation.",
        percentage: 25,
    },
    FeatureWeight {
        name: "Publisher Reputation",
        description: "Encoded based on publisher impact factors, acceptance rates, and indexing in major \
                      databases.",
        percentage: 20,
    },
    FeatureWeight {
        name: "Number of Authors",
        description: "Collaborative works from multiple institutions often undergo more rigorous internal \
                      review.",
        percentage: 10,
    },
    FeatureWeight {
        name: "Document Type",
        description: "Journal articles, conference papers, books, and preprints are weighted differently \
                      based on peer-review rigor.",
        percentage: 15,
    },
    FeatureWeight {
        name: "Journal Impact Factor",
        description: "Where available, the venue's impact factor provides a proxy for publication quality \
                      standards.",
        percentage: 15,
    },
];

pub static TECHNICAL_SPECS: [TechnicalSpec; 3] = [
    TechnicalSpec {
        title: "Model Architecture",
        body: "XGBoost gradient boosting ensemble with 500 estimators, max depth of 6, and learning rate \
               of 0.1. Regularization parameters tuned via 5-fold cross-validation.",
        tags: &["Python 3.10", "XGBoost", "scikit-learn", "pandas"],
    },
    TechnicalSpec {
        title: "Training Data",
        body: "10,000+ academic references manually labeled by domain experts across multiple disciplines. \
               Labels based on peer assessment of source quality, relevance, and academic rigor. \
               Dataset split: 70% training, 15% validation, 15% test.",
        tags: &[],
    },
    TechnicalSpec {
        title: "Limitations",
        body: "The model works best for STEM publications where metadata is consistently available. \
               Humanities and social sciences may have less reliable metadata. The system should be used \
               as one input among many when evaluating reference quality, not as a definitive judgment.",
        tags: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(METHODOLOGY_STEPS.len(), 4);
        assert_eq!(FEATURE_WEIGHTS.len(), 6);
        assert_eq!(TECHNICAL_SPECS.len(), 3);
    }

    #[test]
    fn test_weights_sum_to_hundred() {
        let total: u32 = FEATURE_WEIGHTS.iter().map(|w| w.percentage as u32).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_weight_label() {
        assert_eq!(FEATURE_WEIGHTS[1].label(), "25%");
    }

    #[test]
    fn test_continuation_lines_collapse_to_single_spaces() {
        assert!(!METHODOLOGY_STEPS[0].description.contains("  "));
        assert!(!OVERVIEW[0].contains("  "));
    }
}
