//! Results page data
//!
//! Every series here feeds a chart or card as-is. None of it is derived.

use serde::Serialize;

use crate::icon::Icon;
use crate::score::ScoreBucket;

/// Headline metric card
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceMetric {
    pub name: &'static str,
    pub value: f64,
    pub icon: Icon,
    /// Stylesheet accent for the icon
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: u32,
}

/// Histogram column of predicted scores
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreBucketCount {
    pub range: &'static str,
    pub count: u32,
    pub fill: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrainingEpochPoint {
    pub epoch: u32,
    pub train: f64,
    pub val: f64,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RadarAxis {
    pub metric: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SamplePrediction {
    pub title: &'static str,
    pub year: u16,
    pub citations: u32,
    pub doc_type: &'static str,
    pub publisher: &'static str,
    pub score: f64,
    pub confidence: f64,
}

impl SamplePrediction {
    pub fn bucket(&self) -> ScoreBucket {
        ScoreBucket::for_score(self.score)
    }

    /// Confidence as a whole percent, for the bar width and its caption
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// Big number in the summary band
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SummaryStat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SUBTITLE: &str =
    "Performance metrics, visualizations, and sample predictions from our trained model";

pub static PERFORMANCE_METRICS: [PerformanceMetric; 4] = [
    PerformanceMetric { name: "Accuracy", value: 87.3, icon: Icon::Target, accent: "accent-teal" },
    PerformanceMetric { name: "Precision", value: 85.1, icon: Icon::CheckCircle, accent: "accent-blue" },
    PerformanceMetric { name: "Recall", value: 82.9, icon: Icon::TrendingUp, accent: "accent-purple" },
    PerformanceMetric { name: "F1 Score", value: 84.0, icon: Icon::Award, accent: "accent-orange" },
];

/// Upper bound of the feature importance axis
pub const FEATURE_IMPORTANCE_MAX: u32 = 30;

pub static FEATURE_IMPORTANCE: [FeatureImportance; 6] = [
    FeatureImportance { feature: "Citations", importance: 25 },
    FeatureImportance { feature: "Publisher", importance: 20 },
    FeatureImportance { feature: "Impact Factor", importance: 15 },
    FeatureImportance { feature: "Pub Year", importance: 15 },
    FeatureImportance { feature: "Doc Type", importance: 15 },
    FeatureImportance { feature: "Authors", importance: 10 },
];

pub static SCORE_DISTRIBUTION: [ScoreBucketCount; 5] = [
    ScoreBucketCount { range: "0-20", count: 45, fill: "#ef4444" },
    ScoreBucketCount { range: "21-40", count: 120, fill: "#f97316" },
    ScoreBucketCount { range: "41-60", count: 280, fill: "#eab308" },
    ScoreBucketCount { range: "61-80", count: 350, fill: "#22c55e" },
    ScoreBucketCount { range: "81-100", count: 205, fill: "#14b8a6" },
];

/// Y-axis range of the accuracy curve
pub const TRAINING_CURVE_DOMAIN: (f64, f64) = (0.5, 1.0);

pub static TRAINING_CURVE: [TrainingEpochPoint; 10] = [
    TrainingEpochPoint { epoch: 1, train: 0.65, val: 0.62 },
    TrainingEpochPoint { epoch: 2, train: 0.72, val: 0.69 },
    TrainingEpochPoint { epoch: 3, train: 0.78, val: 0.74 },
    TrainingEpochPoint { epoch: 4, train: 0.82, val: 0.78 },
    TrainingEpochPoint { epoch: 5, train: 0.85, val: 0.81 },
    TrainingEpochPoint { epoch: 6, train: 0.87, val: 0.83 },
    TrainingEpochPoint { epoch: 7, train: 0.88, val: 0.85 },
    TrainingEpochPoint { epoch: 8, train: 0.89, val: 0.86 },
    TrainingEpochPoint { epoch: 9, train: 0.90, val: 0.87 },
    TrainingEpochPoint { epoch: 10, train: 0.91, val: 0.87 },
];

pub const RADAR_MAX: u32 = 100;

pub static RADAR_AXES: [RadarAxis; 5] = [
    RadarAxis { metric: "Accuracy", value: 87 },
    RadarAxis { metric: "Speed", value: 92 },
    RadarAxis { metric: "Robustness", value: 78 },
    RadarAxis { metric: "Interpretability", value: 85 },
    RadarAxis { metric: "Scalability", value: 90 },
];

pub static SAMPLE_PREDICTIONS: [SamplePrediction; 4] = [
    SamplePrediction {
        title: "Deep Learning for Natural Language Processing",
        year: 2023,
        citations: 142,
        doc_type: "Journal Article",
        publisher: "IEEE",
        score: 87.4,
        confidence: 0.92,
    },
    SamplePrediction {
        title: "A Survey of Machine Learning Techniques",
        year: 2021,
        citations: 89,
        doc_type: "Conference Paper",
        publisher: "ACM",
        score: 76.2,
        confidence: 0.88,
    },
    SamplePrediction {
        title: "Introduction to Statistical Learning",
        year: 2019,
        citations: 1250,
        doc_type: "Book",
        publisher: "Springer",
        score: 94.1,
        confidence: 0.95,
    },
    SamplePrediction {
        title: "Novel Approaches to Data Mining",
        year: 2024,
        citations: 12,
        doc_type: "Preprint",
        publisher: "arXiv",
        score: 52.8,
        confidence: 0.71,
    },
];

pub static SUMMARY_STATS: [SummaryStat; 4] = [
    SummaryStat { value: "10K+", label: "Training Samples" },
    SummaryStat { value: "6", label: "Input Features" },
    SummaryStat { value: "87%", label: "Test Accuracy" },
    SummaryStat { value: "<50ms", label: "Inference Time" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        assert_eq!(PERFORMANCE_METRICS.len(), 4);
        assert_eq!(FEATURE_IMPORTANCE.len(), 6);
        assert_eq!(SCORE_DISTRIBUTION.len(), 5);
        assert_eq!(TRAINING_CURVE.len(), 10);
        assert_eq!(RADAR_AXES.len(), 5);
        assert_eq!(SAMPLE_PREDICTIONS.len(), 4);
    }

    #[test]
    fn test_prediction_buckets() {
        let buckets: Vec<ScoreBucket> = SAMPLE_PREDICTIONS.iter().map(|p| p.bucket()).collect();
        assert_eq!(
            buckets,
            vec![
                ScoreBucket::Excellent,
                ScoreBucket::Good,
                ScoreBucket::Excellent,
                ScoreBucket::Fair,
            ]
        );
    }

    #[test]
    fn test_confidence_percent() {
        let percents: Vec<u32> = SAMPLE_PREDICTIONS
            .iter()
            .map(|p| p.confidence_percent())
            .collect();
        assert_eq!(percents, vec![92, 88, 95, 71]);
    }

    #[test]
    fn test_importance_fits_axis() {
        assert!(FEATURE_IMPORTANCE
            .iter()
            .all(|f| f.importance <= FEATURE_IMPORTANCE_MAX));
    }

    #[test]
    fn test_epochs_are_consecutive() {
        for (i, point) in TRAINING_CURVE.iter().enumerate() {
            assert_eq!(point.epoch as usize, i + 1);
        }
    }
}
