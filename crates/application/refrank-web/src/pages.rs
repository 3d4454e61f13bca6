//! Page content templates
//!
//! Each page is a pure function of the literal data in `refrank_content`.
//! Rendering produces the fragment that goes inside the layout shell.

use askama::Template;
use refrank_content::about::{self, FeatureWeight, MethodologyStep, TechnicalSpec};
use refrank_content::home::{self, Highlight};
use refrank_content::results::{self, PerformanceMetric, SummaryStat};
use refrank_content::team::{self, ProjectFact, TeamMember};
use refrank_content::{Page, SITE_NAME};

use crate::charts::{self, Series};
use crate::error::Result;

const CHART_TEAL: &str = "#14b8a6";
const CHART_NAVY: &str = "#1e3a5f";

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    site_name: &'static str,
    tagline: &'static str,
    intro: &'static str,
    highlights: &'static [Highlight],
    metadata_features: &'static [&'static str],
    sample_output: &'static str,
    about_url: &'static str,
    results_url: &'static str,
}

#[derive(Template)]
#[template(path = "pages/about.html")]
struct AboutTemplate {
    site_name: &'static str,
    subtitle: &'static str,
    overview: &'static [&'static str],
    steps: &'static [MethodologyStep],
    weights: &'static [FeatureWeight],
    specs: &'static [TechnicalSpec],
}

/// Sample prediction with its display values resolved
#[derive(Debug, Clone)]
struct PredictionCard {
    title: &'static str,
    year: u16,
    citations: u32,
    doc_type: &'static str,
    publisher: &'static str,
    score: f64,
    score_class: &'static str,
    confidence_percent: u32,
}

#[derive(Template)]
#[template(path = "pages/results.html")]
struct ResultsTemplate {
    subtitle: &'static str,
    metrics: &'static [PerformanceMetric],
    importance_chart: String,
    distribution_chart: String,
    training_chart: String,
    radar_chart: String,
    train_color: &'static str,
    val_color: &'static str,
    predictions: Vec<PredictionCard>,
    summary: &'static [SummaryStat],
}

#[derive(Template)]
#[template(path = "pages/team.html")]
struct TeamTemplate {
    subtitle: &'static str,
    members: &'static [TeamMember],
    project_summary: &'static str,
    facts: &'static [ProjectFact],
    acknowledgments: &'static str,
}

#[derive(Template)]
#[template(path = "pages/not_found.html")]
struct NotFoundTemplate<'a> {
    path: &'a str,
    home_url: &'static str,
}

/// Render the content fragment for `page`
pub fn render(page: Page) -> Result<String> {
    let html = match page {
        Page::Home => home_template().render()?,
        Page::About => about_template().render()?,
        Page::Results => results_template().render()?,
        Page::Team => team_template().render()?,
    };
    Ok(html)
}

/// Fragment for an unknown path
pub fn render_not_found(path: &str) -> Result<String> {
    let template = NotFoundTemplate {
        path,
        home_url: Page::Home.url(),
    };
    Ok(template.render()?)
}

fn home_template() -> HomeTemplate {
    HomeTemplate {
        site_name: SITE_NAME,
        tagline: home::TAGLINE,
        intro: home::INTRO,
        highlights: &home::HIGHLIGHTS,
        metadata_features: &home::METADATA_FEATURES,
        sample_output: home::SAMPLE_OUTPUT,
        about_url: Page::About.url(),
        results_url: Page::Results.url(),
    }
}

fn about_template() -> AboutTemplate {
    AboutTemplate {
        site_name: SITE_NAME,
        subtitle: about::SUBTITLE,
        overview: &about::OVERVIEW,
        steps: &about::METHODOLOGY_STEPS,
        weights: &about::FEATURE_WEIGHTS,
        specs: &about::TECHNICAL_SPECS,
    }
}

fn results_template() -> ResultsTemplate {
    let importance: Vec<(&str, f64)> = results::FEATURE_IMPORTANCE
        .iter()
        .map(|f| (f.feature, f.importance as f64))
        .collect();
    let distribution: Vec<(&str, f64, &str)> = results::SCORE_DISTRIBUTION
        .iter()
        .map(|b| (b.range, b.count as f64, b.fill))
        .collect();
    let epochs: Vec<String> = results::TRAINING_CURVE
        .iter()
        .map(|p| p.epoch.to_string())
        .collect();
    let series = [
        Series {
            name: "Training",
            color: CHART_NAVY,
            values: results::TRAINING_CURVE.iter().map(|p| p.train).collect(),
        },
        Series {
            name: "Validation",
            color: CHART_TEAL,
            values: results::TRAINING_CURVE.iter().map(|p| p.val).collect(),
        },
    ];
    let radar: Vec<(&str, f64)> = results::RADAR_AXES
        .iter()
        .map(|a| (a.metric, a.value as f64))
        .collect();
    let (y_min, y_max) = results::TRAINING_CURVE_DOMAIN;

    let predictions = results::SAMPLE_PREDICTIONS
        .iter()
        .map(|p| PredictionCard {
            title: p.title,
            year: p.year,
            citations: p.citations,
            doc_type: p.doc_type,
            publisher: p.publisher,
            score: p.score,
            score_class: p.bucket().css_class(),
            confidence_percent: p.confidence_percent(),
        })
        .collect();

    ResultsTemplate {
        subtitle: results::SUBTITLE,
        metrics: &results::PERFORMANCE_METRICS,
        importance_chart: charts::horizontal_bars(
            &importance,
            results::FEATURE_IMPORTANCE_MAX as f64,
            CHART_TEAL,
        ),
        distribution_chart: charts::columns(&distribution),
        training_chart: charts::lines(&epochs, &series, y_min, y_max),
        radar_chart: charts::radar(&radar, results::RADAR_MAX as f64, CHART_TEAL),
        train_color: CHART_NAVY,
        val_color: CHART_TEAL,
        predictions,
        summary: &results::SUMMARY_STATS,
    }
}

fn team_template() -> TeamTemplate {
    TeamTemplate {
        subtitle: team::SUBTITLE,
        members: &team::TEAM,
        project_summary: team::PROJECT_SUMMARY,
        facts: &team::PROJECT_FACTS,
        acknowledgments: team::ACKNOWLEDGMENTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_renders() {
        for page in Page::ALL {
            let html = render(page).unwrap();
            assert!(html.contains("class=\"hero"), "{page}");
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        for page in Page::ALL {
            assert_eq!(render(page).unwrap(), render(page).unwrap());
        }
    }

    #[test]
    fn test_home_counts() {
        let html = render(Page::Home).unwrap();
        assert_eq!(html.matches("class=\"highlight-card\"").count(), 3);
        assert_eq!(html.matches("class=\"metadata-feature\"").count(), 6);
        assert!(html.contains("href=\"/about\""));
        assert!(html.contains("href=\"/results\""));
        assert!(html.contains("quality_score"));
    }

    #[test]
    fn test_about_counts() {
        let html = render(Page::About).unwrap();
        assert_eq!(html.matches("class=\"step-card\"").count(), 4);
        assert_eq!(html.matches("class=\"weight-card\"").count(), 6);
        assert_eq!(html.matches("class=\"spec-card\"").count(), 3);
        assert!(html.contains("Step 1"));
        assert!(html.contains("Step 4"));
        assert!(!html.contains("Step 5"));
        assert!(html.contains(">25%<"));
    }

    #[test]
    fn test_results_counts() {
        let html = render(Page::Results).unwrap();
        assert_eq!(html.matches("class=\"metric-card\"").count(), 4);
        assert_eq!(html.matches("class=\"chart-panel\"").count(), 4);
        assert_eq!(html.matches("class=\"prediction-card\"").count(), 4);
        assert_eq!(html.matches("class=\"summary-stat\"").count(), 4);
        assert_eq!(html.matches("<svg").count(), 4);
    }

    #[test]
    fn test_results_score_badges() {
        let html = render(Page::Results).unwrap();
        assert_eq!(html.matches("score-badge score-excellent").count(), 2);
        assert_eq!(html.matches("score-badge score-good").count(), 1);
        assert_eq!(html.matches("score-badge score-fair").count(), 1);
        assert!(html.contains(">87.4<"));
        assert!(html.contains("92% confidence"));
        assert!(html.contains("width: 71%"));
    }

    #[test]
    fn test_results_metric_values_render_like_numbers() {
        let html = render(Page::Results).unwrap();
        assert!(html.contains(">87.3%<"));
        assert!(html.contains(">84%<"));
    }

    #[test]
    fn test_team_counts() {
        let html = render(Page::Team).unwrap();
        assert_eq!(html.matches("class=\"member-card\"").count(), 2);
        assert_eq!(html.matches("class=\"skill-chip\"").count(), 8);
        assert_eq!(html.matches("class=\"contribution\"").count(), 8);
        assert!(html.contains("Mustafa"));
        assert!(html.contains("Salim"));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = render_not_found("<script>").unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
