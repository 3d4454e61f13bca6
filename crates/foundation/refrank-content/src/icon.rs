//! Card icons

use serde::Serialize;

/// Symbolic icon shown on cards and headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    BookOpen,
    BarChart,
    Sparkles,
    CheckCircle,
    Database,
    Layers,
    Cpu,
    Target,
    TrendingUp,
    Award,
    Code,
    Brain,
    GraduationCap,
}

impl Icon {
    /// Text glyph rendered inside the icon tile
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::BookOpen => "📖",
            Icon::BarChart => "📊",
            Icon::Sparkles => "✨",
            Icon::CheckCircle => "✔",
            Icon::Database => "🗄",
            Icon::Layers => "🗂",
            Icon::Cpu => "🖥",
            Icon::Target => "🎯",
            Icon::TrendingUp => "📈",
            Icon::Award => "🏆",
            Icon::Code => "⌨",
            Icon::Brain => "🧠",
            Icon::GraduationCap => "🎓",
        }
    }
}
