/// A text asset that may accompany a lesson.
///
/// Variants are listed in the order the loader reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Asset {
    Explanation,
    Model,
    Report,
    Preamble,
}

impl Asset {
    pub const ALL: [Asset; 4] = [
        Asset::Explanation,
        Asset::Model,
        Asset::Report,
        Asset::Preamble,
    ];

    /// Name of the file holding this asset inside a lesson directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Explanation => "explanation.md",
            Self::Model => "model.mo",
            Self::Report => "report.md",
            Self::Preamble => "preamble.md",
        }
    }

    /// Property key used for this asset in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explanation => "explanation",
            Self::Model => "model",
            Self::Report => "report",
            Self::Preamble => "preamble",
        }
    }
}

/// A single lesson loaded from its own directory.
///
/// Missing assets stay `None`; an empty file is `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lesson {
    pub title: String,
    pub explanation: Option<String>,
    pub model: Option<String>,
    pub preamble: Option<String>,
    pub report: Option<String>,
}

impl Lesson {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn asset(&self, asset: Asset) -> Option<&str> {
        match asset {
            Asset::Explanation => self.explanation.as_deref(),
            Asset::Model => self.model.as_deref(),
            Asset::Report => self.report.as_deref(),
            Asset::Preamble => self.preamble.as_deref(),
        }
    }

    pub fn set_asset(&mut self, asset: Asset, content: Option<String>) {
        let slot = match asset {
            Asset::Explanation => &mut self.explanation,
            Asset::Model => &mut self.model,
            Asset::Report => &mut self.report,
            Asset::Preamble => &mut self.preamble,
        };
        *slot = content;
    }

    /// Assets that were found, in load order.
    pub fn present_assets(&self) -> impl Iterator<Item = (Asset, &str)> + '_ {
        Asset::ALL
            .into_iter()
            .filter_map(move |asset| self.asset(asset).map(|content| (asset, content)))
    }
}
