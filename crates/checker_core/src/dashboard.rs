//! Result-page helpers: score colouring and keyword panel toggles.

/// Colour band for a 0-100 score circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: i64) -> Self {
        if score >= 80 {
            ScoreBand::Strong
        } else if score >= 60 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }

    pub fn css_classes(self) -> [&'static str; 3] {
        match self {
            ScoreBand::Strong => ["bg-success-subtle", "text-success", "border-success"],
            ScoreBand::Fair => ["bg-warning-subtle", "text-warning", "border-warning"],
            ScoreBand::Weak => ["bg-danger-subtle", "text-danger", "border-danger"],
        }
    }
}

/// Parses the leading integer of a score element's text, like `"87%"` -> 87.
pub fn parse_score(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);
    trimmed[..end].parse().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    Matched,
    Missing,
}

impl KeywordKind {
    pub const ALL: [KeywordKind; 2] = [KeywordKind::Matched, KeywordKind::Missing];

    /// Prefix of the `{kind}-keywords-container` / `{kind}-keywords-toggle` ids.
    pub fn id_prefix(self) -> &'static str {
        match self {
            KeywordKind::Matched => "matched",
            KeywordKind::Missing => "missing",
        }
    }

    fn title(self) -> &'static str {
        match self {
            KeywordKind::Matched => "Matched",
            KeywordKind::Missing => "Missing",
        }
    }
}

/// Visibility of the two keyword containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordPanels {
    matched_visible: bool,
    missing_visible: bool,
}

impl KeywordPanels {
    pub fn new(matched_visible: bool, missing_visible: bool) -> Self {
        Self {
            matched_visible,
            missing_visible,
        }
    }

    pub fn is_visible(&self, kind: KeywordKind) -> bool {
        match kind {
            KeywordKind::Matched => self.matched_visible,
            KeywordKind::Missing => self.missing_visible,
        }
    }

    /// Flips one panel and returns its new visibility.
    pub fn toggle(&mut self, kind: KeywordKind) -> bool {
        let slot = match kind {
            KeywordKind::Matched => &mut self.matched_visible,
            KeywordKind::Missing => &mut self.missing_visible,
        };
        *slot = !*slot;
        *slot
    }

    pub fn button_label(&self, kind: KeywordKind) -> String {
        let verb = if self.is_visible(kind) { "Hide" } else { "Show" };
        format!("{verb} {} Keywords", kind.title())
    }
}
