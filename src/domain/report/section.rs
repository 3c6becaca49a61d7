/// Fixed vocabulary of report sections emitted by the upstream research
/// prompt. The set is closed: a bold marker carrying any other wording stays
/// ordinary text instead of silently opening an unknown section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    BasicInformation,
    CurrentMarketValue,
    BuyingRecommendations,
    AuthenticationTips,
    TechnicalSpecifications,
    CollectibilityFactors,
    ComparableModels,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::BasicInformation,
        Section::CurrentMarketValue,
        Section::BuyingRecommendations,
        Section::AuthenticationTips,
        Section::TechnicalSpecifications,
        Section::CollectibilityFactors,
        Section::ComparableModels,
    ];

    /// Human label, exactly as the upstream prompt spells it.
    pub fn label(self) -> &'static str {
        match self {
            Section::BasicInformation => "Basic Information",
            Section::CurrentMarketValue => "Current Market Value",
            Section::BuyingRecommendations => "Buying Recommendations",
            Section::AuthenticationTips => "Authentication Tips",
            Section::TechnicalSpecifications => "Technical Specifications",
            Section::CollectibilityFactors => "Collectibility Factors",
            Section::ComparableModels => "Comparable Models",
        }
    }

    /// CSS class identifying the section block in the console stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            Section::BasicInformation => "basic-info-section",
            Section::CurrentMarketValue => "market-value-section",
            Section::BuyingRecommendations => "buying-section",
            Section::AuthenticationTips => "auth-section",
            Section::TechnicalSpecifications => "specs-section",
            Section::CollectibilityFactors => "collect-section",
            Section::ComparableModels => "compare-section",
        }
    }

    /// Current Market Value carries the primary-emphasis treatment.
    pub fn is_primary(self) -> bool {
        matches!(self, Section::CurrentMarketValue)
    }

    /// Match a trimmed line against the `**Label**` marker form.
    pub fn from_marker(line: &str) -> Option<Section> {
        let inner = line.trim().strip_prefix("**")?.strip_suffix("**")?;
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.label() == inner)
    }

    /// Opening markup for the section block, heading included.
    pub(crate) fn open_tag(self) -> String {
        if self.is_primary() {
            format!(
                "<div class=\"{}\"><h2 class=\"market-value-title\">{}</h2>",
                self.css_class(),
                self.label()
            )
        } else {
            format!(
                "<div class=\"section {}\"><h2>{}</h2>",
                self.css_class(),
                self.label()
            )
        }
    }
}
