//! Canned "thinking" plans shown while an answer is pending.
//!
//! The plan is chosen by keyword: the first rule whose keyword appears in the
//! lower-cased question wins, and a general plan covers everything else.

#[cfg(test)]
#[path = "thinking_test.rs"]
mod thinking_test;

/// Title and step list rendered by the thinking indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThinkingPlan {
    pub title: String,
    pub steps: Vec<String>,
}

struct PlanRule {
    keywords: &'static [&'static str],
    title: &'static str,
    steps: [&'static str; 4],
}

static RULES: [PlanRule; 3] = [
    PlanRule {
        keywords: &["research"],
        title: "Scanning user research and findings…",
        steps: [
            "Identify study type and participants",
            "Surface key insights and pain points",
            "Map insights to solution directions",
            "Assemble citations from research notes",
        ],
    },
    PlanRule {
        keywords: &["impact", "results", "metrics"],
        title: "Collecting outcomes and impact metrics…",
        steps: [
            "Locate KPIs before/after launch",
            "Summarize quantitative lifts",
            "Pull qualitative feedback highlights",
            "Cross\u{2011}check assumptions with data",
        ],
    },
    PlanRule {
        keywords: &["process", "approach", "timeline"],
        title: "Reconstructing design process from case study…",
        steps: [
            "Outline phases and milestones",
            "Extract artifacts (flows, wireframes, tests)",
            "Link decisions to evidence",
            "Prepare concise narrative",
        ],
    },
];

static GENERAL: PlanRule = PlanRule {
    keywords: &[],
    title: "Reading the case study and preparing an answer…",
    steps: [
        "Parse question intent",
        "Skim relevant sections",
        "Draft answer structure",
        "Fill details and sources",
    ],
};

/// Pick the thinking plan for a question.
#[must_use]
pub fn plan_for(text: &str) -> ThinkingPlan {
    let query = text.to_lowercase();
    let rule = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| query.contains(k)))
        .unwrap_or(&GENERAL);
    ThinkingPlan { title: rule.title.to_owned(), steps: rule.steps.iter().map(|s| (*s).to_owned()).collect() }
}
