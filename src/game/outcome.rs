/// How the Inspector's shift was graded on the normal ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceTier {
    Exemplary,
    Adequate,
    Concerning,
}

impl PerformanceTier {
    /// 100% is exemplary, 70% and up adequate, anything lower concerning.
    pub fn from_score(score: usize, total: usize) -> Self {
        if total == 0 || score >= total {
            PerformanceTier::Exemplary
        } else if score * 10 >= total * 7 {
            PerformanceTier::Adequate
        } else {
            PerformanceTier::Concerning
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    Exemplary,
    Adequate,
    Concerning,
    Caught,
    GoodEnding,
    SilenceEnding,
}

/// Where a campaign run finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ending {
    /// No plot conversation slipped through: the shift is graded.
    Normal {
        tier: PerformanceTier,
        score: usize,
        total: usize,
        days: u32,
    },
    /// The loyalty review exposed the Inspector.
    Caught { quiz_score: usize, questions: usize },
    /// The Inspector shared what they learned.
    Good,
    /// The Inspector kept the truth to themselves.
    Silence,
}

impl Ending {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Ending::Normal { tier, .. } => match tier {
                PerformanceTier::Exemplary => OutcomeKind::Exemplary,
                PerformanceTier::Adequate => OutcomeKind::Adequate,
                PerformanceTier::Concerning => OutcomeKind::Concerning,
            },
            Ending::Caught { .. } => OutcomeKind::Caught,
            Ending::Good => OutcomeKind::GoodEnding,
            Ending::Silence => OutcomeKind::SilenceEnding,
        }
    }
}
