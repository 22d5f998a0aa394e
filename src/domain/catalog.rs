//! Audience catalog
//!
//! The fixed set of supported audience profiles. Each profile is a structured
//! section list rather than an interpolated string, so the prompt builder can
//! compose the final instruction without catalog entries carrying any
//! caller-specific data. Populated at compile time; no mutation API exists.

use crate::domain::models::Audience;
use crate::error::Result;
use std::str::FromStr;

/// Hard ceiling on headline length, reiterated in every instruction.
pub const MAX_HEADLINE_WORDS: u32 = 8;

/// Hard ceiling on quote length, reiterated in every instruction.
pub const MAX_QUOTE_WORDS: u32 = 33;

/// One required output section with its numeric constraints.
///
/// Headline count and narrative word count come from the request parameters;
/// list sizes and quote counts are fixed per profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSpec {
    /// Headline options. Count is taken from the request parameters.
    Headlines { style: &'static str },
    /// The narrative synthesis. Word count is taken from the request parameters.
    Narrative {
        title: &'static str,
        angle: &'static str,
    },
    /// Enumerated insights.
    Insights {
        title: &'static str,
        min: u8,
        max: u8,
        angle: &'static str,
    },
    /// Recommended or required actions.
    Actions {
        title: &'static str,
        min: u8,
        max: u8,
        angle: &'static str,
    },
    /// Verbatim supporting quotes.
    Quotes {
        title: &'static str,
        count: u8,
        angle: &'static str,
    },
}

impl SectionSpec {
    pub fn title(&self) -> &'static str {
        match self {
            SectionSpec::Headlines { .. } => "Headlines",
            SectionSpec::Narrative { title, .. }
            | SectionSpec::Insights { title, .. }
            | SectionSpec::Actions { title, .. }
            | SectionSpec::Quotes { title, .. } => title,
        }
    }
}

/// An immutable audience profile: who the synthesis is for, what it should
/// emphasize, and which sections it must produce, in order.
#[derive(Debug, Clone, Copy)]
pub struct AudienceProfile {
    pub audience: Audience,
    /// Emphasis bullets rendered at the top of the instruction.
    pub focus: &'static [&'static str],
    /// Required output sections in render order.
    pub sections: &'static [SectionSpec],
}

impl AudienceProfile {
    pub fn name(&self) -> &'static str {
        self.audience.name()
    }

    /// True for profiles that integrate two sub-audiences.
    pub fn is_pairing(&self) -> bool {
        matches!(
            self.audience,
            Audience::BoardAndCeos
                | Audience::CeosAndSeniorExecutives
                | Audience::HrAndSeniorExecutives
        )
    }
}

static BOARD_DIRECTORS: AudienceProfile = AudienceProfile {
    audience: Audience::BoardDirectors,
    focus: &[
        "Governance implications",
        "Strategic oversight considerations",
        "Risk management insights",
        "Long-term value creation",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "compelling and strategic",
        },
        SectionSpec::Narrative {
            title: "Strategic Overview",
            angle: "Focus on governance and oversight implications",
        },
        SectionSpec::Insights {
            title: "Key Governance Insights",
            min: 3,
            max: 3,
            angle: "specific insights relevant to board oversight",
        },
        SectionSpec::Insights {
            title: "Risk Considerations",
            min: 2,
            max: 3,
            angle: "potential risks or opportunities boards should monitor",
        },
        SectionSpec::Actions {
            title: "Questions for Management",
            min: 3,
            max: 3,
            angle: "specific questions directors should ask",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 3,
            angle: "quotes that resonate with board priorities",
        },
    ],
};

static CEOS: AudienceProfile = AudienceProfile {
    audience: Audience::Ceos,
    focus: &[
        "Strategic decisions and trade-offs",
        "Organizational transformation",
        "Competitive positioning",
        "Leadership lessons",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "action-oriented",
        },
        SectionSpec::Narrative {
            title: "Executive Summary",
            angle: "Focus on strategic implications and decisions",
        },
        SectionSpec::Actions {
            title: "Strategic Imperatives",
            min: 3,
            max: 3,
            angle: "critical actions or decisions",
        },
        SectionSpec::Insights {
            title: "Implementation Challenges",
            min: 2,
            max: 3,
            angle: "key obstacles and how to address them",
        },
        SectionSpec::Insights {
            title: "Leadership Lessons",
            min: 3,
            max: 3,
            angle: "specific lessons for CEO-level leadership",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 3,
            angle: "quotes that CEOs would find compelling",
        },
    ],
};

static SENIOR_EXECUTIVES: AudienceProfile = AudienceProfile {
    audience: Audience::SeniorExecutives,
    focus: &[
        "Operational implementation",
        "Team leadership applications",
        "Cross-functional collaboration",
        "Execution excellence",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "implementation-focused",
        },
        SectionSpec::Narrative {
            title: "Operations Overview",
            angle: "Focus on execution and team implications",
        },
        SectionSpec::Actions {
            title: "Implementation Roadmap",
            min: 3,
            max: 3,
            angle: "specific steps for execution",
        },
        SectionSpec::Actions {
            title: "Team Applications",
            min: 3,
            max: 3,
            angle: "ways to cascade insights to teams",
        },
        SectionSpec::Insights {
            title: "Cross-Functional Opportunities",
            min: 2,
            max: 3,
            angle: "collaboration points",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 3,
            angle: "quotes relevant to execution",
        },
    ],
};

static HR_LEADERS: AudienceProfile = AudienceProfile {
    audience: Audience::HrLeaders,
    focus: &[
        "Talent development implications",
        "Leadership pipeline building",
        "Culture and capability development",
        "Organizational effectiveness",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "talent-focused",
        },
        SectionSpec::Narrative {
            title: "Talent Overview",
            angle: "Focus on people and capability implications",
        },
        SectionSpec::Actions {
            title: "Leadership Development Applications",
            min: 3,
            max: 3,
            angle: "specific ways to develop leaders",
        },
        SectionSpec::Insights {
            title: "Culture Building Insights",
            min: 3,
            max: 3,
            angle: "cultural elements to reinforce or change",
        },
        SectionSpec::Insights {
            title: "Capability Gaps to Address",
            min: 2,
            max: 3,
            angle: "skill or competency areas to develop",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 3,
            angle: "quotes about talent or culture",
        },
    ],
};

static GENERAL_BUSINESS: AudienceProfile = AudienceProfile {
    audience: Audience::GeneralBusiness,
    focus: &[
        "Accessible business insights",
        "Practical applications",
        "Professional development",
        "Industry trends",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "broadly appealing",
        },
        SectionSpec::Narrative {
            title: "Overview",
            angle: "Accessible explanation of key insights",
        },
        SectionSpec::Insights {
            title: "Key Takeaways",
            min: 3,
            max: 3,
            angle: "main lessons in plain language",
        },
        SectionSpec::Actions {
            title: "Practical Applications",
            min: 3,
            max: 3,
            angle: "ways any professional can apply these insights",
        },
        SectionSpec::Insights {
            title: "Industry Implications",
            min: 2,
            max: 3,
            angle: "broader trends or changes highlighted",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 3,
            angle: "quotes that resonate broadly",
        },
    ],
};

// Pairing profiles integrate both perspectives. Their action lists are
// differentiated per sub-audience and their quotes must balance both
// concerns; they are not a concatenation of the two single profiles.

static BOARD_AND_CEOS: AudienceProfile = AudienceProfile {
    audience: Audience::BoardAndCeos,
    focus: &[
        "Governance and strategy as one conversation",
        "Alignment between board oversight and CEO decisions",
        "Risks the board should probe and management should own",
        "Long-term value creation through executive action",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "suited to a board meeting pre-read",
        },
        SectionSpec::Narrative {
            title: "Board Package Overview",
            angle: "Weave governance implications and strategic decisions into one integrated account",
        },
        SectionSpec::Insights {
            title: "Shared Strategic Insights",
            min: 3,
            max: 3,
            angle: "insights that matter to directors and the CEO alike",
        },
        SectionSpec::Actions {
            title: "Questions for the Board to Ask",
            min: 2,
            max: 3,
            angle: "oversight questions grounded in the interview",
        },
        SectionSpec::Actions {
            title: "Commitments for Management",
            min: 2,
            max: 3,
            angle: "actions the CEO should own in response",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 4,
            angle: "quotes balanced between governance and strategic execution concerns",
        },
    ],
};

static CEOS_AND_SENIOR_EXECUTIVES: AudienceProfile = AudienceProfile {
    audience: Audience::CeosAndSeniorExecutives,
    focus: &[
        "Strategy and execution as a single leadership agenda",
        "Decisions at the top and their operational cascade",
        "Competitive positioning backed by delivery capability",
        "Leadership lessons for the C-suite and their directs",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "suited to a leadership team offsite",
        },
        SectionSpec::Narrative {
            title: "Leadership Team Overview",
            angle: "Connect strategic decisions directly to their execution implications",
        },
        SectionSpec::Insights {
            title: "Strategy-to-Execution Insights",
            min: 3,
            max: 3,
            angle: "insights linking top-level choices to operational reality",
        },
        SectionSpec::Actions {
            title: "CEO Decisions",
            min: 2,
            max: 3,
            angle: "calls only the CEO can make",
        },
        SectionSpec::Actions {
            title: "Executive Execution Steps",
            min: 2,
            max: 3,
            angle: "steps senior executives should drive with their teams",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 4,
            angle: "quotes balanced between strategic intent and operational delivery",
        },
    ],
};

static HR_AND_SENIOR_EXECUTIVES: AudienceProfile = AudienceProfile {
    audience: Audience::HrAndSeniorExecutives,
    focus: &[
        "Talent strategy embedded in line execution",
        "Capability building owned jointly by HR and the business",
        "Culture change carried by operating leaders",
        "Leadership pipeline fed from real work",
    ],
    sections: &[
        SectionSpec::Headlines {
            style: "suited to a talent initiative rollout",
        },
        SectionSpec::Narrative {
            title: "Talent Initiative Overview",
            angle: "Integrate the people implications with how operating leaders will carry them",
        },
        SectionSpec::Insights {
            title: "Capability Insights",
            min: 3,
            max: 3,
            angle: "capability and culture insights relevant to both functions",
        },
        SectionSpec::Actions {
            title: "HR Program Moves",
            min: 2,
            max: 3,
            angle: "program or policy moves for HR leaders",
        },
        SectionSpec::Actions {
            title: "Line Leader Actions",
            min: 2,
            max: 3,
            angle: "day-to-day actions for senior executives and their teams",
        },
        SectionSpec::Quotes {
            title: "Impactful Quotes",
            count: 4,
            angle: "quotes balanced between talent development and operational leadership",
        },
    ],
};

static CATALOG: [&AudienceProfile; 8] = [
    &BOARD_DIRECTORS,
    &CEOS,
    &SENIOR_EXECUTIVES,
    &HR_LEADERS,
    &GENERAL_BUSINESS,
    &BOARD_AND_CEOS,
    &CEOS_AND_SENIOR_EXECUTIVES,
    &HR_AND_SENIOR_EXECUTIVES,
];

/// Looks up the profile for a string identifier, e.g. "Board Directors".
///
/// Fails with `UnknownAudience` for anything outside the fixed catalog.
pub fn resolve(identifier: &str) -> Result<&'static AudienceProfile> {
    let audience = Audience::from_str(identifier)?;
    Ok(profile(audience))
}

/// Looks up the profile for an audience. Infallible: the enum is closed and
/// every variant has exactly one catalog entry.
pub fn profile(audience: Audience) -> &'static AudienceProfile {
    match audience {
        Audience::BoardDirectors => &BOARD_DIRECTORS,
        Audience::Ceos => &CEOS,
        Audience::SeniorExecutives => &SENIOR_EXECUTIVES,
        Audience::HrLeaders => &HR_LEADERS,
        Audience::GeneralBusiness => &GENERAL_BUSINESS,
        Audience::BoardAndCeos => &BOARD_AND_CEOS,
        Audience::CeosAndSeniorExecutives => &CEOS_AND_SENIOR_EXECUTIVES,
        Audience::HrAndSeniorExecutives => &HR_AND_SENIOR_EXECUTIVES,
    }
}

/// All profiles in catalog order.
pub fn all() -> &'static [&'static AudienceProfile] {
    &CATALOG
}
