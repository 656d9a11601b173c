use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

/// Page order; also the priority order when picking the active section.
pub const SECTION_IDS: [SectionId; 5] = [
    SectionId::Home,
    SectionId::About,
    SectionId::Skills,
    SectionId::Projects,
    SectionId::Contact,
];

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Position in [`SECTION_IDS`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn parse(value: &str) -> Result<Self, SectionIdError> {
        let trimmed = value.trim();
        SECTION_IDS
            .into_iter()
            .find(|id| id.as_str() == trimmed)
            .ok_or_else(|| SectionIdError::Unknown(trimmed.to_string()))
    }

    pub fn character_dom_id(self) -> String {
        format!("{}-character", self.as_str())
    }

    pub fn bubble_dom_id(self) -> String {
        format!("{}-bubble", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionId {
    type Err = SectionIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SectionIdError {
    #[error("unknown section id '{0}'")]
    Unknown(String),
}

/// Tracks which section currently holds "active" status. At most one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSlot {
    current: Option<SectionId>,
}

impl ActiveSlot {
    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    pub fn activate(&mut self, next: SectionId) -> Activation {
        if self.current == Some(next) {
            return Activation::Unchanged;
        }
        Activation::Changed {
            previous: self.current.replace(next),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Unchanged,
    Changed { previous: Option<SectionId> },
}
