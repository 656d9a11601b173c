pub mod contact;
pub mod error;
pub mod guide;
pub mod nav;
pub mod notice;
pub mod section;
pub mod skills;

pub use contact::{SubmitGate, SubmitOutcome};
pub use error::LoadError;
pub use guide::{GuideConfig, GuideSettings, MessageMap, Offset, SettingsSource};
pub use nav::{NavChanges, NavState, VerticalSpan};
pub use notice::NoticeKind;
pub use section::{ActiveSlot, Activation, SectionId, SectionIdError, SECTION_IDS};
