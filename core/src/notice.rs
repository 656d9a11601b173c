use std::fmt;

pub const SLIDE_IN_DELAY_MS: u32 = 100;
pub const DISMISS_AFTER_MS: u32 = 4000;
pub const REMOVE_AFTER_SLIDE_OUT_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NoticeKind {
    /// Unknown names fall back to [`NoticeKind::Info`].
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "success" => NoticeKind::Success,
            "error" => NoticeKind::Error,
            _ => NoticeKind::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "#10b981",
            NoticeKind::Error => "#ef4444",
            NoticeKind::Info => "#3b82f6",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    /// Inline style for a freshly created, still off-screen notification.
    pub fn initial_style(self) -> String {
        format!(
            "position: fixed; top: 20px; right: 20px; background: {}; color: white; \
             padding: 16px 24px; border-radius: 8px; \
             box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); z-index: 1000; \
             transform: translateX(100%); transition: transform 0.3s ease-out; \
             max-width: 400px; font-weight: 500;",
            self.background()
        )
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
