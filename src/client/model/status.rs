#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Banner shown above the composer form.
#[derive(Clone, Debug, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
    /// Increments with every banner; a hide timer only clears its own banner.
    pub serial: u64,
}

impl Status {
    /// Info and success banners hide themselves; errors stay until replaced.
    pub fn auto_hides(&self) -> bool {
        self.kind != StatusKind::Error
    }

    pub fn class(&self) -> &'static str {
        match self.kind {
            StatusKind::Info => "status status-info",
            StatusKind::Success => "status status-success",
            StatusKind::Error => "status status-error",
        }
    }
}
