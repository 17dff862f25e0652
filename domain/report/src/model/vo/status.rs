use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a service report.
///
/// `open` is the only initial state; `done` is terminal for the normal flow although a
/// progress update may move a report back to `progress`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Created, no technician yet.
    #[default]
    Open,
    /// Assigned or being worked on.
    Progress,
    /// Completed.
    Done,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Progress => "progress",
            Self::Done => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Self::Open),
            "progress" => Ok(Self::Progress),
            "done" => Ok(Self::Done),
            _ => bail!("{s} can't be transformed to ReportStatus"),
        }
    }
}

/// Status a technician may request with a progress update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressStatus {
    Progress,
    Done,
}

impl From<ProgressStatus> for ReportStatus {
    fn from(value: ProgressStatus) -> Self {
        match value {
            ProgressStatus::Progress => Self::Progress,
            ProgressStatus::Done => Self::Done,
        }
    }
}
