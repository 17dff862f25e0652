use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Role granted by the identity layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    MasterAdmin,
    Admin,
    Teknisi,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::MasterAdmin | Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MasterAdmin => write!(f, "MASTER_ADMIN"),
            Self::Admin => write!(f, "ADMIN"),
            Self::Teknisi => write!(f, "TEKNISI"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MASTER_ADMIN" => Ok(Self::MasterAdmin),
            "ADMIN" => Ok(Self::Admin),
            "TEKNISI" => Ok(Self::Teknisi),
            _ => bail!("{s} can't be transformed to Role"),
        }
    }
}

/// The authenticated caller of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub role: Role,
}

impl Actor {
    pub fn new(id: i64, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
