use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementSystem {
    Metric,
    Imperial,
}

impl MeasurementSystem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::Imperial => "Imperial",
        }
    }
}

impl std::str::FromStr for MeasurementSystem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Metric" => Ok(Self::Metric),
            "Imperial" => Ok(Self::Imperial),
            other => anyhow::bail!("unknown measurement system {other:?}"),
        }
    }
}

/// Profile row as stored; `measurement_system` is a CHECK-constrained TEXT column.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub name: String,
    pub measurement_system: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub measurement_system: MeasurementSystem,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = anyhow::Error;

    fn try_from(r: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Self {
            name: r.name,
            measurement_system: r.measurement_system.parse()?,
        })
    }
}
