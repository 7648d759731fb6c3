//! Sphere module - government tier of a legislative body

use serde::{Deserialize, Serialize};

/// Government tier of the legislature a record was collected from
///
/// Brazilian legislative portals fall into two tiers:
/// - Municipal: city councils (câmaras municipais)
/// - Estadual: state assemblies (assembleias legislativas)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sphere {
    /// City council
    #[serde(rename = "MUNICIPAL")]
    Municipal,

    /// State assembly
    #[serde(rename = "ESTADUAL")]
    Estadual,
}

impl Sphere {
    /// Get the sphere name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Sphere::Municipal => "MUNICIPAL",
            Sphere::Estadual => "ESTADUAL",
        }
    }

    /// Parse a sphere from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "MUNICIPAL" => Some(Sphere::Municipal),
            "ESTADUAL" => Some(Sphere::Estadual),
            _ => None,
        }
    }
}

impl std::str::FromStr for Sphere {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid sphere: {}", s))
    }
}
