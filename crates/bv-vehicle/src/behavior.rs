//! Vehicle behavior variants.

use std::fmt;
use std::str::FromStr;

use bv_core::BvError;

/// How a vehicle chooses its next velocity.
///
/// A vehicle keeps its behavior for its whole lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Behavior {
    /// Flocks with its neighbours and steers along the light field.
    #[default]
    Follower,

    /// Pacer that keeps its velocity forever and ignores everything else.
    LeaderCw,

    /// Pacer whose velocity rotates at a constant rate, tracing a circle.
    LeaderCcw,
}

impl Behavior {
    /// Leaders pull on nearby followers far harder than ordinary peers.
    #[inline]
    pub fn is_leader(self) -> bool {
        !matches!(self, Behavior::Follower)
    }

    /// Name used in textual records.
    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Follower  => "follower",
            Behavior::LeaderCw  => "master_cw",
            Behavior::LeaderCcw => "master_ccw",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Behavior {
    type Err = BvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "follower"   => Ok(Behavior::Follower),
            "master_cw"  => Ok(Behavior::LeaderCw),
            "master_ccw" => Ok(Behavior::LeaderCcw),
            other        => Err(BvError::UnknownBehavior(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Behavior {
    type Error = BvError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Behavior> for String {
    fn from(b: Behavior) -> String {
        b.as_str().to_owned()
    }
}
