//! Module catalog definitions
//!
//! Every pluggable module an experiment can name, grouped by [`ModuleKind`].
//! Names are matched exactly against the catalog.

/// Define a catalog enum whose variant identifiers are the module names.
macro_rules! catalog {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:ident) {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All catalog entries, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// The catalog name.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::defs::UnknownModuleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.as_str() == s)
                    .ok_or_else(|| $crate::defs::UnknownModuleError {
                        kind: $crate::defs::ModuleKind::$kind,
                        name: s.to_owned(),
                    })
            }
        }
    };
}
pub(crate) use catalog;

mod agent;
mod modules;
mod reward;

pub use agent::{AgentDefaults, AgentFamily, AgentName};
pub use modules::{
    AugmentationName, DistributionFamily, DistributionName, EncoderName, StorageFamily,
    StorageName,
};
pub use reward::{IntrinsicWeight, InvalidWeightError, RewardName};

use enum_map::Enum;
use std::fmt;
use thiserror::Error;

/// The kind of a pluggable module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Enum)]
pub enum ModuleKind {
    Encoder,
    Agent,
    Storage,
    Distribution,
    Augmentation,
    Reward,
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A module name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} module \"{name}\"")]
pub struct UnknownModuleError {
    pub kind: ModuleKind,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("DrQv2", AgentName::DrQv2)]
    #[case("PPO", AgentName::PPO)]
    #[case("IMPALA", AgentName::IMPALA)]
    fn parse_agent(#[case] name: &str, #[case] expected: AgentName) {
        assert_eq!(name.parse::<AgentName>().unwrap(), expected);
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "drqv2".parse::<AgentName>().unwrap_err();
        assert_eq!(err.kind, ModuleKind::Agent);
        assert_eq!(err.name, "drqv2");
    }

    #[test]
    fn unknown_reward_message() {
        let err = "Curiosity".parse::<RewardName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown Reward module \"Curiosity\"");
    }

    #[test]
    fn names_round_trip_through_display() {
        for encoder in EncoderName::ALL {
            assert_eq!(encoder.to_string().parse::<EncoderName>(), Ok(*encoder));
        }
    }
}
