//! Declarative helpers for identifier newtypes and raw-string enums.

/// Defines a ULID-backed identifier newtype with `new`, `Default`,
/// `Display` and `FromStr`.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Ulid);

        impl $name {
            /// Generate a fresh identifier.
            pub fn new() -> Self {
                Self(Ulid::new())
            }

            /// The underlying ULID.
            pub fn as_ulid(&self) -> Ulid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Ulid> for $name {
            fn from(value: Ulid) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<Ulid>()
                    .map(Self)
                    .map_err(|_| $crate::CoreError::InvalidId {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

/// Defines a fieldless enum whose persisted form is a fixed raw string per
/// variant. Generates serde renames, `ALL`, `as_str`, `Display` and a
/// case-insensitive `FromStr`.
macro_rules! raw_value_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $raw:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $raw)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The persisted raw string.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $raw,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|variant| {
                        let raw = variant.as_str();
                        raw.eq_ignore_ascii_case(wanted)
                            || raw.replace(' ', "-").eq_ignore_ascii_case(wanted)
                            || raw.replace(' ', "_").eq_ignore_ascii_case(wanted)
                    })
                    .ok_or_else(|| $crate::CoreError::UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{GoalId, HabitCategory, MeditationType, Priority};

    #[test]
    fn test_raw_enum_parses_case_insensitively() {
        assert_eq!("health".parse::<HabitCategory>().unwrap(), HabitCategory::Health);
        assert_eq!("CRITICAL".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!(
            "body-scanning".parse::<MeditationType>().unwrap(),
            MeditationType::BodyScanning
        );
        assert_eq!(
            "Loving Kindness".parse::<MeditationType>().unwrap(),
            MeditationType::LovingKindness
        );
    }

    #[test]
    fn test_raw_enum_rejects_unknown() {
        let err = "Sleep".parse::<HabitCategory>().unwrap_err();
        assert!(err.to_string().contains("HabitCategory"));
    }

    #[test]
    fn test_id_display_round_trips() {
        let id = GoalId::new();
        let parsed: GoalId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-an-id".parse::<GoalId>().is_err());
    }
}
