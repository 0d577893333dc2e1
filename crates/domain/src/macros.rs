//! Label conversions for fieldless enums
//!
//! Run modes and report actions travel as short lowercase labels in logs,
//! summaries and config. One macro invocation gives an enum its label table,
//! `Display`, and case-insensitive `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use papersync_domain::impl_domain_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum DeckState {
//!     Saved,
//!     Failed,
//! }
//!
//! impl_domain_label_conversions!(DeckState {
//!     Saved => "saved",
//!     Failed => "failed",
//! });
//!
//! assert_eq!(DeckState::Saved.label(), "saved");
//! assert_eq!("FAILED".parse::<DeckState>(), Ok(DeckState::Failed));
//! assert_eq!(DeckState::ALL.len(), 2);
//! ```

/// Generates `label()`, `ALL`, `Display` and `FromStr` for a fieldless enum.
///
/// Labels should be unique and lowercase; parsing ignores ASCII case.
#[macro_export]
macro_rules! impl_domain_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Stable lowercase label.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| format!("unknown {} label '{}'", stringify!($enum_name), s))
            }
        }
    };
}
