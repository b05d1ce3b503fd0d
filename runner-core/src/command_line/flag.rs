//! The fixed set of flags the runner recognizes.

/// Prefix that introduces a flag token
pub const FLAG_PREFIX: &str = "--";

/// A recognized flag.
///
/// Every flag takes exactly one value. The fixed flags store it under their
/// canonical name, while [`Flag::Parameter`] stores it under a key taken from
/// the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    NUnitXml,
    XUnitXml,
    TeamCity,
    Parameter,
}

impl Flag {
    pub const ALL: [Flag; 4] = [Flag::NUnitXml, Flag::XUnitXml, Flag::TeamCity, Flag::Parameter];

    /// Canonical spelling of the flag, without the prefix
    pub fn name(self) -> &'static str {
        match self {
            Flag::NUnitXml => "NUnitXml",
            Flag::XUnitXml => "XUnitXml",
            Flag::TeamCity => "TeamCity",
            Flag::Parameter => "parameter",
        }
    }

    /// Look up a flag by name, ignoring case
    pub fn from_name(name: &str) -> Option<Flag> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.name().eq_ignore_ascii_case(name))
    }

    /// Whether the flag's value is stored under [`Flag::name`]
    pub fn is_fixed(self) -> bool {
        !matches!(self, Flag::Parameter)
    }
}

/// Check whether a token looks like a flag
pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_names_regardless_of_case() {
        assert_eq!(Flag::from_name("nunitxml"), Some(Flag::NUnitXml));
        assert_eq!(Flag::from_name("XuNiTxMl"), Some(Flag::XUnitXml));
        assert_eq!(Flag::from_name("TEAMCITY"), Some(Flag::TeamCity));
        assert_eq!(Flag::from_name("Parameter"), Some(Flag::Parameter));
    }

    #[test]
    fn rejects_unknown_and_partial_names() {
        assert_eq!(Flag::from_name("typo"), None);
        assert_eq!(Flag::from_name("NUnit"), None);
        assert_eq!(Flag::from_name(""), None);
    }

    #[test]
    fn only_double_dash_introduces_a_flag() {
        assert!(is_flag("--NUnitXml"));
        assert!(is_flag("--"));
        assert!(!is_flag("-x"));
        assert!(!is_flag("a.dll"));
    }
}
