//! Classification of collision group names.

/// Physical category of a collision group, taken from the last two characters
/// of its name (`"Q11ei"` is an electron-ion group of kind `"Q11"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupType {
    /// `ee`: the electron self pair.
    ElectronElectron,
    /// `ei`: the electron with every species.
    ElectronIon,
    /// `ii`: heavy self pairs.
    IonIonDiagonal,
    /// `ij`: every heavy-heavy pair.
    IonIonOffDiagonal,
    Invalid,
}

impl GroupType {
    pub const SUFFIX_LEN: usize = 2;

    /// Exact, case-sensitive match on the name's suffix.
    ///
    /// Names shorter than two bytes are `Invalid`.
    pub fn classify(name: &str) -> GroupType {
        match group_suffix(name).map(str::as_bytes) {
            Some(b"ee") => GroupType::ElectronElectron,
            Some(b"ei") => GroupType::ElectronIon,
            Some(b"ii") => GroupType::IonIonDiagonal,
            Some(b"ij") => GroupType::IonIonOffDiagonal,
            _ => GroupType::Invalid,
        }
    }

    /// Groups involving the electron follow the electron temperature.
    pub fn is_electron_driven(self) -> bool {
        matches!(self, GroupType::ElectronElectron | GroupType::ElectronIon)
    }
}

/// Last two characters of `name`, if it has them.
pub fn group_suffix(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(GroupType::SUFFIX_LEN)?;
    name.get(split..)
}

/// Integral kind of a group name, i.e. the name without its suffix.
pub fn group_kind(name: &str) -> Option<&str> {
    let split = name.len().checked_sub(GroupType::SUFFIX_LEN)?;
    name.get(..split)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_suffixes() {
        assert_eq!(GroupType::classify("Q11ee"), GroupType::ElectronElectron);
        assert_eq!(GroupType::classify("Q11ei"), GroupType::ElectronIon);
        assert_eq!(GroupType::classify("Q22ii"), GroupType::IonIonDiagonal);
        assert_eq!(GroupType::classify("Q11ij"), GroupType::IonIonOffDiagonal);
    }

    #[test]
    fn no_case_folding() {
        assert_eq!(GroupType::classify("Q11EE"), GroupType::Invalid);
        assert_eq!(GroupType::classify("Q11Ij"), GroupType::Invalid);
        assert_eq!(GroupType::classify("Q11ji"), GroupType::Invalid);
    }

    #[test]
    fn short_names_are_invalid() {
        assert_eq!(GroupType::classify(""), GroupType::Invalid);
        assert_eq!(GroupType::classify("e"), GroupType::Invalid);
        assert_eq!(GroupType::classify("ee"), GroupType::ElectronElectron);
    }

    #[test]
    fn kind_strips_suffix() {
        assert_eq!(group_kind("Q11ij"), Some("Q11"));
        assert_eq!(group_kind("Bstij"), Some("Bst"));
        assert_eq!(group_suffix("Q22ii"), Some("ii"));
        assert_eq!(group_kind("i"), None);
    }

    #[test]
    fn driving_temperature_selection() {
        assert!(GroupType::ElectronElectron.is_electron_driven());
        assert!(GroupType::ElectronIon.is_electron_driven());
        assert!(!GroupType::IonIonDiagonal.is_electron_driven());
        assert!(!GroupType::IonIonOffDiagonal.is_electron_driven());
    }
}
