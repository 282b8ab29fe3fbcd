//! Fixed repair dictionaries
//!
//! Closed lists the checker matches against: known misspellings (including
//! the irregular-verb misproductions learners drill on) and the gerunds
//! whose final consonant doubles. These are lookup tables, not a real
//! dictionary; anything outside them is simply not caught.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Known misspelling -> correction, exact match on the normalized word.
pub static MISSPELLINGS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // common English slips
        ("recieve", "receive"),
        ("teh", "the"),
        ("wich", "which"),
        ("becuase", "because"),
        ("freind", "friend"),
        ("definately", "definitely"),
        ("seperate", "separate"),
        ("tommorow", "tomorrow"),
        ("untill", "until"),
        ("wierd", "weird"),
        ("yesturday", "yesterday"),
        ("studing", "studying"),
        // irregular-verb misproductions
        ("goed", "went"),
        ("eated", "ate"),
        ("runned", "ran"),
        ("taked", "took"),
        ("maked", "made"),
        ("comed", "came"),
        ("buyed", "bought"),
        ("catched", "caught"),
        ("teached", "taught"),
        ("thinked", "thought"),
        ("falled", "fell"),
        ("drinked", "drank"),
        ("swimmed", "swam"),
        ("breaked", "broke"),
        ("speaked", "spoke"),
        ("stealed", "stole"),
        ("writed", "wrote"),
    ])
});

/// Gerunds whose consonant doubles before `ing`. Used by the doubling
/// repair: `runing` is fixable because `running` is here and `runing` is
/// not.
pub static DOUBLED_GERUNDS: &[&str] = &["running", "planning", "beginning", "winning", "spinning"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misspellings_map_to_their_corrections() {
        assert_eq!(MISSPELLINGS.get("recieve"), Some(&"receive"));
        assert_eq!(MISSPELLINGS.get("goed"), Some(&"went"));
        assert_eq!(MISSPELLINGS.get("receive"), None);
    }

    #[test]
    fn doubled_gerund_list_contains_no_undoubled_forms() {
        for word in DOUBLED_GERUNDS {
            let stem = word.strip_suffix("ing").unwrap();
            let undoubled = format!("{}ing", &stem[..stem.len() - 1]);
            assert!(!DOUBLED_GERUNDS.contains(&undoubled.as_str()));
        }
    }
}
