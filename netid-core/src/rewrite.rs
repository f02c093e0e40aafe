//! Config-text rewrite rules for accepted renames.
//!
//! Exactly two substitution rules exist, each scoped tightly enough to leave
//! the rest of the document alone:
//!
//! - bonding slave assignments: `BONDING_SLAVE_<n>='<name>'`
//! - ifcfg path references: `/etc/sysconfig/network/ifcfg-<name>`
//!
//! Both are pure text transforms applied to every occurrence; the document's
//! own grammar is never parsed.

use regex::{Captures, Regex};
use thiserror::Error;

use crate::decision::RenamePair;

/// Captures the slave key with its numeric index so it can be re-emitted
/// verbatim.
const BONDING_KEY_PATTERN: &str = r"(BONDING_SLAVE_\d+)=";
/// Fixed per-interface config file prefix, captured so only the trailing
/// name is replaced.
const IFCFG_PREFIX_PATTERN: &str = r"(/etc/sysconfig/network/ifcfg-)";

#[derive(Debug, Error)]
pub enum RewriteError {
    /// The old device name produced an unbuildable pattern.
    #[error("failed to build substitution pattern for {name}: {source}")]
    Pattern {
        name: String,
        source: regex::Error,
    },
}

/// Apply both substitution rules for one rename across the whole document.
pub fn apply_rename(text: &str, rename: &RenamePair) -> Result<String, RewriteError> {
    let old = regex::escape(&rename.old_name);
    let new = rename.new_name.as_str();

    let bonding = pattern(
        &rename.old_name,
        &format!(r#"{BONDING_KEY_PATTERN}(['"]){old}(['"])"#),
    )?;
    let text = bonding.replace_all(text, |caps: &Captures| {
        // Only matching quote pairs are a bonding slave assignment.
        if caps[2] == caps[3] {
            format!("{}={}{}{}", &caps[1], &caps[2], new, &caps[3])
        } else {
            caps[0].to_string()
        }
    });

    let ifcfg = pattern(&rename.old_name, &format!(r"{IFCFG_PREFIX_PATTERN}{old}\b"))?;
    let text = ifcfg.replace_all(&text, |caps: &Captures| format!("{}{}", &caps[1], new));

    Ok(text.into_owned())
}

/// Apply a batch of renames sequentially against the evolving buffer.
pub fn apply_renames(text: &str, renames: &[RenamePair]) -> Result<String, RewriteError> {
    let mut out = text.to_string();
    for rename in renames {
        out = apply_rename(&out, rename)?;
    }
    Ok(out)
}

fn pattern(name: &str, raw: &str) -> Result<Regex, RewriteError> {
    Regex::new(raw).map_err(|source| RewriteError::Pattern {
        name: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rename(old: &str, new: &str) -> RenamePair {
        RenamePair {
            old_name: old.to_string(),
            new_name: new.to_string(),
        }
    }

    #[test]
    fn rewrites_bonding_slave_preserving_index_and_quotes() {
        let text = "BONDING_SLAVE_1='eth0'\nBONDING_SLAVE_2='eth1'\n";
        let out = apply_rename(text, &rename("eth0", "enp1s0f0")).expect("rewrite");
        assert_eq!(out, "BONDING_SLAVE_1='enp1s0f0'\nBONDING_SLAVE_2='eth1'\n");
    }

    #[test]
    fn preserves_double_quote_style() {
        let text = r#"BONDING_SLAVE_0="eth0""#;
        let out = apply_rename(text, &rename("eth0", "enp1s0f0")).expect("rewrite");
        assert_eq!(out, r#"BONDING_SLAVE_0="enp1s0f0""#);
    }

    #[test]
    fn leaves_mismatched_quotes_alone() {
        let text = r#"BONDING_SLAVE_1='eth0""#;
        let out = apply_rename(text, &rename("eth0", "enp1s0f0")).expect("rewrite");
        assert_eq!(out, text);
    }

    #[test]
    fn rewrites_ifcfg_path_reference() {
        let text = "create:\n  - path: /etc/sysconfig/network/ifcfg-eth0\n";
        let out = apply_rename(text, &rename("eth0", "enp1s0f0")).expect("rewrite");
        assert_eq!(out, "create:\n  - path: /etc/sysconfig/network/ifcfg-enp1s0f0\n");
    }

    #[test]
    fn bare_name_without_prefix_is_untouched() {
        let text = "name: eth0\npath: /etc/sysconfig/network/ifcfg-eth0\n";
        let out = apply_rename(text, &rename("eth0", "enp1s0f0")).expect("rewrite");
        assert_eq!(out, "name: eth0\npath: /etc/sysconfig/network/ifcfg-enp1s0f0\n");
    }

    #[test]
    fn longer_interface_names_do_not_partially_match() {
        let text = "/etc/sysconfig/network/ifcfg-eth10\nBONDING_SLAVE_1='eth10'\n";
        let out = apply_rename(text, &rename("eth1", "enp2s0")).expect("rewrite");
        assert_eq!(out, text);
    }

    #[test]
    fn replaces_every_occurrence() {
        let text = "/etc/sysconfig/network/ifcfg-eth0\n\
                    BONDING_SLAVE_0='eth0'\n\
                    /etc/sysconfig/network/ifcfg-eth0\n";
        let out = apply_rename(text, &rename("eth0", "enp1s0f0")).expect("rewrite");
        assert_eq!(
            out,
            "/etc/sysconfig/network/ifcfg-enp1s0f0\n\
             BONDING_SLAVE_0='enp1s0f0'\n\
             /etc/sysconfig/network/ifcfg-enp1s0f0\n"
        );
    }

    #[test]
    fn second_pass_is_a_no_op() {
        let text = "BONDING_SLAVE_1='eth0'\n/etc/sysconfig/network/ifcfg-eth0\n";
        let pair = rename("eth0", "enp1s0f0");
        let once = apply_rename(text, &pair).expect("rewrite");
        let twice = apply_rename(&once, &pair).expect("rewrite");
        assert_eq!(once, twice);
    }

    #[test]
    fn batch_applies_sequentially_over_the_same_buffer() {
        let text = "BONDING_SLAVE_1='eth0'\nBONDING_SLAVE_2='eth1'\n";
        let renames = vec![rename("eth0", "enp1s0f0"), rename("eth1", "enp1s0f1")];
        let out = apply_renames(text, &renames).expect("rewrite");
        assert_eq!(out, "BONDING_SLAVE_1='enp1s0f0'\nBONDING_SLAVE_2='enp1s0f1'\n");
    }
}
