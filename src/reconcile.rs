//! Set reconciliation between referenced and physical image paths.

use std::collections::BTreeSet;

/// The outcome of reconciling every extracted reference against the
/// physical image set. All three sets are deduplicated by exact string
/// match.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Union of every reference set.
    pub all_referenced: BTreeSet<String>,
    /// Referenced paths with no physical file behind them.
    pub missing: BTreeSet<String>,
    /// Physical files never referenced by any source.
    pub unused: BTreeSet<String>,
}

/// Computes the missing and unused sets from the per-source reference
/// sequences and the physical image set. Pure function of its inputs.
pub fn reconcile(references: &[&[String]], physical: &BTreeSet<String>) -> Reconciliation {
    let all_referenced: BTreeSet<String> = references
        .iter()
        .flat_map(|refs| refs.iter().cloned())
        .collect();

    let missing = all_referenced.difference(physical).cloned().collect();
    let unused = physical.difference(&all_referenced).cloned().collect();

    Reconciliation {
        all_referenced,
        missing,
        unused,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn physical(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| (*p).to_string()).collect()
    }

    fn refs(paths: &[&str]) -> Vec<String> {
        paths.iter().map(|p| (*p).to_string()).collect()
    }

    #[test]
    fn test_all_present_nothing_unused() {
        let phys = physical(&["/images/products/a.jpg"]);
        let r1 = refs(&["/images/products/a.jpg"]);

        let recon = reconcile(&[&r1, &[], &[]], &phys);
        assert!(recon.missing.is_empty());
        assert!(recon.unused.is_empty());
    }

    #[test]
    fn test_unused_physical_file() {
        let phys = physical(&["/images/products/a.jpg", "/images/products/b.png"]);
        let r1 = refs(&["/images/products/a.jpg"]);

        let recon = reconcile(&[&r1, &[], &[]], &phys);
        assert!(recon.missing.is_empty());
        assert_eq!(
            recon.unused.iter().collect::<Vec<_>>(),
            vec!["/images/products/b.png"]
        );
    }

    #[test]
    fn test_missing_referenced_file() {
        let phys = physical(&[]);
        let r1 = refs(&["/images/products/ghost.jpg"]);

        let recon = reconcile(&[&r1, &[], &[]], &phys);
        assert_eq!(
            recon.missing.iter().collect::<Vec<_>>(),
            vec!["/images/products/ghost.jpg"]
        );
        assert!(recon.unused.is_empty());
    }

    #[test]
    fn test_duplicates_collapse_in_union() {
        let phys = physical(&[]);
        let r1 = refs(&["x.jpg", "x.jpg"]);
        let r2 = refs(&["x.jpg"]);

        let recon = reconcile(&[&r1, &r2, &[]], &phys);
        assert_eq!(recon.all_referenced.len(), 1);
        assert_eq!(recon.missing.len(), 1);
    }

    #[test]
    fn test_equality_is_exact_string_match() {
        // No case folding or path normalization beyond string equality.
        let phys = physical(&["/images/products/A.jpg"]);
        let r1 = refs(&["/images/products/a.jpg"]);

        let recon = reconcile(&[&r1, &[], &[]], &phys);
        assert_eq!(recon.missing.len(), 1);
        assert_eq!(recon.unused.len(), 1);
    }

    #[test]
    fn test_missing_disjoint_from_physical() {
        let phys = physical(&["/a.jpg", "/b.png"]);
        let r1 = refs(&["/a.jpg", "/ghost.jpg"]);
        let r2 = refs(&["/b.png", "/phantom.webp"]);

        let recon = reconcile(&[&r1, &r2, &[]], &phys);
        assert!(recon.missing.intersection(&phys).next().is_none());
    }

    #[test]
    fn test_unused_disjoint_from_referenced() {
        let phys = physical(&["/a.jpg", "/b.png", "/c.webp"]);
        let r1 = refs(&["/a.jpg"]);

        let recon = reconcile(&[&r1, &[], &[]], &phys);
        assert!(
            recon
                .unused
                .intersection(&recon.all_referenced)
                .next()
                .is_none()
        );
    }
}
