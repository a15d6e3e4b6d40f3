//! Rent top-up estimates for SVM chains.
//!
//! SVM transfers pay account rent on top of the interchain gas payment. These
//! are close approximations of that rent, in lamports, not exact quotes.

use std::collections::BTreeMap;

/// Estimated rent per SVM chain, in lamports.
pub const RENT_ESTIMATES: [(&str, u64); 4] = [
    ("eclipsemainnet", 40_190),
    ("solanamainnet", 4_113_360),
    ("sonicsvm", 4_113_360),
    ("soon", 3_550),
];

/// Returns the rent estimate for `chain_name`, or `None` for chains that
/// need no rent top-up.
///
/// # Example
///
/// ```rust
/// use davinci_bridge::rent_estimate;
///
/// assert_eq!(rent_estimate("solanamainnet"), Some(4_113_360));
/// assert_eq!(rent_estimate("optimism"), None);
/// ```
pub fn rent_estimate(chain_name: &str) -> Option<u64> {
    RENT_ESTIMATES
        .iter()
        .find(|(name, _)| *name == chain_name)
        .map(|(_, lamports)| *lamports)
}

pub fn rent_estimates() -> BTreeMap<&'static str, u64> {
    RENT_ESTIMATES.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("eclipsemainnet", 40_190)]
    #[case("solanamainnet", 4_113_360)]
    #[case("sonicsvm", 4_113_360)]
    #[case("soon", 3_550)]
    fn test_known_estimates(#[case] chain: &str, #[case] lamports: u64) {
        assert_eq!(rent_estimate(chain), Some(lamports));
    }

    #[test]
    fn test_evm_chains_have_no_rent() {
        assert_eq!(rent_estimate("davinci"), None);
        assert_eq!(rent_estimate("optimism"), None);
        assert_eq!(rent_estimate(""), None);
    }

    #[test]
    fn test_rent_estimates_map() {
        let estimates = rent_estimates();
        assert_eq!(estimates.len(), 4);
        assert_eq!(estimates["soon"], 3_550);
    }
}
