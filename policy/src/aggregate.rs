//! Asset aggregation — the shared primitive under both policies.

use agora_types::{AssetId, Value};

/// Sum the quantity of `target` across a collection of value bundles.
///
/// Absence of `target` in a bundle contributes zero, the order of bundles is
/// irrelevant, and there are no error paths. Addition saturates: overflow is
/// unreachable while quantities are bounded by issued supply, but a validator
/// must not panic on adversarial input either.
///
/// Keeping this rule isolated (a plain sum, no weighting, no deduplication by
/// input) is what makes the authorization predicates auditable.
pub fn sum_asset<'a, I>(bundles: I, target: &AssetId) -> u128
where
    I: IntoIterator<Item = &'a Value>,
{
    bundles.into_iter().fold(0u128, |total, bundle| {
        total.saturating_add(bundle.quantity_of(target))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use agora_types::{AssetName, PolicyId};

    fn asset(policy_byte: u8, name: &[u8]) -> AssetId {
        AssetId::new(
            PolicyId::new([policy_byte; 32]),
            AssetName::new(name.to_vec()).unwrap(),
        )
    }

    #[test]
    fn empty_collection_sums_to_zero() {
        let bundles: Vec<Value> = Vec::new();
        assert_eq!(sum_asset(&bundles, &asset(1, b"VOTE")), 0);
    }

    #[test]
    fn absent_asset_sums_to_zero() {
        let bundles = vec![
            Value::singleton(asset(2, b"GRANT"), 100),
            Value::singleton(asset(3, b"NFT"), 1),
        ];
        assert_eq!(sum_asset(&bundles, &asset(1, b"VOTE")), 0);
    }

    #[test]
    fn sums_across_bundles() {
        let bundles = vec![
            Value::singleton(asset(1, b"VOTE"), 3),
            Value::singleton(asset(1, b"VOTE"), 3),
        ];
        assert_eq!(sum_asset(&bundles, &asset(1, b"VOTE")), 6);
    }

    #[test]
    fn ignores_other_assets_in_same_bundle() {
        let bundle = Value::singleton(asset(1, b"VOTE"), 2)
            .checked_with(asset(2, b"GRANT"), 100)
            .unwrap();
        assert_eq!(sum_asset([&bundle], &asset(1, b"VOTE")), 2);
    }

    #[test]
    fn order_is_irrelevant() {
        let a = Value::singleton(asset(1, b"VOTE"), 2);
        let b = Value::singleton(asset(1, b"VOTE"), 9);
        let c = Value::new();
        let forward = sum_asset([&a, &b, &c], &asset(1, b"VOTE"));
        let backward = sum_asset([&c, &b, &a], &asset(1, b"VOTE"));
        assert_eq!(forward, backward);
        assert_eq!(forward, 11);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let bundles = vec![
            Value::singleton(asset(1, b"VOTE"), u128::MAX),
            Value::singleton(asset(1, b"VOTE"), u128::MAX),
        ];
        assert_eq!(sum_asset(&bundles, &asset(1, b"VOTE")), u128::MAX);
    }
}
