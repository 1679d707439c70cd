use proptest::prelude::*;

use agora_types::{AssetId, AssetName, PolicyId, TxHash, Value};

fn arb_asset_id() -> impl Strategy<Value = AssetId> {
    (prop::array::uniform32(0u8..), prop::collection::vec(any::<u8>(), 0..=32)).prop_map(
        |(policy, name)| AssetId::new(PolicyId::new(policy), AssetName::new(name).unwrap()),
    )
}

proptest! {
    /// PolicyId roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn policy_id_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = PolicyId::new(bytes);
        prop_assert_eq!(id.as_bytes(), &bytes);
    }

    /// PolicyId::is_zero is true only for all-zero bytes.
    #[test]
    fn policy_id_is_zero_correct(bytes in prop::array::uniform32(0u8..)) {
        let id = PolicyId::new(bytes);
        prop_assert_eq!(id.is_zero(), bytes == [0u8; 32]);
    }

    /// TxHash roundtrip: new -> as_bytes produces identical bytes.
    #[test]
    fn tx_hash_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let hash = TxHash::new(bytes);
        prop_assert_eq!(hash.as_bytes(), &bytes);
    }

    /// AssetName accepts any byte string up to 32 bytes and rejects longer.
    #[test]
    fn asset_name_length_bound(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let result = AssetName::new(bytes.clone());
        prop_assert_eq!(result.is_ok(), bytes.len() <= 32);
    }

    /// PolicyId bincode serialization roundtrip.
    #[test]
    fn policy_id_bincode_roundtrip(bytes in prop::array::uniform32(0u8..)) {
        let id = PolicyId::new(bytes);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: PolicyId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// AssetId bincode serialization roundtrip.
    #[test]
    fn asset_id_bincode_roundtrip(asset in arb_asset_id()) {
        let encoded = bincode::serialize(&asset).unwrap();
        let decoded: AssetId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, asset);
    }

    /// Value bincode serialization roundtrip.
    #[test]
    fn value_bincode_roundtrip(asset in arb_asset_id(), quantity in 0u128..u128::MAX / 2) {
        let bundle = Value::singleton(asset, quantity);
        let encoded = bincode::serialize(&bundle).unwrap();
        let decoded: Value = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, bundle);
    }

    /// A singleton bundle reports exactly the quantity it was built with.
    #[test]
    fn singleton_quantity(asset in arb_asset_id(), quantity in any::<u128>()) {
        let bundle = Value::singleton(asset.clone(), quantity);
        prop_assert_eq!(bundle.quantity_of(&asset), quantity);
    }

    /// An asset absent from a bundle always has quantity zero.
    #[test]
    fn absent_asset_is_zero(a in arb_asset_id(), b in arb_asset_id(), quantity in any::<u128>()) {
        prop_assume!(a != b);
        let bundle = Value::singleton(a, quantity);
        prop_assert_eq!(bundle.quantity_of(&b), 0);
    }

    /// checked_add is commutative when it succeeds.
    #[test]
    fn checked_add_commutative(
        a in arb_asset_id(),
        b in arb_asset_id(),
        qa in 0u128..u128::MAX / 2,
        qb in 0u128..u128::MAX / 2,
    ) {
        let va = Value::singleton(a, qa);
        let vb = Value::singleton(b, qb);
        prop_assert_eq!(va.checked_add(&vb), vb.checked_add(&va));
    }

    /// checked_with accumulates quantities for the same asset.
    #[test]
    fn checked_with_accumulates(
        asset in arb_asset_id(),
        qa in 0u128..u128::MAX / 2,
        qb in 0u128..u128::MAX / 2,
    ) {
        let bundle = Value::singleton(asset.clone(), qa)
            .checked_with(asset.clone(), qb)
            .unwrap();
        prop_assert_eq!(bundle.quantity_of(&asset), qa + qb);
    }
}
