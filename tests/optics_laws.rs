#![cfg(feature = "optics")]
//! Property-based tests for the optics laws.
//!
//! The optics constructors trust their functions to be lawful; this suite
//! is where that trust is checked. Round-trip laws for every built-in
//! Iso, the three Lens laws (including iso-derived lenses), the Prism
//! laws, and the Traversal identity/composition laws are verified with
//! proptest-generated data.

use kleisli::control::Either;
use kleisli::optics::{
    FunctionIso, Iso, Lens, Prism, Traversal, VecTraversal, iso_add, iso_identity, iso_millis,
    iso_reverse_vec, iso_sub, iso_swap, iso_swap_either, iso_utf8, prism_single,
};
use kleisli::{lens, prism};
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct Account {
    name: String,
    balance: i64,
}

fn arbitrary_account() -> impl Strategy<Value = Account> {
    ("[a-z]{1,12}", any::<i64>()).prop_map(|(name, balance)| Account { name, balance })
}

fn arbitrary_either() -> impl Strategy<Value = Either<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        "[a-z]{0,10}".prop_map(Either::Right),
    ]
}

proptest! {
    // ==========================================================================
    // Iso round-trip laws
    // ==========================================================================

    // Concrete spec case: metres to kilometres and back.
    #[test]
    fn prop_metres_kilometres_roundtrip(metres in -1.0e9_f64..1.0e9) {
        let metres_to_kilometres =
            FunctionIso::new(|m: f64| m / 1000.0, |km: f64| km * 1000.0);

        let roundtripped = metres_to_kilometres.reverse_get(metres_to_kilometres.get(metres));
        prop_assert!((roundtripped - metres).abs() <= metres.abs() * 1e-12);
    }

    #[test]
    fn prop_iso_identity_roundtrip(value in any::<i64>()) {
        let identity_iso = iso_identity::<i64>();
        prop_assert_eq!(identity_iso.reverse_get(identity_iso.get(value)), value);
        prop_assert_eq!(identity_iso.get(identity_iso.reverse_get(value)), value);
    }

    #[test]
    fn prop_iso_add_roundtrip(value in any::<i64>(), amount in any::<i64>()) {
        let shifted = iso_add(amount);
        prop_assert_eq!(shifted.reverse_get(shifted.get(value)), value);
        prop_assert_eq!(shifted.get(shifted.reverse_get(value)), value);
    }

    // iso_sub(n) behaves as iso_add(-n).
    #[test]
    fn prop_iso_sub_is_negated_add(value in any::<i64>(), amount in any::<i64>()) {
        let subtracted = iso_sub(amount);
        let negated_add = iso_add(amount.wrapping_neg());
        prop_assert_eq!(subtracted.get(value), negated_add.get(value));
        prop_assert_eq!(subtracted.reverse_get(value), negated_add.reverse_get(value));
    }

    #[test]
    fn prop_iso_swap_self_inverse(first in any::<i32>(), second in "[a-z]{0,10}") {
        let swap_iso = iso_swap::<i32, String>();
        let pair = (first, second);
        prop_assert_eq!(swap_iso.reverse_get(swap_iso.get(pair.clone())), pair);
    }

    #[test]
    fn prop_iso_swap_either_self_inverse(value in arbitrary_either()) {
        let swap_iso = iso_swap_either::<i32, String>();
        prop_assert_eq!(swap_iso.reverse_get(swap_iso.get(value.clone())), value);
    }

    // ReverseArray-style self inverse: get == reverse_get, applied twice is id.
    #[test]
    fn prop_iso_reverse_vec_self_inverse(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let reverse_iso = iso_reverse_vec::<i32>();
        prop_assert_eq!(
            reverse_iso.get(items.clone()),
            reverse_iso.reverse_get(items.clone())
        );
        prop_assert_eq!(reverse_iso.get(reverse_iso.get(items.clone())), items);
    }

    #[test]
    fn prop_iso_utf8_roundtrips_any_string(text in ".{0,24}") {
        let utf8 = iso_utf8();
        prop_assert_eq!(utf8.reverse_get(utf8.get(text.clone())), text);
    }

    // Keep the range inside what a Duration of milliseconds can hold.
    #[test]
    fn prop_iso_millis_roundtrip(timestamp in -253_402_300_799_000_i64..253_402_300_799_000) {
        let millis = iso_millis();
        prop_assert_eq!(millis.reverse_get(millis.get(timestamp)), timestamp);
    }

    // Iso composition is associative.
    #[test]
    fn prop_iso_compose_associative(value in any::<i64>(), a in any::<i64>(), b in any::<i64>()) {
        let left = iso_add(a).compose(iso_add(b)).compose(iso_add(1));
        let right = iso_add(a).compose(iso_add(b).compose(iso_add(1)));
        prop_assert_eq!(left.get(value), right.get(value));
        prop_assert_eq!(left.reverse_get(value), right.reverse_get(value));
    }

    // ==========================================================================
    // Lens laws
    // ==========================================================================

    // GetPut: putting back what was got changes nothing.
    #[test]
    fn prop_lens_get_put_law(account in arbitrary_account()) {
        let balance_lens = lens!(Account, balance);
        let focus = balance_lens.get(&account);
        prop_assert_eq!(balance_lens.set(account.clone(), focus), account);
    }

    // PutGet: getting what was put yields the put value.
    #[test]
    fn prop_lens_put_get_law(account in arbitrary_account(), value in any::<i64>()) {
        let balance_lens = lens!(Account, balance);
        let updated = balance_lens.set(account, value);
        prop_assert_eq!(balance_lens.get(&updated), value);
    }

    // PutPut: the second put wins.
    #[test]
    fn prop_lens_put_put_law(
        account in arbitrary_account(),
        first in any::<i64>(),
        second in any::<i64>(),
    ) {
        let balance_lens = lens!(Account, balance);
        let twice = balance_lens.set(balance_lens.set(account.clone(), first), second);
        let once = balance_lens.set(account, second);
        prop_assert_eq!(twice, once);
    }

    // Iso-derived lenses satisfy PutGet and GetPut; their set rebuilds the
    // source wholesale, which for a lawful iso is exactly GetPut-compatible.
    #[test]
    fn prop_iso_derived_lens_laws(value in any::<i64>(), replacement in any::<i64>()) {
        let shifted_lens = iso_add(42).to_lens();

        // GetPut
        let focus = shifted_lens.get(&value);
        prop_assert_eq!(shifted_lens.set(value, focus), value);

        // PutGet
        prop_assert_eq!(shifted_lens.get(&shifted_lens.set(value, replacement)), replacement);

        // PutPut
        let twice = shifted_lens.set(shifted_lens.set(value, focus), replacement);
        prop_assert_eq!(twice, shifted_lens.set(value, replacement));
    }

    // Composed lenses stay lawful.
    #[test]
    fn prop_composed_lens_put_get_law(
        name in "[a-z]{1,12}",
        balance in any::<i64>(),
        new_balance in any::<i64>(),
    ) {
        #[derive(Clone, PartialEq, Debug)]
        struct Bank { primary: Account }

        let primary_balance = lens!(Bank, primary).compose(lens!(Account, balance));
        let bank = Bank { primary: Account { name, balance } };

        let updated = primary_balance.set(bank, new_balance);
        prop_assert_eq!(primary_balance.get(&updated), new_balance);
    }

    // ==========================================================================
    // Prism laws
    // ==========================================================================

    // PreviewReview: previewing a reviewed value yields it back.
    #[test]
    fn prop_prism_preview_review_law(payload in "[a-z]{0,12}") {
        #[derive(Clone, PartialEq, Debug)]
        #[allow(dead_code)]
        enum Field { Text(String), Number(i64) }

        let text_prism = prism!(Field, Text);
        prop_assert_eq!(
            text_prism.preview(&text_prism.review(payload.clone())),
            Some(payload)
        );
    }

    // ReviewPreview: when preview succeeds, review rebuilds the source.
    #[test]
    fn prop_prism_review_preview_law(number in any::<i64>()) {
        #[derive(Clone, PartialEq, Debug)]
        #[allow(dead_code)]
        enum Field { Text(String), Number(i64) }

        let number_prism = prism!(Field, Number);
        let source = Field::Number(number);
        if let Some(previewed) = number_prism.preview(&source) {
            prop_assert_eq!(number_prism.review(previewed), source);
        }
    }

    // The singleton prism is lawful for every payload.
    #[test]
    fn prop_prism_single_laws(value in any::<i32>(), items in prop::collection::vec(any::<i32>(), 0..8)) {
        let single = prism_single::<i32>();

        // PreviewReview
        prop_assert_eq!(single.preview(&single.review(value)), Some(value));

        // ReviewPreview on arbitrary vectors
        if let Some(previewed) = single.preview(&items) {
            prop_assert_eq!(single.review(previewed), items);
        }
    }

    // Prism-iso composition preserves the prism laws.
    #[test]
    fn prop_prism_iso_composition_lawful(number in any::<i64>()) {
        #[derive(Clone, PartialEq, Debug)]
        #[allow(dead_code)]
        enum Field { Number(i64), Missing }

        let shifted = prism!(Field, Number).compose_iso(iso_add(7));
        prop_assert_eq!(shifted.preview(&shifted.review(number)), Some(number));

        let source = Field::Number(number);
        if let Some(previewed) = shifted.preview(&source) {
            prop_assert_eq!(shifted.review(previewed), source);
        }
    }

    // ==========================================================================
    // Traversal laws
    // ==========================================================================

    // Identity: modifying with the identity changes nothing.
    #[test]
    fn prop_traversal_identity_law(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let traversal: VecTraversal<i32> = VecTraversal::new();
        prop_assert_eq!(traversal.modify_all(items.clone(), |n| n), items);
    }

    // Composition: two modifications fuse into one.
    #[test]
    fn prop_traversal_composition_law(items in prop::collection::vec(any::<i32>(), 0..32)) {
        let traversal: VecTraversal<i32> = VecTraversal::new();
        let sequential = traversal.modify_all(
            traversal.modify_all(items.clone(), |n| n.wrapping_add(1)),
            |n| n.wrapping_mul(3),
        );
        let fused = traversal.modify_all(items, |n| n.wrapping_add(1).wrapping_mul(3));
        prop_assert_eq!(sequential, fused);
    }
}
