use proptest::prelude::*;
use pta_weighting::utils::gcd::gcd;
use pta_weighting::{combine, resolve, FractionTable, Mode, PtaError, ResolvedFraction, WeightCode};

fn fraction_at_most_one() -> impl Strategy<Value = ResolvedFraction> {
    (1u32..=1000).prop_flat_map(|denominator| {
        (0..=denominator).prop_map(move |numerator| ResolvedFraction::new(numerator, denominator))
    })
}

fn reduced(values: &[u64]) -> bool {
    values.iter().copied().fold(0, gcd) == 1
}

proptest! {
    #[test]
    fn percentage_codes_ignore_the_table(code in 0i64..=100) {
        let empty = FractionTable::new(Vec::new());
        let standard = FractionTable::default();

        let from_empty = resolve(WeightCode(code), &empty).unwrap();
        let from_standard = resolve(WeightCode(code), &standard).unwrap();
        prop_assert_eq!(from_empty, from_standard);
        prop_assert!(from_empty.denominator >= 1);
    }

    #[test]
    fn table_entries_resolve_verbatim(
        entries in prop::collection::vec((0u32..500, 1u32..500), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let table: Vec<String> = entries.iter().map(|(a, b)| format!("{}/{}", a, b)).collect();
        let index = pick.index(entries.len());

        let resolved = resolve(WeightCode(101 + index as i64), &table).unwrap();
        prop_assert_eq!(resolved, ResolvedFraction::new(entries[index].0, entries[index].1));
    }

    #[test]
    fn negative_codes_are_rejected(code in i64::MIN..0) {
        let is_invalid = matches!(
            resolve(WeightCode(code), &FractionTable::default()),
            Err(PtaError::InvalidWeightCode { .. })
        );
        prop_assert!(is_invalid);
    }

    #[test]
    fn two_term_parts_sum_to_whole(f1 in fraction_at_most_one(), f2 in fraction_at_most_one()) {
        match combine(Mode::TwoTerm, f1, f2) {
            Ok(w) => {
                prop_assert_eq!(w.numerators[0] + w.numerators[1], w.denominator);
                prop_assert_eq!(w.numerators[2], 0);
                prop_assert!(reduced(&[w.denominator, w.numerators[0], w.numerators[1]]));
            }
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn three_term_parts_sum_to_whole(f1 in fraction_at_most_one(), f2 in fraction_at_most_one()) {
        let assigned = u64::from(f1.numerator) * u64::from(f2.denominator)
            + u64::from(f2.numerator) * u64::from(f1.denominator);
        let whole = u64::from(f1.denominator) * u64::from(f2.denominator);

        match combine(Mode::ThreeTerm, f1, f2) {
            Ok(w) => {
                prop_assert_eq!(w.numerator_sum(), w.denominator);
                prop_assert!(reduced(&w.numerators));
            }
            Err(PtaError::DegenerateWeighting) => prop_assert_eq!(assigned, 0),
            Err(PtaError::OvercommittedWeighting { .. }) => prop_assert!(assigned > whole),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    #[test]
    fn recombining_equivalent_fractions_is_stable(
        f1 in fraction_at_most_one(),
        f2 in fraction_at_most_one(),
        scale in 1u32..20,
    ) {
        let scaled1 = ResolvedFraction::new(f1.numerator * scale, f1.denominator * scale);
        let scaled2 = ResolvedFraction::new(f2.numerator * scale, f2.denominator * scale);

        for mode in [Mode::TwoTerm, Mode::ThreeTerm] {
            let original = combine(mode, f1, f2).ok();
            let scaled = combine(mode, scaled1, scaled2).ok();
            prop_assert_eq!(original, scaled);
        }
    }
}
