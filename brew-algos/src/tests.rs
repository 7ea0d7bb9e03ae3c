use crate::*;
use brew_test::*;
use brew_types::*;
use brew_types::Tag::*;

fn both(a: &str, b: &str) -> Output {
    distance(a, b, OutputMode::Both, &CostModel::default())
}

fn both_with(a: &str, b: &str, cost: &str) -> Output {
    distance(a, b, OutputMode::Both, &cost.parse().unwrap())
}

fn text(s: &str) -> Text {
    s.chars().collect()
}

mod literal {
    use super::*;

    #[test]
    fn equal() {
        assert_eq!(both("foo", "foo"), Output::Both(0., vec![Match, Match, Match]));
    }

    #[test]
    fn all_different() {
        assert_eq!(both("foo", "bar"), Output::Both(3., vec![Subst, Subst, Subst]));
    }

    #[test]
    fn suffix_insert() {
        assert_eq!(
            both("foo", "foobar"),
            Output::Both(3., vec![Match, Match, Match, Ins, Ins, Ins])
        );
    }

    #[test]
    fn suffix_delete() {
        assert_eq!(
            both("foobar", "foo"),
            Output::Both(3., vec![Match, Match, Match, Del, Del, Del])
        );
    }

    #[test]
    fn prefix() {
        assert_eq!(both("abcd", "bcd"), Output::Both(1., vec![Del, Match, Match, Match]));
        assert_eq!(both("bcd", "abcd"), Output::Both(1., vec![Ins, Match, Match, Match]));
    }

    #[test]
    fn middle() {
        assert_eq!(
            both("abde", "abcde"),
            Output::Both(1., vec![Match, Match, Ins, Match, Match])
        );
        assert_eq!(
            both("abcde", "abde"),
            Output::Both(1., vec![Match, Match, Del, Match, Match])
        );
    }

    #[test]
    fn empty() {
        assert_eq!(both("Parrot", ""), Output::Both(6., vec![Del; 6]));
        assert_eq!(both("", "Parrot"), Output::Both(6., vec![Ins; 6]));
        assert_eq!(both("", ""), Output::Both(0., vec![]));
    }

    #[test]
    fn kitten() {
        assert_eq!(
            both("kitten", "sitting"),
            Output::Both(3., vec![Subst, Match, Match, Match, Subst, Match, Ins])
        );
    }

    #[test]
    fn zero_deletion_cost() {
        // The four free deletions at the end are reported as matches.
        assert_eq!(
            both_with("possible", "poss", "0,1,0,1"),
            Output::Both(0., vec![Match; 8])
        );
        // Along the first column deletions keep their tag.
        assert_eq!(both_with("Parrot", "", "0,1,0,1"), Output::Both(0., vec![Del; 6]));
    }

    #[test]
    fn cheap_substitution() {
        assert_eq!(
            both_with("foo", "fou", "0,1,1,0.5"),
            Output::Both(0.5, vec![Match, Match, Subst])
        );
    }

    #[test]
    fn non_minimal_match_weight() {
        // A free substitution is indistinguishable from a match.
        assert_eq!(
            both_with("abc", "abd", "0,1,1,0"),
            Output::Both(0., vec![Match, Match, Match])
        );
        // A match that costs something is labelled as a substitution.
        assert_eq!(
            both_with("abc", "xbz", "0.5,1,1,1"),
            Output::Both(2.5, vec![Subst, Subst, Subst])
        );
    }

    #[test]
    fn swap_prefers_indels() {
        assert_eq!(both_with("ab", "ba", "0,1,1,3"), Output::Both(2., vec![Del, Match, Ins]));
    }
}

mod unicode {
    use super::*;

    #[test]
    fn accent() {
        assert_eq!(
            both("cafe", "café"),
            Output::Both(1., vec![Match, Match, Match, Subst])
        );
    }

    #[test]
    fn sharp_s() {
        assert_eq!(
            both("groß", "gross"),
            Output::Both(2., vec![Match, Match, Match, Ins, Subst])
        );
    }

    #[test]
    fn greek() {
        assert_eq!(both("Σίβύλλα", "Sibylla"), Output::Both(7., vec![Subst; 7]));
    }

    #[test]
    fn bytes_are_decoded() {
        assert_eq!(
            distance_bytes("cafe".as_bytes(), "café".as_bytes(), "distance", None),
            Ok(Output::Distance(1.))
        );
    }
}

mod modes {
    use super::*;

    #[test]
    fn projections() {
        let cm = CostModel::default();
        assert_eq!(distance("foo", "fou", OutputMode::Distance, &cm), Output::Distance(1.));
        assert_eq!(
            distance("foo", "fou", OutputMode::Edits, &cm),
            Output::Edits(vec![Match, Match, Subst])
        );
        let out = distance("foo", "fou", OutputMode::Both, &cm);
        assert_eq!(out.cost(), Some(1.));
        assert_eq!(out.edits(), Some(&[Match, Match, Subst][..]));
        assert_eq!(out.to_string(), "(1, [MATCH, MATCH, SUBST])");
    }

    #[test]
    fn parse_modes() {
        assert_eq!("distance".parse::<OutputMode>(), Ok(OutputMode::Distance));
        assert_eq!("edits".parse::<OutputMode>(), Ok(OutputMode::Edits));
        assert_eq!("both".parse::<OutputMode>(), Ok(OutputMode::Both));
        assert_eq!(
            "Both".parse::<OutputMode>(),
            Err(BrewError::InvalidOutputMode("Both".into()))
        );
    }
}

mod errors {
    use super::*;

    #[test]
    fn non_text_input() {
        assert_eq!(
            distance_bytes(&[0xc3, 0x28], b"67", "both", None),
            Err(BrewError::InvalidInput { which: "source" })
        );
        assert_eq!(
            distance_bytes(b"75", &[0xff], "both", None),
            Err(BrewError::InvalidInput { which: "target" })
        );
    }

    #[test]
    fn invalid_mode() {
        assert!(matches!(
            distance_bytes(b"a", b"b", "cost", None),
            Err(BrewError::InvalidOutputMode(_))
        ));
    }

    #[test]
    fn invalid_cost() {
        assert_eq!(
            distance_bytes(b"a", b"b", "both", Some("0,1,1")),
            Err(BrewError::InvalidCost(CostViolation::Arity(3)))
        );
        assert!(matches!(
            distance_bytes(b"a", b"b", "both", Some("0,1,one,1")),
            Err(BrewError::InvalidCost(CostViolation::NotANumber { index: 2, .. }))
        ));
        assert_eq!(
            distance_bytes(b"foo", b"fou", "both", Some("(0, 1, 1, 0.5)")),
            Ok(Output::Both(0.5, vec![Match, Match, Subst]))
        );
    }
}

mod strict {
    use super::*;

    fn strict(a: &str, b: &str, cost: &str) -> Output {
        distance_with(a, b, OutputMode::Both, &cost.parse().unwrap(), Tagging::Strict)
    }

    #[test]
    fn labels_taken_edges() {
        assert_eq!(
            strict("possible", "poss", "0,1,0,1"),
            Output::Both(0., vec![Match, Match, Match, Match, Del, Del, Del, Del])
        );
        assert_eq!(
            strict("abc", "abd", "0,1,1,0"),
            Output::Both(0., vec![Match, Match, Subst])
        );
        assert_eq!(
            strict("abc", "xbz", "0.5,1,1,1"),
            Output::Both(2.5, vec![Subst, Match, Subst])
        );
    }

    #[test]
    fn agrees_with_compat_for_unit_cost() {
        for ((a, b), params) in gen_texts(Alphabet::Dna, 1) {
            let cm = CostModel::default();
            let compat = BrewDp::new(cm, Tagging::Compat).edit_path(&a, &b);
            let strict = BrewDp::new(cm, Tagging::Strict).edit_path(&a, &b);
            assert_eq!(compat, strict, "{params}");
        }
    }

    #[test]
    fn path_replays_to_cost() {
        let cms = ["0,1,1,1", "0,2,3,1", "0,1,1,0.5", "0,0,1,1", "0.5,1,1,1", "0,1,1,-1"];
        for cm in cms {
            let cm: CostModel = cm.parse().unwrap();
            let dp = BrewDp::new(cm, Tagging::Strict);
            for ((a, b), params) in gen_texts(Alphabet::Unicode, 2) {
                let path = dp.edit_path(&a, &b);
                assert_eq!(path.cigar().cost(&cm, &a, &b), Some(path.cost), "{params} {cm:?}");
            }
        }
    }
}

mod properties {
    use super::*;

    #[test]
    fn unit_cost_matches_reference() {
        let dp = BrewDp::default();
        for ((a, b), params) in gen_texts(Alphabet::Dna, 3) {
            let path = dp.edit_path(&a, &b);
            assert_eq!(path.cost, reference_unit_cost(&a, &b), "{params}");
            check_path_shape(&a, &b, &path.operations, &params);
        }
    }

    #[test]
    fn identity() {
        let dp = BrewDp::default();
        for ((a, _), params) in gen_texts(Alphabet::Unicode, 4) {
            let path = dp.edit_path(&a, &a);
            assert_eq!(path.cost, 0., "{params}");
            assert_eq!(path.operations, vec![Match; a.len()], "{params}");
        }
    }

    #[test]
    fn empty_sides() {
        let cm: CostModel = "0,2,3,1".parse().unwrap();
        let dp = BrewDp::new(cm, Tagging::Compat);
        for ((a, _), params) in gen_texts(Alphabet::Unicode, 5) {
            let n = a.len();
            let del = dp.edit_path(&a, &[]);
            assert_eq!(del.cost, n as Cost * cm.del, "{params}");
            assert_eq!(del.operations, vec![Del; n], "{params}");
            let ins = dp.edit_path(&[], &a);
            assert_eq!(ins.cost, n as Cost * cm.ins, "{params}");
            assert_eq!(ins.operations, vec![Ins; n], "{params}");
        }
    }

    #[test]
    fn swapping_inputs_swaps_ins_and_del() {
        for cm in ["0,1,1,1", "0,2,3,1", "0,1,4,3"] {
            let cm: CostModel = cm.parse().unwrap();
            let forward = BrewDp::new(cm, Tagging::Compat);
            let backward = BrewDp::new(cm.mirrored(), Tagging::Compat);
            for ((a, b), params) in gen_texts(Alphabet::Unicode, 6) {
                assert_eq!(
                    forward.cost(&a, &b),
                    backward.cost(&b, &a),
                    "{params} {cm:?}"
                );
            }
        }
    }

    #[test]
    fn free_deletions() {
        let dp = BrewDp::new("0,1,0,1".parse().unwrap(), Tagging::Compat);
        for ((a, b), params) in gen_texts(Alphabet::Dna, 7) {
            // Deleting everything and inserting `b` costs |b|.
            assert!(dp.cost(&a, &b) <= b.len() as Cost, "{params}");
        }
        let path = dp.edit_path(&text("possible"), &text("poss"));
        assert_eq!(path.cost, 0.);
    }
}

#[test]
fn concurrent_callers() {
    let pairs = [("foo", "fou"), ("kitten", "sitting"), ("groß", "gross")];
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let (a, b) = pairs[t % pairs.len()];
                s.spawn(move || (t, both(a, b)))
            })
            .collect();
        for h in handles {
            let (t, out) = h.join().unwrap();
            let (a, b) = pairs[t % pairs.len()];
            assert_eq!(out, both(a, b));
        }
    });
}
