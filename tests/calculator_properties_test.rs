use minor_ren::{calculate_minor_ren, MinorRenError, MinorRenResult, Palace, MINOR_REN_NAMES};

#[test]
fn test_concrete_examples() {
    let names = calculate_minor_ren(1, 1, 1).unwrap();
    assert_eq!(names.map(Palace::name), ["大安", "大安", "大安"]);

    let names = calculate_minor_ren(3, 4, 5).unwrap();
    assert_eq!(
        names,
        [
            Palace::ALL[2],
            Palace::ALL[5],
            Palace::ALL[3],
        ]
    );
}

#[test]
fn test_labels_always_from_table_and_deterministic() {
    for x in 1..=30 {
        for y in 1..=30 {
            for z in [1, 2, 7, 13, 60, 1_000_003] {
                let first = calculate_minor_ren(x, y, z).unwrap();
                let second = calculate_minor_ren(x, y, z).unwrap();
                assert_eq!(first, second);
                for palace in first {
                    assert!(MINOR_REN_NAMES.contains(&palace.name()));
                }
            }
        }
    }
}

/// 各宮以 6 為週期
#[test]
fn test_period_six_invariance() {
    for x in 1..=12 {
        for y in 1..=12 {
            for z in 1..=12 {
                let base = calculate_minor_ren(x, y, z).unwrap();

                // 第一宮只取決於 x
                assert_eq!(calculate_minor_ren(x + 6, y, z).unwrap()[0], base[0]);
                // 第二宮只取決於 x + y
                assert_eq!(calculate_minor_ren(x, y + 6, z).unwrap()[1], base[1]);
                assert_eq!(calculate_minor_ren(x + 1, y + 5, z).unwrap()[1], base[1]);
                // 第三宮只取決於 x + y + z
                assert_eq!(calculate_minor_ren(x, y, z + 6).unwrap()[2], base[2]);
                assert_eq!(calculate_minor_ren(x + 2, y + 2, z + 2).unwrap()[2], base[2]);
            }
        }
    }
}

#[test]
fn test_any_argument_below_one_fails() {
    let bad_inputs = [
        (0, 1, 1),
        (1, 0, 1),
        (1, 1, 0),
        (-1, 5, 5),
        (5, 5, i64::MIN),
        (0, 0, 0),
    ];
    for (x, y, z) in bad_inputs {
        let err = calculate_minor_ren(x, y, z).unwrap_err();
        assert!(
            matches!(err, MinorRenError::InvalidInput { .. }),
            "expected InvalidInput for ({x}, {y}, {z}), got {err:?}"
        );
        assert!(MinorRenResult::new(x, y, z).is_err());
    }
}

#[test]
fn test_result_keeps_inputs() {
    let result = MinorRenResult::new(7, 8, 9).unwrap();
    assert_eq!((result.x, result.y, result.z), (7, 8, 9));
    assert_eq!(result.names, calculate_minor_ren(7, 8, 9).unwrap());
}
