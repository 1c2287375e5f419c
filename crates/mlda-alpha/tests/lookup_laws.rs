//! Behavioural laws every alpha lookup must satisfy, checked on the
//! documented scenarios and on randomized inputs.

use std::thread;

use mlda_alpha::{
    Alpha, AlphaConfig, AlphaLookup, DenseAlpha, MldaError, TwoPartAlpha,
    TwoPartSymmetricAlpha, UniformAlpha, UniformSymmetricAlpha,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_close(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch: {} vs {}", a.len(), b.len());
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            (x - y).abs() < tol,
            "element {} differs: {} vs {} (tol={})",
            i, x, y, tol
        );
    }
}

fn random_vector(rng: &mut StdRng, k: usize) -> Vec<f64> {
    (0..k).map(|_| rng.gen_range(0.01..5.0)).collect()
}

// ============================================================================
// Documented scenarios
// ============================================================================

#[test]
fn test_dense_scenario() {
    let alpha = DenseAlpha::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(alpha.get_one(0).unwrap(), &[1.0, 4.0]);
    let sliced = alpha.get_range(0..2).unwrap();
    assert_eq!(sliced.get_one(1).unwrap(), alpha.get_one(1).unwrap());
    assert_eq!(sliced.get_one(1).unwrap(), &[2.0, 5.0]);
}

#[test]
fn test_uniform_scenario() {
    let alpha = UniformAlpha::from_values(vec![1.0, 4.0]).unwrap();
    assert_eq!(alpha.get_one(100).unwrap(), &[1.0, 4.0]);
    assert_eq!(alpha.get_range(0..100).unwrap().get_one(40).unwrap(), &[1.0, 4.0]);
}

#[test]
fn test_two_part_scenario() {
    let alpha = TwoPartAlpha::from_values(vec![1.0, 4.0], vec![2.0, 5.0], 12).unwrap();
    assert_eq!(alpha.get_one(11).unwrap(), &[1.0, 4.0]);
    assert_eq!(alpha.get_one(12).unwrap(), &[2.0, 5.0]);

    let sliced = alpha.get_range(5..50).unwrap();
    assert_eq!(sliced.get_one(6).unwrap(), alpha.get_one(11).unwrap());
    assert_eq!(sliced.get_one(6).unwrap(), &[1.0, 4.0]);
    assert_eq!(sliced.get_one(7).unwrap(), alpha.get_one(12).unwrap());
    assert_eq!(sliced.get_one(7).unwrap(), &[2.0, 5.0]);
}

#[test]
fn test_two_part_symmetric_scenario() {
    let alpha = TwoPartSymmetricAlpha::new(6.0, 7.0, 12, 10).unwrap();
    assert_eq!(alpha.get_one(11).unwrap(), &[6.0; 10]);
    assert_eq!(alpha.get_one(12).unwrap(), &[7.0; 10]);
}

// ============================================================================
// Randomized laws
// ============================================================================

#[test]
fn test_dense_columns_and_slices() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let k = rng.gen_range(1..8);
        let d = rng.gen_range(1..40);
        let rows: Vec<Vec<f64>> = (0..k).map(|_| random_vector(&mut rng, d)).collect();
        let alpha = DenseAlpha::from_rows(&rows).unwrap();

        for doc in 0..d {
            let expected: Vec<f64> = rows.iter().map(|r| r[doc]).collect();
            assert_close(alpha.get_one(doc).unwrap(), &expected, 1e-12);
        }
        assert!(matches!(
            alpha.get_one(d),
            Err(MldaError::DocumentOutOfRange { .. })
        ));

        let a = rng.gen_range(0..d);
        let b = rng.gen_range(a..=d);
        let sliced = alpha.get_range(a..b).unwrap();
        assert_eq!(sliced.num_docs(), b - a);
        for i in 0..b - a {
            assert_eq!(sliced.get_one(i).unwrap(), alpha.get_one(a + i).unwrap());
        }
    }
}

#[test]
fn test_uniform_every_doc_same_storage() {
    let mut rng = StdRng::seed_from_u64(11);
    let values = random_vector(&mut rng, 6);
    let alpha = UniformAlpha::from_values(values.clone()).unwrap();
    let sliced = alpha.get_range(1000..2000).unwrap();
    for _ in 0..100 {
        let doc = rng.gen::<usize>();
        assert_eq!(alpha.get_one(doc).unwrap(), values.as_slice());
        assert_eq!(
            alpha.get_one(doc).unwrap().as_ptr(),
            sliced.get_one(doc).unwrap().as_ptr()
        );
    }
}

#[test]
fn test_uniform_symmetric_every_doc() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..20 {
        let a: f64 = rng.gen_range(0.01..2.0);
        let k = rng.gen_range(1..64);
        let alpha = UniformSymmetricAlpha::new(a, k).unwrap();
        let doc = rng.gen_range(0..1_000_000);
        let v = alpha.get_one(doc).unwrap();
        assert_eq!(v.len(), k);
        assert!(v.iter().all(|&x| x == a));
    }
}

#[test]
fn test_two_part_partition_and_slicing_law() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let k = rng.gen_range(1..6);
        let first = random_vector(&mut rng, k);
        let second = random_vector(&mut rng, k);
        let cutoff = rng.gen_range(0..100);
        let alpha = TwoPartAlpha::from_values(first.clone(), second.clone(), cutoff).unwrap();

        for doc in 0..150 {
            let expected = if doc < cutoff { &first } else { &second };
            assert_eq!(alpha.get_one(doc).unwrap(), expected.as_slice());
        }

        // ranges on either side of the cutoff, straddling it, and empty
        let a = rng.gen_range(0..150);
        let b = rng.gen_range(a..=150);
        let sliced = alpha.get_range(a..b).unwrap();
        for i in 0..b - a {
            assert_eq!(sliced.get_one(i).unwrap(), alpha.get_one(a + i).unwrap());
        }

        // composition of two range queries
        let c = rng.gen_range(0..=b - a);
        let e = rng.gen_range(c..=b - a);
        let nested = sliced.get_range(c..e).unwrap();
        for i in 0..e - c {
            assert_eq!(nested.get_one(i).unwrap(), alpha.get_one(a + c + i).unwrap());
        }
    }
}

#[test]
fn test_two_part_symmetric_partition() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..20 {
        let a1: f64 = rng.gen_range(0.01..2.0);
        let a2: f64 = rng.gen_range(0.01..2.0);
        let cutoff = rng.gen_range(0..50);
        let k = rng.gen_range(1..20);
        let alpha = TwoPartSymmetricAlpha::new(a1, a2, cutoff, k).unwrap();
        for doc in 0..80 {
            let expected = if doc < cutoff { a1 } else { a2 };
            let v = alpha.get_one(doc).unwrap();
            assert_eq!(v.len(), k);
            assert!(v.iter().all(|&x| x == expected));
        }
    }
}

#[test]
fn test_compact_variants_match_materialized() {
    let configs = [
        AlphaConfig::Uniform { vector: vec![0.1, 0.2, 0.3] },
        AlphaConfig::symmetric(0.5, 3),
        AlphaConfig::TwoPart {
            first: vec![1.0, 2.0, 3.0],
            second: vec![3.0, 2.0, 1.0],
            cutoff: 17,
        },
        AlphaConfig::TwoPartSymmetric {
            alpha1: 0.1,
            alpha2: 0.9,
            cutoff: 40,
            num_topics: 3,
        },
    ];
    for config in configs {
        let alpha = config.build().unwrap();
        let dense = DenseAlpha::new(alpha.materialize(64).unwrap());
        let sliced = alpha.get_range(10..50).unwrap();
        let dense_sliced = dense.get_range(10..50).unwrap();
        for i in 0..40 {
            assert_eq!(sliced.get_one(i).unwrap(), dense_sliced.get_one(i).unwrap());
        }
    }
}

#[test]
fn test_shared_across_threads() {
    let alpha: Alpha = TwoPartSymmetricAlpha::new(0.1, 0.2, 500, 8).unwrap().into();
    thread::scope(|s| {
        for t in 0..4 {
            let alpha = &alpha;
            s.spawn(move || {
                let batch = alpha.get_range(t * 250..(t + 1) * 250).unwrap();
                for i in 0..250 {
                    let expected = if t * 250 + i < 500 { 0.1 } else { 0.2 };
                    assert_eq!(batch.get_one(i).unwrap(), &[expected; 8]);
                }
            });
        }
    });
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.json");
    std::fs::write(
        &path,
        r#"{"kind":"two_part_symmetric","alpha1":6,"alpha2":7,"cutoff":12,"num_topics":10}"#,
    )
    .unwrap();

    let config = AlphaConfig::from_json_file(&path).unwrap();
    let alpha = config.build_with_topics(10).unwrap();
    assert_eq!(
        alpha.to_string(),
        "Two part alpha split at 12, alpha1 = 6.000000, alpha2 = 7.000000"
    );

    let missing = AlphaConfig::from_json_file(&dir.path().join("missing.json"));
    assert!(matches!(missing, Err(MldaError::Io(_))));
}
