use gfparity::gf::{Galois, GF16, GF8};
use gfparity::{FieldParams, Gf16Params, Gf8Params, GfError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn check_tables(gf: &Galois) {
    let max = gf.max();
    let exp = gf.exp_table();
    let log = gf.log_table();
    assert_eq!(exp.len(), 2 * max);
    assert_eq!(log.len(), max + 1);
    for v in 1..=max {
        assert_eq!(exp[log[v] as usize] as usize, v, "exp[log[{v}]]");
    }
    for i in 0..max {
        assert_eq!(log[exp[i] as usize] as usize, i, "log[exp[{i}]]");
        assert_eq!(exp[i], exp[i + max], "periodicity at {i}");
    }
}

#[test]
fn gf8_exp_log_roundtrip() {
    check_tables(&GF8);
}

#[test]
fn gf16_exp_log_roundtrip() {
    check_tables(&GF16);
}

#[test]
fn gf8_known_powers() {
    let expected = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1d, 0x3a, 0x74, 0xe8];
    for (i, &e) in expected.iter().enumerate() {
        assert_eq!(GF8.to_exp(i), e);
    }
    assert_eq!(GF8.max(), 255);
    assert_eq!(Gf8Params::MAX, GF8.max());
    assert_eq!(GF8.to_exp(255), 1);
}

#[test]
fn gf16_known_powers() {
    assert_eq!(GF16.max(), 65535);
    assert_eq!(Gf16Params::MAX, GF16.max());
    assert_eq!(GF16.polynomial(), Gf16Params::POLYNOMIAL);
    assert_eq!(GF16.to_exp(15), 0x8000);
    assert_eq!(GF16.to_exp(16), 0x100B);
    assert_eq!(GF16.to_log(0x100B), 16);
}

#[test]
fn mul_inv_is_one() {
    for a in 1..=255u16 {
        assert_eq!(GF8.mul(a, GF8.inv(a).unwrap()), 1, "a={a}");
    }
    for a in 1..=65535u16 {
        assert_eq!(GF16.mul(a, GF16.inv(a).unwrap()), 1, "a={a}");
    }
}

#[test]
fn mul_by_zero_and_one() {
    for a in 0..=255u16 {
        assert_eq!(GF8.mul(a, 0), 0);
        assert_eq!(GF8.mul(0, a), 0);
        assert_eq!(GF8.mul(a, 1), a);
    }
}

#[test]
fn gf8_div_undoes_mul() {
    for a in 1..=255u16 {
        for b in 1..=255u16 {
            assert_eq!(GF8.div(GF8.mul(a, b), b).unwrap(), a, "a={a} b={b}");
        }
    }
}

#[test]
fn gf16_div_undoes_mul() {
    let mut rng = StdRng::seed_from_u64(0x1100B);
    for _ in 0..20_000 {
        let a = rng.gen_range(1..=u16::MAX);
        let b = rng.gen_range(1..=u16::MAX);
        assert_eq!(GF16.div(GF16.mul(a, b), b).unwrap(), a, "a={a} b={b}");
    }
}

#[test]
fn zero_divisor_is_an_error() {
    assert_eq!(GF8.div(5, 0), Err(GfError::DivisionByZero));
    assert_eq!(GF8.div(0, 0), Err(GfError::DivisionByZero));
    assert_eq!(GF8.div(0, 7), Ok(0));
    assert_eq!(GF16.inv(0), Err(GfError::ZeroInverse));
}

#[test]
fn exp_variants_match_scalar_ops() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..5_000 {
        let a: u16 = rng.gen_range(0..=255);
        let e = rng.gen_range(0..1000usize);
        let ae = GF8.pow_alpha(e);
        assert_eq!(GF8.mul_exp(a, e), GF8.mul(a, ae));
        assert_eq!(GF8.div_exp(a, e), GF8.div(a, ae).unwrap());
    }
}

#[test]
fn to_pos_counts_from_block_end() {
    assert_eq!(GF8.to_pos(10, GF8.to_exp(0)), Some(9));
    assert_eq!(GF8.to_pos(10, GF8.to_exp(3)), Some(6));
    assert_eq!(GF16.to_pos(1000, GF16.to_exp(999)), Some(0));
}

#[test]
fn to_pos_rejects_positions_past_the_block() {
    assert_eq!(GF8.to_pos(10, GF8.to_exp(10)), None);
    assert_eq!(GF8.to_pos(0, 1), None);
    assert_eq!(GF8.to_pos(10, 0), None);
}

#[test]
fn small_field_is_built_from_any_primitive_polynomial() {
    // x^4 + x + 1
    let gf = Galois::new(0x13, 4).unwrap();
    assert_eq!(gf.max(), 15);
    assert_eq!(gf.polynomial(), 0x13);
    assert_eq!(gf.width(), 4);
    check_tables(&gf);
}

#[test]
fn non_primitive_polynomial_is_rejected() {
    // x^8 + x^4 + x^3 + x + 1 is irreducible but x has order 51.
    match Galois::new(0x11B, 8) {
        Err(GfError::NotPrimitive { cycle, width, .. }) => {
            assert_eq!(cycle, 51);
            assert_eq!(width, 8);
        }
        other => panic!("expected NotPrimitive, got {other:?}"),
    }
    assert!(matches!(Galois::new(0x00, 8), Err(GfError::NotPrimitive { .. })));
    // x^4 + x^3 + x^2 + x + 1 has order 5
    assert!(matches!(Galois::new(0x1F, 4), Err(GfError::NotPrimitive { cycle: 5, .. })));
}

#[test]
fn unsupported_width_is_rejected() {
    assert_eq!(Galois::new(0x1D, 0).unwrap_err(), GfError::UnsupportedWidth(0));
    assert_eq!(Galois::new(0x1D, 17).unwrap_err(), GfError::UnsupportedWidth(17));
}

#[test]
fn singletons_are_shared() {
    let a: &Galois = &GF8;
    let b: &Galois = &GF8;
    assert!(std::ptr::eq(a, b));
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| GF16.mul(0x1234, 0x5678)))
        .collect();
    let results: Vec<u16> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
