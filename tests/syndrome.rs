use gfparity::gf::{Galois, GF16, GF8};
use gfparity::GfError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sample_block(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen()).collect()
}

#[test]
fn systematic_codeword_has_zero_syndromes() {
    let npar = 4;
    let enc = GF8.make_encode_table(npar).unwrap();
    let data = sample_block(64, 1);
    let codeword = enc.encode(&data).unwrap();

    let mut syn = [0xFFFFu16; 4];
    assert!(GF8.calc_syndrome(&codeword, &mut syn), "syndromes: {syn:?}");
    assert_eq!(syn, [0; 4]);

    // byte-wide input takes the same path
    let bytes: Vec<u8> = codeword.iter().map(|&s| s as u8).collect();
    assert!(GF8.calc_syndrome(&bytes, &mut syn));
}

#[test]
fn gf16_codeword_has_zero_syndromes() {
    let mut rng = StdRng::seed_from_u64(2);
    let data: Vec<u16> = (0..4000).map(|_| rng.gen()).collect();
    let enc = GF16.make_encode_table(8).unwrap();
    let codeword = enc.encode(&data).unwrap();
    let (syn, ok) = GF16.syndromes(&codeword, 8);
    assert!(ok);
    assert_eq!(syn, vec![0; 8]);
}

#[test]
fn single_error_gives_geometric_syndromes() {
    let npar = 6;
    let enc = GF8.make_encode_table(npar).unwrap();
    let mut codeword = enc.encode(&sample_block(40, 3)).unwrap();
    let n = codeword.len();
    let (t, e) = (11usize, 0x5Au16);
    codeword[t] ^= e;

    let (syn, ok) = GF8.syndromes(&codeword, npar);
    assert!(!ok);
    // S_i = E * α^(i * (n - 1 - t))
    let p = n - 1 - t;
    for (i, &s) in syn.iter().enumerate() {
        assert_eq!(s, GF8.mul(e, GF8.pow_alpha(i * p)), "syndrome {i}");
    }
}

#[test]
fn table_syndromes_match_horner() {
    let mut rng = StdRng::seed_from_u64(4);
    for (gf, npar) in [(&*GF8, 10usize), (&*GF16, 12)] {
        let enc = gf.make_encode_table(npar).unwrap();
        let dec = gf.make_decode_table(npar).unwrap();
        let data: Vec<u16> = (0..200).map(|_| rng.gen_range(0..=gf.max()) as u16).collect();
        let mut codeword = enc.encode(&data).unwrap();

        let mut fast = vec![0u16; npar];
        assert!(dec.syndromes(&codeword, &mut fast).unwrap());

        codeword[7] ^= 1;
        codeword[150] ^= gf.max() as u16;
        let mut slow = vec![0u16; npar];
        let slow_ok = gf.calc_syndrome(&codeword, &mut slow);
        let fast_ok = dec.syndromes(&codeword, &mut fast).unwrap();
        assert!(!slow_ok && !fast_ok);
        assert_eq!(fast, slow);
    }
}

#[test]
fn syndromes_use_sym_start() {
    let gf = Galois::new(0x1D, 8).unwrap().with_sym_start(1);
    let enc = gf.make_encode_table(4).unwrap();
    let dec = gf.make_decode_table(4).unwrap();
    let codeword = enc.encode(&sample_block(30, 5)).unwrap();

    let (_, ok) = gf.syndromes(&codeword, 4);
    assert!(ok);
    let mut syn = [0u16; 4];
    assert!(dec.syndromes(&codeword, &mut syn).unwrap());
    assert_eq!(syn, [0; 4]);
}

#[test]
fn empty_block_is_clean() {
    let (syn, ok) = GF8.syndromes::<u8>(&[], 3);
    assert!(ok);
    assert_eq!(syn, vec![0, 0, 0]);
}

#[test]
fn table_syndromes_check_buffer() {
    let dec = GF8.make_decode_table(4).unwrap();
    let mut syn = [0u16; 2];
    assert_eq!(
        dec.syndromes(&[1u8, 2, 3], &mut syn),
        Err(GfError::BufferTooShort { name: "syndrome buffer", expected: 4, got: 2 })
    );
}

#[test]
fn table_syndromes_reject_symbols_outside_the_field() {
    let dec = GF8.make_decode_table(2).unwrap();
    let mut syn = [0u16; 2];
    assert_eq!(
        dec.syndromes(&[0x1FFu16, 1], &mut syn),
        Err(GfError::SymbolOutOfRange { index: 0, value: 0x1FF, max: 255 })
    );
    assert!(dec.syndromes(&[0xFFu16, 1], &mut syn).is_ok());
}

#[test]
#[should_panic]
fn horner_syndromes_panic_on_symbols_outside_the_field() {
    GF8.syndromes(&[0x1FFu16, 1], 2);
}
