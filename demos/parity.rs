use std::env;

use gfparity::gf::{LogPoly, GF8};

fn usage() -> ! {
    eprintln!(
        "Usage:
  cargo run --example parity -- <npar> <message_string> [error_index]

Example:
  cargo run --example parity -- 4 \"hello\" 2

Encodes the message over GF(2^8), flips one symbol and repairs it with the
Forney magnitude for that (known) position."
    );
    std::process::exit(2);
}

fn main() {
    let args = env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 3 {
        usage();
    }
    let npar: usize = args[0].parse().unwrap_or_else(|_| usage());
    let msg = args[1].as_bytes();
    let t: usize = match args.get(2) {
        Some(s) => s.parse().unwrap_or_else(|_| usage()),
        None => 0,
    };

    let enc = match GF8.make_encode_table(npar) {
        Ok(enc) => enc,
        Err(e) => {
            eprintln!("cannot build tables: {e}");
            std::process::exit(1);
        }
    };
    let codeword = match enc.encode(msg) {
        Ok(cw) => cw,
        Err(e) => {
            eprintln!("cannot encode: {e}");
            std::process::exit(1);
        }
    };
    if t >= codeword.len() {
        eprintln!("error index {t} is outside the {}-symbol codeword", codeword.len());
        std::process::exit(1);
    }
    let bytes: Vec<u8> = codeword.iter().map(|&s| s as u8).collect();

    println!("=== GF(2^8) parity demo ===");
    println!("npar           : {npar}");
    println!("Generator      : {}", hex::encode(enc.generator().coeffs().iter().map(|&c| c as u8).collect::<Vec<_>>()));
    println!("Codeword hex   : {}", hex::encode(&bytes));

    let mut received = bytes.clone();
    received[t] ^= 0xA5;
    let (syn, ok) = GF8.syndromes(&received, npar);
    println!("Corrupted hex  : {}", hex::encode(&received));
    println!("Syndromes      : {syn:?} (clean: {ok})");

    let n = received.len();
    let p = n - 1 - t;
    let sigma = LogPoly::new(vec![0, p as i32]);
    let omega = LogPoly::new(vec![GF8.value_to_log(syn[0])]);
    let mag = match GF8.forney(1, GF8.to_exp(p), &sigma, &omega) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("forney failed: {e}");
            std::process::exit(1);
        }
    };
    received[t] ^= mag as u8;
    println!("Magnitude      : {mag:#04x} at index {t}");

    if received == bytes {
        println!("Result         : OK (codeword restored)");
    } else {
        println!("Result         : MISMATCH");
        std::process::exit(1);
    }
}
