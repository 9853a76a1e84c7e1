//! Derivation benchmarks
//!
//! mnemonic → seed is dominated by the 2048 PBKDF2 rounds; per-account
//! SLIP-10 + Ed25519 should stay far below that.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sol_hd_keys::core::bip44::SolanaPath;
use sol_hd_keys::crypto::{mnemonic_to_seed, MnemonicValidation};
use sol_hd_keys::KeyDeriver;

const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

fn bench_mnemonic_to_seed(c: &mut Criterion) {
    c.bench_function("mnemonic_to_seed", |b| {
        b.iter(|| {
            mnemonic_to_seed(black_box(MNEMONIC), black_box(""), MnemonicValidation::Strict)
                .expect("seed derivation failed")
        });
    });
}

fn bench_account_derivation(c: &mut Criterion) {
    let seed = mnemonic_to_seed(MNEMONIC, "", MnemonicValidation::Strict).expect("seed");
    let deriver = KeyDeriver::from_seed(&seed).expect("master key");
    let path = SolanaPath::new(0).to_derivation_path().expect("path");

    c.bench_function("derive_account_keypair", |b| {
        b.iter(|| deriver.derive_path(black_box(&path)).expect("derive failed"));
    });
}

criterion_group!(benches, bench_mnemonic_to_seed, bench_account_derivation);
criterion_main!(benches);
