use proptest::prelude::*;
use sol_hd_keys::core::bip44::{DerivationPath, SolanaPath, HARDENED_OFFSET};

proptest! {
    #[test]
    fn solana_path_parses_back(account in 0u32..HARDENED_OFFSET) {
        let path = SolanaPath::new(account).to_derivation_path().unwrap();
        let text = SolanaPath::new(account).to_string();
        prop_assert_eq!(&path.to_string(), &text);

        let parsed: DerivationPath = text.parse().unwrap();
        prop_assert_eq!(parsed.indices(), path.indices());
        prop_assert_eq!(parsed.depth(), 4);
    }

    #[test]
    fn accounts_beyond_hardened_range_fail(account in HARDENED_OFFSET..=u32::MAX) {
        prop_assert!(SolanaPath::new(account).to_derivation_path().is_err());
    }

    #[test]
    fn unhardened_segment_always_rejected(segment in 0u32..HARDENED_OFFSET) {
        let text = format!("m/44'/501'/0'/{}", segment);
        prop_assert!(text.parse::<DerivationPath>().is_err());
    }
}
