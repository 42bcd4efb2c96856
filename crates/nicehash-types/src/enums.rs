//! Algorithm, Location and OrderType registries

use crate::table::code_table;

code_table! {
    /// Hashing algorithms traded on the marketplace
    ///
    /// The table is append-only: new algorithms get new codes and existing
    /// codes are never renumbered.
    pub enum Algorithm ("algorithm") {
        Scrypt = 0 => "scrypt",
        Sha256 = 1 => "sha256",
        ScryptNf = 2 => "scryptnf",
        X11 = 3 => "x11",
        X13 = 4 => "x13",
        Keccak = 5 => "keccak",
        X15 = 6 => "x15",
        Nist5 = 7 => "nist5",
        NeoScrypt = 8 => "neoscrypt",
        Lyra2Re = 9 => "lyra2re",
        WhirlpoolX = 10 => "whirlpoolx",
        Qubit = 11 => "qubit",
        Quark = 12 => "quark",
        Axiom = 13 => "axiom",
        Lyra2ReV2 = 14 => "lyra2rev2",
        ScryptJaneNf16 = 15 => "scryptjanenf16",
        Blake256r8 = 16 => "blake256r8",
        Blake256r14 = 17 => "blake256r14",
        Blake256r8vnl = 18 => "blake256r8vnl",
        Hodl = 19 => "hodl",
        DaggerHashimoto = 20 => "daggerhashimoto",
        Decred = 21 => "decred",
        CryptoNight = 22 => "cryptonight",
        Lbry = 23 => "lbry",
        Equihash = 24 => "equihash",
        Pascal = 25 => "pascal",
        X11Gost = 26 => "x11gost",
        Sia = 27 => "sia",
        Blake2s = 28 => "blake2s",
        Skunk = 29 => "skunk",
        CryptoNightV7 = 30 => "cryptonightv7",
    }
}

code_table! {
    /// Marketplace region
    pub enum Location ("location") {
        /// NiceHash
        Europe = 0 => "europe",
        /// WestHash
        Usa = 1 => "usa",
    }
}

code_table! {
    /// Order type
    ///
    /// Listed for completeness; no endpoint of this API version takes it.
    pub enum OrderType ("order type") {
        /// Standard order
        Standard = 0 => "standard",
        /// Fixed-price order
        Fixed = 1 => "fixed",
    }
}

/// Canonical algorithm name for a code, `None` if the code is not in the table
pub fn algorithm_name(code: u8) -> Option<&'static str> {
    Algorithm::from_code(code).map(Algorithm::name)
}

/// Algorithm code for a canonical name, `None` if no entry matches exactly
pub fn algorithm_code(name: &str) -> Option<u8> {
    Algorithm::from_name(name).map(Algorithm::code)
}

/// Canonical location name for a code
pub fn location_name(code: u8) -> Option<&'static str> {
    Location::from_code(code).map(Location::name)
}

/// Location code for a canonical name
pub fn location_code(name: &str) -> Option<u8> {
    Location::from_name(name).map(Location::code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TypesError;

    #[test]
    fn test_algorithm_table_is_dense() {
        assert_eq!(Algorithm::ALL.len(), 31);
        for (i, algo) in Algorithm::ALL.iter().enumerate() {
            assert_eq!(algo.code() as usize, i);
        }
    }

    #[test]
    fn test_algorithm_lookups_are_inverse() {
        for algo in Algorithm::ALL {
            let name = algorithm_name(algo.code()).unwrap();
            assert_eq!(algorithm_code(name), Some(algo.code()));
        }
    }

    #[test]
    fn test_algorithm_names_are_lowercase() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.name(), algo.name().to_lowercase());
        }
    }

    #[test]
    fn test_unknown_algorithm() {
        assert_eq!(algorithm_name(123), None);
        assert_eq!(algorithm_name(31), None);
        assert_eq!(algorithm_code("not-a-real-algo"), None);
        // Exact match only
        assert_eq!(algorithm_code("X11"), None);
        assert_eq!(algorithm_code("x11"), Some(3));
    }

    #[test]
    fn test_known_entries() {
        assert_eq!(algorithm_name(20), Some("daggerhashimoto"));
        assert_eq!(algorithm_code("equihash"), Some(24));
        assert_eq!(algorithm_name(30), Some("cryptonightv7"));
        assert_eq!(Algorithm::X11.code(), 3);
    }

    #[test]
    fn test_locations() {
        assert_eq!(location_name(0), Some("europe"));
        assert_eq!(location_name(1), Some("usa"));
        assert_eq!(location_name(2), None);
        assert_eq!(location_code("usa"), Some(1));
        assert_eq!(Location::ALL, &[Location::Europe, Location::Usa]);
    }

    #[test]
    fn test_order_types() {
        assert_eq!(OrderType::Standard.code(), 0);
        assert_eq!(OrderType::Fixed.name(), "fixed");
        assert_eq!(OrderType::from_code(1), Some(OrderType::Fixed));
    }

    #[test]
    fn test_parse_and_display() {
        let algo: Algorithm = "sha256".parse().unwrap();
        assert_eq!(algo, Algorithm::Sha256);
        assert_eq!(algo.to_string(), "sha256");

        let err = "SHA256".parse::<Algorithm>().unwrap_err();
        assert!(matches!(err, TypesError::UnknownName { kind: "algorithm", .. }));
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(Location::try_from(1u8), Ok(Location::Usa));
        assert_eq!(
            Algorithm::try_from(200u8),
            Err(TypesError::UnknownCode { kind: "algorithm", code: 200 })
        );
        assert_eq!(u8::from(Algorithm::Sia), 27);
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Algorithm::DaggerHashimoto).unwrap();
        assert_eq!(json, "20");

        let parsed: Location = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, Location::Usa);

        assert!(serde_json::from_str::<Algorithm>("99").is_err());
    }
}
