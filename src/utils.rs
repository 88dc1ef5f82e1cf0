use error_chain::bail;
use fnv::FnvHasher;
use std::{
    collections::HashMap,
    hash::{BuildHasherDefault, Hash}
};

use crate::errors::*;

pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Construct a hash map with the specified capacity. FNV is much faster than the default
/// hasher on short keys such as cell indices, though less robust against key collision attacks.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashMap::<K, V, _>::with_capacity_and_hasher(capacity, fnv)
}

/// Reject NaN and anything outside [0, 1].
pub fn check_probability(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        bail!(ErrorKind::InvalidProbability(name, value))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::f64;

    #[test]
    fn probabilities() {
        assert_eq!(check_probability("p", 0.0).unwrap(), 0.0);
        assert_eq!(check_probability("p", 1.0).unwrap(), 1.0);
        assert!(check_probability("p", -0.1).is_err());
        assert!(check_probability("p", 1.5).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
    }
}
