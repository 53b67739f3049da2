//! Seeded shuffling for the tray display order.
//!
//! Randomness is a stateless function of an explicit seed so a board
//! can be reconstructed exactly; callers pick the seed (the front-end
//! mixes the wall clock with a nonce, tests pass fixed values).

/// 32-bit splitmix finalizer. Cheap and good enough for shuffling a
/// handful of tiles.
pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

/// Uniform draw in `[0, 1)` from a seed and a per-draw salt.
fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

/// Fisher-Yates driven by the seeded stream: walk from the last index
/// down and swap with a uniformly chosen earlier-or-equal index.
pub fn fisher_yates<T>(seed: u32, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let salt = 0xC0DE_u32 + i as u32;
        let j = (rand_unit(seed, salt) * (i as f32 + 1.0)) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        for seed in 0..64u32 {
            let mut ids: Vec<u32> = (0..16).collect();
            fisher_yates(seed, &mut ids);
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..16).collect::<Vec<_>>());
        }
    }

    #[test]
    fn same_seed_same_order() {
        let mut a: Vec<u32> = (0..9).collect();
        let mut b: Vec<u32> = (0..9).collect();
        fisher_yates(7, &mut a);
        fisher_yates(7, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn seeds_do_not_all_produce_identity() {
        let identity: Vec<u32> = (0..9).collect();
        let shuffled = (0..32u32).any(|seed| {
            let mut ids = identity.clone();
            fisher_yates(seed, &mut ids);
            ids != identity
        });
        assert!(shuffled);
    }
}
