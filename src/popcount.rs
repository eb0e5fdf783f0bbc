#[cfg(target_arch = "x86_64")]
use crate::utils::{has_popcnt, popcnt_u64};

pub type Candidate = u64;

pub const WIDTH: u32 = Candidate::BITS;

#[inline(always)]
pub fn count_ref(x: Candidate) -> u32 {
    x.count_ones()
}

/// Adds the low bit and shifts right until nothing is left, so a value whose
/// highest set bit is `k` takes `k + 1` rounds.
pub fn count_shift(x: Candidate) -> u32 {
    count_shift_rounds(x).0
}

/// Returns the count together with the number of loop rounds taken.
fn count_shift_rounds(x: Candidate) -> (u32, u32) {
    let mut rest = x;
    let mut res = 0;
    let mut rounds = 0;
    while rest != 0 {
        res += (rest & 1) as u32;
        rest >>= 1;
        rounds += 1;
    }
    (res, rounds)
}

/// Walks a one-bit mask across all `WIDTH` positions.
pub fn count_mask_walk(x: Candidate) -> u32 {
    let mut res = 0;
    let mut mask: Candidate = 1;
    while mask != 0 {
        res += (x & mask != 0) as u32;
        mask <<= 1;
    }
    res
}

pub fn count_swar(x: Candidate) -> u32 {
    const M1: u64 = 0x5555555555555555;
    const M2: u64 = 0x3333333333333333;
    const M4: u64 = 0x0F0F0F0F0F0F0F0F;
    const H01: u64 = 0x0101010101010101;

    let mut v = x;
    v -= (v >> 1) & M1;
    v = (v & M2) + ((v >> 2) & M2);
    v = (v + (v >> 4)) & M4;
    (v.wrapping_mul(H01) >> 56) as u32
}

/// Hardware `popcnt`. Returns `None` when the CPU lacks the instruction.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn count_x86(x: Candidate) -> Option<u32> {
    if !has_popcnt() {
        return None;
    }
    // SAFETY: support for `popcnt` was checked just above.
    Some(unsafe { popcnt_u64(x) } as u32)
}

/// Counts the set bits of `x`, in hardware when the CPU allows it.
#[inline]
pub fn count(x: Candidate) -> u32 {
    #[cfg(target_arch = "x86_64")]
    if has_popcnt() {
        // SAFETY: guarded by the runtime feature check.
        return unsafe { popcnt_u64(x) } as u32;
    }
    count_ref(x)
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn all_counters(x: Candidate) -> Vec<u32> {
        let mut res = vec![count_shift(x), count_mask_walk(x), count_swar(x), count(x)];
        #[cfg(target_arch = "x86_64")]
        if let Some(hw) = count_x86(x) {
            res.push(hw);
        }
        res
    }

    #[test]
    fn count_zero() {
        assert!(all_counters(0).into_iter().all(|c| c == 0));
    }

    #[test]
    fn count_one() {
        assert!(all_counters(1).into_iter().all(|c| c == 1));
    }

    #[test]
    fn count_eleven() {
        assert!(all_counters(0b1011).into_iter().all(|c| c == 3));
    }

    #[test]
    fn count_low_32_bits() {
        assert!(all_counters(0xFFFF_FFFF).into_iter().all(|c| c == 32));
    }

    #[test]
    fn count_all_ones() {
        assert!(all_counters(Candidate::MAX).into_iter().all(|c| c == WIDTH));
    }

    #[test]
    fn count_high_bit_only() {
        assert!(all_counters(1 << (WIDTH - 1)).into_iter().all(|c| c == 1));
    }

    #[test]
    fn random_words_no_disagreement() {
        let mut buf = [0_u64; 2048];
        rand::fill(&mut buf[..]);
        for x in buf {
            let expected = count_ref(x);
            assert!(all_counters(x).into_iter().all(|c| c == expected), "{x:#x}");
        }
    }

    #[test]
    fn count_shift_stops_after_highest_bit() {
        assert_eq!(count_shift_rounds(0), (0, 0));
        assert_eq!(count_shift_rounds(1), (1, 1));
        assert_eq!(count_shift_rounds(0b1011), (3, 4));
        assert_eq!(count_shift_rounds(1 << 40), (1, 41));
        assert_eq!(count_shift_rounds(Candidate::MAX), (WIDTH, WIDTH));
    }

    quickcheck! {
        fn count_shift_rounds_match_bit_length(x: u64) -> bool {
            count_shift_rounds(x).1 == WIDTH - x.leading_zeros()
        }

        fn all_impls_equal_reference(x: u64) -> bool {
            let ref_ = count_ref(x);
            all_counters(x).into_iter().all(|c| c == ref_)
        }

        fn low_bit_recurrence(x: u64) -> bool {
            count(x) == count(x >> 1) + (x & 1) as u32
        }

        fn or_is_bounded(x: u64, y: u64) -> bool {
            let both = count(x | y);
            both >= count(x).max(count(y)) && both <= count(x) + count(y)
        }

        fn bit_permutations_keep_count(x: u64, r: u32) -> bool {
            let c = count(x);
            c == count(x.reverse_bits())
                && c == count(x.swap_bytes())
                && c == count(x.rotate_left(r % WIDTH))
        }

        fn never_exceeds_width(x: u64) -> bool {
            count(x) <= WIDTH
        }
    }
}
