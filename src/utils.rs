use std::arch::asm;

/// Raw `popcnt`. The caller must make sure the CPU supports it.
#[inline(always)]
pub unsafe fn popcnt_u64(x: u64) -> u64 {
    let res;
    unsafe {
        asm!(
            "popcnt {out}, {x}",
            x = in(reg) x,
            out = out(reg) res,
            options(pure, nomem, nostack),
        );
    };
    res
}

#[inline]
pub fn has_popcnt() -> bool {
    std::arch::is_x86_feature_detected!("popcnt")
}

