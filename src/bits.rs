//! Single-bit access over the integer masks used throughout the header.

/// Integer masks addressable one bit at a time.
pub trait BitMask: Copy {
    fn bit(self, pos: u32) -> bool;
    fn with_bit(self, pos: u32, value: bool) -> Self;
}

macro_rules! impl_bit_mask {
    ($($ty:ty),*) => {
        $(
            impl BitMask for $ty {
                fn bit(self, pos: u32) -> bool {
                    (self >> pos) & 1 == 1
                }

                fn with_bit(self, pos: u32, value: bool) -> Self {
                    if value {
                        self | (1 << pos)
                    } else {
                        self & !(1 << pos)
                    }
                }
            }
        )*
    };
}

impl_bit_mask!(u8, u16, u32);

/// Read bit `pos` of `mask`.
pub fn get_bit<T: BitMask>(mask: T, pos: u32) -> bool {
    mask.bit(pos)
}

/// Set or clear bit `pos` of `mask`, leaving every other bit untouched.
pub fn set_bit<T: BitMask>(mask: &mut T, pos: u32, value: bool) {
    *mask = mask.with_bit(pos, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bit() {
        assert!(get_bit(0x10u8, 4));
        assert!(!get_bit(0x10u8, 3));
        assert!(get_bit(0x8000_0000u32, 31));
    }

    #[test]
    fn test_set_then_get() {
        for pos in 0..32 {
            let mut mask = 0xa5a5_a5a5u32;
            set_bit(&mut mask, pos, true);
            assert!(get_bit(mask, pos));
            set_bit(&mut mask, pos, false);
            assert!(!get_bit(mask, pos));
        }
    }

    #[test]
    fn test_set_leaves_other_bits() {
        let original = 0x0000_486eu32;
        for pos in 0..32 {
            let mut mask = original;
            set_bit(&mut mask, pos, !get_bit(original, pos));
            assert_eq!(mask ^ original, 1 << pos);
        }
    }

    #[test]
    fn test_set_clear_restores_original() {
        let original = 0x0000_482fu32;
        let mut mask = original;
        set_bit(&mut mask, 4, true);
        set_bit(&mut mask, 4, false);
        assert_eq!(mask, original);
    }

    #[test]
    fn test_u16_mask() {
        let mut flags = 0x00a0u16;
        set_bit(&mut flags, 8, true);
        assert_eq!(flags, 0x01a0);
        set_bit(&mut flags, 7, false);
        assert_eq!(flags, 0x0120);
    }
}
