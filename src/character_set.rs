/// Builds a `[bool; 256]` byte classification table at compile time.
///
/// Each argument is either a byte-string literal, all of whose bytes are
/// marked, or an inclusive byte range `lo..=hi`.
///
/// ```ignore
/// const DIGITS_AND_DOT: [bool; 256] = character_set!(b'0'..=b'9', b".");
/// ```
macro_rules! character_set {
    () => {{
        [false; 256]
    }};

    ($lo:literal ..= $hi:literal $(, $($rest:tt)*)?) => {{
        let mut a = character_set!($($($rest)*)?);
        let mut i = $lo as usize;
        while i <= $hi as usize {
            a[i] = true;
            i += 1;
        }
        a
    }};

    ($value:literal $(, $($rest:tt)*)?) => {{
        const A: &[u8] = $value;
        let mut a = character_set!($($($rest)*)?);
        let mut i = 0;
        while i < A.len() {
            a[A[i] as usize] = true;
            i += 1;
        }
        a
    }};
}

pub(crate) use character_set;
