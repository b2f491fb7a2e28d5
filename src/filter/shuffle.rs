//! Byte and bit shuffle transforms applied ahead of compression.
//!
//! Both transforms regroup an element stream so that same-significance bytes
//! (or bits) become adjacent, which is what makes them compress well. They
//! are exact inverses of their unshuffle counterparts for any buffer length;
//! bit shuffle processes the largest multiple-of-8 element prefix and copies
//! the leftovers verbatim.

/// Byte-wise shuffle: groups byte `j` of every element together.
///
/// Trailing bytes that do not form a whole element are copied as-is.
pub fn byte_shuffle(typesize: usize, src: &[u8], dest: &mut [u8]) {
    let nbytes = src.len();
    let quot = nbytes / typesize;
    let rem = nbytes % typesize;

    for j in 0..typesize {
        for i in 0..quot {
            dest[j * quot + i] = src[i * typesize + j];
        }
    }
    if rem > 0 {
        let start = nbytes - rem;
        dest[start..].copy_from_slice(&src[start..]);
    }
}

/// Inverse of [`byte_shuffle`].
pub fn byte_unshuffle(typesize: usize, src: &[u8], dest: &mut [u8]) {
    let nbytes = src.len();
    let quot = nbytes / typesize;
    let rem = nbytes % typesize;

    for i in 0..quot {
        for j in 0..typesize {
            dest[i * typesize + j] = src[j * quot + i];
        }
    }
    if rem > 0 {
        let start = nbytes - rem;
        dest[start..].copy_from_slice(&src[start..]);
    }
}

/// Transposes an 8x8 bit matrix packed into a `u64`.
fn bit_transpose_8x8(mut x: u64) -> u64 {
    let mut t;
    t = (x ^ (x >> 7)) & 0x00AA00AA00AA00AA;
    x = x ^ t ^ (t << 7);
    t = (x ^ (x >> 14)) & 0x0000CCCC0000CCCC;
    x = x ^ t ^ (t << 14);
    t = (x ^ (x >> 28)) & 0x00000000F0F0F0F0;
    x = x ^ t ^ (t << 28);
    x
}

/// Full transpose of a `size` x `elem_size` byte matrix:
/// `dest[j * size + i] = src[i * elem_size + j]`.
fn transpose_byte_elem(src: &[u8], dest: &mut [u8], size: usize, elem_size: usize) {
    for i in 0..size {
        for j in 0..elem_size {
            dest[j * size + i] = src[i * elem_size + j];
        }
    }
}

/// Transposes bits within each group of 8 consecutive bytes. `src.len()` must
/// be a multiple of 8; output rows are `nbytes / 8` wide, least significant
/// bit plane first.
fn transpose_bit_byte(src: &[u8], dest: &mut [u8], nbytes: usize) {
    let bitrow = nbytes / 8;
    for i in 0..bitrow {
        let mut x = u64::from_le_bytes(src[i * 8..i * 8 + 8].try_into().unwrap());
        x = bit_transpose_8x8(x);
        for k in 0..8 {
            dest[k * bitrow + i] = x as u8;
            x >>= 8;
        }
    }
}

/// Inverse of [`transpose_bit_byte`].
fn untranspose_bit_byte(src: &[u8], dest: &mut [u8], nbytes: usize) {
    let bitrow = nbytes / 8;
    for i in 0..bitrow {
        let mut x: u64 = 0;
        for k in 0..8 {
            x |= (src[k * bitrow + i] as u64) << (k * 8);
        }
        x = bit_transpose_8x8(x);
        dest[i * 8..i * 8 + 8].copy_from_slice(&x.to_le_bytes());
    }
}

/// Regroups the 8 bit planes into per-element rows of `size / 8` bytes.
fn transpose_bitrow_eight(src: &[u8], dest: &mut [u8], size: usize, elem_size: usize) {
    let block = size / 8;
    for i in 0..8 {
        for j in 0..elem_size {
            let s = (i * elem_size + j) * block;
            let d = (j * 8 + i) * block;
            dest[d..d + block].copy_from_slice(&src[s..s + block]);
        }
    }
}

/// Inverse of [`transpose_bitrow_eight`].
fn untranspose_bitrow_eight(src: &[u8], dest: &mut [u8], size: usize, elem_size: usize) {
    let block = size / 8;
    for i in 0..elem_size {
        for j in 0..8 {
            let s = (i * 8 + j) * block;
            let d = (j * elem_size + i) * block;
            dest[d..d + block].copy_from_slice(&src[s..s + block]);
        }
    }
}

/// Bit-wise shuffle: groups bit `b` of every element together.
///
/// Only whole groups of 8 elements can be bit-transposed; the tail beyond the
/// largest multiple-of-8 element count is copied verbatim, as is everything
/// when fewer than 8 whole elements fit in the buffer.
pub fn bit_shuffle(typesize: usize, src: &[u8], dest: &mut [u8]) {
    let nbytes = src.len();
    let mut size = nbytes / typesize;
    size -= size % 8;

    let head = size * typesize;
    if size > 0 {
        let mut tmp = vec![0u8; head];
        transpose_byte_elem(&src[..head], &mut dest[..head], size, typesize);
        transpose_bit_byte(&dest[..head], &mut tmp, head);
        transpose_bitrow_eight(&tmp, &mut dest[..head], size, typesize);
    }
    dest[head..].copy_from_slice(&src[head..]);
}

/// Inverse of [`bit_shuffle`].
pub fn bit_unshuffle(typesize: usize, src: &[u8], dest: &mut [u8]) {
    let nbytes = src.len();
    let mut size = nbytes / typesize;
    size -= size % 8;

    let head = size * typesize;
    if size > 0 {
        let mut tmp = vec![0u8; head];
        let mut tmp2 = vec![0u8; head];
        untranspose_bitrow_eight(&src[..head], &mut tmp, size, typesize);
        untranspose_bit_byte(&tmp, &mut tmp2, head);
        // Transposing with swapped dimensions undoes transpose_byte_elem.
        transpose_byte_elem(&tmp2, &mut dest[..head], typesize, size);
    }
    dest[head..].copy_from_slice(&src[head..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn byte_shuffle_roundtrip() {
        for &(typesize, n) in &[(4usize, 512usize), (8, 1000), (3, 100), (5, 17)] {
            let src = pattern(n);
            let mut shuffled = vec![0u8; n];
            let mut recovered = vec![0u8; n];
            byte_shuffle(typesize, &src, &mut shuffled);
            byte_unshuffle(typesize, &shuffled, &mut recovered);
            assert_eq!(src, recovered, "typesize={typesize} n={n}");
        }
    }

    #[test]
    fn byte_shuffle_groups_lanes() {
        // Two 4-byte elements: lane k of both elements becomes adjacent.
        let src = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let mut dest = [0u8; 8];
        byte_shuffle(4, &src, &mut dest);
        assert_eq!(dest, [1, 5, 2, 6, 3, 7, 4, 8]);
    }

    #[test]
    fn byte_shuffle_typesize_one_is_identity() {
        let src = pattern(64);
        let mut dest = vec![0u8; 64];
        byte_shuffle(1, &src, &mut dest);
        assert_eq!(src, dest);
    }

    #[test]
    fn bit_shuffle_roundtrip() {
        for &(typesize, n) in &[
            (4usize, 512usize),
            (8, 8000),
            (2, 30),  // 15 elements, leftover tail of 7
            (4, 20),  // fewer than 8 elements, pure copy
            (1, 129), // leftover single byte
        ] {
            let src = pattern(n);
            let mut shuffled = vec![0u8; n];
            let mut recovered = vec![0u8; n];
            bit_shuffle(typesize, &src, &mut shuffled);
            bit_unshuffle(typesize, &shuffled, &mut recovered);
            assert_eq!(src, recovered, "typesize={typesize} n={n}");
        }
    }

    #[test]
    fn bit_shuffle_packs_bit_planes() {
        // 8 one-byte elements, each 0x01: plane 0 collapses to a full byte.
        let src = [1u8; 8];
        let mut dest = [0u8; 8];
        bit_shuffle(1, &src, &mut dest);
        assert_eq!(dest, [0xFF, 0, 0, 0, 0, 0, 0, 0]);
    }
}
