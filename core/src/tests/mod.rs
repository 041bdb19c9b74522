
const ONE_RAW: i64 = 1 << 32;

const EDGE_RAWS: [i64; 12] = [
    0,
    1,
    -1,
    ONE_RAW,
    -ONE_RAW,
    0x8000_0000,
    -0x8000_0000,
    0x7FFF_FFFF,
    0xFFFF_FFFF,
    i64::MAX,
    i64::MIN,
    i64::MIN + 1,
];

/// Edge raws followed by `count` pseudo-random raws of mixed width.
/// Deterministic for a given seed.
pub(crate) fn sample_raws(seed: u64, count: usize) -> Vec<i64> {
    let mut out = EDGE_RAWS.to_vec();
    let mut state = seed;
    for _ in 0..count {
        state = splitmix64(state);
        let bits = splitmix64(state ^ 0xa076_1d64_78bd_642f);
        // top 6 bits of the state pick how far to narrow the value
        let shift = (state >> 58) as u32;
        out.push((bits as i64) >> shift);
    }
    out
}

fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e3779b97f4a7c15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
