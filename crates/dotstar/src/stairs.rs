// Stair-climbing counters
// Three renditions of the same recurrence, counting the distinct 1-or-2-step
// walks up a staircase of n steps: ways(n) = ways(n-1) + ways(n-2), with
// ways(0) = ways(1) = 1.
//
// `climb_stairs` is the canonical version; the other two exist to compare
// recursion strategies and must always agree with it.
// Counts are exact for n <= 92; beyond that the u64 overflows.

/// Iterative, O(1) space
pub fn climb_stairs(n: u32) -> u64 {
    let mut last: u64 = 0;
    let mut current: u64 = 1;
    for _ in 0..n {
        let next = last + current;
        last = current;
        current = next;
    }
    current
}

/// Memoized recursion over a zero-filled table (0 doubles as "unsolved")
pub fn climb_stairs_memo(n: u32) -> u64 {
    let mut memo = vec![0u64; n as usize + 1];
    fill_memo(n as usize, &mut memo)
}

fn fill_memo(n: usize, memo: &mut [u64]) -> u64 {
    if memo[n] != 0 {
        return memo[n];
    }
    let ways = if n > 1 {
        fill_memo(n - 1, memo) + fill_memo(n - 2, memo)
    } else {
        1
    };
    memo[n] = ways;
    ways
}

/// Tail-recursive accumulator
pub fn climb_stairs_accum(n: u32) -> u64 {
    accum(n, 0, 1)
}

fn accum(n: u32, last: u64, current: u64) -> u64 {
    if n > 1 {
        accum(n - 1, current, last + current)
    } else {
        last + current
    }
}
