//! The *ranrut* procedure (Nijenhuis–Wilf): uniformly random unlabelled
//! rooted trees, and the table of their counts.

use rand::Rng;
use rand_pcg::Pcg64;

use crate::numeric::Integer;

use super::seeded_rng;

/// First values of `t_n`, the number of unlabelled rooted trees of `n`
/// vertices (OEIS A000081). Larger values are computed on demand with the
/// Nijenhuis–Wilf recurrence and appended to the runtime table.
const RN_INIT: [u64; 25] = [
    0,
    1,
    1,
    2,
    4,
    9,
    20,
    48,
    115,
    286,
    719,
    1842,
    4766,
    12486,
    32973,
    87811,
    235381,
    634847,
    1721159,
    4688676,
    12826228,
    35221832,
    97055181,
    268282855,
    743724984,
];

/// Tail of the constant table; these exceed no machine limit but are kept
/// as strings to mirror their arbitrary-precision storage.
const RN_INIT_LARGE: [&str; 6] = [
    "2067174645",
    "5759636510",
    "16083734329",
    "45007066269",
    "126186554308",
    "354426847597",
];

/// Shared state of the unlabelled random samplers: the PRNG, the
/// monotonically growing `t_n` table, and the head-vector buffer the
/// sampled trees are assembled in.
///
/// The head buffer stores, for every vertex position, the position of its
/// parent; position 0 ends up holding the root.
pub(crate) struct RanrutCore {
    pub(crate) n: usize,
    pub(crate) rng: Pcg64,
    pub(crate) rn: Vec<Integer>,
    pub(crate) head: Vec<usize>,
}

impl RanrutCore {
    /// Creates the core for trees of `n` vertices. Seed 0 draws entropy
    /// from the operating system.
    pub(crate) fn new(n: usize, seed: u64) -> Self {
        let mut core = RanrutCore {
            n: 0,
            rng: seeded_rng(seed),
            rn: initial_rn(),
            head: Vec::new(),
        };
        core.init(n, seed);
        core
    }

    /// Re-initializes after a [`clear`](Self::clear): sets the tree size,
    /// reseeds the generator and extends the count table up to `n`.
    pub(crate) fn init(&mut self, n: usize, seed: u64) {
        self.n = n;
        self.head = vec![0; n];
        if n <= 1 {
            return;
        }
        self.rng = seeded_rng(seed);
        self.ensure_rn(n);
    }

    /// Releases the count table, resetting it to the constant prefix, and
    /// drops the head buffer. [`init`](Self::init) must be called before
    /// the next use.
    pub(crate) fn clear(&mut self) {
        self.rn = initial_rn();
        self.head.clear();
    }

    /// Extends the `t` table so that `t_n` is available.
    pub(crate) fn ensure_rn(&mut self, n: usize) {
        if self.rn.len() > n {
            return;
        }

        // the recurrence of Nijenhuis and Wilf's book:
        // k * t_{k+1} = sum_d d * t_d * sum_{j >= 1} t_{k+1-jd}
        let mut k = self.rn.len() - 1;
        while k <= n + 1 {
            let mut s = Integer::zero();
            for d in 1..=k {
                let td = &self.rn[d] * (d as u64);

                let mut i = k as i64 + 1;
                let mut j = 1i64;
                while j <= k as i64 && i > 0 {
                    i -= d as i64;
                    if i > 0 {
                        s += &self.rn[i as usize] * &td;
                    }
                    j += 1;
                }
            }
            s /= k as u64;
            self.rn.push(s);
            k += 1;
        }
    }

    /// Generates a random rooted tree of `n` vertices into the head
    /// buffer.
    ///
    /// # Arguments
    /// * `lr` - Position of the root of the previously generated tree;
    ///   the new tree's root will point to it.
    /// * `nt` - Position where the new tree is to be stored.
    ///
    /// # Returns
    /// The position of the new tree's root and the first free position
    /// after it.
    ///
    /// Consumes one uniform real per recursive level with `n > 2` (inside
    /// [`choose_jd`](Self::choose_jd)).
    pub(crate) fn ranrut(&mut self, n: usize, lr: usize, nt: usize) -> (usize, usize) {
        match n {
            0 => (lr, nt),
            1 => {
                self.head[nt] = lr;
                (nt, nt + 1)
            }
            2 => {
                self.head[nt] = lr;
                self.head[nt + 1] = nt;
                (nt, nt + 2)
            }
            _ => {
                let (j, d) = self.choose_jd(n);
                debug_assert!(j > 0 && d > 0);

                // T': a random rooted tree of n - j*d vertices
                let (root_tp, store_tpp) = self.ranrut(n - j * d, lr, nt);

                // T'': a random rooted tree of d vertices, already hanging
                // off the root of T'
                let (root_tpp, mut next) = self.ranrut(d, root_tp, store_tpp);

                // j - 1 more copies of T''
                for copy in 1..j {
                    self.head[next] = root_tp;
                    for v in next + 1..next + d {
                        // translate the parent pointers of the first copy
                        self.head[v] = next + self.head[v - copy * d] - root_tpp;
                    }
                    next += d;
                }
                debug_assert!(next <= self.n);
                (root_tp, next)
            }
        }
    }

    /// Chooses the pair `(j, d)` with probability
    /// `d * t_{n-jd} * t_d / ((n-1) * t_n)`. Consumes one uniform real.
    fn choose_jd(&mut self, n: usize) -> (usize, usize) {
        self.ensure_rn(n);

        let r: f64 = self.rng.gen();
        let mut weight = (&self.rn[n] * (n as u64 - 1)).to_f64() * r;

        let mut j = 1usize;
        let mut d = 1usize;
        let mut last = (1, 1);
        while weight > 0.0 {
            if n <= j * d {
                // no subtree pattern left at this d; move on
                d += 1;
                j = 1;
                if d >= n {
                    // floating-point slack exhausted the pairs
                    return last;
                }
            } else {
                let w = (&self.rn[n - j * d] * &self.rn[d] * (d as u64)).to_f64();
                weight -= w;
                if w > 0.0 {
                    last = (j, d);
                }
                if weight > 0.0 {
                    j += 1;
                }
            }
        }
        (j, d)
    }
}

fn initial_rn() -> Vec<Integer> {
    RN_INIT
        .iter()
        .map(|&v| Integer::from(v))
        .chain(RN_INIT_LARGE.iter().map(|s| s.parse().expect("constant table")))
        .collect()
}
