//! Equal-width histogram rendered as text bars

/// One bucket: damage range [lower, upper) and its count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bin {
    pub lower: i64,
    pub upper: i64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    /// Bucket `samples` into `bins` equal-width bins covering [min, max]
    ///
    /// The top bin is closed so the maximum lands in it.
    pub fn new(samples: &[i64], bins: usize) -> Self {
        let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
            return Histogram { bins: Vec::new() };
        };
        let bins = bins.max(1);
        let span = max - min + 1;
        // Ceiling so the bins reach past max
        let width = ((span + bins as i64 - 1) / bins as i64).max(1);
        let bin_count = ((span + width - 1) / width) as usize;

        let mut counts = vec![0usize; bin_count];
        for &sample in samples {
            let idx = ((sample - min) / width) as usize;
            counts[idx.min(bin_count - 1)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let lower = min + i as i64 * width;
                Bin {
                    lower,
                    upper: lower + width,
                    count,
                }
            })
            .collect();
        Histogram { bins }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Render one line per bin, bars scaled so the fullest bin is `width` wide
    pub fn render(&self, width: usize) -> String {
        let peak = self.bins.iter().map(|b| b.count).max().unwrap_or(0);
        let mut out = String::new();
        for bin in &self.bins {
            let bar = if peak == 0 { 0 } else { bin.count * width / peak };
            out.push_str(&format!(
                "{:>7} - {:<7} {:>7} {}\n",
                bin.lower,
                bin.upper - 1,
                bin.count,
                "#".repeat(bar)
            ));
        }
        out
    }
}
