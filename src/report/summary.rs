use crate::Probability;
use crate::sim::lengths::Lengths;

/// Summary is the read-only view over a merged frequency table: normalized
/// mass at each observed length, the running cumulative, and the weighted
/// mean and population standard deviation across all trials. Display prints
/// the one-line moments followed by the cumulative table.
#[derive(Debug, Clone)]
pub struct Summary {
    pmf: Vec<(usize, Probability)>,
    cdf: Vec<(usize, Probability)>,
    mean: Probability,
    std_dev: Probability,
}

impl From<&Lengths> for Summary {
    fn from(lengths: &Lengths) -> Self {
        let total = lengths.total() as Probability;
        assert!(total > 0.0, "no trials tallied");
        let mean = lengths
            .iter()
            .map(|(length, count)| length as Probability * count as Probability)
            .sum::<Probability>()
            / total;
        let variance = lengths
            .iter()
            .map(|(length, count)| (length as Probability - mean).powi(2) * count as Probability)
            .sum::<Probability>()
            / total;
        let pmf = lengths
            .iter()
            .map(|(length, count)| (length, count as Probability / total))
            .collect::<Vec<_>>();
        let mut running = 0.;
        let cdf = pmf
            .iter()
            .map(|&(length, mass)| {
                running += mass;
                (length, running)
            })
            .collect::<Vec<_>>();
        Self {
            pmf,
            cdf,
            mean,
            std_dev: variance.sqrt(),
        }
    }
}

impl Summary {
    pub fn mean(&self) -> Probability {
        self.mean
    }
    pub fn std_dev(&self) -> Probability {
        self.std_dev
    }
    /// probability mass at each observed length, ascending
    pub fn pmf(&self) -> &[(usize, Probability)] {
        &self.pmf
    }
    /// cumulative probability at each observed length, ascending
    pub fn cdf(&self) -> &[(usize, Probability)] {
        &self.cdf
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Mean and stddev {} {}", self.mean, self.std_dev)?;
        writeln!(f)?;
        writeln!(f, "Observed cumulative probability distribution")?;
        writeln!(f)?;
        writeln!(f, "calls,cumprobability")?;
        for &(length, cumulative) in &self.cdf {
            writeln!(f, "{}, {:.4}", length, cumulative)?;
        }
        Ok(())
    }
}
