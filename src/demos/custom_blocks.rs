// Pattern: Collections Built from a Brace List
// `sorted![...]` builds a Sorter, which keeps its elements ordered and
// converts into a plain Vec.

use crate::console::Console;
use itertools::Itertools;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sorter {
    elements: Vec<i32>,
}

impl Sorter {
    pub fn elements(&self) -> &[i32] {
        &self.elements
    }
}

impl FromIterator<i32> for Sorter {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut elements: Vec<i32> = iter.into_iter().collect();
        elements.sort_unstable();
        Self { elements }
    }
}

impl From<Sorter> for Vec<i32> {
    fn from(sorter: Sorter) -> Self {
        sorter.elements
    }
}

impl fmt::Display for Sorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sorted {{ {} }}", self.elements.iter().join(" "))
    }
}

macro_rules! sorted {
    ($($x:expr),* $(,)?) => {
        [$($x),*].into_iter().collect::<Sorter>()
    };
}

pub fn run(console: &Console) -> anyhow::Result<()> {
    console.heading("Custom blocks")?;
    say!(console, "{}", sorted![43, 234, 4235, 45, 6, 56, 5654, 654, 654]);

    let block: Vec<i32> = sorted![343, 4, 324, 3, 343, 43, 434, 34, 3, 355].into();
    say!(console, "{}", block.iter().join(" "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_display() {
        let s = sorted![3, 1, 2];
        assert_eq!(s.elements(), &[1, 2, 3]);
        assert_eq!(s.to_string(), "Sorted { 1 2 3 }");
    }

    #[test]
    fn test_into_vec_keeps_duplicates() {
        let v: Vec<i32> = sorted![5, 5, 1].into();
        assert_eq!(v, vec![1, 5, 5]);
    }

    #[test]
    fn test_empty() {
        let s: Sorter = std::iter::empty().collect();
        assert_eq!(s.to_string(), "Sorted {  }");
    }
}
