//! Bubble sort: adjacent comparisons, one swap snapshot per inversion

use super::{running_percent, Stage, Steps, Trace};

/// Position of the two nested loops
#[derive(Debug, Default)]
pub struct BubbleSort {
    pass: usize,
    index: usize,
}

/// Bubble sort step sequence over a copy of `input`
pub fn steps(input: &[i64]) -> Steps<BubbleSort> {
    Steps::new(BubbleSort::default(), input)
}

impl Stage for BubbleSort {
    fn advance(&mut self, trace: &mut Trace) -> bool {
        let n = trace.len();
        loop {
            if self.pass >= n {
                trace.finish();
                return false;
            }
            // The inner loop runs j = 0 ..= n - pass - 2
            if self.index + 1 < n - self.pass {
                break;
            }
            self.pass += 1;
            self.index = 0;
        }

        let j = self.index;
        let sorted_boundary = n - self.pass;
        let progress = running_percent(self.pass, n);
        let (a, b) = (trace.values[j], trace.values[j + 1]);

        let compare = trace
            .snapshot(progress)
            .with_focus(j)
            .with_compare_target(j + 1)
            .with_sorted_boundary(sorted_boundary)
            .with_description(format!("Comparing {} and {}", a, b));
        trace.emit(compare);

        if a > b {
            trace.values.swap(j, j + 1);
            let swapped = trace
                .snapshot(progress)
                .with_focus(j)
                .with_compare_target(j + 1)
                .with_sorted_boundary(sorted_boundary)
                .with_description(format!("Swapping {} and {}", a, b));
            trace.emit(swapped);
        }

        self.index += 1;
        true
    }
}
