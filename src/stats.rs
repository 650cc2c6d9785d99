//! Per-heap step-count statistics.
//!
//! The driver feeds [`FibonacciHeap::last_operation_steps`](crate::FibonacciHeap::last_operation_steps)
//! of every *successful* decrease-key and delete-minimum into an
//! accumulator and emits one summary line per heap instance:
//!
//! ```text
//! <nodeCount> <meanDecreaseKeySteps> <maxDecreaseKeySteps> <meanDeleteMinSteps> <maxDeleteMinSteps>
//! ```

use std::fmt;

/// Running count/sum/max over one family of operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepStats {
    count: u64,
    total: u64,
    max: u64,
}

impl StepStats {
    pub fn record(&mut self, steps: usize) {
        let steps = steps as u64;
        self.count += 1;
        self.total += steps;
        self.max = self.max.max(steps);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Mean steps per recorded operation; 0 when nothing was recorded.
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }
}

/// Statistics of one heap instance between two `#` commands.
#[derive(Debug, Clone)]
pub struct HeapStats {
    declared_nodes: usize,
    decrease_key: StepStats,
    delete_min: StepStats,
}

impl HeapStats {
    /// `declared_nodes` is the size announced by the `#` command.
    pub fn new(declared_nodes: usize) -> Self {
        Self {
            declared_nodes,
            decrease_key: StepStats::default(),
            delete_min: StepStats::default(),
        }
    }

    pub fn record_decrease_key(&mut self, steps: usize) {
        self.decrease_key.record(steps);
    }

    pub fn record_delete_min(&mut self, steps: usize) {
        self.delete_min.record(steps);
    }

    pub fn decrease_key(&self) -> &StepStats {
        &self.decrease_key
    }

    pub fn delete_min(&self) -> &StepStats {
        &self.delete_min
    }
}

impl fmt::Display for HeapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.declared_nodes,
            self.decrease_key.mean(),
            self.decrease_key.max(),
            self.delete_min.mean(),
            self.delete_min.max()
        )
    }
}
