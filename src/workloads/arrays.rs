//! Boxed vs. contiguous integer arrays

use std::hint::black_box;

use crate::types::Workload;

/// One heap allocation per element, filled in index order
pub fn boxed_array(count: usize) -> Workload {
    Workload::infallible("boxed-array", move || {
        let mut values: Vec<Box<i32>> = Vec::with_capacity(count);
        for i in 0..count {
            values.push(Box::new(i as i32));
        }
        black_box(values);
    })
}

/// One contiguous allocation, filled in index order
pub fn primitive_array(count: usize) -> Workload {
    Workload::infallible("primitive-array", move || {
        let mut values = vec![0i32; count];
        for (i, slot) in values.iter_mut().enumerate() {
            *slot = i as i32;
        }
        black_box(values);
    })
}
