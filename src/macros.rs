/// Sums `$map` over every element, on the rayon pool when `parallel` is enabled.
macro_rules! sum_if_parallel {
    ($collection:expr, $map:expr) => {{
        #[cfg(feature = "parallel")]
        let total = {
            use rayon::prelude::*;
            $collection.par_iter().map($map).sum()
        };
        #[cfg(not(feature = "parallel"))]
        let total = $collection.iter().map($map).sum();
        total
    }};
}

/// Sorts a prepared (NaN-free) sample of angles in ascending order.
macro_rules! sort_angles {
    ($collection:expr) => {
        #[cfg(feature = "parallel")]
        rayon::prelude::ParallelSliceMut::par_sort_unstable_by($collection, |a, b| {
            a.partial_cmp(b).unwrap()
        });
        #[cfg(not(feature = "parallel"))]
        $collection.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap());
    };
}
