//! Block arithmetic for the sweep engine.

/// Layers per sweep block when none is configured: `ceil(sqrt(num_layers))`.
///
/// Block count and block length then grow at the same rate, which keeps the
/// per-block trace spans of [`crate::engine::SweepEngine`] few and evenly
/// sized for long targets.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Number of blocks of size `block_size` needed to cover `num_layers` layers.
#[inline]
pub fn block_count(num_layers: usize, block_size: usize) -> usize {
    if num_layers == 0 {
        0
    } else {
        num_layers.div_ceil(block_size)
    }
}

#[cfg(test)]
mod tests {
    use super::{block_count, default_block_size};

    #[test]
    fn short_sweeps_use_single_layer_blocks() {
        assert_eq!(default_block_size(0), 1);
        assert_eq!(default_block_size(1), 1);
    }

    #[test]
    fn block_is_the_rounded_up_root() {
        for (layers, block) in [(2, 2), (4, 2), (5, 3), (100, 10), (101, 11), (1 << 20, 1 << 10)] {
            assert_eq!(default_block_size(layers), block, "layers={layers}");
        }
    }

    #[test]
    fn blocks_cover_every_layer() {
        assert_eq!(block_count(0, 4), 0);
        assert_eq!(block_count(1, 4), 1);
        assert_eq!(block_count(8, 4), 2);
        assert_eq!(block_count(9, 4), 3);
        for t in 1..200 {
            let b = default_block_size(t);
            let n = block_count(t, b);
            assert!(n * b >= t && (n - 1) * b < t, "t={t} b={b} n={n}");
        }
    }
}
