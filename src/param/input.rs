use super::shared::ScalarCell;

/// Per-sample read of one parameter's target.
///
/// The block driver is generic over three of these, so choosing between a
/// signal and a scalar happens once per block, not once per sample.
pub trait ParamInput {
    fn at(&self, index: usize) -> f64;
}

/// Reads `signal[index]`. The slice is already trimmed to the block length.
#[derive(Debug, Clone, Copy)]
pub struct SignalInput<'a>(pub &'a [f64]);

impl ParamInput for SignalInput<'_> {
    #[inline(always)]
    fn at(&self, index: usize) -> f64 {
        self.0[index]
    }
}

/// Reads the shared scalar cell on every sample, so a control-thread write
/// lands mid-block.
#[derive(Debug, Clone, Copy)]
pub struct ScalarInput<'a>(pub &'a ScalarCell);

impl ParamInput for ScalarInput<'_> {
    #[inline(always)]
    fn at(&self, _index: usize) -> f64 {
        self.0.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_input_indexes() {
        let data = [0.1, 0.2, 0.3];
        let input = SignalInput(&data);
        assert_eq!(input.at(0), 0.1);
        assert_eq!(input.at(2), 0.3);
    }

    #[test]
    fn test_scalar_input_tracks_cell() {
        let cell = ScalarCell::new(0.5);
        let input = ScalarInput(&cell);
        assert_eq!(input.at(0), 0.5);
        cell.store(0.75);
        assert_eq!(input.at(100), 0.75);
    }
}
